//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use todo_api::Trace;
#[cfg(debug_assertions)]
use todo_api::doc::ApiDoc;
use todo_api::domain::ports::{TodoRepository, UserRepository};
use todo_api::domain::{RuleValidator, TodoService, UserService, Validator};
use todo_api::inbound::http::{HttpState, configure_v1};
use todo_api::outbound::persistence::{DbPool, DieselTodoRepository, DieselUserRepository};

/// Wire the resource operations to the given repositories.
pub fn build_http_state(
    users: Arc<dyn UserRepository>,
    todos: Arc<dyn TodoRepository>,
) -> HttpState {
    let validator: Arc<dyn Validator> = Arc::new(RuleValidator);
    HttpState::new(
        Arc::new(UserService::new(users, todos.clone(), validator.clone())),
        Arc::new(TodoService::new(todos, validator)),
    )
}

fn diesel_http_state(pool: &DbPool) -> HttpState {
    build_http_state(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselTodoRepository::new(pool.clone())),
    )
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_v1);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from `config`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(diesel_http_state(&config.db_pool));
    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use rstest::rstest;
    use todo_api::middleware::trace::TRACE_ID_HEADER;
    use todo_api::test_support::InMemoryStore;

    #[rstest]
    #[actix_rt::test]
    async fn app_serves_v1_routes_with_trace_header() {
        let store = Arc::new(InMemoryStore::new());
        let state = web::Data::new(build_http_state(store.clone(), store));
        let app = test::init_service(build_app(state)).await;

        let req = test::TestRequest::get().uri("/v1/user").to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
    }
}
