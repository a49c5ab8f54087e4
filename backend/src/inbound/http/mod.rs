//! HTTP inbound adapter exposing the versioned REST endpoints.

pub mod error;
pub mod json;
pub mod path;
pub mod schemas;
pub mod state;
pub mod todos;
pub mod users;

use actix_web::web;

pub use error::ApiResult;
pub use state::HttpState;

/// Register the `/v1` resources and their extractor settings.
///
/// The caller provides [`HttpState`] as application data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use todo_api::inbound::http::configure_v1;
///
/// let app = App::new().configure(configure_v1);
/// ```
pub fn configure_v1(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json::json_config())
        .app_data(json::query_config())
        .service(
            web::scope("/v1/user")
                .service(users::create_user)
                .service(users::list_users)
                .service(users::update_user)
                .service(users::delete_user)
                .service(users::list_user_todos),
        )
        .service(
            web::scope("/v1/todo")
                .service(todos::create_todo)
                .service(todos::list_todos)
                .service(todos::update_todo)
                .service(todos::delete_todo)
                .service(todos::assign_todo),
        );
}
