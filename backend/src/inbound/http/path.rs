//! Path identifier resolution.
//!
//! [`ResolveId`] wraps every resource whose pattern carries an `{id}`
//! segment. It parses the segment before the handler runs and either stores
//! the typed identifier in the request extensions or answers with the
//! matching `invalid-*-id` error. Handlers read the identifier through the
//! [`ResolvedId`] extractor and never parse it themselves.

use std::marker::PhantomData;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{FromRequest, HttpMessage, HttpRequest, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::domain::{Error, TodoId, UserId};

/// Path segment holding the identifier.
const ID_SEGMENT: &str = "id";

/// Identifier types that can be resolved from a path segment.
pub trait ResolvableId: Copy + 'static {
    /// Parse `raw`, producing the resource-specific error on failure.
    ///
    /// # Errors
    /// Returns an `invalid-user-id` or `invalid-todo-id` error echoing `raw`.
    fn resolve_segment(raw: &str) -> Result<Self, Error>;
}

impl ResolvableId for UserId {
    fn resolve_segment(raw: &str) -> Result<Self, Error> {
        Self::resolve(raw).map_err(|err| Error::invalid_user_id(err.raw()))
    }
}

impl ResolvableId for TodoId {
    fn resolve_segment(raw: &str) -> Result<Self, Error> {
        Self::resolve(raw).map_err(|err| Error::invalid_todo_id(err.raw()))
    }
}

/// Middleware resolving the `{id}` segment into `T`.
///
/// # Examples
/// ```
/// use actix_web::{App, HttpResponse, web};
/// use todo_api::domain::UserId;
/// use todo_api::inbound::http::path::{ResolveId, ResolvedId};
///
/// async fn show(id: ResolvedId<UserId>) -> HttpResponse {
///     HttpResponse::Ok().body(id.get().to_string())
/// }
///
/// let app = App::new().service(
///     web::resource("/user/{id}")
///         .wrap(ResolveId::user())
///         .route(web::get().to(show)),
/// );
/// ```
pub struct ResolveId<T> {
    _id: PhantomData<fn() -> T>,
}

impl ResolveId<UserId> {
    /// Resolve the segment as a [`UserId`].
    pub const fn user() -> Self {
        Self { _id: PhantomData }
    }
}

impl ResolveId<TodoId> {
    /// Resolve the segment as a [`TodoId`].
    pub const fn todo() -> Self {
        Self { _id: PhantomData }
    }
}

impl<S, B, T> Transform<S, ServiceRequest> for ResolveId<T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: ResolvableId,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ResolveIdMiddleware<S, T>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResolveIdMiddleware {
            service,
            _id: PhantomData,
        }))
    }
}

/// Service wrapper produced by [`ResolveId`].
pub struct ResolveIdMiddleware<S, T> {
    service: S,
    _id: PhantomData<fn() -> T>,
}

impl<S, B, T> Service<ServiceRequest> for ResolveIdMiddleware<S, T>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
    T: ResolvableId,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let resolved = T::resolve_segment(req.match_info().get(ID_SEGMENT).unwrap_or_default());
        match resolved {
            Ok(id) => {
                req.extensions_mut().insert(ResolvedId(id));
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                let res = req
                    .into_response(err.error_response())
                    .map_into_right_body();
                Box::pin(ready(Ok(res)))
            }
        }
    }
}

/// Identifier stored by [`ResolveId`] for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedId<T>(T);

impl<T: Copy> ResolvedId<T> {
    /// The resolved identifier.
    pub const fn get(self) -> T {
        self.0
    }
}

impl<T: ResolvableId> FromRequest for ResolvedId<T> {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Reaching a handler without the middleware is a wiring fault.
        ready(
            req.extensions()
                .get::<Self>()
                .copied()
                .ok_or_else(|| Error::internal("path identifier was not resolved")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};
    use rstest::rstest;
    use serde_json::Value;

    async fn show_user(id: ResolvedId<UserId>) -> HttpResponse {
        HttpResponse::Ok().body(id.get().to_string())
    }

    async fn show_todo(id: ResolvedId<TodoId>) -> HttpResponse {
        HttpResponse::Ok().body(id.get().to_string())
    }

    async fn call(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = test::init_service(
            App::new()
                .service(
                    web::resource("/user/{id}")
                        .wrap(ResolveId::user())
                        .route(web::get().to(show_user)),
                )
                .service(
                    web::resource("/todo/{id}")
                        .wrap(ResolveId::todo())
                        .route(web::get().to(show_todo)),
                )
                .route("/bare", web::get().to(show_user)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        (status, test::read_body(res).await.to_vec())
    }

    #[actix_web::test]
    async fn handler_receives_the_typed_id() {
        let (status, body) = call("/user/17").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"17");
    }

    #[rstest]
    #[case("abc")]
    #[case("0")]
    #[case("-1")]
    #[case("99999999999")]
    #[case("1.5")]
    #[actix_web::test]
    async fn malformed_user_ids_short_circuit(#[case] raw: &str) {
        let (status, body) = call(&format!("/user/{raw}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: Value = serde_json::from_slice(&body).expect("error body");
        assert_eq!(value["type"], "invalid-user-id");
        assert_eq!(
            value["detail"],
            format!("The user id {raw} is not valid").as_str()
        );
    }

    #[actix_web::test]
    async fn todo_ids_use_their_own_error() {
        let (status, body) = call("/todo/x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: Value = serde_json::from_slice(&body).expect("error body");
        assert_eq!(value["type"], "invalid-todo-id");
    }

    #[actix_web::test]
    async fn extractor_without_middleware_is_internal() {
        let (status, _) = call("/bare").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
