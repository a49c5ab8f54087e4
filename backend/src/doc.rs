//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/v1` endpoint together with the payload and
//! error body schemas from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary for external tooling.

use crate::inbound::http::schemas::{
    InternalErrorSchema, InvalidParamSchema, ProblemErrorSchema, TodoAssignPayloadSchema,
    TodoCreatePayloadSchema, TodoUpdatePayloadSchema, UserPayloadSchema, ValidationErrorSchema,
};
use crate::inbound::http::todos::TodoResponse;
use crate::inbound::http::users::UserResponse;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "Users, todo items and their assignments."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_user_todos,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::todos::assign_todo,
    ),
    components(schemas(
        UserResponse,
        TodoResponse,
        UserPayloadSchema,
        TodoCreatePayloadSchema,
        TodoUpdatePayloadSchema,
        TodoAssignPayloadSchema,
        InvalidParamSchema,
        ProblemErrorSchema,
        ValidationErrorSchema,
        InternalErrorSchema,
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "todos", description = "Todo items and assignments")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/v1/user")]
    #[case("/v1/user/{id}")]
    #[case("/v1/user/{id}/todos")]
    #[case("/v1/todo")]
    #[case("/v1/todo/{id}")]
    #[case("/v1/todo/{id}/assign")]
    fn every_resource_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("ProblemError")]
    #[case("ValidationError")]
    #[case("InternalError")]
    #[case("UserPayload")]
    #[case("TodoAssignPayload")]
    fn error_and_payload_schemas_are_registered(#[case] name: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
}
