//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror the wire shapes of request payloads and error
//! bodies and live in the inbound adapter layer where framework concerns
//! belong.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// Body of user create and replace requests.
#[derive(ToSchema)]
#[schema(as = UserPayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPayloadSchema {
    /// 3 to 20 characters.
    #[schema(example = "ada", min_length = 3, max_length = 20)]
    username: String,
    /// A syntactically valid email address.
    #[schema(example = "ada@example.com")]
    email: String,
    /// 8 to 255 characters. Never returned.
    #[schema(example = "analytical", min_length = 8, max_length = 255)]
    password: String,
}

/// Body of todo create requests.
#[derive(ToSchema)]
#[schema(as = TodoCreatePayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoCreatePayloadSchema {
    #[schema(example = "Write release notes", min_length = 1, max_length = 255)]
    title: String,
    #[schema(max_length = 1000)]
    description: Option<String>,
    /// Identifier of an existing user.
    #[schema(example = 1, minimum = 1)]
    creator_id: i32,
}

/// Body of todo replace requests.
#[derive(ToSchema)]
#[schema(as = TodoUpdatePayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoUpdatePayloadSchema {
    #[schema(example = "Write release notes", min_length = 1, max_length = 255)]
    title: String,
    #[schema(max_length = 1000)]
    description: Option<String>,
    #[schema(example = 1, minimum = 1)]
    creator_id: i32,
    /// Must be present.
    completed: bool,
}

/// Body of todo assignment requests.
#[derive(ToSchema)]
#[schema(as = TodoAssignPayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoAssignPayloadSchema {
    /// Identifier of the user to assign.
    #[schema(example = 2, minimum = 1)]
    user_id: i32,
}

/// One rejected field of a validation error.
#[derive(ToSchema)]
#[schema(as = InvalidParam)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InvalidParamSchema {
    #[schema(example = "The username value is too short")]
    message: String,
    #[schema(example = "min")]
    tag: String,
}

/// Error body for every client error except validation failures.
#[derive(ToSchema)]
#[schema(as = ProblemError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProblemErrorSchema {
    /// Stable error tag such as `user-not-found`.
    #[schema(rename = "type", example = "user-not-found")]
    kind: String,
    #[schema(example = "User not found")]
    title: String,
    #[schema(example = "User with id 7 not found")]
    detail: String,
}

/// Error body for payloads that decoded but did not validate.
#[derive(ToSchema)]
#[schema(as = ValidationError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorSchema {
    #[schema(rename = "type", example = "validation-error")]
    kind: String,
    #[schema(example = "Your request parameters didn't validate.")]
    detail: String,
    /// Rejected fields keyed by wire name.
    invalid_params: BTreeMap<String, InvalidParamSchema>,
}

/// Error body for unexpected failures. Carries no detail.
#[derive(ToSchema)]
#[schema(as = InternalError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InternalErrorSchema {
    #[schema(rename = "type", example = "internal-server-error")]
    kind: String,
    #[schema(example = "Something went wrong")]
    title: String,
}
