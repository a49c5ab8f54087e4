//! User resource handlers.
//!
//! ```text
//! POST   /v1/user
//! GET    /v1/user
//! PUT    /v1/user/{id}
//! DELETE /v1/user/{id}
//! GET    /v1/user/{id}/todos?type=all|created|assigned
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{TodoFilter, User, UserId, UserPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::path::{ResolveId, ResolvedId};
use crate::inbound::http::schemas::{
    InternalErrorSchema, ProblemErrorSchema, UserPayloadSchema, ValidationErrorSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::todos::TodoResponse;

/// User representation returned to clients. The password is never echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Query string of `GET /v1/user/{id}/todos`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserTodosQuery {
    /// One of `all`, `created` or `assigned`; empty or absent means `all`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/v1/user",
    request_body = UserPayloadSchema,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Body did not decode", body = ProblemErrorSchema),
        (status = 422, description = "Body did not validate", body = ValidationErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/v1/user",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Replace a user's fields.
#[utoipa::path(
    put,
    path = "/v1/user/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UserPayloadSchema,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid id or body", body = ProblemErrorSchema),
        (status = 404, description = "User not found", body = ProblemErrorSchema),
        (status = 422, description = "Body did not validate", body = ValidationErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/{id:[^/]*}", wrap = "ResolveId::user()")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: ResolvedId<UserId>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users
        .update_user(id.get(), payload.into_inner())
        .await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Delete a user together with the todos they created.
#[utoipa::path(
    delete,
    path = "/v1/user/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid id", body = ProblemErrorSchema),
        (status = 404, description = "User not found", body = ProblemErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/{id:[^/]*}", wrap = "ResolveId::user()")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: ResolvedId<UserId>,
) -> ApiResult<HttpResponse> {
    state.users.delete_user(id.get()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the todos a user created, is assigned to, or both.
#[utoipa::path(
    get,
    path = "/v1/user/{id}/todos",
    params(("id" = i32, Path, description = "User identifier"), UserTodosQuery),
    responses(
        (status = 200, description = "Todos", body = [TodoResponse]),
        (status = 400, description = "Invalid id or filter", body = ProblemErrorSchema),
        (status = 404, description = "User not found", body = ProblemErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserTodos"
)]
#[get("/{id:[^/]*}/todos", wrap = "ResolveId::user()")]
pub async fn list_user_todos(
    state: web::Data<HttpState>,
    id: ResolvedId<UserId>,
    query: web::Query<UserTodosQuery>,
) -> ApiResult<web::Json<Vec<TodoResponse>>> {
    let filter = TodoFilter::from_query(query.kind.as_deref())?;
    let todos = state.users.list_user_todos(id.get(), filter).await?;
    Ok(web::Json(todos.into_iter().map(TodoResponse::from).collect()))
}

#[cfg(test)]
mod tests;
