//! Todo resource handlers.
//!
//! ```text
//! POST   /v1/todo
//! GET    /v1/todo
//! PUT    /v1/todo/{id}
//! DELETE /v1/todo/{id}
//! POST   /v1/todo/{id}/assign
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Todo, TodoAssignPayload, TodoCreatePayload, TodoId, TodoUpdatePayload, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::path::{ResolveId, ResolvedId};
use crate::inbound::http::schemas::{
    InternalErrorSchema, ProblemErrorSchema, TodoAssignPayloadSchema, TodoCreatePayloadSchema,
    TodoUpdatePayloadSchema, ValidationErrorSchema,
};
use crate::inbound::http::state::HttpState;

/// Todo representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    #[schema(value_type = i32, example = 1)]
    pub id: TodoId,
    #[schema(example = "Write release notes")]
    pub title: String,
    #[schema(example = "Cover the new assignment endpoint")]
    pub description: String,
    #[schema(value_type = i32, example = 1)]
    pub creator_id: UserId,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            creator_id: todo.creator_id,
            completed: todo.completed,
        }
    }
}

/// Create a todo owned by an existing user.
#[utoipa::path(
    post,
    path = "/v1/todo",
    request_body = TodoCreatePayloadSchema,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Body did not decode", body = ProblemErrorSchema),
        (status = 404, description = "Creator not found", body = ProblemErrorSchema),
        (status = 422, description = "Body did not validate", body = ValidationErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<TodoCreatePayload>,
) -> ApiResult<HttpResponse> {
    let todo = state.todos.create_todo(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

/// List every todo.
#[utoipa::path(
    get,
    path = "/v1/todo",
    responses(
        (status = 200, description = "Todos", body = [TodoResponse]),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TodoResponse>>> {
    let todos = state.todos.list_todos().await?;
    Ok(web::Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Replace a todo's fields.
#[utoipa::path(
    put,
    path = "/v1/todo/{id}",
    params(("id" = i32, Path, description = "Todo identifier")),
    request_body = TodoUpdatePayloadSchema,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Invalid id or body", body = ProblemErrorSchema),
        (status = 404, description = "Todo or creator not found", body = ProblemErrorSchema),
        (status = 422, description = "Body did not validate", body = ValidationErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/{id:[^/]*}", wrap = "ResolveId::todo()")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    id: ResolvedId<TodoId>,
    payload: web::Json<TodoUpdatePayload>,
) -> ApiResult<web::Json<TodoResponse>> {
    let todo = state
        .todos
        .update_todo(id.get(), payload.into_inner())
        .await?;
    Ok(web::Json(TodoResponse::from(todo)))
}

/// Delete a todo and its assignments.
#[utoipa::path(
    delete,
    path = "/v1/todo/{id}",
    params(("id" = i32, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Invalid id", body = ProblemErrorSchema),
        (status = 404, description = "Todo not found", body = ProblemErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/{id:[^/]*}", wrap = "ResolveId::todo()")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    id: ResolvedId<TodoId>,
) -> ApiResult<HttpResponse> {
    state.todos.delete_todo(id.get()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Assign a user to a todo.
#[utoipa::path(
    post,
    path = "/v1/todo/{id}/assign",
    params(("id" = i32, Path, description = "Todo identifier")),
    request_body = TodoAssignPayloadSchema,
    responses(
        (status = 204, description = "User assigned"),
        (status = 400, description = "Invalid id or body", body = ProblemErrorSchema),
        (status = 404, description = "Todo or user not found", body = ProblemErrorSchema),
        (status = 409, description = "User already assigned", body = ProblemErrorSchema),
        (status = 422, description = "Body did not validate", body = ValidationErrorSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "assignTodo"
)]
#[post("/{id:[^/]*}/assign", wrap = "ResolveId::todo()")]
pub async fn assign_todo(
    state: web::Data<HttpState>,
    id: ResolvedId<TodoId>,
    payload: web::Json<TodoAssignPayload>,
) -> ApiResult<HttpResponse> {
    state
        .todos
        .assign_todo(id.get(), payload.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
