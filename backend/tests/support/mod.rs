//! Shared harness for endpoint tests.
//!
//! Each test owns one [`InMemoryStore`] wired to the real resource
//! operations; requests run through the full `/v1` routing and error
//! mapping stack.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use todo_api::Trace;
use todo_api::domain::{RuleValidator, TodoService, UserService, Validator};
use todo_api::inbound::http::{HttpState, configure_v1};
use todo_api::test_support::InMemoryStore;

/// In-process API over an in-memory store.
pub struct TestApi {
    state: web::Data<HttpState>,
}

impl TestApi {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let validator: Arc<dyn Validator> = Arc::new(RuleValidator);
        let state = HttpState::new(
            Arc::new(UserService::new(
                store.clone(),
                store.clone(),
                validator.clone(),
            )),
            Arc::new(TodoService::new(store, validator)),
        );
        Self {
            state: web::Data::new(state),
        }
    }

    /// Send `req` and return the status with the decoded body, `Null` when
    /// the body is empty.
    pub async fn send(&self, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(self.state.clone())
                .wrap(Trace)
                .configure(configure_v1),
        )
        .await;
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let bytes = test::read_body(res).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, body)
    }

    /// Create a user named `name` and return its id.
    pub async fn create_user(&self, name: &str) -> i64 {
        let req = test::TestRequest::post().uri("/v1/user").set_json(serde_json::json!({
            "username": name,
            "email": format!("{name}@example.com"),
            "password": "correct horse",
        }));
        let (status, body) = self.send(req).await;
        assert_eq!(status, StatusCode::CREATED, "create user: {body}");
        body["id"].as_i64().expect("user id")
    }

    /// Create a todo owned by `creator` and return its id.
    pub async fn create_todo(&self, creator: i64, title: &str) -> i64 {
        let req = test::TestRequest::post().uri("/v1/todo").set_json(serde_json::json!({
            "title": title,
            "description": "",
            "creatorId": creator,
        }));
        let (status, body) = self.send(req).await;
        assert_eq!(status, StatusCode::CREATED, "create todo: {body}");
        body["id"].as_i64().expect("todo id")
    }

    /// Assign `user` to `todo` and return the raw outcome.
    pub async fn assign(&self, todo: i64, user: i64) -> (StatusCode, Value) {
        let req = test::TestRequest::post()
            .uri(&format!("/v1/todo/{todo}/assign"))
            .set_json(serde_json::json!({ "userId": user }));
        self.send(req).await
    }
}

/// Ids of the todos in a list body, in order.
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}
