//! Tests for user resource handlers.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockTodoOperations, MockUserOperations};
use crate::domain::{Error, Todo, TodoId};
use crate::inbound::http::configure_v1;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};

fn stored_user(id: i32) -> User {
    User {
        id: UserId::new(id),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
    }
}

async fn send(users: MockUserOperations, req: actix_test::TestRequest) -> (StatusCode, Value) {
    let state = HttpState::new(Arc::new(users), Arc::new(MockTodoOperations::new()));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_v1),
    )
    .await;
    let res = actix_test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let bytes = actix_test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

#[actix_web::test]
async fn create_returns_201_without_password() {
    let mut users = MockUserOperations::new();
    users
        .expect_create_user()
        .withf(|payload| payload.username == "ada")
        .return_once(|_| Ok(stored_user(1)));

    let req = actix_test::TestRequest::post().uri("/v1/user").set_json(json!({
        "username": "ada",
        "email": "ada@example.com",
        "password": "analytical",
    }));
    let (status, body) = send(users, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": 1, "username": "ada", "email": "ada@example.com" })
    );
}

#[actix_web::test]
async fn list_returns_every_user() {
    let mut users = MockUserOperations::new();
    users
        .expect_list_users()
        .return_once(|| Ok(vec![stored_user(1), stored_user(2)]));

    let (status, body) = send(users, actix_test::TestRequest::get().uri("/v1/user")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[case("abc")]
#[case("0")]
#[case("-5")]
#[actix_web::test]
async fn malformed_ids_never_reach_the_service(#[case] raw: &str) {
    let mut users = MockUserOperations::new();
    users.expect_delete_user().never();

    let req = actix_test::TestRequest::delete().uri(&format!("/v1/user/{raw}"));
    let (status, body) = send(users, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "invalid-user-id");
    assert_eq!(body["detail"], format!("The user id {raw} is not valid").as_str());
}

#[actix_web::test]
async fn delete_returns_204_then_404() {
    let mut users = MockUserOperations::new();
    let mut calls = 0;
    users.expect_delete_user().times(2).returning(move |id| {
        calls += 1;
        if calls == 1 {
            Ok(())
        } else {
            Err(Error::user_not_found(id))
        }
    });
    let state = HttpState::new(Arc::new(users), Arc::new(MockTodoOperations::new()));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_v1),
    )
    .await;

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/v1/user/5").to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/v1/user/5").to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(second).await;
    assert_eq!(body["detail"], "User with id 5 not found");
}

#[rstest]
#[case("/v1/user/3/todos", TodoFilter::All)]
#[case("/v1/user/3/todos?type=", TodoFilter::All)]
#[case("/v1/user/3/todos?type=all", TodoFilter::All)]
#[case("/v1/user/3/todos?type=created", TodoFilter::Created)]
#[case("/v1/user/3/todos?type=assigned", TodoFilter::Assigned)]
#[actix_web::test]
async fn todos_filter_is_parsed_from_the_query(
    #[case] uri: &str,
    #[case] expected: TodoFilter,
) {
    let mut users = MockUserOperations::new();
    users
        .expect_list_user_todos()
        .withf(move |id, filter| *id == UserId::new(3) && *filter == expected)
        .return_once(|_, _| {
            Ok(vec![Todo {
                id: TodoId::new(8),
                title: "plan".to_owned(),
                description: String::new(),
                creator_id: UserId::new(3),
                completed: false,
            }])
        });

    let (status, body) = send(users, actix_test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["creatorId"], 3);
}

#[actix_web::test]
async fn unknown_filter_lists_the_options() {
    let mut users = MockUserOperations::new();
    users.expect_list_user_todos().never();

    let req = actix_test::TestRequest::get().uri("/v1/user/3/todos?type=bogus");
    let (status, body) = send(users, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "invalid-query");
    assert_eq!(
        body["detail"],
        "The query parameter bogus is not valid. Valid options are [all assigned created]"
    );
}

#[actix_web::test]
async fn update_passes_id_and_payload() {
    let mut users = MockUserOperations::new();
    users
        .expect_update_user()
        .withf(|id, payload| *id == UserId::new(4) && payload.email == "new@example.com")
        .return_once(|id, _| Ok(stored_user(id.get())));

    let req = actix_test::TestRequest::put()
        .uri("/v1/user/4")
        .set_json(json!({
            "username": "ada",
            "email": "new@example.com",
            "password": "analytical",
        }));
    let (status, body) = send(users, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);
}
