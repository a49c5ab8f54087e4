//! End-to-end behaviour of the `/v1/user` resource.

mod support;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::json;

use support::{TestApi, ids};

#[actix_web::test]
async fn created_user_is_listed_without_password() {
    let api = TestApi::new();
    let id = api.create_user("ada").await;

    let (status, body) = api.send(TestRequest::get().uri("/v1/user")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": id, "username": "ada", "email": "ada@example.com" }])
    );
}

#[actix_web::test]
async fn long_valid_email_is_stored() {
    let api = TestApi::new();
    let email = format!("{}@example.com", "a".repeat(300));
    let req = TestRequest::post().uri("/v1/user").set_json(json!({
        "username": "ada",
        "email": &email,
        "password": "correct horse",
    }));

    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], json!(email));
}

#[actix_web::test]
async fn every_invalid_field_is_reported_in_one_response() {
    let api = TestApi::new();
    let req = TestRequest::post().uri("/v1/user").set_json(json!({
        "username": "ab",
        "email": "not-an-email",
    }));

    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "type": "validation-error",
            "detail": "Your request parameters didn't validate.",
            "invalid_params": {
                "username": { "message": "The username value is too short", "tag": "min" },
                "email": { "message": "The email field must be a valid email", "tag": "email" },
                "password": { "message": "The password field is required", "tag": "required" },
            }
        })
    );
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("0")]
#[case("-5")]
#[case("1.5")]
#[case("99999999999")]
#[actix_web::test]
async fn malformed_ids_produce_the_same_error_on_every_route(#[case] raw: &str) {
    let api = TestApi::new();
    let expected = json!({
        "type": "invalid-user-id",
        "title": "Invalid user id",
        "detail": format!("The user id {raw} is not valid"),
    });
    let requests = [
        TestRequest::put()
            .uri(&format!("/v1/user/{raw}"))
            .set_json(json!({})),
        TestRequest::delete().uri(&format!("/v1/user/{raw}")),
        TestRequest::get().uri(&format!("/v1/user/{raw}/todos")),
    ];

    for req in requests {
        let (status, body) = api.send(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, expected);
    }
}

#[actix_web::test]
async fn delete_succeeds_once_then_reports_not_found() {
    let api = TestApi::new();
    let id = api.create_user("ada").await;
    let uri = format!("/v1/user/{id}");

    let (status, body) = api.send(TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = api.send(TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "type": "user-not-found",
            "title": "User not found",
            "detail": format!("User with id {id} not found"),
        })
    );
}

#[actix_web::test]
async fn update_replaces_fields_and_reports_missing_rows() {
    let api = TestApi::new();
    let id = api.create_user("ada").await;
    let replacement = json!({
        "username": "lovelace",
        "email": "lovelace@example.com",
        "password": "analytical engine",
    });

    let req = TestRequest::put()
        .uri(&format!("/v1/user/{id}"))
        .set_json(replacement.clone());
    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "username": "lovelace", "email": "lovelace@example.com" })
    );

    let req = TestRequest::put().uri("/v1/user/77").set_json(replacement);
    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User with id 77 not found");
}

#[actix_web::test]
async fn duplicate_username_is_an_internal_error_without_detail() {
    let api = TestApi::new();
    api.create_user("ada").await;
    let req = TestRequest::post().uri("/v1/user").set_json(json!({
        "username": "ada",
        "email": "second@example.com",
        "password": "correct horse",
    }));

    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "type": "internal-server-error", "title": "Something went wrong" })
    );
}

#[rstest]
#[case(ContentType::json(), "{\"username\":")]
#[case(ContentType::plaintext(), "{}")]
#[actix_web::test]
async fn undecodable_bodies_are_decode_errors(
    #[case] content_type: ContentType,
    #[case] raw: &'static str,
) {
    let api = TestApi::new();
    let req = TestRequest::post()
        .uri("/v1/user")
        .insert_header(content_type)
        .set_payload(raw);

    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "json-decode-error");
    assert_eq!(body["title"], "Your request payload didn't decode");
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn todo_filter_selects_created_and_assigned_rows() {
    let api = TestApi::new();
    let ada = api.create_user("ada").await;
    let bob = api.create_user("bob").await;
    let own = api.create_todo(ada, "own").await;
    let shared = api.create_todo(bob, "shared").await;
    api.create_todo(bob, "unrelated").await;
    let (status, _) = api.assign(shared, ada).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let cases = [
        ("", vec![own, shared]),
        ("?type=", vec![own, shared]),
        ("?type=all", vec![own, shared]),
        ("?type=created", vec![own]),
        ("?type=assigned", vec![shared]),
    ];
    for (query, expected) in cases {
        let req = TestRequest::get().uri(&format!("/v1/user/{ada}/todos{query}"));
        let (status, body) = api.send(req).await;
        assert_eq!(status, StatusCode::OK, "query {query:?}");
        assert_eq!(ids(&body), expected, "query {query:?}");
    }
}

#[actix_web::test]
async fn unknown_filter_lists_the_accepted_values() {
    let api = TestApi::new();
    let ada = api.create_user("ada").await;

    let req = TestRequest::get().uri(&format!("/v1/user/{ada}/todos?type=bogus"));
    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "type": "invalid-query",
            "title": "Invalid query",
            "detail": "The query parameter bogus is not valid. Valid options are [all assigned created]",
        })
    );
}

#[actix_web::test]
async fn todos_of_a_missing_user_are_not_found() {
    let api = TestApi::new();
    let req = TestRequest::get().uri("/v1/user/9/todos");

    let (status, body) = api.send(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "user-not-found");
    assert_eq!(body["detail"], "User with id 9 not found");
}

#[actix_web::test]
async fn deleting_a_user_removes_their_todos() {
    let api = TestApi::new();
    let ada = api.create_user("ada").await;
    api.create_todo(ada, "gone with ada").await;

    let (status, _) = api.send(TestRequest::delete().uri(&format!("/v1/user/{ada}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = api.send(TestRequest::get().uri("/v1/todo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
