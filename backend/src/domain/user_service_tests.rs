//! Tests for the user service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    ConstraintKind, MockTodoRepository, MockUserRepository, StoreError,
};
use crate::domain::{ErrorKind, RuleValidator, TodoId, ValidationErrorReport};
use rstest::rstest;

fn make_service(users: MockUserRepository, todos: MockTodoRepository) -> UserService {
    UserService::new(Arc::new(users), Arc::new(todos), Arc::new(RuleValidator))
}

fn payload() -> UserPayload {
    UserPayload {
        username: "grace".to_owned(),
        email: "grace@example.com".to_owned(),
        password: "compiler1".to_owned(),
    }
}

fn stored(id: i32) -> User {
    UserDraft::from(payload()).into_user(UserId::new(id))
}

#[tokio::test]
async fn create_stores_valid_payload() {
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .withf(|draft| draft.username == "grace")
        .times(1)
        .return_once(|_| Ok(stored(1)));

    let service = make_service(users, MockTodoRepository::new());
    let user = service.create_user(payload()).await.expect("create succeeds");
    assert_eq!(user.id, UserId::new(1));
}

#[tokio::test]
async fn invalid_payload_never_reaches_the_store() {
    let mut users = MockUserRepository::new();
    users.expect_create().never();

    let service = make_service(users, MockTodoRepository::new());
    let err = service
        .create_user(UserPayload::default())
        .await
        .expect_err("validation fails");
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.invalid_params().map(ValidationErrorReport::len), Some(3));
}

#[tokio::test]
async fn unique_violation_on_create_is_internal() {
    let mut users = MockUserRepository::new();
    users.expect_create().return_once(|_| {
        Err(StoreError::constraint_violation(
            "users_email_key",
            ConstraintKind::Unique,
        ))
    });

    let service = make_service(users, MockTodoRepository::new());
    let err = service.create_user(payload()).await.expect_err("store fails");
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let mut users = MockUserRepository::new();
    users
        .expect_update()
        .return_once(|_, _| Err(StoreError::not_found()));

    let service = make_service(users, MockTodoRepository::new());
    let err = service
        .update_user(UserId::new(8), payload())
        .await
        .expect_err("no row");
    assert_eq!(err.kind(), ErrorKind::UserNotFound);
    assert_eq!(err.detail(), Some("User with id 8 not found"));
}

#[rstest]
#[case(1, true)]
#[case(0, false)]
#[tokio::test]
async fn delete_uses_the_affected_count(#[case] removed: u64, #[case] succeeds: bool) {
    let mut users = MockUserRepository::new();
    users.expect_delete().return_once(move |_| Ok(removed));

    let service = make_service(users, MockTodoRepository::new());
    let result = service.delete_user(UserId::new(3)).await;
    assert_eq!(result.is_ok(), succeeds);
    if let Err(err) = result {
        assert_eq!(err.kind(), ErrorKind::UserNotFound);
    }
}

#[tokio::test]
async fn todos_of_missing_user_are_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_exists().return_once(|_| Ok(false));
    let mut todos = MockTodoRepository::new();
    todos.expect_list_for_user().never();

    let service = make_service(users, todos);
    let err = service
        .list_user_todos(UserId::new(4), TodoFilter::All)
        .await
        .expect_err("unknown user");
    assert_eq!(err.kind(), ErrorKind::UserNotFound);
}

#[tokio::test]
async fn todos_of_known_user_pass_the_filter_through() {
    let mut users = MockUserRepository::new();
    users.expect_exists().return_once(|_| Ok(true));
    let mut todos = MockTodoRepository::new();
    todos
        .expect_list_for_user()
        .withf(|user, filter| *user == UserId::new(4) && *filter == TodoFilter::Assigned)
        .return_once(|_, _| {
            Ok(vec![Todo {
                id: TodoId::new(1),
                title: "review".to_owned(),
                description: String::new(),
                creator_id: UserId::new(2),
                completed: false,
            }])
        });

    let service = make_service(users, todos);
    let listed = service
        .list_user_todos(UserId::new(4), TodoFilter::Assigned)
        .await
        .expect("listing succeeds");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn connection_failures_are_internal() {
    let mut users = MockUserRepository::new();
    users
        .expect_list()
        .return_once(|| Err(StoreError::connection("pool exhausted")));

    let service = make_service(users, MockTodoRepository::new());
    let err = service.list_users().await.expect_err("store down");
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.detail().is_none());
}
