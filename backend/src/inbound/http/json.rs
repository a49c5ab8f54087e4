//! Body and query extractor configuration.
//!
//! Extraction failures become domain errors so they share the error body
//! shapes of every other failure: undecodable bodies and wrong content types
//! are `json-decode-error`, unparsable query strings are `invalid-query`.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};

use crate::domain::{Error, TodoFilter};

/// Upper bound on accepted request bodies.
pub const BODY_LIMIT: usize = 64 * 1024;

fn decode_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let reason = match err {
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    };
    Error::json_decode(reason).into()
}

fn query_error(_err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    Error::invalid_query(req.query_string(), &TodoFilter::OPTIONS).into()
}

/// JSON extractor settings shared by every body-carrying route.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(decode_error)
}

/// Query extractor settings shared by every route reading the query string.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserPayload;
    use actix_web::{App, HttpResponse, http::StatusCode, test};
    use serde_json::Value;

    async fn echo(payload: web::Json<UserPayload>) -> HttpResponse {
        HttpResponse::Ok().json(payload.into_inner())
    }

    async fn post(req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/", web::post().to(echo)),
        )
        .await;
        let res = test::call_service(&app, req.uri("/").to_request()).await;
        let status = res.status();
        let body = test::read_body_json(res).await;
        (status, body)
    }

    #[actix_web::test]
    async fn malformed_json_is_a_decode_error() {
        let req = test::TestRequest::post()
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"username\":");
        let (status, body) = post(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "json-decode-error");
        assert_eq!(body["title"], "Your request payload didn't decode");
        assert!(body["detail"].as_str().is_some_and(|d| d.contains("EOF")));
    }

    #[actix_web::test]
    async fn wrong_content_type_is_a_decode_error() {
        let req = test::TestRequest::post()
            .insert_header(("content-type", "text/plain"))
            .set_payload("{}");
        let (status, body) = post(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "json-decode-error");
    }

    #[actix_web::test]
    async fn wrong_field_type_is_a_decode_error() {
        let req = test::TestRequest::post().set_json(serde_json::json!({ "username": 5 }));
        let (status, body) = post(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "json-decode-error");
    }

    #[actix_web::test]
    async fn empty_object_decodes_to_zero_values() {
        let req = test::TestRequest::post().set_json(serde_json::json!({ "extra": 1 }));
        let (status, body) = post(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "");
    }
}
