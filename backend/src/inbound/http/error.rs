//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning every
//! failure into one of three JSON body shapes with a fixed status per kind.
//! Internal failures are logged in full and answered with a detail-free
//! body.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::{Error, ErrorKind, ValidationErrorReport};
use crate::middleware::TraceId;

pub use crate::domain::ApiResult;

/// Body sent when an error body itself cannot be serialised.
pub const FALLBACK_BODY: &str = r#"{"type":"internal-server-error","title":"Something went wrong"}"#;

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::JsonDecode
        | ErrorKind::InvalidUserId
        | ErrorKind::InvalidTodoId
        | ErrorKind::InvalidQuery => StatusCode::BAD_REQUEST,
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::UserNotFound | ErrorKind::TodoNotFound => StatusCode::NOT_FOUND,
        ErrorKind::TodoAssign => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorBody<'a> {
    Validation {
        #[serde(rename = "type")]
        kind: &'static str,
        detail: &'a str,
        invalid_params: &'a ValidationErrorReport,
    },
    Problem {
        #[serde(rename = "type")]
        kind: &'static str,
        title: &'a str,
        detail: &'a str,
    },
    Internal {
        #[serde(rename = "type")]
        kind: &'static str,
        title: &'a str,
    },
}

impl<'a> ErrorBody<'a> {
    fn for_error(err: &'a Error) -> Self {
        let kind = err.kind().as_str();
        let detail = err.detail().unwrap_or_default();
        match (err.kind(), err.invalid_params()) {
            (ErrorKind::Internal, _) => Self::Internal {
                kind,
                title: err.title(),
            },
            (_, Some(invalid_params)) => Self::Validation {
                kind,
                detail,
                invalid_params,
            },
            (_, None) => Self::Problem {
                kind,
                title: err.title(),
                detail,
            },
        }
    }
}

fn log_error(err: &Error, status: StatusCode) {
    let trace_id = TraceId::current().map(|id| id.to_string());
    if err.kind() == ErrorKind::Internal {
        error!(
            trace_id = trace_id.as_deref(),
            status = status.as_u16(),
            cause = err.cause(),
            "request failed"
        );
    } else {
        info!(
            trace_id = trace_id.as_deref(),
            status = status.as_u16(),
            kind = err.kind().as_str(),
            detail = err.detail(),
            "request rejected"
        );
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        log_error(self, status);
        match serde_json::to_vec(&ErrorBody::for_error(self)) {
            Ok(body) => HttpResponse::build(status)
                .content_type(ContentType::json())
                .body(body),
            Err(err) => {
                error!(error = %err, "failed to serialise error body");
                HttpResponse::InternalServerError()
                    .content_type(ContentType::json())
                    .body(FALLBACK_BODY)
            }
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        Self::internal(err)
    }
}
