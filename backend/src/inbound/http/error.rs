//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while rendering every
//! failure as the response envelope with a matching status code.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::{debug, error, warn};

use super::envelope::Envelope;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";
const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Rejected => StatusCode::GONE,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing message and details; infrastructure failures are redacted.
fn public_view(error: &Error) -> (&str, Option<serde_json::Value>) {
    match error.code() {
        ErrorCode::InternalError => (INTERNAL_MESSAGE, None),
        ErrorCode::ServiceUnavailable => (UNAVAILABLE_MESSAGE, None),
        _ => (error.message(), error.details().cloned()),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                code = status.as_u16(),
                trace_id = self.trace_id().unwrap_or_default(),
                message = self.message(),
                "request failed"
            );
        } else {
            debug!(code = status.as_u16(), message = self.message(), "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        let (message, details) = public_view(self);
        builder.json(Envelope::failure(status.as_u16(), message, details))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        warn!(error = %err, "actix error promoted to domain error");
        Self::internal(INTERNAL_MESSAGE)
    }
}

/// Render malformed JSON bodies as a 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request("request body must be valid JSON").into()
}

/// Render malformed query strings as a 400 envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    Error::invalid_request("query string is malformed").into()
}

/// JSON extractor configuration using [`json_error_handler`].
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Query extractor configuration using [`query_error_handler`].
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
