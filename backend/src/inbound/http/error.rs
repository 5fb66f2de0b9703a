//! Status codes and JSON bodies for failed directory requests.
//!
//! Handler errors, extractor rejections and unmatched `/api/*` paths all
//! leave as the domain [`Error`] envelope. Internal failures keep their trace
//! id but lose their message.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Return type of the directory handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned for unmatched `/api/*` routes.
pub const API_ROUTE_NOT_FOUND: &str = "API route not found";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

const REDACTED_MESSAGE: &str = "Internal server error";

fn redact_if_internal(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    error
        .trace_id()
        .map_or_else(|| Error::internal(REDACTED_MESSAGE), |id| {
            Error::internal(REDACTED_MESSAGE).with_trace_id(id)
        })
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "unhandled actix error");
        Error::internal(REDACTED_MESSAGE)
    }
}

/// Error handler for `web::JsonConfig`: malformed bodies become 400s.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON body");
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large"
        }
        _ => "Malformed JSON body",
    };
    Error::invalid_request(message).into()
}

/// Error handler for `web::QueryConfig`: undecodable query strings become 400s.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    Error::invalid_request("Malformed query string").into()
}

/// Default service for the `/api` scope.
pub async fn api_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(API_ROUTE_NOT_FOUND))
}

#[cfg(test)]
mod tests;
