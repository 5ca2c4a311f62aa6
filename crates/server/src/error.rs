use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use booksum_common::{BookSumError, ErrorResponse};
use std::fmt;
use tracing::debug;

/// Handler error rendered as `{ "message": ... }`
#[derive(Debug)]
pub struct ApiError(pub BookSumError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<BookSumError> for ApiError {
    fn from(err: BookSumError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.0.client_message()))
    }
}

/// Turns unreadable JSON bodies into a 400 with the usual error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected summary request body: {}", err);
    let message = match err {
        JsonPayloadError::ContentType => "Request body must be application/json",
        _ => "Request body must be a JSON object with bookName and author",
    };
    ApiError(BookSumError::invalid_input(message)).into()
}

/// Body for 405 responses
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_provider_error_body_is_sanitized() {
        let err = ApiError(BookSumError::llm("API error: 401 - invalid key sk-live"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.message, "Error generating summary");
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ApiError::from(BookSumError::invalid_input("Book name is required"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
