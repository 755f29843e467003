// Route exports
pub mod donors;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use crate::models::ErrorResponse;

pub use donors::AppState;

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

impl error::ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: status.as_u16(),
        }
    }

    pub fn into_response(self) -> HttpResponse {
        error::ResponseError::error_response(&self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_query", format!("Invalid query: {}", err)).into()
}

/// Handle path segment errors (e.g. a malformed donor id)
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_path", format!("Invalid path: {}", err)).into()
}

/// Register routes and extractor error handlers
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error))
        .service(
            web::scope("/api/v1")
                .configure(donors::configure),
        );
}
