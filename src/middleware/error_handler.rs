use actix_web::{error::JsonPayloadError, error::PathError, HttpRequest};

use crate::core::AppError;
use crate::middleware::request_id::request_id_of;

/// Turn malformed JSON bodies into InvalidInput responses
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log_error(req, &err);
    AppError::invalid_input(err.to_string()).into()
}

/// Turn unparseable path segments (e.g. a non-numeric item id) into
/// InvalidInput responses
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log_error(req, &err);
    AppError::invalid_input(err.to_string()).into()
}

pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    let request_id = request_id_of(req).unwrap_or_else(|| "-".to_string());

    tracing::warn!(
        request_id = %request_id,
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request"
    );
}
