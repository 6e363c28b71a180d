use actix_web::{http::StatusCode, HttpResponse};
use remindme_domain::FieldErrors;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemindmeError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("Invalid data provided for one or more fields")]
    ValidationFailed(FieldErrors),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

/// Error envelope returned to clients, mirrors the success envelopes of the
/// api structs: `{ success, message, errors? }`
#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

impl actix_web::error::ResponseError for RemindmeError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            Self::ValidationFailed(field_errors) => Some(field_errors),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.to_string(),
            errors,
        })
    }
}
