use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use thiserror::Error;
use tracing::error;
use record_shared::{ErrorCode, ErrorResponse, ValidationError};
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Record {0} not found")]
    NotFound(i64),
    #[error("Invalid record ID: {0}")]
    InvalidId(String),
    #[error("Expected a JSON body, got {0}")]
    UnsupportedContentType(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::Database(e) => {
                error!("Store failure: {}", e);
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::InvalidId(_) => Status::UnprocessableEntity,
            ApiError::UnsupportedContentType(_) => Status::UnprocessableEntity,
            ApiError::Validation(_) => Status::UnprocessableEntity,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::InvalidId(_) => ErrorCode::InvalidInput,
            ApiError::UnsupportedContentType(_) => ErrorCode::ValidationFailed,
            ApiError::Validation(_) => ErrorCode::ValidationFailed,
            ApiError::Internal(_) => ErrorCode::SystemError,
        }
    }

    /// Client-facing message. Store failure details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::Internal(_) => "An internal server error occurred.".into(),
            other => other.to_string(),
        }
    }

    pub fn body(&self) -> ErrorResponse {
        let body = ErrorResponse::new(self.code(), self.message());
        match self {
            ApiError::Validation(e) => body.with_field(e.field()),
            _ => body,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        (self.status(), Json(self.body())).respond_to(req)
    }
}
