use rocket::{Request, catch, serde::json::Json};
use record_shared::{ErrorCode, ErrorResponse};

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(ErrorCode::InvalidInput, "Malformed request body."))
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(ErrorCode::NotFound, "The requested resource was not found."))
}

#[catch(422)]
pub fn unprocessable_entity(req: &Request) -> Json<ErrorResponse> {
    let error_msg = match req.uri().path().segments().next() {
        Some("records") => "Request body must be a JSON object of record fields.",
        Some("submit") => "Form data could not be read.",
        _ => "Unprocessable request.",
    };

    Json(ErrorResponse::new(ErrorCode::ValidationFailed, error_msg))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(ErrorCode::SystemError, "An internal server error occurred."))
}
