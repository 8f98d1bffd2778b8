use crate::audience::application::use_cases::submit_visitor_message::SubmitVisitorMessageError;
use crate::content::adapter::incoming::web::store_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[post("/api/messages")]
pub async fn submit_message_handler(
    req: web::Json<SubmitMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .submit_visitor_message_use_case
        .execute(&req.name, &req.email, &req.message)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SubmitVisitorMessageError::MissingName) => {
            ApiResponse::bad_request("MISSING_NAME", "Name is required")
        }
        Err(SubmitVisitorMessageError::MissingEmail) => {
            ApiResponse::bad_request("MISSING_EMAIL", "Email is required")
        }
        Err(SubmitVisitorMessageError::MissingMessage) => {
            ApiResponse::bad_request("MISSING_MESSAGE", "Message is required")
        }
        Err(SubmitVisitorMessageError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email address is not valid")
        }
        Err(SubmitVisitorMessageError::LogError(err)) => {
            error!("Failed to submit visitor message: {}", err);
            store_error_response(&err)
        }
    }
}
