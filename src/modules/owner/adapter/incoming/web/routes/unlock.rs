use crate::owner::application::use_cases::unlock_panel::UnlockPanelError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct UnlockRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnlockResponse {
    pub session: Uuid,
}

#[post("/api/owner/unlock")]
pub async fn unlock_panel_handler(
    req: web::Json<UnlockRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.unlock_panel_use_case.execute(&req.password).await {
        Ok(session) => ApiResponse::success(UnlockResponse { session }),
        Err(UnlockPanelError::IncorrectPassword) => {
            ApiResponse::unauthorized("INCORRECT_PASSWORD", "Incorrect password")
        }
    }
}
