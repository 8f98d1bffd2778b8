use crate::content::adapter::incoming::web::store_error_response;
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::owner::application::use_cases::clear_skills::ClearSkillsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

#[delete("/api/owner/skills")]
pub async fn clear_skills_handler(token: PanelToken, data: web::Data<AppState>) -> impl Responder {
    match data.clear_skills_use_case.execute(token.0).await {
        Ok(()) => ApiResponse::no_content(),
        Err(ClearSkillsError::SessionNotFound) => {
            ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open")
        }
        Err(ClearSkillsError::StoreError(err)) => {
            error!("Failed to clear skills: {}", err);
            store_error_response(&err)
        }
    }
}
