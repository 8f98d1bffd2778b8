use crate::content::adapter::incoming::web::store_error_response;
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::owner::application::use_cases::save_draft::SaveDraftError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

#[post("/api/owner/draft/save")]
pub async fn save_draft_handler(token: PanelToken, data: web::Data<AppState>) -> impl Responder {
    match data.save_draft_use_case.execute(token.0).await {
        Ok(report) => ApiResponse::success(report),
        Err(SaveDraftError::SessionNotFound) => {
            ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open")
        }
        Err(SaveDraftError::DraftNotLoaded) => {
            ApiResponse::bad_request("DRAFT_NOT_LOADED", "Load the draft before saving it")
        }
        Err(SaveDraftError::DocumentSave(err)) => {
            error!("Document save failed: {}", err);
            store_error_response(&err)
        }
        Err(SaveDraftError::SkillSync { pending, source }) => {
            error!("Skill sync aborted: {}", source);
            let remaining = pending.to_add.len() + pending.to_remove.len();
            ApiResponse::bad_gateway(
                "PARTIAL_SAVE",
                &format!(
                    "Content saved but {} skill change(s) did not sync; retry to finish",
                    remaining
                ),
            )
        }
    }
}
