use crate::content::domain::draft::{DraftCommand, DraftError};
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::owner::application::use_cases::apply_draft_edit::ApplyDraftEditError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

#[post("/api/owner/draft/edits")]
pub async fn apply_draft_edit_handler(
    token: PanelToken,
    command: web::Json<DraftCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .apply_draft_edit_use_case
        .execute(token.0, command.into_inner())
        .await
    {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(ApplyDraftEditError::SessionNotFound) => {
            ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open")
        }
        Err(ApplyDraftEditError::Draft(DraftError::NotLoaded)) => {
            ApiResponse::bad_request("DRAFT_NOT_LOADED", "Load the draft before editing it")
        }
        Err(ApplyDraftEditError::Draft(err @ DraftError::IndexOutOfRange { .. })) => {
            ApiResponse::bad_request("INDEX_OUT_OF_RANGE", &err.to_string())
        }
    }
}
