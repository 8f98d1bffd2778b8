use crate::content::adapter::incoming::web::store_error_response;
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::owner::application::use_cases::load_draft::LoadDraftError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

/// Load-or-view: the first call of a session initializes the draft from the
/// store; later calls return the draft as it stands, edits included.
#[post("/api/owner/draft")]
pub async fn load_draft_handler(
    token: PanelToken,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.load_draft_use_case.execute(token.0).await {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(LoadDraftError::SessionNotFound) => {
            ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open")
        }
        Err(LoadDraftError::StoreError(err)) => {
            error!("Failed to load draft: {}", err);
            store_error_response(&err)
        }
    }
}
