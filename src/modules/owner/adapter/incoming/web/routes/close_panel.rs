use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};

/// Closing the panel drops the session and any unsaved draft with it.
#[delete("/api/owner/session")]
pub async fn close_panel_handler(token: PanelToken, data: web::Data<AppState>) -> impl Responder {
    if data.panel_registry.close(token.0).await {
        ApiResponse::no_content()
    } else {
        ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open")
    }
}
