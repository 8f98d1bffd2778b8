use crate::audience::application::use_cases::clear_recruiter_visits::ClearRecruiterVisitsError;
use crate::content::adapter::incoming::web::store_error_response;
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

#[delete("/api/owner/visits")]
pub async fn clear_visits_handler(token: PanelToken, data: web::Data<AppState>) -> impl Responder {
    let Some(credential) = data.panel_registry.credential(token.0).await else {
        return ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open");
    };

    match data
        .clear_recruiter_visits_use_case
        .execute(&credential)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(ClearRecruiterVisitsError::LogError(err)) => {
            error!("Failed to clear recruiter visits: {}", err);
            store_error_response(&err)
        }
    }
}
