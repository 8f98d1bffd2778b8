use crate::audience::adapter::incoming::web::format_timestamp_ns;
use crate::audience::application::use_cases::fetch_recruiter_visits::FetchRecruiterVisitsError;
use crate::audience::domain::entities::RecruiterVisit;
use crate::content::adapter::incoming::web::store_error_response;
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Clone, Serialize)]
pub struct RecruiterVisitView {
    pub visited_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl From<RecruiterVisit> for RecruiterVisitView {
    fn from(visit: RecruiterVisit) -> Self {
        Self {
            visited_at: format_timestamp_ns(visit.timestamp),
            company_name: visit.company_name,
        }
    }
}

#[get("/api/owner/visits")]
pub async fn get_visits_handler(token: PanelToken, data: web::Data<AppState>) -> impl Responder {
    let Some(credential) = data.panel_registry.credential(token.0).await else {
        return ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open");
    };

    match data
        .fetch_recruiter_visits_use_case
        .execute(&credential)
        .await
    {
        Ok(visits) => ApiResponse::success(
            visits
                .into_iter()
                .map(RecruiterVisitView::from)
                .collect::<Vec<_>>(),
        ),
        Err(FetchRecruiterVisitsError::LogError(err)) => {
            error!("Failed to fetch recruiter visits: {}", err);
            store_error_response(&err)
        }
    }
}
