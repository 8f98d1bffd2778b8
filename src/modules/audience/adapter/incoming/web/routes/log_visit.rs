use crate::audience::application::use_cases::log_recruiter_visit::LogRecruiterVisitError;
use crate::content::adapter::incoming::web::store_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Clone, Deserialize)]
pub struct LogVisitRequest {
    pub is_recruiter: bool,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Called once per visit by the recruiter prompt, before the site renders.
#[post("/api/visits")]
pub async fn log_visit_handler(
    req: web::Json<LogVisitRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = req.into_inner();
    match data
        .log_recruiter_visit_use_case
        .execute(body.is_recruiter, body.company_name)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(LogRecruiterVisitError::MissingCompanyName) => {
            ApiResponse::bad_request("MISSING_COMPANY_NAME", "Recruiters must name a company")
        }
        Err(LogRecruiterVisitError::LogError(err)) => {
            error!("Failed to log recruiter visit: {}", err);
            store_error_response(&err)
        }
    }
}
