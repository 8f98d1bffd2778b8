use crate::content::application::use_cases::fetch_skills::FetchSkillsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_skills_use_case.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(FetchSkillsError::StoreError(err)) => {
            error!("Failed to fetch skills: {}", err);
            ApiResponse::bad_gateway(
                "CONTENT_STORE_UNAVAILABLE",
                "Content store could not be reached",
            )
        }
    }
}
