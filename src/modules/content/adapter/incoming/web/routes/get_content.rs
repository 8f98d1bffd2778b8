use crate::content::application::ports::outgoing::StoreError;
use crate::content::application::use_cases::fetch_content::FetchContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_content_use_case.execute().await {
        Ok(content) => ApiResponse::success(content),
        Err(FetchContentError::StoreError(err)) => {
            error!("Failed to fetch content: {}", err);
            match err {
                StoreError::Transport(_) => ApiResponse::bad_gateway(
                    "CONTENT_STORE_UNAVAILABLE",
                    "Content store could not be reached",
                ),
                _ => ApiResponse::bad_gateway(
                    "CONTENT_STORE_ERROR",
                    "Content store rejected the request",
                ),
            }
        }
    }
}
