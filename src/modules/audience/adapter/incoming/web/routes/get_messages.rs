use crate::audience::adapter::incoming::web::format_timestamp_ns;
use crate::audience::application::use_cases::fetch_visitor_messages::FetchVisitorMessagesError;
use crate::audience::domain::entities::VisitorMessage;
use crate::content::adapter::incoming::web::store_error_response;
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Clone, Serialize)]
pub struct VisitorMessageView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: String,
}

impl From<VisitorMessage> for VisitorMessageView {
    fn from(message: VisitorMessage) -> Self {
        Self {
            received_at: format_timestamp_ns(message.timestamp),
            name: message.name,
            email: message.email,
            message: message.message,
        }
    }
}

#[get("/api/owner/messages")]
pub async fn get_messages_handler(token: PanelToken, data: web::Data<AppState>) -> impl Responder {
    let Some(credential) = data.panel_registry.credential(token.0).await else {
        return ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open");
    };

    match data
        .fetch_visitor_messages_use_case
        .execute(&credential)
        .await
    {
        Ok(messages) => ApiResponse::success(
            messages
                .into_iter()
                .map(VisitorMessageView::from)
                .collect::<Vec<_>>(),
        ),
        Err(FetchVisitorMessagesError::LogError(err)) => {
            error!("Failed to fetch visitor messages: {}", err);
            store_error_response(&err)
        }
    }
}
