use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::shared::api::ApiResponse;

pub const SESSION_HEADER: &str = "X-Owner-Session";

/// Panel session token handed out by the unlock call. Only the header shape
/// is checked here; whether the session actually exists is decided by the
/// registry behind each use case.
#[derive(Debug, Clone, Copy)]
pub struct PanelToken(pub Uuid);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for PanelToken {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| Uuid::parse_str(raw).ok());

        match token {
            Some(session_id) => ready(Ok(PanelToken(session_id))),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_SESSION_TOKEN",
                "Missing or malformed X-Owner-Session header",
            )))),
        }
    }
}
