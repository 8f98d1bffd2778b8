use crate::content::adapter::incoming::web::store_error_response;
use crate::owner::adapter::incoming::web::extractors::panel_token::PanelToken;
use crate::owner::application::use_cases::rename_skill::RenameSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Clone, Deserialize)]
pub struct RenameSkillRequest {
    pub old: String,
    pub new: String,
}

#[put("/api/owner/skills")]
pub async fn rename_skill_handler(
    token: PanelToken,
    req: web::Json<RenameSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .rename_skill_use_case
        .execute(token.0, &req.old, &req.new)
        .await
    {
        Ok(skills) => ApiResponse::success(skills),
        Err(RenameSkillError::SessionNotFound) => {
            ApiResponse::unauthorized("SESSION_NOT_FOUND", "Owner session is not open")
        }
        Err(RenameSkillError::DraftNotLoaded) => {
            ApiResponse::bad_request("DRAFT_NOT_LOADED", "Load the draft before editing skills")
        }
        Err(RenameSkillError::EmptyName) => {
            ApiResponse::bad_request("EMPTY_SKILL", "New skill name is empty")
        }
        Err(RenameSkillError::DuplicateName) => {
            ApiResponse::bad_request("DUPLICATE_SKILL", "That skill is already in the list")
        }
        Err(RenameSkillError::UnknownSkill) => {
            ApiResponse::bad_request("UNKNOWN_SKILL", "No such skill to rename")
        }
        Err(RenameSkillError::RemoveFailed(err)) | Err(RenameSkillError::AddFailed(err)) => {
            error!("Skill rename failed: {}", err);
            store_error_response(&err)
        }
    }
}
