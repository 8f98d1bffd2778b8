use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::ports::outgoing::{ContentStore, StoreError};
use crate::owner::application::services::PanelRegistry;

#[derive(Debug, Clone)]
pub enum RenameSkillError {
    SessionNotFound,
    DraftNotLoaded,
    EmptyName,
    DuplicateName,
    UnknownSkill,
    /// The remove half failed; the store and the local lists are unchanged.
    RemoveFailed(StoreError),
    /// The remove half succeeded but the add half failed. The store lost the
    /// old name; the local lists are left unchanged so the user sees exactly
    /// what the store rejected.
    AddFailed(StoreError),
}

#[async_trait]
pub trait IRenameSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        session_id: Uuid,
        old: &str,
        new: &str,
    ) -> Result<Vec<String>, RenameSkillError>;
}

/// Skills are their own remote resource, so editing one in place means
/// remove-old-then-add-new against the store.
pub struct RenameSkillUseCase<S: ContentStore> {
    store: S,
    registry: Arc<PanelRegistry>,
}

impl<S: ContentStore> RenameSkillUseCase<S> {
    pub fn new(store: S, registry: Arc<PanelRegistry>) -> Self {
        Self { store, registry }
    }
}

#[async_trait]
impl<S: ContentStore + Sync + Send> IRenameSkillUseCase for RenameSkillUseCase<S> {
    async fn execute(
        &self,
        session_id: Uuid,
        old: &str,
        new: &str,
    ) -> Result<Vec<String>, RenameSkillError> {
        let trimmed = new.trim().to_string();
        if trimmed.is_empty() {
            return Err(RenameSkillError::EmptyName);
        }

        let state = self
            .registry
            .with_session(session_id, |session| {
                session
                    .draft
                    .snapshot()
                    .map(|snap| (snap.skills, session.credential.clone()))
            })
            .await
            .ok_or(RenameSkillError::SessionNotFound)?;
        let (skills, credential) = state.ok_or(RenameSkillError::DraftNotLoaded)?;

        if !skills.iter().any(|s| s == old) {
            return Err(RenameSkillError::UnknownSkill);
        }
        if skills.iter().any(|s| *s == trimmed) {
            return Err(RenameSkillError::DuplicateName);
        }

        self.store
            .remove_skill(old, &credential)
            .await
            .map_err(RenameSkillError::RemoveFailed)?;
        self.store
            .add_skill(&trimmed, &credential)
            .await
            .map_err(RenameSkillError::AddFailed)?;

        self.registry
            .with_session(session_id, |session| {
                session.draft.replace_skill(old, &trimmed);
                session.draft.skills().to_vec()
            })
            .await
            .ok_or(RenameSkillError::SessionNotFound)
    }
}
