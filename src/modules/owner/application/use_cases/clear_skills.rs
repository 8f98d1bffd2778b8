use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::ports::outgoing::{ContentStore, StoreError};
use crate::owner::application::services::PanelRegistry;

#[derive(Debug, Clone)]
pub enum ClearSkillsError {
    SessionNotFound,
    StoreError(StoreError),
}

#[async_trait]
pub trait IClearSkillsUseCase: Send + Sync {
    async fn execute(&self, session_id: Uuid) -> Result<(), ClearSkillsError>;
}

pub struct ClearSkillsUseCase<S: ContentStore> {
    store: S,
    registry: Arc<PanelRegistry>,
}

impl<S: ContentStore> ClearSkillsUseCase<S> {
    pub fn new(store: S, registry: Arc<PanelRegistry>) -> Self {
        Self { store, registry }
    }
}

#[async_trait]
impl<S: ContentStore + Sync + Send> IClearSkillsUseCase for ClearSkillsUseCase<S> {
    async fn execute(&self, session_id: Uuid) -> Result<(), ClearSkillsError> {
        let credential = self
            .registry
            .credential(session_id)
            .await
            .ok_or(ClearSkillsError::SessionNotFound)?;

        self.store
            .clear_skills(&credential)
            .await
            .map_err(ClearSkillsError::StoreError)?;

        // Mirror the bulk clear locally; the draft may not be loaded yet, in
        // which case both lists are already empty.
        self.registry
            .with_session(session_id, |session| session.draft.clear_skills())
            .await;

        Ok(())
    }
}
