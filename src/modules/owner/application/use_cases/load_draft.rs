use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::ports::outgoing::{ContentStore, StoreError};
use crate::content::domain::draft::DraftSnapshot;
use crate::owner::application::services::PanelRegistry;

#[derive(Debug, Clone)]
pub enum LoadDraftError {
    SessionNotFound,
    StoreError(StoreError),
}

#[async_trait]
pub trait ILoadDraftUseCase: Send + Sync {
    async fn execute(&self, session_id: Uuid) -> Result<DraftSnapshot, LoadDraftError>;
}

pub struct LoadDraftUseCase<S: ContentStore> {
    store: S,
    registry: Arc<PanelRegistry>,
}

impl<S: ContentStore> LoadDraftUseCase<S> {
    pub fn new(store: S, registry: Arc<PanelRegistry>) -> Self {
        Self { store, registry }
    }
}

#[async_trait]
impl<S: ContentStore + Sync + Send> ILoadDraftUseCase for LoadDraftUseCase<S> {
    async fn execute(&self, session_id: Uuid) -> Result<DraftSnapshot, LoadDraftError> {
        // A session that already holds a draft gets it back untouched: remote
        // refreshes must never clobber in-progress edits.
        let existing = self
            .registry
            .with_session(session_id, |session| session.draft.snapshot())
            .await
            .ok_or(LoadDraftError::SessionNotFound)?;
        if let Some(snapshot) = existing {
            return Ok(snapshot);
        }

        let content = self
            .store
            .get_content()
            .await
            .map_err(LoadDraftError::StoreError)?;
        let skills = self
            .store
            .get_skills()
            .await
            .map_err(LoadDraftError::StoreError)?;

        // load() is one-shot inside the draft, so if two loads raced the
        // second fetch is simply discarded.
        self.registry
            .with_session(session_id, move |session| {
                session.draft.load(content, skills);
                session.draft.snapshot()
            })
            .await
            .flatten()
            .ok_or(LoadDraftError::SessionNotFound)
    }
}
