use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::content::domain::draft::{DraftCommand, DraftError, DraftSnapshot};
use crate::owner::application::services::PanelRegistry;

#[derive(Debug, Clone)]
pub enum ApplyDraftEditError {
    SessionNotFound,
    Draft(DraftError),
}

#[async_trait]
pub trait IApplyDraftEditUseCase: Send + Sync {
    async fn execute(
        &self,
        session_id: Uuid,
        command: DraftCommand,
    ) -> Result<DraftSnapshot, ApplyDraftEditError>;
}

/// Edits are purely local; nothing reaches the store until an explicit save.
pub struct ApplyDraftEditUseCase {
    registry: Arc<PanelRegistry>,
}

impl ApplyDraftEditUseCase {
    pub fn new(registry: Arc<PanelRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl IApplyDraftEditUseCase for ApplyDraftEditUseCase {
    async fn execute(
        &self,
        session_id: Uuid,
        command: DraftCommand,
    ) -> Result<DraftSnapshot, ApplyDraftEditError> {
        let applied = self
            .registry
            .with_session(session_id, move |session| {
                session
                    .draft
                    .apply(command)
                    .map(|_| session.draft.snapshot())
            })
            .await
            .ok_or(ApplyDraftEditError::SessionNotFound)?;

        match applied {
            Ok(Some(snapshot)) => Ok(snapshot),
            // apply() succeeds only on a loaded draft, so this arm is for
            // completeness rather than a reachable state.
            Ok(None) => Err(ApplyDraftEditError::Draft(DraftError::NotLoaded)),
            Err(err) => Err(ApplyDraftEditError::Draft(err)),
        }
    }
}
