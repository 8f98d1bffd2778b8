use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::owner::domain::entities::{OwnerCredential, PanelSession};

/// In-memory registry of open owner-panel sessions, keyed by the token the
/// unlock call hands back. Each session owns its draft exclusively; nothing
/// here serializes overlapping saves, matching the panel's
/// last-response-wins behavior.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    sessions: Mutex<HashMap<Uuid, PanelSession>>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, credential: OwnerCredential) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions
            .lock()
            .await
            .insert(session_id, PanelSession::new(credential));
        session_id
    }

    pub async fn credential(&self, session_id: Uuid) -> Option<OwnerCredential> {
        self.sessions
            .lock()
            .await
            .get(&session_id)
            .map(|session| session.credential.clone())
    }

    /// Run a closure against a session's state under the registry lock.
    /// Returns `None` for unknown tokens.
    pub async fn with_session<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut PanelSession) -> R,
    ) -> Option<R> {
        self.sessions.lock().await.get_mut(&session_id).map(f)
    }

    /// Drop a session (panel closed). The draft goes with it.
    pub async fn close(&self, session_id: Uuid) -> bool {
        self.sessions.lock().await.remove(&session_id).is_some()
    }
}
