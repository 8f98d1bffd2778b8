use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::content::application::ports::outgoing::{ContentStore, StoreError};
use crate::content::domain::draft::{skill_diff, SkillDiff};
use crate::owner::application::services::PanelRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct SaveReport {
    pub skills_added: usize,
    pub skills_removed: usize,
}

#[derive(Debug, Clone)]
pub enum SaveDraftError {
    SessionNotFound,
    DraftNotLoaded,
    /// The whole-document save failed; nothing was applied remotely and the
    /// draft is retained unchanged for a retry.
    DocumentSave(StoreError),
    /// The document saved but the skills resource only partially synced.
    /// `pending` is what a retry still has to add/remove.
    SkillSync { pending: SkillDiff, source: StoreError },
}

#[async_trait]
pub trait ISaveDraftUseCase: Send + Sync {
    async fn execute(&self, session_id: Uuid) -> Result<SaveReport, SaveDraftError>;
}

/// Persists a session's draft: one whole-document `updateContent` call,
/// followed by per-skill add/remove calls computed by diffing the draft
/// skill set against the last-known remote set. The two halves are not
/// atomic; a failure partway leaves the store mixed and is surfaced as
/// `SkillSync` rather than papered over.
pub struct SaveDraftUseCase<S: ContentStore> {
    store: S,
    registry: Arc<PanelRegistry>,
}

impl<S: ContentStore> SaveDraftUseCase<S> {
    pub fn new(store: S, registry: Arc<PanelRegistry>) -> Self {
        Self { store, registry }
    }

    /// Record what did land on the store, so a retry diffs only the
    /// remainder, then surface the failure.
    async fn abort_skill_sync(
        &self,
        session_id: Uuid,
        synced: Vec<String>,
        draft_skills: &[String],
        source: StoreError,
    ) -> SaveDraftError {
        let pending = skill_diff(&synced, draft_skills);
        self.registry
            .with_session(session_id, move |session| {
                session.draft.set_remote_skills(synced)
            })
            .await;
        SaveDraftError::SkillSync { pending, source }
    }
}

#[async_trait]
impl<S: ContentStore + Sync + Send> ISaveDraftUseCase for SaveDraftUseCase<S> {
    async fn execute(&self, session_id: Uuid) -> Result<SaveReport, SaveDraftError> {
        // Snapshot under the registry lock; all remote calls happen outside
        // it. Overlapping saves are not serialized, last response wins.
        let state = self
            .registry
            .with_session(session_id, |session| {
                session.draft.snapshot().map(|snap| {
                    (
                        snap.content,
                        snap.skills,
                        session.draft.remote_skills().to_vec(),
                        session.credential.clone(),
                    )
                })
            })
            .await
            .ok_or(SaveDraftError::SessionNotFound)?;
        let (content, skills, remote_skills, credential) =
            state.ok_or(SaveDraftError::DraftNotLoaded)?;

        self.store
            .update_content(&content, &credential)
            .await
            .map_err(SaveDraftError::DocumentSave)?;

        let diff = skill_diff(&remote_skills, &skills);
        let mut synced = remote_skills;

        for skill in &diff.to_add {
            if let Err(err) = self.store.add_skill(skill, &credential).await {
                return Err(self.abort_skill_sync(session_id, synced, &skills, err).await);
            }
            synced.push(skill.clone());
        }
        for skill in &diff.to_remove {
            if let Err(err) = self.store.remove_skill(skill, &credential).await {
                return Err(self.abort_skill_sync(session_id, synced, &skills, err).await);
            }
            synced.retain(|s| s != skill);
        }

        self.registry
            .with_session(session_id, move |session| {
                session.draft.set_remote_skills(synced)
            })
            .await;

        Ok(SaveReport {
            skills_added: diff.to_add.len(),
            skills_removed: diff.to_remove.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::entities::{ContactDetails, Content};
    use crate::content::domain::draft::DraftCommand;
    use crate::owner::domain::entities::OwnerCredential;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        updated_documents: Mutex<Vec<Content>>,
        added_skills: Mutex<Vec<String>>,
        removed_skills: Mutex<Vec<String>>,
        fail_update: bool,
        fail_add_of: Option<String>,
    }

    #[async_trait]
    impl ContentStore for RecordingStore {
        async fn get_content(&self) -> Result<Content, StoreError> {
            unimplemented!("not used by save tests")
        }

        async fn update_content(
            &self,
            content: &Content,
            _credential: &OwnerCredential,
        ) -> Result<(), StoreError> {
            if self.fail_update {
                return Err(StoreError::Transport("store down".to_string()));
            }
            self.updated_documents.lock().unwrap().push(content.clone());
            Ok(())
        }

        async fn get_skills(&self) -> Result<Vec<String>, StoreError> {
            unimplemented!("not used by save tests")
        }

        async fn add_skill(
            &self,
            skill: &str,
            _credential: &OwnerCredential,
        ) -> Result<(), StoreError> {
            if self.fail_add_of.as_deref() == Some(skill) {
                return Err(StoreError::Rejected("skill rejected".to_string()));
            }
            self.added_skills.lock().unwrap().push(skill.to_string());
            Ok(())
        }

        async fn remove_skill(
            &self,
            skill: &str,
            _credential: &OwnerCredential,
        ) -> Result<(), StoreError> {
            self.removed_skills.lock().unwrap().push(skill.to_string());
            Ok(())
        }

        async fn clear_skills(&self, _credential: &OwnerCredential) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn base_content() -> Content {
        Content {
            hero_text: "Hero".to_string(),
            contact: ContactDetails {
                address: String::new(),
                phone: String::new(),
                email: String::new(),
            },
            education: vec![],
            experience: vec![],
            certifications: vec![],
            hobbies: vec![],
            projects: vec![],
        }
    }

    async fn session_with_skills(
        registry: &Arc<PanelRegistry>,
        remote: &[&str],
        edits: Vec<DraftCommand>,
    ) -> Uuid {
        let session_id = registry.open(OwnerCredential::new("pw")).await;
        registry
            .with_session(session_id, |session| {
                session.draft.load(
                    base_content(),
                    remote.iter().map(|s| s.to_string()).collect(),
                );
                for command in edits {
                    session.draft.apply(command).unwrap();
                }
            })
            .await;
        session_id
    }

    #[tokio::test]
    async fn test_save_pushes_document_then_reconciles_skills() {
        let registry = Arc::new(PanelRegistry::new());
        let session_id = session_with_skills(
            &registry,
            &["A", "B"],
            vec![
                DraftCommand::AddSkill {
                    value: "C".to_string(),
                },
                DraftCommand::RemoveSkill {
                    value: "A".to_string(),
                },
            ],
        )
        .await;
        let use_case = SaveDraftUseCase::new(RecordingStore::default(), Arc::clone(&registry));

        let report = use_case.execute(session_id).await.unwrap();

        assert_eq!(report.skills_added, 1);
        assert_eq!(report.skills_removed, 1);
        assert_eq!(
            use_case.store.updated_documents.lock().unwrap().len(),
            1
        );
        assert_eq!(*use_case.store.added_skills.lock().unwrap(), ["C"]);
        assert_eq!(*use_case.store.removed_skills.lock().unwrap(), ["A"]);

        // The remote cache now matches the draft, so a second save is a
        // no-op on the skills side.
        let remote = registry
            .with_session(session_id, |session| session.draft.remote_skills().to_vec())
            .await
            .unwrap();
        assert_eq!(remote, ["B", "C"]);
    }

    #[tokio::test]
    async fn test_failed_document_save_retains_the_draft() {
        let registry = Arc::new(PanelRegistry::new());
        let session_id = session_with_skills(
            &registry,
            &["A"],
            vec![DraftCommand::AddSkill {
                value: "B".to_string(),
            }],
        )
        .await;
        let store = RecordingStore {
            fail_update: true,
            ..RecordingStore::default()
        };
        let use_case = SaveDraftUseCase::new(store, Arc::clone(&registry));

        let result = use_case.execute(session_id).await;

        assert!(matches!(result, Err(SaveDraftError::DocumentSave(_))));
        // No skill call was issued and the draft still carries the edit.
        assert!(use_case.store.added_skills.lock().unwrap().is_empty());
        let snapshot = registry
            .with_session(session_id, |session| session.draft.snapshot())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.skills, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_partial_skill_sync_surfaces_the_remainder() {
        let registry = Arc::new(PanelRegistry::new());
        let session_id = session_with_skills(
            &registry,
            &["A", "B"],
            vec![
                DraftCommand::AddSkill {
                    value: "C".to_string(),
                },
                DraftCommand::AddSkill {
                    value: "D".to_string(),
                },
                DraftCommand::RemoveSkill {
                    value: "A".to_string(),
                },
            ],
        )
        .await;
        let store = RecordingStore {
            fail_add_of: Some("D".to_string()),
            ..RecordingStore::default()
        };
        let use_case = SaveDraftUseCase::new(store, Arc::clone(&registry));

        let result = use_case.execute(session_id).await;

        match result {
            Err(SaveDraftError::SkillSync { pending, .. }) => {
                assert_eq!(pending.to_add, ["D"]);
                assert_eq!(pending.to_remove, ["A"]);
            }
            other => panic!("Expected SkillSync error, got {:?}", other),
        }

        // "C" landed before the failure, so the cache reflects it and a
        // retry will only re-attempt the remainder.
        let remote = registry
            .with_session(session_id, |session| session.draft.remote_skills().to_vec())
            .await
            .unwrap();
        assert_eq!(remote, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_save_requires_a_loaded_draft() {
        let registry = Arc::new(PanelRegistry::new());
        let session_id = registry.open(OwnerCredential::new("pw")).await;
        let use_case = SaveDraftUseCase::new(RecordingStore::default(), registry);

        let result = use_case.execute(session_id).await;

        assert!(matches!(result, Err(SaveDraftError::DraftNotLoaded)));
    }

    #[tokio::test]
    async fn test_unknown_session_is_rejected() {
        let registry = Arc::new(PanelRegistry::new());
        let use_case = SaveDraftUseCase::new(RecordingStore::default(), registry);

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(SaveDraftError::SessionNotFound)));
    }
}
