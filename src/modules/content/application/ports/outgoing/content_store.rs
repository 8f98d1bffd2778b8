use crate::content::domain::entities::Content;
use crate::owner::domain::entities::OwnerCredential;
use async_trait::async_trait;

/// Failure taxonomy shared by every remote-store port: the store is one
/// actor, so message and visit logs fail the same three ways the document
/// calls do.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Owner password rejected by the content store")]
    Unauthorized,

    #[error("Content store rejected the call: {0}")]
    Rejected(String),

    #[error("Content store unreachable: {0}")]
    Transport(String),
}

/// The remote document store, as far as site content is concerned. The
/// document is a singleton; skills are a separate resource with their own
/// add/remove/clear operations. Privileged calls carry the owner credential,
/// which the store verifies itself.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get_content(&self) -> Result<Content, StoreError>;

    async fn update_content(
        &self,
        content: &Content,
        credential: &OwnerCredential,
    ) -> Result<(), StoreError>;

    async fn get_skills(&self) -> Result<Vec<String>, StoreError>;

    async fn add_skill(&self, skill: &str, credential: &OwnerCredential)
        -> Result<(), StoreError>;

    async fn remove_skill(
        &self,
        skill: &str,
        credential: &OwnerCredential,
    ) -> Result<(), StoreError>;

    async fn clear_skills(&self, credential: &OwnerCredential) -> Result<(), StoreError>;
}
