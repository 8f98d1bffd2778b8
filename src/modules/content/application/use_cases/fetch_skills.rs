use crate::content::application::ports::outgoing::{ContentStore, StoreError};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum FetchSkillsError {
    StoreError(StoreError),
}

#[async_trait]
pub trait IFetchSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, FetchSkillsError>;
}

#[derive(Debug, Clone)]
pub struct FetchSkillsUseCase<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> FetchSkillsUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ContentStore + Sync + Send> IFetchSkillsUseCase for FetchSkillsUseCase<S> {
    async fn execute(&self) -> Result<Vec<String>, FetchSkillsError> {
        self.store
            .get_skills()
            .await
            .map_err(FetchSkillsError::StoreError)
    }
}
