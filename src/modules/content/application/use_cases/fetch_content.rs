use crate::content::application::ports::outgoing::{ContentStore, StoreError};
use crate::content::domain::entities::Content;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum FetchContentError {
    StoreError(StoreError),
}

#[async_trait]
pub trait IFetchContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<Content, FetchContentError>;
}

#[derive(Debug, Clone)]
pub struct FetchContentUseCase<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> FetchContentUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ContentStore + Sync + Send> IFetchContentUseCase for FetchContentUseCase<S> {
    async fn execute(&self) -> Result<Content, FetchContentError> {
        self.store
            .get_content()
            .await
            .map_err(FetchContentError::StoreError)
    }
}
