use async_trait::async_trait;

use crate::audience::application::ports::outgoing::MessageLog;
use crate::content::application::ports::outgoing::StoreError;
use crate::owner::domain::entities::OwnerCredential;

#[derive(Debug, Clone)]
pub enum ClearVisitorMessagesError {
    LogError(StoreError),
}

#[async_trait]
pub trait IClearVisitorMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<(), ClearVisitorMessagesError>;
}

pub struct ClearVisitorMessagesUseCase<L: MessageLog> {
    log: L,
}

impl<L: MessageLog> ClearVisitorMessagesUseCase<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

#[async_trait]
impl<L: MessageLog + Sync + Send> IClearVisitorMessagesUseCase
    for ClearVisitorMessagesUseCase<L>
{
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<(), ClearVisitorMessagesError> {
        self.log
            .clear_visitor_messages(credential)
            .await
            .map_err(ClearVisitorMessagesError::LogError)
    }
}
