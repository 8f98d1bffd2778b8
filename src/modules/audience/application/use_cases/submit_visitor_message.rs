use std::str::FromStr;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::audience::application::ports::outgoing::MessageLog;
use crate::content::application::ports::outgoing::StoreError;

#[derive(Debug, Clone)]
pub enum SubmitVisitorMessageError {
    MissingName,
    MissingEmail,
    MissingMessage,
    InvalidEmail,
    LogError(StoreError),
}

#[async_trait]
pub trait ISubmitVisitorMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), SubmitVisitorMessageError>;
}

/// Guards run before any remote call: a blank field or a malformed email
/// never reaches the store.
pub struct SubmitVisitorMessageUseCase<L: MessageLog> {
    log: L,
}

impl<L: MessageLog> SubmitVisitorMessageUseCase<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

#[async_trait]
impl<L: MessageLog + Sync + Send> ISubmitVisitorMessageUseCase for SubmitVisitorMessageUseCase<L> {
    async fn execute(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), SubmitVisitorMessageError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(SubmitVisitorMessageError::MissingName);
        }
        if email.is_empty() {
            return Err(SubmitVisitorMessageError::MissingEmail);
        }
        if message.is_empty() {
            return Err(SubmitVisitorMessageError::MissingMessage);
        }
        if EmailAddress::from_str(email).is_err() {
            return Err(SubmitVisitorMessageError::InvalidEmail);
        }

        self.log
            .submit_visitor_message(name, email, message)
            .await
            .map_err(SubmitVisitorMessageError::LogError)
    }
}
