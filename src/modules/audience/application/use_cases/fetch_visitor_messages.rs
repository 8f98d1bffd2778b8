use async_trait::async_trait;

use crate::audience::application::ports::outgoing::MessageLog;
use crate::audience::domain::entities::VisitorMessage;
use crate::content::application::ports::outgoing::StoreError;
use crate::owner::domain::entities::OwnerCredential;

#[derive(Debug, Clone)]
pub enum FetchVisitorMessagesError {
    LogError(StoreError),
}

#[async_trait]
pub trait IFetchVisitorMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<VisitorMessage>, FetchVisitorMessagesError>;
}

pub struct FetchVisitorMessagesUseCase<L: MessageLog> {
    log: L,
}

impl<L: MessageLog> FetchVisitorMessagesUseCase<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

#[async_trait]
impl<L: MessageLog + Sync + Send> IFetchVisitorMessagesUseCase
    for FetchVisitorMessagesUseCase<L>
{
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<VisitorMessage>, FetchVisitorMessagesError> {
        let mut messages = self
            .log
            .get_visitor_messages(credential)
            .await
            .map_err(FetchVisitorMessagesError::LogError)?;

        // Newest first for the panel.
        messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLog(Vec<VisitorMessage>);

    #[async_trait]
    impl MessageLog for FixedLog {
        async fn submit_visitor_message(
            &self,
            _name: &str,
            _email: &str,
            _message: &str,
        ) -> Result<(), StoreError> {
            Ok(())
        }

        async fn get_visitor_messages(
            &self,
            _credential: &OwnerCredential,
        ) -> Result<Vec<VisitorMessage>, StoreError> {
            Ok(self.0.clone())
        }

        async fn clear_visitor_messages(
            &self,
            _credential: &OwnerCredential,
        ) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn message(name: &str, timestamp: i64) -> VisitorMessage {
        VisitorMessage {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            message: "hi".to_string(),
            timestamp,
        }
    }

    #[tokio::test]
    async fn test_messages_come_back_newest_first() {
        let log = FixedLog(vec![
            message("oldest", 1_000),
            message("newest", 3_000),
            message("middle", 2_000),
        ]);
        let use_case = FetchVisitorMessagesUseCase::new(log);

        let messages = use_case
            .execute(&OwnerCredential::new("pw"))
            .await
            .unwrap();

        let names: Vec<_> = messages.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["newest", "middle", "oldest"]);
    }
}
