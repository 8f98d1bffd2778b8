use async_trait::async_trait;

use crate::audience::domain::entities::VisitorMessage;
use crate::content::application::ports::outgoing::StoreError;
use crate::owner::domain::entities::OwnerCredential;

/// Visitor contact messages on the remote store. Submission is open to
/// anyone; reading and clearing require the owner credential.
#[async_trait]
pub trait MessageLog: Send + Sync {
    async fn submit_visitor_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), StoreError>;

    async fn get_visitor_messages(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<VisitorMessage>, StoreError>;

    async fn clear_visitor_messages(&self, credential: &OwnerCredential)
        -> Result<(), StoreError>;
}
