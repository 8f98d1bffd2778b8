use async_trait::async_trait;

use crate::audience::domain::entities::RecruiterVisit;
use crate::content::application::ports::outgoing::StoreError;
use crate::owner::domain::entities::OwnerCredential;

/// Recruiter-prompt answers on the remote store. Logging is open to anyone;
/// reading and clearing require the owner credential.
#[async_trait]
pub trait VisitLog: Send + Sync {
    async fn log_recruiter_visit(
        &self,
        is_recruiter: bool,
        company_name: Option<&str>,
    ) -> Result<(), StoreError>;

    async fn get_recruiter_visits(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<RecruiterVisit>, StoreError>;

    async fn clear_recruiter_visits(&self, credential: &OwnerCredential)
        -> Result<(), StoreError>;
}
