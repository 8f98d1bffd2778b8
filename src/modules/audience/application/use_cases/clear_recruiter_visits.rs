use async_trait::async_trait;

use crate::audience::application::ports::outgoing::VisitLog;
use crate::content::application::ports::outgoing::StoreError;
use crate::owner::domain::entities::OwnerCredential;

#[derive(Debug, Clone)]
pub enum ClearRecruiterVisitsError {
    LogError(StoreError),
}

#[async_trait]
pub trait IClearRecruiterVisitsUseCase: Send + Sync {
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<(), ClearRecruiterVisitsError>;
}

pub struct ClearRecruiterVisitsUseCase<L: VisitLog> {
    log: L,
}

impl<L: VisitLog> ClearRecruiterVisitsUseCase<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

#[async_trait]
impl<L: VisitLog + Sync + Send> IClearRecruiterVisitsUseCase for ClearRecruiterVisitsUseCase<L> {
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<(), ClearRecruiterVisitsError> {
        self.log
            .clear_recruiter_visits(credential)
            .await
            .map_err(ClearRecruiterVisitsError::LogError)
    }
}
