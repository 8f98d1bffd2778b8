use async_trait::async_trait;

use crate::audience::application::ports::outgoing::VisitLog;
use crate::audience::domain::entities::RecruiterVisit;
use crate::content::application::ports::outgoing::StoreError;
use crate::owner::domain::entities::OwnerCredential;

#[derive(Debug, Clone)]
pub enum FetchRecruiterVisitsError {
    LogError(StoreError),
}

#[async_trait]
pub trait IFetchRecruiterVisitsUseCase: Send + Sync {
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<RecruiterVisit>, FetchRecruiterVisitsError>;
}

pub struct FetchRecruiterVisitsUseCase<L: VisitLog> {
    log: L,
}

impl<L: VisitLog> FetchRecruiterVisitsUseCase<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

#[async_trait]
impl<L: VisitLog + Sync + Send> IFetchRecruiterVisitsUseCase for FetchRecruiterVisitsUseCase<L> {
    async fn execute(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<RecruiterVisit>, FetchRecruiterVisitsError> {
        let mut visits = self
            .log
            .get_recruiter_visits(credential)
            .await
            .map_err(FetchRecruiterVisitsError::LogError)?;

        visits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(visits)
    }
}
