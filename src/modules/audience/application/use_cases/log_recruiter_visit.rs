use async_trait::async_trait;

use crate::audience::application::ports::outgoing::VisitLog;
use crate::content::application::ports::outgoing::StoreError;

#[derive(Debug, Clone)]
pub enum LogRecruiterVisitError {
    MissingCompanyName,
    LogError(StoreError),
}

#[async_trait]
pub trait ILogRecruiterVisitUseCase: Send + Sync {
    async fn execute(
        &self,
        is_recruiter: bool,
        company_name: Option<String>,
    ) -> Result<(), LogRecruiterVisitError>;
}

pub struct LogRecruiterVisitUseCase<L: VisitLog> {
    log: L,
}

impl<L: VisitLog> LogRecruiterVisitUseCase<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

#[async_trait]
impl<L: VisitLog + Sync + Send> ILogRecruiterVisitUseCase for LogRecruiterVisitUseCase<L> {
    async fn execute(
        &self,
        is_recruiter: bool,
        company_name: Option<String>,
    ) -> Result<(), LogRecruiterVisitError> {
        // Recruiters must name their company; everyone else is logged
        // without one, whatever the form carried.
        let company = if is_recruiter {
            let trimmed = company_name
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string();
            if trimmed.is_empty() {
                return Err(LogRecruiterVisitError::MissingCompanyName);
            }
            Some(trimmed)
        } else {
            None
        };

        self.log
            .log_recruiter_visit(is_recruiter, company.as_deref())
            .await
            .map_err(LogRecruiterVisitError::LogError)
    }
}
