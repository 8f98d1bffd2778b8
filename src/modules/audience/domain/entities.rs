use serde::{Deserialize, Serialize};

/// Contact message left by any visitor. Append-only on the store; read and
/// bulk-cleared only with an owner credential. Timestamps are store capture
/// time in nanoseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VisitorMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: i64,
}

/// One answer to the recruiter prompt shown before the site, logged once
/// per visit. Non-recruiters carry no company.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecruiterVisit {
    pub timestamp: i64,
    pub company_name: Option<String>,
}
