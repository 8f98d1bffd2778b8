use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::audience::application::ports::outgoing::{MessageLog, VisitLog};
use crate::audience::domain::entities::{RecruiterVisit, VisitorMessage};
use crate::content::application::ports::outgoing::{ContentStore, StoreError};
use crate::content::domain::entities::Content;
use crate::owner::domain::entities::OwnerCredential;

/// Client for the remote document store. The store exposes one actor-style
/// surface, so this adapter backs all three outgoing ports. Every operation
/// is a POST of a JSON argument object to `{base}/{method}`; privileged
/// calls include the owner password, which the store verifies itself.
///
/// No retries here: mutations must not be replayed blindly, and owner reads
/// with a bad password would just hammer the store with the same rejection.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, args: Value) -> Result<T, StoreError> {
        let response = self.send(method, args).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))
    }

    async fn call_void(&self, method: &str, args: Value) -> Result<(), StoreError> {
        self.send(method, args).await.map(|_| ())
    }

    async fn send(&self, method: &str, args: Value) -> Result<reqwest::Response, StoreError> {
        let url = format!("{}/{}", self.base_url, method);
        let response = self
            .http
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(StoreError::Rejected(format!("{status}: {body}")))
            }
        }
    }
}

#[async_trait]
impl ContentStore for HttpDocumentStore {
    async fn get_content(&self) -> Result<Content, StoreError> {
        self.call("getContent", json!({})).await
    }

    async fn update_content(
        &self,
        content: &Content,
        credential: &OwnerCredential,
    ) -> Result<(), StoreError> {
        self.call_void(
            "updateContent",
            json!({ "content": content, "password": credential.reveal() }),
        )
        .await
    }

    async fn get_skills(&self) -> Result<Vec<String>, StoreError> {
        self.call("getSkills", json!({})).await
    }

    async fn add_skill(
        &self,
        skill: &str,
        credential: &OwnerCredential,
    ) -> Result<(), StoreError> {
        self.call_void(
            "addSkill",
            json!({ "skill": skill, "password": credential.reveal() }),
        )
        .await
    }

    async fn remove_skill(
        &self,
        skill: &str,
        credential: &OwnerCredential,
    ) -> Result<(), StoreError> {
        self.call_void(
            "removeSkill",
            json!({ "skill": skill, "password": credential.reveal() }),
        )
        .await
    }

    async fn clear_skills(&self, credential: &OwnerCredential) -> Result<(), StoreError> {
        self.call_void("clearSkills", json!({ "password": credential.reveal() }))
            .await
    }
}

#[async_trait]
impl MessageLog for HttpDocumentStore {
    async fn submit_visitor_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), StoreError> {
        self.call_void(
            "submitVisitorMessage",
            json!({ "name": name, "email": email, "message": message }),
        )
        .await
    }

    async fn get_visitor_messages(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<VisitorMessage>, StoreError> {
        self.call(
            "getVisitorMessages",
            json!({ "password": credential.reveal() }),
        )
        .await
    }

    async fn clear_visitor_messages(&self, credential: &OwnerCredential) -> Result<(), StoreError> {
        self.call_void(
            "clearVisitorMessages",
            json!({ "password": credential.reveal() }),
        )
        .await
    }
}

#[async_trait]
impl VisitLog for HttpDocumentStore {
    async fn log_recruiter_visit(
        &self,
        is_recruiter: bool,
        company_name: Option<&str>,
    ) -> Result<(), StoreError> {
        self.call_void(
            "logRecruiterVisit",
            json!({ "isRecruiter": is_recruiter, "companyName": company_name }),
        )
        .await
    }

    async fn get_recruiter_visits(
        &self,
        credential: &OwnerCredential,
    ) -> Result<Vec<RecruiterVisit>, StoreError> {
        self.call(
            "getRecruiterVisits",
            json!({ "password": credential.reveal() }),
        )
        .await
    }

    async fn clear_recruiter_visits(&self, credential: &OwnerCredential) -> Result<(), StoreError> {
        self.call_void(
            "clearRecruiterVisits",
            json!({ "password": credential.reveal() }),
        )
        .await
    }
}
