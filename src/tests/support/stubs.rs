//! Inert default implementations for every use-case trait, used by
//! `TestAppStateBuilder`. Route tests swap in a real double only for the
//! use case under test.

use async_trait::async_trait;
use uuid::Uuid;

use crate::audience::application::use_cases::clear_recruiter_visits::{
    ClearRecruiterVisitsError, IClearRecruiterVisitsUseCase,
};
use crate::audience::application::use_cases::clear_visitor_messages::{
    ClearVisitorMessagesError, IClearVisitorMessagesUseCase,
};
use crate::audience::application::use_cases::fetch_recruiter_visits::{
    FetchRecruiterVisitsError, IFetchRecruiterVisitsUseCase,
};
use crate::audience::application::use_cases::fetch_visitor_messages::{
    FetchVisitorMessagesError, IFetchVisitorMessagesUseCase,
};
use crate::audience::application::use_cases::log_recruiter_visit::{
    ILogRecruiterVisitUseCase, LogRecruiterVisitError,
};
use crate::audience::application::use_cases::submit_visitor_message::{
    ISubmitVisitorMessageUseCase, SubmitVisitorMessageError,
};
use crate::audience::domain::entities::{RecruiterVisit, VisitorMessage};
use crate::content::application::use_cases::fetch_content::{
    FetchContentError, IFetchContentUseCase,
};
use crate::content::application::use_cases::fetch_skills::{FetchSkillsError, IFetchSkillsUseCase};
use crate::content::domain::draft::{DraftCommand, DraftSnapshot};
use crate::content::domain::entities::{ContactDetails, Content};
use crate::owner::application::use_cases::apply_draft_edit::{
    ApplyDraftEditError, IApplyDraftEditUseCase,
};
use crate::owner::application::use_cases::clear_skills::{ClearSkillsError, IClearSkillsUseCase};
use crate::owner::application::use_cases::load_draft::{ILoadDraftUseCase, LoadDraftError};
use crate::owner::application::use_cases::rename_skill::{IRenameSkillUseCase, RenameSkillError};
use crate::owner::application::use_cases::save_draft::{
    ISaveDraftUseCase, SaveDraftError, SaveReport,
};
use crate::owner::application::use_cases::unlock_panel::{IUnlockPanelUseCase, UnlockPanelError};
use crate::owner::domain::entities::OwnerCredential;

pub fn empty_content() -> Content {
    Content {
        hero_text: String::new(),
        contact: ContactDetails {
            address: String::new(),
            phone: String::new(),
            email: String::new(),
        },
        education: vec![],
        experience: vec![],
        certifications: vec![],
        hobbies: vec![],
        projects: vec![],
    }
}

pub struct StubFetchContentUseCase;

#[async_trait]
impl IFetchContentUseCase for StubFetchContentUseCase {
    async fn execute(&self) -> Result<Content, FetchContentError> {
        Ok(empty_content())
    }
}

pub struct StubFetchSkillsUseCase;

#[async_trait]
impl IFetchSkillsUseCase for StubFetchSkillsUseCase {
    async fn execute(&self) -> Result<Vec<String>, FetchSkillsError> {
        Ok(vec![])
    }
}

pub struct StubUnlockPanelUseCase;

#[async_trait]
impl IUnlockPanelUseCase for StubUnlockPanelUseCase {
    async fn execute(&self, _password: &str) -> Result<Uuid, UnlockPanelError> {
        Err(UnlockPanelError::IncorrectPassword)
    }
}

pub struct StubLoadDraftUseCase;

#[async_trait]
impl ILoadDraftUseCase for StubLoadDraftUseCase {
    async fn execute(&self, _session_id: Uuid) -> Result<DraftSnapshot, LoadDraftError> {
        Err(LoadDraftError::SessionNotFound)
    }
}

pub struct StubApplyDraftEditUseCase;

#[async_trait]
impl IApplyDraftEditUseCase for StubApplyDraftEditUseCase {
    async fn execute(
        &self,
        _session_id: Uuid,
        _command: DraftCommand,
    ) -> Result<DraftSnapshot, ApplyDraftEditError> {
        Err(ApplyDraftEditError::SessionNotFound)
    }
}

pub struct StubSaveDraftUseCase;

#[async_trait]
impl ISaveDraftUseCase for StubSaveDraftUseCase {
    async fn execute(&self, _session_id: Uuid) -> Result<SaveReport, SaveDraftError> {
        Err(SaveDraftError::SessionNotFound)
    }
}

pub struct StubRenameSkillUseCase;

#[async_trait]
impl IRenameSkillUseCase for StubRenameSkillUseCase {
    async fn execute(
        &self,
        _session_id: Uuid,
        _old: &str,
        _new: &str,
    ) -> Result<Vec<String>, RenameSkillError> {
        Err(RenameSkillError::SessionNotFound)
    }
}

pub struct StubClearSkillsUseCase;

#[async_trait]
impl IClearSkillsUseCase for StubClearSkillsUseCase {
    async fn execute(&self, _session_id: Uuid) -> Result<(), ClearSkillsError> {
        Err(ClearSkillsError::SessionNotFound)
    }
}

pub struct StubSubmitVisitorMessageUseCase;

#[async_trait]
impl ISubmitVisitorMessageUseCase for StubSubmitVisitorMessageUseCase {
    async fn execute(
        &self,
        _name: &str,
        _email: &str,
        _message: &str,
    ) -> Result<(), SubmitVisitorMessageError> {
        Ok(())
    }
}

pub struct StubFetchVisitorMessagesUseCase;

#[async_trait]
impl IFetchVisitorMessagesUseCase for StubFetchVisitorMessagesUseCase {
    async fn execute(
        &self,
        _credential: &OwnerCredential,
    ) -> Result<Vec<VisitorMessage>, FetchVisitorMessagesError> {
        Ok(vec![])
    }
}

pub struct StubClearVisitorMessagesUseCase;

#[async_trait]
impl IClearVisitorMessagesUseCase for StubClearVisitorMessagesUseCase {
    async fn execute(
        &self,
        _credential: &OwnerCredential,
    ) -> Result<(), ClearVisitorMessagesError> {
        Ok(())
    }
}

pub struct StubLogRecruiterVisitUseCase;

#[async_trait]
impl ILogRecruiterVisitUseCase for StubLogRecruiterVisitUseCase {
    async fn execute(
        &self,
        _is_recruiter: bool,
        _company_name: Option<String>,
    ) -> Result<(), LogRecruiterVisitError> {
        Ok(())
    }
}

pub struct StubFetchRecruiterVisitsUseCase;

#[async_trait]
impl IFetchRecruiterVisitsUseCase for StubFetchRecruiterVisitsUseCase {
    async fn execute(
        &self,
        _credential: &OwnerCredential,
    ) -> Result<Vec<RecruiterVisit>, FetchRecruiterVisitsError> {
        Ok(vec![])
    }
}

pub struct StubClearRecruiterVisitsUseCase;

#[async_trait]
impl IClearRecruiterVisitsUseCase for StubClearRecruiterVisitsUseCase {
    async fn execute(
        &self,
        _credential: &OwnerCredential,
    ) -> Result<(), ClearRecruiterVisitsError> {
        Ok(())
    }
}
