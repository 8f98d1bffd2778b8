use std::sync::Arc;

use actix_web::web;

use crate::audience::application::use_cases::clear_recruiter_visits::IClearRecruiterVisitsUseCase;
use crate::audience::application::use_cases::clear_visitor_messages::IClearVisitorMessagesUseCase;
use crate::audience::application::use_cases::fetch_recruiter_visits::IFetchRecruiterVisitsUseCase;
use crate::audience::application::use_cases::fetch_visitor_messages::IFetchVisitorMessagesUseCase;
use crate::audience::application::use_cases::log_recruiter_visit::ILogRecruiterVisitUseCase;
use crate::audience::application::use_cases::submit_visitor_message::ISubmitVisitorMessageUseCase;
use crate::content::application::use_cases::fetch_content::IFetchContentUseCase;
use crate::content::application::use_cases::fetch_skills::IFetchSkillsUseCase;
use crate::owner::application::services::PanelRegistry;
use crate::owner::application::use_cases::apply_draft_edit::IApplyDraftEditUseCase;
use crate::owner::application::use_cases::clear_skills::IClearSkillsUseCase;
use crate::owner::application::use_cases::load_draft::ILoadDraftUseCase;
use crate::owner::application::use_cases::rename_skill::IRenameSkillUseCase;
use crate::owner::application::use_cases::save_draft::ISaveDraftUseCase;
use crate::owner::application::use_cases::unlock_panel::IUnlockPanelUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    fetch_content: Arc<dyn IFetchContentUseCase + Send + Sync>,
    fetch_skills: Arc<dyn IFetchSkillsUseCase + Send + Sync>,
    unlock_panel: Arc<dyn IUnlockPanelUseCase + Send + Sync>,
    load_draft: Arc<dyn ILoadDraftUseCase + Send + Sync>,
    apply_draft_edit: Arc<dyn IApplyDraftEditUseCase + Send + Sync>,
    save_draft: Arc<dyn ISaveDraftUseCase + Send + Sync>,
    rename_skill: Arc<dyn IRenameSkillUseCase + Send + Sync>,
    clear_skills: Arc<dyn IClearSkillsUseCase + Send + Sync>,
    submit_visitor_message: Arc<dyn ISubmitVisitorMessageUseCase + Send + Sync>,
    fetch_visitor_messages: Arc<dyn IFetchVisitorMessagesUseCase + Send + Sync>,
    clear_visitor_messages: Arc<dyn IClearVisitorMessagesUseCase + Send + Sync>,
    log_recruiter_visit: Arc<dyn ILogRecruiterVisitUseCase + Send + Sync>,
    fetch_recruiter_visits: Arc<dyn IFetchRecruiterVisitsUseCase + Send + Sync>,
    clear_recruiter_visits: Arc<dyn IClearRecruiterVisitsUseCase + Send + Sync>,
    panel_registry: Arc<PanelRegistry>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            fetch_content: Arc::new(StubFetchContentUseCase),
            fetch_skills: Arc::new(StubFetchSkillsUseCase),
            unlock_panel: Arc::new(StubUnlockPanelUseCase),
            load_draft: Arc::new(StubLoadDraftUseCase),
            apply_draft_edit: Arc::new(StubApplyDraftEditUseCase),
            save_draft: Arc::new(StubSaveDraftUseCase),
            rename_skill: Arc::new(StubRenameSkillUseCase),
            clear_skills: Arc::new(StubClearSkillsUseCase),
            submit_visitor_message: Arc::new(StubSubmitVisitorMessageUseCase),
            fetch_visitor_messages: Arc::new(StubFetchVisitorMessagesUseCase),
            clear_visitor_messages: Arc::new(StubClearVisitorMessagesUseCase),
            log_recruiter_visit: Arc::new(StubLogRecruiterVisitUseCase),
            fetch_recruiter_visits: Arc::new(StubFetchRecruiterVisitsUseCase),
            clear_recruiter_visits: Arc::new(StubClearRecruiterVisitsUseCase),
            panel_registry: Arc::new(PanelRegistry::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_fetch_content(
        mut self,
        uc: impl IFetchContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_content = Arc::new(uc);
        self
    }

    pub fn with_fetch_skills(
        mut self,
        uc: impl IFetchSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_skills = Arc::new(uc);
        self
    }

    pub fn with_unlock_panel(
        mut self,
        uc: impl IUnlockPanelUseCase + Send + Sync + 'static,
    ) -> Self {
        self.unlock_panel = Arc::new(uc);
        self
    }

    pub fn with_load_draft(mut self, uc: impl ILoadDraftUseCase + Send + Sync + 'static) -> Self {
        self.load_draft = Arc::new(uc);
        self
    }

    pub fn with_apply_draft_edit(
        mut self,
        uc: impl IApplyDraftEditUseCase + Send + Sync + 'static,
    ) -> Self {
        self.apply_draft_edit = Arc::new(uc);
        self
    }

    pub fn with_save_draft(mut self, uc: impl ISaveDraftUseCase + Send + Sync + 'static) -> Self {
        self.save_draft = Arc::new(uc);
        self
    }

    pub fn with_rename_skill(
        mut self,
        uc: impl IRenameSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.rename_skill = Arc::new(uc);
        self
    }

    pub fn with_clear_skills(
        mut self,
        uc: impl IClearSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.clear_skills = Arc::new(uc);
        self
    }

    pub fn with_submit_visitor_message_arc(
        mut self,
        uc: Arc<dyn ISubmitVisitorMessageUseCase + Send + Sync>,
    ) -> Self {
        self.submit_visitor_message = uc;
        self
    }

    pub fn with_fetch_visitor_messages(
        mut self,
        uc: impl IFetchVisitorMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_visitor_messages = Arc::new(uc);
        self
    }

    pub fn with_clear_visitor_messages(
        mut self,
        uc: impl IClearVisitorMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.clear_visitor_messages = Arc::new(uc);
        self
    }

    pub fn with_log_recruiter_visit(
        mut self,
        uc: impl ILogRecruiterVisitUseCase + Send + Sync + 'static,
    ) -> Self {
        self.log_recruiter_visit = Arc::new(uc);
        self
    }

    pub fn with_fetch_recruiter_visits(
        mut self,
        uc: impl IFetchRecruiterVisitsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_recruiter_visits = Arc::new(uc);
        self
    }

    pub fn with_clear_recruiter_visits(
        mut self,
        uc: impl IClearRecruiterVisitsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.clear_recruiter_visits = Arc::new(uc);
        self
    }

    pub fn with_panel_registry(mut self, registry: Arc<PanelRegistry>) -> Self {
        self.panel_registry = registry;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            fetch_content_use_case: self.fetch_content,
            fetch_skills_use_case: self.fetch_skills,
            unlock_panel_use_case: self.unlock_panel,
            load_draft_use_case: self.load_draft,
            apply_draft_edit_use_case: self.apply_draft_edit,
            save_draft_use_case: self.save_draft,
            rename_skill_use_case: self.rename_skill,
            clear_skills_use_case: self.clear_skills,
            submit_visitor_message_use_case: self.submit_visitor_message,
            fetch_visitor_messages_use_case: self.fetch_visitor_messages,
            clear_visitor_messages_use_case: self.clear_visitor_messages,
            log_recruiter_visit_use_case: self.log_recruiter_visit,
            fetch_recruiter_visits_use_case: self.fetch_recruiter_visits,
            clear_recruiter_visits_use_case: self.clear_recruiter_visits,
            panel_registry: self.panel_registry,
        })
    }
}
