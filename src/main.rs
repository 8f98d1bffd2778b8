pub mod modules;
pub use modules::audience;
pub use modules::content;
pub use modules::owner;
pub mod health;
pub mod shared;

use crate::audience::application::use_cases::clear_recruiter_visits::{
    ClearRecruiterVisitsUseCase, IClearRecruiterVisitsUseCase,
};
use crate::audience::application::use_cases::clear_visitor_messages::{
    ClearVisitorMessagesUseCase, IClearVisitorMessagesUseCase,
};
use crate::audience::application::use_cases::fetch_recruiter_visits::{
    FetchRecruiterVisitsUseCase, IFetchRecruiterVisitsUseCase,
};
use crate::audience::application::use_cases::fetch_visitor_messages::{
    FetchVisitorMessagesUseCase, IFetchVisitorMessagesUseCase,
};
use crate::audience::application::use_cases::log_recruiter_visit::{
    ILogRecruiterVisitUseCase, LogRecruiterVisitUseCase,
};
use crate::audience::application::use_cases::submit_visitor_message::{
    ISubmitVisitorMessageUseCase, SubmitVisitorMessageUseCase,
};
use crate::content::adapter::outgoing::HttpDocumentStore;
use crate::content::application::ports::outgoing::ContentStore;
use crate::content::application::use_cases::fetch_content::{
    FetchContentUseCase, IFetchContentUseCase,
};
use crate::content::application::use_cases::fetch_skills::{
    FetchSkillsUseCase, IFetchSkillsUseCase,
};
use crate::owner::application::services::{OwnerGate, PanelRegistry};
use crate::owner::application::use_cases::apply_draft_edit::{
    ApplyDraftEditUseCase, IApplyDraftEditUseCase,
};
use crate::owner::application::use_cases::clear_skills::{ClearSkillsUseCase, IClearSkillsUseCase};
use crate::owner::application::use_cases::load_draft::{ILoadDraftUseCase, LoadDraftUseCase};
use crate::owner::application::use_cases::rename_skill::{IRenameSkillUseCase, RenameSkillUseCase};
use crate::owner::application::use_cases::save_draft::{ISaveDraftUseCase, SaveDraftUseCase};
use crate::owner::application::use_cases::unlock_panel::{IUnlockPanelUseCase, UnlockPanelUseCase};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub fetch_content_use_case: Arc<dyn IFetchContentUseCase + Send + Sync>,
    pub fetch_skills_use_case: Arc<dyn IFetchSkillsUseCase + Send + Sync>,
    pub unlock_panel_use_case: Arc<dyn IUnlockPanelUseCase + Send + Sync>,
    pub load_draft_use_case: Arc<dyn ILoadDraftUseCase + Send + Sync>,
    pub apply_draft_edit_use_case: Arc<dyn IApplyDraftEditUseCase + Send + Sync>,
    pub save_draft_use_case: Arc<dyn ISaveDraftUseCase + Send + Sync>,
    pub rename_skill_use_case: Arc<dyn IRenameSkillUseCase + Send + Sync>,
    pub clear_skills_use_case: Arc<dyn IClearSkillsUseCase + Send + Sync>,
    pub submit_visitor_message_use_case: Arc<dyn ISubmitVisitorMessageUseCase + Send + Sync>,
    pub fetch_visitor_messages_use_case: Arc<dyn IFetchVisitorMessagesUseCase + Send + Sync>,
    pub clear_visitor_messages_use_case: Arc<dyn IClearVisitorMessagesUseCase + Send + Sync>,
    pub log_recruiter_visit_use_case: Arc<dyn ILogRecruiterVisitUseCase + Send + Sync>,
    pub fetch_recruiter_visits_use_case: Arc<dyn IFetchRecruiterVisitsUseCase + Send + Sync>,
    pub clear_recruiter_visits_use_case: Arc<dyn IClearRecruiterVisitsUseCase + Send + Sync>,
    pub panel_registry: Arc<PanelRegistry>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let store_url =
        env::var("CONTENT_STORE_URL").expect("CONTENT_STORE_URL is not set in .env file");
    let owner_password =
        env::var("OWNER_PANEL_PASSWORD").expect("OWNER_PANEL_PASSWORD is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // One HTTP client for the remote document store backs every port.
    let store = HttpDocumentStore::new(&store_url);
    let panel_registry = Arc::new(PanelRegistry::new());

    let fetch_content_use_case = FetchContentUseCase::new(store.clone());
    let fetch_skills_use_case = FetchSkillsUseCase::new(store.clone());

    let unlock_panel_use_case = UnlockPanelUseCase::new(
        OwnerGate::new(owner_password),
        Arc::clone(&panel_registry),
    );
    let load_draft_use_case = LoadDraftUseCase::new(store.clone(), Arc::clone(&panel_registry));
    let apply_draft_edit_use_case = ApplyDraftEditUseCase::new(Arc::clone(&panel_registry));
    let save_draft_use_case = SaveDraftUseCase::new(store.clone(), Arc::clone(&panel_registry));
    let rename_skill_use_case = RenameSkillUseCase::new(store.clone(), Arc::clone(&panel_registry));
    let clear_skills_use_case = ClearSkillsUseCase::new(store.clone(), Arc::clone(&panel_registry));

    let submit_visitor_message_use_case = SubmitVisitorMessageUseCase::new(store.clone());
    let fetch_visitor_messages_use_case = FetchVisitorMessagesUseCase::new(store.clone());
    let clear_visitor_messages_use_case = ClearVisitorMessagesUseCase::new(store.clone());
    let log_recruiter_visit_use_case = LogRecruiterVisitUseCase::new(store.clone());
    let fetch_recruiter_visits_use_case = FetchRecruiterVisitsUseCase::new(store.clone());
    let clear_recruiter_visits_use_case = ClearRecruiterVisitsUseCase::new(store.clone());

    let state = AppState {
        fetch_content_use_case: Arc::new(fetch_content_use_case),
        fetch_skills_use_case: Arc::new(fetch_skills_use_case),
        unlock_panel_use_case: Arc::new(unlock_panel_use_case),
        load_draft_use_case: Arc::new(load_draft_use_case),
        apply_draft_edit_use_case: Arc::new(apply_draft_edit_use_case),
        save_draft_use_case: Arc::new(save_draft_use_case),
        rename_skill_use_case: Arc::new(rename_skill_use_case),
        clear_skills_use_case: Arc::new(clear_skills_use_case),
        submit_visitor_message_use_case: Arc::new(submit_visitor_message_use_case),
        fetch_visitor_messages_use_case: Arc::new(fetch_visitor_messages_use_case),
        clear_visitor_messages_use_case: Arc::new(clear_visitor_messages_use_case),
        log_recruiter_visit_use_case: Arc::new(log_recruiter_visit_use_case),
        fetch_recruiter_visits_use_case: Arc::new(fetch_recruiter_visits_use_case),
        clear_recruiter_visits_use_case: Arc::new(clear_recruiter_visits_use_case),
        panel_registry,
    };

    // Readiness probes go straight at the store, bypassing the use cases.
    let store_probe: Arc<dyn ContentStore> = Arc::new(store);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&store_probe)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public site
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::audience::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::audience::adapter::incoming::web::routes::log_visit_handler);
    // Owner panel
    cfg.service(crate::owner::adapter::incoming::web::routes::unlock_panel_handler);
    cfg.service(crate::owner::adapter::incoming::web::routes::close_panel_handler);
    cfg.service(crate::owner::adapter::incoming::web::routes::load_draft_handler);
    cfg.service(crate::owner::adapter::incoming::web::routes::apply_draft_edit_handler);
    cfg.service(crate::owner::adapter::incoming::web::routes::save_draft_handler);
    cfg.service(crate::owner::adapter::incoming::web::routes::rename_skill_handler);
    cfg.service(crate::owner::adapter::incoming::web::routes::clear_skills_handler);
    cfg.service(crate::audience::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::audience::adapter::incoming::web::routes::clear_messages_handler);
    cfg.service(crate::audience::adapter::incoming::web::routes::get_visits_handler);
    cfg.service(crate::audience::adapter::incoming::web::routes::clear_visits_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
