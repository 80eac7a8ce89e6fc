pub mod modules;
pub use modules::auth;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::auth_api_http::AuthApiHttp;
use crate::auth::adapter::outgoing::in_memory_session_store::InMemorySessionStore;
use crate::auth::adapter::outgoing::jwt::JwtPayloadDecoder;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::entities::AuthChange;
use crate::auth::application::helpers::SessionCredentials;
use crate::auth::application::ports::outgoing::SessionStore;
use crate::auth::application::services::AuthEvents;
use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, logout_user::LogoutUseCase,
};

use crate::modules::blog::adapter::outgoing::BlogApiHttp;
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::service::{
    CreateBlogService, DeleteBlogService, GetBlogsService, GetSingleBlogService,
    UpdateBlogService,
};
use crate::modules::experience::adapter::outgoing::ExperienceApiHttp;
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    GetSingleExperienceService, UpdateExperienceService,
};
use crate::modules::media::adapter::outgoing::CloudinaryUploader;
use crate::modules::media::application::domain::entities::UploadPolicy;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::media::application::service::UploadImageService;
use crate::modules::project::adapter::outgoing::ProjectApiHttp;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::modules::skill::adapter::outgoing::SkillApiHttp;
use crate::modules::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSkillsService,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::DashboardConfig;
use crate::shared::form::InFlightSubmissions;
use crate::shared::remote::ApiClient;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub session_credentials: SessionCredentials,
    pub in_flight: InFlightSubmissions,
    pub project: ProjectUseCases,
    pub blog: BlogUseCases,
    pub skill: SkillUseCases,
    pub experience: ExperienceUseCases,
    pub media: MediaUseCases,
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

    info!("Starting dashboard...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = DashboardConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{e:#}")))?;

    let server_url = config.server_url();
    info!("Portfolio API: {}", config.api_base_url);
    info!("Server run on: {}", server_url);

    // One connection pool for the portfolio API and the image host
    let http = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(std::io::Error::other)?;
    let api = ApiClient::with_client(http.clone(), config.api_base_url.clone());

    // Auth
    let sessions = Arc::new(InMemorySessionStore::with_idle_ttl(config.session_idle_ttl));
    let auth_events = AuthEvents::new();
    spawn_auth_listener(&auth_events);
    spawn_session_sweeper(sessions.clone());

    let login_user_use_case = LoginUserUseCase::new(
        Arc::new(AuthApiHttp::new(api.clone())),
        Arc::new(JwtPayloadDecoder::new()),
        sessions.clone(),
        auth_events.clone(),
    );
    let logout_user_use_case = LogoutUseCase::new(sessions.clone(), auth_events);

    // Content
    let project_api = ProjectApiHttp::new(api.clone());
    let blog_api = BlogApiHttp::new(api.clone());
    let skill_api = SkillApiHttp::new(api.clone());
    let experience_api = ExperienceApiHttp::new(api);

    // Media
    let uploader = CloudinaryUploader::new(http, config.upload_url.clone(), config.upload_preset.clone());
    let upload_policy = UploadPolicy::new(config.upload_max_bytes);
    let upload: Arc<dyn UploadImageUseCase + Send + Sync> =
        Arc::new(UploadImageService::new(uploader, upload_policy));

    let state = AppState {
        auth: AuthUseCases {
            login: Arc::new(login_user_use_case),
            logout: Arc::new(logout_user_use_case),
        },
        session_credentials: SessionCredentials::new(sessions),
        in_flight: InFlightSubmissions::new(),
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(project_api.clone(), upload.clone())),
            get_list: Arc::new(GetProjectsService::new(project_api.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_api.clone())),
            update: Arc::new(UpdateProjectService::new(project_api.clone())),
            delete: Arc::new(DeleteProjectService::new(project_api)),
        },
        blog: BlogUseCases {
            create: Arc::new(CreateBlogService::new(blog_api.clone())),
            get_list: Arc::new(GetBlogsService::new(blog_api.clone())),
            get_single: Arc::new(GetSingleBlogService::new(blog_api.clone())),
            update: Arc::new(UpdateBlogService::new(blog_api.clone())),
            delete: Arc::new(DeleteBlogService::new(blog_api)),
        },
        skill: SkillUseCases {
            create: Arc::new(CreateSkillService::new(skill_api.clone(), upload.clone())),
            get_list: Arc::new(GetSkillsService::new(skill_api.clone())),
            delete: Arc::new(DeleteSkillService::new(skill_api)),
        },
        experience: ExperienceUseCases {
            create: Arc::new(CreateExperienceService::new(experience_api.clone())),
            get_list: Arc::new(GetExperiencesService::new(experience_api.clone())),
            get_single: Arc::new(GetSingleExperienceService::new(experience_api.clone())),
            update: Arc::new(UpdateExperienceService::new(experience_api.clone())),
            delete: Arc::new(DeleteExperienceService::new(experience_api)),
        },
        media: MediaUseCases { upload },
    };

    // Uploads arrive as raw bodies; leave headroom so the size policy, not
    // the payload limit, reports oversized files.
    let payload_limit = usize::try_from(config.upload_max_bytes)
        .unwrap_or(usize::MAX)
        .saturating_mul(2);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(payload_limit))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

/// Logs every sign-in and sign-out published by the auth use cases.
#[cfg(not(tarpaulin_include))]
fn spawn_auth_listener(events: &AuthEvents) {
    let mut rx = events.subscribe();
    actix_web::rt::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(AuthChange::SignedIn { session_id, user }) => {
                    info!("Session {} signed in as {}", session_id, user.id)
                }
                Ok(AuthChange::SignedOut { session_id }) => {
                    info!("Session {} signed out", session_id)
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Auth listener skipped {} events", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}

/// Drops idle sessions once a minute so abandoned logins don't pile up.
#[cfg(not(tarpaulin_include))]
fn spawn_session_sweeper(sessions: Arc<dyn SessionStore + Send + Sync>) {
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let dropped = sessions.sweep_expired();
            if dropped > 0 {
                debug!("Dropped {} expired sessions", dropped);
            }
        }
    });
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    // Project
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::create_project_with_thumbnail_handler,
    );
    cfg.service(crate::modules::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::delete_project_handler);
    // Blog
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blogs_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_single_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::create_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::update_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::delete_blog_handler);
    // Skill
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::create_skill_with_icon_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Experience
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::get_single_experience_handler,
    );
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Media
    cfg.service(crate::modules::media::adapter::incoming::web::routes::upload_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
