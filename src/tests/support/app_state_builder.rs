use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::outgoing::in_memory_session_store::InMemorySessionStore;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::SessionCredentials;
use crate::auth::application::services::AuthEvents;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::logout_user::{ILogoutUseCase, LogoutUseCase};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, DeleteBlogUseCase, GetBlogsUseCase, GetSingleBlogUseCase,
    UpdateBlogUseCase,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    GetSingleExperienceUseCase, UpdateExperienceUseCase,
};
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::shared::form::InFlightSubmissions;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    session_store: InMemorySessionStore,
    login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    upload: Arc<dyn UploadImageUseCase + Send + Sync>,

    create_project: Arc<dyn CreateProjectUseCase + Send + Sync>,
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    get_single_project: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    update_project: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    delete_project: Arc<dyn DeleteProjectUseCase + Send + Sync>,

    create_blog: Arc<dyn CreateBlogUseCase + Send + Sync>,
    get_blogs: Arc<dyn GetBlogsUseCase + Send + Sync>,
    get_single_blog: Arc<dyn GetSingleBlogUseCase + Send + Sync>,
    update_blog: Arc<dyn UpdateBlogUseCase + Send + Sync>,
    delete_blog: Arc<dyn DeleteBlogUseCase + Send + Sync>,

    create_skill: Arc<dyn CreateSkillUseCase + Send + Sync>,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    delete_skill: Arc<dyn DeleteSkillUseCase + Send + Sync>,

    create_experience: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    get_experiences: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    get_single_experience: Arc<dyn GetSingleExperienceUseCase + Send + Sync>,
    update_experience: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    delete_experience: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            session_store: InMemorySessionStore::new(),
            login: Arc::new(StubLoginUserUseCase),
            upload: Arc::new(StubUploadImageUseCase),

            create_project: Arc::new(StubCreateProjectUseCase),
            get_projects: Arc::new(StubGetProjectsUseCase),
            get_single_project: Arc::new(StubGetSingleProjectUseCase),
            update_project: Arc::new(StubUpdateProjectUseCase),
            delete_project: Arc::new(StubDeleteProjectUseCase),

            create_blog: Arc::new(StubCreateBlogUseCase),
            get_blogs: Arc::new(StubGetBlogsUseCase),
            get_single_blog: Arc::new(StubGetSingleBlogUseCase),
            update_blog: Arc::new(StubUpdateBlogUseCase),
            delete_blog: Arc::new(StubDeleteBlogUseCase),

            create_skill: Arc::new(StubCreateSkillUseCase),
            get_skills: Arc::new(StubGetSkillsUseCase),
            delete_skill: Arc::new(StubDeleteSkillUseCase),

            create_experience: Arc::new(StubCreateExperienceUseCase),
            get_experiences: Arc::new(StubGetExperiencesUseCase),
            get_single_experience: Arc::new(StubGetSingleExperienceUseCase),
            update_experience: Arc::new(StubUpdateExperienceUseCase),
            delete_experience: Arc::new(StubDeleteExperienceUseCase),
        }
    }
}

impl TestAppStateBuilder {
    /// Sessions seen by the `DashboardSession` extractor and by logout.
    pub fn with_session_store(mut self, store: InMemorySessionStore) -> Self {
        self.session_store = store;
        self
    }

    pub fn with_login(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_upload(mut self, uc: impl UploadImageUseCase + Send + Sync + 'static) -> Self {
        self.upload = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_project = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.get_projects = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_project = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_project = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_project = Arc::new(uc);
        self
    }

    pub fn with_create_blog(mut self, uc: impl CreateBlogUseCase + Send + Sync + 'static) -> Self {
        self.create_blog = Arc::new(uc);
        self
    }

    pub fn with_get_blogs(mut self, uc: impl GetBlogsUseCase + Send + Sync + 'static) -> Self {
        self.get_blogs = Arc::new(uc);
        self
    }

    pub fn with_get_single_blog(
        mut self,
        uc: impl GetSingleBlogUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_blog = Arc::new(uc);
        self
    }

    pub fn with_update_blog(mut self, uc: impl UpdateBlogUseCase + Send + Sync + 'static) -> Self {
        self.update_blog = Arc::new(uc);
        self
    }

    pub fn with_delete_blog(mut self, uc: impl DeleteBlogUseCase + Send + Sync + 'static) -> Self {
        self.delete_blog = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + Send + Sync + 'static) -> Self {
        self.create_skill = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.get_skills = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + Send + Sync + 'static) -> Self {
        self.delete_skill = Arc::new(uc);
        self
    }

    pub fn with_create_experience(
        mut self,
        uc: impl CreateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_experience = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_experiences = Arc::new(uc);
        self
    }

    pub fn with_get_single_experience(
        mut self,
        uc: impl GetSingleExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_experience = Arc::new(uc);
        self
    }

    pub fn with_update_experience(
        mut self,
        uc: impl UpdateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_experience = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(
        mut self,
        uc: impl DeleteExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_experience = Arc::new(uc);
        self
    }

    /// Logout is the real use case over the builder's store, so tests can
    /// watch the session disappear.
    pub fn build(self) -> web::Data<AppState> {
        let sessions = Arc::new(self.session_store);
        let logout: Arc<dyn ILogoutUseCase + Send + Sync> =
            Arc::new(LogoutUseCase::new(sessions.clone(), AuthEvents::new()));

        web::Data::new(AppState {
            auth: AuthUseCases {
                login: self.login,
                logout,
            },
            session_credentials: SessionCredentials::new(sessions),
            in_flight: InFlightSubmissions::new(),
            project: ProjectUseCases {
                create: self.create_project,
                get_list: self.get_projects,
                get_single: self.get_single_project,
                update: self.update_project,
                delete: self.delete_project,
            },
            blog: BlogUseCases {
                create: self.create_blog,
                get_list: self.get_blogs,
                get_single: self.get_single_blog,
                update: self.update_blog,
                delete: self.delete_blog,
            },
            skill: SkillUseCases {
                create: self.create_skill,
                get_list: self.get_skills,
                delete: self.delete_skill,
            },
            experience: ExperienceUseCases {
                create: self.create_experience,
                get_list: self.get_experiences,
                get_single: self.get_single_experience,
                update: self.update_experience,
                delete: self.delete_experience,
            },
            media: MediaUseCases {
                upload: self.upload,
            },
        })
    }
}
