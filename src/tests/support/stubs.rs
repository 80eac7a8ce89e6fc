use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginForm, LoginOutcome,
};
use crate::modules::blog::application::domain::entities::{BlogForm, BlogPost};
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, DeleteBlogUseCase, GetBlogsUseCase, GetSingleBlogUseCase,
    UpdateBlogUseCase,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceEditForm, ExperienceForm,
};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    GetSingleExperienceUseCase, UpdateExperienceUseCase,
};
use crate::modules::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::media::application::ports::outgoing::UploadError;
use crate::modules::project::application::domain::entities::{
    Project, ProjectEditForm, ProjectForm,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::skill::application::domain::entities::{Skill, SkillForm};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsUseCase,
};
use crate::shared::form::FormError;
use crate::shared::remote::RemoteError;

fn not_used() -> RemoteError {
    RemoteError::Transport("not used in this test".to_string())
}

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _form: LoginForm) -> Result<LoginOutcome, LoginError> {
        Err(LoginError::Form(FormError::Remote(not_used())))
    }
}

/* --------------------------------------------------
 * Media
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubUploadImageUseCase;

#[async_trait]
impl UploadImageUseCase for StubUploadImageUseCase {
    async fn execute(&self, _file: ImageFile) -> Result<UploadedImage, UploadError> {
        Err(UploadError::Transport("not used in this test".to_string()))
    }
}

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _form: ProjectForm,
        _thumbnail: Option<ImageFile>,
        _credential: &Credential,
    ) -> Result<Option<Project>, FormError> {
        Err(FormError::Remote(not_used()))
    }
}

#[derive(Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, RemoteError> {
        Err(not_used())
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _id: &str) -> Result<Project, RemoteError> {
        Err(not_used())
    }
}

#[derive(Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _id: &str,
        _form: ProjectEditForm,
        _credential: &Credential,
    ) -> Result<Option<Project>, FormError> {
        Err(FormError::Remote(not_used()))
    }
}

#[derive(Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: &str, _credential: &Credential) -> Result<(), RemoteError> {
        Err(not_used())
    }
}

/* --------------------------------------------------
 * Blog
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateBlogUseCase;

#[async_trait]
impl CreateBlogUseCase for StubCreateBlogUseCase {
    async fn execute(
        &self,
        _form: BlogForm,
        _credential: &Credential,
    ) -> Result<Option<BlogPost>, FormError> {
        Err(FormError::Remote(not_used()))
    }
}

#[derive(Clone)]
pub struct StubGetBlogsUseCase;

#[async_trait]
impl GetBlogsUseCase for StubGetBlogsUseCase {
    async fn execute(&self) -> Result<Vec<BlogPost>, RemoteError> {
        Err(not_used())
    }
}

#[derive(Clone)]
pub struct StubGetSingleBlogUseCase;

#[async_trait]
impl GetSingleBlogUseCase for StubGetSingleBlogUseCase {
    async fn execute(&self, _id: &str) -> Result<BlogPost, RemoteError> {
        Err(not_used())
    }
}

#[derive(Clone)]
pub struct StubUpdateBlogUseCase;

#[async_trait]
impl UpdateBlogUseCase for StubUpdateBlogUseCase {
    async fn execute(
        &self,
        _id: &str,
        _form: BlogForm,
        _credential: &Credential,
    ) -> Result<Option<BlogPost>, FormError> {
        Err(FormError::Remote(not_used()))
    }
}

#[derive(Clone)]
pub struct StubDeleteBlogUseCase;

#[async_trait]
impl DeleteBlogUseCase for StubDeleteBlogUseCase {
    async fn execute(&self, _id: &str, _credential: &Credential) -> Result<(), RemoteError> {
        Err(not_used())
    }
}

/* --------------------------------------------------
 * Skill
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateSkillUseCase;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkillUseCase {
    async fn execute(
        &self,
        _form: SkillForm,
        _icon: Option<ImageFile>,
        _credential: &Credential,
    ) -> Result<Option<Skill>, FormError> {
        Err(FormError::Remote(not_used()))
    }
}

#[derive(Clone)]
pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<Vec<Skill>, RemoteError> {
        Err(not_used())
    }
}

#[derive(Clone)]
pub struct StubDeleteSkillUseCase;

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkillUseCase {
    async fn execute(&self, _id: &str, _credential: &Credential) -> Result<(), RemoteError> {
        Err(not_used())
    }
}

/* --------------------------------------------------
 * Experience
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateExperienceUseCase;

#[async_trait]
impl CreateExperienceUseCase for StubCreateExperienceUseCase {
    async fn execute(
        &self,
        _form: ExperienceForm,
        _credential: &Credential,
    ) -> Result<Option<Experience>, FormError> {
        Err(FormError::Remote(not_used()))
    }
}

#[derive(Clone)]
pub struct StubGetExperiencesUseCase;

#[async_trait]
impl GetExperiencesUseCase for StubGetExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<Experience>, RemoteError> {
        Err(not_used())
    }
}

#[derive(Clone)]
pub struct StubGetSingleExperienceUseCase;

#[async_trait]
impl GetSingleExperienceUseCase for StubGetSingleExperienceUseCase {
    async fn execute(&self, _id: &str) -> Result<Experience, RemoteError> {
        Err(not_used())
    }
}

#[derive(Clone)]
pub struct StubUpdateExperienceUseCase;

#[async_trait]
impl UpdateExperienceUseCase for StubUpdateExperienceUseCase {
    async fn execute(
        &self,
        _id: &str,
        _form: ExperienceEditForm,
        _credential: &Credential,
    ) -> Result<Option<Experience>, FormError> {
        Err(FormError::Remote(not_used()))
    }
}

#[derive(Clone)]
pub struct StubDeleteExperienceUseCase;

#[async_trait]
impl DeleteExperienceUseCase for StubDeleteExperienceUseCase {
    async fn execute(&self, _id: &str, _credential: &Credential) -> Result<(), RemoteError> {
        Err(not_used())
    }
}
