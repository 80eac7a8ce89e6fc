use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::domain::entities::Credential;
use crate::modules::blog::application::domain::entities::{BlogDraft, BlogFields, BlogPost};
use crate::modules::blog::application::ports::outgoing::BlogApi as BlogApiPort;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::experience::application::ports::outgoing::ExperienceApi as ExperienceApiPort;
use crate::modules::media::application::domain::entities::{ImageFile, UploadedImage};
use crate::modules::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::modules::media::application::ports::outgoing::UploadError;
use crate::modules::project::application::domain::entities::{
    Project, ProjectDraft, ProjectPatch,
};
use crate::modules::project::application::ports::outgoing::ProjectApi as ProjectApiPort;
use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::modules::skill::application::ports::outgoing::SkillApi as SkillApiPort;
use crate::shared::remote::RemoteError;

mock! {
    pub ProjectApi {}
    #[async_trait]
    impl ProjectApiPort for ProjectApi {
        async fn list(&self) -> Result<Vec<Project>, RemoteError>;
        async fn get(&self, id: &str) -> Result<Project, RemoteError>;
        async fn create(
            &self,
            draft: &ProjectDraft,
            credential: &Credential,
        ) -> Result<Option<Project>, RemoteError>;
        async fn update(
            &self,
            id: &str,
            patch: &ProjectPatch,
            credential: &Credential,
        ) -> Result<Option<Project>, RemoteError>;
        async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
    }
}

mock! {
    pub BlogApi {}
    #[async_trait]
    impl BlogApiPort for BlogApi {
        async fn list(&self) -> Result<Vec<BlogPost>, RemoteError>;
        async fn get(&self, id: &str) -> Result<BlogPost, RemoteError>;
        async fn create(
            &self,
            draft: &BlogDraft,
            credential: &Credential,
        ) -> Result<Option<BlogPost>, RemoteError>;
        async fn update(
            &self,
            id: &str,
            fields: &BlogFields,
            credential: &Credential,
        ) -> Result<Option<BlogPost>, RemoteError>;
        async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
    }
}

mock! {
    pub SkillApi {}
    #[async_trait]
    impl SkillApiPort for SkillApi {
        async fn list(&self) -> Result<Vec<Skill>, RemoteError>;
        async fn create(
            &self,
            draft: &SkillDraft,
            credential: &Credential,
        ) -> Result<Option<Skill>, RemoteError>;
        async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
    }
}

mock! {
    pub ExperienceApi {}
    #[async_trait]
    impl ExperienceApiPort for ExperienceApi {
        async fn list(&self) -> Result<Vec<Experience>, RemoteError>;
        async fn get(&self, id: &str) -> Result<Experience, RemoteError>;
        async fn create(
            &self,
            draft: &ExperienceDraft,
            credential: &Credential,
        ) -> Result<Option<Experience>, RemoteError>;
        async fn update(
            &self,
            id: &str,
            draft: &ExperienceDraft,
            credential: &Credential,
        ) -> Result<Option<Experience>, RemoteError>;
        async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError>;
    }
}

mock! {
    pub UploadImage {}
    #[async_trait]
    impl UploadImageUseCase for UploadImage {
        async fn execute(&self, file: ImageFile) -> Result<UploadedImage, UploadError>;
    }
}
