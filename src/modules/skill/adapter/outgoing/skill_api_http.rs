use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::skill::application::domain::entities::{Skill, SkillDraft};
use crate::modules::skill::application::ports::outgoing::SkillApi;
use crate::shared::remote::{ApiClient, RemoteError, ResourceClient};

pub const SKILL_COLLECTION: &str = "skill";

#[derive(Clone)]
pub struct SkillApiHttp {
    client: ResourceClient<Skill>,
}

impl SkillApiHttp {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: ResourceClient::new(api, SKILL_COLLECTION),
        }
    }
}

#[async_trait]
impl SkillApi for SkillApiHttp {
    async fn list(&self) -> Result<Vec<Skill>, RemoteError> {
        self.client.list(None).await
    }

    async fn create(
        &self,
        draft: &SkillDraft,
        credential: &Credential,
    ) -> Result<Option<Skill>, RemoteError> {
        self.client.create(draft, credential).await
    }

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.client.delete(id, credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tests::support::auth_helper::sample_credential;
    use crate::tests::support::fake_api::{FakeApi, Reply};

    #[actix_web::test]
    async fn test_create_returns_echoed_skill() {
        let fake = FakeApi::start(vec![(
            "POST",
            "/api/skill",
            Reply::json(
                201,
                json!({"status": true, "data": {"_id": "s1", "name": "Rust", "icon": "https://x/r.svg"}}),
            ),
        )])
        .await;

        let draft = SkillDraft {
            name: "Rust".to_string(),
            icon: "https://x/r.svg".to_string(),
        };
        let saved = SkillApiHttp::new(fake.api_client())
            .create(&draft, &sample_credential())
            .await
            .unwrap();

        assert_eq!(saved.map(|s| s.id), Some("s1".to_string()));
        assert_eq!(
            fake.requests()[0].content_type.as_deref(),
            Some("application/json")
        );
        fake.stop().await;
    }

    #[actix_web::test]
    async fn test_delete_reports_falsy_status() {
        let fake = FakeApi::start(vec![(
            "DELETE",
            "/api/skill/s1",
            Reply::json(200, json!({"status": false, "message": "Skill is in use"})),
        )])
        .await;

        let err = SkillApiHttp::new(fake.api_client())
            .delete("s1", &sample_credential())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RemoteError::Rejected {
                message: Some("Skill is in use".to_string())
            }
        );
        fake.stop().await;
    }
}
