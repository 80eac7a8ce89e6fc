use async_trait::async_trait;

use crate::auth::application::domain::entities::Credential;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceDraft};
use crate::modules::experience::application::ports::outgoing::ExperienceApi;
use crate::shared::remote::{ApiClient, RemoteError, ResourceClient};

pub const EXPERIENCE_COLLECTION: &str = "experience";

#[derive(Clone)]
pub struct ExperienceApiHttp {
    client: ResourceClient<Experience>,
}

impl ExperienceApiHttp {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: ResourceClient::new(api, EXPERIENCE_COLLECTION),
        }
    }
}

#[async_trait]
impl ExperienceApi for ExperienceApiHttp {
    async fn list(&self) -> Result<Vec<Experience>, RemoteError> {
        self.client.list(None).await
    }

    async fn get(&self, id: &str) -> Result<Experience, RemoteError> {
        self.client.get(id, None).await
    }

    async fn create(
        &self,
        draft: &ExperienceDraft,
        credential: &Credential,
    ) -> Result<Option<Experience>, RemoteError> {
        self.client.create(draft, credential).await
    }

    async fn update(
        &self,
        id: &str,
        draft: &ExperienceDraft,
        credential: &Credential,
    ) -> Result<Option<Experience>, RemoteError> {
        self.client.update(id, draft, credential).await
    }

    async fn delete(&self, id: &str, credential: &Credential) -> Result<(), RemoteError> {
        self.client.delete(id, credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    use crate::tests::support::auth_helper::sample_credential;
    use crate::tests::support::fake_api::{FakeApi, Reply};

    #[actix_web::test]
    async fn test_list_mixes_date_formats() {
        let fake = FakeApi::start(vec![(
            "GET",
            "/api/experience",
            Reply::json(
                200,
                json!({"status": true, "data": [
                    {"_id": "e1", "company": "Acme", "startDate": "2021-05-01T00:00:00.000Z",
                     "endDate": "2022-01-31T00:00:00.000Z"},
                    {"_id": "e2", "company": "Globex", "startDate": "2022-02-01",
                     "endDate": null, "isCurrent": true}
                ]}),
            ),
        )])
        .await;

        let list = ExperienceApiHttp::new(fake.api_client()).list().await.unwrap();
        assert_eq!(list[0].end_date, NaiveDate::from_ymd_opt(2022, 1, 31));
        assert_eq!(list[1].end_date, None);
        assert!(list[1].is_current);
        fake.stop().await;
    }

    #[actix_web::test]
    async fn test_update_sends_plain_dates() {
        let fake = FakeApi::start(vec![(
            "PATCH",
            "/api/experience/e1",
            Reply::json(200, json!({"status": true})),
        )])
        .await;

        let draft = ExperienceDraft {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            description: "APIs".to_string(),
            start_date: NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 1, 31),
            location: "Remote".to_string(),
            technologies: vec!["Rust".to_string()],
            is_current: false,
            company_icon: String::new(),
        };
        ExperienceApiHttp::new(fake.api_client())
            .update("e1", &draft, &sample_credential())
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&fake.requests()[0].body).unwrap();
        assert_eq!(body["startDate"], "2021-05-01");
        assert_eq!(body["endDate"], "2022-01-31");
        fake.stop().await;
    }

    #[actix_web::test]
    async fn test_get_missing_record() {
        let fake = FakeApi::start(vec![]).await;

        let err = ExperienceApiHttp::new(fake.api_client())
            .get("nope")
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::NotFound { .. }));
        fake.stop().await;
    }
}
