use actix_web::{patch, web, Responder};

use crate::auth::adapter::incoming::web::extractors::session::DashboardSession;
use crate::modules::blog::application::domain::entities::BlogForm;
use crate::modules::blog::application::ports::incoming::use_cases::{
    BLOG_UPDATED, DASHBOARD_HOME, UPDATE_BLOG_FAILED,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/dashboard/blogs/{id}")]
pub async fn update_blog_handler(
    session: DashboardSession,
    path: web::Path<String>,
    req: web::Json<BlogForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(_permit) = data
        .in_flight
        .try_acquire(session.submission_key(&format!("blog:edit:{}", id)))
    else {
        return ApiResponse::busy();
    };

    match data
        .blog
        .update
        .execute(&id, req.into_inner(), &session.credential)
        .await
    {
        Ok(saved) => ApiResponse::submitted(saved, BLOG_UPDATED, DASHBOARD_HOME),
        Err(err) => ApiResponse::from_form_error(&err, UPDATE_BLOG_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::Credential;
    use crate::modules::blog::application::domain::entities::BlogPost;
    use crate::modules::blog::application::ports::incoming::use_cases::UpdateBlogUseCase;
    use crate::shared::form::FormError;
    use crate::shared::remote::RemoteError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{session_cookie, signed_in_store};

    #[derive(Clone)]
    struct MockUpdateBlogUseCase {
        result: Result<Option<BlogPost>, FormError>,
    }

    #[async_trait]
    impl UpdateBlogUseCase for MockUpdateBlogUseCase {
        async fn execute(
            &self,
            id: &str,
            _form: BlogForm,
            _credential: &Credential,
        ) -> Result<Option<BlogPost>, FormError> {
            assert_eq!(id, "b1");
            self.result.clone()
        }
    }

    async fn patch_blog(
        result: Result<Option<BlogPost>, FormError>,
    ) -> actix_web::dev::ServiceResponse {
        let (store, session_id) = signed_in_store("u1");
        let app_state = TestAppStateBuilder::default()
            .with_session_store(store)
            .with_update_blog(MockUpdateBlogUseCase { result })
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(update_blog_handler)).await;

        let req = test::TestRequest::patch()
            .uri("/dashboard/blogs/b1")
            .cookie(session_cookie(&session_id))
            .set_json(json!({"title": "Hello again", "content": "<p>x</p>"}))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_update_blog_returns_home() {
        let resp = patch_blog(Ok(None)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Blog updated successfully!");
        assert_eq!(body["redirect"], "/dashboard");
    }

    #[actix_web::test]
    async fn test_update_blog_failure() {
        let resp = patch_blog(Err(FormError::Remote(RemoteError::Api {
            status: 500,
            message: Some("  ".to_string()),
        })))
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Failed to update blog");
    }
}
