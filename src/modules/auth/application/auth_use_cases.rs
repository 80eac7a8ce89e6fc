use std::sync::Arc;

use crate::auth::application::use_cases::{login_user::ILoginUserUseCase, logout_user::ILogoutUseCase};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
}
