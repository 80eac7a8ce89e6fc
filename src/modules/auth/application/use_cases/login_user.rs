use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{
    AuthChange, AuthUser, SessionId, AUTH_TOKEN_KEY, AUTH_USER_KEY,
};
use crate::auth::application::ports::outgoing::{AuthApi, SessionStore, TokenDecoder, TokenError};
use crate::auth::application::services::AuthEvents;
use crate::shared::form::{check_field, FieldErrors, FormController, FormError, FormValues, Rule};

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_REDIRECT: &str = "/dashboard";

// ========================= Login Form =========================
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl FormValues for LoginForm {
    type Record = LoginRequest;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_field(
            &mut errors,
            "email",
            &self.email,
            &[
                Rule::Required("Email is required"),
                Rule::Email("Invalid email address"),
            ],
        );
        check_field(
            &mut errors,
            "password",
            &self.password,
            &[
                Rule::Required("Password is required"),
                Rule::MinLength(6, "Password must be at least 6 characters"),
            ],
        );
        errors
    }

    fn assemble(&self) -> Result<Self::Record, FieldErrors> {
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "email" => self.email = value,
            "password" => self.password = value,
            _ => return false,
        }
        true
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    Form(FormError),
    InvalidToken(TokenError),
    Session(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Form(err) => write!(f, "{}", err),
            LoginError::InvalidToken(err) => write!(f, "{}", err),
            LoginError::Session(msg) => write!(f, "Session could not be stored: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session_id: SessionId,
    pub user: AuthUser,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, form: LoginForm) -> Result<LoginOutcome, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase {
    api: Arc<dyn AuthApi + Send + Sync>,
    decoder: Arc<dyn TokenDecoder + Send + Sync>,
    sessions: Arc<dyn SessionStore + Send + Sync>,
    events: AuthEvents,
}

impl LoginUserUseCase {
    pub fn new(
        api: Arc<dyn AuthApi + Send + Sync>,
        decoder: Arc<dyn TokenDecoder + Send + Sync>,
        sessions: Arc<dyn SessionStore + Send + Sync>,
        events: AuthEvents,
    ) -> Self {
        Self {
            api,
            decoder,
            sessions,
            events,
        }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, form: LoginForm) -> Result<LoginOutcome, LoginError> {
        let api = Arc::clone(&self.api);
        let mut controller = FormController::new(form, LOGIN_FAILED);

        let token = controller
            .submit(|request| async move { api.login(&request.email, &request.password).await })
            .await
            .map_err(LoginError::Form)?;

        let user = self.decoder.decode(&token).map_err(|e| {
            warn!("Login token rejected: {}", e);
            LoginError::InvalidToken(e)
        })?;

        let stored_user =
            serde_json::to_string(&user).map_err(|e| LoginError::Session(e.to_string()))?;

        let session_id = SessionId::generate();
        self.sessions.put(&session_id, AUTH_TOKEN_KEY, token);
        self.sessions.put(&session_id, AUTH_USER_KEY, stored_user);

        info!("User {} signed in", user.id);
        self.events.publish(AuthChange::SignedIn {
            session_id: session_id.clone(),
            user: user.clone(),
        });

        Ok(LoginOutcome { session_id, user })
    }
}
