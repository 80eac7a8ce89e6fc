// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::warn;

use crate::shared::form::{FieldErrors, FormError};
use crate::shared::remote::RemoteError;

/// Envelope every dashboard route answers with.
///
/// `message` is what the page shows as a toast or inline notice, `redirect`
/// is where the page navigates after a successful submit. Failed submits
/// never carry a redirect so the user's entered values stay on screen.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: true,
            data: Some(data),
            message: None,
            errors: None,
            redirect: None,
        })
    }

    pub fn submitted(data: T, message: &str, redirect: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: true,
            data: Some(data),
            message: Some(message.to_string()),
            errors: None,
            redirect: Some(redirect.to_string()),
        })
    }

    pub fn created(data: T, message: &str, redirect: &str) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            status: true,
            data: Some(data),
            message: Some(message.to_string()),
            errors: None,
            redirect: Some(redirect.to_string()),
        })
    }
}

impl ApiResponse<()> {
    /// Success without a payload (deletes, logout).
    pub fn done(message: &str, redirect: Option<&str>) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            status: true,
            data: None,
            message: Some(message.to_string()),
            errors: None,
            redirect: redirect.map(str::to_string),
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            status: false,
            data: None,
            message: Some(message.to_string()),
            errors: None,
            redirect: None,
        })
    }

    pub fn invalid(errors: FieldErrors) -> HttpResponse {
        HttpResponse::UnprocessableEntity().json(ApiResponse::<()> {
            status: false,
            data: None,
            message: Some("Please fix the highlighted fields".to_string()),
            errors: Some(errors),
            redirect: None,
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn bad_gateway(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_GATEWAY, message)
    }

    pub fn busy() -> HttpResponse {
        Self::conflict("A submission is already in progress")
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }

    /// Maps a failed call to the external API. The API's own `message` is
    /// shown verbatim when it sent one, `fallback` otherwise.
    pub fn from_remote_error(err: &RemoteError, fallback: &str) -> HttpResponse {
        warn!("External API call failed: {}", err);
        let message = err.user_message(fallback);

        match err {
            RemoteError::NotFound { .. } => Self::not_found(&message),
            _ => Self::bad_gateway(&message),
        }
    }

    pub fn from_form_error(err: &FormError, fallback: &str) -> HttpResponse {
        match err {
            FormError::Invalid(errors) => Self::invalid(errors.clone()),
            FormError::SubmissionInProgress => Self::busy(),
            FormError::UploadPending => {
                Self::conflict("Please wait for the image upload to finish")
            }
            FormError::Unauthenticated => Self::unauthorized("Please login"),
            FormError::Remote(remote) => Self::from_remote_error(remote, fallback),
        }
    }
}

/// Payload of an edit page: the stored record plus the form pre-filled from
/// it.
#[derive(Debug, Clone, Serialize)]
pub struct EditView<R: Serialize, F: Serialize> {
    pub record: R,
    pub form: F,
}
