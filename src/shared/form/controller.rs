use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;

use tracing::{debug, warn};

use crate::shared::form::validation::FieldErrors;
use crate::shared::remote::RemoteError;

pub const UPLOAD_FAILED_MESSAGE: &str = "Image upload failed. Please try again.";

/// Values bound to a dashboard form.
pub trait FormValues {
    /// What gets sent to the external API once the form is valid.
    type Record;

    fn validate(&self) -> FieldErrors;

    /// Builds the outgoing record. Only called after `validate` passed, but
    /// conversions that can still fail (dates) report as field errors.
    fn assemble(&self) -> Result<Self::Record, FieldErrors>;

    /// Writes a raw string into `field`. Returns false for unknown fields.
    fn set_field(&mut self, field: &str, value: String) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FormError {
    #[error("form has invalid fields")]
    Invalid(FieldErrors),

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("an upload is still in progress")]
    UploadPending,

    #[error("Please login")]
    Unauthenticated,

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Per-page form state: values, field errors, submit state and pending uploads.
///
/// `submit` borrows the controller mutably across the network call, so one
/// controller can never have two submissions in flight.
pub struct FormController<F: FormValues> {
    values: F,
    errors: FieldErrors,
    state: SubmitState,
    pending_uploads: BTreeSet<String>,
    failed_uploads: BTreeSet<String>,
    fallback: &'static str,
}

impl<F: FormValues> FormController<F> {
    /// `fallback` is shown when a failed call carries no message of its own.
    pub fn new(values: F, fallback: &'static str) -> Self {
        Self {
            values,
            errors: FieldErrors::default(),
            state: SubmitState::Idle,
            pending_uploads: BTreeSet::new(),
            failed_uploads: BTreeSet::new(),
            fallback,
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn into_values(self) -> F {
        self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmitState::Loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.pending_uploads.is_empty()
    }

    /// Message the page should show after a failed submit.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let known = self.values.set_field(field, value.into());
        if known {
            self.errors.remove(field);
            self.failed_uploads.remove(field);
        }
        known
    }

    /// Runs the static rules and keeps the result for display. A field whose
    /// upload failed keeps the upload message until it gets a new value.
    pub fn validate(&mut self) -> bool {
        self.errors = self.values.validate();
        for field in &self.failed_uploads {
            self.errors.insert(field, UPLOAD_FAILED_MESSAGE);
        }
        self.errors.is_empty()
    }

    pub fn begin_upload(&mut self, field: &str) {
        self.pending_uploads.insert(field.to_string());
        self.errors.remove(field);
    }

    pub fn is_uploading(&self, field: &str) -> bool {
        self.pending_uploads.contains(field)
    }

    /// Resolves a pending upload. On success the exact URL lands in `field`;
    /// on failure the field is cleared so a stale URL is never submitted.
    pub fn finish_upload<E: fmt::Display>(&mut self, field: &str, outcome: Result<String, E>) {
        self.pending_uploads.remove(field);

        match outcome {
            Ok(url) => {
                self.set_field(field, url);
            }
            Err(err) => {
                warn!("Upload for field '{}' failed: {}", field, err);
                self.values.set_field(field, String::new());
                self.errors.insert(field, UPLOAD_FAILED_MESSAGE);
                self.failed_uploads.insert(field.to_string());
            }
        }
    }

    /// Marks `field` pending, awaits the upload and applies its outcome.
    pub async fn upload_into<Fut, E>(&mut self, field: &str, upload: Fut)
    where
        Fut: Future<Output = Result<String, E>>,
        E: fmt::Display,
    {
        self.begin_upload(field);
        let outcome = upload.await;
        self.finish_upload(field, outcome);
    }

    /// Validates, assembles and hands the record to `op`.
    ///
    /// Validation failures make no call. A failed call leaves the values
    /// untouched and records the message to show.
    pub async fn submit<T, Op, Fut>(&mut self, op: Op) -> Result<T, FormError>
    where
        Op: FnOnce(F::Record) -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        if self.is_busy() {
            return Err(FormError::SubmissionInProgress);
        }

        if !self.pending_uploads.is_empty() {
            return Err(FormError::UploadPending);
        }

        if !self.validate() {
            debug!("Form submit blocked by {} invalid field(s)", self.errors.len());
            return Err(FormError::Invalid(self.errors.clone()));
        }

        let record = match self.values.assemble() {
            Ok(record) => record,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(FormError::Invalid(errors));
            }
        };

        self.state = SubmitState::Loading;

        match op(record).await {
            Ok(value) => {
                self.state = SubmitState::Success;
                self.errors.clear();
                Ok(value)
            }
            Err(err) => {
                self.state = SubmitState::Error(err.user_message(self.fallback));
                Err(FormError::Remote(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::validation::{check_field, Rule, IMAGE_URL};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, Default)]
    struct PostForm {
        title: String,
        image: String,
    }

    impl FormValues for PostForm {
        type Record = (String, String);

        fn validate(&self) -> FieldErrors {
            let mut errors = FieldErrors::default();
            check_field(
                &mut errors,
                "title",
                &self.title,
                &[
                    Rule::Required("Title is required"),
                    Rule::MinLength(5, "Title must be at least 5 characters"),
                ],
            );
            check_field(
                &mut errors,
                "image",
                &self.image,
                &[
                    Rule::Required("Image URL is required"),
                    Rule::Pattern(&IMAGE_URL, "Please enter a valid image URL"),
                ],
            );
            errors
        }

        fn assemble(&self) -> Result<Self::Record, FieldErrors> {
            Ok((self.title.clone(), self.image.clone()))
        }

        fn set_field(&mut self, field: &str, value: String) -> bool {
            match field {
                "title" => self.title = value,
                "image" => self.image = value,
                _ => return false,
            }
            true
        }
    }

    fn valid_form() -> PostForm {
        PostForm {
            title: "Hello world".to_string(),
            image: "https://x/y.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_short_title_blocks_submit_without_call() {
        let calls = AtomicUsize::new(0);
        let mut controller = FormController::new(
            PostForm {
                title: "Hi".to_string(),
                ..valid_form()
            },
            "Failed to update blog",
        );

        let result = controller
            .submit(|_record| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, RemoteError>(())
            })
            .await;

        assert!(matches!(result, Err(FormError::Invalid(_))));
        assert_eq!(
            controller.errors().get("title"),
            Some("Title must be at least 5 characters")
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.state(), &SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_every_empty_required_field_gets_its_own_error() {
        let mut controller = FormController::new(PostForm::default(), "fallback");

        let result = controller
            .submit(|_record| async { Ok::<_, RemoteError>(()) })
            .await;

        assert!(result.is_err());
        assert_eq!(controller.errors().get("title"), Some("Title is required"));
        assert_eq!(controller.errors().get("image"), Some("Image URL is required"));
    }

    #[tokio::test]
    async fn test_successful_submit_clears_errors() {
        let mut controller = FormController::new(valid_form(), "fallback");
        controller.validate();

        let result = controller
            .submit(|(title, _)| async move { Ok::<_, RemoteError>(title) })
            .await;

        assert_eq!(result.unwrap(), "Hello world");
        assert_eq!(controller.state(), &SubmitState::Success);
        assert!(controller.errors().is_empty());
        assert!(controller.message().is_none());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_values_and_shows_api_message() {
        let mut controller = FormController::new(valid_form(), "Failed to update blog");

        let result = controller
            .submit(|_record| async {
                Err::<(), _>(RemoteError::Api {
                    status: 400,
                    message: Some("Blog title already exists".to_string()),
                })
            })
            .await;

        assert!(matches!(result, Err(FormError::Remote(_))));
        assert_eq!(controller.message(), Some("Blog title already exists"));
        assert_eq!(controller.values().title, "Hello world");
        assert!(controller.can_submit());
    }

    #[tokio::test]
    async fn test_failed_submit_without_message_uses_fallback() {
        let mut controller = FormController::new(valid_form(), "Failed to update blog");

        let _ = controller
            .submit(|_record| async {
                Err::<(), _>(RemoteError::Transport("timeout".to_string()))
            })
            .await;

        assert_eq!(controller.message(), Some("Failed to update blog"));
    }

    #[tokio::test]
    async fn test_pending_upload_blocks_submit() {
        let mut controller = FormController::new(valid_form(), "fallback");
        controller.begin_upload("image");

        assert!(!controller.can_submit());
        let result = controller
            .submit(|_record| async { Ok::<_, RemoteError>(()) })
            .await;
        assert!(matches!(result, Err(FormError::UploadPending)));
    }

    #[tokio::test]
    async fn test_upload_success_populates_exact_url_and_enables_submit() {
        let mut controller = FormController::new(
            PostForm {
                title: "Hello world".to_string(),
                image: String::new(),
            },
            "fallback",
        );

        controller
            .upload_into("image", async {
                Ok::<_, String>("https://x/y.jpg".to_string())
            })
            .await;

        assert_eq!(controller.values().image, "https://x/y.jpg");
        assert!(controller.can_submit());
        assert!(controller.validate());
    }

    #[tokio::test]
    async fn test_upload_failure_clears_stale_value() {
        let mut controller = FormController::new(valid_form(), "fallback");

        controller
            .upload_into("image", async { Err::<String, _>("503 from host") })
            .await;

        assert_eq!(controller.values().image, "");
        assert_eq!(controller.errors().get("image"), Some(UPLOAD_FAILED_MESSAGE));
        assert!(controller.can_submit());
    }

    #[tokio::test]
    async fn test_failed_upload_blocks_submit_until_field_is_replaced() {
        let mut controller = FormController::new(valid_form(), "fallback");
        controller
            .upload_into("image", async { Err::<String, _>("503 from host") })
            .await;

        let calls = AtomicUsize::new(0);
        let result = controller
            .submit(|_record| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, RemoteError>(())
            })
            .await;

        match result {
            Err(FormError::Invalid(errors)) => {
                assert_eq!(errors.get("image"), Some(UPLOAD_FAILED_MESSAGE))
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        controller.set_field("image", "https://x/other.jpg");
        assert!(controller.validate());
    }

    #[test]
    fn test_set_field_clears_that_fields_error() {
        let mut controller = FormController::new(PostForm::default(), "fallback");
        controller.validate();
        assert!(controller.errors().contains("title"));

        assert!(controller.set_field("title", "A longer title"));
        assert!(!controller.errors().contains("title"));
        assert!(controller.errors().contains("image"));
        assert!(!controller.set_field("unknown", "x"));
    }
}
