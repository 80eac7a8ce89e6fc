mod controller;
mod in_flight;
pub mod validation;

pub use controller::{FormController, FormError, FormValues, SubmitState, UPLOAD_FAILED_MESSAGE};
pub use in_flight::{InFlightSubmissions, SubmissionPermit};
pub use validation::{check_field, split_list, FieldErrors, Rule};
