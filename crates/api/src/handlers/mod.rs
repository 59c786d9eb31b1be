pub mod activity;
pub mod assessment;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod feedback;
pub mod roadmap;

use skillsync_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` derives on a request body, mapping failures to 400.
pub(crate) fn validate_body<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// Reject a required text field that is empty after trimming.
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be blank"
        ))));
    }
    Ok(())
}
