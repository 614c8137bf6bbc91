use serde::{Deserialize, Serialize};

use super::codes::ErrorCode;

/// Additional info which will be included into an [`HttpError`](super::HttpError).
///
/// Either field may be left out; missing fields are filled from the active
/// defaults when the error is built, each one on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorInfo {
    error_code: Option<ErrorCode>,
    user_message: Option<String>,
}

impl HttpErrorInfo {
    pub fn new(error_code: Option<ErrorCode>, user_message: Option<String>) -> Self {
        Self {
            error_code,
            user_message,
        }
    }

    pub fn with_error_code(mut self, error_code: impl Into<ErrorCode>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    pub fn with_user_message(mut self, user_message: impl Into<String>) -> Self {
        self.user_message = Some(user_message.into());
        self
    }

    pub fn error_code(&self) -> Option<&ErrorCode> {
        self.error_code.as_ref()
    }

    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Option<ErrorCode>, Option<String>) {
        (self.error_code, self.user_message)
    }
}
