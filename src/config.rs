use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use std::env;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use crate::errors::ErrorCode;

/// Default user message used when nothing more specific has been configured
pub const UNSPECIFIED_USER_MESSAGE: &str = "unspecified";

/// Values used to fill in the error code and user message of an
/// [`HttpError`](crate::errors::HttpError) when the caller did not supply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDefaults {
    pub error_code: ErrorCode,
    pub user_message: String,
}

impl Default for ErrorDefaults {
    fn default() -> Self {
        Self {
            error_code: ErrorCode::unspecified(),
            user_message: UNSPECIFIED_USER_MESSAGE.to_string(),
        }
    }
}

lazy_static! {
    // The two defaults are stored separately: writers race per field, last write wins.
    static ref DEFAULT_ERROR_CODE: RwLock<ErrorCode> = RwLock::new(ErrorCode::unspecified());
    static ref DEFAULT_USER_MESSAGE: RwLock<String> =
        RwLock::new(UNSPECIFIED_USER_MESSAGE.to_string());
}

impl ErrorDefaults {
    pub fn new(error_code: impl Into<ErrorCode>, user_message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            user_message: user_message.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let fallback = Self::default();
        Ok(ErrorDefaults {
            error_code: optional_var("ERROR_DEFAULT_CODE")?
                .map(ErrorCode::from)
                .unwrap_or(fallback.error_code),
            user_message: optional_var("ERROR_DEFAULT_USER_MESSAGE")?
                .unwrap_or(fallback.user_message),
        })
    }

    /// Snapshot of the process-wide defaults.
    ///
    /// The two fields are read one after the other, so a concurrent writer
    /// may be observed on one field and not the other.
    pub fn global() -> Self {
        Self {
            error_code: global_error_code(),
            user_message: global_user_message(),
        }
    }

    /// Make these the process-wide defaults read by every later construction.
    pub fn install(self) {
        set_global_error_code(self.error_code);
        set_global_user_message(self.user_message);
    }
}

pub(crate) fn global_error_code() -> ErrorCode {
    DEFAULT_ERROR_CODE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub(crate) fn global_user_message() -> String {
    DEFAULT_USER_MESSAGE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub(crate) fn set_global_error_code(code: ErrorCode) {
    debug!(error_code = %code, "Default error code changed");
    *DEFAULT_ERROR_CODE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = code;
}

pub(crate) fn set_global_user_message(message: String) {
    debug!(user_message = %message, "Default user message changed");
    *DEFAULT_USER_MESSAGE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = message;
}

fn optional_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => bail!("{} must not be empty when set", key),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{} must be valid unicode", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let defaults = ErrorDefaults::default();
        assert_eq!(defaults.error_code, "unspecified");
        assert_eq!(defaults.user_message, "unspecified");
    }

    #[test]
    fn test_new_converts_inputs() {
        let defaults = ErrorDefaults::new("GENERIC", "Something went wrong");
        assert_eq!(defaults.error_code, ErrorCode::new("GENERIC"));
        assert_eq!(defaults.user_message, "Something went wrong");
    }

    #[test]
    fn test_optional_var() {
        assert!(optional_var("GUARD_RAISE_TEST_SURELY_UNSET_VAR")
            .unwrap()
            .is_none());

        env::set_var("GUARD_RAISE_TEST_BLANK_VAR", "  ");
        assert!(optional_var("GUARD_RAISE_TEST_BLANK_VAR").is_err());

        env::set_var("GUARD_RAISE_TEST_SET_VAR", "GENERIC");
        assert_eq!(
            optional_var("GUARD_RAISE_TEST_SET_VAR").unwrap().as_deref(),
            Some("GENERIC")
        );
    }

    #[test]
    fn test_from_env() {
        // the only test reading these variables
        env::remove_var("ERROR_DEFAULT_CODE");
        env::remove_var("ERROR_DEFAULT_USER_MESSAGE");
        assert_eq!(ErrorDefaults::from_env().unwrap(), ErrorDefaults::default());

        env::set_var("ERROR_DEFAULT_CODE", "GENERIC");
        let defaults = ErrorDefaults::from_env().unwrap();
        assert_eq!(defaults.error_code, "GENERIC");
        assert_eq!(defaults.user_message, "unspecified");

        env::set_var("ERROR_DEFAULT_USER_MESSAGE", "Please try again later");
        assert_eq!(
            ErrorDefaults::from_env().unwrap(),
            ErrorDefaults::new("GENERIC", "Please try again later")
        );

        env::set_var("ERROR_DEFAULT_CODE", "");
        assert!(ErrorDefaults::from_env().is_err());

        env::remove_var("ERROR_DEFAULT_CODE");
        env::remove_var("ERROR_DEFAULT_USER_MESSAGE");
    }
}
