use axum::http::StatusCode;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::codes::ErrorCode;
use super::info::HttpErrorInfo;
use super::payload::DiagnosticPayload;
use crate::config::{self, ErrorDefaults};
use crate::raise::ErrorKind;

/// Shared handle to the error that caused an [`HttpError`]
pub type ErrorSource = Arc<dyn StdError + Send + Sync + 'static>;

/// An error whose user message should be delivered through an HTTP response,
/// using the given status code.
///
/// All fields are fixed at construction. `error_code` and `user_message`
/// always hold a value: whatever the caller left out is taken from the
/// defaults in effect at that moment.
#[derive(Debug, Clone)]
pub struct HttpError {
    status: StatusCode,
    error_code: ErrorCode,
    user_message: String,
    message: String,
    source: Option<ErrorSource>,
    payload: DiagnosticPayload,
}

impl HttpError {
    pub fn new(status: StatusCode) -> Self {
        Self::with_info(status, HttpErrorInfo::default())
    }

    pub fn with_info(status: StatusCode, info: HttpErrorInfo) -> Self {
        Self::from_parts(status, String::new(), None, info, &ErrorDefaults::global())
    }

    pub fn with_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::with_message_and_info(status, message, HttpErrorInfo::default())
    }

    pub fn with_message_and_info(
        status: StatusCode,
        message: impl Into<String>,
        info: HttpErrorInfo,
    ) -> Self {
        Self::from_parts(status, message, None, info, &ErrorDefaults::global())
    }

    pub fn with_source<E>(status: StatusCode, message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_source_and_info(status, message, source, HttpErrorInfo::default())
    }

    pub fn with_source_and_info<E>(
        status: StatusCode,
        message: impl Into<String>,
        source: E,
        info: HttpErrorInfo,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_parts(
            status,
            message,
            Some(Arc::new(source)),
            info,
            &ErrorDefaults::global(),
        )
    }

    /// Build the error against an explicit set of defaults.
    ///
    /// Every other constructor ends up here after reading the process-wide
    /// defaults.
    pub fn from_parts(
        status: StatusCode,
        message: impl Into<String>,
        source: Option<ErrorSource>,
        info: HttpErrorInfo,
        defaults: &ErrorDefaults,
    ) -> Self {
        let (error_code, user_message) = info.into_parts();
        let error_code = error_code.unwrap_or_else(|| defaults.error_code.clone());
        let user_message = user_message.unwrap_or_else(|| defaults.user_message.clone());

        let mut error = Self {
            status,
            error_code,
            user_message,
            message: message.into(),
            source,
            payload: DiagnosticPayload::new(),
        };
        error.fill_payload();
        error
    }

    /// Returns `Err` with an error built from `status` and `info` when
    /// `condition` holds.
    pub fn raise_if(condition: bool, status: StatusCode, info: HttpErrorInfo) -> Result<(), Self> {
        if condition {
            return Err(Self::with_info(status, info));
        }
        Ok(())
    }

    fn fill_payload(&mut self) {
        self.payload
            .insert(DiagnosticPayload::STATUS_CODE, status_name(self.status));
        self.payload
            .insert(DiagnosticPayload::ERROR_CODE, self.error_code.to_string());
        self.payload
            .insert(DiagnosticPayload::USER_MESSAGE, self.user_message.clone());
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error_code(&self) -> &ErrorCode {
        &self.error_code
    }

    /// Message which can be shown to the end user
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Diagnostic message for operators, may be empty
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn payload(&self) -> &DiagnosticPayload {
        &self.payload
    }

    pub fn default_error_code() -> ErrorCode {
        config::global_error_code()
    }

    pub fn set_default_error_code(code: impl Into<ErrorCode>) {
        config::set_global_error_code(code.into());
    }

    pub fn default_user_message() -> String {
        config::global_user_message()
    }

    pub fn set_default_user_message(message: impl Into<String>) {
        config::set_global_user_message(message.into());
    }
}

/// Name of a status code as reported in the payload, e.g. `NotFound`.
///
/// Codes without a canonical reason fall back to their numeric form.
pub fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
        None => status.as_u16().to_string(),
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{}: {}", self.status, self.message)
        }
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Raised through [`Raise`](crate::raise::Raise) an `HttpError` reports
/// `500 Internal Server Error`.
impl ErrorKind for HttpError {
    fn make_default() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn make_with_message(message: &str) -> Self {
        Self::with_message(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
