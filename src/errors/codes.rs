use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Application defined error code carried by an [`HttpError`](super::HttpError).
///
/// Codes compare by their string form, which is also what ends up in the
/// diagnostic payload and in serialized responses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "BAD_INPUT")]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Code used when nothing more specific has been configured
    pub const UNSPECIFIED: &'static str = "unspecified";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Build a code from anything with a string form, e.g. an application enum
    pub fn from_display(code: impl fmt::Display) -> Self {
        Self(code.to_string())
    }

    pub fn unspecified() -> Self {
        Self::new(Self::UNSPECIFIED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::unspecified()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ErrorCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
