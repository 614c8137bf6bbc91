//! Structured errors reported across an HTTP boundary

pub mod codes;
pub mod http;
pub mod info;
pub mod payload;
pub mod response;

pub use codes::ErrorCode;
pub use http::{ErrorSource, HttpError};
pub use info::HttpErrorInfo;
pub use payload::DiagnosticPayload;
pub use response::{ErrorDetail, ErrorResponse};
