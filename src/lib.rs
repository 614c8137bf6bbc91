//! Guard-point raising of typed errors and a structured HTTP error model.
//!
//! [`raise::Raise`] turns a boolean check into a `Result` carrying any
//! [`raise::ErrorKind`]. [`errors::HttpError`] is the error a protocol
//! boundary reports: status code, application error code, user message,
//! optional cause and an ordered diagnostic payload.

pub mod api;
pub mod config;
pub mod errors;
pub mod raise;

pub use config::ErrorDefaults;
pub use errors::{DiagnosticPayload, ErrorCode, ErrorResponse, HttpError, HttpErrorInfo};
pub use raise::{raise_if, raise_if_not, ErrorKind, Raise};
