//! Common error kinds ready to be used with [`Raise`](super::Raise).

use thiserror::Error;

use super::ErrorKind;

/// The requested operation is not supported
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct NotSupported(pub String);

/// The operation is not valid for the current state of the object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidOperation(pub String);

/// An argument did not satisfy the callee's requirements
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidArgument(pub String);

macro_rules! error_kind {
    ($kind:ident, $default:literal) => {
        impl $kind {
            pub const DEFAULT_MESSAGE: &'static str = $default;

            pub fn message(&self) -> &str {
                &self.0
            }
        }

        impl Default for $kind {
            fn default() -> Self {
                Self(Self::DEFAULT_MESSAGE.to_string())
            }
        }

        impl ErrorKind for $kind {
            fn make_default() -> Self {
                Self::default()
            }

            fn make_with_message(message: &str) -> Self {
                Self(message.to_string())
            }
        }
    };
}

error_kind!(NotSupported, "Specified method is not supported.");
error_kind!(
    InvalidOperation,
    "Operation is not valid due to the current state of the object."
);
error_kind!(InvalidArgument, "Value does not fall within the expected range.");
