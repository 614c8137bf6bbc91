//! Conditionally raising an error of a given kind at a guard point.
//!
//! ```
//! use guard_raise::raise::{kinds::NotSupported, Raise};
//!
//! fn compress(level: u8) -> Result<(), NotSupported> {
//!     Raise::<NotSupported>::when(level > 9, Some("compression level above 9"))?;
//!     Ok(())
//! }
//!
//! assert!(compress(3).is_ok());
//! assert_eq!(compress(12).unwrap_err().to_string(), "compression level above 9");
//! ```

pub mod kinds;

use std::marker::PhantomData;

/// An error type which can be produced by [`Raise`].
pub trait ErrorKind: Sized {
    /// Instance used when no message was given
    fn make_default() -> Self;

    fn make_with_message(message: &str) -> Self;
}

/// Raises `E` depending on a condition.
///
/// Raising means returning `Err`; what happens next is up to the caller.
pub struct Raise<E: ErrorKind>(PhantomData<fn() -> E>);

impl<E: ErrorKind> Raise<E> {
    /// Returns `Err` if `condition` is true.
    ///
    /// A missing or empty message produces [`ErrorKind::make_default`].
    pub fn when(condition: bool, message: Option<&str>) -> Result<(), E> {
        if condition {
            return Err(Self::build(message));
        }
        Ok(())
    }

    /// Returns `Err` if `condition` is false.
    pub fn unless(condition: bool, message: Option<&str>) -> Result<(), E> {
        Self::when(!condition, message)
    }

    fn build(message: Option<&str>) -> E {
        match message {
            Some(msg) if !msg.is_empty() => E::make_with_message(msg),
            _ => E::make_default(),
        }
    }
}

pub fn raise_if<E: ErrorKind>(condition: bool, message: Option<&str>) -> Result<(), E> {
    Raise::<E>::when(condition, message)
}

pub fn raise_if_not<E: ErrorKind>(condition: bool, message: Option<&str>) -> Result<(), E> {
    Raise::<E>::unless(condition, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Probe(String);

    impl ErrorKind for Probe {
        fn make_default() -> Self {
            Probe("default".to_string())
        }

        fn make_with_message(message: &str) -> Self {
            Probe(message.to_string())
        }
    }

    #[test]
    fn test_when_raises_only_on_true() {
        assert_eq!(Raise::<Probe>::when(false, Some("x")), Ok(()));
        assert_eq!(
            Raise::<Probe>::when(true, Some("x")),
            Err(Probe("x".to_string()))
        );
    }

    #[test]
    fn test_unless_is_the_complement() {
        for condition in [true, false] {
            assert_eq!(
                Raise::<Probe>::unless(condition, Some("m")).is_err(),
                Raise::<Probe>::when(condition, Some("m")).is_ok()
            );
        }
    }

    #[test]
    fn test_missing_or_empty_message_uses_default() {
        assert_eq!(
            Raise::<Probe>::when(true, None),
            Err(Probe::make_default())
        );
        assert_eq!(
            Raise::<Probe>::unless(false, Some("")),
            Err(Probe::make_default())
        );
    }

    #[test]
    fn test_free_functions() {
        assert!(raise_if::<Probe>(false, None).is_ok());
        assert_eq!(raise_if_not::<Probe>(false, Some("off")), Err(Probe("off".to_string())));
    }
}
