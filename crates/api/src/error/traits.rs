//! Error handling traits

use super::types::{Error, Result};

#[cfg(feature = "std")]
use std::string::String;

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Wrap an error with a replacement produced by `f`
    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2;

    /// Add context to an error when converting to Error
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;

    #[cfg(feature = "std")]
    /// Add message to an error when converting to Error
    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2,
    {
        self.map_err(|_| f())
    }

    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }

    #[cfg(feature = "std")]
    fn with_message(self, message: impl Into<String>) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_message(message))
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Short;

    impl From<Short> for Error {
        fn from(_: Short) -> Self {
            Error::InvalidLength {
                context: "buffer",
                expected: 30,
                actual: 29,
            }
        }
    }

    #[test]
    fn test_with_context_converts() {
        let r: core::result::Result<(), Short> = Err(Short);
        let err = r.with_context("shared secret").unwrap_err();
        assert_eq!(err.context(), "shared secret");
        assert!(matches!(err, Error::InvalidLength { expected: 30, .. }));
    }

    #[test]
    fn test_wrap_err_and_message() {
        let r: core::result::Result<(), Short> = Err(Short);
        let err = r.wrap_err(|| "replaced").unwrap_err();
        assert_eq!(err, "replaced");

        let r: Result<()> = Err(Error::Other {
            context: "K-233",
            message: String::new(),
        });
        let err = r.with_message("shared point is the identity").unwrap_err();
        assert_eq!(err.to_string(), "K-233: shared point is the identity");
    }
}
