//! Error type definitions for key agreement operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for public operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for public operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping any message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { .. } => Self::InvalidKey { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            #[cfg(feature = "std")]
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
            #[cfg(feature = "std")]
            Self::Other { message, .. } => Self::Other { context, message },
            #[cfg(not(feature = "std"))]
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// Attach a message to an existing error
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The static context string carried by every variant
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } if !message.is_empty() => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_lengths() {
        let err = Error::InvalidLength {
            context: "a",
            expected: 62,
            actual: 61,
        }
        .with_context("public key");
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "public key",
                expected: 62,
                actual: 61
            }
        );
        assert_eq!(
            err.to_string(),
            "public key: invalid length (expected 62, got 61)"
        );
    }

    #[test]
    fn test_with_message() {
        let err = Error::InvalidKey {
            context: "ECDH",
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Invalid key: ECDH");
        let err = err.with_message("point not on curve");
        assert_eq!(err.to_string(), "Invalid key: ECDH: point not on curve");
        assert_eq!(err.context(), "ECDH");
    }

    #[test]
    fn test_with_context_keeps_message() {
        let err = Error::Other {
            context: "gf2::inverse",
            message: String::new(),
        }
        .with_message("element not invertible")
        .with_context("K-233");
        assert_eq!(err.context(), "K-233");
        assert_eq!(err.to_string(), "K-233: element not invertible");

        let err = Error::InvalidParameter {
            context: "modulus",
            message: "constant term missing".to_string(),
        }
        .with_context("BinaryCurve::new");
        assert_eq!(err.to_string(), "BinaryCurve::new: constant term missing");
    }
}
