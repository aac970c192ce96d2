//! Error handling for key agreement operations

use core::fmt;

use bincurve_algorithms::error::Error as PrimitiveError;
use bincurve_api::error::Error as CoreError;

/// Error type for key agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Key generation failed
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format or value
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Shared secret derivation failed
    KeyAgreement {
        algorithm: &'static str,
        details: &'static str,
    },
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::KeyAgreement { algorithm, details } => {
                write!(f, "Key agreement error for {}: {}", algorithm, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::RandomGenerationError {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("key generation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::KeyAgreement { algorithm, details } => CoreError::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("key agreement failed: {}", details),
            },
        }
    }
}

pub mod validate;

pub use bincurve_api::error::ResultExt;
