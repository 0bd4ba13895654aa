//! Error types for the collaborator layer.
//!
//! Covers the identity provider (bad credentials, policy violations), the
//! document store (missing records, I/O), and configuration. Core validation
//! errors pass through unchanged via [`Error::Core`].

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Collaborator errors.
///
/// | Category | Variants |
/// |----------|----------|
/// | Identity | `InvalidEmail`, `WeakPassword`, `EmailInUse`, `InvalidCredentials`, `NotSignedIn` |
/// | Store | `RecordNotFound` |
/// | System | `Io`, `Serialization`, `InvalidConfig` |
/// | Core | `Core` |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ==================== Identity ====================
    /// Email address is not well formed
    #[error("The email address is badly formatted.")]
    InvalidEmail {
        /// Rejected address
        email: String,
    },

    /// Password shorter than the configured minimum
    #[error("Password should be at least {min_length} characters.")]
    WeakPassword {
        /// Configured minimum length
        min_length: usize,
    },

    /// Another account already uses this email
    #[error("The email address is already in use by another account.")]
    EmailInUse {
        /// Conflicting address
        email: String,
    },

    /// Unknown email or wrong password
    #[error("The email or password is incorrect.")]
    InvalidCredentials,

    /// Operation requires a signed-in user
    #[error("No user is signed in.")]
    NotSignedIn,

    // ==================== Store ====================
    /// Record does not exist under this user
    #[error("test result not found: {id}")]
    RecordNotFound {
        /// Missing record id
        id: String,
    },

    // ==================== System ====================
    /// I/O failure on a backing file
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying error text
        reason: String,
    },

    /// Backing file could not be encoded or decoded
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying error text
        reason: String,
    },

    /// Configuration file is unreadable or inconsistent
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong
        reason: String,
    },

    // ==================== Core ====================
    /// Validation error from the core crate
    #[error(transparent)]
    Core(#[from] bigfive_core::Error),
}

impl Error {
    /// True for failures caused by user input to the identity provider.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidEmail { .. }
                | Error::WeakPassword { .. }
                | Error::EmailInUse { .. }
                | Error::InvalidCredentials
                | Error::NotSignedIn
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_weak_password() {
        let err = Error::WeakPassword { min_length: 6 };
        assert_eq!(err.to_string(), "Password should be at least 6 characters.");
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_error_display_record_not_found() {
        let err = Error::RecordNotFound { id: "abc".into() };
        assert!(err.to_string().contains("abc"));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: Error = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test]
    fn test_error_from_core_is_transparent() {
        let core = bigfive_core::Error::NoPreviousPage;
        let err: Error = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
    }
}
