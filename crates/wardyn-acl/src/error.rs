//! Error types for the Wardyn ACL engine.

use thiserror::Error;
use wardyn_core::AclId;

/// Result type alias for ACL operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ACL identity handling and storage.
///
/// Permission resolution itself never fails: the access queries return
/// plain booleans and fall back to denial.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The ACL already carries a persistence identity.
    #[error("ACL identity already assigned: {existing}")]
    IdentityAlreadyAssigned {
        /// Identity the ACL already carries
        existing: AclId,
        /// Identity the caller attempted to assign
        attempted: AclId,
    },

    /// A permission name failed to parse.
    #[error("Unknown permission: {value}")]
    UnknownPermission {
        /// The string that failed to parse
        value: String,
    },

    /// Error reported by a storage backend.
    #[error("Store error: {message}")]
    Store {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Store errors may be transient; identity and parse errors are
    /// permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Store { .. } => true,
            Error::IdentityAlreadyAssigned { .. } => false,
            Error::UnknownPermission { .. } => false,
        }
    }

    /// Creates a store error with a message.
    pub fn store<S: Into<String>>(message: S) -> Self {
        Error::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a store error with a message and source error.
    pub fn store_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
