//! Common error types for the registrar service

use thiserror::Error;

/// Common result type for registrar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the catalog query layer
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Detail lookup invoked without a class identifier
    #[error("missing classid")]
    MissingClassId,

    /// Class identifier that does not parse as an integer
    #[error("non-integer classid: {0:?}")]
    InvalidClassId(String),

    /// Well-formed class identifier with no matching class row
    #[error("no class with classid {0} exists")]
    NoSuchClass(i64),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Message safe to hand back to the caller.
    ///
    /// Bad-input and not-found errors echo their specifics; store and
    /// internal faults collapse to a generic message. The full detail
    /// for those goes to the server log only.
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingClassId => "missing classid".to_string(),
            Error::InvalidClassId(_) => "non-integer classid".to_string(),
            Error::NoSuchClass(classid) => {
                format!("no class with classid {} exists", classid)
            }
            _ => "A server error occurred. Please contact the system administrator."
                .to_string(),
        }
    }

    /// True for faults that belong in the server log, as opposed to
    /// bad input reported back to the caller.
    pub fn is_server_fault(&self) -> bool {
        !matches!(
            self,
            Error::MissingClassId | Error::InvalidClassId(_) | Error::NoSuchClass(_)
        )
    }
}
