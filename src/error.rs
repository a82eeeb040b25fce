//! Error handling for modalview
//!
//! Provides the crate error type following Rust best practices with
//! thiserror for error definitions and anyhow for propagation in binaries.

use thiserror::Error;

/// Crate result type alias
pub type ViewResult<T> = std::result::Result<T, ViewError>;

/// Main error enum
///
/// Covers the usage errors a modal view can raise plus the I/O and
/// configuration failures of the surrounding tooling.
#[derive(Error, Debug)]
pub enum ViewError {
    /// `show()` was called on a view that is already visible
    #[error("modal is already being displayed")]
    AlreadyVisible,

    /// Invalid configuration or construction options
    #[error("configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or teardown errors
    #[error("terminal error: {0}")]
    Terminal(String),
}

impl ViewError {
    /// Create a new Config error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new Terminal error
    pub fn terminal<S: Into<String>>(message: S) -> Self {
        Self::Terminal(message.into())
    }

    /// Check if the error is a usage error rather than an environment failure
    pub fn is_usage_error(&self) -> bool {
        match self {
            ViewError::AlreadyVisible => true,
            ViewError::Config { .. } => true,
            ViewError::Io(_) => false,
            ViewError::Terminal(_) => false,
        }
    }
}
