//! Unified error type for the composer.
//!
//! Candidate-fetch failures never travel through this type to the user;
//! they are absorbed at the app layer (the mention feature degrades to
//! inert). What remains are errors worth stopping for: terminal setup,
//! configuration, and programming errors at the HTTP seam.

use thiserror::Error;

use crate::traits::HttpError;

/// Result alias used throughout the crate.
pub type MentioResult<T> = Result<T, MentioError>;

/// Errors that can abort the composer.
#[derive(Debug, Error)]
pub enum MentioError {
    /// HTTP-level failure surfaced outside the fail-soft fetch path.
    #[error("http error: {0}")]
    Http(#[from] HttpError),

    /// Configuration file existed but could not be parsed.
    #[error("invalid config at {path}: {reason}")]
    Config { path: String, reason: String },

    /// Filesystem or terminal IO failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
