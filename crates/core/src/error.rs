//! Directory lookup errors

use thiserror::Error;

/// Fatal lookup failures.
///
/// Helper programs that are missing, fail or time out never produce one of
/// these; the affected fields come back as `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirsError {
    #[error("directories are not supported on {os}")]
    UnsupportedPlatform { os: String },

    #[error("organization and application cannot both be empty")]
    InvalidIdentity,

    #[error("cannot determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, DirsError>;
