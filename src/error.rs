//! Error types for lexcheck.

use std::fmt;
use std::io;

use crate::verify::MatchFailure;

/// Result type alias for lexcheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lexcheck operations.
#[derive(Debug)]
pub enum Error {
    /// An expected token was not found in order in the actual stream.
    Match(Box<MatchFailure>),
    /// A dotted category name that no `TokenKind` carries.
    UnknownKind(String),
    /// I/O error from filesystem probing.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match(failure) => write!(f, "{failure}"),
            Self::UnknownKind(name) => write!(f, "unknown token kind: {name}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Match(failure) => Some(failure.as_ref()),
            Self::Io(e) => Some(e),
            Self::UnknownKind(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MatchFailure> for Error {
    fn from(failure: MatchFailure) -> Self {
        Self::Match(Box::new(failure))
    }
}
