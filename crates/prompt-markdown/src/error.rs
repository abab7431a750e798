//! Error types for Markdown conversion.

use thiserror::Error;

/// Coarse classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The document nests elements deeper than the configured limit.
    InputTooDeep,
    /// The input violates a boundary precondition (e.g. it is not UTF-8).
    InvalidInput,
}

/// Errors that can occur while converting content to Markdown.
///
/// Malformed markup is never an error; the converter degrades gracefully.
/// Only the nesting guard and input precondition checks surface here.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Element nesting exceeded [`crate::ConversionOptions::max_depth`].
    #[error("input nested too deeply: depth {depth} exceeds limit of {limit}")]
    InputTooDeep {
        /// Depth at which the walk was aborted.
        depth: usize,
        /// Configured maximum depth.
        limit: usize,
    },

    /// The input could not be accepted as text.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ConversionError {
    /// The classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InputTooDeep { .. } => ErrorKind::InputTooDeep,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

impl From<std::str::Utf8Error> for ConversionError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidInput(format!("content is not valid UTF-8: {err}"))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConversionError>;
