//! Error types for the preprocessing layer
//!
//! Errors carry a symbolic kind and a message template key. Message text and
//! localization belong to the caller; `Display` is a developer fallback only.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal preprocessing errors. Each one aborts the current top-level parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `#` not followed by a digit naming an existing argument.
    #[error("Illegal macro parameter reference at offset {offset} ({available} argument(s) available)")]
    IllegalMacroParameter { offset: usize, available: usize },

    #[error("Macro expansion exceeded the {limit} character buffer; is there a recursive macro call?")]
    MacroBufferOverflow { limit: usize },

    #[error("Math opened with '{delimiter}' at offset {offset} is not terminated")]
    UnterminatedNotationIsland {
        delimiter: &'static str,
        offset: usize,
    },

    /// Raised by a notation parser and passed through untouched.
    #[error("Malformed notation [{key}]: {}", .args.join(", "))]
    MalformedNotation { key: String, args: Vec<String> },

    #[error("Mixed content nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Symbolic classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalMacroParameter,
    MacroBufferOverflow,
    UnterminatedNotationIsland,
    MalformedNotation,
    NestingTooDeep,
}

impl Error {
    pub fn malformed_notation(key: impl Into<String>, args: Vec<String>) -> Self {
        Error::MalformedNotation {
            key: key.into(),
            args,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IllegalMacroParameter { .. } => ErrorKind::IllegalMacroParameter,
            Error::MacroBufferOverflow { .. } => ErrorKind::MacroBufferOverflow,
            Error::UnterminatedNotationIsland { .. } => ErrorKind::UnterminatedNotationIsland,
            Error::MalformedNotation { .. } => ErrorKind::MalformedNotation,
            Error::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Key into the caller's message catalog.
    pub fn template_key(&self) -> &str {
        match self {
            Error::IllegalMacroParameter { .. } => "IllegalMacroParam",
            Error::MacroBufferOverflow { .. } => "MaxBufferSize",
            Error::UnterminatedNotationIsland { .. } => "MathNotTerminated",
            Error::MalformedNotation { key, .. } => key.as_str(),
            Error::NestingTooDeep { .. } => "MaxNestingDepth",
        }
    }
}
