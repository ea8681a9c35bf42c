//! Error types for flag declaration and argument scanning.

use std::num::{ParseFloatError, ParseIntError, TryFromIntError};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlagError>;

/// Errors that can occur while declaring options or scanning arguments.
///
/// Declaration errors (`MissingIdentity` through `DuplicateLong`) are sticky
/// on a [`Parser`](crate::Parser): once captured, every later call on the
/// same instance surfaces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlagError {
    /// Neither a short nor a long identifier was supplied.
    #[error("must supply at least one of short or long flag")]
    MissingIdentity,

    /// Short identifier is a hyphen, whitespace or a control character.
    ///
    /// A hyphen after the first one reads as the long-flag marker, so `--`
    /// could never reach it. Whitespace and control characters cannot be
    /// typed without quoting and render invisibly in usage output.
    #[error("invalid short flag: {0:?}")]
    InvalidShort(char),

    /// Long identifier is empty, starts with a hyphen or contains `=`.
    #[error("invalid long flag: {0:?}")]
    InvalidLong(String),

    #[error("duplicate short flag: -{0}")]
    DuplicateShort(char),

    #[error("duplicate long flag: --{0}")]
    DuplicateLong(String),

    #[error("unknown flag: -{0}")]
    UnknownShort(char),

    #[error("unknown flag: --{0}")]
    UnknownLong(String),

    /// A lone `-` with no flag characters after it.
    #[error("hyphen without flags")]
    BareHyphen,

    /// Input ended while a flag was still waiting for its value.
    #[error("flag requires argument: {flag}")]
    MissingValue { flag: String },

    /// `--name=value` given for a presence-only flag.
    #[error("flag does not take an argument: {flag}")]
    UnexpectedValue { flag: String },

    /// Value text was rejected by the option's conversion.
    #[error("invalid value {text:?} for flag {flag}: {source}")]
    InvalidValue {
        flag: String,
        text: String,
        #[source]
        source: ValueError,
    },
}

impl FlagError {
    /// Whether this error was raised while declaring options rather than scanning.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            FlagError::MissingIdentity
                | FlagError::InvalidShort(_)
                | FlagError::InvalidLong(_)
                | FlagError::DuplicateShort(_)
                | FlagError::DuplicateLong(_)
        )
    }
}

/// Conversion failures for value text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("invalid number: {0}")]
    Float(#[from] ParseFloatError),

    #[error("invalid duration: {0}")]
    Duration(#[from] humantime::DurationError),

    /// Parsed through the 64-bit path but does not fit the narrower kind.
    #[error("value out of range: {0}")]
    Range(#[from] TryFromIntError),

    /// Message returned by a custom converter.
    #[error("{0}")]
    Custom(String),
}
