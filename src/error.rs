//! Error types for lists, optionals and the command session.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A runtime value fell outside the `number | string` constraint.
    #[error("invalid type: expected number or string, found {found}")]
    InvalidType { found: &'static str },

    /// A value was demanded from an empty optional.
    #[error("optional holds no value")]
    EmptyValue,

    /// A session command needs a list but none was created yet.
    #[error("no list yet; start one with `new <value>`")]
    NoList,

    /// The session did not recognize the command word.
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    /// A session command was given too few arguments.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file failed to parse.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error writing output or reading files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
