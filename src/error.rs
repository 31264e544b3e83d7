// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode a packed `R-G-B` colour field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 3 colour channels separated by '-', found {found}")]
    ChannelCount { found: usize },

    #[error("colour channel {channel} is not a decimal integer: '{value}'")]
    InvalidChannel { channel: usize, value: String },

    #[error("colour channel {channel} out of range 0-255: {value}")]
    ChannelOutOfRange { channel: usize, value: u32 },
}

/// A single data row that could not be turned into an element record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has {found} fields, schema needs at least {expected}")]
    MissingFields { expected: usize, found: usize },

    #[error("malformed colour field: {0}")]
    MalformedColor(#[from] ColorError),

    #[error("row is not valid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Errors returned by the registry loader.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The data source could not be opened.
    #[error("unable to open {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data source failed while it was being read.
    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A row was rejected while loading in strict mode.
    #[error("line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: RowError,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
