use std::fmt::Display;

/// Custom Result type for flatdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flatdb
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed or unknown command, carries the message shown to the user
    Parse(String),
    /// Schema document missing or malformed
    Config(String),
    /// Table name absent from the schema
    TableNotFound(String),
    /// File system or CSV codec failure
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::Io(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Config(value.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(value: tempfile::PersistError) -> Self {
        Error::Io(value.error.to_string())
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Config(err) => write!(f, "config error: {}", err),
            Error::TableNotFound(name) => write!(f, "table not found: {}", name),
            Error::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}
