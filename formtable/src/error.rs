//! Error types for table setup and value marshalling

/// Errors raised at registration or decode time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field name that is not one of the table's display fields
    InvalidField(String),
    /// No route with this name exists in the route table
    RouteNotFound(String),
    /// A value of the wrong shape was handed to a decoder
    InvalidInput(String),
    /// A table definition could not be read or parsed
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidField(field) => write!(f, "\"{}\" not set as a display field", field),
            Error::RouteNotFound(name) => write!(f, "invalid route name {}", name),
            Error::InvalidInput(message) => write!(f, "invalid input: {}", message),
            Error::Config(message) => write!(f, "config error: {}", message),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
