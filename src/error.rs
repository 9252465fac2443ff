use thiserror::Error;

use crate::domain::error::ValidationError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Row-store and object-storage errors.
///
/// "No matching row" is a distinct variant rather than an empty result,
/// so callers can tell a missing row apart from a rejected request.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("no row in {table} for id {id}")]
    NotFound { table: String, id: String },

    #[error("store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("failed to decode store response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Authentication errors from the auth collaborator.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("auth request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("not signed in")]
    NotSignedIn,
}

/// Music-catalog errors (search and token exchange).
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("token exchange failed ({status}): {message}")]
    TokenExchange { status: u16, message: String },

    #[error("catalog search rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Errors raised by the optimistic entity cache itself.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    #[error("a mutation is already in flight for id {id}")]
    MutationInFlight { id: String },

    #[error("no cached entity with id {id}")]
    UnknownId { id: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
