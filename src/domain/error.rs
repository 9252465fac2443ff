//! Validation errors for domain values.
//!
//! Returned by `try_new` constructors and the parsing helpers in
//! [`pace`](crate::domain::pace) and [`route`](crate::domain::route).
//! The remote gateway performs no validation of its own, so these are the
//! only client-side checks before a draft reaches the wire.

use thiserror::Error;

/// Errors raised when a domain value fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Course and track names must be non-empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// A numeric form field could not be parsed.
    #[error("malformed {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    /// Record distance must be strictly positive.
    #[error("distance must be positive, got {value}")]
    NonPositiveDistance { value: f64 },

    /// Record duration must be strictly positive.
    #[error("duration must be positive")]
    ZeroDuration,

    /// A route point string did not match `lat,lng`.
    #[error("malformed route point: {value:?}")]
    MalformedPoint { value: String },
}
