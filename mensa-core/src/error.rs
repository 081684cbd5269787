//! Error types for fetching weekly menus
use crate::location::KNOWN_LOCATIONS;
use crate::week::WeekKey;
use thiserror::Error;

/// Outcome of a failed menu fetch, as shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The location is known but nothing could be loaded for the week.
    /// Network and decoding failures also end up here.
    #[error(
        "No menu found for calendar week {} of {} at {location}. ¯\\_(ツ)_/¯ {path}",
        .week.week,
        .week.year
    )]
    NotFound {
        location: String,
        week: WeekKey,
        path: String,
    },

    /// The location is not one of the known slugs.
    #[error(
        "A location with the id \"{location}\" does not exist. Possible ids are: {}",
        KNOWN_LOCATIONS.join(", ")
    )]
    UnknownLocation { location: String },
}

/// Failure of the underlying source while loading a menu file.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// Body was not a menu document
    #[error("Failed to decode menu: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
