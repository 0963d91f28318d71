//! Schedule error types.

/// Errors that can occur while fetching or reading a route schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The HTTP request could not complete (DNS, connection, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON
    #[error("JSON decode error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// The document decoded but does not have the expected shape
    #[error("schema error: {0}")]
    Schema(String),

    /// No fixture document exists for the route
    #[error("no schedule for route {0}")]
    UnknownRoute(String),

    /// Fixture directory or file could not be read
    #[error("fixture error: {message}")]
    Fixture { message: String },

    /// Every requested line failed
    #[error("none of the {requested} requested lines could be fetched")]
    NoLinesFetched { requested: usize },
}

impl ScheduleError {
    /// Build a decode error, keeping the first 500 characters of the body.
    pub(crate) fn decode(err: serde_json::Error, body: &str) -> Self {
        ScheduleError::Decode {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}
