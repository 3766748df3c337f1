use thiserror::Error;

/// Failure from the HTTP layer, before any payload was interpreted.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network unreachable: {0}")]
    Unreachable(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Unreachable(err.to_string()),
        }
    }
}

/// Failure of the three-step recipe fetch pipeline.
///
/// Any variant short-circuits the remaining steps and discards everything
/// fetched in the attempt. The `Display` text is the user-visible message.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The search request failed or returned no results.
    #[error("Error while retreiving recipe")]
    SearchFailed(String),

    /// The recipe-information request failed or the payload was missing
    /// required fields.
    #[error("could not load recipe details: {0}")]
    DetailsFailed(String),

    /// The recipe carries no analyzed instructions.
    #[error("recipe has no instructions")]
    NoInstructions,

    /// The nutrition request failed. Nutrition is not optional: the chart
    /// view depends on it unconditionally.
    #[error("could not load nutrition data: {0}")]
    NutrientsFailed(String),

    /// Transport-level failure, before any HTTP status was available.
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),
}

/// Configuration problems surfaced at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
