use thiserror::Error;

pub const TRANSPORT_MESSAGE: &str =
    "Could not find representatives for that address. Double-check it and try again.";
pub const EMPTY_RESULT_MESSAGE: &str = "No representatives found for this address.";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}")]
    Status { status: u16 },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Error list embedded in the Cicero payload.
    #[error("{0}")]
    Application(String),

    /// No candidates, or the first candidate has no officials.
    #[error("no representatives found")]
    Empty,
}

impl LookupError {
    /// Message shown to the user in place of results.
    pub fn user_message(&self) -> String {
        match self {
            Self::Application(message) => message.clone(),
            Self::Empty => EMPTY_RESULT_MESSAGE.to_string(),
            Self::Http(_) | Self::Status { .. } | Self::Json(_) | Self::Url(_) => {
                TRANSPORT_MESSAGE.to_string()
            }
        }
    }
}
