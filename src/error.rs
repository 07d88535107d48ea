/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum TsuruError {
    /// Missing or malformed host/token at construction time.
    #[error("config error: {0}")]
    Config(String),
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Request payload could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(serde_json::Error),
    /// Status outside the success set of the verb, with raw response body.
    #[error("api error {status}: {body}")]
    Api { status: u16, body: String },
    /// Successful response whose body did not decode into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl TsuruError {
    /// Returns the HTTP status for [`TsuruError::Api`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
