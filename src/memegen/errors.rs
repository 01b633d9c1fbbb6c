use serde_json::Value;

/// Every way a call to the meme generator API can fail.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Holds the transport error with its URL stripped, since the query carries the password.
    #[error("Failed to reach the meme generator API: {0}")]
    Unavailable(reqwest::Error),
    #[error("Failed to deserialise response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The body was valid JSON but not `{"result": {"instanceImageUrl": "..."}}`.
    #[error("Unable to parse response JSON - {document:?}")]
    Schema { document: Value },
    #[error("Upstream call cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.without_url())
    }
}
