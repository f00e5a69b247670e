use thiserror::Error;

/// A failed call to the annotation service. Never retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("annotation request for {id} failed: {source}")]
    Transport {
        id: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("annotation service returned HTTP {status} for {id}")]
    Status { id: String, status: u16 },

    #[error("malformed annotation response for {id}: {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// The identifier whose fetch failed.
    pub fn id(&self) -> &str {
        match self {
            UpstreamError::Transport { id, .. }
            | UpstreamError::Status { id, .. }
            | UpstreamError::Decode { id, .. } => id,
        }
    }
}
