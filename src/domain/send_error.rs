use thiserror::Error;

/// Failure to deliver one message. Recorded per recipient; never fatal to a batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// The request never produced an HTTP response.
    #[error("Failed to send message to {recipient}: {details}")]
    Transport { recipient: String, details: String },

    /// The provider answered with a non-success status.
    #[error("Failed to send message to {recipient}: provider returned {status}: {detail}")]
    Provider { recipient: String, status: u16, detail: String },

    /// The provider accepted the request but the body was not JSON.
    #[error("Failed to send message to {recipient}: unreadable response: {details}")]
    InvalidResponse { recipient: String, details: String },
}

impl SendError {
    /// Normalized recipient the failed request was addressed to.
    pub fn recipient(&self) -> &str {
        match self {
            SendError::Transport { recipient, .. }
            | SendError::Provider { recipient, .. }
            | SendError::InvalidResponse { recipient, .. } => recipient,
        }
    }
}
