use thiserror::Error;

/// Failure to move bytes to or from a card
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No card is reachable, or it went away mid-exchange
    #[error("No card connected")]
    NoCard,

    /// The card did not answer in time
    #[error("Timed out waiting for the card")]
    Timeout,

    /// The answer did not fit the receive buffer
    #[error("Response did not fit the receive buffer")]
    BufferTooSmall,

    /// Anything else, as reported by the transport
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// [`TransportError::Other`] from any message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
