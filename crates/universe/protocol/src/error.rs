use thiserror::Error;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for protocol operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the APDU layer
    #[error(transparent)]
    Apdu(#[from] universe_apdu_core::Error),

    /// Application identifier is not valid hex
    #[error("Invalid AID: {0}")]
    InvalidAidHex(#[from] hex::FromHexError),

    /// Application identifier has the wrong number of bytes
    #[error("Invalid AID length: expected 5 to 16 bytes, got {0}")]
    InvalidAidLength(usize),

    /// Counter payload is not exactly two bytes
    #[error("Invalid counter payload: expected 2 bytes, got {0}")]
    InvalidCounterPayload(usize),
}
