use thiserror::Error;

/// Response bytes that do not form a response APDU
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Fewer than the two status bytes
    #[error("Response too short for a status word: {0} byte(s)")]
    Truncated(usize),
}
