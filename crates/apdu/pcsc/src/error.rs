use universe_apdu_core::TransportError;

/// Reader and card discovery failures
#[derive(Debug, thiserror::Error)]
pub enum PcscError {
    /// Error reported by the PC/SC service
    #[error("PC/SC: {0}")]
    Pcsc(#[from] pcsc::Error),

    /// The service knows of no readers
    #[error("No smart card readers found")]
    NoReadersAvailable,

    /// The named reader is not attached
    #[error("Unknown reader '{0}'")]
    ReaderNotFound(String),

    /// The named reader holds no card
    #[error("No card in reader '{0}'")]
    NoCard(String),
}

impl From<PcscError> for TransportError {
    fn from(error: PcscError) -> Self {
        use pcsc::Error as E;

        match error {
            PcscError::Pcsc(E::Timeout) => Self::Timeout,
            PcscError::Pcsc(E::InsufficientBuffer) => Self::BufferTooSmall,
            PcscError::Pcsc(E::NoSmartcard | E::RemovedCard | E::ResetCard)
            | PcscError::NoCard(_) => Self::NoCard,
            other => Self::other(other.to_string()),
        }
    }
}
