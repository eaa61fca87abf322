use thiserror::Error;
use universe_apdu_transport_pcsc::PcscError;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for client operations
///
/// Status words other than 9000 are not errors here; they are part of the
/// typed responses and end up in the report.
#[derive(Debug, Error)]
pub enum Error {
    /// APDU transport or parse failure
    #[error(transparent)]
    Apdu(#[from] universe_apdu_core::Error),

    /// Smart card service failure
    #[error(transparent)]
    Pcsc(#[from] PcscError),

    /// Protocol failure, such as an invalid AID or counter payload
    #[error(transparent)]
    Protocol(#[from] universe_protocol::Error),

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// No application identifier was given
    #[error("You must provide the HelloUniverse AID as the first argument")]
    MissingIdentifier,
}
