use crate::command::CommandError;
use crate::response::ResponseError;
use crate::transport::TransportError;

/// Result type for APDU operations
pub type Result<T> = core::result::Result<T, Error>;

/// Any failure while exchanging APDUs
///
/// A status word other than 9000 is not an error at this level; it is part of
/// the [`Response`](crate::Response).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport could not deliver the exchange
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Malformed command bytes
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Malformed response bytes
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Another error with a note on what was being attempted
    #[error("{context}: {source}")]
    Context {
        /// What was being attempted
        context: &'static str,
        /// Underlying error
        source: Box<Self>,
    },
}

impl Error {
    /// Wrap the error with a note on what was being attempted
    pub fn context(self, context: &'static str) -> Self {
        Self::Context {
            context,
            source: Box::new(self),
        }
    }

    /// Innermost error, past any context wrappers
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}
