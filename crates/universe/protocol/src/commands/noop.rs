//! No-op command

use universe_apdu_core::{ApduCommand, Response, StatusWord};

use crate::{
    Error,
    constants::{CLA, ins},
};

/// Command that does nothing but count as an access
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopCommand;

/// Result of a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopResponse {
    /// Accepted (9000)
    Success,
    /// Rejected with a status word
    Failed {
        /// Status returned by the card
        status: StatusWord,
    },
}

impl ApduCommand for NoopCommand {
    type Success = NoopResponse;
    type Error = Error;

    fn convert_error(error: universe_apdu_core::Error) -> Self::Error {
        Error::Apdu(error)
    }

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        ins::NOOP
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        let status = response.status();
        Ok(if status.is_success() {
            NoopResponse::Success
        } else {
            NoopResponse::Failed { status }
        })
    }
}
