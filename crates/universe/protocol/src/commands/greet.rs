//! Greet command

use universe_apdu_core::{ApduCommand, Response, StatusWord};

use crate::{
    Error,
    constants::{CLA, ins},
};

/// Ask the applet for its greeting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreetCommand;

/// Result of a greet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetResponse {
    /// Greeting text (9000)
    Success {
        /// Payload decoded as text
        message: String,
    },
    /// Rejected with a status word
    Failed {
        /// Status returned by the card
        status: StatusWord,
    },
}

impl ApduCommand for GreetCommand {
    type Success = GreetResponse;
    type Error = Error;

    fn convert_error(error: universe_apdu_core::Error) -> Self::Error {
        Error::Apdu(error)
    }

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        ins::GREET
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        let status = response.status();
        if !status.is_success() {
            return Ok(GreetResponse::Failed { status });
        }

        Ok(GreetResponse::Success {
            message: String::from_utf8_lossy(response.payload()).into_owned(),
        })
    }
}
