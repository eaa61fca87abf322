//! Access counter commands

use universe_apdu_core::{ApduCommand, Response, StatusWord};

use crate::{
    Error,
    constants::{CLA, ins},
};

/// Read the access counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadCounterCommand;

/// Result of a counter read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadCounterResponse {
    /// Counter value (9000)
    Success {
        /// Value decoded from the big-endian payload
        count: u16,
    },
    /// Rejected with a status word
    Failed {
        /// Status returned by the card
        status: StatusWord,
    },
}

impl ApduCommand for ReadCounterCommand {
    type Success = ReadCounterResponse;
    type Error = Error;

    fn convert_error(error: universe_apdu_core::Error) -> Self::Error {
        Error::Apdu(error)
    }

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        ins::READ_COUNTER
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        let status = response.status();
        if !status.is_success() {
            return Ok(ReadCounterResponse::Failed { status });
        }

        let payload = response.payload();
        let bytes: [u8; 2] = payload
            .try_into()
            .map_err(|_| Error::InvalidCounterPayload(payload.len()))?;
        Ok(ReadCounterResponse::Success {
            count: u16::from_be_bytes(bytes),
        })
    }
}

/// Overwrite the access counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteCounterCommand {
    value: [u8; 2],
}

impl WriteCounterCommand {
    /// Create a write of `value`, sent big-endian
    pub const fn new(value: u16) -> Self {
        Self {
            value: value.to_be_bytes(),
        }
    }

    /// Value being written
    pub const fn value(&self) -> u16 {
        u16::from_be_bytes(self.value)
    }
}

/// Result of a counter write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteCounterResponse {
    /// Counter stored (9000)
    Success,
    /// Rejected with a status word
    Failed {
        /// Status returned by the card
        status: StatusWord,
    },
}

impl ApduCommand for WriteCounterCommand {
    type Success = WriteCounterResponse;
    type Error = Error;

    fn convert_error(error: universe_apdu_core::Error) -> Self::Error {
        Error::Apdu(error)
    }

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        ins::WRITE_COUNTER
    }

    fn data(&self) -> Option<&[u8]> {
        Some(&self.value[..])
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        let status = response.status();
        Ok(if status.is_success() {
            WriteCounterResponse::Success
        } else {
            WriteCounterResponse::Failed { status }
        })
    }
}
