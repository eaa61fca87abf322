//! SELECT by AID

use universe_apdu_core::{ApduCommand, Response, StatusWord};

use crate::{
    Aid, Error,
    constants::{CLA, SELECT_BY_NAME, ins},
};

/// SELECT command addressing an applet by its AID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCommand {
    aid: Aid,
}

impl SelectCommand {
    /// Create a SELECT for the given AID
    pub const fn new(aid: Aid) -> Self {
        Self { aid }
    }

    /// The AID being selected
    pub const fn aid(&self) -> &Aid {
        &self.aid
    }
}

/// Result of a SELECT
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectResponse {
    /// Applet selected (9000)
    Selected,
    /// No applet with that AID (6A82)
    NotFound,
    /// Any other status word
    Failed {
        /// Status returned by the card
        status: StatusWord,
    },
}

impl SelectResponse {
    /// Returns true if the applet was selected
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Selected)
    }

    /// Status word the card answered with
    pub const fn status(&self) -> StatusWord {
        match self {
            Self::Selected => StatusWord::SUCCESS,
            Self::NotFound => StatusWord::FILE_NOT_FOUND,
            Self::Failed { status } => *status,
        }
    }
}

impl ApduCommand for SelectCommand {
    type Success = SelectResponse;
    type Error = Error;

    fn convert_error(error: universe_apdu_core::Error) -> Self::Error {
        Error::Apdu(error)
    }

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        ins::SELECT
    }

    fn p1(&self) -> u8 {
        SELECT_BY_NAME
    }

    fn data(&self) -> Option<&[u8]> {
        Some(self.aid.as_bytes())
    }

    fn expected_length(&self) -> Option<u8> {
        Some(0x00)
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        let status = response.status();
        Ok(if status.is_success() {
            SelectResponse::Selected
        } else if status.is_file_not_found() {
            SelectResponse::NotFound
        } else {
            SelectResponse::Failed { status }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_select_command() {
        let aid: Aid = "A00000061700C8E4A0C401".parse().unwrap();
        let cmd = SelectCommand::new(aid);

        assert_eq!(
            cmd.to_bytes().as_ref(),
            hex!("00A404000BA00000061700C8E4A0C40100")
        );
    }

    #[test]
    fn test_select_response() {
        let response = SelectCommand::parse_response_raw(&hex!("9000")).unwrap();
        assert!(response.is_success());

        let response = SelectCommand::parse_response_raw(&hex!("6A82")).unwrap();
        assert_eq!(response, SelectResponse::NotFound);
        assert_eq!(format!("{:x}", response.status()), "6a82");

        let response = SelectCommand::parse_response_raw(&hex!("6999")).unwrap();
        assert_eq!(
            response,
            SelectResponse::Failed {
                status: StatusWord::new(0x69, 0x99)
            }
        );
    }
}
