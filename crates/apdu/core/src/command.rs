//! Command APDUs
//!
//! Only the short form is supported: at most 255 data bytes and a one byte Le.

mod error;

use core::fmt;

use bytes::{BufMut, Bytes, BytesMut};

pub use error::CommandError;

use crate::{Error, Response};

/// A command with a typed response
///
/// Implementors provide the header and body; serialization and response
/// parsing through an [`Executor`](crate::Executor) come for free.
pub trait ApduCommand {
    /// Parsed response
    type Success;

    /// Error returned by the executor and the parser
    type Error: fmt::Debug;

    /// Wrap an APDU layer error
    fn convert_error(error: Error) -> Self::Error;

    /// CLA byte
    fn class(&self) -> u8;

    /// INS byte
    fn instruction(&self) -> u8;

    /// P1 byte
    fn p1(&self) -> u8 {
        0x00
    }

    /// P2 byte
    fn p2(&self) -> u8 {
        0x00
    }

    /// Command data, sent with its Lc
    fn data(&self) -> Option<&[u8]> {
        None
    }

    /// Le byte
    fn expected_length(&self) -> Option<u8> {
        None
    }

    /// Serialize as a short APDU
    fn to_bytes(&self) -> Bytes {
        let data = self.data().filter(|data| !data.is_empty());
        let le = self.expected_length();

        let mut buf = BytesMut::with_capacity(
            4 + data.map_or(0, |data| 1 + data.len()) + usize::from(le.is_some()),
        );
        buf.put_slice(&[self.class(), self.instruction(), self.p1(), self.p2()]);
        if let Some(data) = data {
            buf.put_u8(data.len() as u8);
            buf.put_slice(data);
        }
        if let Some(le) = le {
            buf.put_u8(le);
        }
        buf.freeze()
    }

    /// Interpret a response to this command
    fn parse_response(response: Response) -> Result<Self::Success, Self::Error>;

    /// Interpret raw response bytes, status word included
    fn parse_response_raw(bytes: &[u8]) -> Result<Self::Success, Self::Error> {
        let response = Response::from_bytes(bytes).map_err(|e| Self::convert_error(e.into()))?;
        Self::parse_response(response)
    }
}

/// Untyped command APDU
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// CLA byte
    pub cla: u8,
    /// INS byte
    pub ins: u8,
    /// P1 byte
    pub p1: u8,
    /// P2 byte
    pub p2: u8,
    /// Command data, empty when absent
    pub data: Bytes,
    /// Le byte
    pub le: Option<u8>,
}

impl Command {
    /// Header-only command
    pub const fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Bytes::new(),
            le: None,
        }
    }

    /// Attach command data
    pub fn with_data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = data.into();
        self
    }

    /// Attach an Le byte
    pub const fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// Parse a short command APDU
    ///
    /// After the header a single byte is Le; otherwise the first byte is Lc,
    /// followed by exactly Lc data bytes and an optional Le.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, CommandError> {
        let Some((&[cla, ins, p1, p2], body)) = raw.split_first_chunk::<4>() else {
            return Err(CommandError::TooShort(raw.len()));
        };
        let command = Self::new(cla, ins, p1, p2);

        let (lc, rest) = match body {
            [] => return Ok(command),
            [le] => return Ok(command.with_le(*le)),
            [lc, rest @ ..] => (usize::from(*lc), rest),
        };

        let le = match rest.len().checked_sub(lc) {
            Some(0) => None,
            Some(1) => rest.last().copied(),
            _ => {
                return Err(CommandError::LengthMismatch {
                    lc,
                    remaining: rest.len(),
                });
            }
        };

        Ok(Self {
            data: Bytes::copy_from_slice(&rest[..lc]),
            le,
            ..command
        })
    }
}

impl ApduCommand for Command {
    type Success = Response;
    type Error = Error;

    fn convert_error(error: Error) -> Self::Error {
        error
    }

    fn class(&self) -> u8 {
        self.cla
    }

    fn instruction(&self) -> u8 {
        self.ins
    }

    fn p1(&self) -> u8 {
        self.p1
    }

    fn p2(&self) -> u8 {
        self.p2
    }

    fn data(&self) -> Option<&[u8]> {
        Some(&self.data[..])
    }

    fn expected_length(&self) -> Option<u8> {
        self.le
    }

    fn parse_response(response: Response) -> Result<Response, Error> {
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_serialize() {
        let select = Command::new(0x00, 0xA4, 0x04, 0x00)
            .with_data(hex!("F000000001").to_vec())
            .with_le(0x00);
        assert_eq!(select.to_bytes().as_ref(), hex!("00A4040005F00000000100"));

        let read = Command::new(0x00, 0x20, 0x00, 0x00);
        assert_eq!(read.to_bytes().as_ref(), hex!("00200000"));
    }

    #[test]
    fn test_empty_data_has_no_lc() {
        let cmd = Command::new(0x00, 0x21, 0x00, 0x00).with_data(Bytes::new());
        assert_eq!(cmd.to_bytes().as_ref(), hex!("00210000"));
    }

    #[test]
    fn test_parse_cases() {
        let cmd = Command::from_bytes(&hex!("00100000")).unwrap();
        assert_eq!(cmd, Command::new(0x00, 0x10, 0x00, 0x00));

        let cmd = Command::from_bytes(&hex!("0020000002")).unwrap();
        assert_eq!(cmd.le, Some(0x02));
        assert!(cmd.data.is_empty());

        let cmd = Command::from_bytes(&hex!("00210000020032")).unwrap();
        assert_eq!(cmd.data.as_ref(), hex!("0032"));
        assert_eq!(cmd.le, None);

        let cmd = Command::from_bytes(&hex!("00A4040005F00000000100")).unwrap();
        assert_eq!(cmd.data.as_ref(), hex!("F000000001"));
        assert_eq!(cmd.le, Some(0x00));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::from_bytes(&hex!("0010")),
            Err(CommandError::TooShort(2))
        );
        assert_eq!(
            Command::from_bytes(&hex!("0021000005AABB")),
            Err(CommandError::LengthMismatch { lc: 5, remaining: 2 })
        );
        assert_eq!(
            Command::from_bytes(&hex!("00210000010102FF")),
            Err(CommandError::LengthMismatch { lc: 1, remaining: 3 })
        );
    }
}
