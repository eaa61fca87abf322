//! Response APDUs

mod error;
mod status;

use bytes::{BufMut, Bytes, BytesMut};

pub use error::ResponseError;
pub use status::StatusWord;

/// Response payload followed by its status word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    payload: Bytes,
    status: StatusWord,
}

impl Response {
    /// Response with the given payload and status
    pub fn new(payload: impl Into<Bytes>, status: StatusWord) -> Self {
        Self {
            payload: payload.into(),
            status,
        }
    }

    /// 9000 with a payload
    pub fn ok(payload: impl Into<Bytes>) -> Self {
        Self::new(payload, StatusWord::SUCCESS)
    }

    /// 9000 with no payload
    pub const fn ok_empty() -> Self {
        Self::error(StatusWord::SUCCESS)
    }

    /// Bare status word
    pub const fn error(status: StatusWord) -> Self {
        Self {
            payload: Bytes::new(),
            status,
        }
    }

    /// Split raw bytes into payload and trailing status word
    pub fn from_bytes(raw: &[u8]) -> Result<Self, ResponseError> {
        match raw.split_last_chunk::<2>() {
            Some((payload, &[sw1, sw2])) => Ok(Self {
                payload: Bytes::copy_from_slice(payload),
                status: StatusWord::new(sw1, sw2),
            }),
            None => Err(ResponseError::Truncated(raw.len())),
        }
    }

    /// Payload, empty when the card sent none
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Status word
    pub const fn status(&self) -> StatusWord {
        self.status
    }

    /// Whether the status word is 9000
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Serialize as payload followed by SW1 SW2
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.payload.len() + 2);
        buf.put_slice(&self.payload);
        buf.put_u16(self.status.to_u16());
        buf.freeze()
    }
}

impl From<Response> for Bytes {
    fn from(response: Response) -> Self {
        response.to_bytes()
    }
}
