//! Typed command execution on top of a transport

use core::fmt;

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::command::ApduCommand;
use crate::response::Response;
use crate::transport::CardTransport;
use crate::{Error, Result};

/// Sends commands and hands back parsed responses
pub trait Executor: fmt::Debug {
    /// Exchange raw bytes
    #[instrument(level = "trace", skip_all, fields(len = command.len()))]
    fn transmit(&mut self, command: &[u8]) -> Result<Bytes> {
        self.do_transmit(command).inspect_err(|error| {
            debug!(%error, "Transmit failed");
        })
    }

    /// Exchange raw bytes without instrumentation
    fn do_transmit(&mut self, command: &[u8]) -> Result<Bytes>;

    /// Serialize `command`, send it and parse the reply
    fn execute<C: ApduCommand>(&mut self, command: &C) -> core::result::Result<C::Success, C::Error> {
        let raw = self.transmit(&command.to_bytes()).map_err(C::convert_error)?;
        let response = Response::from_bytes(&raw)
            .map_err(|e| C::convert_error(Error::from(e).context("Malformed response")))?;
        C::parse_response(response)
    }

    /// Reset the underlying card connection
    fn reset(&mut self) -> Result<()>;
}

/// [`Executor`] over a single [`CardTransport`]
#[derive(Debug)]
pub struct CardExecutor<T: CardTransport> {
    transport: T,
}

impl<T: CardTransport> CardExecutor<T> {
    /// Executor driving `transport`
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Give the transport back
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: CardTransport> Executor for CardExecutor<T> {
    fn do_transmit(&mut self, command: &[u8]) -> Result<Bytes> {
        Ok(self.transport.transmit_raw(command)?)
    }

    fn reset(&mut self) -> Result<()> {
        Ok(self.transport.reset()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{ScriptedTransport, TransportError};
    use crate::{Command, StatusWord};
    use hex_literal::hex;

    #[test]
    fn test_execute_round_trip() {
        let transport = ScriptedTransport::new([hex!("00029000").to_vec()]);
        let mut executor = CardExecutor::new(transport);

        let response = executor
            .execute(&Command::new(0x00, 0x20, 0x00, 0x00))
            .unwrap();
        assert!(response.is_success());
        assert_eq!(response.payload(), hex!("0002"));
        assert_eq!(executor.transport().sent[0].as_ref(), hex!("00200000"));
    }

    #[test]
    fn test_error_status_is_not_an_error() {
        let transport = ScriptedTransport::new([hex!("6D00").to_vec()]);
        let mut executor = CardExecutor::new(transport);

        let response = executor
            .execute(&Command::new(0x00, 0x42, 0x00, 0x00))
            .unwrap();
        assert_eq!(response.status(), StatusWord::INS_NOT_SUPPORTED);
    }

    #[test]
    fn test_truncated_reply() {
        let transport = ScriptedTransport::new([vec![0x90]]);
        let mut executor = CardExecutor::new(transport);

        let err = executor
            .execute(&Command::new(0x00, 0x20, 0x00, 0x00))
            .unwrap_err();
        assert!(matches!(err, Error::Context { .. }));
        assert!(matches!(err.root(), Error::Response(_)));
    }

    #[test]
    fn test_unplugged_then_reset() {
        let transport = ScriptedTransport {
            unplugged: true,
            ..ScriptedTransport::default()
        };
        let mut executor = CardExecutor::new(transport);

        let err = executor.transmit(&hex!("00100000")).unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::NoCard)));

        executor.reset().unwrap();
        assert!(executor.transport().is_connected());
    }
}
