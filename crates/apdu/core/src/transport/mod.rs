//! Raw byte transports

mod error;

use core::fmt;

use bytes::Bytes;
use tracing::{debug, trace};

pub use error::TransportError;

/// Moves raw APDU bytes to a card and back
///
/// Transports know nothing of command structure; framing and status words are
/// handled by the [`Executor`](crate::Executor).
pub trait CardTransport: fmt::Debug {
    /// Exchange one command for one response, with trace logging
    fn transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        trace!(command = %hex::encode(command), "-> card");
        let result = self.do_transmit_raw(command);
        match &result {
            Ok(response) => trace!(response = %hex::encode(response), "<- card"),
            Err(error) => debug!(%error, "Exchange failed"),
        }
        result
    }

    /// Exchange one command for one response
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError>;

    /// Whether a card is currently reachable
    fn is_connected(&self) -> bool;

    /// Reset the card connection
    fn reset(&mut self) -> Result<(), TransportError>;
}

#[cfg(test)]
pub(crate) use scripted::ScriptedTransport;

#[cfg(test)]
mod scripted {
    use std::collections::VecDeque;

    use super::*;

    /// Answers each command with the next queued reply
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedTransport {
        pub(crate) replies: VecDeque<Bytes>,
        pub(crate) sent: Vec<Bytes>,
        pub(crate) unplugged: bool,
    }

    impl ScriptedTransport {
        pub(crate) fn new<I, B>(replies: I) -> Self
        where
            I: IntoIterator<Item = B>,
            B: Into<Bytes>,
        {
            Self {
                replies: replies.into_iter().map(Into::into).collect(),
                ..Self::default()
            }
        }
    }

    impl CardTransport for ScriptedTransport {
        fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
            if self.unplugged {
                return Err(TransportError::NoCard);
            }
            self.sent.push(Bytes::copy_from_slice(command));
            self.replies
                .pop_front()
                .ok_or_else(|| TransportError::other("script exhausted"))
        }

        fn is_connected(&self) -> bool {
            !self.unplugged
        }

        fn reset(&mut self) -> Result<(), TransportError> {
            self.unplugged = false;
            Ok(())
        }
    }
}
