//! In-process card running the applet

use std::fmt;

use bytes::Bytes;
use tracing::{debug, info};
use universe_apdu_core::{CardTransport, Command, Response, StatusWord, TransportError};
use universe_protocol::{
    Aid,
    constants::{SELECT_BY_NAME, ins},
};

use crate::{CounterStore, HelloUniverseApplet, Request};

/// Card with a single installed applet, reachable through [`CardTransport`]
///
/// Plays the platform's part: SELECT by name for the installed AID becomes
/// [`Request::Select`], SELECT of any other AID answers 6A82, and commands
/// sent before a successful selection answer 6986.
pub struct VirtualCard<S> {
    applet: HelloUniverseApplet<S>,
    aid: Aid,
    selected: bool,
}

impl<S> fmt::Debug for VirtualCard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualCard")
            .field("aid", &self.aid)
            .field("selected", &self.selected)
            .field("counter", &self.applet.counter())
            .finish()
    }
}

impl<S: CounterStore> VirtualCard<S> {
    /// Install `applet` under `aid`
    pub const fn new(applet: HelloUniverseApplet<S>, aid: Aid) -> Self {
        Self {
            applet,
            aid,
            selected: false,
        }
    }

    /// Installed AID
    pub const fn aid(&self) -> &Aid {
        &self.aid
    }

    /// The installed applet
    pub const fn applet(&self) -> &HelloUniverseApplet<S> {
        &self.applet
    }

    /// Remove the applet from the card
    pub fn into_applet(self) -> HelloUniverseApplet<S> {
        self.applet
    }

    /// Handle one raw command APDU
    pub fn process(&mut self, raw: &[u8]) -> Response {
        let command = match Command::from_bytes(raw) {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejecting malformed command: {}", e);
                return Response::error(StatusWord::WRONG_LENGTH);
            }
        };

        if command.ins == ins::SELECT && command.p1 == SELECT_BY_NAME {
            return self.select(&command.data);
        }

        if !self.selected {
            debug!("No applet selected for instruction {:#04x}", command.ins);
            return Response::error(StatusWord::COMMAND_NOT_ALLOWED);
        }

        self.applet.process(Request::Command(command))
    }

    fn select(&mut self, aid: &[u8]) -> Response {
        if aid != self.aid.as_bytes() {
            debug!("No applet installed for AID {}", hex::encode_upper(aid));
            return Response::error(StatusWord::FILE_NOT_FOUND);
        }

        info!("Selected applet {}", self.aid);
        self.selected = true;
        self.applet.process(Request::Select)
    }
}

impl<S: CounterStore> CardTransport for VirtualCard<S> {
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        Ok(self.process(command).into())
    }

    fn is_connected(&self) -> bool {
        true
    }

    /// Power cycle: drop the selection and reload the counter from storage
    fn reset(&mut self) -> Result<(), TransportError> {
        self.selected = false;
        self.applet
            .reload()
            .map_err(|e| TransportError::other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use hex_literal::hex;

    fn card() -> VirtualCard<MemoryStore> {
        let applet = HelloUniverseApplet::new(MemoryStore::default()).unwrap();
        VirtualCard::new(applet, Aid::try_from(&hex!("F000000001")[..]).unwrap())
    }

    #[test]
    fn test_select_installed_aid() {
        let mut card = card();
        let response = card.transmit_raw(&hex!("00A4040005F00000000100")).unwrap();
        assert_eq!(response.as_ref(), hex!("9000"));
        assert_eq!(card.applet().counter(), 0);
    }

    #[test]
    fn test_select_unknown_aid() {
        let mut card = card();
        let response = card.transmit_raw(&hex!("00A4040005F00000000200")).unwrap();
        assert_eq!(response.as_ref(), hex!("6A82"));
    }

    #[test]
    fn test_command_before_select() {
        let mut card = card();
        let response = card.transmit_raw(&hex!("00100000")).unwrap();
        assert_eq!(response.as_ref(), hex!("6986"));
        assert_eq!(card.applet().counter(), 0);
    }

    #[test]
    fn test_malformed_command() {
        let mut card = card();
        assert_eq!(card.transmit_raw(&hex!("0010")).unwrap().as_ref(), hex!("6700"));
        assert_eq!(
            card.transmit_raw(&hex!("0021000005AABB")).unwrap().as_ref(),
            hex!("6700")
        );
    }

    #[test]
    fn test_greet_after_select() {
        let mut card = card();
        card.transmit_raw(&hex!("00A4040005F000000001")).unwrap();
        let response = card.transmit_raw(&hex!("00100000")).unwrap();
        assert_eq!(response.as_ref(), b"Hello Universe!\x90\x00");
    }

    #[test]
    fn test_reset_requires_reselect() {
        let mut card = card();
        card.transmit_raw(&hex!("00A4040005F000000001")).unwrap();
        card.reset().unwrap();
        let response = card.transmit_raw(&hex!("00200000")).unwrap();
        assert_eq!(response.as_ref(), hex!("6986"));
    }
}
