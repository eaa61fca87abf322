use std::ffi::CString;
use std::fmt;

use pcsc::{Attribute, Card, Context, Disposition};
use tracing::{debug, warn};
use universe_apdu_core::{Bytes, CardTransport, TransportError};

use crate::{ConnectOptions, PcscError};

/// [`CardTransport`] over a card in a PC/SC reader
///
/// The connection is made lazily and dropped when the card goes away, so the
/// transport survives a card being swapped between commands.
pub struct PcscTransport {
    context: Context,
    reader: String,
    options: ConnectOptions,
    card: Option<Card>,
}

impl fmt::Debug for PcscTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscTransport")
            .field("reader", &self.reader)
            .field("connected", &self.card.is_some())
            .field("options", &self.options)
            .finish()
    }
}

impl PcscTransport {
    pub(crate) fn new(
        context: Context,
        reader: &str,
        options: ConnectOptions,
    ) -> Result<Self, PcscError> {
        let mut transport = Self {
            context,
            reader: reader.to_owned(),
            options,
            card: None,
        };
        match transport.card() {
            Ok(_) | Err(PcscError::NoCard(_)) => Ok(transport),
            Err(e) => Err(e),
        }
    }

    /// Reader this transport talks through
    pub fn reader_name(&self) -> &str {
        &self.reader
    }

    /// Answer to reset of the connected card
    pub fn atr(&mut self) -> Result<Vec<u8>, PcscError> {
        Ok(self.card()?.get_attribute_owned(Attribute::AtrString)?)
    }

    fn card(&mut self) -> Result<&mut Card, PcscError> {
        if self.card.is_none() {
            let card = self.connect()?;
            debug!("Connected to card in {}", self.reader);
            self.card = Some(card);
        }
        self.card
            .as_mut()
            .ok_or_else(|| PcscError::NoCard(self.reader.clone()))
    }

    fn connect(&self) -> Result<Card, PcscError> {
        let name = CString::new(self.reader.as_str())
            .map_err(|_| PcscError::ReaderNotFound(self.reader.clone()))?;
        self.context
            .connect(&name, self.options.share_mode, self.options.protocols)
            .map_err(|e| match e {
                pcsc::Error::NoSmartcard | pcsc::Error::RemovedCard => {
                    PcscError::NoCard(self.reader.clone())
                }
                pcsc::Error::UnknownReader => PcscError::ReaderNotFound(self.reader.clone()),
                e => e.into(),
            })
    }

    fn exchange(&mut self, command: &[u8]) -> Result<Bytes, PcscError> {
        let mut buf = [0u8; pcsc::MAX_BUFFER_SIZE];
        match self.card()?.transmit(command, &mut buf) {
            Ok(response) => return Ok(Bytes::copy_from_slice(response)),
            Err(e @ (pcsc::Error::RemovedCard | pcsc::Error::ResetCard)) => {
                self.card = None;
                if e == pcsc::Error::RemovedCard || !self.options.reconnect_on_reset {
                    return Err(e.into());
                }
                warn!("Card in {} was reset by another application, retrying", self.reader);
            }
            Err(e) => return Err(e.into()),
        }

        let response = self.card()?.transmit(command, &mut buf)?;
        Ok(Bytes::copy_from_slice(response))
    }
}

impl CardTransport for PcscTransport {
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        Ok(self.exchange(command)?)
    }

    fn is_connected(&self) -> bool {
        self.card.is_some()
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        let disconnected = self.card.take().map(|card| card.disconnect(Disposition::ResetCard));
        if let Some(Err((_, e))) = disconnected {
            debug!("Reset disconnect failed: {}", e);
        }
        self.card()?;
        Ok(())
    }
}

impl Drop for PcscTransport {
    fn drop(&mut self) {
        let disconnected = self.card.take().map(|card| card.disconnect(Disposition::LeaveCard));
        if let Some(Err((_, e))) = disconnected {
            debug!("Disconnect from {} failed: {}", self.reader, e);
        }
    }
}
