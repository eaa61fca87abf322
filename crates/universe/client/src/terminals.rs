//! Card terminal providers

use std::time::Duration;

use tracing::{debug, info};
use universe_apdu_core::CardTransport;
use universe_apdu_transport_pcsc::{CardEvent, PcscDeviceManager, PcscTransport};

use crate::Result;

/// A connection to a card in a named reader
#[derive(Debug)]
pub struct Connected<T> {
    /// Reader holding the card
    pub reader: String,
    /// Transport to the card
    pub transport: T,
}

/// Source of card connections
pub trait Terminals {
    /// Transport produced for a connected card
    type Transport: CardTransport;

    /// Connect to the first reader that already holds a card
    fn connect_present(&mut self) -> Result<Option<Connected<Self::Transport>>>;

    /// Block until a card is presented or `timeout` elapses
    fn wait_for_card(&mut self, timeout: Duration) -> Result<Option<Connected<Self::Transport>>>;
}

impl Terminals for PcscDeviceManager {
    type Transport = PcscTransport;

    fn connect_present(&mut self) -> Result<Option<Connected<PcscTransport>>> {
        let Some(reader) = self.first_reader_with_card()? else {
            return Ok(None);
        };

        info!("Card present in {}", reader.name());
        let transport = self.open_reader(reader.name())?;
        Ok(Some(Connected {
            reader: reader.name().to_string(),
            transport,
        }))
    }

    fn wait_for_card(&mut self, timeout: Duration) -> Result<Option<Connected<PcscTransport>>> {
        debug!("Waiting up to {:?} for a card", timeout);
        match self.monitor()?.wait_for_card(timeout)? {
            Some(CardEvent::Inserted { reader, .. }) => {
                info!("Card inserted in {}", reader);
                let transport = self.open_reader(&reader)?;
                Ok(Some(Connected { reader, transport }))
            }
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Present,
    Inserted,
    Empty,
}

/// Single in-process reader, for simulators and tests
///
/// The card is either present from the start, presented while the driver
/// waits, or never arrives. Waiting never sleeps; the requested timeout is
/// recorded instead.
#[derive(Debug)]
pub struct VirtualTerminals<T> {
    reader: String,
    card: Option<T>,
    slot: Slot,
    waited: Option<Duration>,
}

impl<T: CardTransport> VirtualTerminals<T> {
    /// Reader that already holds `card`
    pub fn with_card_present(reader: impl Into<String>, card: T) -> Self {
        Self::new(reader.into(), Some(card), Slot::Present)
    }

    /// Reader where `card` is presented once the driver starts waiting
    pub fn with_card_inserted(reader: impl Into<String>, card: T) -> Self {
        Self::new(reader.into(), Some(card), Slot::Inserted)
    }

    /// Reader that never sees a card
    pub fn empty(reader: impl Into<String>) -> Self {
        Self::new(reader.into(), None, Slot::Empty)
    }

    const fn new(reader: String, card: Option<T>, slot: Slot) -> Self {
        Self {
            reader,
            card,
            slot,
            waited: None,
        }
    }

    /// Timeout passed to the last wait, if the driver waited at all
    pub const fn waited(&self) -> Option<Duration> {
        self.waited
    }

    fn take(&mut self) -> Option<Connected<T>> {
        self.card.take().map(|transport| Connected {
            reader: self.reader.clone(),
            transport,
        })
    }
}

impl<T: CardTransport> Terminals for VirtualTerminals<T> {
    type Transport = T;

    fn connect_present(&mut self) -> Result<Option<Connected<T>>> {
        Ok(match self.slot {
            Slot::Present => self.take(),
            Slot::Inserted | Slot::Empty => None,
        })
    }

    fn wait_for_card(&mut self, timeout: Duration) -> Result<Option<Connected<T>>> {
        self.waited = Some(timeout);
        Ok(match self.slot {
            Slot::Inserted => self.take(),
            Slot::Present | Slot::Empty => None,
        })
    }
}
