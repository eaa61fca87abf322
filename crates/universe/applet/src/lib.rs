//! Hello Universe applet
//!
//! The device side of the protocol: a command processor that counts every
//! access in a saturating counter kept in persistent storage, answers a
//! greeting, and lets the counter be read or overwritten.
//!
//! [`VirtualCard`] installs the applet behind the host [`CardTransport`] trait,
//! so a host driver can talk to it in-process exactly as it would to a card in
//! a reader.
//!
//! [`CardTransport`]: universe_apdu_core::CardTransport
//!
//! # Examples
//!
//! ```
//! use universe_apdu_core::prelude::*;
//! use universe_applet::{HelloUniverseApplet, MemoryStore, VirtualCard};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let aid = "F000000001".parse()?;
//! let applet = HelloUniverseApplet::new(MemoryStore::default())?;
//! let mut card = VirtualCard::new(applet, aid);
//!
//! card.transmit_raw(&[0x00, 0xA4, 0x04, 0x00, 0x05, 0xF0, 0x00, 0x00, 0x00, 0x01])?;
//! let response = card.transmit_raw(&[0x00, 0x10, 0x00, 0x00])?;
//! assert_eq!(&response[..15], b"Hello Universe!");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod applet;
mod counter;
pub mod dispatch;
mod store;
mod virtual_card;

pub use applet::{HelloUniverseApplet, Request};
pub use counter::AccessCounter;
pub use store::{CounterStore, FileStore, MemoryStore, StoreError};
pub use virtual_card::VirtualCard;
