//! PC/SC readers as APDU transports
//!
//! [`PcscDeviceManager`] lists readers and opens a [`PcscTransport`] on the
//! card in one of them. [`PcscMonitor`] blocks until a card is inserted,
//! which is how contactless cards are usually found.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::time::Duration;
//!
//! use universe_apdu_core::prelude::*;
//! use universe_apdu_transport_pcsc::PcscDeviceManager;
//!
//! let manager = PcscDeviceManager::new()?;
//!
//! let reader = match manager.first_reader_with_card()? {
//!     Some(reader) => reader.name().to_owned(),
//!     None => match manager.monitor()?.wait_for_card(Duration::from_secs(15))? {
//!         Some(event) => event.reader().to_owned(),
//!         None => return Ok(()),
//!     },
//! };
//!
//! let mut card = CardExecutor::new(manager.open_reader(&reader)?);
//! let select = Command::new(0x00, 0xA4, 0x04, 0x00).with_data(vec![0xA0, 0x00, 0x00, 0x06, 0x17]);
//! println!("SELECT: {}", card.execute(&select)?.status());
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

mod config;
mod error;
mod event;
mod manager;
mod monitor;
mod reader;
mod transport;

pub use config::ConnectOptions;
pub use error::PcscError;
pub use event::CardEvent;
pub use manager::PcscDeviceManager;
pub use monitor::PcscMonitor;
pub use reader::PcscReader;
pub use transport::PcscTransport;

pub use pcsc::{Protocols, ShareMode};
