//! ISO/IEC 7816-4 APDU building blocks
//!
//! Short-form command and response APDUs, status words, and the two seams
//! every smart card conversation goes through:
//!
//! - [`CardTransport`] moves raw bytes to a card and back (a PC/SC reader, or
//!   an in-process card)
//! - [`Executor`] turns typed [`ApduCommand`]s into exchanges on a transport
//!   and parses what comes back
//!
//! Card-side code uses the same types the other way round: it parses a
//! [`Command`] from raw bytes and answers with a [`Response`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub use bytes::Bytes;

pub mod command;
pub mod executor;
pub mod response;
pub mod transport;

mod error;
pub use error::{Error, Result};

pub use command::{ApduCommand, Command};
pub use executor::{CardExecutor, Executor};
pub use response::{Response, StatusWord};
pub use transport::{CardTransport, TransportError};

/// Commonly used traits and types
pub mod prelude {
    pub use crate::{
        ApduCommand, Bytes, CardExecutor, CardTransport, Command, Error, Executor, Response,
        StatusWord, TransportError,
    };
}
