//! Hello Universe wire protocol
//!
//! Everything both ends of the conversation agree on: instruction codes, the
//! greeting text, the counter ceiling, applet identifiers, and typed commands
//! for the host side built on `universe-apdu-core`.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aid;
pub mod commands;
pub mod constants;
mod error;

pub use aid::{Aid, expand_identifier, expand_identifier_with};
pub use commands::{
    GreetCommand, GreetResponse, NoopCommand, NoopResponse, ReadCounterCommand,
    ReadCounterResponse, SelectCommand, SelectResponse, WriteCounterCommand, WriteCounterResponse,
};
pub use error::{Error, Result};
