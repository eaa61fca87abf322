//! Host driver for the Hello Universe applet
//!
//! [`HelloUniverse`] wraps any APDU [`Executor`] with typed operations.
//! [`Session`] runs the full client flow: wait for a card through a
//! [`Terminals`] provider, select the applet, then either greet and read the
//! access counter or reset it, writing a human readable report as it goes.
//!
//! [`Executor`]: universe_apdu_core::Executor
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod hello;
mod session;
mod terminals;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use hello::HelloUniverse;
pub use session::{Mode, Outcome, Session, SessionRequest};
pub use terminals::{Connected, Terminals, VirtualTerminals};
