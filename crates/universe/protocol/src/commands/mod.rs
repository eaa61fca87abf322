//! Typed Hello Universe commands
//!
//! Each command pairs with a response enum that separates success from the
//! status word the card returned instead. A non-success status is a normal
//! outcome here, not an error; only transport and parse failures are errors.

mod counter;
mod greet;
mod noop;
mod select;

pub use counter::{ReadCounterCommand, ReadCounterResponse, WriteCounterCommand, WriteCounterResponse};
pub use greet::{GreetCommand, GreetResponse};
pub use noop::{NoopCommand, NoopResponse};
pub use select::{SelectCommand, SelectResponse};
