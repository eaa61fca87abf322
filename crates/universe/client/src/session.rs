//! Client session flow and report

use std::io::Write;

use tracing::{info, warn};
use universe_apdu_core::CardExecutor;
use universe_protocol::{
    Aid, GreetResponse, ReadCounterResponse, WriteCounterResponse, expand_identifier_with,
};

use crate::{Connected, Error, HelloUniverse, Result, SessionConfig, Terminals};

/// What the session does once the applet is selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Greet, then read the access counter
    #[default]
    Greet,
    /// Reset the access counter to zero
    Reset,
}

impl Mode {
    /// Mode selected by the optional action argument; only `reset`, in any
    /// case, changes the default
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(action) if action.eq_ignore_ascii_case("reset") => Self::Reset,
            _ => Self::Greet,
        }
    }
}

/// Validated session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    /// Applet to select
    pub aid: Aid,
    /// What to do after selecting
    pub mode: Mode,
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No card was presented before the timeout
    NoCard,
    /// The counter reset was attempted
    Reset {
        /// Whether the card accepted the write
        success: bool,
    },
    /// Greeting and counter were requested
    Completed {
        /// Greeting text, or the error line reported instead
        greeting: String,
        /// Counter value, or -1 if the read was rejected
        count: i32,
    },
}

/// Client session writing its report to `out`
#[derive(Debug)]
pub struct Session<W> {
    config: SessionConfig,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session reporting to `out`
    pub const fn new(config: SessionConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Announce the client and validate its arguments
    ///
    /// Runs before any reader is touched, so a missing identifier fails fast.
    pub fn prepare(&mut self, aid: Option<&str>, action: Option<&str>) -> Result<SessionRequest> {
        writeln!(self.out, "Client started")?;

        let identifier = aid.ok_or(Error::MissingIdentifier)?;
        if identifier.chars().count() < self.config.short_aid_threshold {
            writeln!(
                self.out,
                "Short AID detected. Assuming that it is a Fidesmo app id and expanding to full AID"
            )?;
        }
        let expanded = expand_identifier_with(
            identifier,
            &self.config.aid_prefix,
            &self.config.aid_suffix,
            self.config.short_aid_threshold,
        );

        Ok(SessionRequest {
            aid: expanded.parse()?,
            mode: Mode::from_arg(action),
        })
    }

    /// Wait for a card and run the request against it
    pub fn run<T: Terminals>(
        &mut self,
        terminals: &mut T,
        request: &SessionRequest,
    ) -> Result<Outcome> {
        writeln!(self.out, "Waiting for smart card")?;

        let Some(Connected { transport, .. }) = self.await_card(terminals)? else {
            writeln!(self.out, "Timeout reached. Exiting")?;
            return Ok(Outcome::NoCard);
        };

        let mut card = HelloUniverse::new(CardExecutor::new(transport));

        let select = card.select(&request.aid)?;
        if !select.is_success() {
            warn!("Select of {} failed", request.aid);
            writeln!(
                self.out,
                "Error in applet select command. Response status = {:x}",
                select.status()
            )?;
        }

        match request.mode {
            Mode::Reset => self.reset(&mut card),
            Mode::Greet => self.greet(&mut card),
        }
    }

    /// Consume the session, returning the report sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn await_card<T: Terminals>(
        &mut self,
        terminals: &mut T,
    ) -> Result<Option<Connected<T::Transport>>> {
        if let Some(connected) = terminals.connect_present()? {
            return Ok(Some(connected));
        }

        let connected = terminals.wait_for_card(self.config.card_timeout)?;
        if let Some(Connected { reader, .. }) = &connected {
            info!("Card detected in {}", reader);
            writeln!(self.out, "Card detected: {reader}")?;
        }
        Ok(connected)
    }

    fn reset<E: universe_apdu_core::Executor>(
        &mut self,
        card: &mut HelloUniverse<E>,
    ) -> Result<Outcome> {
        writeln!(self.out, "Resetting access count...")?;

        let success = match card.set_access_count(0)? {
            WriteCounterResponse::Success => true,
            WriteCounterResponse::Failed { status } => {
                warn!("Counter reset rejected with {}", status);
                writeln!(self.out, "ERROR: Response status = {status:x}")?;
                false
            }
        };

        writeln!(self.out, "{}", if success { "\tsuccess" } else { "" })?;
        Ok(Outcome::Reset { success })
    }

    fn greet<E: universe_apdu_core::Executor>(
        &mut self,
        card: &mut HelloUniverse<E>,
    ) -> Result<Outcome> {
        writeln!(self.out, "Saying hello...")?;
        let greeting = match card.say_hello()? {
            GreetResponse::Success { message } => message,
            GreetResponse::Failed { status } => {
                warn!("Greet rejected with {}", status);
                format!("ERROR: Response Status = {status:x}")
            }
        };
        writeln!(self.out, "\t{greeting}")?;

        writeln!(self.out, "Getting access count...")?;
        let count = match card.access_count()? {
            ReadCounterResponse::Success { count } => i32::from(count),
            ReadCounterResponse::Failed { status } => {
                warn!("Counter read rejected with {}", status);
                -1
            }
        };
        writeln!(self.out, "\t{count}")?;

        Ok(Outcome::Completed { greeting, count })
    }
}
