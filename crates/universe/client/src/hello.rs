//! Typed access to the applet

use tracing::instrument;
use universe_apdu_core::Executor;
use universe_protocol::{
    Aid, GreetCommand, GreetResponse, NoopCommand, NoopResponse, ReadCounterCommand,
    ReadCounterResponse, SelectCommand, SelectResponse, WriteCounterCommand, WriteCounterResponse,
};

use crate::Result;

/// Hello Universe applet reached through an executor
#[derive(Debug)]
pub struct HelloUniverse<E> {
    executor: E,
}

impl<E: Executor> HelloUniverse<E> {
    /// Wrap an executor
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Select the applet
    #[instrument(skip_all, fields(aid = %aid))]
    pub fn select(&mut self, aid: &Aid) -> Result<SelectResponse> {
        Ok(self.executor.execute(&SelectCommand::new(aid.clone()))?)
    }

    /// Ask for the greeting
    pub fn say_hello(&mut self) -> Result<GreetResponse> {
        Ok(self.executor.execute(&GreetCommand)?)
    }

    /// Read the access counter
    pub fn access_count(&mut self) -> Result<ReadCounterResponse> {
        Ok(self.executor.execute(&ReadCounterCommand)?)
    }

    /// Overwrite the access counter
    pub fn set_access_count(&mut self, value: u16) -> Result<WriteCounterResponse> {
        Ok(self.executor.execute(&WriteCounterCommand::new(value))?)
    }

    /// Send a no-op, which only counts as an access
    pub fn noop(&mut self) -> Result<NoopResponse> {
        Ok(self.executor.execute(&NoopCommand)?)
    }

    /// Get a reference to the executor
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Unwrap the executor
    pub fn into_inner(self) -> E {
        self.executor
    }
}
