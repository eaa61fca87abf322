//! Command processor

use tracing::{debug, instrument, warn};
use universe_apdu_core::{Command, Response, StatusWord};

use crate::{AccessCounter, CounterStore, StoreError, dispatch};

/// Input to the command processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// The platform is making this applet the active one
    Select,
    /// Any other command addressed to the applet
    Command(Command),
}

/// Hello Universe command processor
///
/// Every command other than a selection is counted before it is dispatched,
/// unsupported instructions included. The counter is committed to the store
/// whenever a command changes it; if the commit fails the command has no
/// effect and answers 6581.
#[derive(Debug)]
pub struct HelloUniverseApplet<S> {
    counter: AccessCounter,
    committed: u16,
    store: S,
}

impl<S: CounterStore> HelloUniverseApplet<S> {
    /// Install the applet on top of `store`, loading the persisted counter
    pub fn new(mut store: S) -> Result<Self, StoreError> {
        let value = store.load()?;
        debug!("Applet installed with access counter {}", value);
        Ok(Self {
            counter: AccessCounter::new(value),
            committed: value,
            store,
        })
    }

    /// Process one request and produce its response
    #[instrument(skip(self), level = "trace")]
    pub fn process(&mut self, request: Request) -> Response {
        let command = match request {
            Request::Select => return Response::ok_empty(),
            Request::Command(command) => command,
        };

        self.counter.increment();
        let response = dispatch::dispatch(command.ins, &mut self.counter, &command.data);

        if let Err(e) = self.commit() {
            warn!("Failed to persist access counter: {}", e);
            self.counter = AccessCounter::new(self.committed);
            return Response::error(StatusWord::MEMORY_FAILURE);
        }

        response
    }

    /// Reload the counter from the store, as after a power cycle
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let value = self.store.load()?;
        self.counter = AccessCounter::new(value);
        self.committed = value;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        let value = self.counter.get();
        if value != self.committed {
            self.store.commit(value)?;
            self.committed = value;
        }
        Ok(())
    }
}

impl<S> HelloUniverseApplet<S> {
    /// Current counter value
    pub const fn counter(&self) -> u16 {
        self.counter.get()
    }

    /// Backing store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Uninstall, returning the backing store
    pub fn into_store(self) -> S {
        self.store
    }
}
