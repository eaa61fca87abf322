use std::ffi::CString;
use std::time::Duration;

use pcsc::{Context, ReaderState, Scope, State};
use tracing::{debug, instrument};

use crate::{ConnectOptions, PcscError, PcscMonitor, PcscReader, PcscTransport};

/// Entry point to the PC/SC service
pub struct PcscDeviceManager {
    context: Context,
}

impl std::fmt::Debug for PcscDeviceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PcscDeviceManager").finish_non_exhaustive()
    }
}

impl PcscDeviceManager {
    /// Connect to the PC/SC service
    pub fn new() -> Result<Self, PcscError> {
        Ok(Self {
            context: Context::establish(Scope::User)?,
        })
    }

    /// Attached readers and the card each holds
    ///
    /// Fails with [`PcscError::NoReadersAvailable`] when none are attached.
    #[instrument(level = "debug", skip_all)]
    pub fn list_readers(&self) -> Result<Vec<PcscReader>, PcscError> {
        let names = reader_names(&self.context)?;
        if names.is_empty() {
            return Err(PcscError::NoReadersAvailable);
        }

        let mut states: Vec<ReaderState> = names
            .into_iter()
            .map(|name| ReaderState::new(name, State::UNAWARE))
            .collect();
        if let Err(e) = self
            .context
            .get_status_change(Some(Duration::ZERO), &mut states)
        {
            debug!("Reader status unavailable, reporting no cards: {}", e);
            return Ok(states
                .iter()
                .map(|state| PcscReader::new(state.name().to_string_lossy().into_owned(), None))
                .collect());
        }

        Ok(states.iter().map(PcscReader::from_state).collect())
    }

    /// First reader that holds a card, if any reader does
    pub fn first_reader_with_card(&self) -> Result<Option<PcscReader>, PcscError> {
        match self.list_readers() {
            Ok(readers) => Ok(readers.into_iter().find(PcscReader::has_card)),
            Err(PcscError::NoReadersAvailable) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Connect to the card in `reader` with default options
    pub fn open_reader(&self, reader: &str) -> Result<PcscTransport, PcscError> {
        self.open_reader_with(reader, ConnectOptions::default())
    }

    /// Connect to the card in `reader`
    pub fn open_reader_with(
        &self,
        reader: &str,
        options: ConnectOptions,
    ) -> Result<PcscTransport, PcscError> {
        PcscTransport::new(self.context.clone(), reader, options)
    }

    /// Watch all readers for card insertion and removal
    pub fn monitor(&self) -> Result<PcscMonitor, PcscError> {
        PcscMonitor::new(self.context.clone())
    }
}

/// Reader names, empty rather than an error when none are attached
pub(crate) fn reader_names(context: &Context) -> Result<Vec<CString>, PcscError> {
    match context.list_readers_owned() {
        Ok(names) => Ok(names),
        Err(pcsc::Error::NoReadersAvailable) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
