use std::collections::{HashMap, VecDeque};
use std::ffi::CString;
use std::fmt;
use std::time::{Duration, Instant};

use pcsc::{Context, ReaderState, State};
use tracing::{debug, trace};

use crate::manager::reader_names;
use crate::reader::card_present;
use crate::{CardEvent, PcscError};

/// Blocking watcher for card insertion and removal across all readers
///
/// Readers plugged in or removed while watching are picked up through the
/// PnP notification pseudo reader.
pub struct PcscMonitor {
    context: Context,
    // PnP notification first, then one entry per reader
    states: Vec<ReaderState>,
    present: HashMap<String, bool>,
    queued: VecDeque<CardEvent>,
}

impl fmt::Debug for PcscMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscMonitor")
            .field("present", &self.present)
            .field("queued", &self.queued)
            .finish_non_exhaustive()
    }
}

impl PcscMonitor {
    pub(crate) fn new(context: Context) -> Result<Self, PcscError> {
        let mut monitor = Self {
            context,
            states: vec![ReaderState::new(pcsc::PNP_NOTIFICATION(), State::UNAWARE)],
            present: HashMap::new(),
            queued: VecDeque::new(),
        };
        monitor.watch_attached_readers()?;
        Ok(monitor)
    }

    fn watch_attached_readers(&mut self) -> Result<(), PcscError> {
        let names = reader_names(&self.context)?;
        self.present.retain(|reader, _| {
            names
                .iter()
                .any(|name| name.to_string_lossy() == reader.as_str())
        });

        if sync_watch_list(&mut self.states, names) {
            debug!("Watching {} reader(s)", self.states.len() - 1);
        }
        Ok(())
    }

    /// Next insertion or removal, or `None` once `timeout` elapses
    pub fn next_event(&mut self, timeout: Duration) -> Result<Option<CardEvent>, PcscError> {
        let deadline = Instant::now() + timeout;

        while self.queued.is_empty() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            self.states.iter_mut().for_each(ReaderState::sync_current_state);

            match self.context.get_status_change(Some(remaining), &mut self.states) {
                Ok(()) => {}
                Err(pcsc::Error::Timeout) => return Ok(None),
                Err(e) => return Err(e.into()),
            }

            if self.collect_changes() {
                self.watch_attached_readers()?;
            }
            if self.queued.is_empty() && remaining.is_zero() {
                return Ok(None);
            }
        }

        Ok(self.queued.pop_front())
    }

    /// Queue presence changes; true when the set of readers changed
    fn collect_changes(&mut self) -> bool {
        let mut readers_changed = false;

        for state in &self.states {
            let event_state = state.event_state();
            if state.name() == pcsc::PNP_NOTIFICATION() {
                readers_changed = event_state.contains(State::CHANGED);
                continue;
            }

            let reader = state.name().to_string_lossy().into_owned();
            let now = card_present(event_state);
            let before = self.present.insert(reader.clone(), now).unwrap_or(false);
            trace!(%reader, ?event_state, "Status change");

            if now && !before {
                self.queued.push_back(CardEvent::Inserted {
                    reader,
                    atr: state.atr().to_vec(),
                });
            } else if before && !now {
                self.queued.push_back(CardEvent::Removed { reader });
            }
        }

        readers_changed
    }

    /// First insertion within `timeout`
    ///
    /// A card already present when watching starts counts as inserted.
    pub fn wait_for_card(&mut self, timeout: Duration) -> Result<Option<CardEvent>, PcscError> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.next_event(remaining)? {
                Some(CardEvent::Removed { reader }) => debug!("Card left {} while waiting", reader),
                inserted => return Ok(inserted),
            }
        }
    }
}

/// Align `states` with the attached `readers`
///
/// The PnP entry and entries of readers still attached keep their current
/// state, so a wait blocks until something changes again. Returns whether
/// the list changed.
pub(crate) fn sync_watch_list(states: &mut Vec<ReaderState>, readers: Vec<CString>) -> bool {
    let before = states.len();
    states.retain(|state| {
        state.name() == pcsc::PNP_NOTIFICATION()
            || readers.iter().any(|name| name.as_c_str() == state.name())
    });
    let mut changed = states.len() != before;

    for name in readers {
        if !states.iter().any(|state| state.name() == name.as_c_str()) {
            states.push(ReaderState::new(name, State::UNAWARE));
            changed = true;
        }
    }
    changed
}
