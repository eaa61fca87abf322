use pcsc::{ReaderState, State};

/// Snapshot of a reader and its card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcscReader {
    name: String,
    atr: Option<Vec<u8>>,
}

impl PcscReader {
    /// Reader `name`, holding a card with `atr` if any
    pub const fn new(name: String, atr: Option<Vec<u8>>) -> Self {
        Self { name, atr }
    }

    pub(crate) fn from_state(state: &ReaderState) -> Self {
        Self {
            name: state.name().to_string_lossy().into_owned(),
            atr: card_present(state.event_state()).then(|| state.atr().to_vec()),
        }
    }

    /// Name the PC/SC service knows the reader by
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a card sits in the reader
    pub const fn has_card(&self) -> bool {
        self.atr.is_some()
    }

    /// Answer to reset of the card
    pub fn atr(&self) -> Option<&[u8]> {
        self.atr.as_deref()
    }
}

pub(crate) fn card_present(state: State) -> bool {
    state.contains(State::PRESENT) && !state.contains(State::EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_present() {
        assert!(card_present(State::PRESENT | State::CHANGED));
        assert!(card_present(State::PRESENT | State::INUSE));
        assert!(!card_present(State::EMPTY | State::CHANGED));
        assert!(!card_present(State::PRESENT | State::EMPTY));
        assert!(!card_present(State::UNAWARE));
    }

    #[test]
    fn test_card_follows_atr() {
        let reader = PcscReader::new("ACS ACR122U 00 00".into(), Some(vec![0x3B, 0x80]));
        assert_eq!(reader.name(), "ACS ACR122U 00 00");
        assert!(reader.has_card());
        assert_eq!(reader.atr(), Some(&[0x3B, 0x80][..]));

        assert!(!PcscReader::new("Empty".into(), None).has_card());
    }
}
