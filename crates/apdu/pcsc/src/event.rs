/// Change of card presence in a reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    /// A card arrived
    Inserted {
        /// Reader holding the card
        reader: String,
        /// Answer to reset
        atr: Vec<u8>,
    },
    /// The card left
    Removed {
        /// Reader that held the card
        reader: String,
    },
}

impl CardEvent {
    /// Reader the event happened on
    pub fn reader(&self) -> &str {
        match self {
            Self::Inserted { reader, .. } | Self::Removed { reader } => reader,
        }
    }
}
