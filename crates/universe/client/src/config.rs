//! Client configuration

use std::time::Duration;

use universe_protocol::constants::{AID_PREFIX, AID_SUFFIX, SHORT_AID_THRESHOLD};

/// Default time to wait for a card to be presented
pub const DEFAULT_CARD_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for a client session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long to wait for a card when none is present
    pub card_timeout: Duration,

    /// Prefix prepended to short application ids
    pub aid_prefix: String,

    /// Suffix appended to short application ids
    pub aid_suffix: String,

    /// Identifiers shorter than this many characters are expanded
    pub short_aid_threshold: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            card_timeout: DEFAULT_CARD_TIMEOUT,
            aid_prefix: AID_PREFIX.to_string(),
            aid_suffix: AID_SUFFIX.to_string(),
            short_aid_threshold: SHORT_AID_THRESHOLD,
        }
    }
}

impl SessionConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card wait timeout
    pub const fn with_card_timeout(mut self, timeout: Duration) -> Self {
        self.card_timeout = timeout;
        self
    }

    /// Set the prefix and suffix used to expand short application ids
    pub fn with_aid_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.aid_prefix = prefix.into();
        self.aid_suffix = suffix.into();
        self
    }

    /// Set the length below which identifiers are expanded
    pub const fn with_short_aid_threshold(mut self, threshold: usize) -> Self {
        self.short_aid_threshold = threshold;
        self
    }
}
