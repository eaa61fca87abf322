//! Connection options

use pcsc::{Protocols, ShareMode};

/// How [`PcscTransport`](crate::PcscTransport) connects to a card
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// Sharing with other applications, shared by default
    pub share_mode: ShareMode,
    /// Acceptable protocols, T=0 or T=1 by default
    pub protocols: Protocols,
    /// Reconnect and retry once when another application resets the card
    pub reconnect_on_reset: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            share_mode: ShareMode::Shared,
            protocols: Protocols::ANY,
            reconnect_on_reset: true,
        }
    }
}

impl ConnectOptions {
    /// Claim the card for this process only
    pub fn exclusive(self) -> Self {
        Self {
            share_mode: ShareMode::Exclusive,
            ..self
        }
    }

    /// Surface card resets as errors instead of reconnecting
    pub fn without_reconnect(self) -> Self {
        Self {
            reconnect_on_reset: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConnectOptions::default();
        assert!(matches!(options.share_mode, ShareMode::Shared));
        assert_eq!(options.protocols, Protocols::ANY);
        assert!(options.reconnect_on_reset);
    }

    #[test]
    fn test_adjustments() {
        let options = ConnectOptions::default().exclusive().without_reconnect();
        assert!(matches!(options.share_mode, ShareMode::Exclusive));
        assert!(!options.reconnect_on_reset);
    }
}
