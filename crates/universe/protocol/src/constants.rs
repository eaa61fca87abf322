//! Constants shared by the applet and its clients

/// Command class used by every Hello Universe command
pub const CLA: u8 = 0x00;

/// Instruction codes
pub mod ins {
    /// No operation, only counts the access
    pub const NOOP: u8 = 0x00;
    /// Return the greeting
    pub const GREET: u8 = 0x10;
    /// Read the access counter
    pub const READ_COUNTER: u8 = 0x20;
    /// Overwrite the access counter
    pub const WRITE_COUNTER: u8 = 0x21;
    /// ISO 7816-4 SELECT
    pub const SELECT: u8 = 0xA4;
}

/// P1 of SELECT when selecting by DF name (AID)
pub const SELECT_BY_NAME: u8 = 0x04;

/// Payload of a successful greet
pub const GREETING: &[u8] = b"Hello Universe!";

/// Highest value the access counter reaches through increments
pub const MAX_COUNTER: u16 = i16::MAX as u16;

/// Vendor prefix prepended to short application identifiers
pub const AID_PREFIX: &str = "A00000061700";

/// Suffix appended to short application identifiers
pub const AID_SUFFIX: &str = "01";

/// Identifiers with fewer characters than this are expanded
pub const SHORT_AID_THRESHOLD: usize = 9;

/// Shortest AID accepted by ISO 7816-5
pub const AID_MIN_LEN: usize = 5;

/// Longest AID accepted by ISO 7816-5
pub const AID_MAX_LEN: usize = 16;
