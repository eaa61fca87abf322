use core::fmt;

/// SW1-SW2 trailer of a response APDU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// First status byte
    pub sw1: u8,
    /// Second status byte
    pub sw2: u8,
}

impl StatusWord {
    /// Normal processing
    pub const SUCCESS: Self = Self::new(0x90, 0x00);
    /// Memory failure, e.g. a failed persistent write
    pub const MEMORY_FAILURE: Self = Self::new(0x65, 0x81);
    /// Wrong length
    pub const WRONG_LENGTH: Self = Self::new(0x67, 0x00);
    /// Command not allowed in the current state
    pub const COMMAND_NOT_ALLOWED: Self = Self::new(0x69, 0x86);
    /// File or application not found
    pub const FILE_NOT_FOUND: Self = Self::new(0x6A, 0x82);
    /// Instruction code not supported
    pub const INS_NOT_SUPPORTED: Self = Self::new(0x6D, 0x00);
    /// Class not supported
    pub const CLASS_NOT_SUPPORTED: Self = Self::new(0x6E, 0x00);

    /// Status word from its two bytes
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// Status word from its big-endian value
    pub const fn from_u16(value: u16) -> Self {
        let [sw1, sw2] = value.to_be_bytes();
        Self::new(sw1, sw2)
    }

    /// Big-endian value
    pub const fn to_u16(self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }

    /// 9000
    pub const fn is_success(self) -> bool {
        self.sw1 == 0x90 && self.sw2 == 0x00
    }

    /// 6A82
    pub const fn is_file_not_found(self) -> bool {
        self.sw1 == 0x6A && self.sw2 == 0x82
    }
}

impl From<u16> for StatusWord {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl From<StatusWord> for u16 {
    fn from(status: StatusWord) -> Self {
        status.to_u16()
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.to_u16())
    }
}

impl fmt::LowerHex for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.to_u16())
    }
}
