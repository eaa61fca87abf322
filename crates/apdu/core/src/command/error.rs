use thiserror::Error;

/// Command bytes that do not form a short APDU
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Fewer than the four header bytes
    #[error("Command too short: {0} byte(s)")]
    TooShort(usize),

    /// Body length disagrees with Lc
    #[error("Lc announces {lc} data byte(s) but {remaining} byte(s) follow")]
    LengthMismatch {
        /// Value of the Lc byte
        lc: usize,
        /// Bytes after Lc
        remaining: usize,
    },
}
