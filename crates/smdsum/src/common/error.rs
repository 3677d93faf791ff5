//! Error types for ROM inspection and repair

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Error raised while inspecting or repairing a ROM image
#[derive(Error, Debug)]
pub enum RomError {
    #[error("file too short to read {what}: need {needed:#X} bytes, file is {actual:#X}")]
    Truncated {
        what: &'static str,
        needed: u64,
        actual: u64,
    },

    #[error("console name bytes are not valid text")]
    Decode(#[from] Utf8Error),

    #[error("not a Genesis or Mega Drive ROM image")]
    InvalidMagic,

    #[error("checksum write rejected by storage")]
    WriteRejected(#[source] io::Error),

    #[error("checksum write did not take effect: wrote {written:#06X}, header reads back {reread:#06X}")]
    VerificationMismatch { written: u16, reread: u16 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RomError {
    pub fn truncated(what: &'static str, needed: u64, actual: u64) -> Self {
        Self::Truncated {
            what,
            needed,
            actual,
        }
    }
}

pub type RomResult<T> = Result<T, RomError>;
