//! Verification and repair pipeline
//!
//! Sequences the header and checksum operations over one ROM image:
//! validate the console name, compare the stored checksum against the
//! computed one, and optionally patch the header in place. The repair
//! decision is a caller-supplied function, so the pipeline runs the same
//! whether the caller is an interactive prompt or a `--yes` flag.

use std::io::{Read, Seek, Write};

use crate::common::{RomError, RomResult};
use crate::rom::{self, RomImage};

/// Result of a full verification pass over a ROM image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stored and computed checksums agree
    Match { checksum: u16 },
    /// Checksums disagree and the caller declined the repair
    Declined { stored: u16, computed: u16 },
    /// Checksums disagreed; the header was rewritten and reread as the new value
    Repaired { old: u16, new: u16 },
}

/// Verify a ROM image and optionally repair a mismatched header checksum
///
/// `should_repair` is consulted exactly once, with `(stored, computed)`,
/// when the checksums disagree; returning `true` patches the header in
/// place and rereads it to confirm the write landed.
///
/// A console-name field that decodes but matches neither known console, or
/// that is not text at all, reports as `InvalidMagic` — checksum logic
/// never runs over a file that fails the gate.
pub fn run<S, F>(image: &mut RomImage<S>, should_repair: F) -> RomResult<Outcome>
where
    S: Read + Write + Seek,
    F: FnOnce(u16, u16) -> bool,
{
    match rom::validate_console_name(image) {
        Ok(true) => {}
        Ok(false) | Err(RomError::Decode(_)) => return Err(RomError::InvalidMagic),
        Err(e) => return Err(e),
    }

    let stored = rom::read_checksum(image)?;
    let computed = rom::compute_checksum(image)?;

    if stored == computed {
        return Ok(Outcome::Match { checksum: stored });
    }
    if !should_repair(stored, computed) {
        return Ok(Outcome::Declined { stored, computed });
    }

    repair(image, computed)?;
    Ok(Outcome::Repaired {
        old: stored,
        new: computed,
    })
}

/// Write `value` into the header checksum field and confirm it landed
///
/// The reread must return exactly the written value; anything else is a
/// `VerificationMismatch` — the store accepted the write call but did not
/// persist it. Never retried: the file may be in an inconsistent state and a
/// second blind write would only mask that.
pub fn repair<S: Read + Write + Seek>(image: &mut RomImage<S>, value: u16) -> RomResult<()> {
    rom::write_checksum(image, value)?;
    let reread = rom::read_checksum(image)?;
    if reread != value {
        return Err(RomError::VerificationMismatch {
            written: value,
            reread,
        });
    }
    Ok(())
}
