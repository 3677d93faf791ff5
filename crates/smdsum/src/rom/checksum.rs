//! Sega Mega Drive ROM checksum calculation
//!
//! The checksum is the 16-bit wraparound sum of all big-endian words from
//! offset 0x200 to the end of the ROM. The header stores the expected value
//! at offset 0x18E.

use std::io::{Read, Seek};

use crate::common::RomResult;
use crate::rom::RomImage;

/// Offset where the checksummed data region starts, past the 512-byte header
pub const DATA_REGION_OFFSET: u64 = 0x200;

/// Compute the expected checksum of a ROM image
///
/// Sums consecutive non-overlapping big-endian words from offset 0x200 to
/// the end of the image and reduces the total to its low 16 bits. A trailing
/// odd byte belongs to no word and does not contribute to the sum.
///
/// # Returns
/// The 16-bit checksum value.
pub fn compute_checksum<S: Read + Seek>(image: &mut RomImage<S>) -> RomResult<u16> {
    let data = image.read_from(DATA_REGION_OFFSET, "data region")?;

    // Wrapping u32 arithmetic is exact for a result taken mod 2^16
    let mut sum: u32 = 0;
    for word in data.chunks_exact(2) {
        sum = sum.wrapping_add(u32::from(u16::from_be_bytes([word[0], word[1]])));
    }

    Ok((sum & 0xFFFF) as u16)
}
