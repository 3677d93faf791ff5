//! Sega Mega Drive/Genesis ROM image access
//!
//! A ROM image is a single randomly addressable byte sequence. This module
//! provides:
//! - The byte-store abstraction (`RomImage`) over a file or in-memory buffer
//! - Header inspection: console-name validation and the stored checksum word
//! - The checksum calculation over the data region

mod checksum;
mod header;
mod image;

pub use checksum::{DATA_REGION_OFFSET, compute_checksum};
pub use header::{
    CHECKSUM_OFFSET, CONSOLE_NAME_LEN, CONSOLE_NAME_OFFSET, CONSOLE_NAMES, read_checksum,
    validate_console_name, write_checksum,
};
pub use image::RomImage;
