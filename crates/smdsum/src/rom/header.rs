//! Sega Mega Drive/Genesis ROM header inspection
//!
//! The ROM header occupies bytes 0x100-0x1FF and identifies the console in
//! its first 16 bytes. The stored checksum word lives at offset 0x18E.

use std::io::{Read, Seek, Write};
use std::str;

use crate::common::RomResult;
use crate::rom::RomImage;

/// Offset of the 16-byte console name field
pub const CONSOLE_NAME_OFFSET: u64 = 0x100;

/// Length of the console name field in bytes
pub const CONSOLE_NAME_LEN: usize = 16;

/// Offset of the stored checksum word (big-endian)
pub const CHECKSUM_OFFSET: u64 = 0x18E;

/// Console names a valid ROM may carry, padded to the full field width
///
/// The field is compared byte-for-byte, padding included. Hardware writes
/// the padded form, so trimming would accept ROMs a real console rejects.
pub const CONSOLE_NAMES: [&str; 2] = ["SEGA MEGA DRIVE ", "SEGA GENESIS    "];

/// Validate the console name in the ROM header
///
/// Reads the 16-byte window at offset 0x100 and decodes it as text.
///
/// # Returns
/// `true` iff the decoded field equals one of [`CONSOLE_NAMES`] exactly.
/// Fails with `Truncated` if the file ends before 0x110, or `Decode` if the
/// window is not valid text.
pub fn validate_console_name<S: Read + Seek>(image: &mut RomImage<S>) -> RomResult<bool> {
    let mut field = [0u8; CONSOLE_NAME_LEN];
    image.read_exact_at(CONSOLE_NAME_OFFSET, &mut field, "console name")?;
    let name = str::from_utf8(&field)?;
    Ok(CONSOLE_NAMES.contains(&name))
}

/// Read the checksum stored in the ROM header
///
/// # Returns
/// The big-endian word at offset 0x18E.
pub fn read_checksum<S: Read + Seek>(image: &mut RomImage<S>) -> RomResult<u16> {
    image.read_word(CHECKSUM_OFFSET, "header checksum")
}

/// Write `value` into the header checksum field
///
/// Replaces exactly the two bytes at 0x18E-0x18F (big-endian); the image
/// length is unchanged.
pub fn write_checksum<S: Read + Write + Seek>(
    image: &mut RomImage<S>,
    value: u16,
) -> RomResult<()> {
    image.write_word(CHECKSUM_OFFSET, value, "header checksum")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RomError;
    use std::io::Cursor;

    fn image_with_name(name: &[u8]) -> RomImage<Cursor<Vec<u8>>> {
        let mut data = vec![0u8; 0x200];
        data[0x100..0x100 + name.len()].copy_from_slice(name);
        RomImage::new(Cursor::new(data)).unwrap()
    }

    #[test]
    fn test_validate_mega_drive() {
        let mut image = image_with_name(b"SEGA MEGA DRIVE ");
        assert!(validate_console_name(&mut image).unwrap());
    }

    #[test]
    fn test_validate_genesis() {
        let mut image = image_with_name(b"SEGA GENESIS    ");
        assert!(validate_console_name(&mut image).unwrap());
    }

    #[test]
    fn test_validate_rejects_unpadded_name() {
        // Correct text but wrong trailing bytes must not pass
        let mut image = image_with_name(b"SEGA GENESIS\0\0\0\0");
        assert!(!validate_console_name(&mut image).unwrap());
    }

    #[test]
    fn test_validate_rejects_other_console() {
        let mut image = image_with_name(b"SEGA 32X        ");
        assert!(!validate_console_name(&mut image).unwrap());
    }

    #[test]
    fn test_validate_non_text_field() {
        let mut image = image_with_name(&[0xFF; 16]);
        assert!(matches!(
            validate_console_name(&mut image),
            Err(RomError::Decode(_))
        ));
    }

    #[test]
    fn test_validate_truncated_file() {
        let mut image = RomImage::new(Cursor::new(vec![0u8; 0x50])).unwrap();
        let err = validate_console_name(&mut image).unwrap_err();
        match err {
            RomError::Truncated { needed, actual, .. } => {
                assert_eq!(needed, 0x110);
                assert_eq!(actual, 0x50);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_read_checksum_big_endian() {
        let mut data = vec![0u8; 0x200];
        data[0x18E] = 0x12;
        data[0x18F] = 0x34;
        let mut image = RomImage::new(Cursor::new(data)).unwrap();
        assert_eq!(read_checksum(&mut image).unwrap(), 0x1234);
    }

    #[test]
    fn test_checksum_round_trip() {
        let mut image = RomImage::new(Cursor::new(vec![0u8; 0x200])).unwrap();
        for value in [0x0000, 0x0001, 0x8000, 0xBEEF, 0xFFFF] {
            write_checksum(&mut image, value).unwrap();
            assert_eq!(read_checksum(&mut image).unwrap(), value);
        }
    }

    #[test]
    fn test_read_checksum_requires_full_field() {
        let mut image = RomImage::new(Cursor::new(vec![0u8; 0x18F])).unwrap();
        assert!(matches!(
            read_checksum(&mut image),
            Err(RomError::Truncated { needed: 0x190, .. })
        ));
    }
}
