//! Byte-store abstraction over a ROM image
//!
//! All header and checksum operations go through `RomImage`, which owns the
//! underlying store, knows the image size, and bounds-checks every access so
//! a short file surfaces as a truncation error instead of a bare IO failure.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::common::{RomError, RomResult};

/// An open ROM image with a known size
///
/// The store is any seekable byte sequence: an open file on disk, or a
/// `Cursor<Vec<u8>>` in tests. The image never grows or shrinks; the size is
/// captured once when the image is opened.
#[derive(Debug)]
pub struct RomImage<S> {
    store: S,
    size: u64,
}

impl RomImage<File> {
    /// Open a ROM file for reading and writing
    ///
    /// One handle serves both the verification reads and the optional repair
    /// write; it is closed when the image is dropped.
    pub fn open(path: &Path) -> RomResult<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Self::new(file)
    }
}

impl<S: Seek> RomImage<S> {
    /// Wrap an already open byte store
    pub fn new(mut store: S) -> RomResult<Self> {
        let size = store.seek(SeekFrom::End(0))?;
        Ok(Self { store, size })
    }

    /// Total size of the image in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Consume the image and return the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    fn require(&self, needed: u64, what: &'static str) -> RomResult<()> {
        if self.size < needed {
            return Err(RomError::truncated(what, needed, self.size));
        }
        Ok(())
    }
}

impl<S: Read + Seek> RomImage<S> {
    /// Read exactly `buf.len()` bytes starting at `offset`
    pub fn read_exact_at(
        &mut self,
        offset: u64,
        buf: &mut [u8],
        what: &'static str,
    ) -> RomResult<()> {
        self.require(offset + buf.len() as u64, what)?;
        self.store.seek(SeekFrom::Start(offset))?;
        self.store.read_exact(buf)?;
        Ok(())
    }

    /// Read a big-endian word at `offset`
    pub fn read_word(&mut self, offset: u64, what: &'static str) -> RomResult<u16> {
        let mut buf = [0u8; 2];
        self.read_exact_at(offset, &mut buf, what)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read all bytes from `offset` to the end of the image
    pub fn read_from(&mut self, offset: u64, what: &'static str) -> RomResult<Vec<u8>> {
        self.require(offset, what)?;
        self.store.seek(SeekFrom::Start(offset))?;
        let mut data = Vec::with_capacity((self.size - offset) as usize);
        self.store.read_to_end(&mut data)?;
        Ok(data)
    }
}

impl<S: Read + Write + Seek> RomImage<S> {
    /// Write a big-endian word at `offset`, replacing exactly two bytes
    ///
    /// The offset is bounds-checked against the existing size, so the image
    /// length cannot change. The store is flushed before returning; a write
    /// or flush rejected by the storage layer surfaces as `WriteRejected`.
    pub fn write_word(&mut self, offset: u64, value: u16, what: &'static str) -> RomResult<()> {
        self.require(offset + 2, what)?;
        self.store.seek(SeekFrom::Start(offset))?;
        self.store
            .write_all(&value.to_be_bytes())
            .and_then(|()| self.store.flush())
            .map_err(RomError::WriteRejected)?;
        Ok(())
    }
}
