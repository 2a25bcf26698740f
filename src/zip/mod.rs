//! Hand-assembled single-entry ZIP archives (stored method only).
//!
//! Entry names are written verbatim: absolute paths, `..` segments and
//! non-UTF-8 bytes reach the archive unchanged. Record offsets and sizes are
//! always computed from the bytes actually emitted.

mod write;

use crate::error::SynthError;
use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

pub const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
pub const CENTRAL_HEADER_SIG: u32 = 0x0201_4b50;
pub const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;

/// Fixed part of the local file header.
pub const LOCAL_HEADER_LEN: usize = 30;
/// Fixed part of the central directory file header.
pub const CENTRAL_HEADER_LEN: usize = 46;
/// End of central directory record without comment.
pub const END_OF_CENTRAL_DIR_LEN: usize = 22;

/// Version needed to extract: 1.0 (stored).
pub const VERSION_NEEDED: u16 = 0x000A;
/// Version made by: 2.0, MS-DOS attribute compatibility.
pub const VERSION_MADE_BY: u16 = 0x0014;
/// Compression method 0 (stored).
pub const METHOD_STORED: u16 = 0;

/// Entry name used for the path-escape archive.
pub const ZIP_SLIP_NAME: &str = "../../evil.txt";
/// Content of the path-escape entry when no label text is given.
pub const ZIP_SLIP_DEFAULT_CONTENT: &str = "You have been ZipSlipped!";
/// Entry name used for the flat-expansion archive.
pub const FLAT_EXPANSION_NAME: &str = "heavy_file.txt";

/// The single member of an archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchiveEntry<'a> {
    /// Stored name, unsanitized.
    pub filename: &'a [u8],
    pub content: &'a [u8],
}

impl<'a> ArchiveEntry<'a> {
    pub fn new(filename: &'a [u8], content: &'a [u8]) -> Self {
        Self { filename, content }
    }

    /// Serialize as a complete archive: local header, central header, end record.
    pub fn build(&self) -> Result<Vec<u8>, SynthError> {
        let layout = write::Layout::for_entry(self)?;
        Ok(write::write_archive(self, &layout))
    }
}

/// Exact length of a single-entry stored archive, computed without building it.
pub fn archive_len(name_len: usize, content_len: usize) -> usize {
    (LOCAL_HEADER_LEN + CENTRAL_HEADER_LEN + END_OF_CENTRAL_DIR_LEN)
        .saturating_add(name_len.saturating_mul(2))
        .saturating_add(content_len)
}

/// Build a one-entry stored ZIP from a raw filename and content.
pub fn build_single_entry_archive(filename: &[u8], content: &[u8]) -> Result<Vec<u8>, SynthError> {
    ArchiveEntry::new(filename, content).build()
}

/// Stored archive holding `len` copies of `fill` under [`FLAT_EXPANSION_NAME`].
///
/// There is no deflate step, so the archive is as large as its content. It
/// stands in for a decompression bomb when testing disk and memory limits; it
/// is not a high-ratio bomb.
pub fn flat_expansion(len: usize, fill: u8, stop: impl Stop) -> Result<Vec<u8>, SynthError> {
    flat_expansion_with(len, fill, &stop)
}

pub(crate) fn flat_expansion_with(
    len: usize,
    fill: u8,
    stop: &dyn Stop,
) -> Result<Vec<u8>, SynthError> {
    stop.check()?;
    let content = vec![fill; len];
    stop.check()?;
    build_single_entry_archive(FLAT_EXPANSION_NAME.as_bytes(), &content)
}
