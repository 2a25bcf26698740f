//! Record writers. All multi-byte fields are little-endian.

use super::{
    ArchiveEntry, CENTRAL_HEADER_LEN, CENTRAL_HEADER_SIG, END_OF_CENTRAL_DIR_SIG,
    LOCAL_HEADER_LEN, LOCAL_HEADER_SIG, METHOD_STORED, VERSION_MADE_BY, VERSION_NEEDED,
    archive_len,
};
use crate::crc::crc32;
use crate::error::SynthError;
use alloc::vec::Vec;
use tracing::trace;

/// Field values and offsets for one entry, computed before any byte is written.
pub(super) struct Layout {
    name_len: u16,
    content_len: u32,
    crc: u32,
    local_header_offset: u32,
    central_dir_offset: u32,
    central_dir_size: u32,
    total_len: usize,
}

impl Layout {
    pub(super) fn for_entry(entry: &ArchiveEntry<'_>) -> Result<Self, SynthError> {
        let name_len = u16::try_from(entry.filename.len()).map_err(|_| {
            SynthError::LimitExceeded(alloc::format!(
                "entry name of {} bytes exceeds the 16-bit name length field",
                entry.filename.len()
            ))
        })?;
        let content_len = u32::try_from(entry.content.len()).map_err(|_| {
            SynthError::LimitExceeded(alloc::format!(
                "content of {} bytes exceeds the 32-bit size field",
                entry.content.len()
            ))
        })?;

        let local_len = LOCAL_HEADER_LEN + entry.filename.len() + entry.content.len();
        let central_len = CENTRAL_HEADER_LEN + entry.filename.len();
        let central_dir_offset = u32::try_from(local_len).map_err(|_| {
            SynthError::LimitExceeded(alloc::format!(
                "central directory offset {local_len} exceeds the 32-bit offset field"
            ))
        })?;

        Ok(Self {
            name_len,
            content_len,
            crc: crc32(entry.content),
            local_header_offset: 0,
            central_dir_offset,
            central_dir_size: central_len as u32,
            total_len: archive_len(entry.filename.len(), entry.content.len()),
        })
    }
}

pub(super) fn write_archive(entry: &ArchiveEntry<'_>, layout: &Layout) -> Vec<u8> {
    let mut out = Vec::with_capacity(layout.total_len);

    write_local_header(&mut out, layout);
    out.extend_from_slice(entry.filename);
    out.extend_from_slice(entry.content);

    debug_assert_eq!(out.len(), layout.central_dir_offset as usize);
    trace!(offset = out.len(), "central directory");
    write_central_header(&mut out, layout);
    out.extend_from_slice(entry.filename);

    debug_assert_eq!(
        out.len() - layout.central_dir_offset as usize,
        layout.central_dir_size as usize
    );
    trace!(offset = out.len(), "end of central directory");
    write_end_record(&mut out, layout);

    debug_assert_eq!(out.len(), layout.total_len);
    out
}

fn write_local_header(out: &mut Vec<u8>, layout: &Layout) {
    out.extend_from_slice(&LOCAL_HEADER_SIG.to_le_bytes());
    out.extend_from_slice(&VERSION_NEEDED.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // flags
    out.extend_from_slice(&METHOD_STORED.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // mod time
    out.extend_from_slice(&0u16.to_le_bytes()); // mod date
    out.extend_from_slice(&layout.crc.to_le_bytes());
    out.extend_from_slice(&layout.content_len.to_le_bytes()); // compressed
    out.extend_from_slice(&layout.content_len.to_le_bytes()); // uncompressed
    out.extend_from_slice(&layout.name_len.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // extra field length
}

fn write_central_header(out: &mut Vec<u8>, layout: &Layout) {
    out.extend_from_slice(&CENTRAL_HEADER_SIG.to_le_bytes());
    out.extend_from_slice(&VERSION_MADE_BY.to_le_bytes());
    out.extend_from_slice(&VERSION_NEEDED.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // flags
    out.extend_from_slice(&METHOD_STORED.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // mod time
    out.extend_from_slice(&0u16.to_le_bytes()); // mod date
    out.extend_from_slice(&layout.crc.to_le_bytes());
    out.extend_from_slice(&layout.content_len.to_le_bytes()); // compressed
    out.extend_from_slice(&layout.content_len.to_le_bytes()); // uncompressed
    out.extend_from_slice(&layout.name_len.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // extra field length
    out.extend_from_slice(&0u16.to_le_bytes()); // comment length
    out.extend_from_slice(&0u16.to_le_bytes()); // disk number start
    out.extend_from_slice(&0u16.to_le_bytes()); // internal attributes
    out.extend_from_slice(&0u32.to_le_bytes()); // external attributes
    out.extend_from_slice(&layout.local_header_offset.to_le_bytes());
}

fn write_end_record(out: &mut Vec<u8>, layout: &Layout) {
    out.extend_from_slice(&END_OF_CENTRAL_DIR_SIG.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // this disk
    out.extend_from_slice(&0u16.to_le_bytes()); // disk with central directory
    out.extend_from_slice(&1u16.to_le_bytes()); // entries on this disk
    out.extend_from_slice(&1u16.to_le_bytes()); // entries total
    out.extend_from_slice(&layout.central_dir_size.to_le_bytes());
    out.extend_from_slice(&layout.central_dir_offset.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // comment length
}
