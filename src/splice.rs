//! Byte splicing for segment-based containers (JPEG and friends).

use crate::error::SynthError;
use alloc::vec::Vec;

/// Length of the leading magic number kept in front of an injected segment.
pub const MAGIC_LEN: usize = 2;
/// JPEG COM (comment) marker.
pub const JPEG_COMMENT_MARKER: [u8; 2] = [0xFF, 0xFE];

/// A marker + big-endian length + payload record to splice into a host buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentInjection<'a> {
    pub target_offset: usize,
    pub marker: [u8; 2],
    pub payload: &'a [u8],
}

impl<'a> SegmentInjection<'a> {
    /// Segment placed directly after the 2-byte magic (e.g. after JPEG SOI).
    pub fn after_magic(marker: [u8; 2], payload: &'a [u8]) -> Self {
        Self {
            target_offset: MAGIC_LEN,
            marker,
            payload,
        }
    }

    /// Bytes the segment adds to the host: marker, length field, payload.
    pub fn encoded_len(&self) -> usize {
        4 + self.payload.len()
    }

    /// Value of the length field, which counts itself and the payload but not the marker.
    pub fn length_field(&self) -> Result<u16, SynthError> {
        self.payload
            .len()
            .checked_add(2)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or(SynthError::SegmentTooLarge {
                len: self.payload.len(),
            })
    }

    /// Build `host[..offset] + segment + host[offset..]` into a fresh buffer.
    pub fn apply(&self, host: &[u8]) -> Result<Vec<u8>, SynthError> {
        let needed = self.target_offset.max(MAGIC_LEN);
        if host.len() < needed {
            return Err(SynthError::HostTooSmall {
                needed,
                actual: host.len(),
            });
        }
        let length = self.length_field()?;
        let (head, tail) = host.split_at(self.target_offset);

        let mut out = Vec::with_capacity(host.len() + self.encoded_len());
        out.extend_from_slice(head);
        out.extend_from_slice(&self.marker);
        out.extend_from_slice(&length.to_be_bytes());
        out.extend_from_slice(self.payload);
        out.extend_from_slice(tail);
        Ok(out)
    }
}

/// Insert a comment-type segment right after the host's 2-byte magic.
///
/// Every host byte after the magic is preserved, shifted by `4 + payload.len()`.
pub fn insert_comment_segment(
    host: &[u8],
    marker: [u8; 2],
    payload: &[u8],
) -> Result<Vec<u8>, SynthError> {
    SegmentInjection::after_magic(marker, payload).apply(host)
}

/// Append `trailer` after the last byte of `host`.
pub fn append_trailer(mut host: Vec<u8>, trailer: &[u8]) -> Vec<u8> {
    host.extend_from_slice(trailer);
    host
}
