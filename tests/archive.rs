//! Archive writer: parse the three records back and check every cross-reference.

use enough::Unstoppable;
use zenhostile::zip::{
    CENTRAL_HEADER_LEN, CENTRAL_HEADER_SIG, END_OF_CENTRAL_DIR_LEN, END_OF_CENTRAL_DIR_SIG,
    LOCAL_HEADER_LEN, LOCAL_HEADER_SIG,
};
use zenhostile::*;

fn u16_at(b: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([b[off], b[off + 1]])
}

fn u32_at(b: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

/// What a strict reader sees after walking EOCD -> central header -> local header.
#[derive(Debug)]
struct Parsed<'a> {
    local_crc: u32,
    central_crc: u32,
    local_header_offset: u32,
    central_dir_offset: u32,
    central_dir_size: u32,
    entries_on_disk: u16,
    entries_total: u16,
    central_name: &'a [u8],
    local_name: &'a [u8],
    content: &'a [u8],
}

fn parse(zip: &[u8]) -> Parsed<'_> {
    let eocd = zip.len() - END_OF_CENTRAL_DIR_LEN;
    assert_eq!(u32_at(zip, eocd), END_OF_CENTRAL_DIR_SIG);
    assert_eq!(u16_at(zip, eocd + 20), 0, "comment length");
    let entries_on_disk = u16_at(zip, eocd + 8);
    let entries_total = u16_at(zip, eocd + 10);
    let central_dir_size = u32_at(zip, eocd + 12);
    let central_dir_offset = u32_at(zip, eocd + 16);

    let cd = central_dir_offset as usize;
    assert_eq!(u32_at(zip, cd), CENTRAL_HEADER_SIG);
    assert_eq!(u16_at(zip, cd + 10), 0, "stored method");
    let central_crc = u32_at(zip, cd + 16);
    assert_eq!(u32_at(zip, cd + 20), u32_at(zip, cd + 24), "stored sizes");
    let central_name_len = u16_at(zip, cd + 28) as usize;
    let local_header_offset = u32_at(zip, cd + 42);
    let central_name = &zip[cd + CENTRAL_HEADER_LEN..cd + CENTRAL_HEADER_LEN + central_name_len];
    assert_eq!(
        cd + CENTRAL_HEADER_LEN + central_name_len,
        eocd,
        "central directory ends at EOCD"
    );

    let lh = local_header_offset as usize;
    assert_eq!(u32_at(zip, lh), LOCAL_HEADER_SIG);
    assert_eq!(u16_at(zip, lh + 8), 0, "stored method");
    let local_crc = u32_at(zip, lh + 14);
    let size = u32_at(zip, lh + 18) as usize;
    assert_eq!(size, u32_at(zip, lh + 22) as usize);
    let name_len = u16_at(zip, lh + 26) as usize;
    let extra_len = u16_at(zip, lh + 28) as usize;
    let name_start = lh + LOCAL_HEADER_LEN;
    let data_start = name_start + name_len + extra_len;

    Parsed {
        local_crc,
        central_crc,
        local_header_offset,
        central_dir_offset,
        central_dir_size,
        entries_on_disk,
        entries_total,
        central_name,
        local_name: &zip[name_start..name_start + name_len],
        content: &zip[data_start..data_start + size],
    }
}

#[test]
fn zip_slip_entry_name_is_verbatim() {
    let zip = build_single_entry_archive(b"../../evil.txt", b"hi").unwrap();
    let p = parse(&zip);
    assert_eq!(p.local_name, b"../../evil.txt");
    assert_eq!(p.central_name, b"../../evil.txt");
    assert_eq!(p.content, b"hi");
    assert_eq!(p.local_crc, crc32(b"hi"));
    assert_eq!(p.central_crc, crc32(b"hi"));
    assert_eq!(p.local_header_offset, 0);
    assert_eq!(p.entries_on_disk, 1);
    assert_eq!(p.entries_total, 1);
    assert_eq!(p.central_dir_offset as usize, 30 + 14 + 2);
    assert_eq!(p.central_dir_size as usize, 46 + 14);
    assert_eq!(zip.len(), 30 + 14 + 2 + 46 + 14 + 22);
}

#[test]
fn absolute_and_non_utf8_names_pass_through() {
    for name in [
        &b"/etc/cron.d/evil"[..],
        b"C:\\Windows\\System32\\evil.dll",
        b"..\\..\\evil.txt",
        b"\xff\xfe\x00evil",
        b"",
    ] {
        let zip = build_single_entry_archive(name, b"payload").unwrap();
        let p = parse(&zip);
        assert_eq!(p.local_name, name);
        assert_eq!(p.central_name, name);
        assert_eq!(p.content, b"payload");
    }
}

#[test]
fn empty_content_has_zero_crc() {
    let zip = build_single_entry_archive(b"empty.txt", b"").unwrap();
    let p = parse(&zip);
    assert_eq!(p.local_crc, 0);
    assert!(p.content.is_empty());
}

#[test]
fn version_fields() {
    let zip = build_single_entry_archive(b"a", b"b").unwrap();
    assert_eq!(u16_at(&zip, 4), 0x000A);
    let cd = parse(&zip).central_dir_offset as usize;
    assert_eq!(u16_at(&zip, cd + 4), 0x0014);
    assert_eq!(u16_at(&zip, cd + 6), 0x000A);
}

#[test]
fn entry_builder_matches_free_function() {
    let a = ArchiveEntry::new(b"x/y.txt", b"content").build().unwrap();
    let b = build_single_entry_archive(b"x/y.txt", b"content").unwrap();
    assert_eq!(a, b);
}

#[test]
fn flat_expansion_is_stored_verbatim() {
    let zip = flat_expansion(64 * 1024, b'A', Unstoppable).unwrap();
    let p = parse(&zip);
    assert_eq!(p.local_name, b"heavy_file.txt");
    assert_eq!(p.content.len(), 64 * 1024);
    assert!(p.content.iter().all(|&b| b == b'A'));
    assert_eq!(p.local_crc, crc32(&vec![b'A'; 64 * 1024]));
    // no compression: archive is content plus fixed overhead
    assert_eq!(zip.len(), 64 * 1024 + 30 + 46 + 22 + 2 * 14);
}

#[test]
fn oversized_name_is_an_error() {
    let name = vec![b'A'; 70_000];
    assert!(matches!(
        build_single_entry_archive(&name, b""),
        Err(SynthError::LimitExceeded(_))
    ));
}
