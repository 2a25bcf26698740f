#![no_main]
use libfuzzer_sys::fuzz_target;
use zenhostile::*;

fn u32_at(b: &[u8], off: usize) -> usize {
    u32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]]) as usize
}

fuzz_target!(|data: &[u8]| {
    // First byte picks the split between entry name and content
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (name, content) = rest.split_at((split as usize).min(rest.len()));

    let zip = build_single_entry_archive(name, content).expect("small inputs always fit");
    let eocd = zip.len() - 22;
    let cd = u32_at(&zip, eocd + 16);
    assert_eq!(cd, 30 + name.len() + content.len());
    assert_eq!(u32_at(&zip, eocd + 12), 46 + name.len());
    assert_eq!(&zip[30..30 + name.len()], name);
    assert_eq!(&zip[30 + name.len()..cd], content);
    assert_eq!(u32_at(&zip, 14) as u32, crc32(content));
    assert_eq!(u32_at(&zip, cd + 16) as u32, crc32(content));
});
