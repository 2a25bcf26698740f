#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;

    let archive = "fuzz/corpus/fuzz_archive";
    fs::create_dir_all(archive).unwrap();
    // [name length][name][content]
    fs::write(format!("{archive}/zip_slip.bin"), b"\x0e../../evil.txthi").unwrap();
    fs::write(format!("{archive}/empty_name.bin"), b"\x00content").unwrap();
    fs::write(format!("{archive}/empty.bin"), b"").unwrap();

    let splice = "fuzz/corpus/fuzz_splice";
    fs::create_dir_all(splice).unwrap();
    // [host length][host][payload]
    let mut jpeg = vec![4u8, 0xFF, 0xD8, 0xFF, 0xD9];
    jpeg.extend_from_slice(b"<script>alert(1)</script>");
    fs::write(format!("{splice}/jpeg_soi_eoi.bin"), jpeg).unwrap();
    fs::write(format!("{splice}/one_byte_host.bin"), b"\x01\xff").unwrap();

    // Minimal BMP 1x1 24-bit as a splice host
    let mut bmp = vec![0u8; 59];
    bmp[0] = 58; // host length
    bmp[1] = b'B'; bmp[2] = b'M';
    bmp[3..7].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[11..15].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[15..19].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[19..23].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[23..27].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[27..29].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[29..31].copy_from_slice(&24u16.to_le_bytes()); // bpp
    fs::write(format!("{splice}/bmp_1x1.bin"), bmp).unwrap();

    let synth = "fuzz/corpus/fuzz_synthesize";
    fs::create_dir_all(synth).unwrap();
    for variant in 0u8..4 {
        fs::write(format!("{synth}/family_{variant}.bin"), [variant; 64]).unwrap();
    }

    println!("Generated seed corpora under fuzz/corpus/");
}
