//! Property tests for the byte-level invariants of each writer.

use enough::Unstoppable;
use proptest::prelude::*;
use rgb::RGB8;
use zenhostile::*;

fn le_u32(b: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

fn color() -> impl Strategy<Value = RGB8> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| RGB8 { r, g, b })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bitmap_length_and_padding(w in 1i32..64, h in 1i32..16, c in color()) {
        let bmp = encode_bitmap(w, h, c, Unstoppable).unwrap();
        let stride = ((24 * w as usize) + 31) / 32 * 4;
        prop_assert_eq!(bmp.len(), 54 + stride * h as usize);
        prop_assert_eq!(stride % 4, 0);
        prop_assert_eq!(le_u32(&bmp, 2) as usize, bmp.len());
        prop_assert_eq!(le_u32(&bmp, 34) as usize, stride * h as usize);
        // every row starts with the same BGR triple
        for row in 0..h as usize {
            let at = 54 + row * stride;
            prop_assert_eq!(&bmp[at..at + 3], &[c.b, c.g, c.r]);
        }
    }

    #[test]
    fn spoof_touches_only_dimension_fields(
        w in 1i32..32,
        h in 1i32..32,
        fw in any::<i32>(),
        fh in any::<i32>(),
    ) {
        let bmp = encode_bitmap(w, h, RGB8 { r: 1, g: 2, b: 3 }, Unstoppable).unwrap();
        let spoofed = spoof_dimensions(bmp.clone(), fw, fh).unwrap();
        prop_assert_eq!(spoofed.len(), bmp.len());
        prop_assert_eq!(&spoofed[18..22], &fw.to_le_bytes());
        prop_assert_eq!(&spoofed[22..26], &fh.to_le_bytes());
        prop_assert_eq!(&spoofed[..18], &bmp[..18]);
        prop_assert_eq!(&spoofed[26..], &bmp[26..]);
    }

    #[test]
    fn comment_segment_shifts_host_tail(
        tail in proptest::collection::vec(any::<u8>(), 0..256),
        payload in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut host = vec![0xFF, 0xD8];
        host.extend_from_slice(&tail);
        let out = insert_comment_segment(&host, [0xFF, 0xFE], &payload).unwrap();
        prop_assert_eq!(out.len(), host.len() + 4 + payload.len());
        prop_assert_eq!(&out[..2], &host[..2]);
        let declared = u16::from_be_bytes([out[4], out[5]]) as usize;
        prop_assert_eq!(declared, payload.len() + 2);
        prop_assert_eq!(&out[6..6 + payload.len()], &payload[..]);
        prop_assert_eq!(&out[6 + payload.len()..], &host[2..]);
    }

    #[test]
    fn trailer_is_a_suffix(
        host in proptest::collection::vec(any::<u8>(), 0..256),
        trailer in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let out = append_trailer(host.clone(), &trailer);
        prop_assert!(out.starts_with(&host));
        prop_assert!(out.ends_with(&trailer));
        prop_assert_eq!(out.len(), host.len() + trailer.len());
    }

    #[test]
    fn truncation_is_a_prefix(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        fraction in 0.0f64..=1.0,
    ) {
        let out = anomaly::truncate(&data, fraction).unwrap();
        prop_assert!(data.starts_with(&out));
        prop_assert_eq!(out.len(), (data.len() as f64 * fraction) as usize);
    }

    #[test]
    fn archive_offsets_agree(
        name in proptest::collection::vec(any::<u8>(), 0..128),
        content in proptest::collection::vec(any::<u8>(), 0..1024),
    ) {
        let zip = build_single_entry_archive(&name, &content).unwrap();
        let cd_offset = 30 + name.len() + content.len();
        let eocd = zip.len() - 22;
        prop_assert_eq!(eocd, cd_offset + 46 + name.len());
        prop_assert_eq!(le_u32(&zip, eocd + 16) as usize, cd_offset);
        prop_assert_eq!(le_u32(&zip, eocd + 12) as usize, 46 + name.len());
        prop_assert_eq!(le_u32(&zip, 14), crc32(&content));
        prop_assert_eq!(le_u32(&zip, cd_offset + 16), crc32(&content));
        prop_assert_eq!(le_u32(&zip, cd_offset + 42), 0);
    }

    #[test]
    fn streaming_crc_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(data.len() + 1);
        let (a, b) = data.split_at(at);
        let streamed = Crc32::new().update(a).update(b).finalize();
        prop_assert_eq!(streamed, crc32(&data));
    }

    #[test]
    fn polyglot_tail_carries_script(script in "[a-zA-Z0-9();. ]{0,64}") {
        let gif = build_polyglot(&script);
        prop_assert!(gif.starts_with(b"GIF89a/*"));
        let tail = format!("*/=1; {script};");
        prop_assert!(gif.ends_with(tail.as_bytes()));
    }
}
