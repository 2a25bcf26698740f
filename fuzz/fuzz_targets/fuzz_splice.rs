#![no_main]
use libfuzzer_sys::fuzz_target;
use zenhostile::*;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (host, payload) = rest.split_at((split as usize).min(rest.len()));

    match insert_comment_segment(host, [0xFF, 0xFE], payload) {
        Ok(out) => {
            assert_eq!(out.len(), host.len() + 4 + payload.len());
            assert_eq!(&out[..2], &host[..2]);
            assert_eq!(&out[6 + payload.len()..], &host[2..]);
        }
        Err(SynthError::HostTooSmall { .. }) => assert!(host.len() < 2),
        Err(SynthError::SegmentTooLarge { .. }) => assert!(payload.len() > 65_533),
        Err(e) => panic!("unexpected error: {e}"),
    }

    // Spoofing must never change the length, whatever the host
    if let Ok(out) = spoof_dimensions(rest.to_vec(), -1, i32::MAX) {
        assert_eq!(out.len(), rest.len());
    }
});
