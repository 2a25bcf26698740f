//! Deliberately malformed files: spoofed headers, appended signatures,
//! truncation, and random noise.
//!
//! Each strategy stands alone. Real encoded images come from the caller
//! (usually a [`RasterSource`](crate::RasterSource)).

use alloc::vec;
use alloc::vec::Vec;
use enough::Unstoppable;
use rgb::RGB8;
use tracing::warn;

use crate::bmp::{RasterSpec, spoof_dimensions};
use crate::error::SynthError;
use crate::source::EntropySource;
use crate::splice::append_trailer;

/// EICAR anti-virus test signature.
pub const EICAR: &str = r"X5O!P%@AP[4\PZX54(P^)7CC)7}$EICAR-STANDARD-ANTIVIRUS-TEST-FILE!$H+H*";

/// Dimensions claimed by the default spoofed-header artifact.
pub const FAKE_DIMENSION: i32 = 50_000;
/// Leading fraction kept by the default truncation.
pub const DEFAULT_TRUNCATE_FRACTION: f64 = 0.2;
/// Size of the default garbage buffer.
pub const DEFAULT_GARBAGE_LEN: usize = 5 * 1024;

/// A 1x1 bitmap whose header claims `fake_width` x `fake_height`.
pub fn spoofed_header(
    color: RGB8,
    fake_width: i32,
    fake_height: i32,
) -> Result<Vec<u8>, SynthError> {
    let tiny = RasterSpec::new(1, 1, color)?.encode(&Unstoppable)?;
    spoof_dimensions(tiny, fake_width, fake_height)
}

/// `image` followed by the EICAR signature.
pub fn signature_append(image: Vec<u8>) -> Vec<u8> {
    append_trailer(image, EICAR.as_bytes())
}

/// The first `floor(fraction * image.len())` bytes of `image`.
///
/// `fraction` must be within `0.0..=1.0`.
pub fn truncate(image: &[u8], fraction: f64) -> Result<Vec<u8>, SynthError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(SynthError::InvalidSetting(alloc::format!(
            "truncation fraction {fraction} is outside 0..=1"
        )));
    }
    // `as` truncates toward zero, which is floor for non-negative values.
    let keep = ((fraction * image.len() as f64) as usize).min(image.len());
    if keep == 0 {
        warn!(fraction, len = image.len(), "truncation keeps no bytes");
    }
    Ok(image[..keep].to_vec())
}

/// `len` bytes from `entropy`.
pub fn garbage(len: usize, entropy: &mut dyn EntropySource) -> Result<Vec<u8>, SynthError> {
    let mut out = vec![0u8; len];
    entropy.fill(&mut out)?;
    Ok(out)
}
