//! Caps on what a synthesis run may render and return.

use crate::error::SynthError;

/// Caps enforced by [`SynthesisRequest`](crate::SynthesisRequest).
///
/// `None` means unlimited, and [`Default`] sets no caps.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the length of the returned artifact and of any image it is
    /// built from. Lengths known in advance are checked before allocating.
    pub max_output_bytes: Option<u64>,
}

fn within(cap: Option<u64>, value: u64, what: &str) -> Result<(), SynthError> {
    match cap {
        Some(cap) if value > cap => Err(SynthError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {cap}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Raster size requested from the encoder or a [`RasterSource`](crate::RasterSource).
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), SynthError> {
        within(self.max_width, u64::from(width), "width")?;
        within(self.max_height, u64::from(height), "height")?;
        within(
            self.max_pixels,
            u64::from(width) * u64::from(height),
            "pixel count",
        )
    }

    /// Length in bytes of an artifact, or of an intermediate image.
    pub(crate) fn check_output(&self, len: usize) -> Result<(), SynthError> {
        within(self.max_output_bytes, len as u64, "output size")
    }
}
