//! Minimal 24-bit BMP writer and header spoofing.
//!
//! Layout is a 14-byte file header followed by a 40-byte BITMAPINFOHEADER and
//! uncompressed BGR rows padded to 4 bytes.

mod encode;
mod spoof;

pub use spoof::{FieldWidth, HeaderField, spoof_dimensions};

use crate::error::SynthError;
use alloc::vec::Vec;
use enough::Stop;
use rgb::RGB8;

/// Bytes before the pixel array in the minimal header variant.
pub const HEADER_LEN: usize = 54;
/// Bits per pixel written by [`encode_bitmap`].
pub const BIT_DEPTH: u16 = 24;

/// Info-header width field (signed 32-bit, little-endian).
pub const WIDTH_FIELD: HeaderField = HeaderField::new(18, FieldWidth::U32);
/// Info-header height field (signed 32-bit, little-endian; negative = top-down).
pub const HEIGHT_FIELD: HeaderField = HeaderField::new(22, FieldWidth::U32);

/// A validated single-color raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterSpec {
    width: u32,
    height: u32,
    color: RGB8,
    top_down: bool,
    row_stride: usize,
    file_size: usize,
}

impl RasterSpec {
    /// Validate dimensions and precompute the stride.
    ///
    /// Fails with [`SynthError::InvalidDimension`] for non-positive sizes and
    /// [`SynthError::DimensionsTooLarge`] when the file size overflows the
    /// 32-bit header field.
    pub fn new(width: i32, height: i32, color: RGB8) -> Result<Self, SynthError> {
        if width <= 0 || height <= 0 {
            return Err(SynthError::InvalidDimension(alloc::format!(
                "{width}x{height}: width and height must be positive"
            )));
        }
        let (w, h) = (width as u32, height as u32);
        let too_large = SynthError::DimensionsTooLarge {
            width: w,
            height: h,
        };
        let row_stride = (u64::from(BIT_DEPTH) * u64::from(w)).div_ceil(32) * 4;
        let file_size = row_stride
            .checked_mul(u64::from(h))
            .and_then(|px| px.checked_add(HEADER_LEN as u64))
            .filter(|&total| total <= u64::from(u32::MAX))
            .ok_or(too_large)?;
        Ok(Self {
            width: w,
            height: h,
            color,
            top_down: false,
            row_stride: row_stride as usize,
            file_size: file_size as usize,
        })
    }

    /// Store rows top-to-bottom (negative height field).
    pub fn top_down(mut self) -> Self {
        self.top_down = true;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> RGB8 {
        self.color
    }

    pub fn is_top_down(&self) -> bool {
        self.top_down
    }

    /// Bytes per row including padding to a 4-byte boundary.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn pixel_data_size(&self) -> usize {
        self.file_size - HEADER_LEN
    }

    pub fn file_size(&self) -> usize {
        self.file_size
    }

    /// Serialize to BMP bytes.
    pub fn encode(&self, stop: &dyn Stop) -> Result<Vec<u8>, SynthError> {
        encode::encode_solid(self, stop)
    }
}

/// Encode a solid-color 24-bit bottom-up BMP.
pub fn encode_bitmap(
    width: i32,
    height: i32,
    color: RGB8,
    stop: impl Stop,
) -> Result<Vec<u8>, SynthError> {
    RasterSpec::new(width, height, color)?.encode(&stop)
}
