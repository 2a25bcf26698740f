//! BMP encoder: uncompressed 24-bit, one fill color.

use super::{BIT_DEPTH, HEADER_LEN, RasterSpec};
use crate::error::SynthError;
use alloc::vec::Vec;
use enough::Stop;

pub(super) fn encode_solid(spec: &RasterSpec, stop: &dyn Stop) -> Result<Vec<u8>, SynthError> {
    stop.check()?;

    let mut out = Vec::with_capacity(spec.file_size());
    let height_field = if spec.is_top_down() {
        -(spec.height() as i64)
    } else {
        i64::from(spec.height())
    };
    write_bmp_header(
        &mut out,
        spec.file_size(),
        spec.pixel_data_size(),
        spec.width(),
        height_field as i32,
    );

    // Every row is identical, so build one padded row and repeat it.
    let w = spec.width() as usize;
    let c = spec.color();
    let mut row = Vec::with_capacity(spec.row_stride());
    for _ in 0..w {
        row.push(c.b);
        row.push(c.g);
        row.push(c.r);
    }
    row.resize(spec.row_stride(), 0);

    for y in 0..spec.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(&row);
    }

    debug_assert_eq!(out.len(), spec.file_size());
    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: i32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // negative = top-down
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&BIT_DEPTH.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
