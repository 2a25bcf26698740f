//! Post-hoc header field overwrites (header/body mismatch).

use super::{HEIGHT_FIELD, WIDTH_FIELD};
use crate::error::SynthError;
use alloc::vec::Vec;

/// Width of a fixed-size little-endian integer field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldWidth {
    U16,
    U32,
}

impl FieldWidth {
    pub const fn bytes(self) -> usize {
        match self {
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

/// A `(byte offset, width)` pair locating an integer field in a serialized header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderField {
    pub offset: usize,
    pub width: FieldWidth,
}

impl HeaderField {
    pub const fn new(offset: usize, width: FieldWidth) -> Self {
        Self { offset, width }
    }

    /// One past the last byte of the field.
    pub const fn end(&self) -> usize {
        self.offset + self.width.bytes()
    }

    /// Read the field back, or `None` if `bytes` is too short.
    pub fn read(&self, bytes: &[u8]) -> Option<u32> {
        let raw = bytes.get(self.offset..self.end())?;
        Some(match self.width {
            FieldWidth::U16 => u32::from(u16::from_le_bytes([raw[0], raw[1]])),
            FieldWidth::U32 => u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
        })
    }

    /// Overwrite the field in place with `value`. Nothing else in the buffer changes.
    ///
    /// Takes the buffer by value: the caller hands over exclusive ownership and
    /// gets the same allocation back.
    pub fn overwrite(&self, mut bytes: Vec<u8>, value: u32) -> Result<Vec<u8>, SynthError> {
        let actual = bytes.len();
        let slot = bytes
            .get_mut(self.offset..self.end())
            .ok_or(SynthError::HostTooSmall {
                needed: self.end(),
                actual,
            })?;
        match self.width {
            FieldWidth::U16 => {
                let v = u16::try_from(value).map_err(|_| {
                    SynthError::InvalidSetting(alloc::format!(
                        "value {value} does not fit the 16-bit field at offset {}",
                        self.offset
                    ))
                })?;
                slot.copy_from_slice(&v.to_le_bytes());
            }
            FieldWidth::U32 => slot.copy_from_slice(&value.to_le_bytes()),
        }
        Ok(bytes)
    }
}

/// Overwrite the width/height fields of a serialized BMP without touching the
/// pixel data, so the declared dimensions no longer match the real payload.
pub fn spoof_dimensions(
    bitmap: Vec<u8>,
    fake_width: i32,
    fake_height: i32,
) -> Result<Vec<u8>, SynthError> {
    let bitmap = WIDTH_FIELD.overwrite(bitmap, fake_width as u32)?;
    HEIGHT_FIELD.overwrite(bitmap, fake_height as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn overwrite_only_touches_field() {
        let field = HeaderField::new(2, FieldWidth::U16);
        let out = field.overwrite(vec![9u8; 6], 0x0102).unwrap();
        assert_eq!(out, [9, 9, 0x02, 0x01, 9, 9]);
        assert_eq!(field.read(&out), Some(0x0102));
    }

    #[test]
    fn overwrite_rejects_short_buffer() {
        let err = HEIGHT_FIELD.overwrite(vec![0u8; 25], 1).unwrap_err();
        assert!(matches!(
            err,
            SynthError::HostTooSmall {
                needed: 26,
                actual: 25
            }
        ));
    }

    #[test]
    fn u16_field_rejects_wide_value() {
        let field = HeaderField::new(0, FieldWidth::U16);
        assert!(field.overwrite(vec![0u8; 2], 0x1_0000).is_err());
    }

    #[test]
    fn negative_dimension_is_twos_complement() {
        let out = spoof_dimensions(vec![0u8; 54], 7, -1).unwrap();
        assert_eq!(WIDTH_FIELD.read(&out), Some(7));
        assert_eq!(HEIGHT_FIELD.read(&out), Some(u32::MAX));
    }
}
