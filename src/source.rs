//! Capabilities the synthesizer consumes but does not implement itself:
//! rendering a labelled rectangle, secure random bytes, and decoding an
//! externally supplied base64 image.
//!
//! All three are synchronous. A caller with an asynchronous drawing surface or
//! random source resolves it first and hands the bytes over through these traits.

use alloc::vec::Vec;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use enough::Unstoppable;
use rgb::RGB8;

use crate::bmp::RasterSpec;
use crate::color::to_u24;
use crate::error::SynthError;
use crate::format::ImageFormat;

/// What to draw: a filled rectangle with an optional centered label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    pub width: u32,
    pub height: u32,
    pub color: RGB8,
    pub label: Option<&'a str>,
    pub format: ImageFormat,
}

impl RenderRequest<'_> {
    /// Label color that contrasts with the fill: black on light, white on dark.
    pub fn label_color(&self) -> RGB8 {
        if to_u24(self.color) > 0x00FF_FFFF / 2 {
            RGB8 { r: 0, g: 0, b: 0 }
        } else {
            RGB8 {
                r: 0xFF,
                g: 0xFF,
                b: 0xFF,
            }
        }
    }
}

/// Renders a [`RenderRequest`] to encoded image bytes.
///
/// Failures should be reported as [`SynthError::UpstreamEncodingFailed`].
pub trait RasterSource {
    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, SynthError>;
}

/// Fills buffers with cryptographically secure random bytes.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SynthError>;
}

/// Decodes an externally supplied text-encoded image payload.
pub trait PayloadDecoder {
    fn decode(&self, encoded: &str) -> Result<Vec<u8>, SynthError>;
}

/// [`RasterSource`] for BMP only, backed by the in-crate encoder. The label is not drawn.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapRenderer;

impl RasterSource for BitmapRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, SynthError> {
        if request.format != ImageFormat::Bmp {
            return Err(SynthError::UpstreamEncodingFailed(alloc::format!(
                "{:?} needs an external drawing surface",
                request.format
            )));
        }
        let too_large = || SynthError::DimensionsTooLarge {
            width: request.width,
            height: request.height,
        };
        let width = i32::try_from(request.width).map_err(|_| too_large())?;
        let height = i32::try_from(request.height).map_err(|_| too_large())?;
        RasterSpec::new(width, height, request.color)?.encode(&Unstoppable)
    }
}

/// [`EntropySource`] backed by the operating system.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

#[cfg(feature = "std")]
impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SynthError> {
        getrandom::fill(buf).map_err(|e| SynthError::EntropyUnavailable(alloc::format!("{e}")))
    }
}

/// Standard-alphabet, padded base64.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base64Decoder;

impl PayloadDecoder for Base64Decoder {
    fn decode(&self, encoded: &str) -> Result<Vec<u8>, SynthError> {
        STANDARD
            .decode(encoded.trim())
            .map_err(|e| SynthError::InvalidPayload(alloc::format!("base64: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(color: RGB8, format: ImageFormat) -> RenderRequest<'static> {
        RenderRequest {
            width: 2,
            height: 2,
            color,
            label: Some("hi"),
            format,
        }
    }

    #[test]
    fn label_contrasts_with_fill() {
        let white = RGB8 { r: 255, g: 255, b: 255 };
        let navy = RGB8 { r: 0, g: 0, b: 0x80 };
        assert_eq!(request(white, ImageFormat::Png).label_color(), RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(request(navy, ImageFormat::Png).label_color(), white);
    }

    #[test]
    fn bitmap_renderer_only_does_bmp() {
        let c = RGB8 { r: 1, g: 2, b: 3 };
        let bmp = BitmapRenderer.render(&request(c, ImageFormat::Bmp)).unwrap();
        assert_eq!(bmp.len(), 54 + 16);
        let err = BitmapRenderer.render(&request(c, ImageFormat::Jpeg)).unwrap_err();
        assert!(matches!(err, SynthError::UpstreamEncodingFailed(_)));
    }

    #[test]
    fn base64_decodes_and_rejects_garbage() {
        assert_eq!(Base64Decoder.decode("aGk=\n").unwrap(), b"hi");
        assert!(matches!(
            Base64Decoder.decode("not base64!"),
            Err(SynthError::InvalidPayload(_))
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn os_entropy_fills() {
        let mut buf = [0u8; 64];
        OsEntropy.fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }
}
