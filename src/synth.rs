//! Entry point: dispatch a [`Variant`] to the component that builds it.

use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;
use tracing::debug;

use crate::anomaly;
use crate::bmp::RasterSpec;
use crate::error::SynthError;
use crate::format::{self, ImageFormat};
use crate::gif;
use crate::limits::Limits;
use crate::naming::NameTransform;
use crate::settings::{AnomalyKind, ArchiveKind, GenerationSettings, SecurityPayload, Variant};
use crate::shell;
use crate::source::{Base64Decoder, EntropySource, PayloadDecoder, RasterSource, RenderRequest};
use crate::splice::{JPEG_COMMENT_MARKER, insert_comment_segment};
use crate::svg::{SvgPayload, build_svg};
use crate::zip;

/// Default script injected into the JPEG comment segment.
pub const DEFAULT_METADATA_PAYLOAD: &str = r#"<script>alert("XSS")</script>"#;

/// A synthesized file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    /// Suggested name, after the naming transform.
    pub file_name: String,
    pub variant: Variant,
}

/// Builder for one synthesis run.
///
/// ```
/// use zenhostile::{GenerationSettings, SynthesisRequest, Unstoppable};
///
/// let settings = GenerationSettings::default().with_variant("ZIP_SLIP".parse()?);
/// let artifact = SynthesisRequest::new(&settings).synthesize(Unstoppable)?;
/// assert_eq!(artifact.media_type, "application/zip");
/// assert_eq!(artifact.file_name, "zip_slip.zip");
/// # Ok::<(), zenhostile::SynthError>(())
/// ```
pub struct SynthesisRequest<'a> {
    settings: &'a GenerationSettings,
    limits: Option<&'a Limits>,
    raster: Option<&'a dyn RasterSource>,
    entropy: Option<&'a mut dyn EntropySource>,
    decoder: Option<&'a dyn PayloadDecoder>,
    naming: Option<&'a dyn NameTransform>,
}

impl<'a> SynthesisRequest<'a> {
    pub fn new(settings: &'a GenerationSettings) -> Self {
        Self {
            settings,
            limits: None,
            raster: None,
            entropy: None,
            decoder: None,
            naming: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Drawing surface for PNG/JPEG/WebP/GIF bases.
    pub fn with_raster(mut self, raster: &'a dyn RasterSource) -> Self {
        self.raster = Some(raster);
        self
    }

    /// Random source for garbage files. Defaults to the OS with the `std` feature.
    pub fn with_entropy(mut self, entropy: &'a mut dyn EntropySource) -> Self {
        self.entropy = Some(entropy);
        self
    }

    /// Decoder for inline payloads. Defaults to [`Base64Decoder`].
    pub fn with_decoder(mut self, decoder: &'a dyn PayloadDecoder) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Replaces the settings' filename pattern.
    pub fn with_naming(mut self, naming: &'a dyn NameTransform) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Run the configured variant.
    pub fn synthesize(mut self, stop: impl Stop) -> Result<Artifact, SynthError> {
        let s = self.settings;
        let variant = s.variant;
        let no_limits = Limits::default();
        let limits = self.limits.unwrap_or(&no_limits);
        stop.check()?;

        let (bytes, media_type, extension, base) = match variant {
            Variant::Standard(fmt) => {
                let bytes = self.render(limits, fmt, &stop)?;
                (bytes, fmt.media_type(), fmt.extension(), s.file_name.clone())
            }
            Variant::Security(payload) => {
                let (bytes, media_type, extension) = self.security(payload, limits, &stop)?;
                let base = alloc::format!("payload_{}", variant.tag().to_ascii_lowercase());
                (bytes, media_type, extension, base)
            }
            Variant::Archive(kind) => {
                let (bytes, base) = self.archive(kind, limits, &stop)?;
                (bytes, format::ZIP, "zip", String::from(base))
            }
            Variant::Anomaly(kind) => {
                let (bytes, media_type, extension) = self.anomaly(kind, limits, &stop)?;
                let base = alloc::format!("anomaly_{}", variant.tag().to_ascii_lowercase());
                (bytes, media_type, extension, base)
            }
            Variant::Inline => {
                let bytes = self.inline()?;
                (bytes, ImageFormat::Png.media_type(), "png", s.file_name.clone())
            }
        };
        limits.check_output(bytes.len())?;

        let file_name = match self.naming {
            Some(naming) => naming.file_name(&base, extension),
            None => s.filename_pattern.file_name(&base, extension),
        };
        debug!(
            variant = variant.tag(),
            len = bytes.len(),
            media_type,
            "synthesized artifact"
        );
        Ok(Artifact {
            bytes,
            media_type,
            file_name,
            variant,
        })
    }

    /// Encoded base image: BMP in-crate, everything else through the raster source.
    fn render(
        &self,
        limits: &Limits,
        fmt: ImageFormat,
        stop: &dyn Stop,
    ) -> Result<Vec<u8>, SynthError> {
        let s = self.settings;
        limits.check_dimensions(s.width, s.height)?;
        let bytes = if fmt == ImageFormat::Bmp {
            let too_large = || SynthError::DimensionsTooLarge {
                width: s.width,
                height: s.height,
            };
            let w = i32::try_from(s.width).map_err(|_| too_large())?;
            let h = i32::try_from(s.height).map_err(|_| too_large())?;
            let spec = RasterSpec::new(w, h, s.color)?;
            limits.check_output(spec.file_size())?;
            spec.encode(stop)?
        } else {
            let raster = self.raster.ok_or_else(|| {
                SynthError::UpstreamEncodingFailed(alloc::format!(
                    "no raster source configured for {fmt:?}"
                ))
            })?;
            raster.render(&RenderRequest {
                width: s.width,
                height: s.height,
                color: s.color,
                label: s.text.as_deref(),
                format: fmt,
            })?
        };
        limits.check_output(bytes.len())?;
        Ok(bytes)
    }

    fn security(
        &self,
        payload: SecurityPayload,
        limits: &Limits,
        stop: &dyn Stop,
    ) -> Result<(Vec<u8>, &'static str, &'static str), SynthError> {
        let s = self.settings;
        let svg = |kind: SvgPayload| {
            let doc = build_svg(kind, s.width, s.height, s.color, s.text.as_deref());
            (doc.into_bytes(), format::SVG, "svg")
        };
        Ok(match payload {
            SecurityPayload::XssAlert => svg(SvgPayload::XssAlert),
            SecurityPayload::XssRemote => svg(SvgPayload::XssRemote),
            SecurityPayload::XxeBasic => svg(SvgPayload::XxeBasic),
            SecurityPayload::XxeOob => svg(SvgPayload::XxeOob),
            SecurityPayload::XxeBillionLaughs => svg(SvgPayload::XxeBillionLaughs),
            SecurityPayload::MetadataXss => {
                let jpeg = self.render(limits, ImageFormat::Jpeg, stop)?;
                let script = s.payload_text.as_deref().unwrap_or(DEFAULT_METADATA_PAYLOAD);
                let bytes = insert_comment_segment(&jpeg, JPEG_COMMENT_MARKER, script.as_bytes())?;
                (bytes, ImageFormat::Jpeg.media_type(), "jpg")
            }
            SecurityPayload::PolyglotJs => {
                let script = [s.payload_text.as_deref(), s.text.as_deref()]
                    .into_iter()
                    .flatten()
                    .find(|t| !t.is_empty())
                    .unwrap_or(gif::DEFAULT_SCRIPT);
                (gif::build_polyglot(script), ImageFormat::Gif.media_type(), "gif")
            }
            SecurityPayload::PhpShellGif => {
                (gif::php_shell_gif(), ImageFormat::Gif.media_type(), "gif")
            }
            SecurityPayload::AspxShell => {
                (shell::aspx_bmp_polyglot()?, ImageFormat::Bmp.media_type(), "bmp")
            }
            SecurityPayload::JspShell => (shell::jsp_shell(), format::JSP, "jsp"),
        })
    }

    fn archive(
        &self,
        kind: ArchiveKind,
        limits: &Limits,
        stop: &dyn Stop,
    ) -> Result<(Vec<u8>, &'static str), SynthError> {
        let s = self.settings;
        Ok(match kind {
            ArchiveKind::ZipSlip => {
                let content = s
                    .text
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(zip::ZIP_SLIP_DEFAULT_CONTENT);
                let bytes = zip::build_single_entry_archive(
                    zip::ZIP_SLIP_NAME.as_bytes(),
                    content.as_bytes(),
                )?;
                (bytes, "zip_slip")
            }
            ArchiveKind::ZipBombFlat => {
                let len = zip::archive_len(zip::FLAT_EXPANSION_NAME.len(), s.flat_expansion_len);
                limits.check_output(len)?;
                let bytes =
                    zip::flat_expansion_with(s.flat_expansion_len, s.flat_expansion_fill, stop)?;
                (bytes, "zip_bomb")
            }
        })
    }

    fn anomaly(
        &mut self,
        kind: AnomalyKind,
        limits: &Limits,
        stop: &dyn Stop,
    ) -> Result<(Vec<u8>, &'static str, &'static str), SynthError> {
        let s = self.settings;
        let jpeg = ImageFormat::Jpeg;
        Ok(match kind {
            AnomalyKind::FakeHuge => {
                let bytes = anomaly::spoofed_header(
                    s.color,
                    anomaly::FAKE_DIMENSION,
                    anomaly::FAKE_DIMENSION,
                )?;
                (bytes, ImageFormat::Bmp.media_type(), "bmp")
            }
            AnomalyKind::EicarAppend => {
                let image = self.render(limits, jpeg, stop)?;
                (anomaly::signature_append(image), jpeg.media_type(), "jpg")
            }
            AnomalyKind::Truncated => {
                let image = self.render(limits, jpeg, stop)?;
                let bytes = anomaly::truncate(&image, s.truncate_fraction)?;
                (bytes, jpeg.media_type(), "jpg")
            }
            AnomalyKind::Garbage => {
                limits.check_output(s.garbage_len)?;
                let bytes = match self.entropy.as_deref_mut() {
                    Some(entropy) => anomaly::garbage(s.garbage_len, entropy)?,
                    None => default_garbage(s.garbage_len)?,
                };
                (bytes, format::OCTET_STREAM, "bin")
            }
        })
    }

    fn inline(&self) -> Result<Vec<u8>, SynthError> {
        let encoded = self.settings.payload_text.as_deref().ok_or_else(|| {
            SynthError::InvalidPayload(String::from("inline variant needs payload_text"))
        })?;
        match self.decoder {
            Some(decoder) => decoder.decode(encoded),
            None => Base64Decoder.decode(encoded),
        }
    }
}

#[cfg(feature = "std")]
fn default_garbage(len: usize) -> Result<Vec<u8>, SynthError> {
    anomaly::garbage(len, &mut crate::source::OsEntropy)
}

#[cfg(not(feature = "std"))]
fn default_garbage(_len: usize) -> Result<Vec<u8>, SynthError> {
    Err(SynthError::EntropyUnavailable(String::from(
        "no entropy source configured",
    )))
}
