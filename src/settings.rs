//! The configuration record and the closed set of synthesis variants.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use rgb::RGB8;

use crate::anomaly::{DEFAULT_GARBAGE_LEN, DEFAULT_TRUNCATE_FRACTION};
use crate::error::SynthError;
use crate::format::ImageFormat;
use crate::naming::FilenamePattern;
use crate::source::EntropySource;

/// Security payload carriers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecurityPayload {
    XssAlert,
    XssRemote,
    XxeBasic,
    XxeOob,
    XxeBillionLaughs,
    /// JPEG with a script in a COM segment.
    MetadataXss,
    /// GIF89a / JavaScript polyglot.
    PolyglotJs,
    PhpShellGif,
    AspxShell,
    JspShell,
}

/// Archive variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// Entry named `../../evil.txt`.
    ZipSlip,
    /// Large stored entry (not a real compression bomb).
    ZipBombFlat,
}

/// Malformed-file variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnomalyKind {
    /// 1x1 bitmap claiming far larger dimensions.
    FakeHuge,
    /// JPEG with the EICAR signature appended.
    EicarAppend,
    /// Leading fraction of a JPEG.
    Truncated,
    /// Random bytes.
    Garbage,
}

/// Which synthesis path to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Plain image of the requested format.
    Standard(ImageFormat),
    Security(SecurityPayload),
    Archive(ArchiveKind),
    Anomaly(AnomalyKind),
    /// Externally produced image delivered as base64 in `payload_text`.
    Inline,
}

const TAGS: &[(&str, Variant)] = &[
    ("PNG", Variant::Standard(ImageFormat::Png)),
    ("JPEG", Variant::Standard(ImageFormat::Jpeg)),
    ("WEBP", Variant::Standard(ImageFormat::Webp)),
    ("GIF", Variant::Standard(ImageFormat::Gif)),
    ("BMP", Variant::Standard(ImageFormat::Bmp)),
    ("XSS_ALERT", Variant::Security(SecurityPayload::XssAlert)),
    ("XSS_REMOTE", Variant::Security(SecurityPayload::XssRemote)),
    ("XXE_BASIC", Variant::Security(SecurityPayload::XxeBasic)),
    ("XXE_OOB", Variant::Security(SecurityPayload::XxeOob)),
    ("XXE_BILLION_LAUGHS", Variant::Security(SecurityPayload::XxeBillionLaughs)),
    ("METADATA_XSS", Variant::Security(SecurityPayload::MetadataXss)),
    ("POLYGLOT_JS", Variant::Security(SecurityPayload::PolyglotJs)),
    ("PHP_SHELL_GIF", Variant::Security(SecurityPayload::PhpShellGif)),
    ("ASPX_SHELL", Variant::Security(SecurityPayload::AspxShell)),
    ("JSP_SHELL", Variant::Security(SecurityPayload::JspShell)),
    ("ZIP_SLIP", Variant::Archive(ArchiveKind::ZipSlip)),
    ("ZIP_BOMB_FLAT", Variant::Archive(ArchiveKind::ZipBombFlat)),
    ("FAKE_HUGE", Variant::Anomaly(AnomalyKind::FakeHuge)),
    ("EICAR_APPEND", Variant::Anomaly(AnomalyKind::EicarAppend)),
    ("TRUNCATED_FILE", Variant::Anomaly(AnomalyKind::Truncated)),
    ("GARBAGE_CONTENT", Variant::Anomaly(AnomalyKind::Garbage)),
    ("INLINE", Variant::Inline),
];

impl Variant {
    /// External tag, e.g. `"ZIP_SLIP"`. Inverse of [`FromStr`].
    pub fn tag(&self) -> &'static str {
        TAGS.iter()
            .find(|(_, v)| v == self)
            .map(|(tag, _)| *tag)
            .unwrap_or("UNKNOWN")
    }
}

impl FromStr for Variant {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(format) = ImageFormat::from_tag(s) {
            return Ok(Variant::Standard(format));
        }
        TAGS.iter()
            .find(|(tag, _)| *tag == s)
            .map(|(_, v)| *v)
            .ok_or_else(|| SynthError::UnsupportedVariant(alloc::format!("{s:?}")))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Everything a synthesis run is configured with.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub width: u32,
    pub height: u32,
    pub color: RGB8,
    /// Label drawn on rendered images; also the default payload for some variants.
    pub text: Option<String>,
    pub variant: Variant,
    /// Free-form payload substituted into generated content.
    pub payload_text: Option<String>,
    /// Base name for standard and inline artifacts.
    pub file_name: String,
    pub filename_pattern: FilenamePattern,
    /// Leading fraction kept by [`AnomalyKind::Truncated`].
    pub truncate_fraction: f64,
    /// Size of the [`AnomalyKind::Garbage`] buffer.
    pub garbage_len: usize,
    /// Content size of the [`ArchiveKind::ZipBombFlat`] entry.
    pub flat_expansion_len: usize,
    pub flat_expansion_fill: u8,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            color: RGB8 {
                r: 0x63,
                g: 0x66,
                b: 0xf1,
            },
            text: Some(String::from("Test Image")),
            variant: Variant::Standard(ImageFormat::Png),
            payload_text: None,
            file_name: String::from("test-image"),
            filename_pattern: FilenamePattern::Standard,
            truncate_fraction: DEFAULT_TRUNCATE_FRACTION,
            garbage_len: DEFAULT_GARBAGE_LEN,
            flat_expansion_len: 10 * 1024 * 1024,
            flat_expansion_fill: b'A',
        }
    }
}

const CHAOS_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Webp,
    ImageFormat::Bmp,
];

const CHAOS_SECURITY: [SecurityPayload; 8] = [
    SecurityPayload::XssAlert,
    SecurityPayload::XssRemote,
    SecurityPayload::XxeBasic,
    SecurityPayload::MetadataXss,
    SecurityPayload::PolyglotJs,
    SecurityPayload::PhpShellGif,
    SecurityPayload::AspxShell,
    SecurityPayload::JspShell,
];

const CHAOS_ARCHIVES: [ArchiveKind; 2] = [ArchiveKind::ZipSlip, ArchiveKind::ZipBombFlat];

const CHAOS_ANOMALIES: [AnomalyKind; 4] = [
    AnomalyKind::FakeHuge,
    AnomalyKind::EicarAppend,
    AnomalyKind::Truncated,
    AnomalyKind::Garbage,
];

fn roll(entropy: &mut dyn EntropySource, n: usize) -> Result<usize, SynthError> {
    let mut buf = [0u8; 4];
    entropy.fill(&mut buf)?;
    Ok(u32::from_le_bytes(buf) as usize % n)
}

fn random_id(entropy: &mut dyn EntropySource) -> Result<String, SynthError> {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut buf = [0u8; 9];
    entropy.fill(&mut buf)?;
    Ok(buf
        .iter()
        .map(|&b| char::from(ALPHABET[usize::from(b) % ALPHABET.len()]))
        .collect())
}

impl GenerationSettings {
    /// Parse a `#RRGGBB` color into [`Self::color`].
    pub fn with_color_hex(mut self, hex: &str) -> Result<Self, SynthError> {
        self.color = crate::color::parse_hex_color(hex)?;
        Ok(self)
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Randomized settings derived from `base`: a random variant (data and
    /// inline paths excluded), size, color, and id, plus a hostile file name
    /// pattern three times in ten.
    pub fn chaos(base: &Self, entropy: &mut dyn EntropySource) -> Result<Self, SynthError> {
        let variant = match roll(entropy, 4)? {
            0 => Variant::Standard(CHAOS_FORMATS[roll(entropy, CHAOS_FORMATS.len())?]),
            1 => Variant::Security(CHAOS_SECURITY[roll(entropy, CHAOS_SECURITY.len())?]),
            2 => Variant::Archive(CHAOS_ARCHIVES[roll(entropy, CHAOS_ARCHIVES.len())?]),
            _ => Variant::Anomaly(CHAOS_ANOMALIES[roll(entropy, CHAOS_ANOMALIES.len())?]),
        };
        let width = 100 + roll(entropy, 800)? as u32;
        let height = 100 + roll(entropy, 800)? as u32;
        let mut rgb = [0u8; 3];
        entropy.fill(&mut rgb)?;
        let filename_pattern = if roll(entropy, 10)? >= 7 {
            FilenamePattern::HOSTILE[roll(entropy, FilenamePattern::HOSTILE.len())?]
        } else {
            FilenamePattern::Standard
        };
        let text_id = random_id(entropy)?;
        let name_id = random_id(entropy)?;

        Ok(Self {
            width,
            height,
            color: RGB8 {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            },
            text: Some(alloc::format!("Chaos {text_id}")),
            variant,
            file_name: alloc::format!("chaos_{name_id}"),
            filename_pattern,
            ..base.clone()
        })
    }
}
