/// Encoded image format an artifact is built from or labelled as.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG (needs an external raster source).
    Png,
    /// JPEG (needs an external raster source).
    Jpeg,
    /// WebP (needs an external raster source).
    Webp,
    /// GIF89a.
    Gif,
    /// BMP (Windows bitmap), encoded in-crate.
    Bmp,
}

impl ImageFormat {
    /// Media type label for this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
        }
    }

    /// File extension, without the dot. This is the media type's subtype.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
        }
    }

    /// External tag (`"PNG"`, `"JPEG"`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Webp => "WEBP",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
        }
    }

    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "PNG" => Self::Png,
            "JPEG" | "JPG" => Self::Jpeg,
            "WEBP" => Self::Webp,
            "GIF" => Self::Gif,
            "BMP" => Self::Bmp,
            _ => return None,
        })
    }
}

/// Media type for untyped binary streams.
pub const OCTET_STREAM: &str = "application/octet-stream";
/// Media type for ZIP archives.
pub const ZIP: &str = "application/zip";
/// Media type for SVG documents.
pub const SVG: &str = "image/svg+xml";
/// Media type for JSP pages.
pub const JSP: &str = "application/x-jsp";
