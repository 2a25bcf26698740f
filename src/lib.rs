//! # zenhostile
//!
//! Byte-exact hostile test artifacts for probing upload handlers, parsers,
//! antivirus engines and archive extractors.
//!
//! Every format is written by hand, field by field. Some outputs are valid,
//! some are deliberately broken; the breakage is always controlled. Offsets and
//! sizes that a reader needs to *find* the broken part are always correct.
//!
//! ## Artifacts
//!
//! - **BMP**: minimal 24-bit bitmap ([`encode_bitmap`]) and a header/body
//!   mismatch variant ([`spoof_dimensions`]) that claims far more pixels than
//!   it carries.
//! - **JPEG**: comment segment injected right after SOI
//!   ([`insert_comment_segment`]), signature appended after EOI, truncation.
//! - **GIF**: GIF89a/JavaScript polyglot ([`build_polyglot`]) and a PHP shell
//!   behind GIF magic.
//! - **ZIP**: single stored entry with an unsanitized name
//!   ([`build_single_entry_archive`]), e.g. `../../evil.txt`.
//! - **SVG**: XSS and XXE payloads.
//!
//! ## Non-Goals
//!
//! - Decoding anything
//! - Compression (archives use the stored method only)
//! - Drawing text or rendering PNG/JPEG/WebP; plug in a [`RasterSource`]
//!
//! ## Usage
//!
//! ```
//! use zenhostile::{Unstoppable, parse_hex_color};
//!
//! let red = parse_hex_color("#FF0000")?;
//! let bmp = zenhostile::encode_bitmap(2, 2, red, Unstoppable)?;
//! assert_eq!(bmp.len(), 70);
//!
//! let huge = zenhostile::spoof_dimensions(bmp, 50_000, 50_000)?;
//! assert_eq!(huge.len(), 70);
//!
//! let zip = zenhostile::build_single_entry_archive(b"../../evil.txt", b"hi")?;
//! assert_eq!(&zip[..4], b"PK\x03\x04");
//! # Ok::<(), zenhostile::SynthError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod color;
mod error;
mod format;
mod limits;
mod settings;
mod synth;

pub mod anomaly;
pub mod bmp;
pub mod crc;
pub mod gif;
pub mod naming;
pub mod shell;
pub mod source;
pub mod splice;
pub mod svg;
pub mod zip;

// Re-exports
pub use bmp::{RasterSpec, encode_bitmap, spoof_dimensions};
pub use color::{parse_hex_color, to_hex};
pub use crc::{Crc32, crc32};
pub use enough::{Stop, Unstoppable};
pub use error::SynthError;
pub use format::{ImageFormat, JSP, OCTET_STREAM, SVG, ZIP};
pub use gif::build_polyglot;
pub use limits::Limits;
pub use naming::{FilenamePattern, NameTransform};
pub use settings::{AnomalyKind, ArchiveKind, GenerationSettings, SecurityPayload, Variant};
pub use source::{
    Base64Decoder, BitmapRenderer, EntropySource, PayloadDecoder, RasterSource, RenderRequest,
};
#[cfg(feature = "std")]
pub use source::OsEntropy;
pub use splice::{SegmentInjection, append_trailer, insert_comment_segment};
pub use synth::{Artifact, DEFAULT_METADATA_PAYLOAD, SynthesisRequest};
pub use zip::{ArchiveEntry, build_single_entry_archive, flat_expansion};
