//! `#RRGGBB` color parsing.

use rgb::RGB8;

use crate::error::SynthError;

/// Parse a 6-hex-digit RGB string. The leading `#` is optional.
pub fn parse_hex_color(s: &str) -> Result<RGB8, SynthError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SynthError::InvalidSetting(alloc::format!(
            "color {s:?} is not a 6-digit hex RGB value"
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| SynthError::InvalidSetting(alloc::format!("color {s:?}: {e}")))
    };
    Ok(RGB8 {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Pack a color into a 24-bit `0xRRGGBB` integer.
pub(crate) fn to_u24(color: RGB8) -> u32 {
    (u32::from(color.r) << 16) | (u32::from(color.g) << 8) | u32::from(color.b)
}

/// Format a color as `#rrggbb`.
pub fn to_hex(color: RGB8) -> alloc::string::String {
    alloc::format!("#{:06x}", to_u24(color))
}
