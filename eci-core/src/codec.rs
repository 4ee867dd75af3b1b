//! Charset name -> text decoder/encoder resolution
//!
//! The registry hands out canonical charset names; this module turns those
//! names into something that can actually decode and encode text. Most names
//! resolve through `encoding_rs`, with manual arms for the cases where WHATWG
//! label resolution diverges from the ECI table:
//!
//! - ISO-8859-1 must be true Latin-1 (byte == code point), not the
//!   windows-1252 superset the WHATWG label maps to.
//! - `encoding_rs` decodes UTF-16 but has no UTF-16/32 encoders.
//!
//! All conversions are replacement-lossy, matching the host-codec behaviour
//! the protocol expects: malformed input decodes to U+FFFD and unmappable
//! characters encode to a substitute, rather than failing the whole segment.

use encoding_rs::Encoding;

/// A resolved text codec for one charset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCodec {
    /// ISO/IEC 8859-1: each byte is the Unicode code point of the same value
    Latin1,
    /// UTF-16, big-endian, no BOM handling
    Utf16Be,
    /// UTF-16, little-endian, no BOM handling
    Utf16Le,
    /// UTF-32, big-endian
    Utf32Be,
    /// UTF-32, little-endian
    Utf32Le,
    /// Any other charset, resolved through the WHATWG encoding machinery
    Whatwg(&'static Encoding),
}

impl TextCodec {
    /// Resolve a charset name to a codec, or `None` if the platform has no
    /// codec for it
    pub fn for_charset(name: &str) -> Option<TextCodec> {
        match name {
            "" => None,
            "ISO-8859-1" => Some(TextCodec::Latin1),
            "UTF-16BE" => Some(TextCodec::Utf16Be),
            "UTF-16LE" => Some(TextCodec::Utf16Le),
            "UTF-32BE" => Some(TextCodec::Utf32Be),
            "UTF-32LE" => Some(TextCodec::Utf32Le),
            // Not a WHATWG label; iso-8859-11 resolves to windows-874, the
            // closest platform codec for the Latin/Thai alphabet.
            "x-iso-8859-11" => Encoding::for_label(b"iso-8859-11").map(TextCodec::Whatwg),
            other => Encoding::for_label(other.as_bytes()).map(TextCodec::Whatwg),
        }
    }

    /// Decode bytes into text, replacing malformed sequences
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextCodec::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            TextCodec::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            TextCodec::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            TextCodec::Utf32Be => decode_utf32(bytes, u32::from_be_bytes),
            TextCodec::Utf32Le => decode_utf32(bytes, u32::from_le_bytes),
            TextCodec::Whatwg(enc) => {
                let (text, _, _) = enc.decode(bytes);
                text.into_owned()
            }
        }
    }

    /// Encode text into bytes, substituting unmappable characters
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextCodec::Latin1 => text
                .chars()
                .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
                .collect(),
            TextCodec::Utf16Be => encode_utf16(text, u16::to_be_bytes),
            TextCodec::Utf16Le => encode_utf16(text, u16::to_le_bytes),
            TextCodec::Utf32Be => encode_utf32(text, u32::to_be_bytes),
            TextCodec::Utf32Le => encode_utf32(text, u32::to_le_bytes),
            TextCodec::Whatwg(enc) => {
                let (bytes, _, _) = enc.encode(text);
                bytes.into_owned()
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> String {
    // A trailing odd byte is malformed and decodes as a replacement character
    let mut units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]))
        .collect();
    if bytes.len() % 2 != 0 {
        units.push(0xFFFD);
    }
    String::from_utf16_lossy(&units)
}

fn encode_utf16(text: &str, to_bytes: fn(u16) -> [u8; 2]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&to_bytes(unit));
    }
    out
}

fn decode_utf32(bytes: &[u8], from_bytes: fn([u8; 4]) -> u32) -> String {
    let mut out = String::with_capacity(bytes.len() / 4);
    for quad in bytes.chunks(4) {
        let ch = if quad.len() == 4 {
            char::from_u32(from_bytes([quad[0], quad[1], quad[2], quad[3]]))
        } else {
            None
        };
        out.push(ch.unwrap_or('\u{FFFD}'));
    }
    out
}

fn encode_utf32(text: &str, to_bytes: fn(u32) -> [u8; 4]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 4);
    for ch in text.chars() {
        out.extend_from_slice(&to_bytes(ch as u32));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_is_not_windows_1252() {
        let codec = TextCodec::for_charset("ISO-8859-1").unwrap();
        // 0x80-0x9F are C1 controls in Latin-1, printable in windows-1252
        assert_eq!(codec.decode(&[0x80]), "\u{0080}");
        assert_eq!(codec.encode("\u{00E9}"), vec![0xE9]);
    }

    #[test]
    fn test_latin1_unmappable_substitutes() {
        let codec = TextCodec::for_charset("ISO-8859-1").unwrap();
        assert_eq!(codec.encode("\u{4E2D}"), vec![b'?']);
    }

    #[test]
    fn test_utf8_round_trip() {
        let codec = TextCodec::for_charset("UTF-8").unwrap();
        let text = "caf\u{00E9} \u{4E2D}\u{6587}";
        assert_eq!(codec.decode(&codec.encode(text)), text);
    }

    #[test]
    fn test_utf16be_round_trip() {
        let codec = TextCodec::for_charset("UTF-16BE").unwrap();
        assert_eq!(codec.encode("AB"), vec![0x00, 0x41, 0x00, 0x42]);
        assert_eq!(codec.decode(&[0x00, 0x41, 0x00, 0x42]), "AB");
        // Surrogate pairs survive
        let text = "\u{1F600}";
        assert_eq!(codec.decode(&codec.encode(text)), text);
    }

    #[test]
    fn test_utf16_odd_length_replaced() {
        let codec = TextCodec::for_charset("UTF-16LE").unwrap();
        assert_eq!(codec.decode(&[0x41, 0x00, 0x42]), "A\u{FFFD}");
    }

    #[test]
    fn test_utf32_round_trip() {
        let codec = TextCodec::for_charset("UTF-32LE").unwrap();
        let text = "A\u{1F600}";
        assert_eq!(codec.decode(&codec.encode(text)), text);
    }

    #[test]
    fn test_shift_jis_resolves() {
        let codec = TextCodec::for_charset("Shift_JIS").unwrap();
        assert_eq!(codec.decode(&[0x83, 0x41]), "\u{30A2}");
    }

    #[test]
    fn test_unknown_charset_has_no_codec() {
        assert_eq!(TextCodec::for_charset("not-a-charset"), None);
        assert_eq!(TextCodec::for_charset(""), None);
    }
}
