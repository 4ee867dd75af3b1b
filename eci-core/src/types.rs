//! The `Segment` entity
//!
//! A segment is one maximal run of payload sharing a single ECI (or the unset
//! default). The payload is stored unescaped; escaping only happens at the
//! stream boundary.
//!
//! The ECI setters are deliberately lenient: invalid input is silently
//! ignored, never rejected loudly. The parser relies on this contract to skip
//! malformed marker-adjacent input gracefully, so it must be preserved even
//! when a stricter entry point ([`Segment::with_eci`]) is also available.

use crate::codec::TextCodec;
use crate::constants::ECI_MAX;
use crate::error::EciError;
use crate::escape;
use crate::registry::CharsetRegistry;
use bytes::Bytes;

/// One run of payload bytes tagged with an optional ECI identifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segment {
    eci: Option<u32>,
    payload: Bytes,
}

impl Segment {
    /// Create an empty segment with no ECI assigned
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty segment with the given ECI, rejecting out-of-range
    /// values
    ///
    /// This is the strict counterpart of [`set_eci_value`]; the parser never
    /// uses it.
    ///
    /// [`set_eci_value`]: Segment::set_eci_value
    pub fn with_eci(eci: u32) -> Result<Self, EciError> {
        if eci > ECI_MAX {
            return Err(EciError::InvalidEci(eci));
        }
        Ok(Self {
            eci: Some(eci),
            payload: Bytes::new(),
        })
    }

    /// The ECI value of this segment, or `None` when unset
    pub fn eci_value(&self) -> Option<u32> {
        self.eci
    }

    /// Assign an ECI value; values above 999999 are silently ignored and the
    /// prior value (or unset state) is kept
    pub fn set_eci_value(&mut self, eci: u32) {
        if eci <= ECI_MAX {
            self.eci = Some(eci);
        }
    }

    /// The canonical six-digit zero-padded ECI text, or an empty string when
    /// unset
    pub fn eci_text(&self) -> String {
        match self.eci {
            Some(eci) => escape::eci_text(eci),
            None => String::new(),
        }
    }

    /// Parse text as an unsigned base-10 ECI value and assign it
    ///
    /// A failed parse or an out-of-range value leaves the identifier
    /// untouched; setting never partially succeeds.
    pub fn set_eci_text(&mut self, text: &str) {
        if let Ok(eci) = text.parse::<u32>() {
            self.set_eci_value(eci);
        }
    }

    /// The 7-byte ECI escape sequence for this segment (e.g. `\000003`), or
    /// `None` when no ECI is set
    pub fn escape_sequence(&self) -> Option<Bytes> {
        self.eci.map(escape::escape_sequence)
    }

    /// The raw (unescaped) payload
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Replace the payload with raw (unescaped) bytes
    pub fn set_payload(&mut self, payload: impl Into<Bytes>) {
        self.payload = payload.into();
    }

    /// Replace the payload from its escaped form, collapsing every doubled
    /// marker byte
    pub fn set_payload_escaped(&mut self, escaped: &[u8]) {
        self.payload = escape::unescape(escaped);
    }

    /// The payload in escaped form: every marker byte doubled
    pub fn escaped_payload(&self) -> Bytes {
        escape::escape(&self.payload)
    }

    /// The canonical charset name this segment's ECI resolves to
    pub fn charset(&self, registry: &CharsetRegistry) -> Option<&'static str> {
        self.eci.and_then(|eci| registry.charset_for(eci))
    }

    /// Assign the ECI by charset name or alias; unknown names are silently
    /// ignored
    pub fn set_charset(&mut self, registry: &CharsetRegistry, charset: &str) {
        if let Some(eci) = registry.eci_for(charset) {
            self.set_eci_value(eci);
        }
    }

    /// The human-readable description of this segment's encoding
    pub fn display_name(&self, registry: &CharsetRegistry) -> Option<&'static str> {
        self.charset(registry)
            .and_then(|charset| registry.display_name(charset))
    }

    /// The payload decoded as text with this segment's charset
    ///
    /// Falls back to Latin-1 when no charset resolves from the ECI. An
    /// unresolvable charset yields an empty string; this degraded result is
    /// the documented best-effort policy, not an error.
    pub fn text(&self, registry: &CharsetRegistry) -> String {
        match self.codec(registry) {
            Some(codec) => codec.decode(&self.payload),
            None => String::new(),
        }
    }

    /// Set the payload from escaped text: the text is encoded with this
    /// segment's charset (Latin-1 when none resolves), then doubled marker
    /// bytes are collapsed
    ///
    /// An unresolvable charset leaves the payload unchanged.
    pub fn set_text(&mut self, registry: &CharsetRegistry, text: &str) {
        if let Some(codec) = self.codec(registry) {
            let encoded = codec.encode(text);
            self.set_payload_escaped(&encoded);
        }
    }

    /// The escaped payload decoded as text with this segment's charset
    ///
    /// This is what the text-form composer emits after the marker. Degrades
    /// to an empty string when the charset cannot be resolved.
    pub fn escaped_text(&self, registry: &CharsetRegistry) -> String {
        match self.codec(registry) {
            Some(codec) => codec.decode(&self.escaped_payload()),
            None => String::new(),
        }
    }

    /// Resolve this segment's text codec: the charset from the ECI when one
    /// is registered, the Latin-1 default otherwise
    fn codec(&self, registry: &CharsetRegistry) -> Option<TextCodec> {
        match self.charset(registry) {
            Some(charset) => TextCodec::for_charset(charset),
            None => Some(TextCodec::Latin1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CharsetRegistry {
        CharsetRegistry::new()
    }

    #[test]
    fn test_eci_text_zero_padded() {
        let mut seg = Segment::new();
        assert_eq!(seg.eci_text(), "");
        seg.set_eci_value(3);
        assert_eq!(seg.eci_text(), "000003");
    }

    #[test]
    fn test_set_eci_text_lenient() {
        let mut seg = Segment::new();

        seg.set_eci_text("abc");
        assert_eq!(seg.eci_value(), None);

        seg.set_eci_text("1000000");
        assert_eq!(seg.eci_value(), None);

        seg.set_eci_text("000026");
        assert_eq!(seg.eci_value(), Some(26));

        // Invalid input keeps the prior value, not just the unset state
        seg.set_eci_text("-1");
        assert_eq!(seg.eci_value(), Some(26));
    }

    #[test]
    fn test_set_eci_value_out_of_range_ignored() {
        let mut seg = Segment::new();
        seg.set_eci_value(1_000_000);
        assert_eq!(seg.eci_value(), None);
        seg.set_eci_value(999_999);
        assert_eq!(seg.eci_value(), Some(999_999));
    }

    #[test]
    fn test_with_eci_strict() {
        assert!(Segment::with_eci(26).is_ok());
        assert_eq!(
            Segment::with_eci(1_000_000),
            Err(EciError::InvalidEci(1_000_000))
        );
    }

    #[test]
    fn test_escape_sequence() {
        let mut seg = Segment::new();
        assert_eq!(seg.escape_sequence(), None);
        seg.set_eci_value(26);
        assert_eq!(seg.escape_sequence().unwrap().as_ref(), b"\\000026");
    }

    #[test]
    fn test_payload_escaping() {
        let mut seg = Segment::new();
        seg.set_payload_escaped(&[0x41, 0x5C, 0x5C, 0x42]);
        assert_eq!(seg.payload().as_ref(), &[0x41, 0x5C, 0x42]);
        assert_eq!(seg.escaped_payload().as_ref(), &[0x41, 0x5C, 0x5C, 0x42]);
    }

    #[test]
    fn test_set_charset_by_alias() {
        let reg = registry();
        let mut seg = Segment::new();

        seg.set_charset(&reg, "UTF8");
        assert_eq!(seg.eci_value(), Some(26));
        assert_eq!(seg.charset(&reg), Some("UTF-8"));

        // Unknown names leave the identifier unchanged
        seg.set_charset(&reg, "no-such-charset");
        assert_eq!(seg.eci_value(), Some(26));
    }

    #[test]
    fn test_display_name() {
        let reg = registry();
        let mut seg = Segment::new();
        assert_eq!(seg.display_name(&reg), None);
        seg.set_eci_value(28);
        assert_eq!(seg.display_name(&reg), Some("Big5 Chinese Character Set"));
    }

    #[test]
    fn test_text_default_latin1() {
        let reg = registry();
        let mut seg = Segment::new();
        seg.set_payload(vec![0x41, 0xE9]);
        assert_eq!(seg.text(&reg), "A\u{00E9}");
    }

    #[test]
    fn test_text_utf8() {
        let reg = registry();
        let mut seg = Segment::new();
        seg.set_eci_value(26);
        seg.set_text(&reg, "caf\u{00E9}");
        assert_eq!(seg.payload().as_ref(), "caf\u{00E9}".as_bytes());
        assert_eq!(seg.text(&reg), "caf\u{00E9}");
    }

    #[test]
    fn test_set_text_collapses_escapes() {
        let reg = registry();
        let mut seg = Segment::new();
        seg.set_text(&reg, "A\\\\B");
        assert_eq!(seg.payload().as_ref(), b"A\\B");
        assert_eq!(seg.escaped_text(&reg), "A\\\\B");
    }

    #[test]
    fn test_unregistered_eci_falls_back_to_latin1() {
        let reg = registry();
        let mut seg = Segment::new();
        seg.set_eci_value(899);
        seg.set_payload(vec![0x41]);
        assert_eq!(seg.text(&reg), "A");
    }
}
