//! Escaped stream -> segments (text and byte forms)
//!
//! A single left-to-right pass over the stream. An ECI escape sequence is
//! recognized only when the byte at the cursor is the marker byte, at least
//! six bytes remain after it, and all six are ASCII digits; anything else at
//! the cursor is payload. This makes parsing total: every input splits into
//! some valid segment sequence, and a short or malformed marker-like run is
//! just payload.

use crate::constants::{ESCAPE_SEQUENCE_LEN, MARKER_BYTE};
use crate::escape::is_digit_run;
use crate::registry::CharsetRegistry;
use crate::types::Segment;

#[cfg(feature = "logging")]
use tracing::debug;

/// One scanner step: either a recognized escape sequence or a run of
/// payload bytes
enum Token<'a> {
    /// The six digit bytes of an ECI escape sequence
    Marker(&'a [u8]),
    /// A maximal run of payload bytes up to the next recognized marker
    Payload(&'a [u8]),
}

/// Tokenizer over an escaped stream
///
/// Marker candidates are located with `memchr`; every candidate is validated
/// in place, so the scan stays linear in the input length.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];

        if rest[0] == MARKER_BYTE && is_digit_run(&rest[1..]) {
            self.pos += ESCAPE_SEQUENCE_LEN;
            return Some(Token::Marker(&rest[1..ESCAPE_SEQUENCE_LEN]));
        }

        // Payload run: extend past every marker byte that does not start a
        // valid escape sequence
        let mut end = 1;
        loop {
            match memchr::memchr(MARKER_BYTE, &rest[end..]) {
                Some(offset) => {
                    let candidate = end + offset;
                    if is_digit_run(&rest[candidate + 1..]) {
                        end = candidate;
                        break;
                    }
                    end = candidate + 1;
                }
                None => {
                    end = rest.len();
                    break;
                }
            }
        }
        self.pos += end;
        Some(Token::Payload(&rest[..end]))
    }
}

fn begins_with_marker(stream: &[u8]) -> bool {
    stream.first() == Some(&MARKER_BYTE) && is_digit_run(&stream[1..])
}

/// Parse an escaped byte stream into an ordered sequence of segments
///
/// Payload bytes are accumulated raw and unescaped when the segment is
/// frozen; no text decoding happens during the scan. If the stream does not
/// begin with an escape sequence, an implicit unset-ECI segment is opened
/// first so leading unmarked content is never lost.
pub fn parse_bytes(stream: &[u8]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();

    if !begins_with_marker(stream) {
        segments.push(Segment::new());
    }

    for token in Tokens::new(stream) {
        match token {
            Token::Marker(digits) => {
                if let Some(open) = segments.last_mut() {
                    open.set_payload_escaped(&buf);
                    buf.clear();
                }
                let mut segment = Segment::new();
                segment.set_eci_text(&String::from_utf8_lossy(digits));
                segments.push(segment);
            }
            Token::Payload(run) => buf.extend_from_slice(run),
        }
    }

    if let Some(open) = segments.last_mut() {
        open.set_payload_escaped(&buf);
    }

    #[cfg(feature = "logging")]
    debug!(
        "Parsed {} bytes into {} segments",
        stream.len(),
        segments.len()
    );

    segments
}

/// Parse an escaped text stream into an ordered sequence of segments
///
/// Same scan as [`parse_bytes`], operating on the string's UTF-8 bytes (the
/// marker grammar is pure ASCII, so payload runs always fall on character
/// boundaries). Each segment's accumulated text is frozen through
/// [`Segment::set_text`] with the charset resolved from that segment's own
/// ECI, assigned when the segment was opened; the upcoming marker's ECI
/// belongs to the next segment and plays no part in the freeze.
pub fn parse_text(registry: &CharsetRegistry, stream: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut buf = String::new();

    if !begins_with_marker(stream.as_bytes()) {
        segments.push(Segment::new());
    }

    for token in Tokens::new(stream.as_bytes()) {
        match token {
            Token::Marker(digits) => {
                if let Some(open) = segments.last_mut() {
                    open.set_text(registry, &buf);
                    buf.clear();
                }
                let mut segment = Segment::new();
                segment.set_eci_text(&String::from_utf8_lossy(digits));
                segments.push(segment);
            }
            Token::Payload(run) => buf.push_str(&String::from_utf8_lossy(run)),
        }
    }

    if let Some(open) = segments.last_mut() {
        open.set_text(registry, &buf);
    }

    #[cfg(feature = "logging")]
    debug!(
        "Parsed {} chars into {} segments",
        stream.len(),
        segments.len()
    );

    segments
}
