//! Marker-byte escaping and the ECI escape sequence
//!
//! The wire format has exactly one escape rule: a literal marker byte (0x5C)
//! inside payload is doubled. No other byte value is ever escaped. The escape
//! sequence itself is the marker byte followed by the six-digit zero-padded
//! ECI value.

use crate::constants::{ECI_DIGITS, ESCAPE_SEQUENCE_LEN, MARKER_BYTE};
use bytes::{BufMut, Bytes, BytesMut};

/// Escape a raw payload: every marker byte becomes two marker bytes
pub fn escape(data: &[u8]) -> Bytes {
    let extra = memchr::memchr_iter(MARKER_BYTE, data).count();
    let mut buf = BytesMut::with_capacity(data.len() + extra);
    for &byte in data {
        buf.put_u8(byte);
        if byte == MARKER_BYTE {
            buf.put_u8(MARKER_BYTE);
        }
    }
    buf.freeze()
}

/// Unescape an escaped payload: every doubled marker byte collapses to one
///
/// A trailing lone marker byte passes through unchanged; only exact
/// 0x5C 0x5C pairs collapse.
pub fn unescape(data: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(data.len());
    let mut pos = 0;
    while pos < data.len() {
        let byte = data[pos];
        buf.put_u8(byte);
        pos += 1;
        if byte == MARKER_BYTE && pos < data.len() && data[pos] == MARKER_BYTE {
            pos += 1;
        }
    }
    buf.freeze()
}

/// Format an ECI value as its canonical six-digit zero-padded text form
pub fn eci_text(eci: u32) -> String {
    format!("{:06}", eci)
}

/// Build the 7-byte escape sequence for an ECI value, e.g. `\000003`
pub fn escape_sequence(eci: u32) -> Bytes {
    let mut buf = BytesMut::with_capacity(ESCAPE_SEQUENCE_LEN);
    buf.put_u8(MARKER_BYTE);
    buf.put_slice(eci_text(eci).as_bytes());
    buf.freeze()
}

/// Check whether a byte run is a complete ECI escape sequence body:
/// six ASCII digits
pub(crate) fn is_digit_run(bytes: &[u8]) -> bool {
    bytes.len() >= ECI_DIGITS && bytes[..ECI_DIGITS].iter().all(u8::is_ascii_digit)
}
