//! Constants and limits for the ECI escaping protocol

/// The escape marker byte: a literal backslash (`\`, 0x5C)
pub const MARKER_BYTE: u8 = 0x5C;

/// Number of ASCII digits following the marker byte in an ECI escape sequence
pub const ECI_DIGITS: usize = 6;

/// Total length of an ECI escape sequence: marker byte + six digits
pub const ESCAPE_SEQUENCE_LEN: usize = 1 + ECI_DIGITS;

/// Largest assignable ECI value (six decimal digits)
pub const ECI_MAX: u32 = 999_999;

/// Canonical name of the charset assumed when a segment carries no ECI.
///
/// ISO/IEC 8859-1 is the protocol default: every byte value maps directly to
/// the Unicode code point of the same value.
pub const DEFAULT_CHARSET: &str = "ISO-8859-1";
