//! # ECI Core
//!
//! The Extended Channel Interpretation (ECI) escaping protocol used by barcode
//! symbologies to multiplex several character-encoded runs inside one data
//! stream.
//!
//! An escaped stream is a flat sequence of bytes (or characters) in which a
//! `\` followed by six ASCII digits switches the active character encoding,
//! and a literal `\` in payload is doubled. This crate converts such streams
//! into an ordered sequence of [`Segment`]s and back.
//!
//! ## Modules
//!
//! - `constants`: Marker grammar constants and ECI value limits
//! - `types`: The `Segment` entity
//! - `escape`: Marker-byte escaping and the ECI escape sequence
//! - `parser`: Escaped stream -> segments (text and byte forms)
//! - `composer`: Segments -> escaped stream (text and byte forms)
//! - `registry`: Numeric ECI <-> charset name lookup table
//! - `codec`: Charset name -> text decoder/encoder resolution

#![warn(missing_docs)]

pub mod codec;
pub mod composer;
pub mod constants;
pub mod error;
pub mod escape;
pub mod parser;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use composer::{compose_bytes, compose_text};
pub use error::EciError;
pub use parser::{parse_bytes, parse_text};
pub use registry::{CharsetRegistry, EciInfo};
pub use types::Segment;

/// Result type alias for ECI operations
pub type Result<T> = core::result::Result<T, EciError>;

/// List every supported encoding known to the given registry.
///
/// Delegates to [`CharsetRegistry::supported_encodings`]; the internal
/// "no charset" default entry is excluded.
pub fn list_supported_encodings(registry: &CharsetRegistry) -> Vec<EciInfo> {
    registry.supported_encodings()
}
