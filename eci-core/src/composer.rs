//! Segments -> escaped stream (text and byte forms)
//!
//! The inverse of the parser: walk the segments in order and concatenate
//! each one's escape sequence and escaped payload. Order is transmission
//! order; adjacent segments are never merged, even when they share an ECI.

use crate::error::EciError;
use crate::registry::CharsetRegistry;
use crate::types::Segment;
use bytes::{BufMut, Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::debug;

/// Every segment after the first must carry an ECI; the leading segment may
/// be un-tagged default-charset content. Checked up front so a failing call
/// produces no partial output.
fn validate_ordering(segments: &[Segment]) -> Result<(), EciError> {
    for (index, segment) in segments.iter().enumerate().skip(1) {
        if segment.eci_value().is_none() {
            return Err(EciError::MissingEci { index });
        }
    }
    Ok(())
}

/// Compose an ordered sequence of segments into an escaped byte stream
///
/// Fails with [`EciError::MissingEci`] when any non-first segment has no ECI.
pub fn compose_bytes(segments: &[Segment]) -> Result<Bytes, EciError> {
    validate_ordering(segments)?;

    let mut buf = BytesMut::new();
    for segment in segments {
        if let Some(sequence) = segment.escape_sequence() {
            buf.put_slice(&sequence);
        }
        buf.put_slice(&segment.escaped_payload());
    }

    #[cfg(feature = "logging")]
    debug!(
        "Composed {} segments into {} bytes",
        segments.len(),
        buf.len()
    );

    Ok(buf.freeze())
}

/// Compose an ordered sequence of segments into an escaped text stream
///
/// Each segment contributes its marker text (when an ECI is set) followed by
/// its escaped payload rendered through its own charset. Fails with
/// [`EciError::MissingEci`] when any non-first segment has no ECI.
pub fn compose_text(registry: &CharsetRegistry, segments: &[Segment]) -> Result<String, EciError> {
    validate_ordering(segments)?;

    let mut out = String::new();
    for segment in segments {
        let eci = segment.eci_text();
        if !eci.is_empty() {
            out.push('\\');
            out.push_str(&eci);
        }
        out.push_str(&segment.escaped_text(registry));
    }

    #[cfg(feature = "logging")]
    debug!(
        "Composed {} segments into {} chars",
        segments.len(),
        out.len()
    );

    Ok(out)
}
