//! Error types for ECI operations

/// Errors that can occur during ECI stream operations
///
/// Parsing is total: every byte sequence parses into some valid segment
/// sequence, so only composition and the strict segment constructor can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EciError {
    /// A non-first segment has no ECI assigned
    #[error("segment {index} has no ECI: every non-first segment must declare its encoding")]
    MissingEci {
        /// Zero-based position of the offending segment in the sequence.
        index: usize,
    },

    /// An ECI value outside [0, 999999] was passed to a strict constructor
    #[error("ECI value {0} is out of range (maximum 999999)")]
    InvalidEci(u32),
}
