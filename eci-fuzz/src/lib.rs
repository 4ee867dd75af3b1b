//! Fuzzing placeholder for the eci-core parser
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_parse

pub fn fuzz_parse_bytes(data: &[u8]) {
    use eci_core::parse_bytes;

    // Parsing is total - should never panic on any input
    let _ = parse_bytes(data);
}

pub fn fuzz_parse_text(data: &[u8]) {
    use eci_core::{parse_text, CharsetRegistry};

    if let Ok(text) = std::str::from_utf8(data) {
        let registry = CharsetRegistry::new();
        let _ = parse_text(&registry, text);
    }
}

pub fn fuzz_parse_then_compose(data: &[u8]) {
    use eci_core::{compose_bytes, parse_bytes};

    // Whatever the parser produces must compose back without error
    let segments = parse_bytes(data);
    let _ = compose_bytes(&segments);
}
