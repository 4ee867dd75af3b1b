//! Integration tests for the complete segments -> escaped stream -> segments flow

use eci_core::{
    compose_bytes, compose_text, list_supported_encodings, parse_bytes, parse_text,
    CharsetRegistry, EciError, Segment,
};

fn segment(eci: Option<u32>, payload: &[u8]) -> Segment {
    let mut seg = Segment::new();
    if let Some(eci) = eci {
        seg.set_eci_value(eci);
    }
    seg.set_payload(payload.to_vec());
    seg
}

#[test]
fn test_full_byte_round_trip() {
    let segments = vec![
        segment(None, b"plain lead-in"),
        segment(Some(26), "caf\u{00E9}".as_bytes()),
        segment(Some(3), &[0x41, 0x5C, 0x42]),
        segment(Some(20), &[0x83, 0x41]),
    ];

    let stream = compose_bytes(&segments).unwrap();
    let parsed = parse_bytes(&stream);

    assert_eq!(parsed.len(), segments.len());
    for (original, reparsed) in segments.iter().zip(&parsed) {
        assert_eq!(original.eci_value(), reparsed.eci_value());
        assert_eq!(original.payload(), reparsed.payload());
    }
}

#[test]
fn test_full_text_round_trip() {
    let registry = CharsetRegistry::new();

    let mut first = Segment::new();
    first.set_charset(&registry, "UTF-8");
    first.set_text(&registry, "caf\u{00E9} \u{4E2D}\u{6587}");

    let mut second = Segment::new();
    second.set_charset(&registry, "latin1");
    second.set_text(&registry, "plain");

    let stream = compose_text(&registry, &[first.clone(), second.clone()]).unwrap();
    let parsed = parse_text(&registry, &stream);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].eci_value(), Some(26));
    assert_eq!(parsed[0].text(&registry), "caf\u{00E9} \u{4E2D}\u{6587}");
    assert_eq!(parsed[1].eci_value(), Some(3));
    assert_eq!(parsed[1].text(&registry), "plain");
}

#[test]
fn test_multi_encoding_stream_preserves_payload_bytes() {
    let registry = CharsetRegistry::new();

    // UTF-16BE "AB" then UTF-8 "AB": same text, different payload bytes
    let stream = "\\000025AB\\000026AB";
    let parsed = parse_text(&registry, stream);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].payload().as_ref(), &[0x00, 0x41, 0x00, 0x42]);
    assert_eq!(parsed[0].text(&registry), "AB");
    assert_eq!(parsed[1].payload().as_ref(), b"AB");
    assert_eq!(parsed[1].text(&registry), "AB");
}

#[test]
fn test_compose_rejects_untagged_middle_segment() {
    let segments = vec![
        segment(Some(3), b"one"),
        segment(None, b"two"),
        segment(Some(26), b"three"),
    ];

    assert_eq!(
        compose_bytes(&segments),
        Err(EciError::MissingEci { index: 1 })
    );
}

#[test]
fn test_parse_is_total_on_marker_noise() {
    // Lone markers, short digit runs, and doubled markers all parse into
    // some segment sequence
    let noisy: &[u8] = b"\\\\\\123\\999999tail\\12345";
    let segments = parse_bytes(noisy);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].eci_value(), None);
    assert_eq!(segments[0].payload().as_ref(), b"\\\\123");
    assert_eq!(segments[1].eci_value(), Some(999_999));
    assert_eq!(segments[1].payload().as_ref(), b"tail\\12345");
}

#[test]
fn test_reparse_after_recompose_is_stable() {
    let original: &[u8] = b"lead\\000026mid\\000003end";
    let once = parse_bytes(original);
    let recomposed = compose_bytes(&once).unwrap();
    assert_eq!(recomposed.as_ref(), original);

    let twice = parse_bytes(&recomposed);
    assert_eq!(once, twice);
}

#[test]
fn test_supported_encodings_listing() {
    let registry = CharsetRegistry::new();
    let infos = list_supported_encodings(&registry);

    assert_eq!(infos.len(), 31);
    assert!(infos.iter().all(|info| !info.charset.is_empty()));
    assert!(infos.iter().all(|info| info.eci_text.len() == 6));

    // The listing serializes cleanly for host applications
    let json = serde_json::to_string(&infos).unwrap();
    assert!(json.contains("\"charset\":\"UTF-8\""));
    assert!(json.contains("\"eci_text\":\"000026\""));
}

#[test]
fn test_set_charset_then_compose() {
    let registry = CharsetRegistry::new();

    let mut lead = Segment::new();
    lead.set_payload(b"untagged".to_vec());

    let mut tagged = Segment::new();
    tagged.set_charset(&registry, "EUC-KR");
    tagged.set_payload(b"data".to_vec());

    let stream = compose_bytes(&[lead, tagged]).unwrap();
    assert_eq!(stream.as_ref(), b"untagged\\000030data");
}
