//! Property and scale tests for decoding, extraction and parsing.

use cb_core::codec::{extract_from_bytes, extract_from_text};
use cb_core::snippet::{detect_types, ElementType, XmlValidatingParser};
use cb_core::ByteDecoder;
use proptest::prelude::*;
use std::time::{Duration, Instant};

const SNIPPET: &str = r##"<fmxmlsnippet type="FMObjectList"><Step enable="True" id="89" name="# (comment)"/></fmxmlsnippet>"##;

/// Arbitrary bytes that cannot complete a marker on their own.
fn noise_byte() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("no angle brackets", |b| *b != b'<' && *b != b'>')
}

/// Marker fragments strictly shorter than the full markers.
fn fragment() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(b"<fmxml".to_vec()),
        Just(b"<fmxmlsnip".to_vec()),
        Just(b"</fmxmlsnippet".to_vec()),
        Just(b"fmxmlsnippet".to_vec()),
    ]
}

fn noise() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(noise_byte(), 0..48),
        prop::option::of(fragment()),
        prop::collection::vec(noise_byte(), 0..48),
    )
        .prop_map(|(mut head, fragment, tail)| {
            head.extend(fragment.unwrap_or_default());
            head.extend(tail);
            head
        })
}

proptest! {
    #[test]
    fn span_survives_surrounding_noise(prefix in noise(), suffix in noise()) {
        let mut bytes = prefix;
        bytes.extend_from_slice(SNIPPET.as_bytes());
        bytes.extend(suffix);

        prop_assert_eq!(extract_from_bytes(&bytes), Some(SNIPPET.to_string()));
    }

    #[test]
    fn decoding_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let decoded = ByteDecoder::generic().decode(&bytes);
        prop_assert!(!decoded.text().contains('\0'));
        let _ = ByteDecoder::text_only().decode(&bytes);
        let _ = extract_from_bytes(&bytes);
    }
}

#[test]
fn test_two_thousand_fields_parse_in_order() {
    let body: String = (0..2000)
        .map(|i| format!("<FieldDefinition id=\"{i}\" name=\"Field_{i:04}\" fieldType=\"Normal\"/>"))
        .collect();
    let xml = format!("<fmxmlsnippet type=\"FMObjectList\">{body}</fmxmlsnippet>");

    let started = Instant::now();
    let model = XmlValidatingParser::new().parse(&xml).unwrap();
    assert!(started.elapsed() < Duration::from_secs(5));

    assert_eq!(model.field_names().len(), 2000);
    assert_eq!(model.field_names()[0], "Field_0000");
    assert_eq!(model.field_names()[1999], "Field_1999");
    assert!(model
        .field_names()
        .windows(2)
        .all(|pair| pair[0] < pair[1]));
    assert_eq!(model.count(ElementType::Fields), 2000);
    assert_eq!(model.raw_xml(), xml);
}

#[test]
fn test_text_path_and_keyword_summary_agree_on_simple_snippet() {
    let text = format!("Noise before\n{SNIPPET}\nnoise after");
    let span = extract_from_text(&text).unwrap();
    let model = XmlValidatingParser::new().parse(&span).unwrap();
    assert_eq!(model.element_types(), &detect_types(&span));
}
