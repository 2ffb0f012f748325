//! Array recovery through the staged pipeline.

use serde_json::json;
use sift::testing::Sample;
use sift::{extract_array, parse_json_array, Provenance};

#[test]
fn test_fenced_array_comes_from_markdown() {
    let extraction = extract_array(Sample::FencedArray.source()).unwrap();
    assert_eq!(extraction.provenance, Provenance::Markdown);
    assert_eq!(extraction.value, json!(["a", "b"]));
}

#[test]
fn test_bare_array_comes_from_raw() {
    let extraction = extract_array("the list: [1, 2, 3] as asked").unwrap();
    assert_eq!(extraction.provenance, Provenance::Raw);
    assert_eq!(extraction.value, json!([1, 2, 3]));
}

#[test]
fn test_fenced_array_of_objects() {
    let extraction = extract_array("```json\n[{\"id\": 1}, {\"id\": 2}]\n```").unwrap();
    assert_eq!(extraction.provenance, Provenance::Markdown);
    assert_eq!(extraction.value, json!([{"id": 1}, {"id": 2}]));
}

#[test]
fn test_bare_array_of_objects_is_shadowed_by_object_span() {
    // The bare locator prefers the inner object braces to the array
    // brackets, and that span never yields an array.
    assert!(extract_array("[{\"id\": 1}, {\"id\": 2}]").is_none());
    assert_eq!(parse_json_array("[{\"id\": 1}]"), None);
}

#[test]
fn test_empty_array_is_no_data() {
    assert!(extract_array("[]").is_none());
}

#[test]
fn test_fenced_empty_array_stops_the_pipeline() {
    // The markdown stage parses [] and the pipeline stops there instead
    // of trying later stages.
    assert!(extract_array("```json\n[]\n```\nbut also [1, 2]").is_none());
}

#[test]
fn test_object_is_the_wrong_shape() {
    assert!(extract_array("{\"a\": 1}").is_none());
}

#[test]
fn test_object_candidate_shadows_later_array() {
    // Span location prefers the object braces, so the array after them is
    // never considered.
    assert!(extract_array("{\"a\": 1} then [2, 3]").is_none());
}

#[test]
fn test_no_pair_salvage_for_arrays() {
    assert!(extract_array("\"key\": \"value\"").is_none());
}

#[test]
fn test_plain_prose_yields_nothing() {
    assert!(extract_array(Sample::PlainProse.source()).is_none());
}

#[test]
fn test_parse_json_array_returns_bare_value() {
    let items = parse_json_array("```json\n[\"x\"]\n```").unwrap();
    assert_eq!(items, vec![json!("x")]);
}

#[test]
fn test_parse_json_array_rejects_objects() {
    assert!(parse_json_array("{\"a\": 1}").is_none());
}
