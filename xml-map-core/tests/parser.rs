use std::path::PathBuf;

use xml_map_core::{parse, parse_file, ParseError};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_attributes_empty_and_nested_elements() {
    let node = parse(
        br#"<Response APIVersion="2000.1">
              <Login><status>Authentication Successful</status></Login>
              <Zone transactionid=""/>
            </Response>"#,
    )
    .expect("parse should succeed");

    assert_eq!(node.tag, "Response");
    assert_eq!(node.attributes.get("APIVersion"), Some(&"2000.1".to_string()));
    assert_eq!(
        node.get_text(&["Login", "status"]),
        Some("Authentication Successful")
    );
    let zone = node.get_child("Zone").expect("empty element kept");
    assert!(zone.children.is_empty());
}

#[test]
fn parses_real_response_fixture() {
    let node = parse_file(&fixture("fixtures/iphost-response.xml")).expect("fixture parse");
    assert_eq!(node.tag, "Response");
    assert_eq!(node.descendants("IPHost").len(), 2);
}

#[test]
fn unescapes_entities_in_text() {
    let node = parse(b"<Name>a &amp; b &lt;c&gt;</Name>").expect("parse should succeed");
    assert_eq!(node.text.as_deref(), Some("a & b <c>"));
}

#[test]
fn rejects_unclosed_element() {
    let err = parse(b"<Response><IPHost>").expect_err("should fail");
    assert!(matches!(err, ParseError::Malformed(_) | ParseError::Xml(_)));
}

#[test]
fn rejects_stray_closing_tag() {
    let err = parse(b"</IPHost>").expect_err("should fail");
    assert!(matches!(err, ParseError::Malformed(_) | ParseError::Xml(_)));
}

#[test]
fn rejects_empty_input() {
    let err = parse(b"").expect_err("should fail");
    assert!(matches!(err, ParseError::Malformed(_)));
}

#[test]
fn reports_io_error_for_missing_file() {
    let err = parse_file(&fixture("fixtures/does-not-exist.xml")).expect_err("should fail");
    assert!(matches!(err, ParseError::Io(_)));
}
