use std::path::PathBuf;

use pretty_assertions::assert_eq;
use xml_map_core::{collect_records, parse_file, Value};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn extracts_every_matching_element_from_a_response() {
    let root = parse_file(&fixture("fixtures/iphost-response.xml")).expect("fixture parse");
    let records = collect_records(&root, "IPHost");
    assert_eq!(records.len(), 2);

    let first = records[0].as_record().expect("record");
    assert_eq!(first.get("Name").and_then(Value::as_text), Some("web-server"));
    assert_eq!(first.get("IPAddress").and_then(Value::as_text), Some("10.0.0.10"));

    let second = records[1].as_record().expect("record");
    assert_eq!(second.get("Name").and_then(Value::as_text), Some("lan-network"));
    assert_eq!(
        second.get("Subnet").and_then(Value::as_text),
        Some("255.255.255.0")
    );
}

#[test]
fn preserves_nesting_and_repetition_in_complex_records() {
    let root = parse_file(&fixture("fixtures/firewallrule-response.xml")).expect("fixture parse");
    let records = collect_records(&root, "FirewallRule");
    assert_eq!(records.len(), 2);

    let rule = records[0].as_record().expect("record");
    let policy = rule
        .get("NetworkPolicy")
        .and_then(Value::as_record)
        .expect("nested policy");
    assert_eq!(policy.get("Action").and_then(Value::as_text), Some("Accept"));

    // Two <Network> siblings must come back as an ordered list.
    let networks = policy
        .get("SourceNetworks")
        .and_then(Value::as_record)
        .and_then(|n| n.get("Network"))
        .and_then(Value::as_list)
        .expect("network list");
    assert_eq!(
        networks,
        &[
            Value::Text("lan-network".to_string()),
            Value::Text("guest-network".to_string()),
        ]
    );

    // A single <Zone> sibling stays a scalar.
    let zone = policy
        .get("SourceZones")
        .and_then(Value::as_record)
        .and_then(|z| z.get("Zone"))
        .and_then(Value::as_text);
    assert_eq!(zone, Some("LAN"));
}

#[test]
fn missing_tag_yields_empty_vector() {
    let root = parse_file(&fixture("fixtures/iphost-response.xml")).expect("fixture parse");
    assert!(collect_records(&root, "NATRule").is_empty());
}

#[test]
fn conversion_is_deterministic_across_runs() {
    let root = parse_file(&fixture("fixtures/firewallrule-response.xml")).expect("fixture parse");
    let first = collect_records(&root, "FirewallRule");
    let second = collect_records(&root, "FirewallRule");
    assert_eq!(first, second);
}

#[test]
fn records_serialize_to_readable_json() {
    let root = parse_file(&fixture("fixtures/iphost-response.xml")).expect("fixture parse");
    let records = collect_records(&root, "IPHost");
    let json = serde_json::to_string_pretty(&records).expect("serialize");

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("json parse");
    assert_eq!(parsed[0]["Name"], "web-server");
    assert_eq!(parsed[1]["Subnet"], "255.255.255.0");
}
