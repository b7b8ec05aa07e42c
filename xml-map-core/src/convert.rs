use crate::tree::XmlNode;
use crate::value::{Record, Value};

/// Convert an element tree into a generic [`Value`].
///
/// A leaf element with non-blank text becomes trimmed [`Value::Text`]; a leaf
/// with no text becomes an empty [`Value::Record`]. An element with children
/// becomes a record of its children converted recursively, with repeated
/// sibling tags accumulated into a [`Value::List`] in document order. When an
/// element carries both children and text, the children win and the text is
/// dropped. Attributes are not carried into the converted value.
pub fn element_to_value(node: &XmlNode) -> Value {
    if node.children.is_empty() {
        return match node.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Value::Text(text.to_string()),
            _ => Value::Record(Record::new()),
        };
    }

    let mut record = Record::new();
    for child in &node.children {
        record.push(child.tag.clone(), element_to_value(child));
    }
    Value::Record(record)
}

/// Convert every descendant of `root` named `tag` into a [`Value`],
/// skipping conversions that come out empty.
///
/// Zero matching elements yields an empty vector, never an error.
pub fn collect_records(root: &XmlNode, tag: &str) -> Vec<Value> {
    root.descendants(tag)
        .into_iter()
        .map(element_to_value)
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{collect_records, element_to_value};
    use crate::parser::parse;
    use crate::value::Value;

    fn text(value: &str) -> Value {
        Value::Text(value.to_string())
    }

    #[test]
    fn leaf_text_is_trimmed() {
        let root = parse(b"<Name>  web-server \n</Name>").expect("parse");
        assert_eq!(element_to_value(&root), text("web-server"));
    }

    #[test]
    fn leaf_without_text_becomes_empty_record() {
        let root = parse(b"<IPHost/>").expect("parse");
        let value = element_to_value(&root);
        assert!(value.as_record().is_some());
        assert!(value.is_empty());
    }

    #[test]
    fn children_win_over_mixed_text() {
        let root = parse(b"<Host>stray<Name>a</Name></Host>").expect("parse");
        let record = element_to_value(&root);
        let record = record.as_record().expect("record");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("Name"), Some(&text("a")));
    }

    #[test]
    fn repeated_sibling_tags_become_a_list() {
        let root = parse(
            b"<SourceNetworks>
                <Network>lan</Network>
                <Network>guest</Network>
              </SourceNetworks>",
        )
        .expect("parse");

        let record = element_to_value(&root);
        let record = record.as_record().expect("record");
        let networks = record.get("Network").and_then(Value::as_list).expect("list");
        assert_eq!(networks, &[text("lan"), text("guest")]);
    }

    #[test]
    fn nested_structure_is_preserved() {
        let root = parse(
            b"<FirewallRule>
                <Name>allow-lan-out</Name>
                <NetworkPolicy>
                  <Action>Accept</Action>
                </NetworkPolicy>
              </FirewallRule>",
        )
        .expect("parse");

        let value = element_to_value(&root);
        let rule = value.as_record().expect("record");
        assert_eq!(rule.get("Name"), Some(&text("allow-lan-out")));
        let policy = rule
            .get("NetworkPolicy")
            .and_then(Value::as_record)
            .expect("nested record");
        assert_eq!(policy.get("Action"), Some(&text("Accept")));
    }

    #[test]
    fn collect_records_returns_empty_for_missing_tag() {
        let root = parse(b"<Response><Zone><Name>LAN</Name></Zone></Response>").expect("parse");
        assert!(collect_records(&root, "IPHost").is_empty());
    }

    #[test]
    fn collect_records_skips_empty_matches() {
        let root = parse(b"<Response><IPHost/><IPHost><Name>web</Name></IPHost></Response>")
            .expect("parse");

        let records = collect_records(&root, "IPHost");
        assert_eq!(records.len(), 1);
        let record = records[0].as_record().expect("record");
        assert_eq!(record.get("Name"), Some(&text("web")));
    }
}
