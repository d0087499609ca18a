//! Placeholder substitution against a source record

use std::collections::HashSet;

use super::placeholder::parse_placeholders;
use crate::escape::escape_html;
use crate::record::SourceRecord;

/// Rewrite `template` with values from `record`
///
/// Tokens are applied in order of discovery, each replacing every occurrence
/// of its exact text in the output built so far:
/// - field present: the rendered value, HTML-escaped unless `field_name` is
///   in `raw_fields`
/// - field absent, optional token: removed
/// - field absent, required token: left as literal text
pub fn resolve(
    template: &str,
    record: SourceRecord<'_>,
    field_name: &str,
    raw_fields: &HashSet<String>,
) -> String {
    let tokens = parse_placeholders(template);
    if tokens.is_empty() {
        return template.to_string();
    }

    let raw = raw_fields.contains(field_name);

    tokens.iter().fold(template.to_string(), |output, token| {
        match record.get(&token.name) {
            Some(value) => {
                let rendered = value.render();
                let replacement = if raw { rendered } else { escape_html(&rendered) };
                output.replace(&token.full_match, &replacement)
            }
            None if token.optional => output.replace(&token.full_match, ""),
            None => {
                log::trace!(
                    "Field '{}': placeholder {} has no value, left as-is",
                    field_name,
                    token.full_match
                );
                output
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Attributes, Value};
    use serde_json::json;

    fn no_raw() -> HashSet<String> {
        HashSet::new()
    }

    fn raw(fields: &[&str]) -> HashSet<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_template_without_placeholders_unchanged() {
        let json = json!({"name": "x"});
        let record = SourceRecord::from_json(&json).unwrap();
        let template = r#"<span class="badge">static</span>"#;
        assert_eq!(resolve(template, record, "name", &no_raw()), template);
    }

    #[test]
    fn test_present_value_substituted_everywhere() {
        let json = json!({"id": 42, "name": "Ada"});
        let record = SourceRecord::from_json(&json).unwrap();
        let out = resolve(
            r#"<a href="/u/{id}" title="{name}">{name} #{id}</a>"#,
            record,
            "name",
            &no_raw(),
        );
        assert_eq!(out, r#"<a href="/u/42" title="Ada">Ada #42</a>"#);
    }

    #[test]
    fn test_falsy_but_present_values_substituted() {
        let json = json!({"count": 0, "note": "", "flag": false, "gone": null});
        let record = SourceRecord::from_json(&json).unwrap();
        let out = resolve("[{count}][{note}][{flag}][{gone}]", record, "count", &no_raw());
        assert_eq!(out, "[0][][false][]");
    }

    #[test]
    fn test_optional_absent_removed() {
        let json = json!({"name": "Ada"});
        let record = SourceRecord::from_json(&json).unwrap();
        let out = resolve("{name}{title?} {title?}!", record, "name", &no_raw());
        assert_eq!(out, "Ada !");
    }

    #[test]
    fn test_optional_present_substituted() {
        let json = json!({"title": "Dr"});
        let record = SourceRecord::from_json(&json).unwrap();
        assert_eq!(resolve("{title?}.", record, "title", &no_raw()), "Dr.");
    }

    #[test]
    fn test_required_absent_left_literal() {
        let json = json!({"name": "Ada"});
        let record = SourceRecord::from_json(&json).unwrap();
        let out = resolve("{name} ({email})", record, "name", &no_raw());
        assert_eq!(out, "Ada ({email})");
    }

    #[test]
    fn test_substituted_text_seen_by_later_tokens() {
        // "{id}" inserted for {name} is replaced when the {id} token runs
        let json = json!({"name": "{id}", "id": 5});
        let record = SourceRecord::from_json(&json).unwrap();
        assert_eq!(resolve("{name}|{id}", record, "name", &no_raw()), "5|5");
    }

    #[test]
    fn test_values_escaped_by_default() {
        let json = json!({"bio": "<b>Tom & Jerry</b>"});
        let record = SourceRecord::from_json(&json).unwrap();
        let out = resolve("<td>{bio}</td>", record, "bio", &no_raw());
        assert_eq!(out, "<td>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</td>");
    }

    #[test]
    fn test_raw_field_not_escaped() {
        let json = json!({"bio": "<b>Tom & Jerry</b>"});
        let record = SourceRecord::from_json(&json).unwrap();
        let out = resolve("<td>{bio}</td>", record, "bio", &raw(&["bio"]));
        assert_eq!(out, "<td><b>Tom & Jerry</b></td>");
    }

    #[test]
    fn test_raw_policy_follows_rendered_field_not_token() {
        // "name" is raw, but the pattern belongs to "bio"
        let json = json!({"name": "<i>x</i>"});
        let record = SourceRecord::from_json(&json).unwrap();
        let out = resolve("{name}", record, "bio", &raw(&["name"]));
        assert_eq!(out, "&lt;i&gt;x&lt;/i&gt;");
    }

    #[test]
    fn test_object_record() {
        struct Item;
        impl Attributes for Item {
            fn attribute(&self, name: &str) -> Option<Value> {
                (name == "sku").then(|| Value::from("A-1"))
            }
        }

        let item = Item;
        let out = resolve(
            "{sku}/{price?}/{qty}",
            SourceRecord::object(&item),
            "sku",
            &no_raw(),
        );
        assert_eq!(out, "A-1//{qty}");
    }
}
