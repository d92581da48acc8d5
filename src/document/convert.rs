//! Conversion of [`YamlNode`] trees into `serde_yaml` values.
//!
//! Used to render query results back as YAML. Scalars are typed by their
//! short tag, so `42` becomes a number while `"42"` stays a string.

use super::node::{NodeKind, TreeNode, YamlNode};
use super::tag;
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Number, Value};

/// Converts a node and everything below it to a `serde_yaml::Value`.
///
/// A document converts to its root value. Aliases cannot be expressed in a
/// `serde_yaml::Value` and are rendered as the string `*name`.
///
/// # Example
///
/// ```
/// use yit::document::convert::to_serde_value;
/// use yit::document::parser::parse_yaml;
///
/// let doc = parse_yaml("count: 3\nname: \"3\"").unwrap();
/// let value = to_serde_value(&doc);
/// assert_eq!(value["count"], serde_yaml::Value::from(3));
/// assert_eq!(value["name"], serde_yaml::Value::from("3"));
/// ```
pub fn to_serde_value(node: &YamlNode) -> Value {
    match node.kind() {
        NodeKind::Document => node
            .children()
            .first()
            .map(to_serde_value)
            .unwrap_or(Value::Null),
        NodeKind::Sequence => with_custom_tag(
            node,
            Value::Sequence(node.children().iter().map(to_serde_value).collect()),
        ),
        NodeKind::Mapping => {
            let map: Mapping = node
                .pairs()
                .map(|pair| (to_serde_value(&pair[0]), to_serde_value(&pair[1])))
                .collect();
            with_custom_tag(node, Value::Mapping(map))
        }
        NodeKind::Scalar => with_custom_tag(node, scalar_value(node)),
        NodeKind::Alias => Value::String(format!("*{}", node.value())),
    }
}

fn scalar_value(node: &YamlNode) -> Value {
    let text = node.value();
    match node.short_tag() {
        tag::NULL => Value::Null,
        tag::BOOL => Value::Bool(text.eq_ignore_ascii_case("true")),
        tag::INT => parse_int(text)
            .map(|i| Value::Number(Number::from(i)))
            .unwrap_or_else(|| Value::String(text.to_string())),
        tag::FLOAT => parse_float(text)
            .map(|f| Value::Number(Number::from(f)))
            .unwrap_or_else(|| Value::String(text.to_string())),
        _ => Value::String(text.to_string()),
    }
}

fn parse_int(text: &str) -> Option<i64> {
    if let Some(hex) = text.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).ok();
    }
    if let Some(octal) = text.strip_prefix("0o") {
        return i64::from_str_radix(octal, 8).ok();
    }
    text.parse().ok()
}

fn parse_float(text: &str) -> Option<f64> {
    match text {
        ".nan" | ".NaN" | ".NAN" => Some(f64::NAN),
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => Some(f64::NEG_INFINITY),
        _ => text.parse().ok(),
    }
}

/// Wraps `value` in a `Tagged` value when the node carries a tag outside the
/// core schema.
fn with_custom_tag(node: &YamlNode, value: Value) -> Value {
    match node.explicit_tag() {
        Some(custom) if !custom.starts_with("!!") => Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(custom),
            value,
        })),
        _ => value,
    }
}
