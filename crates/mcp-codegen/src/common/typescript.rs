//! TypeScript naming and type helpers.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_codegen::common::typescript::{schema_to_typescript, to_camel_case};
//! use serde_json::json;
//!
//! assert_eq!(to_camel_case("schedule_post"), "schedulePost");
//!
//! let ts = schema_to_typescript(&json!({"type": "array", "items": {"type": "string"}}));
//! assert_eq!(ts, "string[]");
//! ```

use serde::Serialize;
use serde_json::Value;

/// Converts a `snake_case` or `kebab-case` name to camelCase.
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::common::typescript::to_camel_case;
///
/// assert_eq!(to_camel_case("send_message"), "sendMessage");
/// assert_eq!(to_camel_case("get-user-data"), "getUserData");
/// assert_eq!(to_camel_case("hello"), "hello");
/// ```
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

/// Converts a `snake_case` or `kebab-case` name to PascalCase.
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::common::typescript::to_pascal_case;
///
/// assert_eq!(to_pascal_case("send_message"), "SendMessage");
/// assert_eq!(to_pascal_case("social-media-server"), "SocialMediaServer");
/// ```
#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    let camel = to_camel_case(name);
    let mut chars = camel.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Maps a JSON Schema primitive type name to a TypeScript type.
#[must_use]
pub fn json_type_to_typescript(json_type: &str) -> &'static str {
    match json_type {
        "string" => "string",
        "number" | "integer" => "number",
        "boolean" => "boolean",
        "array" => "unknown[]",
        "object" => "Record<string, unknown>",
        "null" => "null",
        _ => "unknown",
    }
}

/// Converts a JSON Schema to an inline TypeScript type.
///
/// Objects with properties become `{ key: T; other?: U }` on one line,
/// arrays use their item type, `enum` of strings becomes a union of
/// literals.
#[must_use]
pub fn schema_to_typescript(schema: &Value) -> String {
    let Some(obj) = schema.as_object() else {
        return "unknown".to_string();
    };

    if let Some(variants) = obj.get("enum").and_then(Value::as_array) {
        let literals: Vec<String> = variants
            .iter()
            .filter_map(Value::as_str)
            .map(string_literal)
            .collect();
        if !literals.is_empty() {
            return literals.join(" | ");
        }
    }

    match obj.get("type").and_then(Value::as_str).unwrap_or("unknown") {
        "object" => {
            let fields: Vec<String> = extract_properties(schema)
                .into_iter()
                .map(|p| {
                    let marker = if p.required { "" } else { "?" };
                    format!("{}{marker}: {}", p.key, p.ts_type)
                })
                .collect();
            if fields.is_empty() {
                "Record<string, unknown>".to_string()
            } else {
                format!("{{ {} }}", fields.join("; "))
            }
        }
        "array" => obj.get("items").map_or_else(
            || "unknown[]".to_string(),
            |items| {
                let inner = schema_to_typescript(items);
                if inner.contains(' ') {
                    format!("Array<{inner}>")
                } else {
                    format!("{inner}[]")
                }
            },
        ),
        other => json_type_to_typescript(other).to_string(),
    }
}

/// A top-level property of an object schema, ready for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDef {
    /// Property name
    pub name: String,
    /// Name as an object key, see [`property_key`]
    pub key: String,
    /// TypeScript type
    pub ts_type: String,
    /// Whether the property is listed in `required`
    pub required: bool,
    /// Schema description, if any
    pub description: Option<String>,
}

/// Extracts the top-level properties of an object schema, sorted by name.
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::common::typescript::extract_properties;
/// use serde_json::json;
///
/// let props = extract_properties(&json!({
///     "type": "object",
///     "properties": {"text": {"type": "string"}, "count": {"type": "integer"}},
///     "required": ["text"]
/// }));
///
/// assert_eq!(props[0].name, "count");
/// assert!(!props[0].required);
/// assert_eq!(props[1].ts_type, "string");
/// ```
#[must_use]
pub fn extract_properties(schema: &Value) -> Vec<PropertyDef> {
    let Some(props) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut properties: Vec<PropertyDef> = props
        .iter()
        .map(|(name, prop)| PropertyDef {
            name: name.clone(),
            key: property_key(name),
            ts_type: schema_to_typescript(prop),
            required: required.contains(&name.as_str()),
            description: prop
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
        .collect();

    properties.sort_by(|a, b| a.name.cmp(&b.name));
    properties
}

/// Renders a property name as a TypeScript object key.
///
/// Identifiers are used as they are; anything else is quoted.
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::common::typescript::property_key;
///
/// assert_eq!(property_key("user_id"), "user_id");
/// assert_eq!(property_key("user-id"), r#""user-id""#);
/// ```
#[must_use]
pub fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Quotes `value` as a TypeScript string literal.
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::common::typescript::string_literal;
///
/// assert_eq!(string_literal("it's \"done\""), r#""it's \"done\"""#);
/// ```
#[must_use]
pub fn string_literal(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_camel_case_separators() {
        assert_eq!(to_camel_case("a_b_c"), "aBC");
        assert_eq!(to_camel_case("_leading"), "leading");
        assert_eq!(to_camel_case("trailing_"), "trailing");
        assert_eq!(to_camel_case("mixed-sep_name"), "mixedSepName");
    }

    #[test]
    fn test_to_pascal_case_empty() {
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_json_type_to_typescript() {
        assert_eq!(json_type_to_typescript("integer"), "number");
        assert_eq!(json_type_to_typescript("array"), "unknown[]");
        assert_eq!(json_type_to_typescript("mystery"), "unknown");
    }

    #[test]
    fn test_schema_object_inline() {
        let ts = schema_to_typescript(&json!({
            "type": "object",
            "properties": {"name": {"type": "string"}, "age": {"type": "number"}},
            "required": ["name"]
        }));
        assert_eq!(ts, "{ age?: number; name: string }");
    }

    #[test]
    fn test_property_key_quoting() {
        assert_eq!(property_key("$ref"), "$ref");
        assert_eq!(property_key("_private1"), "_private1");
        assert_eq!(property_key("a b"), r#""a b""#);
        assert_eq!(property_key("1st"), r#""1st""#);
        assert_eq!(property_key(""), r#""""#);
        assert_eq!(property_key("say\"hi"), r#""say\"hi""#);
    }

    #[test]
    fn test_schema_non_identifier_keys_quoted() {
        let ts = schema_to_typescript(&json!({
            "type": "object",
            "properties": {
                "user-id": {"type": "string"},
                "nested": {"type": "object", "properties": {"a b": {"type": "string"}}}
            },
            "required": ["nested"]
        }));
        assert_eq!(ts, r#"{ nested: { "a b"?: string }; "user-id"?: string }"#);
    }

    #[test]
    fn test_schema_enum_and_nested_array() {
        assert_eq!(
            schema_to_typescript(&json!({"enum": ["a", "b"]})),
            r#""a" | "b""#
        );
        assert_eq!(
            schema_to_typescript(&json!({
                "type": "array",
                "items": {"type": "object", "properties": {"x": {"type": "number"}}}
            })),
            "Array<{ x?: number }>"
        );
    }

    #[test]
    fn test_schema_without_object_is_unknown() {
        assert_eq!(schema_to_typescript(&json!("string")), "unknown");
        assert_eq!(schema_to_typescript(&json!({"type": "object"})), "Record<string, unknown>");
    }

    #[test]
    fn test_extract_properties_descriptions() {
        let props = extract_properties(&json!({
            "type": "object",
            "properties": {"platform": {"type": "string", "description": "Target platform"}}
        }));
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].description.as_deref(), Some("Target platform"));
        assert!(extract_properties(&json!({"type": "string"})).is_empty());
    }

    #[test]
    fn test_string_literal_escapes_newlines() {
        assert_eq!(string_literal("a\nb"), r#""a\nb""#);
    }
}
