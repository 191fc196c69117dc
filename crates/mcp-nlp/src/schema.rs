//! Schema-driven field extraction.
//!
//! Each field of an [`ExtractionSchema`] lists trigger keywords. The first
//! keyword present in the text decides the field's value: `true` for
//! boolean fields, the rest of the sentence after the keyword for string
//! fields, and that same text split on commas for array fields.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text after the keyword
    String,
    /// Comma-separated list after the keyword
    Array,
    /// Presence flag
    Boolean,
}

/// One field of an extraction schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name in the output
    pub name: String,
    /// Value type
    pub kind: FieldKind,
    /// Trigger keywords, tried in order
    pub keywords: Vec<String>,
    /// Whether callers must receive this field
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    /// Creates a field spec.
    #[must_use]
    pub fn new(name: &str, kind: FieldKind, keywords: &[&str], required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            required,
        }
    }
}

/// Ordered list of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSchema {
    /// Fields in declaration order
    pub fields: Vec<FieldSpec>,
}

impl ExtractionSchema {
    /// Adds a field.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Extracts all fields from `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_nlp::schema::deployment_schema;
    ///
    /// let values = deployment_schema()
    ///     .extract("Deploy to environments: staging, production. Use postgres.");
    /// assert_eq!(values["environments"], serde_json::json!(["staging", "production"]));
    /// ```
    #[must_use]
    pub fn extract(&self, text: &str) -> BTreeMap<String, Value> {
        let lowered = text.to_lowercase();
        let mut extracted = BTreeMap::new();

        for field in &self.fields {
            let Some(keyword) = field
                .keywords
                .iter()
                .find(|k| !k.is_empty() && lowered.contains(&k.to_lowercase()))
            else {
                continue;
            };

            let value = match field.kind {
                FieldKind::Boolean => Some(Value::Bool(true)),
                FieldKind::String => text_after(text, keyword).map(Value::from),
                FieldKind::Array => text_after(text, keyword).map(|rest| {
                    Value::from(
                        rest.split(',')
                            .map(str::trim)
                            .filter(|v| !v.is_empty())
                            .map(str::to_string)
                            .collect::<Vec<_>>(),
                    )
                }),
            };

            if let Some(value) = value {
                extracted.insert(field.name.clone(), value);
            }
        }

        extracted
    }

    /// Required fields absent from `extracted`.
    #[must_use]
    pub fn missing_required<'a>(&'a self, extracted: &BTreeMap<String, Value>) -> Vec<&'a str> {
        self.fields
            .iter()
            .filter(|f| f.required && !extracted.contains_key(&f.name))
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// Extracts `schema`'s fields from `text`.
#[must_use]
pub fn extract_structured(text: &str, schema: &ExtractionSchema) -> BTreeMap<String, Value> {
    schema.extract(text)
}

/// Text following `keyword` up to the end of the sentence, trimmed.
fn text_after(text: &str, keyword: &str) -> Option<String> {
    let pattern = format!(r"{}[:\s]*([^.!?]*)", regex::escape(keyword));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Fields describing a deployment request.
#[must_use]
pub fn deployment_schema() -> ExtractionSchema {
    ExtractionSchema::default()
        .field(FieldSpec::new(
            "app_name",
            FieldKind::String,
            &["app", "application", "service", "project"],
            true,
        ))
        .field(FieldSpec::new(
            "language",
            FieldKind::String,
            &["python", "node", "java", "go", "language"],
            true,
        ))
        .field(FieldSpec::new(
            "environments",
            FieldKind::Array,
            &["environments", "deploy to", "stages"],
            false,
        ))
        .field(FieldSpec::new(
            "database",
            FieldKind::String,
            &["database", "db", "postgres", "mysql"],
            false,
        ))
}

/// Fields describing a social content request.
#[must_use]
pub fn content_schema() -> ExtractionSchema {
    ExtractionSchema::default()
        .field(FieldSpec::new(
            "platforms",
            FieldKind::Array,
            &["instagram", "twitter", "tiktok", "platforms"],
            true,
        ))
        .field(FieldSpec::new(
            "tone",
            FieldKind::String,
            &["professional", "casual", "funny", "tone"],
            false,
        ))
        .field(FieldSpec::new(
            "include_image",
            FieldKind::Boolean,
            &["image", "photo", "picture", "visual"],
            false,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolean_field() {
        let values = content_schema().extract("Make it visual");
        assert_eq!(values["include_image"], json!(true));
    }

    #[test]
    fn test_string_field_stops_at_sentence_end() {
        let values = content_schema().extract("Tone: playful and light. Thanks!");
        assert_eq!(values["tone"], json!("playful and light"));
    }

    #[test]
    fn test_first_present_keyword_wins() {
        let values = deployment_schema().extract("Use a postgres database: main-db.");
        // "database" precedes "postgres" in the keyword list
        assert_eq!(values["database"], json!("main-db"));
    }

    #[test]
    fn test_missing_required() {
        let schema = deployment_schema();
        let values = schema.extract("nothing relevant");
        assert_eq!(schema.missing_required(&values), vec!["app_name", "language"]);
    }

    #[test]
    fn test_keyword_with_regex_metacharacters() {
        let schema = ExtractionSchema::default().field(FieldSpec::new(
            "lang",
            FieldKind::String,
            &["c++"],
            false,
        ));
        assert_eq!(schema.extract("c++ 20 only.")["lang"], json!("20 only"));
    }

    #[test]
    fn test_empty_text() {
        assert!(content_schema().extract("").is_empty());
    }
}
