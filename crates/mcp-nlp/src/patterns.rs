//! Named regex extraction.
//!
//! A [`PatternSet`] is an ordered list of case-insensitive regexes. For each
//! pattern that matches, extraction yields the first capture group of every
//! match (or the whole match when the pattern has no groups).
//!
//! # Examples
//!
//! ```
//! use mcp_framework_nlp::patterns::{Extracted, PatternSet};
//!
//! let patterns = PatternSet::new(&[
//!     ("port", r"port\s+(\d+)"),
//!     ("mention", r"@([a-zA-Z0-9_]+)"),
//! ]).unwrap();
//!
//! let found = patterns.extract("Expose PORT 8080 and ping @ops and @dev");
//! assert_eq!(found["port"], Extracted::Single("8080".to_string()));
//! assert_eq!(found["mention"].all(), vec!["ops", "dev"]);
//! ```

use mcp_framework_core::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::collections::BTreeMap;

/// Values extracted by one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Extracted {
    /// Exactly one match
    Single(String),
    /// Several matches, in text order
    Multiple(Vec<String>),
}

impl Extracted {
    /// First extracted value.
    #[must_use]
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Multiple(values) => values.first().map_or("", String::as_str),
        }
    }

    /// All extracted values.
    #[must_use]
    pub fn all(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Ordered set of named case-insensitive patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<(String, Regex)>,
}

impl PatternSet {
    /// Compiles `(name, pattern)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] naming the first pattern that
    /// fails to compile.
    pub fn new(patterns: &[(&str, &str)]) -> Result<Self> {
        let compiled = patterns
            .iter()
            .map(|(name, pattern)| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| ((*name).to_string(), re))
                    .map_err(|e| Error::ValidationError {
                        field: (*name).to_string(),
                        reason: format!("invalid pattern: {e}"),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns: compiled })
    }

    /// Pattern names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(name, _)| name.as_str())
    }

    /// Runs every pattern against `text`; patterns without matches are omitted.
    #[must_use]
    pub fn extract(&self, text: &str) -> BTreeMap<String, Extracted> {
        let mut extracted = BTreeMap::new();

        for (name, re) in &self.patterns {
            let mut values: Vec<String> = re
                .captures_iter(text)
                .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
                .map(|m| m.as_str().to_string())
                .collect();

            let value = match values.len() {
                0 => continue,
                1 => Extracted::Single(values.remove(0)),
                _ => Extracted::Multiple(values),
            };
            extracted.insert(name.clone(), value);
        }

        extracted
    }

    /// First value captured by the named pattern, if any.
    #[must_use]
    pub fn first(&self, name: &str, text: &str) -> Option<String> {
        self.patterns
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, re)| re.captures(text))
            .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_names_field() {
        let err = PatternSet::new(&[("broken", r"(unclosed")]).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_case_insensitive() {
        let set = PatternSet::new(&[("version", r"version\s+([0-9]+(?:\.[0-9]+)*)")]).unwrap();
        assert_eq!(set.first("version", "VERSION 2.1.0"), Some("2.1.0".to_string()));
    }

    #[test]
    fn test_no_group_returns_whole_match() {
        let set = PatternSet::new(&[("emoji", r"(?:with|add|include)\s+emojis?")]).unwrap();
        let found = set.extract("Add emojis please");
        assert_eq!(found["emoji"].first(), "Add emojis");
    }

    #[test]
    fn test_unmatched_patterns_omitted() {
        let set = PatternSet::new(&[("port", r"port\s+(\d+)")]).unwrap();
        assert!(set.extract("no numbers here").is_empty());
        assert_eq!(set.first("port", "nothing"), None);
        assert_eq!(set.first("missing", "port 1"), None);
    }

    #[test]
    fn test_names_in_order() {
        let set = PatternSet::new(&[("b", "b"), ("a", "a")]).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_serializes_untagged() {
        let single = serde_json::to_value(Extracted::Single("x".to_string())).unwrap();
        assert_eq!(single, serde_json::json!("x"));
        let multi =
            serde_json::to_value(Extracted::Multiple(vec!["a".to_string(), "b".to_string()]))
                .unwrap();
        assert_eq!(multi, serde_json::json!(["a", "b"]));
    }
}
