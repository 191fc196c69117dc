//! Keyword-based category extraction.
//!
//! Scans free text against a [`KeywordCategoryMap`] and reports, for every
//! category with at least one hit, the fraction of that category's keywords
//! found in the text. Matching is case-insensitive and never fails: empty or
//! unmatched input yields an empty [`ExtractionResult`].
//!
//! # Examples
//!
//! ```
//! use mcp_framework_nlp::keywords::{KeywordCategoryMap, KeywordExtractor};
//!
//! let map = KeywordCategoryMap::new()
//!     .with_category("twitter", ["twitter", "tweet", "thread"])
//!     .with_category("tiktok", ["tiktok", "video"]);
//!
//! let result = KeywordExtractor::new().extract("Write a TWEET thread", &map);
//! assert_eq!(result.names(), vec!["twitter"]);
//! assert!((result.confidence("twitter").unwrap() - 2.0 / 3.0).abs() < 1e-9);
//! ```

use mcp_framework_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One category and its distinct, lower-cased trigger keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategory {
    /// Category name
    pub name: String,
    /// Distinct lower-cased keywords, in first-seen order
    pub keywords: Vec<String>,
}

/// Ordered mapping from category name to its keyword set.
///
/// Keywords are trimmed, lower-cased and de-duplicated on insertion, so the
/// size of a category's keyword set is well defined. Category order is
/// insertion order and is used to break ties in [`ExtractionResult::best`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCategoryMap {
    categories: Vec<KeywordCategory>,
}

#[derive(Deserialize)]
struct RawMap {
    #[serde(default)]
    category: Vec<KeywordCategory>,
}

impl KeywordCategoryMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from static `(category, keywords)` pairs.
    #[must_use]
    pub fn from_static(table: &[(&str, &[&str])]) -> Self {
        let mut map = Self::new();
        for (name, keywords) in table {
            map.insert(*name, keywords.iter().copied());
        }
        map
    }

    /// Parses a map from TOML.
    ///
    /// ```toml
    /// [[category]]
    /// name = "mastodon"
    /// keywords = ["mastodon", "toot", "fediverse"]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the TOML is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_nlp::keywords::KeywordCategoryMap;
    ///
    /// let map = KeywordCategoryMap::from_toml_str(r#"
    ///     [[category]]
    ///     name = "mastodon"
    ///     keywords = ["Mastodon", "toot", "toot"]
    /// "#).unwrap();
    /// assert_eq!(map.get("mastodon").unwrap().keywords, vec!["mastodon", "toot"]);
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let raw: RawMap = toml::from_str(input).map_err(|e| Error::SerializationError {
            message: format!("Failed to parse keyword map TOML: {e}"),
            source: None,
        })?;

        let mut map = Self::new();
        for category in raw.category {
            map.insert(category.name, category.keywords);
        }
        Ok(map)
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_category<I, S>(mut self, name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(name, keywords);
        self
    }

    /// Inserts a category, replacing any existing category with that name
    /// in place.
    ///
    /// Blank keywords are dropped.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !distinct.contains(&keyword) {
                distinct.push(keyword);
            }
        }

        let category = KeywordCategory {
            name: name.into(),
            keywords: distinct,
        };

        match self.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    /// Looks up a category by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeywordCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Iterates over categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &KeywordCategory> {
        self.categories.iter()
    }

    /// Iterates over every keyword of every category.
    pub fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.keywords.iter().map(String::as_str))
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the map has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// How a keyword must appear in the text to count as a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The keyword must not be glued to letters or digits on a side where
    /// the keyword itself starts or ends with a letter or digit
    /// (`go` matches "in go," but not "google").
    #[default]
    WholeWord,
    /// Plain substring containment.
    Substring,
}

/// A matched category with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatch {
    /// Category name
    pub category: String,
    /// Distinct keywords found, in keyword-set order
    pub matched: Vec<String>,
    /// `matched.len() / keyword set size`, in `(0, 1]`
    pub confidence: f64,
}

/// Result of one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The input text as given
    pub text: String,
    /// Matched categories in map order; zero-confidence categories never appear
    pub matches: Vec<CategoryMatch>,
    /// Always `true`; extraction cannot fail
    pub success: bool,
}

impl ExtractionResult {
    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matched categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Looks up a matched category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&CategoryMatch> {
        self.matches.iter().find(|m| m.category == category)
    }

    /// Confidence of a matched category.
    #[must_use]
    pub fn confidence(&self, category: &str) -> Option<f64> {
        self.get(category).map(|m| m.confidence)
    }

    /// Returns `true` if the category matched.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Matched category names in map order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.category.as_str()).collect()
    }

    /// Highest-confidence match; the earliest category wins ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_nlp::keywords::{KeywordCategoryMap, KeywordExtractor};
    ///
    /// let map = KeywordCategoryMap::new()
    ///     .with_category("staging", ["staging", "qa"])
    ///     .with_category("production", ["prod", "production"]);
    ///
    /// let result = KeywordExtractor::new().extract("ship to qa then prod", &map);
    /// assert_eq!(result.best().unwrap().category, "staging");
    /// ```
    #[must_use]
    pub fn best(&self) -> Option<&CategoryMatch> {
        self.matches.iter().fold(None, |best: Option<&CategoryMatch>, m| match best {
            Some(b) if b.confidence >= m.confidence => Some(b),
            _ => Some(m),
        })
    }

    /// Category → confidence view.
    #[must_use]
    pub fn confidence_map(&self) -> BTreeMap<String, f64> {
        self.matches
            .iter()
            .map(|m| (m.category.clone(), m.confidence))
            .collect()
    }
}

/// Stateless keyword extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor {
    mode: MatchMode,
}

impl KeywordExtractor {
    /// Creates an extractor using whole-word matching.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: MatchMode::WholeWord,
        }
    }

    /// Creates an extractor with the given matching mode.
    #[must_use]
    pub const fn with_mode(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Returns the matching mode.
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Extracts matched categories from `text`.
    #[must_use]
    pub fn extract(&self, text: &str, map: &KeywordCategoryMap) -> ExtractionResult {
        let lowered = text.to_lowercase();
        let mut matches = Vec::new();

        if !lowered.trim().is_empty() {
            for category in map.categories() {
                let matched: Vec<String> = category
                    .keywords
                    .iter()
                    .filter(|k| self.contains_keyword(&lowered, k))
                    .cloned()
                    .collect();

                if matched.is_empty() {
                    continue;
                }

                #[allow(clippy::cast_precision_loss)]
                let confidence = matched.len() as f64 / category.keywords.len() as f64;
                tracing::trace!(category = %category.name, confidence, "keyword category matched");

                matches.push(CategoryMatch {
                    category: category.name.clone(),
                    matched,
                    confidence,
                });
            }
        }

        ExtractionResult {
            text: text.to_string(),
            matches,
            success: true,
        }
    }

    /// Returns `true` if `keyword` (already lower-cased) occurs in the
    /// lower-cased `text` under this extractor's mode.
    #[must_use]
    pub fn contains_keyword(&self, text: &str, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }
        match self.mode {
            MatchMode::Substring => text.contains(keyword),
            MatchMode::WholeWord => contains_whole_word(text, keyword),
        }
    }
}

fn contains_whole_word(text: &str, keyword: &str) -> bool {
    let guard_start = keyword.chars().next().is_some_and(char::is_alphanumeric);
    let guard_end = keyword.chars().next_back().is_some_and(char::is_alphanumeric);

    text.match_indices(keyword).any(|(start, found)| {
        let end = start + found.len();
        let before_ok =
            !guard_start || !text[..start].chars().next_back().is_some_and(char::is_alphanumeric);
        let after_ok = !guard_end || !text[end..].chars().next().is_some_and(char::is_alphanumeric);
        before_ok && after_ok
    })
}

/// Extracts `text` against `map` with whole-word matching.
#[must_use]
pub fn extract_keywords(text: &str, map: &KeywordCategoryMap) -> ExtractionResult {
    KeywordExtractor::new().extract(text, map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platforms() -> KeywordCategoryMap {
        KeywordCategoryMap::new()
            .with_category("instagram", ["instagram", "ig", "insta", "photo", "story", "reel"])
            .with_category("linkedin", ["linkedin", "professional", "business"])
    }

    #[test]
    fn test_empty_text_yields_empty_result() {
        let result = extract_keywords("", &platforms());
        assert!(result.is_empty());
        assert!(result.success);
        assert!(result.best().is_none());
    }

    #[test]
    fn test_whitespace_text_yields_empty_result() {
        assert!(extract_keywords("   \n\t", &platforms()).is_empty());
    }

    #[test]
    fn test_confidence_is_fraction_of_distinct_keywords() {
        let result = extract_keywords("instagram story, another instagram story", &platforms());
        let m = result.get("instagram").unwrap();
        assert_eq!(m.matched, vec!["instagram", "story"]);
        assert!((m.confidence - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_matches_omitted() {
        let result = extract_keywords("an instagram reel", &platforms());
        assert_eq!(result.names(), vec!["instagram"]);
        assert!(!result.contains("linkedin"));
    }

    #[test]
    fn test_case_insensitive() {
        let upper = extract_keywords("INSTAGRAM", &platforms());
        let lower = extract_keywords("instagram", &platforms());
        assert_eq!(upper.matches, lower.matches);
    }

    #[test]
    fn test_whole_word_rejects_embedded_keywords() {
        let map = KeywordCategoryMap::new().with_category("go", ["go", "golang"]);
        assert!(extract_keywords("search on google", &map).is_empty());
        assert!(extract_keywords("written in go.", &map).contains("go"));
    }

    #[test]
    fn test_substring_mode_matches_embedded_keywords() {
        let map = KeywordCategoryMap::new().with_category("go", ["go"]);
        let extractor = KeywordExtractor::with_mode(MatchMode::Substring);
        assert!(extractor.extract("search on google", &map).contains("go"));
        assert_eq!(extractor.mode(), MatchMode::Substring);
    }

    #[test]
    fn test_punctuated_keywords() {
        let map = KeywordCategoryMap::new()
            .with_category("dotnet", [".net", "c#"])
            .with_category("pull_request", ["pr", "pull request"]);
        let result = extract_keywords("An ASP.NET app in C#, run on every pull request", &map);
        assert_eq!(result.confidence("dotnet"), Some(1.0));
        assert!(result.contains("pull_request"));
    }

    #[test]
    fn test_keywords_normalized_and_deduplicated() {
        let map = KeywordCategoryMap::new().with_category("x", ["Tweet", "tweet ", "", "  "]);
        assert_eq!(map.get("x").unwrap().keywords, vec!["tweet"]);
        assert_eq!(extract_keywords("tweet", &map).confidence("x"), Some(1.0));
    }

    #[test]
    fn test_category_without_keywords_never_matches() {
        let map = KeywordCategoryMap::new().with_category("empty", Vec::<String>::new());
        assert!(extract_keywords("anything at all", &map).is_empty());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = KeywordCategoryMap::new()
            .with_category("a", ["one"])
            .with_category("b", ["two"]);
        map.insert("a", ["three"]);
        let names: Vec<_> = map.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(map.get("a").unwrap().keywords, vec!["three"]);
    }

    #[test]
    fn test_best_prefers_higher_confidence() {
        let result = extract_keywords("a professional business photo", &platforms());
        assert_eq!(result.best().unwrap().category, "linkedin");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_confidence_map() {
        let map = extract_keywords("linkedin", &platforms()).confidence_map();
        assert_eq!(map.len(), 1);
        assert!((map["linkedin"] - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(KeywordCategoryMap::from_toml_str("[[category]]\nname = 3").is_err());
    }

    #[test]
    fn test_from_toml_empty_document() {
        assert!(KeywordCategoryMap::from_toml_str("").unwrap().is_empty());
    }
}
