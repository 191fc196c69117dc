//! Natural-language extraction for MCP tool requests.
//!
//! Turns free-text requests into structured data with keyword tables,
//! named regexes and small field schemas. Every extractor is total: empty
//! or unrecognised input yields empty results or documented defaults,
//! never an error.
//!
//! # Modules
//!
//! - [`keywords`]: category extraction with per-category confidence
//! - [`tables`]: built-in keyword tables (platforms, tones, languages, ...)
//! - [`patterns`]: named case-insensitive regex extraction
//! - [`schema`]: schema-driven field extraction
//! - [`content`]: social content requests
//! - [`requirements`]: CI/CD deployment requests
//! - [`intent`]: coarse intent classification
//!
//! # Examples
//!
//! ```
//! use mcp_framework_nlp::{BuiltinTable, extract_keywords};
//!
//! let result = extract_keywords(
//!     "Create a professional Instagram post about AI trends with hashtags",
//!     BuiltinTable::Platforms.map(),
//! );
//! assert!(result.contains("instagram"));
//! assert!(result.confidence("instagram").unwrap() > 0.0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod content;
pub mod intent;
pub mod keywords;
pub mod patterns;
pub mod requirements;
mod result;
pub mod schema;
pub mod tables;

pub use content::{ContentRequest, ContentRequestProcessor};
pub use intent::{Intent, IntentClassifier};
pub use keywords::{
    CategoryMatch, ExtractionResult, KeywordCategory, KeywordCategoryMap, KeywordExtractor,
    MatchMode, extract_keywords,
};
pub use patterns::{Extracted, PatternSet};
pub use requirements::{DeploymentRequirements, RequirementsProcessor};
pub use result::ProcessingResult;
pub use schema::{ExtractionSchema, FieldKind, FieldSpec, extract_structured};
pub use tables::BuiltinTable;
