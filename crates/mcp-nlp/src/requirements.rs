//! Deployment requirements processing.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_nlp::requirements::RequirementsProcessor;
//!
//! let result = RequirementsProcessor::new()
//!     .process("Deploy a Python Flask app to AWS with staging and production environments");
//!
//! assert_eq!(result.data.language, "python");
//! assert_eq!(result.data.environments, vec!["staging", "production"]);
//! assert_eq!(result.data.cloud_providers, vec!["aws"]);
//! ```

use crate::keywords::{ExtractionResult, KeywordExtractor};
use crate::patterns::PatternSet;
use crate::result::{ProcessingResult, signal_ratio};
use crate::tables::BuiltinTable;
use serde::Serialize;
use std::sync::LazyLock;

/// Application name used when none is found.
pub const DEFAULT_APP_NAME: &str = "my-app";

/// Language used when none is found.
pub const DEFAULT_LANGUAGE: &str = "nodejs";

/// Environments used when none are found.
pub const DEFAULT_ENVIRONMENTS: &[&str] = &["staging", "production"];

/// Triggers used when none are found.
pub const DEFAULT_TRIGGERS: &[&str] = &["push"];

const SECURITY_KEYWORDS: &[&str] = &["security", "scan", "audit", "vulnerability", "secure"];

const MONITORING_KEYWORDS: &[&str] = &["monitor", "alert", "observability", "metrics", "logging"];

// Words that follow "app"/"service" in prose without being a name.
const NOT_A_NAME: &[&str] = &[
    "to", "for", "with", "on", "in", "the", "a", "an", "using", "into", "that", "and",
];

static REQUIREMENT_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(&[
        (
            "app_name",
            r"\b(?:app|application|service)(?:\s+(?:called|named))?\s+([a-zA-Z0-9_-]+)",
        ),
        ("version", r"version\s+([0-9]+(?:\.[0-9]+)*)"),
        ("port", r"port\s+(\d+)"),
        ("database", r"\b(postgres(?:ql)?|mysql|mongodb|redis)\b"),
    ])
    .expect("valid regex")
});

/// Structured deployment requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRequirements {
    /// Application name
    pub application: String,
    /// Language or runtime
    pub language: String,
    /// Target environments in table order
    pub environments: Vec<String>,
    /// Pipeline triggers in table order
    pub triggers: Vec<String>,
    /// Cloud providers in table order; may be empty
    pub cloud_providers: Vec<String>,
    /// Whether security scanning was asked for
    pub security_required: bool,
    /// Whether monitoring was asked for
    pub monitoring_required: bool,
    /// Application version, if stated
    pub version: Option<String>,
    /// Service port, if stated
    pub port: Option<u16>,
    /// Database engine, if named
    pub database: Option<String>,
    /// Original request text
    pub raw_text: String,
}

/// Processor for CI/CD deployment requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementsProcessor {
    extractor: KeywordExtractor,
}

impl RequirementsProcessor {
    /// Creates a processor with whole-word keyword matching.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extractor: KeywordExtractor::new(),
        }
    }

    /// Creates a processor with a custom keyword extractor.
    #[must_use]
    pub const fn with_extractor(extractor: KeywordExtractor) -> Self {
        Self { extractor }
    }

    /// Processes a deployment request. Never fails.
    #[must_use]
    pub fn process(&self, text: &str) -> ProcessingResult<DeploymentRequirements> {
        let lowered = text.to_lowercase();

        let app_name = Self::extract_app_name(text);
        let languages = self.extractor.extract(text, BuiltinTable::Languages.map());
        let environments = self.extractor.extract(text, BuiltinTable::Environments.map());
        let triggers = self.extractor.extract(text, BuiltinTable::Triggers.map());
        let clouds = self.extractor.extract(text, BuiltinTable::CloudProviders.map());

        let confidence = signal_ratio(&[
            app_name.is_some(),
            !languages.is_empty(),
            !environments.is_empty(),
            !triggers.is_empty(),
        ]);

        let details = REQUIREMENT_PATTERNS.extract(text);
        let version = details.get("version").map(|v| v.first().to_string());
        let port = details
            .get("port")
            .and_then(|v| v.first().parse::<u16>().ok());
        let database = details
            .get("database")
            .map(|v| v.first().to_lowercase());

        let requirements = DeploymentRequirements {
            application: app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            language: languages
                .matches
                .first()
                .map_or(DEFAULT_LANGUAGE, |m| m.category.as_str())
                .to_string(),
            environments: names_or(&environments, DEFAULT_ENVIRONMENTS),
            triggers: names_or(&triggers, DEFAULT_TRIGGERS),
            cloud_providers: names_or(&clouds, &[]),
            security_required: SECURITY_KEYWORDS.iter().any(|k| lowered.contains(k)),
            monitoring_required: MONITORING_KEYWORDS.iter().any(|k| lowered.contains(k)),
            version,
            port,
            database,
            raw_text: text.to_string(),
        };

        tracing::debug!(
            application = %requirements.application,
            language = %requirements.language,
            confidence,
            "processed deployment requirements"
        );

        ProcessingResult::new(requirements, confidence)
    }

    fn extract_app_name(text: &str) -> Option<String> {
        let found = REQUIREMENT_PATTERNS.extract(text);
        found.get("app_name").and_then(|names| {
            names
                .all()
                .into_iter()
                .find(|name| !NOT_A_NAME.contains(&name.to_lowercase().as_str()))
                .map(str::to_string)
        })
    }
}

fn names_or(result: &ExtractionResult, default: &[&str]) -> Vec<String> {
    if result.is_empty() {
        default.iter().map(|s| (*s).to_string()).collect()
    } else {
        result.names().into_iter().map(str::to_string).collect()
    }
}
