//! Coarse intent classification.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// What a request asks the server to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Produce posts, captions or other content
    GenerateContent,
    /// Inspect analytics or performance
    AnalyzeData,
    /// Set up or connect something
    ConfigureSystem,
    /// Build or ship an application
    DeployApplication,
    /// Plan work for later
    ScheduleTask,
    /// Nothing recognised
    Unknown,
}

impl Intent {
    /// Snake-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenerateContent => "generate_content",
            Self::AnalyzeData => "analyze_data",
            Self::ConfigureSystem => "configure_system",
            Self::DeployApplication => "deploy_application",
            Self::ScheduleTask => "schedule_task",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type IntentPatterns = Vec<(Intent, Vec<Regex>)>;

static INTENT_PATTERNS: LazyLock<IntentPatterns> = LazyLock::new(|| {
    let table: &[(Intent, &[&str])] = &[
        (
            Intent::GenerateContent,
            &[
                r"(?:create|generate|make|write).*(?:post|content|tweet|story)",
                r"(?:social|media).*(?:content|post)",
                r"write.*(?:caption|description)",
            ],
        ),
        (
            Intent::AnalyzeData,
            &[
                r"(?:analyze|check|review).*(?:data|analytics|metrics)",
                r"(?:performance|engagement|stats)",
                r"how.*(?:performing|doing)",
            ],
        ),
        (
            Intent::ConfigureSystem,
            &[
                r"(?:configure|setup|set up|install)",
                r"(?:config|configuration|settings)",
                r"(?:connect|integrate).*(?:api|service)",
            ],
        ),
        (
            Intent::DeployApplication,
            &[
                r"(?:deploy|build|release).*(?:app|application|service)",
                r"(?:ci/cd|pipeline|workflow)",
                r"(?:docker|container|kubernetes)",
            ],
        ),
        (
            Intent::ScheduleTask,
            &[
                r"(?:schedule|plan|queue).*(?:post|content|task)",
                r"(?:calendar|timeline|later)",
                r"(?:automate|automation)",
            ],
        ),
    ];

    table
        .iter()
        .map(|(intent, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect();
            (*intent, compiled)
        })
        .collect()
});

/// Scores text against per-intent pattern lists.
///
/// Each intent scores the fraction of its patterns that match the
/// lower-cased text. The highest strictly-positive score wins, with the
/// earlier intent kept on ties.
///
/// # Examples
///
/// ```
/// use mcp_framework_nlp::intent::{Intent, IntentClassifier};
///
/// let (intent, score) = IntentClassifier::new().classify("Set up a CI/CD pipeline with Docker");
/// assert_eq!(intent, Intent::DeployApplication);
/// assert!(score > 0.5);
///
/// assert_eq!(IntentClassifier::new().classify("hello").0, Intent::Unknown);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    /// Creates a classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classifies `text`, returning the intent and its score in `[0, 1]`.
    #[must_use]
    pub fn classify(&self, text: &str) -> (Intent, f64) {
        let lowered = text.to_lowercase();
        let mut best = (Intent::Unknown, 0.0);

        for (intent, patterns) in INTENT_PATTERNS.iter() {
            let hits = patterns.iter().filter(|re| re.is_match(&lowered)).count();
            #[allow(clippy::cast_precision_loss)]
            let score = hits as f64 / patterns.len() as f64;
            if score > best.1 {
                best = (*intent, score);
            }
        }

        tracing::debug!(intent = %best.0, score = best.1, "classified intent");
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> (Intent, f64) {
        IntentClassifier::new().classify(text)
    }

    #[test]
    fn test_generate_content() {
        let (intent, score) = classify("Write a caption and create a post for social media content");
        assert_eq!(intent, Intent::GenerateContent);
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_data() {
        assert_eq!(classify("How is my engagement doing?").0, Intent::AnalyzeData);
    }

    #[test]
    fn test_schedule_task() {
        assert_eq!(classify("Queue this task for later").0, Intent::ScheduleTask);
    }

    #[test]
    fn test_unknown_has_zero_score() {
        let (intent, score) = classify("good morning");
        assert_eq!(intent, Intent::Unknown);
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_keep_earlier_intent() {
        // one configure pattern and one deploy pattern each
        let (intent, _) = classify("install docker");
        assert_eq!(intent, Intent::ConfigureSystem);
    }

    #[test]
    fn test_display() {
        assert_eq!(Intent::DeployApplication.to_string(), "deploy_application");
        assert_eq!(
            serde_json::to_value(Intent::ScheduleTask).unwrap(),
            serde_json::json!("schedule_task")
        );
    }
}
