//! Social content request processing.
//!
//! Turns a request such as "Create a professional Instagram post about AI
//! trends with hashtags" into a [`ContentRequest`]: target platforms, tone,
//! content type, topic and formatting options.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_nlp::content::ContentRequestProcessor;
//!
//! let result = ContentRequestProcessor::new()
//!     .process("Create a professional Instagram post about AI trends with hashtags");
//!
//! assert_eq!(result.data.primary_platform, "instagram");
//! assert_eq!(result.data.tone, "professional");
//! assert_eq!(result.data.topic, "ai trends");
//! ```

use crate::keywords::KeywordExtractor;
use crate::patterns::PatternSet;
use crate::result::{ProcessingResult, signal_ratio};
use crate::tables::BuiltinTable;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Platform used when the request names none.
pub const DEFAULT_PLATFORM: &str = "instagram";

/// Tone used when the request names none.
pub const DEFAULT_TONE: &str = "casual";

/// Content type used when the request names none.
pub const DEFAULT_CONTENT_TYPE: &str = "photo";

/// Topic used when nothing is left after removing known words.
pub const DEFAULT_TOPIC: &str = "general content";

/// Hashtag count used when the request gives none.
pub const DEFAULT_HASHTAG_COUNT: u32 = 5;

const INSTRUCTION_WORDS: &[&str] = &[
    "create", "generate", "make", "write", "post", "posts", "about", "for", "with", "the", "a",
    "an", "and", "some", "add", "include", "please", "me", "my", "on", "to", "of", "hashtag",
    "hashtags", "emoji", "emojis",
];

const IMAGE_INDICATORS: &[&str] = &["image", "photo", "picture", "visual", "graphic"];

const NO_HASHTAG_PHRASES: &[&str] = &["no hashtag", "without hashtag", "no tags"];

static CONTENT_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::new(&[
        ("hashtag_count", r"(\d+)\s*hashtags?"),
        (
            "character_limit",
            r"(?:under|max|maximum)\s*(\d+)\s*(?:characters?|chars?)",
        ),
        ("mention", r"(?:^|[^\w.])@([a-zA-Z0-9_]+)"),
        ("emoji_request", r"(?:with|add|include)\s+emojis?"),
    ])
    .expect("valid regex")
});

/// Per-platform size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformLimits {
    /// Maximum characters in the main text (caption, tweet, description)
    pub text: u32,
    /// Maximum characters in a profile bio
    pub bio: u32,
    /// Maximum hashtags per post
    pub hashtags: u32,
}

/// Known limits for a platform.
///
/// # Examples
///
/// ```
/// use mcp_framework_nlp::content::platform_limits;
///
/// assert_eq!(platform_limits("twitter").unwrap().text, 280);
/// assert!(platform_limits("myspace").is_none());
/// ```
#[must_use]
pub const fn platform_limits(platform: &str) -> Option<PlatformLimits> {
    match platform.as_bytes() {
        b"instagram" => Some(PlatformLimits {
            text: 2200,
            bio: 150,
            hashtags: 30,
        }),
        b"twitter" => Some(PlatformLimits {
            text: 280,
            bio: 160,
            hashtags: 10,
        }),
        b"tiktok" => Some(PlatformLimits {
            text: 2200,
            bio: 80,
            hashtags: 100,
        }),
        _ => None,
    }
}

/// Structured social content request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRequest {
    /// Matched platforms in table order; `[DEFAULT_PLATFORM]` when none matched
    pub platforms: Vec<String>,
    /// First of `platforms`
    pub primary_platform: String,
    /// First matched tone in table order
    pub tone: String,
    /// First matched content type in table order
    pub content_type: String,
    /// Subject of the content
    pub topic: String,
    /// Whether an image was asked for
    pub include_image: bool,
    /// Whether hashtags should be generated
    pub include_hashtags: bool,
    /// Whether emojis were asked for
    pub include_emojis: bool,
    /// Number of hashtags, capped by the primary platform's limit
    pub hashtag_count: u32,
    /// Explicit character limit, if requested
    pub character_limit: Option<u32>,
    /// `@mentions` without the `@`
    pub mentions: Vec<String>,
    /// Original request text
    pub raw_text: String,
}

/// Processor for social media content requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentRequestProcessor {
    extractor: KeywordExtractor,
}

impl ContentRequestProcessor {
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

    /// Processes a content request. Never fails.
    #[must_use]
    pub fn process(&self, text: &str) -> ProcessingResult<ContentRequest> {
        let lowered = text.to_lowercase();

        let platform_matches = self.extractor.extract(text, BuiltinTable::Platforms.map());
        let platforms_found = !platform_matches.is_empty();
        let platforms: Vec<String> = if platforms_found {
            platform_matches.names().into_iter().map(str::to_string).collect()
        } else {
            vec![DEFAULT_PLATFORM.to_string()]
        };
        let primary_platform = platforms[0].clone();

        let tone = self
            .extractor
            .extract(text, BuiltinTable::Tones.map())
            .matches
            .first()
            .map_or(DEFAULT_TONE, |m| m.category.as_str())
            .to_string();

        let content_type = self
            .extractor
            .extract(text, BuiltinTable::ContentTypes.map())
            .matches
            .first()
            .map_or(DEFAULT_CONTENT_TYPE, |m| m.category.as_str())
            .to_string();

        let topic = Self::extract_topic(&lowered);
        let details = CONTENT_PATTERNS.extract(text);

        let requested_hashtags = details
            .get("hashtag_count")
            .and_then(|v| v.first().parse::<u32>().ok())
            .unwrap_or(DEFAULT_HASHTAG_COUNT);
        let hashtag_count = platform_limits(&primary_platform)
            .map_or(requested_hashtags, |limits| requested_hashtags.min(limits.hashtags));

        let character_limit = details
            .get("character_limit")
            .and_then(|v| v.first().parse::<u32>().ok());

        let mentions = details
            .get("mention")
            .map(|v| v.all().into_iter().map(str::to_string).collect())
            .unwrap_or_default();

        let confidence = signal_ratio(&[
            platforms_found,
            tone != DEFAULT_TONE,
            topic != DEFAULT_TOPIC,
        ]);

        tracing::debug!(
            platform = %primary_platform,
            tone = %tone,
            confidence,
            "processed content request"
        );

        ProcessingResult::new(
            ContentRequest {
                platforms,
                primary_platform,
                tone,
                content_type,
                topic,
                include_image: IMAGE_INDICATORS.iter().any(|i| lowered.contains(i)),
                include_hashtags: !NO_HASHTAG_PHRASES.iter().any(|p| lowered.contains(p)),
                include_emojis: details.contains_key("emoji_request"),
                hashtag_count,
                character_limit,
                mentions,
                raw_text: text.to_string(),
            },
            confidence,
        )
    }

    /// Removes known keywords, instruction words, mentions, hashtags and
    /// numbers; what remains is the topic.
    fn extract_topic(lowered: &str) -> String {
        let known: HashSet<&str> = [
            BuiltinTable::Platforms,
            BuiltinTable::Tones,
            BuiltinTable::ContentTypes,
        ]
        .into_iter()
        .flat_map(|table| table.map().all_keywords())
        .chain(INSTRUCTION_WORDS.iter().copied())
        .collect();

        let words: Vec<&str> = lowered
            .split_whitespace()
            .filter(|w| !w.starts_with('@') && !w.starts_with('#'))
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
            .filter(|w| !known.contains(w))
            .collect();

        if words.is_empty() {
            DEFAULT_TOPIC.to_string()
        } else {
            words.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(text: &str) -> ContentRequest {
        ContentRequestProcessor::new().process(text).data
    }

    #[test]
    fn test_reference_request() {
        let result = ContentRequestProcessor::new()
            .process("Create a professional Instagram post about AI trends with hashtags");
        let data = &result.data;
        assert!(result.success);
        assert!(data.platforms.contains(&"instagram".to_string()));
        assert_eq!(data.tone, "professional");
        assert_eq!(data.topic, "ai trends");
        assert!(data.include_hashtags);
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults_for_empty_text() {
        let result = ContentRequestProcessor::new().process("");
        assert_eq!(result.data.platforms, vec!["instagram"]);
        assert_eq!(result.data.primary_platform, "instagram");
        assert_eq!(result.data.tone, "casual");
        assert_eq!(result.data.content_type, "photo");
        assert_eq!(result.data.topic, "general content");
        assert_eq!(result.data.hashtag_count, 5);
        assert!(result.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_hashtag_count_and_limit() {
        let data = process("Tweet about rust under 200 characters with 3 hashtags");
        assert_eq!(data.primary_platform, "twitter");
        assert_eq!(data.hashtag_count, 3);
        assert_eq!(data.character_limit, Some(200));
    }

    #[test]
    fn test_hashtag_count_capped_by_platform() {
        let data = process("twitter thread on databases with 40 hashtags");
        assert_eq!(data.hashtag_count, 10);
    }

    #[test]
    fn test_mentions_and_emojis() {
        let data = process("Funny tiktok video for @acme and @bob_dev, add emojis");
        assert_eq!(data.mentions, vec!["acme", "bob_dev"]);
        assert!(data.include_emojis);
        assert_eq!(data.tone, "funny");
        assert_eq!(data.content_type, "video");
        assert!(!data.topic.contains("acme"));
    }

    #[test]
    fn test_email_addresses_are_not_mentions() {
        let data = process("instagram post, mail ops@acme.com or ping @brand,@ops_team");
        assert_eq!(data.mentions, vec!["brand", "ops_team"]);

        let data = process("@lead announce the launch on linkedin");
        assert_eq!(data.mentions, vec!["lead"]);
    }

    #[test]
    fn test_image_and_hashtag_flags() {
        let data = process("a picture of the office, no hashtags");
        assert!(data.include_image);
        assert!(!data.include_hashtags);
    }

    #[test]
    fn test_multiple_platforms_reported() {
        let data = process("Cross-post to linkedin and facebook");
        assert_eq!(data.platforms, vec!["linkedin", "facebook"]);
    }

    #[test]
    fn test_platform_limits_table() {
        assert_eq!(platform_limits("instagram").unwrap().hashtags, 30);
        assert_eq!(platform_limits("tiktok").unwrap().bio, 80);
        assert!(platform_limits("linkedin").is_none());
    }
}
