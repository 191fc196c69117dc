//! Built-in keyword tables.
//!
//! Tables are plain constants; each is turned into a [`KeywordCategoryMap`]
//! once, on first use, and shared read-only afterwards.

use crate::keywords::KeywordCategoryMap;
use std::sync::LazyLock;

type Table = &'static [(&'static str, &'static [&'static str])];

/// Social platforms.
pub const PLATFORMS: Table = &[
    ("instagram", &["instagram", "ig", "insta", "photo", "story", "reel"]),
    ("twitter", &["twitter", "tweet", "x.com", "thread"]),
    ("tiktok", &["tiktok", "video", "short", "viral"]),
    ("linkedin", &["linkedin", "professional", "business"]),
    ("facebook", &["facebook", "fb", "post"]),
];

/// Content tones.
pub const TONES: Table = &[
    ("professional", &["professional", "business", "formal", "corporate"]),
    ("casual", &["casual", "friendly", "relaxed", "informal"]),
    ("funny", &["funny", "humorous", "joke", "meme", "witty"]),
    ("inspirational", &["inspirational", "motivational", "uplifting", "positive"]),
    ("educational", &["educational", "learn", "teach", "explain", "informative"]),
];

/// Content formats.
pub const CONTENT_TYPES: Table = &[
    ("photo", &["photo", "image", "picture", "pic"]),
    ("video", &["video", "clip", "movie", "recording"]),
    ("story", &["story", "stories", "temporary"]),
    ("carousel", &["carousel", "multiple", "gallery", "slideshow"]),
    ("live", &["live", "streaming", "broadcast"]),
];

/// Application languages and frameworks.
pub const LANGUAGES: Table = &[
    ("python", &["python", "django", "flask", "fastapi", "pip", "requirements.txt"]),
    ("nodejs", &["node", "nodejs", "npm", "yarn", "package.json", "express"]),
    ("java", &["java", "spring", "maven", "gradle", "jar"]),
    ("go", &["go", "golang", "mod"]),
    ("ruby", &["ruby", "rails", "gem", "bundler"]),
    ("php", &["php", "laravel", "composer"]),
    ("dotnet", &[".net", "dotnet", "c#", "csharp"]),
];

/// Deployment environments.
pub const ENVIRONMENTS: Table = &[
    ("development", &["dev", "development", "local"]),
    ("staging", &["staging", "test", "qa"]),
    ("production", &["prod", "production", "live"]),
];

/// CI/CD pipeline triggers.
pub const TRIGGERS: Table = &[
    ("push", &["push", "commit", "merge"]),
    ("pull_request", &["pr", "pull request", "review"]),
    ("schedule", &["schedule", "cron", "daily", "weekly"]),
    ("manual", &["manual", "on-demand", "trigger"]),
];

/// Cloud providers.
pub const CLOUD_PROVIDERS: Table = &[
    ("aws", &["aws", "amazon", "ec2", "lambda", "ecs"]),
    ("azure", &["azure", "microsoft"]),
    ("gcp", &["gcp", "google cloud", "gke"]),
    ("kubernetes", &["k8s", "kubernetes", "kubectl"]),
];

static PLATFORM_MAP: LazyLock<KeywordCategoryMap> =
    LazyLock::new(|| KeywordCategoryMap::from_static(PLATFORMS));
static TONE_MAP: LazyLock<KeywordCategoryMap> =
    LazyLock::new(|| KeywordCategoryMap::from_static(TONES));
static CONTENT_TYPE_MAP: LazyLock<KeywordCategoryMap> =
    LazyLock::new(|| KeywordCategoryMap::from_static(CONTENT_TYPES));
static LANGUAGE_MAP: LazyLock<KeywordCategoryMap> =
    LazyLock::new(|| KeywordCategoryMap::from_static(LANGUAGES));
static ENVIRONMENT_MAP: LazyLock<KeywordCategoryMap> =
    LazyLock::new(|| KeywordCategoryMap::from_static(ENVIRONMENTS));
static TRIGGER_MAP: LazyLock<KeywordCategoryMap> =
    LazyLock::new(|| KeywordCategoryMap::from_static(TRIGGERS));
static CLOUD_MAP: LazyLock<KeywordCategoryMap> =
    LazyLock::new(|| KeywordCategoryMap::from_static(CLOUD_PROVIDERS));

/// Identifies a built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTable {
    /// [`PLATFORMS`]
    Platforms,
    /// [`TONES`]
    Tones,
    /// [`CONTENT_TYPES`]
    ContentTypes,
    /// [`LANGUAGES`]
    Languages,
    /// [`ENVIRONMENTS`]
    Environments,
    /// [`TRIGGERS`]
    Triggers,
    /// [`CLOUD_PROVIDERS`]
    CloudProviders,
}

impl BuiltinTable {
    /// Every built-in table.
    pub const ALL: [Self; 7] = [
        Self::Platforms,
        Self::Tones,
        Self::ContentTypes,
        Self::Languages,
        Self::Environments,
        Self::Triggers,
        Self::CloudProviders,
    ];

    /// Shared map for this table.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_nlp::tables::BuiltinTable;
    ///
    /// let tones = BuiltinTable::Tones.map();
    /// assert!(tones.get("professional").is_some());
    /// ```
    #[must_use]
    pub fn map(self) -> &'static KeywordCategoryMap {
        match self {
            Self::Platforms => &*PLATFORM_MAP,
            Self::Tones => &*TONE_MAP,
            Self::ContentTypes => &*CONTENT_TYPE_MAP,
            Self::Languages => &*LANGUAGE_MAP,
            Self::Environments => &*ENVIRONMENT_MAP,
            Self::Triggers => &*TRIGGER_MAP,
            Self::CloudProviders => &*CLOUD_MAP,
        }
    }

    /// Table name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Platforms => "platforms",
            Self::Tones => "tones",
            Self::ContentTypes => "content_types",
            Self::Languages => "languages",
            Self::Environments => "environments",
            Self::Triggers => "triggers",
            Self::CloudProviders => "cloud_providers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_load_with_distinct_keywords() {
        for table in BuiltinTable::ALL {
            let map = table.map();
            assert!(!map.is_empty(), "{} is empty", table.name());
            for category in map.categories() {
                assert!(!category.keywords.is_empty());
                let mut sorted = category.keywords.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), category.keywords.len());
            }
        }
    }

    #[test]
    fn test_table_order_preserved() {
        let names: Vec<_> = BuiltinTable::Environments
            .map()
            .categories()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["development", "staging", "production"]);
    }

    #[test]
    fn test_static_is_shared() {
        let a: *const KeywordCategoryMap = BuiltinTable::Platforms.map();
        let b: *const KeywordCategoryMap = BuiltinTable::Platforms.map();
        assert_eq!(a, b);
    }
}
