//! Generation configuration.
//!
//! A [`GenerationConfig`] says what to scaffold: package name and metadata,
//! the [`Domain`] that selects the file set, and for custom servers the
//! list of [`ToolSpec`]s. Configs can be built in code or loaded from TOML
//! or JSON.
//!
//! ```toml
//! name = "social-media-server"
//! version = "0.3.0"
//! domain = "social"
//!
//! [[tools]]
//! name = "generate_content"
//! description = "Generate a post"
//! ```
//!
//! Validation happens in the generator, not here: a config with an empty
//! name loads fine and is rejected by
//! [`ServerGenerator::generate`](crate::ServerGenerator::generate).

use mcp_framework_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::fs;
use std::path::Path;

/// Version used when the config gives none.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// License used when the config gives none.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Kind of server to scaffold.
///
/// Parsing is lenient: common spellings are accepted and anything
/// unrecognised falls back to [`Domain::Custom`] with a warning.
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::Domain;
///
/// assert_eq!(Domain::parse("Social-Media"), Domain::Social);
/// assert_eq!(Domain::parse("ci/cd"), Domain::Cicd);
/// assert_eq!(Domain::parse("gaming"), Domain::Custom);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Domain {
    /// Social media content server
    Social,
    /// CI/CD pipeline server
    Cicd,
    /// Server built from declared tools
    #[default]
    Custom,
}

impl Domain {
    /// Every domain.
    pub const ALL: [Self; 3] = [Self::Social, Self::Cicd, Self::Custom];

    /// Parses a domain name, falling back to [`Domain::Custom`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let normalized: String = input
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "social" | "socialmedia" => Self::Social,
            "cicd" | "devops" | "pipeline" => Self::Cicd,
            "custom" | "" => Self::Custom,
            _ => {
                tracing::warn!(domain = %input, "unknown domain, falling back to custom");
                Self::Custom
            }
        }
    }

    /// Canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Cicd => "cicd",
            Self::Custom => "custom",
        }
    }
}

impl From<String> for Domain {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Domain {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_input_schema() -> Value {
    json!({ "type": "object", "properties": {} })
}

/// A tool exposed by a custom server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Tool name as registered with MCP
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// JSON Schema of the tool arguments
    #[serde(default = "default_input_schema")]
    pub input_schema: Value,
    /// TypeScript expression evaluated by the handler, with `args` in scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_call: Option<String>,
}

impl ToolSpec {
    /// Creates a tool with an empty object schema.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: default_input_schema(),
            service_call: None,
        }
    }

    /// Sets the argument schema.
    #[must_use]
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Sets the service call expression.
    #[must_use]
    pub fn with_service_call(mut self, call: impl Into<String>) -> Self {
        self.service_call = Some(call.into());
        self
    }
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_license() -> String {
    DEFAULT_LICENSE.to_string()
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// npm package name; required
    #[serde(default)]
    pub name: String,
    /// Package version
    #[serde(default = "default_version")]
    pub version: String,
    /// Package description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Package author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// SPDX license identifier
    #[serde(default = "default_license")]
    pub license: String,
    /// File set to generate
    #[serde(default)]
    pub domain: Domain,
    /// Tools of a custom server, in declaration order
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: default_version(),
            description: None,
            author: None,
            license: default_license(),
            domain: Domain::default(),
            tools: Vec::new(),
        }
    }
}

impl GenerationConfig {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// Parses a config from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the TOML is malformed or
    /// has fields of the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_codegen::{Domain, GenerationConfig};
    ///
    /// let config = GenerationConfig::from_toml_str(r#"
    ///     name = "ci-server"
    ///     domain = "cicd"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.domain, Domain::Cicd);
    /// assert_eq!(config.version, "1.0.0");
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::SerializationError {
            message: format!("Failed to parse generation config TOML: {e}"),
            source: None,
        })
    }

    /// Parses a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the JSON is malformed or
    /// has fields of the wrong type.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::SerializationError {
            message: format!("Failed to parse generation config JSON: {e}"),
            source: Some(e),
        })
    }

    /// Loads a config file, choosing the format by extension
    /// (`.toml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read,
    /// [`Error::ConfigError`] for an unsupported extension, and
    /// [`Error::SerializationError`] if parsing fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::ConfigError {
                    message: format!(
                        "Unsupported config file '{}': expected .toml or .json",
                        path.display()
                    ),
                });
            }
        };

        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading generation config");
        parse(&content)
    }
}

/// Builder for [`GenerationConfig`].
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::{Domain, GenerationConfig, ToolSpec};
///
/// let config = GenerationConfig::builder()
///     .name("weather-server")
///     .description("Weather lookups")
///     .tool(ToolSpec::new("get_forecast", "Forecast for a city"))
///     .build();
///
/// assert_eq!(config.domain, Domain::Custom);
/// assert_eq!(config.tools.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationConfigBuilder {
    config: GenerationConfig,
}

impl GenerationConfigBuilder {
    /// Sets the package name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Sets the package version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Sets the package description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// Sets the package author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.config.author = Some(author.into());
        self
    }

    /// Sets the license identifier.
    #[must_use]
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.config.license = license.into();
        self
    }

    /// Sets the domain.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<Domain>) -> Self {
        self.config.domain = domain.into();
        self
    }

    /// Appends a tool.
    #[must_use]
    pub fn tool(mut self, tool: ToolSpec) -> Self {
        self.config.tools.push(tool);
        self
    }

    /// Replaces the tool list.
    #[must_use]
    pub fn tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.config.tools = tools;
        self
    }

    /// Finishes the config. Validation is left to the generator.
    #[must_use]
    pub fn build(self) -> GenerationConfig {
        self.config
    }
}
