//! Template contexts.
//!
//! Every value a template places inside TypeScript or JSON source is
//! precomputed here. Fields ending in `_literal` are already quoted (JSON
//! string or array syntax, which is also valid TypeScript), fields ending
//! in `_comment` are safe inside a `/** ... */` block. Optional values are
//! serialized as `null` rather than omitted so strict-mode templates can
//! test them with `{{#if}}`.

use crate::common::typescript::{extract_properties, string_literal, to_camel_case, to_pascal_case};
use crate::config::{Domain, GenerationConfig, ToolSpec};
use mcp_framework_core::{Error, Result, ServerName};
use mcp_framework_nlp::content::{PlatformLimits, platform_limits};
use mcp_framework_nlp::tables;
use serde::Serialize;

/// Description used when the config has none.
pub const DEFAULT_DESCRIPTION: &str = "MCP Server generated from template";

/// Context shared by every project-level template.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    /// Package name as given, for doc comments
    pub name_comment: String,
    pub name_literal: String,
    /// `bin` entry name: the package name without npm scope
    pub bin_literal: String,
    pub version_comment: String,
    pub version_literal: String,
    pub description_comment: String,
    pub description_literal: String,
    pub author_literal: Option<String>,
    pub license_literal: String,
    /// Startup message printed to stderr by the generated server
    pub running_literal: String,
    pub is_social: bool,
    pub is_cicd: bool,
    pub is_custom: bool,
    pub platform_names_literal: String,
    pub tone_names_literal: String,
    pub content_type_names_literal: String,
    pub platforms: Vec<PlatformEntry>,
    pub language_names_literal: String,
    pub environment_names_literal: String,
    pub trigger_names_literal: String,
    pub cloud_names_literal: String,
    pub languages: Vec<CategoryEntry>,
    pub environments: Vec<CategoryEntry>,
    pub triggers: Vec<CategoryEntry>,
    pub cloud_providers: Vec<CategoryEntry>,
    /// Custom tools in declaration order; empty for other domains
    pub tools: Vec<ToolContext>,
}

/// One row of a built-in keyword table.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    pub name_literal: String,
    pub keywords_literal: String,
}

/// A social platform with its keywords and size limits.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformEntry {
    pub name: String,
    pub keywords_literal: String,
    pub limits: Option<PlatformLimits>,
}

/// Context for one `src/tools/<camelName>.ts` file.
#[derive(Debug, Clone, Serialize)]
pub struct ToolContext {
    /// Tool name as declared (snake or kebab case)
    pub name: String,
    pub name_literal: String,
    /// Exported identifier prefix and file stem
    pub camel_name: String,
    /// Prefix of the generated `<Pascal>Args` interface
    pub pascal_name: String,
    pub description_literal: String,
    pub description_comment: String,
    pub properties: Vec<PropertyContext>,
    /// TypeScript expression awaited by the handler, if given
    pub service_call: Option<String>,
    /// Input schema as pretty-printed JSON
    pub input_schema_json: String,
}

/// A top-level input property of a tool.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyContext {
    /// Object key, quoted unless the name is a TypeScript identifier
    pub key: String,
    pub ts_type: String,
    pub required: bool,
    pub description_comment: Option<String>,
}

impl ProjectContext {
    /// Builds the project context from a validated name and config.
    ///
    /// Tool contexts are attached only for [`Domain::Custom`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if a value cannot be encoded
    /// as JSON.
    pub fn build(name: &ServerName, config: &GenerationConfig) -> Result<Self> {
        let description = config
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);

        let tools = if config.domain == Domain::Custom {
            config
                .tools
                .iter()
                .map(ToolContext::build)
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            name_comment: comment_safe(name.as_str()),
            name_literal: string_literal(name.as_str()),
            bin_literal: string_literal(name.unscoped()),
            version_comment: comment_safe(&config.version),
            version_literal: string_literal(&config.version),
            description_comment: comment_safe(description),
            description_literal: string_literal(description),
            author_literal: config
                .author
                .as_deref()
                .filter(|a| !a.trim().is_empty())
                .map(string_literal),
            license_literal: string_literal(&config.license),
            running_literal: string_literal(&format!("{name} MCP server running on stdio")),
            is_social: config.domain == Domain::Social,
            is_cicd: config.domain == Domain::Cicd,
            is_custom: config.domain == Domain::Custom,
            platform_names_literal: names_literal(tables::PLATFORMS)?,
            tone_names_literal: names_literal(tables::TONES)?,
            content_type_names_literal: names_literal(tables::CONTENT_TYPES)?,
            platforms: tables::PLATFORMS
                .iter()
                .map(|(platform, keywords)| {
                    Ok(PlatformEntry {
                        name: (*platform).to_string(),
                        keywords_literal: to_json(keywords)?,
                        limits: platform_limits(platform),
                    })
                })
                .collect::<Result<_>>()?,
            language_names_literal: names_literal(tables::LANGUAGES)?,
            environment_names_literal: names_literal(tables::ENVIRONMENTS)?,
            trigger_names_literal: names_literal(tables::TRIGGERS)?,
            cloud_names_literal: names_literal(tables::CLOUD_PROVIDERS)?,
            languages: category_entries(tables::LANGUAGES)?,
            environments: category_entries(tables::ENVIRONMENTS)?,
            triggers: category_entries(tables::TRIGGERS)?,
            cloud_providers: category_entries(tables::CLOUD_PROVIDERS)?,
            tools,
        })
    }
}

impl ToolContext {
    /// Builds the context for one declared tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the input schema cannot be
    /// pretty-printed.
    pub fn build(tool: &ToolSpec) -> Result<Self> {
        let description = if tool.description.trim().is_empty() {
            format!("Tool: {}", tool.name)
        } else {
            tool.description.trim().to_string()
        };

        let properties = extract_properties(&tool.input_schema)
            .into_iter()
            .map(|p| PropertyContext {
                key: p.key,
                ts_type: p.ts_type,
                required: p.required,
                description_comment: p.description.as_deref().map(comment_safe),
            })
            .collect();

        let input_schema_json =
            serde_json::to_string_pretty(&tool.input_schema).map_err(|e| {
                Error::SerializationError {
                    message: format!("Failed to encode input schema of '{}'", tool.name),
                    source: Some(e),
                }
            })?;

        Ok(Self {
            name: tool.name.clone(),
            name_literal: string_literal(&tool.name),
            camel_name: to_camel_case(&tool.name),
            pascal_name: to_pascal_case(&tool.name),
            description_literal: string_literal(&description),
            description_comment: comment_safe(&description),
            properties,
            service_call: tool
                .service_call
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            input_schema_json,
        })
    }
}

/// Flattens text onto one line and breaks any `*/` so it cannot end a
/// block comment early.
#[must_use]
pub fn comment_safe(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::SerializationError {
        message: "Failed to encode template value".to_string(),
        source: Some(e),
    })
}

fn names_literal(table: &[(&str, &[&str])]) -> Result<String> {
    let names: Vec<&str> = table.iter().map(|(name, _)| *name).collect();
    to_json(&names)
}

fn category_entries(table: &[(&str, &[&str])]) -> Result<Vec<CategoryEntry>> {
    table
        .iter()
        .map(|(name, keywords)| {
            Ok(CategoryEntry {
                name: (*name).to_string(),
                name_literal: string_literal(name),
                keywords_literal: to_json(keywords)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server(name: &str) -> ServerName {
        ServerName::parse(name).unwrap()
    }

    #[test]
    fn test_comment_safe() {
        assert_eq!(comment_safe("ends */ here"), "ends *\\/ here");
        assert_eq!(comment_safe("two\nlines  spaced"), "two lines spaced");
    }

    #[test]
    fn test_project_defaults() {
        let config = GenerationConfig::builder().name("@acme/tools").build();
        let ctx = ProjectContext::build(&server("@acme/tools"), &config).unwrap();

        assert_eq!(ctx.name_literal, r#""@acme/tools""#);
        assert_eq!(ctx.bin_literal, r#""tools""#);
        assert_eq!(ctx.description_literal, string_literal(DEFAULT_DESCRIPTION));
        assert!(ctx.author_literal.is_none());
        assert!(ctx.is_custom && !ctx.is_social && !ctx.is_cicd);
    }

    #[test]
    fn test_name_and_version_safe_in_comments() {
        let config = GenerationConfig::builder()
            .name("@a*/b")
            .version("1.0*/oops")
            .build();
        let ctx = ProjectContext::build(&server("@a*/b"), &config).unwrap();

        assert_eq!(ctx.name_comment, "@a*\\/b");
        assert_eq!(ctx.version_comment, "1.0*\\/oops");
        assert_eq!(ctx.name_literal, r#""@a*/b""#);
        assert_eq!(ctx.version_literal, r#""1.0*/oops""#);
    }

    #[test]
    fn test_tables_rendered_in_order() {
        let config = GenerationConfig::builder().name("s").domain(Domain::Social).build();
        let ctx = ProjectContext::build(&server("s"), &config).unwrap();

        assert!(ctx.platform_names_literal.starts_with(r#"["instagram""#));
        let instagram = &ctx.platforms[0];
        assert_eq!(instagram.limits.map(|l| l.text), Some(2200));
        assert!(ctx.platforms.iter().any(|p| p.limits.is_none()));
        assert_eq!(ctx.languages.len(), tables::LANGUAGES.len());
    }

    #[test]
    fn test_tools_only_for_custom() {
        let config = GenerationConfig::builder()
            .name("s")
            .domain(Domain::Cicd)
            .tool(ToolSpec::new("ignored", ""))
            .build();
        let ctx = ProjectContext::build(&server("s"), &config).unwrap();
        assert!(ctx.tools.is_empty());
    }

    #[test]
    fn test_tool_context() {
        let tool = ToolSpec::new("send_message", "  ")
            .with_input_schema(json!({
                "type": "object",
                "properties": {"to": {"type": "string", "description": "Recipient */"}},
                "required": ["to"]
            }))
            .with_service_call("  ");
        let ctx = ToolContext::build(&tool).unwrap();

        assert_eq!(ctx.camel_name, "sendMessage");
        assert_eq!(ctx.pascal_name, "SendMessage");
        assert_eq!(ctx.description_literal, r#""Tool: send_message""#);
        assert!(ctx.service_call.is_none());
        assert_eq!(ctx.properties[0].description_comment.as_deref(), Some("Recipient *\\/"));
        assert!(ctx.input_schema_json.contains("\"required\""));
        assert_eq!(ctx.properties[0].key, "to");
    }

    #[test]
    fn test_property_keys_quoted() {
        let tool = ToolSpec::new("lookup", "").with_input_schema(json!({
            "type": "object",
            "properties": {"user-id": {"type": "string"}, "limit": {"type": "integer"}}
        }));
        let ctx = ToolContext::build(&tool).unwrap();

        let keys: Vec<&str> = ctx.properties.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["limit", r#""user-id""#]);
    }
}
