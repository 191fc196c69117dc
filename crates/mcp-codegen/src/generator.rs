//! TypeScript MCP server generator.
//!
//! Turns a [`GenerationConfig`] into the files of a ready-to-build npm
//! project. The file set depends only on the [`Domain`] (and, for custom
//! servers, on the declared tools), and generation is deterministic: the
//! same config always yields the same paths in the same order with
//! byte-identical content.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_codegen::{Domain, GenerationConfig, ServerGenerator};
//!
//! let config = GenerationConfig::builder()
//!     .name("test-server")
//!     .domain(Domain::Social)
//!     .build();
//!
//! let code = ServerGenerator::new().unwrap().generate(&config).unwrap();
//! assert_eq!(code.file_count(), 9);
//! assert!(code.get("package.json").unwrap().content().contains("\"test-server\""));
//! ```

use crate::common::types::{GeneratedCode, GeneratedFile};
use crate::common::typescript::to_camel_case;
use crate::config::{Domain, GenerationConfig};
use crate::context::ProjectContext;
use crate::template_engine::TemplateEngine;
use mcp_framework_core::{Error, Result, ServerName, ToolName};
use std::collections::HashSet;

/// Files every domain starts with, as `(path, template)` pairs.
const BASE_FILES: &[(&str, &str)] = &[
    ("package.json", "common/package.json"),
    ("tsconfig.json", "common/tsconfig.json"),
];

const SOCIAL_FILES: &[(&str, &str)] = &[
    ("src/index.ts", "social/index"),
    ("src/types/index.ts", "social/types"),
    ("src/services/BaseService.ts", "common/base-service"),
    ("src/services/PlatformService.ts", "social/platform-service"),
    (
        "src/services/ContentGeneratorService.ts",
        "social/content-generator-service",
    ),
    ("src/services/AnalyticsService.ts", "social/analytics-service"),
    ("src/services/SchedulerService.ts", "social/scheduler-service"),
];

const CICD_FILES: &[(&str, &str)] = &[
    ("src/index.ts", "cicd/index"),
    ("src/types/index.ts", "cicd/types"),
    ("src/services/BaseService.ts", "common/base-service"),
    (
        "src/services/RequirementsProcessor.ts",
        "cicd/requirements-processor",
    ),
    ("src/services/PipelineGenerator.ts", "cicd/pipeline-generator"),
    ("src/services/DeploymentService.ts", "cicd/deployment-service"),
];

const CUSTOM_FILES: &[(&str, &str)] = &[
    ("src/index.ts", "custom/index"),
    ("src/types/index.ts", "custom/types"),
    ("src/services/BaseService.ts", "common/base-service"),
];

/// Template rendered once per custom tool.
const TOOL_TEMPLATE: &str = "custom/tool";

/// Domain-specific part of the fixed file manifest.
const fn domain_files(domain: Domain) -> &'static [(&'static str, &'static str)] {
    match domain {
        Domain::Social => SOCIAL_FILES,
        Domain::Cicd => CICD_FILES,
        Domain::Custom => CUSTOM_FILES,
    }
}

/// Fixed `(path, template)` manifest of a domain, in generation order.
///
/// Custom servers additionally get one `src/tools/<camelName>.ts` per
/// declared tool after these files.
///
/// # Examples
///
/// ```
/// use mcp_framework_codegen::Domain;
/// use mcp_framework_codegen::generator::manifest;
///
/// assert_eq!(manifest(Domain::Social).len(), 9);
/// assert_eq!(manifest(Domain::Cicd).len(), 8);
/// assert_eq!(manifest(Domain::Custom).len(), 5);
/// ```
#[must_use]
pub fn manifest(domain: Domain) -> Vec<(&'static str, &'static str)> {
    BASE_FILES
        .iter()
        .chain(domain_files(domain))
        .copied()
        .collect()
}

/// Generator for TypeScript MCP server projects.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; `generate` takes `&self` and keeps no
/// state between calls.
#[derive(Debug)]
pub struct ServerGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ServerGenerator<'a> {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Creates a generator around an existing engine.
    ///
    /// Templates registered on the engine under a built-in name replace the
    /// built-in version, which lets callers customise individual files.
    #[must_use]
    pub fn with_engine(engine: TemplateEngine<'a>) -> Self {
        Self { engine }
    }

    /// Generates the project files for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the name or version is missing or
    /// malformed, or if a custom tool has an invalid or duplicate name, and
    /// [`Error::TemplateError`] if rendering fails.
    pub fn generate(&self, config: &GenerationConfig) -> Result<GeneratedCode> {
        let name = ServerName::parse(config.name.as_str())?;
        validate_version(&config.version)?;

        if config.domain == Domain::Custom {
            validate_tools(config)?;
        } else if !config.tools.is_empty() {
            tracing::warn!(
                domain = %config.domain,
                tools = config.tools.len(),
                "tools are only generated for custom servers, ignoring"
            );
        }

        tracing::info!(
            server = %name,
            domain = %config.domain,
            version = %config.version,
            "generating MCP server"
        );

        let context = ProjectContext::build(&name, config)?;
        let mut code = GeneratedCode::new();

        for (path, template) in manifest(config.domain) {
            self.render_into(&mut code, path.to_string(), template, &context)?;
        }

        for tool in &context.tools {
            let path = format!("src/tools/{}.ts", tool.camel_name);
            self.render_into(&mut code, path, TOOL_TEMPLATE, tool)?;
        }

        tracing::info!(
            server = %name,
            files = code.file_count(),
            "generated MCP server"
        );

        Ok(code)
    }

    fn render_into<T: serde::Serialize>(
        &self,
        code: &mut GeneratedCode,
        path: String,
        template: &str,
        context: &T,
    ) -> Result<()> {
        let content = self.engine.render(template, context)?;
        tracing::debug!(path = %path, template, bytes = content.len(), "rendered file");
        code.add_file(GeneratedFile::new(path, content));
        Ok(())
    }
}

fn validate_version(version: &str) -> Result<()> {
    if version.trim().is_empty() {
        return Err(Error::ConfigError {
            message: "Version cannot be empty".to_string(),
        });
    }
    if version.chars().any(char::is_whitespace) {
        return Err(Error::ConfigError {
            message: format!("Version '{version}' must not contain whitespace"),
        });
    }
    Ok(())
}

/// Tool names must be valid and unique, both as declared and as the
/// camelCase file stem.
fn validate_tools(config: &GenerationConfig) -> Result<()> {
    let mut names = HashSet::new();
    let mut stems = HashSet::new();

    for tool in &config.tools {
        let name = ToolName::parse(tool.name.as_str())?;

        if !tool.input_schema.is_object() {
            return Err(Error::ConfigError {
                message: format!("Input schema of tool '{name}' must be a JSON object"),
            });
        }

        if !names.insert(name.as_str().to_string()) {
            return Err(Error::ConfigError {
                message: format!("Duplicate tool name: {name}"),
            });
        }

        let stem = to_camel_case(name.as_str());
        if !stems.insert(stem.clone()) {
            return Err(Error::ConfigError {
                message: format!("Tool '{name}' collides with another tool as '{stem}'"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolSpec;
    use serde_json::json;

    fn generator() -> ServerGenerator<'static> {
        ServerGenerator::new().unwrap()
    }

    #[test]
    fn test_manifest_paths_unique() {
        for domain in Domain::ALL {
            let paths: HashSet<_> = manifest(domain).iter().map(|(p, _)| *p).collect();
            assert_eq!(paths.len(), manifest(domain).len(), "{domain}");
        }
    }

    #[test]
    fn test_manifest_templates_registered() {
        let engine = TemplateEngine::new().unwrap();
        for domain in Domain::ALL {
            for (_, template) in manifest(domain) {
                assert!(engine.has_template(template), "{template}");
            }
        }
        assert!(engine.has_template(TOOL_TEMPLATE));
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = GenerationConfig::default();
        let err = generator().generate(&config).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_version_validation() {
        let config = GenerationConfig::builder().name("s").version(" ").build();
        assert!(generator().generate(&config).unwrap_err().is_config_error());

        let config = GenerationConfig::builder().name("s").version("1.0 beta").build();
        assert!(generator().generate(&config).unwrap_err().is_config_error());
    }

    #[test]
    fn test_invalid_tool_name_rejected() {
        let config = GenerationConfig::builder()
            .name("s")
            .tool(ToolSpec::new("9lives", ""))
            .build();
        assert!(generator().generate(&config).unwrap_err().is_config_error());
    }

    #[test]
    fn test_camel_collision_rejected() {
        let config = GenerationConfig::builder()
            .name("s")
            .tool(ToolSpec::new("send_message", ""))
            .tool(ToolSpec::new("send-message", ""))
            .build();
        let err = generator().generate(&config).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("sendMessage"));
    }

    #[test]
    fn test_non_object_schema_rejected() {
        let config = GenerationConfig::builder()
            .name("s")
            .tool(ToolSpec::new("echo", "").with_input_schema(json!("string")))
            .build();
        assert!(generator().generate(&config).unwrap_err().is_config_error());
    }

    #[test]
    fn test_tools_ignored_outside_custom() {
        let config = GenerationConfig::builder()
            .name("s")
            .domain(Domain::Cicd)
            .tool(ToolSpec::new("9lives", ""))
            .build();
        let code = generator().generate(&config).unwrap();
        assert_eq!(code.file_count(), 8);
    }

    #[test]
    fn test_custom_engine_override() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("common/tsconfig.json", "{}\n")
            .unwrap();
        let generator = ServerGenerator::with_engine(engine);

        let config = GenerationConfig::builder().name("s").build();
        let code = generator.generate(&config).unwrap();
        assert_eq!(code.get("tsconfig.json").unwrap().content(), "{}\n");
    }
}
