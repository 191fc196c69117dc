//! Template engine for code generation using Handlebars.
//!
//! Wraps a strict-mode Handlebars registry preloaded with the built-in
//! TypeScript project templates. Output is never HTML-escaped: templates
//! produce source code, and values that end up inside string literals are
//! quoted by the generator beforehand.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("banner", "// {{name}} <{{version}}>").unwrap();
//!
//! let out = engine.render("banner", &json!({"name": "a&b", "version": "1.0.0"})).unwrap();
//! assert_eq!(out, "// a&b <1.0.0>");
//! ```

use handlebars::Handlebars;
use mcp_framework_core::{Error, Result};
use serde::Serialize;

/// Built-in templates as `(name, source)` pairs.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "common/package.json",
        include_str!("../templates/typescript/common/package.json.hbs"),
    ),
    (
        "common/tsconfig.json",
        include_str!("../templates/typescript/common/tsconfig.json.hbs"),
    ),
    (
        "common/base-service",
        include_str!("../templates/typescript/common/base-service.ts.hbs"),
    ),
    (
        "social/index",
        include_str!("../templates/typescript/social/index.ts.hbs"),
    ),
    (
        "social/types",
        include_str!("../templates/typescript/social/types.ts.hbs"),
    ),
    (
        "social/platform-service",
        include_str!("../templates/typescript/social/platform-service.ts.hbs"),
    ),
    (
        "social/content-generator-service",
        include_str!("../templates/typescript/social/content-generator-service.ts.hbs"),
    ),
    (
        "social/analytics-service",
        include_str!("../templates/typescript/social/analytics-service.ts.hbs"),
    ),
    (
        "social/scheduler-service",
        include_str!("../templates/typescript/social/scheduler-service.ts.hbs"),
    ),
    (
        "cicd/index",
        include_str!("../templates/typescript/cicd/index.ts.hbs"),
    ),
    (
        "cicd/types",
        include_str!("../templates/typescript/cicd/types.ts.hbs"),
    ),
    (
        "cicd/requirements-processor",
        include_str!("../templates/typescript/cicd/requirements-processor.ts.hbs"),
    ),
    (
        "cicd/pipeline-generator",
        include_str!("../templates/typescript/cicd/pipeline-generator.ts.hbs"),
    ),
    (
        "cicd/deployment-service",
        include_str!("../templates/typescript/cicd/deployment-service.ts.hbs"),
    ),
    (
        "custom/index",
        include_str!("../templates/typescript/custom/index.ts.hbs"),
    ),
    (
        "custom/types",
        include_str!("../templates/typescript/custom/types.ts.hbs"),
    ),
    (
        "custom/tool",
        include_str!("../templates/typescript/custom/tool.ts.hbs"),
    ),
];

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; one engine can serve concurrent
/// generation calls.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates an engine with every built-in template registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Missing variables are render errors
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in BUILTIN_TEMPLATES {
            handlebars
                .register_template_string(name, *source)
                .map_err(|e| Error::TemplateError {
                    template: (*name).to_string(),
                    message: format!("Failed to register template: {e}"),
                })?;
        }

        tracing::debug!(templates = BUILTIN_TEMPLATES.len(), "template engine ready");
        Ok(Self { handlebars })
    }

    /// Renders a registered template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template is unknown, a
    /// referenced variable is missing, or rendering otherwise fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers an additional template, replacing any with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template does not parse.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("Failed to register template: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Names of the built-in templates.
    #[must_use]
    pub fn builtin_names() -> Vec<&'static str> {
        BUILTIN_TEMPLATES.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new().expect("built-in templates parse")
    }
}
