//! Scaffolding for TypeScript MCP servers.
//!
//! Renders a complete npm project (package manifest, compiler config, MCP
//! entry point, shared types and a service layer) from a
//! [`GenerationConfig`] using Handlebars templates compiled into the
//! crate. Three domains are available: a social media content server, a
//! CI/CD pipeline server, and a custom server built from declared tools.
//!
//! Generation is pure. The result is a [`GeneratedCode`] value; call
//! [`GeneratedCode::write_to`] to put it on disk.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_codegen::{GenerationConfig, ServerGenerator, ToolSpec};
//! use serde_json::json;
//!
//! let config = GenerationConfig::builder()
//!     .name("weather-server")
//!     .tool(
//!         ToolSpec::new("get_forecast", "Forecast for a city").with_input_schema(json!({
//!             "type": "object",
//!             "properties": {"city": {"type": "string"}},
//!             "required": ["city"]
//!         })),
//!     )
//!     .build();
//!
//! let code = ServerGenerator::new().unwrap().generate(&config).unwrap();
//! assert_eq!(code.file_count(), 6);
//! assert!(code.get("src/tools/getForecast.ts").is_some());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod common;
pub mod config;
mod context;
pub mod generator;
pub mod template_engine;

pub use common::{GeneratedCode, GeneratedFile};
pub use config::{Domain, GenerationConfig, GenerationConfigBuilder, ToolSpec};
pub use generator::ServerGenerator;
pub use template_engine::TemplateEngine;
