//! Strong name types for MCP servers and tools.
//!
//! Server and tool names end up in generated package manifests, file paths
//! and TypeScript identifiers, so both are validated on construction.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_core::{ServerName, ToolName};
//!
//! let server = ServerName::parse("social-media-server").unwrap();
//! let tool = ToolName::parse("generate_content").unwrap();
//! assert_eq!(server.as_str(), "social-media-server");
//! assert_eq!(tool.as_str(), "generate_content");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated MCP server name.
///
/// Must be non-empty, contain no whitespace or control characters, and
/// contain no path separators or `..` segments. An npm scope prefix
/// (`@scope/name`) is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerName(String);

impl ServerName {
    /// Parses and validates a server name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the name is empty or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::ServerName;
    ///
    /// assert!(ServerName::parse("test-server").is_ok());
    /// assert!(ServerName::parse("@acme/tools").is_ok());
    /// assert!(ServerName::parse("").is_err());
    /// assert!(ServerName::parse("my server").is_err());
    /// assert!(ServerName::parse("../escape").is_err());
    /// ```
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "Missing required field: name".to_string(),
            });
        }

        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::ConfigError {
                message: format!("Server name '{name}' must not contain whitespace"),
            });
        }

        let unscoped = match name.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, rest)) if !scope.is_empty() && !rest.is_empty() => rest,
                _ => {
                    return Err(Error::ConfigError {
                        message: format!("Server name '{name}' has a malformed scope"),
                    });
                }
            },
            None => name.as_str(),
        };

        if unscoped.contains(['/', '\\']) || unscoped.contains("..") {
            return Err(Error::ConfigError {
                message: format!("Server name '{name}' must not contain path separators"),
            });
        }

        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name without an npm scope prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::ServerName;
    ///
    /// let name = ServerName::parse("@acme/tools").unwrap();
    /// assert_eq!(name.unscoped(), "tools");
    /// ```
    #[must_use]
    pub fn unscoped(&self) -> &str {
        self.0
            .strip_prefix('@')
            .and_then(|s| s.split_once('/'))
            .map_or(self.0.as_str(), |(_, rest)| rest)
    }

    /// Consumes the name and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ServerName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ServerName> for String {
    fn from(name: ServerName) -> Self {
        name.0
    }
}

/// Validated MCP tool name.
///
/// Tool names start with an ASCII letter and contain only ASCII letters,
/// digits, `_` and `-`, so they are safe both as MCP tool identifiers and
/// as generated file names.
///
/// # Examples
///
/// ```
/// use mcp_framework_core::ToolName;
///
/// let tool = ToolName::parse("schedule_posts").unwrap();
/// assert_eq!(tool.to_string(), "schedule_posts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolName(String);

impl ToolName {
    /// Parses and validates a tool name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the name is empty or contains
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let mut chars = name.chars();
        match chars.next() {
            None => {
                return Err(Error::ConfigError {
                    message: "Tool name cannot be empty".to_string(),
                });
            }
            Some(first) if !first.is_ascii_alphabetic() => {
                return Err(Error::ConfigError {
                    message: format!("Tool name '{name}' must start with a letter"),
                });
            }
            Some(_) => {}
        }

        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(Error::ConfigError {
                message: format!(
                    "Tool name '{name}' may only contain letters, digits, '_' and '-'"
                ),
            });
        }

        Ok(Self(name))
    }

    /// Returns the tool name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ToolName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_name_valid() {
        assert!(ServerName::parse("test-server").is_ok());
        assert!(ServerName::parse("server_v2.1").is_ok());
        assert!(ServerName::parse("@scope/name").is_ok());
    }

    #[test]
    fn test_server_name_empty_is_config_error() {
        let err = ServerName::parse("").unwrap_err();
        assert!(err.is_config_error());
        let err = ServerName::parse("   ").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_server_name_rejects_paths() {
        assert!(ServerName::parse("a/b").is_err());
        assert!(ServerName::parse("a\\b").is_err());
        assert!(ServerName::parse("..").is_err());
        assert!(ServerName::parse("@/name").is_err());
        assert!(ServerName::parse("@scope/").is_err());
        assert!(ServerName::parse("@scope/../x").is_err());
    }

    #[test]
    fn test_server_name_unscoped() {
        assert_eq!(ServerName::parse("plain").unwrap().unscoped(), "plain");
        assert_eq!(ServerName::parse("@a/b").unwrap().unscoped(), "b");
    }

    #[test]
    fn test_tool_name_valid() {
        assert!(ToolName::parse("generate_content").is_ok());
        assert!(ToolName::parse("deploy-app").is_ok());
        assert!(ToolName::parse("x1").is_ok());
    }

    #[test]
    fn test_tool_name_invalid() {
        assert!(ToolName::parse("").is_err());
        assert!(ToolName::parse("1tool").is_err());
        assert!(ToolName::parse("bad name").is_err());
        assert!(ToolName::parse("../etc").is_err());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let name: ToolName = serde_json::from_str("\"post_content\"").unwrap();
        assert_eq!(name.as_str(), "post_content");
        assert!(serde_json::from_str::<ToolName>("\"has space\"").is_err());
        assert!(serde_json::from_str::<ServerName>("\"\"").is_err());
    }
}
