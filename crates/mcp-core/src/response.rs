//! MCP tool response envelope.
//!
//! Tool handlers return `{"content": [{"type": "text", "text": ...}]}`.
//! [`ToolResponse`] builds that envelope from strings, serializable values
//! or raw JSON.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single content block of a tool response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text content
    Text {
        /// The text payload
        text: String,
    },
}

/// Standardized tool response.
///
/// # Examples
///
/// ```
/// use mcp_framework_core::ToolResponse;
/// use serde_json::json;
///
/// let response = ToolResponse::from_value(&json!(["a", "b"]));
/// assert_eq!(response.first_text(), Some("a\nb"));
///
/// let response = ToolResponse::text("done");
/// assert_eq!(
///     serde_json::to_value(&response).unwrap(),
///     json!({"content": [{"type": "text", "text": "done"}]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Content blocks in display order
    pub content: Vec<ContentBlock>,
}

impl ToolResponse {
    /// Wraps plain text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Serializes `data` as pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if `data` cannot be serialized.
    pub fn json<T: Serialize>(data: &T) -> Result<Self> {
        let text = serde_json::to_string_pretty(data).map_err(|e| Error::SerializationError {
            message: format!("Failed to serialize tool response: {e}"),
            source: Some(e),
        })?;
        Ok(Self::text(text))
    }

    /// Formats a JSON value the way tool handlers expect.
    ///
    /// Objects are pretty-printed, arrays become one item per line,
    /// strings are used verbatim and other scalars are stringified.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let text = match value {
            Value::Object(_) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join("\n"),
            other => scalar_text(other),
        };
        Self::text(text)
    }

    /// Returns the text of the first content block.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            ContentBlock::Text { text } => text.as_str(),
        })
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
