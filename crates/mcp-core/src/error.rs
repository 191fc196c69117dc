//! Error types for the MCP framework.
//!
//! Every crate in the workspace reports failures through [`Error`]. Each
//! variant maps onto a stable [`ErrorCode`] so that tool handlers can turn
//! an error into the wire-level [`ErrorResponse`] envelope.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_core::{Error, Result};
//!
//! fn require_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "Server name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_name("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Main error type for the MCP framework.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when a configuration is missing required fields or contains
    /// malformed values, e.g. a generation config without a server name.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Validation error for domain types and request parameters.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when JSON, TOML or other data format conversion fails.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Template registration or rendering failed.
    #[error("Template error in '{template}': {message}")]
    TemplateError {
        /// Name of the template involved
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Authentication provider could not be built or used.
    #[error("Authentication error: {message}")]
    AuthError {
        /// Description of the authentication failure
        message: String,
    },

    /// A registered service failed.
    #[error("Service '{service}' failed: {message}")]
    ServiceError {
        /// Name of the failing service
        service: String,
        /// Description of the failure
        message: String,
    },

    /// A configuration entry has an unacceptable value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue {
        /// Configuration key, e.g. `port` or `log_level`
        key: String,
        /// What is wrong with the value
        message: String,
    },

    /// An upstream HTTP API answered with an error.
    ///
    /// Status 429 maps to [`ErrorCode::ApiRateLimited`] and 502-504 to
    /// [`ErrorCode::ApiUnavailable`]; every other status is
    /// [`ErrorCode::ApiError`].
    #[error("API error: {message}")]
    ApiError {
        /// Description of the failure
        message: String,
        /// HTTP status, when a response was received
        status_code: Option<u16>,
        /// Response body, when one was received
        response_body: Option<String>,
        /// Endpoint that was called
        endpoint: Option<String>,
    },

    /// An upstream HTTP API did not answer in time.
    #[error("API timeout: {message}")]
    ApiTimeout {
        /// Description of the timeout
        message: String,
        /// Endpoint that was called
        endpoint: Option<String>,
        /// Configured timeout
        timeout_seconds: Option<u64>,
    },

    /// A tool or external command did not finish in time.
    #[error("Timeout: {message}")]
    ToolTimeout {
        /// Description of the timeout
        message: String,
        /// Configured timeout
        timeout_seconds: Option<u64>,
    },

    /// A tool or external command failed.
    #[error("Tool error: {message}")]
    ToolError {
        /// Description of the failure
        message: String,
        /// Name of the tool or command
        tool_name: Option<String>,
        /// Process exit code
        exit_code: Option<i32>,
        /// Captured standard error
        stderr: Option<String>,
    },

    /// Filesystem I/O failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Missing required field: name".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. }
        )
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an authentication error.
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthError { .. })
    }

    /// Returns `true` for upstream API errors and API timeouts.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. } | Self::ApiTimeout { .. })
    }

    /// Returns `true` for tool or API timeouts.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::ToolTimeout { .. } | Self::ApiTimeout { .. })
    }

    /// Returns `true` if this is a tool execution error.
    #[must_use]
    pub const fn is_tool_error(&self) -> bool {
        matches!(self, Self::ToolError { .. })
    }

    /// Returns the stable error code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::{Error, ErrorCode};
    ///
    /// let err = Error::AuthError { message: "no key".to_string() };
    /// assert_eq!(err.code(), ErrorCode::AuthFailed);
    /// ```
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => ErrorCode::ConfigInvalid,
            Self::ValidationError { .. } => ErrorCode::InvalidParameter,
            Self::SerializationError { .. } | Self::TemplateError { .. } | Self::Io { .. } => {
                ErrorCode::UnknownError
            }
            Self::AuthError { .. } => ErrorCode::AuthFailed,
            Self::ServiceError { .. } | Self::ToolError { .. } => ErrorCode::ToolExecutionFailed,
            Self::ApiError { status_code, .. } => match status_code {
                Some(429) => ErrorCode::ApiRateLimited,
                Some(502..=504) => ErrorCode::ApiUnavailable,
                _ => ErrorCode::ApiError,
            },
            Self::ApiTimeout { .. } => ErrorCode::ApiTimeout,
            Self::ToolTimeout { .. } => ErrorCode::ToolTimeout,
        }
    }

    /// Converts the error into a wire-level error response.
    ///
    /// Structured fields of the error (the offending parameter, HTTP
    /// status, exit code, config key and so on) go into `details`; absent
    /// optional fields are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "platform".to_string(),
    ///     reason: "unsupported".to_string(),
    /// };
    /// let body = err.to_response().to_value();
    /// assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
    /// assert_eq!(body["error"]["details"]["parameter"], "platform");
    /// ```
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.to_string(),
            details: self.details(),
            trace_id: None,
        }
    }

    /// Structured details of the error, if it has any.
    #[must_use]
    pub fn details(&self) -> Option<Value> {
        let mut details = Map::new();
        let mut put = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                details.insert(key.to_string(), value);
            }
        };

        match self {
            Self::ValidationError { field, .. } => put("parameter", Some(field.as_str().into())),
            Self::ServiceError { service, .. } => put("service", Some(service.as_str().into())),
            Self::TemplateError { template, .. } => put("template", Some(template.as_str().into())),
            Self::InvalidConfigValue { key, .. } => put("config_key", Some(key.as_str().into())),
            Self::ApiError {
                status_code,
                response_body,
                endpoint,
                ..
            } => {
                put("status_code", status_code.map(Value::from));
                put("response_body", response_body.as_deref().map(Value::from));
                put("endpoint", endpoint.as_deref().map(Value::from));
            }
            Self::ApiTimeout {
                endpoint,
                timeout_seconds,
                ..
            } => {
                put("endpoint", endpoint.as_deref().map(Value::from));
                put("timeout_seconds", timeout_seconds.map(Value::from));
            }
            Self::ToolTimeout {
                timeout_seconds, ..
            } => put("timeout_seconds", timeout_seconds.map(Value::from)),
            Self::ToolError {
                tool_name,
                exit_code,
                stderr,
                ..
            } => {
                put("tool_name", tool_name.as_deref().map(Value::from));
                put("exit_code", exit_code.map(Value::from));
                put("stderr", stderr.as_deref().map(Value::from));
            }
            Self::ConfigError { .. }
            | Self::SerializationError { .. }
            | Self::AuthError { .. }
            | Self::Io { .. } => {}
        }

        (!details.is_empty()).then_some(Value::Object(details))
    }
}

/// Ready-made errors for situations MCP servers run into again and again.
impl Error {
    /// An API key for `service` was not configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::{Error, ErrorCode};
    ///
    /// let err = Error::missing_api_key("OpenAI");
    /// assert_eq!(err.code(), ErrorCode::AuthFailed);
    /// assert_eq!(err.to_string(), "Authentication error: OpenAI API key not provided");
    /// ```
    #[must_use]
    pub fn missing_api_key(service: &str) -> Self {
        Self::AuthError {
            message: format!("{service} API key not provided"),
        }
    }

    /// A model identifier was rejected.
    #[must_use]
    pub fn invalid_model_id(model_id: &str) -> Self {
        Self::ValidationError {
            field: "model_id".to_string(),
            reason: format!("Invalid model ID: {model_id} (expected a valid model identifier)"),
        }
    }

    /// A command is not on the allow-list.
    #[must_use]
    pub fn command_not_allowed(command: &str) -> Self {
        Self::ValidationError {
            field: "command".to_string(),
            reason: format!("Command not allowed: {command}"),
        }
    }

    /// A file named in a request does not exist.
    #[must_use]
    pub fn file_not_found(file_path: &str) -> Self {
        Self::ValidationError {
            field: "file_path".to_string(),
            reason: format!("File not found: {file_path}"),
        }
    }

    /// A build step exited unsuccessfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::Error;
    ///
    /// let body = Error::build_failed(2, "error[E0425]").to_response().to_value();
    /// assert_eq!(body["error"]["code"], "TOOL_EXECUTION_FAILED");
    /// assert_eq!(body["error"]["details"]["tool_name"], "build");
    /// assert_eq!(body["error"]["details"]["exit_code"], 2);
    /// ```
    #[must_use]
    pub fn build_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::ToolError {
            message: "Build process failed".to_string(),
            tool_name: Some("build".to_string()),
            exit_code: Some(exit_code),
            stderr: Some(stderr.into()),
        }
    }
}

/// Stable error codes shared by generated servers and the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unclassified failure
    UnknownError,
    /// Request could not be understood
    InvalidRequest,
    /// A required parameter is absent
    MissingParameter,
    /// A parameter has an invalid value
    InvalidParameter,
    /// Credentials were rejected
    AuthFailed,
    /// Credentials were not supplied
    AuthMissing,
    /// Credentials have expired
    AuthExpired,
    /// Caller lacks permission
    PermissionDenied,
    /// Upstream API returned an error
    ApiError,
    /// Upstream API timed out
    ApiTimeout,
    /// Upstream API rate limit hit
    ApiRateLimited,
    /// Upstream API unreachable
    ApiUnavailable,
    /// Requested tool does not exist
    ToolNotFound,
    /// Tool handler failed
    ToolExecutionFailed,
    /// Tool handler timed out
    ToolTimeout,
    /// Requested resource does not exist
    ResourceNotFound,
    /// Access to resource denied
    ResourceAccessDenied,
    /// Configuration value absent
    ConfigMissing,
    /// Configuration value malformed
    ConfigInvalid,
}

impl ErrorCode {
    /// Returns the code as it appears on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::ApiRateLimited.as_str(), "API_RATE_LIMITED");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::AuthFailed => "AUTH_FAILED",
            Self::AuthMissing => "AUTH_MISSING",
            Self::AuthExpired => "AUTH_EXPIRED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ApiError => "API_ERROR",
            Self::ApiTimeout => "API_TIMEOUT",
            Self::ApiRateLimited => "API_RATE_LIMITED",
            Self::ApiUnavailable => "API_UNAVAILABLE",
            Self::ToolNotFound => "TOOL_NOT_FOUND",
            Self::ToolExecutionFailed => "TOOL_EXECUTION_FAILED",
            Self::ToolTimeout => "TOOL_TIMEOUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ResourceAccessDenied => "RESOURCE_ACCESS_DENIED",
            Self::ConfigMissing => "CONFIG_MISSING",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire-level error envelope: `{"error": {"code", "message", "details"?, "trace_id"?}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional structured details
    pub details: Option<Value>,
    /// Optional request trace identifier
    pub trace_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a response without details.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            trace_id: None,
        }
    }

    /// Attaches structured details.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attaches a trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Renders the envelope as JSON. Empty details are omitted.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut error = serde_json::Map::new();
        error.insert("code".to_string(), Value::from(self.code.as_str()));
        error.insert("message".to_string(), Value::from(self.message.clone()));

        if let Some(details) = self.details.as_ref().filter(|d| !is_empty_value(d)) {
            error.insert("details".to_string(), details.clone());
        }
        if let Some(trace_id) = &self.trace_id {
            error.insert("trace_id".to_string(), Value::from(trace_id.clone()));
        }

        serde_json::json!({ "error": error })
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Result type alias for framework operations.
///
/// # Examples
///
/// ```
/// use mcp_framework_core::{Result, Error};
///
/// fn validate_port(port: u32) -> Result<u16> {
///     u16::try_from(port)
///         .ok()
///         .filter(|p| *p != 0)
///         .ok_or_else(|| Error::ConfigError {
///             message: format!("Invalid port: {port}"),
///         })
/// }
///
/// assert!(validate_port(8080).is_ok());
/// assert!(validate_port(0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
