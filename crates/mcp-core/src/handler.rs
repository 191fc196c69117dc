//! Error-to-response mapping for MCP tool handlers.
//!
//! [`ErrorHandler`] turns any [`Error`] into an [`ErrorResponse`] using the
//! error's own code and details, unless a custom handler was registered for
//! its [`ErrorCode`]. Errors from other crates go through
//! [`ErrorHandler::handle_any`] and come out as `UNKNOWN_ERROR`.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_core::{Error, ErrorCode, ErrorHandler, ErrorResponse};
//!
//! let mut handler = ErrorHandler::new();
//! handler.register(ErrorCode::ApiRateLimited, |_| {
//!     ErrorResponse::new(ErrorCode::ApiRateLimited, "Slow down and retry later")
//! });
//!
//! let err = Error::ApiError {
//!     message: "Too many requests".to_string(),
//!     status_code: Some(429),
//!     response_body: None,
//!     endpoint: None,
//! };
//! assert_eq!(handler.handle(&err).message, "Slow down and retry later");
//! ```

use crate::error::{Error, ErrorCode, ErrorResponse};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

type CustomHandler = Box<dyn Fn(&Error) -> ErrorResponse + Send + Sync>;

/// Maps errors to wire-level responses.
///
/// With [`with_source_chain`](Self::with_source_chain) enabled the
/// response also lists the messages of the error's `source()` chain under
/// `details.source_chain`. Authentication errors never get a source chain.
#[derive(Default)]
pub struct ErrorHandler {
    include_sources: bool,
    handlers: HashMap<ErrorCode, CustomHandler>,
}

impl ErrorHandler {
    /// Creates a handler with the default mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the `source_chain` detail.
    #[must_use]
    pub fn with_source_chain(mut self, include: bool) -> Self {
        self.include_sources = include;
        self
    }

    /// Replaces the response for every error with the given code.
    ///
    /// Registering twice for the same code keeps the later handler.
    pub fn register<F>(&mut self, code: ErrorCode, handler: F)
    where
        F: Fn(&Error) -> ErrorResponse + Send + Sync + 'static,
    {
        self.handlers.insert(code, Box::new(handler));
    }

    /// Builds the response for a framework error.
    #[must_use]
    pub fn handle(&self, error: &Error) -> ErrorResponse {
        let code = error.code();
        let mut response = match self.handlers.get(&code) {
            Some(custom) => custom(error),
            None => error.to_response(),
        };

        if self.include_sources && !error.is_auth_error() {
            attach_sources(&mut response, error);
        }

        tracing::debug!(code = %response.code, "mapped error to response");
        response
    }

    /// Builds the response for an error that is not a framework [`Error`].
    ///
    /// The response has code `UNKNOWN_ERROR`, the error's message, and the
    /// Rust type name under `details.error_type`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::{ErrorCode, ErrorHandler};
    ///
    /// let err = "x".parse::<u32>().unwrap_err();
    /// let response = ErrorHandler::new().handle_any(&err);
    /// assert_eq!(response.code, ErrorCode::UnknownError);
    /// assert_eq!(response.details.unwrap()["error_type"], "core::num::error::ParseIntError");
    /// ```
    #[must_use]
    pub fn handle_any<E>(&self, error: &E) -> ErrorResponse
    where
        E: std::error::Error + 'static,
    {
        if let Some(framework) = (error as &dyn std::error::Error).downcast_ref::<Error>() {
            return self.handle(framework);
        }

        let mut response = ErrorResponse::new(ErrorCode::UnknownError, error.to_string())
            .with_details(serde_json::json!({
                "error_type": std::any::type_name::<E>(),
            }));
        if self.include_sources {
            attach_sources(&mut response, error);
        }
        response
    }
}

impl fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<&str> = self.handlers.keys().map(|c| c.as_str()).collect();
        codes.sort_unstable();
        f.debug_struct("ErrorHandler")
            .field("include_sources", &self.include_sources)
            .field("custom_handlers", &codes)
            .finish()
    }
}

fn attach_sources(response: &mut ErrorResponse, error: &dyn std::error::Error) {
    let chain: Vec<Value> = std::iter::successors(error.source(), |e| e.source())
        .map(|e| Value::String(e.to_string()))
        .collect();
    if chain.is_empty() {
        return;
    }

    let mut details = match response.details.take() {
        Some(Value::Object(map)) => map,
        Some(other) => {
            let mut map = Map::new();
            map.insert("details".to_string(), other);
            map
        }
        None => Map::new(),
    };
    details.insert("source_chain".to_string(), Value::Array(chain));
    response.details = Some(Value::Object(details));
}
