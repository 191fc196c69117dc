//! Service-layer abstractions for MCP servers.
//!
//! Servers built on the framework split their logic into named services
//! (content generation, analytics, scheduling, deployment...) that tool
//! handlers look up by name. This module provides the [`Service`] trait,
//! a [`ServiceRegistry`] that initializes each service exactly once, and
//! the [`ServiceResponse`] envelope services return.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_core::service::{Service, ServiceRegistry};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct Analytics;
//!
//! #[async_trait]
//! impl Service for Analytics {
//!     fn name(&self) -> &str {
//!         "analytics"
//!     }
//! }
//!
//! # async fn example() -> mcp_framework_core::Result<()> {
//! let mut registry = ServiceRegistry::new();
//! registry.register(Arc::new(Analytics));
//! registry.initialize_all().await?;
//! assert!(registry.is_initialized("analytics"));
//! # Ok(())
//! # }
//! ```

use crate::{Error, ErrorCode, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A named unit of server logic.
///
/// `setup` runs once, the first time the owning registry is initialized.
#[async_trait]
pub trait Service: Send + Sync {
    /// Unique service name used for lookup.
    fn name(&self) -> &str;

    /// One-time initialization.
    ///
    /// # Errors
    ///
    /// Implementations return an error if the service cannot start.
    async fn setup(&self) -> Result<()> {
        Ok(())
    }

    /// Releases resources held by the service.
    ///
    /// # Errors
    ///
    /// Implementations return an error if shutdown fails.
    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

struct Registered {
    service: Arc<dyn Service>,
    initialized: bool,
}

/// Registry of services in registration order.
#[derive(Default)]
pub struct ServiceRegistry {
    services: Vec<Registered>,
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.names())
            .finish()
    }
}

impl ServiceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a service.
    ///
    /// A service with the same name replaces the earlier one in place and
    /// will be initialized again.
    pub fn register(&mut self, service: Arc<dyn Service>) {
        let name = service.name().to_string();
        let entry = Registered {
            service,
            initialized: false,
        };

        if let Some(slot) = self
            .services
            .iter_mut()
            .find(|r| r.service.name() == name)
        {
            tracing::debug!(service = %name, "replacing registered service");
            *slot = entry;
        } else {
            tracing::info!(service = %name, "registered service");
            self.services.push(entry);
        }
    }

    /// Looks up a service by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Service>> {
        self.services
            .iter()
            .find(|r| r.service.name() == name)
            .map(|r| Arc::clone(&r.service))
    }

    /// Looks up a service by name, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceError`] if no service has that name.
    pub fn require(&self, name: &str) -> Result<Arc<dyn Service>> {
        self.get(name).ok_or_else(|| Error::ServiceError {
            service: name.to_string(),
            message: "service is not registered".to_string(),
        })
    }

    /// Runs `setup` on every service not yet initialized, in registration order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing service and returns its error wrapped in
    /// [`Error::ServiceError`]; services initialized before it stay initialized.
    pub async fn initialize_all(&mut self) -> Result<()> {
        for entry in self.services.iter_mut().filter(|r| !r.initialized) {
            let name = entry.service.name().to_string();
            entry
                .service
                .setup()
                .await
                .map_err(|e| Error::ServiceError {
                    service: name.clone(),
                    message: e.to_string(),
                })?;
            entry.initialized = true;
            tracing::info!(service = %name, "service initialized");
        }
        Ok(())
    }

    /// Shuts down every initialized service in reverse registration order.
    ///
    /// # Errors
    ///
    /// Returns the first shutdown error after attempting all services.
    pub async fn shutdown_all(&mut self) -> Result<()> {
        let mut first_error = None;

        for entry in self.services.iter_mut().rev().filter(|r| r.initialized) {
            let name = entry.service.name().to_string();
            match entry.service.shutdown().await {
                Ok(()) => entry.initialized = false,
                Err(e) => {
                    tracing::warn!(service = %name, error = %e, "service shutdown failed");
                    first_error.get_or_insert(Error::ServiceError {
                        service: name,
                        message: e.to_string(),
                    });
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Returns `true` if the named service has been initialized.
    #[must_use]
    pub fn is_initialized(&self, name: &str) -> bool {
        self.services
            .iter()
            .any(|r| r.initialized && r.service.name() == name)
    }

    /// Service names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.services.iter().map(|r| r.service.name()).collect()
    }

    /// Number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns `true` if no services are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Error details carried by a failed [`ServiceResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// When the failure happened
    pub timestamp: DateTime<Utc>,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Standardized service response wrapper.
///
/// # Examples
///
/// ```
/// use mcp_framework_core::service::ServiceResponse;
///
/// let ok = ServiceResponse::success("scheduler", 3_u32);
/// assert!(ok.success);
/// assert!(ok.metadata["requestId"].as_str().unwrap().starts_with("scheduler_"));
///
/// let failed: ServiceResponse<u32> =
///     ServiceResponse::failure("SCHEDULING_ERROR", "queue full", None);
/// assert!(!failed.success);
/// assert_eq!(failed.error.unwrap().code, "SCHEDULING_ERROR");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// Whether the call succeeded
    pub success: bool,
    /// Payload on success
    pub data: Option<T>,
    /// Error details on failure
    pub error: Option<ErrorInfo>,
    /// Free-form metadata (request id, timing...)
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl<T> ServiceResponse<T> {
    /// Successful response tagged with a `requestId` of `<service>_<millis>`.
    #[must_use]
    pub fn success(service: &str, data: T) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert(
            "requestId".to_string(),
            Value::from(format!("{service}_{}", Utc::now().timestamp_millis())),
        );
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata,
        }
    }

    /// Successful response with caller-supplied metadata only.
    #[must_use]
    pub const fn success_with_metadata(data: T, metadata: BTreeMap<String, Value>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata,
        }
    }

    /// Failed response.
    #[must_use]
    pub fn failure(code: impl Into<String>, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorInfo {
                code: code.into(),
                message: message.into(),
                timestamp: Utc::now(),
                details,
            }),
            metadata: BTreeMap::new(),
        }
    }

    /// Failed response built from a framework error.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        let response = error.to_response();
        Self::failure(response.code.as_str(), response.message, response.details)
    }

    /// Returns the error code if the response failed.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }

    /// Converts into a `Result`, mapping failures to [`Error::ServiceError`].
    ///
    /// # Errors
    ///
    /// Returns an error if the response is not successful or carries no data.
    pub fn into_result(self, service: &str) -> Result<T> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (_, _, Some(error)) => Err(Error::ServiceError {
                service: service.to_string(),
                message: format!("{}: {}", error.code, error.message),
            }),
            _ => Err(Error::ServiceError {
                service: service.to_string(),
                message: format!("{} without data", ErrorCode::UnknownError),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        name: &'static str,
        setups: AtomicUsize,
        fail: bool,
    }

    impl Counting {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                setups: AtomicUsize::new(0),
                fail: false,
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                setups: AtomicUsize::new(0),
                fail: true,
            })
        }
    }

    #[async_trait]
    impl Service for Counting {
        fn name(&self) -> &str {
            self.name
        }

        async fn setup(&self) -> Result<()> {
            self.setups.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::ConfigError {
                    message: "missing API key".to_string(),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_initialize_runs_setup_once() {
        let content = Counting::new("content_generator");
        let mut registry = ServiceRegistry::new();
        registry.register(content.clone());

        registry.initialize_all().await.unwrap();
        registry.initialize_all().await.unwrap();

        assert_eq!(content.setups.load(Ordering::SeqCst), 1);
        assert!(registry.is_initialized("content_generator"));
    }

    #[tokio::test]
    async fn test_initialize_failure_is_service_error() {
        let mut registry = ServiceRegistry::new();
        registry.register(Counting::new("analytics"));
        registry.register(Counting::failing("instagram_service"));

        let err = registry.initialize_all().await.unwrap_err();
        assert!(matches!(err, Error::ServiceError { ref service, .. } if service == "instagram_service"));
        assert!(registry.is_initialized("analytics"));
        assert!(!registry.is_initialized("instagram_service"));
    }

    #[tokio::test]
    async fn test_shutdown_resets_state() {
        let mut registry = ServiceRegistry::new();
        registry.register(Counting::new("scheduler"));
        registry.initialize_all().await.unwrap();
        registry.shutdown_all().await.unwrap();
        assert!(!registry.is_initialized("scheduler"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ServiceRegistry::new();
        registry.register(Counting::new("a"));
        registry.register(Counting::new("b"));
        registry.register(Counting::new("a"));
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_require_missing_service() {
        let registry = ServiceRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("nope").is_none());
        assert!(registry.require("nope").is_err());
    }

    #[test]
    fn test_response_into_result() {
        let ok = ServiceResponse::success("svc", "data");
        assert_eq!(ok.into_result("svc").unwrap(), "data");

        let failed: ServiceResponse<()> = ServiceResponse::failure("AI_GENERATION_FAILED", "x", None);
        assert_eq!(failed.error_code(), Some("AI_GENERATION_FAILED"));
        assert!(failed.into_result("svc").is_err());
    }

    #[test]
    fn test_response_from_error() {
        let err = Error::ValidationError {
            field: "platform".to_string(),
            reason: "unsupported".to_string(),
        };
        let response: ServiceResponse<()> = ServiceResponse::from_error(&err);
        assert_eq!(response.error_code(), Some("INVALID_PARAMETER"));
        assert_eq!(response.error.unwrap().details.unwrap()["parameter"], "platform");
    }
}
