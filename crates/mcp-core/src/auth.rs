//! Authentication header providers.
//!
//! Generated servers talk to third-party APIs (social platforms, cloud
//! providers) that expect credentials in request headers. [`AuthProvider`]
//! covers the four schemes those servers use and produces the header map
//! for a request. Credentials are held as [`SecretString`] so they never
//! show up in `Debug` output or logs.
//!
//! # Examples
//!
//! ```
//! use mcp_framework_core::auth::AuthProvider;
//!
//! let auth = AuthProvider::api_key("sk-123");
//! let headers = auth.headers();
//! assert_eq!(headers["Authorization"], "Bearer sk-123");
//! ```

use crate::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;

/// Default header carrying credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Default API key header format; `{}` is replaced with the key.
pub const BEARER_FORMAT: &str = "Bearer {}";

/// Authentication scheme with its credentials.
#[derive(Debug)]
pub enum AuthProvider {
    /// API key placed in a configurable header.
    ApiKey {
        /// The API key
        key: SecretString,
        /// Header name, usually `Authorization`
        header_name: String,
        /// Header value format; `{}` is replaced with the key
        header_format: String,
    },
    /// HTTP basic authentication.
    Basic {
        /// User name
        username: String,
        /// Password
        password: SecretString,
    },
    /// Access token with optional refresh token.
    Token {
        /// Access token
        access_token: SecretString,
        /// Refresh token, if the API issues one
        refresh_token: Option<SecretString>,
        /// Token type prefix, e.g. `Bearer` or `JWT`
        token_type: String,
    },
    /// No authentication.
    None,
}

impl AuthProvider {
    /// API key sent as `Authorization: Bearer <key>`.
    #[must_use]
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            key: SecretString::from(key.into()),
            header_name: AUTHORIZATION_HEADER.to_string(),
            header_format: BEARER_FORMAT.to_string(),
        }
    }

    /// API key sent in a custom header with a custom format.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::auth::AuthProvider;
    ///
    /// let auth = AuthProvider::api_key_with_header("abc", "X-API-Key", "{}");
    /// assert_eq!(auth.headers()["X-API-Key"], "abc");
    /// ```
    #[must_use]
    pub fn api_key_with_header(
        key: impl Into<String>,
        header_name: impl Into<String>,
        header_format: impl Into<String>,
    ) -> Self {
        Self::ApiKey {
            key: SecretString::from(key.into()),
            header_name: header_name.into(),
            header_format: header_format.into(),
        }
    }

    /// HTTP basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Bearer token authentication.
    #[must_use]
    pub fn token(access_token: impl Into<String>) -> Self {
        Self::Token {
            access_token: SecretString::from(access_token.into()),
            refresh_token: None,
            token_type: "Bearer".to_string(),
        }
    }

    /// Reads an API key from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the variable is unset or empty.
    pub fn api_key_from_env(var: &str) -> Result<Self> {
        Self::api_key_from_lookup(var, |k| std::env::var(k).ok())
    }

    /// Reads an API key through a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the lookup yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::auth::AuthProvider;
    ///
    /// let auth = AuthProvider::api_key_from_lookup("SCENARIO_API_KEY", |_| {
    ///     Some("secret".to_string())
    /// })
    /// .unwrap();
    /// assert!(auth.validate());
    /// ```
    pub fn api_key_from_lookup<F>(var: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = required_var(var, &lookup)?;
        Ok(Self::api_key(key))
    }

    /// Reads basic credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if either variable is unset or empty.
    pub fn basic_from_env(username_var: &str, password_var: &str) -> Result<Self> {
        Self::basic_from_lookup(username_var, password_var, |k| std::env::var(k).ok())
    }

    /// Reads basic credentials through a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if either variable is missing.
    pub fn basic_from_lookup<F>(username_var: &str, password_var: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = required_var(username_var, &lookup)?;
        let password = required_var(password_var, &lookup)?;
        Ok(Self::basic(username, password))
    }

    /// Reads a token (and optional refresh token) from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the access token variable is unset.
    pub fn token_from_env(token_var: &str, refresh_var: Option<&str>) -> Result<Self> {
        Self::token_from_lookup(token_var, refresh_var, |k| std::env::var(k).ok())
    }

    /// Reads a token through a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the access token is missing.
    pub fn token_from_lookup<F>(token_var: &str, refresh_var: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = required_var(token_var, &lookup)?;
        let refresh_token = refresh_var
            .and_then(|var| lookup(var))
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        Ok(Self::Token {
            access_token: SecretString::from(access_token),
            refresh_token,
            token_type: "Bearer".to_string(),
        })
    }

    /// Builds a provider from a scheme name and an environment lookup.
    ///
    /// Recognised kinds are `api_key`, `basic`, `token` and `none`. The
    /// environment variable names follow `<PREFIX>_API_KEY`,
    /// `<PREFIX>_USERNAME`/`<PREFIX>_PASSWORD` and
    /// `<PREFIX>_ACCESS_TOKEN`/`<PREFIX>_REFRESH_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for unknown kinds or missing variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::auth::AuthProvider;
    ///
    /// let auth = AuthProvider::from_kind("none", "MESHY", |_| None).unwrap();
    /// assert!(auth.headers().is_empty());
    ///
    /// assert!(AuthProvider::from_kind("oauth", "MESHY", |_| None).is_err());
    /// ```
    pub fn from_kind<F>(kind: &str, prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match kind {
            "api_key" => Self::api_key_from_lookup(&format!("{prefix}_API_KEY"), lookup),
            "basic" => Self::basic_from_lookup(
                &format!("{prefix}_USERNAME"),
                &format!("{prefix}_PASSWORD"),
                lookup,
            ),
            "token" => Self::token_from_lookup(
                &format!("{prefix}_ACCESS_TOKEN"),
                Some(&format!("{prefix}_REFRESH_TOKEN")),
                lookup,
            ),
            "none" => Ok(Self::None),
            other => Err(Error::ConfigError {
                message: format!(
                    "Unknown auth type: {other}. Available: api_key, basic, token, none"
                ),
            }),
        }
    }

    /// Returns the scheme name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey { .. } => "api_key",
            Self::Basic { .. } => "basic",
            Self::Token { .. } => "token",
            Self::None => "none",
        }
    }

    /// Produces the request headers for this scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_core::auth::AuthProvider;
    ///
    /// let auth = AuthProvider::basic("user", "pass");
    /// assert_eq!(auth.headers()["Authorization"], "Basic dXNlcjpwYXNz");
    /// ```
    #[must_use]
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        match self {
            Self::ApiKey {
                key,
                header_name,
                header_format,
            } => {
                let value = if header_format.contains("{}") {
                    header_format.replacen("{}", key.expose_secret(), 1)
                } else {
                    format!("{header_format}{}", key.expose_secret())
                };
                headers.insert(header_name.clone(), value);
            }
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{}", password.expose_secret()));
                headers.insert(AUTHORIZATION_HEADER.to_string(), format!("Basic {encoded}"));
            }
            Self::Token {
                access_token,
                token_type,
                ..
            } => {
                headers.insert(
                    AUTHORIZATION_HEADER.to_string(),
                    format!("{token_type} {}", access_token.expose_secret()),
                );
            }
            Self::None => {}
        }
        headers
    }

    /// Returns `true` if the credentials required by the scheme are present.
    #[must_use]
    pub fn validate(&self) -> bool {
        match self {
            Self::ApiKey { key, .. } => !key.expose_secret().is_empty(),
            Self::Basic { username, password } => {
                !username.is_empty() && !password.expose_secret().is_empty()
            }
            Self::Token { access_token, .. } => !access_token.expose_secret().is_empty(),
            Self::None => true,
        }
    }

    /// Returns `true` if a refresh token is available.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        matches!(
            self,
            Self::Token {
                refresh_token: Some(_),
                ..
            }
        )
    }
}

fn required_var<F>(var: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::ConfigError {
            message: format!("Credential not found. Check {var} environment variable."),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_api_key_default_header() {
        let auth = AuthProvider::api_key("abc");
        assert_eq!(auth.headers()["Authorization"], "Bearer abc");
        assert_eq!(auth.kind(), "api_key");
        assert!(auth.validate());
    }

    #[test]
    fn test_api_key_format_without_placeholder() {
        let auth = AuthProvider::api_key_with_header("abc", "X-Key", "Token ");
        assert_eq!(auth.headers()["X-Key"], "Token abc");
    }

    #[test]
    fn test_basic_encoding() {
        let auth = AuthProvider::basic("api", "secret");
        assert_eq!(auth.headers()["Authorization"], "Basic YXBpOnNlY3JldA==");
    }

    #[test]
    fn test_token_headers_and_refresh() {
        let auth = AuthProvider::token_from_lookup(
            "T",
            Some("R"),
            env(&[("T", "access"), ("R", "refresh")]),
        )
        .unwrap();
        assert_eq!(auth.headers()["Authorization"], "Bearer access");
        assert!(auth.can_refresh());

        let no_refresh = AuthProvider::token("access");
        assert!(!no_refresh.can_refresh());
    }

    #[test]
    fn test_missing_env_is_config_error() {
        let err = AuthProvider::api_key_from_lookup("MISSING", env(&[])).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("MISSING"));

        let err = AuthProvider::basic_from_lookup("U", "P", env(&[("U", "user")])).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_env_value_rejected() {
        assert!(AuthProvider::api_key_from_lookup("K", env(&[("K", "")])).is_err());
    }

    #[test]
    fn test_from_kind() {
        let lookup = env(&[
            ("SVC_API_KEY", "k"),
            ("SVC_USERNAME", "u"),
            ("SVC_PASSWORD", "p"),
            ("SVC_ACCESS_TOKEN", "t"),
        ]);
        assert_eq!(AuthProvider::from_kind("api_key", "SVC", &lookup).unwrap().kind(), "api_key");
        assert_eq!(AuthProvider::from_kind("basic", "SVC", &lookup).unwrap().kind(), "basic");
        assert_eq!(AuthProvider::from_kind("token", "SVC", &lookup).unwrap().kind(), "token");
        assert_eq!(AuthProvider::from_kind("none", "SVC", &lookup).unwrap().kind(), "none");

        let err = AuthProvider::from_kind("kerberos", "SVC", &lookup).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let auth = AuthProvider::basic("user", "hunter2");
        let debug = format!("{auth:?}");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_none_is_always_valid() {
        assert!(AuthProvider::None.validate());
        assert!(AuthProvider::None.headers().is_empty());
    }
}
