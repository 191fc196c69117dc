//! Validation of common server configuration values.
//!
//! Failures are reported as [`Error::InvalidConfigValue`] with the
//! configuration key (`url`, `port` or `log_level`).

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("valid regex")
});

/// Checks that `url` is an `http` or `https` URL with a domain name,
/// `localhost` or an IPv4 address, an optional port and an optional path.
///
/// # Errors
///
/// Returns [`Error::InvalidConfigValue`] with key `url` otherwise.
///
/// # Examples
///
/// ```
/// use mcp_framework_core::validate::validate_url;
///
/// assert!(validate_url("https://api.example.com/v1").is_ok());
/// assert!(validate_url("HTTP://localhost:8080").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(invalid("url", format!("'{url}' is not a valid http(s) URL")))
    }
}

/// Parses a TCP port in `1..=65535`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfigValue`] with key `port` if the value is
/// not a number or out of range.
///
/// # Examples
///
/// ```
/// use mcp_framework_core::validate::validate_port;
///
/// assert_eq!(validate_port("8080").unwrap(), 8080);
/// assert!(validate_port("0").is_err());
/// ```
pub fn validate_port(port: &str) -> Result<u16> {
    match port.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid(
            "port",
            format!("'{port}' must be a number between 1 and 65535"),
        )),
        Ok(port) => Ok(port),
    }
}

/// Parses a log level name, ignoring case.
///
/// # Errors
///
/// Returns [`Error::InvalidConfigValue`] with key `log_level` for names
/// other than `DEBUG`, `INFO`, `WARNING`, `ERROR` and `CRITICAL`.
pub fn validate_log_level(level: &str) -> Result<LogLevel> {
    level.parse()
}

/// Log level accepted in server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// `DEBUG`
    Debug,
    /// `INFO`
    #[default]
    Info,
    /// `WARNING`
    Warning,
    /// `ERROR`
    Error,
    /// `CRITICAL`
    Critical,
}

impl LogLevel {
    /// All levels, most verbose first.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Upper-case configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Matching `tracing` level. `CRITICAL` has no counterpart and maps to
    /// `ERROR`.
    #[must_use]
    pub const fn to_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error | Self::Critical => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                invalid(
                    "log_level",
                    format!("'{s}' is not one of DEBUG, INFO, WARNING, ERROR, CRITICAL"),
                )
            })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn invalid(key: &str, message: String) -> Error {
    Error::InvalidConfigValue {
        key: key.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn test_valid_urls() {
        for url in [
            "http://example.com",
            "https://api.openai.com/v1/chat/completions",
            "https://sub.domain.co.uk:8443/path?q=1",
            "http://localhost",
            "http://localhost:3000/",
            "http://127.0.0.1:8080/health",
            "HTTPS://EXAMPLE.COM",
        ] {
            assert!(validate_url(url).is_ok(), "{url}");
        }
    }

    #[test]
    fn test_invalid_urls() {
        for url in [
            "",
            "example.com",
            "ftp://example.com",
            "http://",
            "http://-bad-.com",
            "http://example.com/with space",
            "http://intranet",
        ] {
            assert!(validate_url(url).is_err(), "{url}");
        }
    }

    #[test]
    fn test_url_error_carries_key() {
        let err = validate_url("nope").unwrap_err();
        assert!(err.is_config_error());
        assert_eq!(err.details().unwrap()["config_key"], "url");
    }

    #[test]
    fn test_port_range() {
        assert_eq!(validate_port("1").unwrap(), 1);
        assert_eq!(validate_port(" 65535 ").unwrap(), 65535);
        for port in ["0", "65536", "-1", "http", ""] {
            let err = validate_port(port).unwrap_err();
            assert_eq!(err.code(), ErrorCode::ConfigInvalid, "{port}");
        }
    }

    #[test]
    fn test_log_level_case_insensitive() {
        assert_eq!(validate_log_level("debug").unwrap(), LogLevel::Debug);
        assert_eq!(validate_log_level("Warning").unwrap(), LogLevel::Warning);
        assert_eq!(validate_log_level("CRITICAL").unwrap(), LogLevel::Critical);
        assert!(validate_log_level("warn").is_err());
        assert!(validate_log_level("trace").is_err());
    }

    #[test]
    fn test_log_level_round_trips_display() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(LogLevel::Warning.to_tracing(), tracing::Level::WARN);
        assert_eq!(LogLevel::Critical.to_tracing(), tracing::Level::ERROR);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
