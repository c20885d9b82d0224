//! Backend address and request settings
//!
//! The base URL comes from `SPENDBOARD_API_BASE_URL` (read at runtime by
//! native callers and at build time by the WASM bundle) and falls back to a
//! local backend.

use crate::error::ConfigError;
use std::time::Duration;

/// Backend used when nothing is configured. 127.0.0.1 rather than localhost
/// keeps browsers from trying `::1` first.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "SPENDBOARD_API_BASE_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Normalize a base URL: surrounding whitespace and trailing slashes are
    /// removed, empty input means [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };

        let Some(rest) = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"))
        else {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                reason: "expected an http:// or https:// address",
            });
        };
        if rest.is_empty() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                reason: "missing host",
            });
        }

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Optional value as it comes from the environment; `None` or blank
    /// means the default backend.
    pub fn from_optional(base_url: Option<&str>) -> Result<Self, ConfigError> {
        Self::new(base_url.unwrap_or_default())
    }

    /// Read [`BASE_URL_ENV`] from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(BASE_URL_ENV).ok();
        Self::from_optional(value.as_deref())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `<base>/api<path>`; a missing leading slash on `path` is added
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}/api{}", self.base_url, path)
        } else {
            format!("{}/api/{}", self.base_url, path)
        }
    }
}

/// Parse a timeout given in (possibly fractional) seconds
pub fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ConfigError::InvalidTimeout {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_trailing_slash_removed() {
        let config = ApiConfig::new("https://spend.example.com///").unwrap();
        assert_eq!(config.base_url(), "https://spend.example.com");
        assert_eq!(
            config.api_url("/expenses/"),
            "https://spend.example.com/api/expenses/"
        );
        assert_eq!(config.api_url("rates/"), "https://spend.example.com/api/rates/");
    }

    #[test]
    fn test_blank_means_default() {
        assert_eq!(ApiConfig::new("   ").unwrap().base_url(), DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::from_optional(None).unwrap(), ApiConfig::default());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let err = ApiConfig::new("127.0.0.1:8000").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
        assert!(ApiConfig::new("http://").is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("2.5").unwrap(), Duration::from_millis(2500));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
        assert!(parse_timeout("inf").is_err());
        assert!(parse_timeout("1e20").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variable() {
        std::env::set_var(BASE_URL_ENV, "http://10.0.0.5:9000/");
        let config = ApiConfig::from_env().unwrap();
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(config.base_url(), "http://10.0.0.5:9000");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ApiConfig::from_env().unwrap().base_url(), DEFAULT_BASE_URL);
    }
}
