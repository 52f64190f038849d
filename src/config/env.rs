// src/config/env.rs
// ============================================================================
// Module: Security Test Environment
// Description: Environment-backed configuration for security tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, and malformed overrides fail
//! closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Default base URL of the invoice service under test.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment keys for security test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityTestEnv {
    /// Optional base URL override for the service under test.
    BaseUrl,
    /// Optional artifact run root override.
    RunRoot,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional bearer token for authenticated routes.
    AuthToken,
}

impl SecurityTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "INVOICE_SECURITY_TEST_BASE_URL",
            Self::RunRoot => "INVOICE_SECURITY_TEST_RUN_ROOT",
            Self::TimeoutSeconds => "INVOICE_SECURITY_TEST_TIMEOUT_SEC",
            Self::AuthToken => "INVOICE_SECURITY_TEST_AUTH_TOKEN",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed security test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecurityTestConfig {
    /// Optional base URL override for the service under test.
    pub base_url: Option<String>,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional bearer token for authenticated routes.
    pub auth_token: Option<String>,
}

impl SecurityTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or base URL).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SecurityTestEnv::BaseUrl.as_str())?
            .map(|value| validate_base_url(SecurityTestEnv::BaseUrl.as_str(), value))
            .transpose()?;
        let run_root = read_env_nonempty(SecurityTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = read_env_nonempty(SecurityTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SecurityTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let auth_token = read_env_nonempty(SecurityTestEnv::AuthToken.as_str())?;
        Ok(Self {
            base_url,
            run_root,
            timeout,
            auth_token,
        })
    }

    /// Returns the effective base URL, falling back to the local default.
    #[must_use]
    pub fn effective_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Validates a base URL override and strips any trailing slash.
///
/// # Errors
///
/// Returns an error when the value is not an absolute http(s) URL.
fn validate_base_url(name: &str, raw: String) -> Result<String, String> {
    let parsed = Url::parse(raw.trim()).map_err(|err| format!("{name} is not a valid URL: {err}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("{name} must use the http or https scheme"));
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
