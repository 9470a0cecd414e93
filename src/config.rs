//! Environment configuration for the sync command.

use crate::adapters::live::github::GITHUB_GRAPHQL_API;
use crate::contribution::{DEFAULT_DAYS, MAX_DAYS};

/// Required: GitHub token with `read:user` scope.
pub const TOKEN_VAR: &str = "GITHUB_GRAPHQL_TOKEN";
/// Required: account to snapshot.
pub const USERNAME_VAR: &str = "GITHUB_USERNAME";
/// Optional: window length in days.
pub const DAYS_VAR: &str = "GITHUB_CONTRIBUTION_DAYS";
/// Optional: GraphQL endpoint override.
pub const ENDPOINT_VAR: &str = "GITHUB_GRAPHQL_URL";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("Missing required env var: {0}")]
    MissingVar(&'static str),
}

/// Settings for one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// API token.
    pub token: String,
    /// Account login.
    pub username: String,
    /// Window length.
    pub days: u32,
    /// GraphQL endpoint.
    pub endpoint: String,
}

impl SyncConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a required variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a required variable is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            trimmed(lookup(name)).ok_or(ConfigError::MissingVar(name))
        };
        let token = required(TOKEN_VAR)?;
        let username = required(USERNAME_VAR)?;
        let days = parse_days(trimmed(lookup(DAYS_VAR)).as_deref());
        let endpoint =
            trimmed(lookup(ENDPOINT_VAR)).unwrap_or_else(|| GITHUB_GRAPHQL_API.to_string());
        Ok(Self { token, username, days, endpoint })
    }
}

/// Parses a day count, falling back to [`DEFAULT_DAYS`] for missing,
/// non-numeric, non-positive, or over-[`MAX_DAYS`] values. Fractions are floored.
#[must_use]
pub fn parse_days(raw: Option<&str>) -> u32 {
    let Some(parsed) = raw.and_then(|value| value.trim().parse::<f64>().ok()) else {
        return DEFAULT_DAYS;
    };
    if !parsed.is_finite() || parsed.floor() < 1.0 || parsed.floor() > f64::from(MAX_DAYS) {
        return DEFAULT_DAYS;
    }
    floor_to_u32(parsed)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_to_u32(value: f64) -> u32 {
    value.floor().min(f64::from(u32::MAX)) as u32
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
