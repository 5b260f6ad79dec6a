//! Run configuration loaded from environment variables.

use std::time::Duration;

/// Published families dataset.
pub const DEFAULT_FAMILY_CSV_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/DOC-20251001-WA0005-a8gjX72Q5V5tzXe4lJFRVWXUrIwk3j.csv";

/// Published family-members dataset.
pub const DEFAULT_MEMBERS_CSV_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/family_members-eaqbHmUIQHB5mFDGnAMn0pgPSI9Nih.csv";

/// Errors from reading configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Locators and options for a single verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Locator of the families CSV.
    pub family_url: String,
    /// Locator of the family-members CSV.
    pub members_url: String,
    /// Per-request timeout. `None` keeps the HTTP client default (no timeout).
    pub fetch_timeout: Option<Duration>,
    /// Compare the two datasets after both passes succeed.
    pub cross_check: bool,
}

impl SourceConfig {
    /// Configuration for the given locators with all options off.
    pub fn new(family_url: impl Into<String>, members_url: impl Into<String>) -> Self {
        Self {
            family_url: family_url.into(),
            members_url: members_url.into(),
            fetch_timeout: None,
            cross_check: false,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                     |
    /// |----------------------|-----------------------------|
    /// | `FAMILY_CSV_URL`     | [`DEFAULT_FAMILY_CSV_URL`]  |
    /// | `MEMBERS_CSV_URL`    | [`DEFAULT_MEMBERS_CSV_URL`] |
    /// | `FETCH_TIMEOUT_SECS` | unset                       |
    /// | `VERIFY_CROSS_CHECK` | `false`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let family_url = locator(&lookup, "FAMILY_CSV_URL", DEFAULT_FAMILY_CSV_URL)?;
        let members_url = locator(&lookup, "MEMBERS_CSV_URL", DEFAULT_MEMBERS_CSV_URL)?;

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidSeconds {
                        var: "FETCH_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        let cross_check = match lookup("VERIFY_CROSS_CHECK") {
            None => false,
            Some(raw) => parse_bool("VERIFY_CROSS_CHECK", raw)?,
        };

        Ok(Self {
            family_url,
            members_url,
            fetch_timeout,
            cross_check,
        })
    }
}

fn locator<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default.to_string()),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(ConfigError::Empty { var })
            } else {
                Ok(trimmed.to_string())
            }
        }
    }
}

fn parse_bool(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value: raw }),
    }
}
