//! Configuration with validation at startup.

use clap::Parser;

/// User management REST service configuration.
///
/// All values can be set via environment variables or CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "user-service", about = "User management REST service")]
pub struct Config {
    /// Server listen address
    #[arg(long, env = "HTTP_ADDRESS", default_value = "0.0.0.0:8080")]
    pub http_address: String,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// Use JSON log format
    #[arg(long, env = "JSON_LOGS", default_value = "false")]
    pub json_logs: bool,

    /// Accepted bearer tokens (comma-separated); token auth is disabled when unset
    #[arg(long, env = "AUTH_TOKENS")]
    pub auth_tokens: Option<String>,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("AUTH_TOKENS is set but contains no tokens")]
    EmptyTokenList,
}

impl Config {
    /// Parse and validate configuration.
    pub fn init() -> anyhow::Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(raw) = &self.auth_tokens {
            if split_tokens(raw).next().is_none() {
                return Err(ConfigError::EmptyTokenList);
            }
        }
        Ok(())
    }

    /// The accepted token set, if token auth is enabled.
    pub fn accepted_tokens(&self) -> Option<Vec<String>> {
        self.auth_tokens
            .as_deref()
            .map(|raw| split_tokens(raw).map(str::to_string).collect())
    }
}

fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}
