pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PASSWORD_RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";
pub const DEFAULT_BREACHED_ACCOUNT_ENDPOINT: &str =
    "https://haveibeenpwned.com/api/v3/breachedaccount";
pub const DEFAULT_USER_AGENT: &str = "WebShield-CyberSecurity-Dashboard";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "webshield")]
#[command(about = "Breach-exposure check service for emails and passwords")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "5000")]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_PASSWORD_RANGE_ENDPOINT)]
    pub password_api_endpoint: String,

    #[arg(long, default_value = DEFAULT_BREACHED_ACCOUNT_ENDPOINT)]
    pub email_api_endpoint: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load settings from a TOML file instead of the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON instead of the compact format")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn password_range_endpoint(&self) -> &str {
        &self.password_api_endpoint
    }

    fn breached_account_endpoint(&self) -> &str {
        &self.email_api_endpoint
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_url("password_api_endpoint", &self.password_api_endpoint)?;
        validate_url("email_api_endpoint", &self.email_api_endpoint)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["webshield"])
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = base_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.port, 5000);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.password_api_endpoint, DEFAULT_PASSWORD_RANGE_ENDPOINT);
    }

    #[test]
    fn test_bind_address_from_provider() {
        let config = base_config();
        let addr = config.bind_address().unwrap();
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let mut config = base_config();
        config.email_api_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_fails_validation() {
        let mut config = base_config();
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
