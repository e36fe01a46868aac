use crate::config::{
    DEFAULT_BREACHED_ACCOUNT_ENDPOINT, DEFAULT_PASSWORD_RANGE_ENDPOINT, DEFAULT_USER_AGENT,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ShieldError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTomlConfig {
    pub server: ServerSection,
    pub hibp: Option<HibpSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HibpSection {
    pub password_range_endpoint: Option<String>,
    pub breached_account_endpoint: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ServerTomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShieldError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ShieldError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` with the environment value; unset variables are
/// left as-is so validation reports them against the literal text.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl ConfigProvider for ServerTomlConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }

    fn password_range_endpoint(&self) -> &str {
        self.hibp
            .as_ref()
            .and_then(|h| h.password_range_endpoint.as_deref())
            .unwrap_or(DEFAULT_PASSWORD_RANGE_ENDPOINT)
    }

    fn breached_account_endpoint(&self) -> &str {
        self.hibp
            .as_ref()
            .and_then(|h| h.breached_account_endpoint.as_deref())
            .unwrap_or(DEFAULT_BREACHED_ACCOUNT_ENDPOINT)
    }

    fn user_agent(&self) -> &str {
        self.hibp
            .as_ref()
            .and_then(|h| h.user_agent.as_deref())
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    fn timeout_seconds(&self) -> u64 {
        self.hibp
            .as_ref()
            .and_then(|h| h.timeout_seconds)
            .unwrap_or(10)
    }
}

impl Validate for ServerTomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_url("hibp.password_range_endpoint", self.password_range_endpoint())?;
        validate_url(
            "hibp.breached_account_endpoint",
            self.breached_account_endpoint(),
        )?;
        validate_positive_number("hibp.timeout_seconds", self.timeout_seconds(), 1)?;
        Ok(())
    }
}
