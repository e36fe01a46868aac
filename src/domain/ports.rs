use crate::domain::model::{EmailCheckResult, PasswordCheckResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;

/// Looks a password up in a breach corpus. Implementations absorb their own
/// failures into `PasswordCheckResult::Unknown` instead of returning errors.
#[async_trait]
pub trait PasswordBreachCheck: Send + Sync {
    async fn check(&self, password: &str) -> PasswordCheckResult;
}

/// Looks an email account up in a breach corpus. Same failure contract as
/// `PasswordBreachCheck`.
#[async_trait]
pub trait EmailBreachCheck: Send + Sync {
    async fn check(&self, email: &str) -> EmailCheckResult;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn password_range_endpoint(&self) -> &str;
    fn breached_account_endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;

    fn bind_address(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host(), self.port()).parse()?;
        Ok(addr)
    }
}
