use crate::domain::model::PasswordCheckResult;
use crate::domain::ports::PasswordBreachCheck;
use crate::utils::error::{Result, ShieldError};
use async_trait::async_trait;
use reqwest::Client;
use sha1::{Digest, Sha1};
use std::time::Duration;

/// k-anonymity range-query client. Only the first 5 hex characters of the
/// password hash are ever sent; matching happens locally on the returned
/// suffix list.
pub struct PwnedPasswordChecker {
    client: Client,
    range_endpoint: String,
}

impl PwnedPasswordChecker {
    pub fn new(range_endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            range_endpoint: range_endpoint.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_range(&self, prefix: &str) -> Result<String> {
        let url = format!("{}/{}", self.range_endpoint, prefix);
        tracing::debug!(prefix, "Querying password range endpoint");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ShieldError::UpstreamStatusError {
                service: "password range endpoint",
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Uppercase hex SHA-1 of the password, split into the 5-character range
/// prefix and the 35-character suffix.
fn hash_split(password: &str) -> (String, String) {
    let digest = Sha1::digest(password.as_bytes());
    let hex: String = digest.iter().map(|byte| format!("{:02X}", byte)).collect();
    let (prefix, suffix) = hex.split_at(5);
    (prefix.to_string(), suffix.to_string())
}

/// Scans `SUFFIX:COUNT` lines for an exact suffix match. Returns `Some(0)`
/// when the suffix is absent and `None` when the matching line carries a
/// count that does not parse.
fn count_for_suffix(body: &str, suffix: &str) -> Option<u64> {
    for line in body.lines() {
        if let Some((candidate, count)) = line.split_once(':') {
            if candidate.trim().eq_ignore_ascii_case(suffix) {
                return count.trim().parse().ok();
            }
        }
    }
    Some(0)
}

#[async_trait]
impl PasswordBreachCheck for PwnedPasswordChecker {
    async fn check(&self, password: &str) -> PasswordCheckResult {
        let (prefix, suffix) = hash_split(password);

        match self.fetch_range(&prefix).await {
            Ok(body) => match count_for_suffix(&body, &suffix) {
                Some(count) => PasswordCheckResult::Count(count),
                None => {
                    tracing::warn!("Unparseable count in password range response");
                    PasswordCheckResult::Unknown
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Password breach lookup failed");
                PasswordCheckResult::Unknown
            }
        }
    }
}
