use crate::domain::model::{BreachRecord, EmailCheckResult};
use crate::domain::ports::EmailBreachCheck;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Breached-account lookup client. A 404 from the upstream is the documented
/// "no breaches" answer and maps to an empty list, not to `Unknown`.
pub struct BreachedAccountChecker {
    client: Client,
    account_endpoint: String,
}

impl BreachedAccountChecker {
    pub fn new(account_endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            account_endpoint: account_endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl EmailBreachCheck for BreachedAccountChecker {
    async fn check(&self, email: &str) -> EmailCheckResult {
        let url = format!("{}/{}", self.account_endpoint, email);
        tracing::debug!("Querying breached-account endpoint");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Email breach lookup failed");
                return EmailCheckResult::Unknown;
            }
        };

        match response.status() {
            StatusCode::OK => match response.json::<Vec<BreachRecord>>().await {
                Ok(breaches) => EmailCheckResult::Breaches(breaches),
                Err(e) => {
                    tracing::warn!(error = %e, "Undecodable breached-account response");
                    EmailCheckResult::Unknown
                }
            },
            StatusCode::NOT_FOUND => EmailCheckResult::Breaches(Vec::new()),
            status => {
                tracing::warn!(status = %status, "Unexpected breached-account status");
                EmailCheckResult::Unknown
            }
        }
    }
}
