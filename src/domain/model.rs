use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Incoming payload for a security check.
///
/// Both fields default to empty strings so that a request with missing keys
/// still deserializes and is rejected by validation instead of the JSON
/// layer, keeping the error message under our control.
#[derive(Clone, Deserialize)]
pub struct SecurityCheckRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SecurityCheckRequest {
    /// The email with surrounding whitespace removed, as it is sent upstream.
    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }
}

// The password must never reach a log line, including through `{:?}`.
impl fmt::Debug for SecurityCheckRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityCheckRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One reported breach incident, passed through with the upstream key casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "BreachDate", default)]
    pub breach_date: String,
    #[serde(rename = "DataClasses", default)]
    pub data_classes: Vec<String>,
}

/// Outcome of the password range query.
///
/// `Unknown` means the lookup itself failed and is distinct from `Count(0)`;
/// untagged serde maps it to JSON `null` while a known count is a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PasswordCheckResult {
    Count(u64),
    Unknown,
}

/// Outcome of the breached-account lookup.
///
/// `Breaches(vec![])` is a confirmed "no breaches" answer; `Unknown` means the
/// lookup failed. On the wire they are `[]` and `null` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmailCheckResult {
    Breaches(Vec<BreachRecord>),
    Unknown,
}

impl EmailCheckResult {
    pub fn breach_count(&self) -> usize {
        match self {
            EmailCheckResult::Breaches(breaches) => breaches.len(),
            EmailCheckResult::Unknown => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Critical,
    Warning,
    Success,
    Info,
}

/// A single user-facing advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub action: String,
}

impl Recommendation {
    pub fn new(
        kind: RecommendationKind,
        title: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            action: action.into(),
        }
    }
}

/// Combined result of one security check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityCheckResponse {
    pub email_breaches: EmailCheckResult,
    pub password_pwned_count: PasswordCheckResult,
    pub recommendations: Vec<Recommendation>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Body of a 400 reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
