use crate::core::recommendations::generate_recommendations;
use crate::domain::model::{SecurityCheckRequest, SecurityCheckResponse};
use crate::domain::ports::{EmailBreachCheck, PasswordBreachCheck};
use chrono::Utc;

/// Orchestrates one security check: both lookups run concurrently, their
/// results feed the recommendation rules, and the response gets a UTC
/// timestamp. Holds no mutable state, so one instance is shared across
/// requests.
pub struct SecurityCheckEngine<E: EmailBreachCheck, P: PasswordBreachCheck> {
    email_checker: E,
    password_checker: P,
}

impl<E: EmailBreachCheck, P: PasswordBreachCheck> SecurityCheckEngine<E, P> {
    pub fn new(email_checker: E, password_checker: P) -> Self {
        Self {
            email_checker,
            password_checker,
        }
    }

    pub async fn run(&self, request: &SecurityCheckRequest) -> SecurityCheckResponse {
        let email = request.trimmed_email();
        tracing::debug!("Running security check");

        // The two lookups are independent; neither result feeds the other.
        let (email_breaches, password_pwned_count) = tokio::join!(
            self.email_checker.check(email),
            self.password_checker.check(&request.password)
        );

        let recommendations = generate_recommendations(&email_breaches, &password_pwned_count);
        tracing::debug!(
            advisories = recommendations.len(),
            "Security check complete"
        );

        SecurityCheckResponse {
            email_breaches,
            password_pwned_count,
            recommendations,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
