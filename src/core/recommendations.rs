use crate::domain::model::{
    EmailCheckResult, PasswordCheckResult, Recommendation, RecommendationKind,
};

/// At most this many per-breach detail advisories are emitted.
pub const MAX_BREACH_DETAILS: usize = 3;

/// Builds the advisory list for a pair of check results.
///
/// Deterministic and pure: exactly one advisory for the email branch, then up
/// to [`MAX_BREACH_DETAILS`] breach details, exactly one for the password
/// branch, then the three fixed general advisories. Total length is 5 to 8.
pub fn generate_recommendations(
    email_result: &EmailCheckResult,
    password_result: &PasswordCheckResult,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    match email_result {
        EmailCheckResult::Unknown => {
            recommendations.push(Recommendation::new(
                RecommendationKind::Warning,
                "Email Check Failed",
                "Unable to check email breaches. Try again later.",
                "Retry the check or manually search on HaveIBeenPwned.com",
            ));
        }
        EmailCheckResult::Breaches(breaches) if !breaches.is_empty() => {
            recommendations.push(Recommendation::new(
                RecommendationKind::Critical,
                "Email Found in Data Breaches",
                format!("Your email was found in {} data breach(es).", breaches.len()),
                "Change passwords for affected accounts and enable 2FA where possible",
            ));

            for breach in breaches.iter().take(MAX_BREACH_DETAILS) {
                recommendations.push(Recommendation::new(
                    RecommendationKind::Info,
                    format!("Breach: {}", breach.name),
                    format!("Compromised on {}", breach.breach_date),
                    format!("Data compromised: {}", breach.data_classes.join(", ")),
                ));
            }
        }
        EmailCheckResult::Breaches(_) => {
            recommendations.push(Recommendation::new(
                RecommendationKind::Success,
                "Email Not Found in Breaches",
                "Your email was not found in known data breaches.",
                "Continue monitoring and consider using unique emails for different services",
            ));
        }
    }

    match password_result {
        PasswordCheckResult::Unknown => {
            recommendations.push(Recommendation::new(
                RecommendationKind::Warning,
                "Password Check Failed",
                "Unable to check password breaches. Try again later.",
                "Use a strong, unique password and consider a password manager",
            ));
        }
        PasswordCheckResult::Count(count) if *count > 0 => {
            recommendations.push(Recommendation::new(
                RecommendationKind::Critical,
                "Password Found in Breaches",
                format!(
                    "This password has been seen {} times in data breaches.",
                    format_thousands(*count)
                ),
                "Change this password immediately and use a unique, strong password",
            ));
        }
        PasswordCheckResult::Count(_) => {
            recommendations.push(Recommendation::new(
                RecommendationKind::Success,
                "Password Not Found in Breaches",
                "This password has not been found in known data breaches.",
                "Continue using strong, unique passwords for each account",
            ));
        }
    }

    recommendations.extend(general_recommendations());
    recommendations
}

fn general_recommendations() -> [Recommendation; 3] {
    [
        Recommendation::new(
            RecommendationKind::Info,
            "Enable Two-Factor Authentication",
            "Add an extra layer of security to your accounts.",
            "Enable 2FA on all important accounts (email, banking, social media)",
        ),
        Recommendation::new(
            RecommendationKind::Info,
            "Use a Password Manager",
            "Generate and store unique passwords for each account.",
            "Consider using Bitwarden, 1Password, or LastPass",
        ),
        Recommendation::new(
            RecommendationKind::Info,
            "Regular Security Checkups",
            "Monitor your accounts regularly for suspicious activity.",
            "Check this dashboard monthly and review account activity",
        ),
    ]
}

/// Formats an integer with comma thousands separators, e.g. 1234567 -> "1,234,567".
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}
