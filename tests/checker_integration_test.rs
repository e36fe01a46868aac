use anyhow::Result;
use httpmock::prelude::*;
use std::time::Duration;
use webshield::{
    BreachedAccountChecker, EmailCheckResult, PasswordCheckResult, PwnedPasswordChecker,
    SecurityCheckEngine, SecurityCheckRequest,
};

// SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
const PREFIX: &str = "5BAA6";
const SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

fn engine_with_timeout(
    server: &MockServer,
    timeout: Duration,
) -> Result<SecurityCheckEngine<BreachedAccountChecker, PwnedPasswordChecker>> {
    let email_checker =
        BreachedAccountChecker::new(&server.url("/breachedaccount"), "webshield-tests", timeout)?;
    let password_checker =
        PwnedPasswordChecker::new(&server.url("/range"), "webshield-tests", timeout)?;
    Ok(SecurityCheckEngine::new(email_checker, password_checker))
}

fn request() -> SecurityCheckRequest {
    SecurityCheckRequest {
        email: "test@example.com".to_string(),
        password: "password".to_string(),
    }
}

#[tokio::test]
async fn test_engine_runs_both_checks_concurrently_against_mocks() -> Result<()> {
    let server = MockServer::start();
    let account_mock = server.mock(|when, then| {
        when.method(GET).path("/breachedaccount/test@example.com");
        then.status(200)
            .json_body(serde_json::json!([{"Name": "Adobe", "BreachDate": "2013-10-04", "DataClasses": ["Passwords"]}]));
    });
    let range_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/range/{}", PREFIX));
        then.status(200).body(format!("{}:3861493", SUFFIX));
    });

    let engine = engine_with_timeout(&server, Duration::from_secs(5))?;
    let response = engine.run(&request()).await;

    account_mock.assert();
    range_mock.assert();
    assert_eq!(response.email_breaches.breach_count(), 1);
    assert_eq!(
        response.password_pwned_count,
        PasswordCheckResult::Count(3_861_493)
    );
    // 1 email summary + 1 breach detail + 1 password + 3 general.
    assert_eq!(response.recommendations.len(), 6);
    assert!(response.recommendations[3]
        .description
        .contains("3,861,493"));
    Ok(())
}

#[tokio::test]
async fn test_no_breach_answers_stay_distinct_from_failures() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/breachedaccount/test@example.com");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/range/{}", PREFIX));
        then.status(200).body("");
    });

    let engine = engine_with_timeout(&server, Duration::from_secs(5))?;
    let response = engine.run(&request()).await;

    assert_eq!(response.email_breaches, EmailCheckResult::Breaches(vec![]));
    assert_eq!(response.password_pwned_count, PasswordCheckResult::Count(0));

    // The same answers serialize to [] and 0, never null.
    let value = serde_json::to_value(&response)?;
    assert_eq!(value["email_breaches"], serde_json::json!([]));
    assert_eq!(value["password_pwned_count"], serde_json::json!(0));
    Ok(())
}

#[tokio::test]
async fn test_slow_upstreams_resolve_to_unknown_within_the_timeout_bound() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/breachedaccount/test@example.com");
        then.status(200)
            .json_body(serde_json::json!([]))
            .delay(Duration::from_millis(1500));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/range/{}", PREFIX));
        then.status(200)
            .body(format!("{}:1", SUFFIX))
            .delay(Duration::from_millis(1500));
    });

    let engine = engine_with_timeout(&server, Duration::from_millis(200))?;
    let response = engine.run(&request()).await;

    assert_eq!(response.email_breaches, EmailCheckResult::Unknown);
    assert_eq!(response.password_pwned_count, PasswordCheckResult::Unknown);
    assert_eq!(response.recommendations[0].title, "Email Check Failed");
    assert_eq!(response.recommendations[1].title, "Password Check Failed");
    Ok(())
}

#[tokio::test]
async fn test_email_is_trimmed_before_the_upstream_call() -> Result<()> {
    let server = MockServer::start();
    let account_mock = server.mock(|when, then| {
        when.method(GET).path("/breachedaccount/test@example.com");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/range/{}", PREFIX));
        then.status(200).body("");
    });

    let engine = engine_with_timeout(&server, Duration::from_secs(5))?;
    let padded = SecurityCheckRequest {
        email: "  test@example.com  ".to_string(),
        password: "password".to_string(),
    };
    engine.run(&padded).await;

    account_mock.assert();
    Ok(())
}
