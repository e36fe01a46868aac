use std::net::SocketAddr;
use std::sync::Arc;

use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::core::engine::SecurityCheckEngine;
use crate::domain::model::{ErrorResponse, HealthResponse, SecurityCheckRequest};
use crate::domain::ports::{EmailBreachCheck, PasswordBreachCheck};
use crate::utils::validation::validate_non_empty_string;

const MISSING_FIELDS_MESSAGE: &str = "Email and password are required";

/// The full route tree: `POST /api/check-security`, `GET /api/health`, with
/// permissive CORS so the separate front-end origin can call us.
pub fn routes<E, P>(
    engine: Arc<SecurityCheckEngine<E, P>>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone
where
    E: EmailBreachCheck + 'static,
    P: PasswordBreachCheck + 'static,
{
    let check_security = warp::post()
        .and(warp::path!("api" / "check-security"))
        .and(warp::body::content_length_limit(16 * 1024)) // 16k
        .and(warp::body::json())
        .and_then(move |request: SecurityCheckRequest| {
            let engine = engine.clone();
            async move { handle_check_security(engine, request).await }
        });

    let health = warp::get()
        .and(warp::path!("api" / "health"))
        .map(|| warp::reply::json(&HealthResponse::now()));

    check_security.or(health).with(
        warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST", "OPTIONS"]),
    )
}

pub async fn run<E, P>(engine: Arc<SecurityCheckEngine<E, P>>, addr: SocketAddr)
where
    E: EmailBreachCheck + 'static,
    P: PasswordBreachCheck + 'static,
{
    tracing::info!(%addr, "Serving security check API");
    warp::serve(routes(engine)).run(addr).await;
}

async fn handle_check_security<E, P>(
    engine: Arc<SecurityCheckEngine<E, P>>,
    request: SecurityCheckRequest,
) -> Result<impl Reply, Rejection>
where
    E: EmailBreachCheck + 'static,
    P: PasswordBreachCheck + 'static,
{
    if let Err(e) = validate_request(&request) {
        tracing::debug!(error = %e, "Rejected security check request");
        let body = warp::reply::json(&ErrorResponse {
            error: MISSING_FIELDS_MESSAGE.to_string(),
        });
        return Ok(warp::reply::with_status(body, StatusCode::BAD_REQUEST));
    }

    let response = engine.run(&request).await;
    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}

fn validate_request(request: &SecurityCheckRequest) -> crate::utils::error::Result<()> {
    validate_non_empty_string("email", request.trimmed_email())?;
    validate_non_empty_string("password", &request.password)?;
    Ok(())
}
