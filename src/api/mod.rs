use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::clipboard::SystemClipboard;
use crate::core::Inputs;
use crate::estimator::{Estimator, ExportStatus, SubmitError, load_default_engine};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

// Absent or null fields become NaN so the validator reports the owning
// rule's message instead of a serde error.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CalculatePayload {
    #[serde(alias = "current_age")]
    current_age: Option<f64>,
    #[serde(alias = "retirement_age")]
    retirement_age: Option<f64>,
    #[serde(alias = "current_savings")]
    current_savings: Option<f64>,
    #[serde(alias = "monthly_contribution")]
    monthly_contribution: Option<f64>,
    #[serde(alias = "expected_return_percent", alias = "expectedReturn")]
    expected_return_percent: Option<f64>,
    #[serde(alias = "inflation_percent", alias = "inflation")]
    inflation_percent: Option<f64>,
    #[serde(alias = "withdrawal_rate_percent", alias = "withdrawalRate")]
    withdrawal_rate_percent: Option<f64>,
    #[serde(alias = "target_monthly_income", alias = "targetIncome")]
    target_monthly_income: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ExportResponse {
    copied: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn inputs_from_payload(payload: &CalculatePayload) -> Inputs {
    Inputs {
        current_age: payload.current_age.unwrap_or(f64::NAN),
        retirement_age: payload.retirement_age.unwrap_or(f64::NAN),
        current_savings: payload.current_savings.unwrap_or(f64::NAN),
        monthly_contribution: payload.monthly_contribution.unwrap_or(f64::NAN),
        expected_return_percent: payload.expected_return_percent.unwrap_or(f64::NAN),
        inflation_percent: payload.inflation_percent.unwrap_or(f64::NAN),
        withdrawal_rate_percent: payload.withdrawal_rate_percent.unwrap_or(f64::NAN),
        target_monthly_income: payload.target_monthly_income.unwrap_or(f64::NAN),
    }
}

fn submit_error_status(err: &SubmitError) -> StatusCode {
    match err {
        SubmitError::EngineNotReady => StatusCode::SERVICE_UNAVAILABLE,
        SubmitError::CalculationInFlight => StatusCode::CONFLICT,
        SubmitError::Invalid(_) => StatusCode::BAD_REQUEST,
        SubmitError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let estimator = Arc::new(Estimator::new(Arc::new(SystemClipboard)));
    tokio::spawn({
        let estimator = Arc::clone(&estimator);
        async move { estimator.initialize(load_default_engine()).await }
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/engine", get(engine_status_handler))
        .route(
            "/api/calculate",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .route("/api/export", post(export_handler))
        .fallback(not_found_handler)
        .with_state(estimator);

    let listener = TcpListener::bind(addr).await?;
    println!("Retirement estimator listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn engine_status_handler(State(estimator): State<Arc<Estimator>>) -> Response {
    json_response(StatusCode::OK, estimator.engine_status().await)
}

async fn calculate_get_handler(
    State(estimator): State<Arc<Estimator>>,
    Query(payload): Query<CalculatePayload>,
) -> Response {
    calculate_handler_impl(estimator, payload).await
}

async fn calculate_post_handler(
    State(estimator): State<Arc<Estimator>>,
    Json(payload): Json<CalculatePayload>,
) -> Response {
    calculate_handler_impl(estimator, payload).await
}

async fn calculate_handler_impl(estimator: Arc<Estimator>, payload: CalculatePayload) -> Response {
    let inputs = inputs_from_payload(&payload);
    match estimator.submit(inputs).await {
        Ok(report) => json_response(StatusCode::OK, report),
        Err(err) => error_response(submit_error_status(&err), &err.to_string()),
    }
}

async fn export_handler(State(estimator): State<Arc<Estimator>>) -> Response {
    match estimator.export_results().await {
        Ok(status) => json_response(
            StatusCode::OK,
            ExportResponse {
                copied: status == ExportStatus::Copied,
            },
        ),
        Err(err) => error_response(StatusCode::SERVICE_UNAVAILABLE, &err.to_string()),
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn inputs_from_json(json: &str) -> Result<Inputs, String> {
    let payload = serde_json::from_str::<CalculatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    Ok(inputs_from_payload(&payload))
}
