use crate::infra::{AppState, CreditState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use credito_rd::eligibility::EligibilityInput;
use credito_rd::error::AppError;
use credito_rd::evaluation::EvaluationView;
use credito_rd::presentation::{
    dti_gauge, factor_bars, recommendation_cards, score_gauge, DtiGauge, FactorBar, GaugeFrame,
    RecommendationCard, ScoreGauge,
};
use credito_rd::scoring::{calculate_score, FactorInput, ScoreResult};
use credito_rd::snapshot::{SavedSnapshot, Snapshot};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreResponse {
    #[serde(flatten)]
    pub(crate) result: ScoreResult,
    pub(crate) gauge: ScoreGauge,
    pub(crate) bars: Vec<FactorBar>,
    pub(crate) cards: Vec<RecommendationCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) saved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EligibilityResponse {
    #[serde(flatten)]
    pub(crate) view: EvaluationView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) dti_gauge: Option<DtiGauge>,
}

pub(crate) fn credit_router(state: CreditState) -> Router {
    Router::new()
        .route("/api/v1/score", post(score_endpoint))
        .route(
            "/api/v1/score/snapshot",
            get(snapshot_endpoint).delete(clear_snapshot_endpoint),
        )
        .route("/api/v1/eligibility", post(eligibility_endpoint))
        .with_state(state)
}

pub(crate) fn with_service_routes(state: CreditState) -> Router {
    credit_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Scores the profile and caches it as the latest snapshot. A failed save
/// still returns the score.
pub(crate) async fn score_endpoint(
    State(state): State<CreditState>,
    Json(inputs): Json<FactorInput>,
) -> Json<ScoreResponse> {
    let result = calculate_score(&inputs);

    let saved_at = match state.snapshots.save(Snapshot {
        inputs,
        result: result.clone(),
    }) {
        Ok(saved) => Some(saved.saved_at),
        Err(err) => {
            warn!(error = %err, "score snapshot not saved");
            None
        }
    };

    Json(ScoreResponse {
        gauge: score_gauge(result.score, GaugeFrame::default()),
        bars: factor_bars(&result),
        cards: recommendation_cards(&result),
        result,
        saved_at,
    })
}

pub(crate) async fn snapshot_endpoint(
    State(state): State<CreditState>,
) -> Result<Json<Option<SavedSnapshot>>, AppError> {
    Ok(Json(state.snapshots.load()?))
}

pub(crate) async fn clear_snapshot_endpoint(
    State(state): State<CreditState>,
) -> Result<StatusCode, AppError> {
    state.snapshots.clear()?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn eligibility_endpoint(
    State(state): State<CreditState>,
    Json(input): Json<EligibilityInput>,
) -> Json<EligibilityResponse> {
    let view = state.evaluator.evaluate(&input).await;
    let dti_gauge = view.dti_value().map(dti_gauge);
    Json(EligibilityResponse { view, dti_gauge })
}
