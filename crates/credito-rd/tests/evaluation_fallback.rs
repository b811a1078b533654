use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use credito_rd::eligibility::{EligibilityEngine, EligibilityInput};
use credito_rd::evaluation::{
    EligibilityEvaluator, EvaluationError, EvaluationView, FallbackEvaluator, LocalEvaluator,
    RemoteEvaluator,
};
use serde_json::{json, Value};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server runs");
    });
    format!("http://{addr}/evaluate")
}

async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/evaluate")
}

fn high_risk_input() -> EligibilityInput {
    EligibilityInput {
        income: 30_000.0,
        expenses: 20_000.0,
        age: 25,
        employment_months: 6,
        score: 650,
    }
}

fn assert_high_risk_golden(view: &EvaluationView) {
    assert_eq!(view.verdict_badge, "Alto Riesgo");
    assert_eq!(view.verdict_badge_class, "danger");
    assert_eq!(view.product_name, "Reestructuración o Consolidación de Deuda");
    assert_eq!(view.dti_percent, "66.7");
    assert_eq!(view.disposable, 10_000.0);
    assert_eq!(view.confidence, "Baja");
    assert_eq!(
        view.tips.first().map(String::as_str),
        Some("Reduce gastos en RD$8,000 para llegar a un DTI del 40%.")
    );
}

fn remote_fallback(endpoint: String) -> FallbackEvaluator {
    let remote = RemoteEvaluator::new(endpoint).expect("client builds");
    FallbackEvaluator::with_primary(Arc::new(remote))
}

#[tokio::test]
async fn local_and_mirrored_remote_agree_on_golden_output() {
    let mirror = Router::new().route(
        "/evaluate",
        post(|Json(input): Json<EligibilityInput>| async move {
            Json(EvaluationView::from(
                &EligibilityEngine::default().evaluate(&input),
            ))
        }),
    );
    let endpoint = spawn(mirror).await;

    let local = LocalEvaluator::default()
        .evaluate(&high_risk_input())
        .await
        .expect("local never fails");
    let remote = RemoteEvaluator::new(endpoint)
        .expect("client builds")
        .evaluate(&high_risk_input())
        .await
        .expect("mirror responds");

    assert_high_risk_golden(&local);
    assert_high_risk_golden(&remote);
    assert_eq!(local, remote);
}

#[tokio::test]
async fn remote_request_uses_wire_field_names() {
    let echo = Router::new().route(
        "/evaluate",
        post(|Json(body): Json<Value>| async move {
            let keys: Vec<String> = body
                .as_object()
                .map(|map| map.keys().cloned().collect())
                .unwrap_or_default();
            Json(json!({
                "verdictBadge": "Perfil Muy Sólido",
                "adviceText": keys.join(","),
                "productName": "remote",
                "dtiPercent": "25.0",
                "disposable": 0
            }))
        }),
    );
    let endpoint = spawn(echo).await;

    let view = remote_fallback(endpoint).evaluate(&high_risk_input()).await;

    let mut keys: Vec<&str> = view.advice_text.split(',').collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["age", "employment", "expenses", "income", "score"]);
}

#[tokio::test]
async fn remote_result_wins_when_available() {
    let remote = Router::new().route(
        "/evaluate",
        post(|| async {
            Json(json!([{
                "verdictBadge": "Perfil de Élite",
                "verdictBadgeClass": "",
                "adviceText": "remote advice",
                "productName": "Remote Signature",
                "productBadgeText": "ORIENTACIÓN",
                "productDesc": "desc",
                "productBg": "#000",
                "tips": ["a", "b"],
                "confidence": "Muy Alta",
                "dtiPercent": 12.5,
                "disposable": 50000
            }]))
        }),
    );
    let endpoint = spawn(remote).await;
    let evaluator = remote_fallback(endpoint);

    let view = evaluator.evaluate(&high_risk_input()).await;

    assert_eq!(evaluator.primary_name(), "remote");
    assert_eq!(view.product_name, "Remote Signature");
    assert_eq!(view.dti_percent, "12.5");
    assert_eq!(view.tips.len(), 2);
}

#[tokio::test]
async fn server_error_falls_back_to_local_engine() {
    let failing = Router::new().route(
        "/evaluate",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let endpoint = spawn(failing).await;

    let direct = RemoteEvaluator::new(endpoint.clone())
        .expect("client builds")
        .evaluate(&high_risk_input())
        .await;
    match direct {
        Err(EvaluationError::Api { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected api error, got {other:?}"),
    }

    let view = remote_fallback(endpoint).evaluate(&high_risk_input()).await;
    assert_high_risk_golden(&view);
}

#[tokio::test]
async fn malformed_payload_falls_back_to_local_engine() {
    let garbage = Router::new().route("/evaluate", post(|| async { Json(json!([])) }));
    let endpoint = spawn(garbage).await;

    let view = remote_fallback(endpoint).evaluate(&high_risk_input()).await;

    assert_high_risk_golden(&view);
}

#[tokio::test]
async fn unreachable_remote_falls_back_repeatedly() {
    let evaluator = remote_fallback(unreachable_endpoint().await);

    for _ in 0..3 {
        let view = evaluator.evaluate(&high_risk_input()).await;
        assert_high_risk_golden(&view);
    }
}

#[tokio::test]
async fn local_only_evaluator_skips_network() {
    let evaluator = FallbackEvaluator::local_only();

    let view = evaluator.evaluate(&high_risk_input()).await;

    assert_eq!(evaluator.primary_name(), "local");
    assert_high_risk_golden(&view);
}
