use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::shipment::router::optimize_handler;
use crate::workflows::shipment::{OfflineNarrator, ShipmentRequestPayload, REASONING_FALLBACK};

#[tokio::test]
async fn optimize_route_returns_wrapped_result() {
    let router = router_with(service_with(OfflineNarrator, 50));

    let response = router
        .oneshot(json_request(
            "/api/v1/optimize-route",
            json!({
                "source": "Mumbai",
                "destination": "Delhi",
                "cargo_weight": 120,
                "priority": "Low"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let result = &body["result"];
    assert_eq!(result["optimized_route"], "Mumbai → Delhi");
    assert_eq!(result["estimated_cost"], 300.0);
    assert_eq!(result["sustainability_score"], 47);
    assert_eq!(result["overall_performance_index"], 67);
    assert_eq!(result["optimization_confidence_score"], 72);
    assert_eq!(result["ai_reasoning"], REASONING_FALLBACK);
}

#[tokio::test]
async fn optimize_handler_rejects_non_positive_weight() {
    let service = Arc::new(service_with(OfflineNarrator, 50));
    let payload = ShipmentRequestPayload {
        source: "Mumbai".to_string(),
        destination: "Delhi".to_string(),
        cargo_weight: 0.0,
        priority: "Low".to_string(),
    };

    let response = optimize_handler::<OfflineNarrator>(State(service), axum::Json(payload))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("cargo_weight"));
}

#[tokio::test]
async fn optimize_route_accepts_unrecognized_priority() {
    let router = router_with(service_with(OfflineNarrator, 50));

    let response = router
        .oneshot(json_request(
            "/api/v1/optimize-route",
            json!({
                "source": "Pune",
                "destination": "Goa",
                "cargo_weight": 80.5,
                "priority": "whenever"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["result"]["risk_level"], "Low");
}

#[tokio::test]
async fn autonomous_decision_reads_wrapped_result() {
    let router = router_with(service_with(OfflineNarrator, 50));

    let response = router
        .oneshot(json_request(
            "/api/v1/autonomous-decision",
            json!({
                "result": {
                    "overall_performance_index": 85,
                    "sustainability_score": 90,
                    "optimization_confidence_score": 90,
                    "risk_level": "Low"
                }
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["autonomous_score"], 89);
    assert_eq!(body["decision"], "AUTO_EXECUTE");
    assert_eq!(body["execution_probability"], 89);
}

#[tokio::test]
async fn autonomous_decision_defaults_missing_confidence() {
    let router = router_with(service_with(OfflineNarrator, 50));

    let response = router
        .oneshot(json_request(
            "/api/v1/autonomous-decision",
            json!({
                "result": {
                    "overall_performance_index": 60,
                    "sustainability_score": 60,
                    "risk_level": "Medium"
                }
            }),
        ))
        .await
        .expect("router responds");

    let body = read_json_body(response).await;
    assert_eq!(body["autonomous_score"], 57);
    assert_eq!(body["decision"], "EXECUTIVE_REVIEW");
}

#[tokio::test]
async fn executive_advisory_accepts_bare_and_wrapped_snapshots() {
    let snapshot = json!({
        "optimized_route": "Mumbai → Delhi",
        "estimated_cost": 300.0,
        "carbon_impact": 96.0,
        "risk_level": "Low",
        "sustainability_score": 47,
        "overall_performance_index": 67
    });

    for payload in [snapshot.clone(), json!({ "result": snapshot })] {
        let router = router_with(service_with(OfflineNarrator, 50));
        let response = router
            .oneshot(json_request("/api/v1/executive-advisory", payload))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        let advisory = body["executive_advisory"].as_str().expect("advisory text");
        assert!(advisory.contains("Route: Mumbai → Delhi"));
    }
}

#[tokio::test]
async fn executive_advisory_uses_provider_when_available() {
    let router = router_with(service_with(ScriptedNarrator::default(), 1_000));

    let response = router
        .oneshot(json_request(
            "/api/v1/executive-advisory",
            json!({
                "result": {
                    "optimized_route": "Pune → Goa",
                    "risk_level": "Low",
                    "sustainability_score": 70,
                    "overall_performance_index": 80
                }
            }),
        ))
        .await
        .expect("router responds");

    let body = read_json_body(response).await;
    assert_eq!(body["executive_advisory"], "Proceed with Pune → Goa.");
}

#[tokio::test]
async fn endpoints_are_also_served_at_root() {
    let router = router_with(service_with(OfflineNarrator, 50));

    let response = router
        .clone()
        .oneshot(json_request(
            "/optimize-route",
            json!({
                "source": "Mumbai",
                "destination": "Delhi",
                "cargo_weight": 120,
                "priority": "Low"
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["result"]["overall_performance_index"], 67);

    let response = router
        .clone()
        .oneshot(json_request(
            "/autonomous-decision",
            json!({
                "result": {
                    "overall_performance_index": 67,
                    "sustainability_score": 47,
                    "optimization_confidence_score": 72,
                    "risk_level": "Low"
                }
            }),
        ))
        .await
        .expect("router responds");
    let body = read_json_body(response).await;
    assert_eq!(body["decision"], "SEMI_AUTONOMOUS");

    let response = router
        .oneshot(json_request(
            "/executive-advisory",
            json!({
                "risk_level": "Low",
                "sustainability_score": 47,
                "overall_performance_index": 67
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}
