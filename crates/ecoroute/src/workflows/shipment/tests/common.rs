use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::config::NarrativeConfig;
use crate::workflows::shipment::decision::OptimizationSnapshot;
use crate::workflows::shipment::domain::ShipmentRequest;
use crate::workflows::shipment::narrative::{NarrativeProvider, ReasoningContext};
use crate::workflows::shipment::{shipment_router, ShipmentOptimizationService};

pub(super) fn mumbai_delhi() -> ShipmentRequest {
    ShipmentRequest::new("Mumbai", "Delhi", 120.0, "Low").expect("valid request")
}

pub(super) fn heavy_high_priority() -> ShipmentRequest {
    ShipmentRequest::new("Chennai", "Kolkata", 250.0, "High").expect("valid request")
}

pub(super) fn heavy_low_priority() -> ShipmentRequest {
    ShipmentRequest::new("Surat", "Jaipur", 300.0, "low").expect("valid request")
}

pub(super) fn narrative_config(timeout_ms: u64) -> NarrativeConfig {
    NarrativeConfig {
        timeout: Duration::from_millis(timeout_ms),
    }
}

/// Answers every call with fixed text and counts invocations.
#[derive(Default)]
pub(super) struct ScriptedNarrator {
    pub(super) calls: AtomicUsize,
}

impl ScriptedNarrator {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NarrativeProvider for ScriptedNarrator {
    fn generate_reasoning(&self, context: &ReasoningContext) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(format!(
            "{} keeps emissions at {:.2} kg with {} risk.",
            context.route, context.carbon, context.risk
        ))
    }

    fn generate_advisory(&self, snapshot: &OptimizationSnapshot) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(format!("Proceed with {}.", snapshot.optimized_route))
    }
}

/// Sleeps past any reasonable timeout before answering.
pub(super) struct StalledNarrator {
    pub(super) delay: Duration,
}

impl NarrativeProvider for StalledNarrator {
    fn generate_reasoning(&self, _context: &ReasoningContext) -> Option<String> {
        std::thread::sleep(self.delay);
        Some("late reasoning".to_string())
    }

    fn generate_advisory(&self, _snapshot: &OptimizationSnapshot) -> Option<String> {
        std::thread::sleep(self.delay);
        Some("late advisory".to_string())
    }
}

/// Panics inside the provider, standing in for a crashed client.
pub(super) struct PanickingNarrator;

impl NarrativeProvider for PanickingNarrator {
    fn generate_reasoning(&self, _context: &ReasoningContext) -> Option<String> {
        panic!("model endpoint returned malformed payload")
    }

    fn generate_advisory(&self, _snapshot: &OptimizationSnapshot) -> Option<String> {
        panic!("model endpoint returned malformed payload")
    }
}

/// Returns whitespace, which must be treated as no answer.
pub(super) struct BlankNarrator;

impl NarrativeProvider for BlankNarrator {
    fn generate_reasoning(&self, _context: &ReasoningContext) -> Option<String> {
        Some("  \n".to_string())
    }

    fn generate_advisory(&self, _snapshot: &OptimizationSnapshot) -> Option<String> {
        Some(String::new())
    }
}

pub(super) fn service_with<N: NarrativeProvider + 'static>(
    narrator: N,
    timeout_ms: u64,
) -> ShipmentOptimizationService<N> {
    ShipmentOptimizationService::new(Arc::new(narrator), narrative_config(timeout_ms))
}

pub(super) fn router_with<N: NarrativeProvider + 'static>(
    service: ShipmentOptimizationService<N>,
) -> axum::Router {
    shipment_router(Arc::new(service))
}

pub(super) fn json_request(uri: &str, body: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    assert_ne!(response.status(), StatusCode::NOT_FOUND, "route missing");
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
