use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::decision::{AutonomousDecision, OptimizationSnapshot};
use super::domain::{ShipmentRequest, ShipmentRequestPayload};
use super::narrative::NarrativeProvider;
use super::pipeline::OptimizationResult;
use super::service::ShipmentOptimizationService;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub result: OptimizationResult,
}

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub result: OptimizationSnapshot,
}

/// Advisory callers may wrap the snapshot in `result` or send it bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AdvisoryRequest {
    Wrapped { result: OptimizationSnapshot },
    Bare(OptimizationSnapshot),
}

impl AdvisoryRequest {
    pub fn into_snapshot(self) -> OptimizationSnapshot {
        match self {
            Self::Wrapped { result } | Self::Bare(result) => result,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub executive_advisory: String,
}

/// Router builder exposing the optimization, decision, and advisory endpoints.
///
/// Each endpoint is served under `/api/v1` and also at the root, where
/// existing dashboard clients call it.
pub fn shipment_router<N>(service: Arc<ShipmentOptimizationService<N>>) -> Router
where
    N: NarrativeProvider + 'static,
{
    let endpoints = Router::new()
        .route("/optimize-route", post(optimize_handler::<N>))
        .route("/autonomous-decision", post(decision_handler::<N>))
        .route("/executive-advisory", post(advisory_handler::<N>));

    Router::new()
        .nest("/api/v1", endpoints.clone())
        .merge(endpoints)
        .with_state(service)
}

pub(crate) async fn optimize_handler<N>(
    State(service): State<Arc<ShipmentOptimizationService<N>>>,
    Json(payload): Json<ShipmentRequestPayload>,
) -> Result<Json<OptimizeResponse>, AppError>
where
    N: NarrativeProvider + 'static,
{
    let request = ShipmentRequest::try_from(payload)?;
    let result = service.optimize(request).await;
    Ok(Json(OptimizeResponse { result }))
}

pub(crate) async fn decision_handler<N>(
    State(service): State<Arc<ShipmentOptimizationService<N>>>,
    Json(payload): Json<DecisionRequest>,
) -> Json<AutonomousDecision>
where
    N: NarrativeProvider + 'static,
{
    Json(service.decide(&payload.result))
}

pub(crate) async fn advisory_handler<N>(
    State(service): State<Arc<ShipmentOptimizationService<N>>>,
    Json(payload): Json<AdvisoryRequest>,
) -> Json<AdvisoryResponse>
where
    N: NarrativeProvider + 'static,
{
    let snapshot = payload.into_snapshot();
    let executive_advisory = service.advise(&snapshot).await;
    Json(AdvisoryResponse { executive_advisory })
}
