//! Shipment optimization: base estimates, ordered adjustments, scoring,
//! alternatives, what-if simulation, and the autonomous-execution gate.
//!
//! Every numeric stage is a pure function of the request. The only optional,
//! fallible input is the narrative collaborator, and its absence is always
//! replaced by fixed text.

pub mod adjustment;
pub mod alternatives;
pub mod decision;
pub mod domain;
pub mod estimation;
pub mod narrative;
pub mod pipeline;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use adjustment::{AdjustmentRule, AppliedAdjustment, MetricField, STANDARD_ADJUSTMENTS};
pub use alternatives::{AlternativeRoute, RoutingStrategy};
pub use decision::{
    AutonomousDecision, AutonomousDecisionEngine, ExecutionTier, OptimizationSnapshot,
};
pub use domain::{
    EmissionCategory, Priority, RiskLevel, ScoredMetric, ShipmentRequest, ShipmentRequestPayload,
    ShipmentValidationError,
};
pub use narrative::{NarrativeProvider, OfflineNarrator, ReasoningContext, REASONING_FALLBACK};
pub use pipeline::{OptimizationPipeline, OptimizationResult, ShipmentAssessment};
pub use router::shipment_router;
pub use scoring::SustainabilityResult;
pub use service::ShipmentOptimizationService;
pub use simulation::SimulationScenario;
