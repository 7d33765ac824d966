//! Base figures computed straight from the raw request.

use super::domain::{Priority, RiskLevel, ShipmentRequest, HEAVY_CARGO_THRESHOLD_KG};

/// Base cost per kilogram of cargo.
pub const COST_PER_KG: f64 = 2.5;
/// Base carbon impact (kg CO₂) per kilogram of cargo.
pub const CARBON_PER_KG: f64 = 0.8;

pub fn resolve_route(source: &str, destination: &str) -> String {
    format!("{source} → {destination}")
}

pub fn base_cost(cargo_weight: f64) -> f64 {
    cargo_weight * COST_PER_KG
}

pub fn base_carbon(cargo_weight: f64) -> f64 {
    cargo_weight * CARBON_PER_KG
}

/// First match wins: high priority, then heavy cargo, then low.
pub fn classify_risk(priority: &Priority, cargo_weight: f64) -> RiskLevel {
    if priority.is_high() {
        RiskLevel::Elevated
    } else if cargo_weight > HEAVY_CARGO_THRESHOLD_KG {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Unadjusted figures for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseEstimate {
    pub route: String,
    pub cost: f64,
    pub carbon: f64,
    pub risk: RiskLevel,
}

impl BaseEstimate {
    pub fn from_request(request: &ShipmentRequest) -> Self {
        Self {
            route: resolve_route(request.source(), request.destination()),
            cost: base_cost(request.cargo_weight()),
            carbon: base_carbon(request.cargo_weight()),
            risk: classify_risk(request.priority(), request.cargo_weight()),
        }
    }
}
