use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::RiskLevel;
use super::pipeline::OptimizationResult;

const PERFORMANCE_WEIGHT: f64 = 0.35;
const SUSTAINABILITY_WEIGHT: f64 = 0.30;
const CONFIDENCE_WEIGHT: f64 = 0.25;
const RISK_WEIGHT: f64 = 0.10;
const DEFAULT_CONFIDENCE: f64 = 50.0;
const MAX_EXECUTION_PROBABILITY: u8 = 99;

/// Result-shaped record accepted for decisions and advisories.
///
/// Arrives from callers, so nothing here is trusted to be in range and the
/// risk label is kept as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSnapshot {
    #[serde(default)]
    pub optimized_route: String,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub carbon_impact: f64,
    pub risk_level: String,
    pub sustainability_score: f64,
    pub overall_performance_index: f64,
    #[serde(default)]
    pub optimization_confidence_score: Option<f64>,
}

impl From<&OptimizationResult> for OptimizationSnapshot {
    fn from(result: &OptimizationResult) -> Self {
        Self {
            optimized_route: result.optimized_route.clone(),
            estimated_cost: result.estimated_cost,
            carbon_impact: result.carbon_impact,
            risk_level: result.risk_level.label().to_string(),
            sustainability_score: f64::from(result.sustainability.sustainability_score),
            overall_performance_index: f64::from(result.overall_performance_index),
            optimization_confidence_score: Some(f64::from(result.optimization_confidence_score)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionTier {
    AutoExecute,
    SemiAutonomous,
    ExecutiveReview,
}

impl ExecutionTier {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::AutoExecute
        } else if score >= 60 {
            Self::SemiAutonomous
        } else {
            Self::ExecutiveReview
        }
    }

    /// Wire label, identical to the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AutoExecute => "AUTO_EXECUTE",
            Self::SemiAutonomous => "SEMI_AUTONOMOUS",
            Self::ExecutiveReview => "EXECUTIVE_REVIEW",
        }
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            Self::AutoExecute => "AI approved fully autonomous shipment execution.",
            Self::SemiAutonomous => "AI recommends execution with optional executive review.",
            Self::ExecutiveReview => "Executive intervention recommended.",
        }
    }
}

impl fmt::Display for ExecutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutonomousDecision {
    pub autonomous_score: u8,
    pub decision: ExecutionTier,
    pub explanation: String,
    pub execution_probability: u8,
}

/// Weighting applied to each risk label; unknown labels score as elevated.
pub fn risk_term(risk_label: &str) -> f64 {
    match RiskLevel::from_label(risk_label) {
        Some(RiskLevel::Low) => 100.0,
        Some(RiskLevel::Medium) => 60.0,
        Some(RiskLevel::Elevated) | None => 40.0,
    }
}

/// Gates execution on a blend of the optimization outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutonomousDecisionEngine;

impl AutonomousDecisionEngine {
    pub fn evaluate(&self, snapshot: &OptimizationSnapshot) -> AutonomousDecision {
        let confidence = snapshot
            .optimization_confidence_score
            .unwrap_or(DEFAULT_CONFIDENCE);

        let blended = snapshot.overall_performance_index * PERFORMANCE_WEIGHT
            + snapshot.sustainability_score * SUSTAINABILITY_WEIGHT
            + confidence * CONFIDENCE_WEIGHT
            + risk_term(&snapshot.risk_level) * RISK_WEIGHT;

        // Truncate, do not round. NaN collapses to zero.
        let autonomous_score = blended.trunc().clamp(0.0, 100.0) as u8;
        let decision = ExecutionTier::from_score(autonomous_score);

        AutonomousDecision {
            autonomous_score,
            decision,
            explanation: decision.explanation().to_string(),
            execution_probability: autonomous_score.min(MAX_EXECUTION_PROBABILITY),
        }
    }
}
