//! Ordered multiplicative corrections applied to the base cost/carbon pair.
//!
//! Rules run top to bottom and each one scales the value left by the rules
//! before it, so a heavy high-priority shipment sees carbon ×1.2 and then
//! ×1.1 as two separate steps.

use serde::Serialize;

use super::domain::{RiskLevel, ScoredMetric, ShipmentRequest};

/// Which half of the metric pair a rule scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Cost,
    Carbon,
}

/// Predicate evaluated against the original request and its risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentCondition {
    HighPriority,
    HeavyCargo,
    ElevatedRisk,
}

impl AdjustmentCondition {
    fn holds(self, request: &ShipmentRequest, risk: RiskLevel) -> bool {
        match self {
            Self::HighPriority => request.priority().is_high(),
            Self::HeavyCargo => request.is_heavy(),
            Self::ElevatedRisk => risk == RiskLevel::Elevated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentRule {
    pub name: &'static str,
    pub condition: AdjustmentCondition,
    pub target: MetricField,
    pub multiplier: f64,
}

/// The production rule order. Reordering changes results.
pub const STANDARD_ADJUSTMENTS: [AdjustmentRule; 3] = [
    AdjustmentRule {
        name: "expedited_delivery_surcharge",
        condition: AdjustmentCondition::HighPriority,
        target: MetricField::Cost,
        multiplier: 1.1,
    },
    AdjustmentRule {
        name: "heavy_cargo_emissions",
        condition: AdjustmentCondition::HeavyCargo,
        target: MetricField::Carbon,
        multiplier: 1.2,
    },
    AdjustmentRule {
        name: "elevated_risk_penalty",
        condition: AdjustmentCondition::ElevatedRisk,
        target: MetricField::Carbon,
        multiplier: 1.1,
    },
];

/// A rule that fired, with the value it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedAdjustment {
    pub rule: &'static str,
    pub target: MetricField,
    pub multiplier: f64,
    pub before: f64,
    pub after: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedMetric {
    pub metric: ScoredMetric,
    pub applied: Vec<AppliedAdjustment>,
}

pub fn apply_adjustments(
    rules: &[AdjustmentRule],
    base: ScoredMetric,
    request: &ShipmentRequest,
    risk: RiskLevel,
) -> AdjustedMetric {
    rules.iter().fold(
        AdjustedMetric {
            metric: base,
            applied: Vec::new(),
        },
        |mut acc, rule| {
            if !rule.condition.holds(request, risk) {
                return acc;
            }

            let slot = match rule.target {
                MetricField::Cost => &mut acc.metric.cost,
                MetricField::Carbon => &mut acc.metric.carbon,
            };
            let before = *slot;
            *slot *= rule.multiplier;
            let after = *slot;

            acc.applied.push(AppliedAdjustment {
                rule: rule.name,
                target: rule.target,
                multiplier: rule.multiplier,
                before,
                after,
            });
            acc
        },
    )
}
