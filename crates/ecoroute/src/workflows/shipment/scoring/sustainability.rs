use serde::{Deserialize, Serialize};

use super::super::domain::{clamp_score, round_score, EmissionCategory};

/// Cargo weight (kg) at which the weight penalty saturates.
const WEIGHT_SATURATION_KG: f64 = 500.0;
const MAX_WEIGHT_PENALTY: f64 = 20.0;

/// Carbon-only score shared by the alternative routes and what-if scenarios.
pub fn carbon_only_score(carbon: f64) -> u8 {
    clamp_score(round_score(100.0 - carbon * 0.5))
}

/// Sustainability verdict for the adjusted shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SustainabilityResult {
    pub sustainability_score: u8,
    pub eco_recommendation: String,
    pub emission_category: EmissionCategory,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SustainabilityScorer;

impl SustainabilityScorer {
    pub fn evaluate(&self, carbon: f64, cargo_weight: f64) -> SustainabilityResult {
        let carbon_score = (100.0 - carbon * 0.5).max(0.0);
        let weight_factor = (cargo_weight / WEIGHT_SATURATION_KG).min(1.0) * MAX_WEIGHT_PENALTY;
        let sustainability_score = clamp_score(round_score(carbon_score - weight_factor));

        let (eco_recommendation, emission_category) = Self::classify(sustainability_score);

        SustainabilityResult {
            sustainability_score,
            eco_recommendation: eco_recommendation.to_string(),
            emission_category,
        }
    }

    /// Strict thresholds: 75 and 40 fall into the lower band.
    fn classify(score: u8) -> (&'static str, EmissionCategory) {
        if score > 75 {
            ("Highly Sustainable Route", EmissionCategory::Low)
        } else if score > 40 {
            ("Moderately Sustainable Route", EmissionCategory::Medium)
        } else {
            ("High Emission Route", EmissionCategory::High)
        }
    }
}
