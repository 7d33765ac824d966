use super::super::domain::{clamp_score, round_score, RiskLevel};

const SUSTAINABILITY_WEIGHT: f64 = 0.4;
const COST_WEIGHT: f64 = 0.2;
const CARBON_WEIGHT: f64 = 0.2;
const RISK_WEIGHT: f64 = 0.2;

pub fn risk_penalty(risk: RiskLevel) -> f64 {
    match risk {
        RiskLevel::Elevated => 20.0,
        RiskLevel::Medium => 10.0,
        RiskLevel::Low => 0.0,
    }
}

/// Weighted blend of sustainability, cost, carbon, and risk sub-scores.
///
/// Every term is at most 100 and the weights sum to one, so the index stays
/// within 0–100 without an upper clamp doing any work.
pub fn performance_index(cost: f64, carbon: f64, sustainability_score: u8, risk: RiskLevel) -> u8 {
    let cost_score = (100.0 - cost / 10.0).max(0.0);
    let carbon_score = (100.0 - carbon * 0.3).max(0.0);

    let overall = f64::from(sustainability_score) * SUSTAINABILITY_WEIGHT
        + cost_score * COST_WEIGHT
        + carbon_score * CARBON_WEIGHT
        + (100.0 - risk_penalty(risk)) * RISK_WEIGHT;

    clamp_score(round_score(overall.max(0.0)))
}
