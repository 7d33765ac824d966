use serde::{Deserialize, Serialize};

use super::domain::round_money;
use super::estimation::{base_carbon, base_cost};
use super::scoring::carbon_only_score;

const CARGO_REDUCTION_FACTOR: f64 = 0.9;
const LOW_PRIORITY_COST_PER_KG: f64 = 2.3;
const LOW_PRIORITY_CARBON_PER_KG: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationScenario {
    pub scenario: String,
    pub estimated_cost: f64,
    pub carbon_impact: f64,
    pub sustainability_score: u8,
}

impl SimulationScenario {
    fn new(label: &str, cost: f64, carbon: f64) -> Self {
        Self {
            scenario: label.to_string(),
            estimated_cost: round_money(cost),
            carbon_impact: round_money(carbon),
            sustainability_score: carbon_only_score(carbon),
        }
    }
}

/// What-if scenarios computed from the raw cargo weight.
pub fn simulate(cargo_weight: f64) -> Vec<SimulationScenario> {
    let reduced_weight = cargo_weight * CARGO_REDUCTION_FACTOR;
    let reduced_cargo = SimulationScenario::new(
        "Reduce cargo weight by 10%",
        base_cost(reduced_weight),
        base_carbon(reduced_weight),
    );

    let low_priority = SimulationScenario::new(
        "Switch to Low Priority Delivery",
        cargo_weight * LOW_PRIORITY_COST_PER_KG,
        cargo_weight * LOW_PRIORITY_CARBON_PER_KG,
    );

    vec![reduced_cargo, low_priority]
}
