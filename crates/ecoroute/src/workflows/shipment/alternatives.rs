use serde::{Deserialize, Serialize};

use super::domain::round_money;
use super::scoring::carbon_only_score;

/// Fixed routing strategies offered next to the optimized route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingStrategy {
    Express,
    Eco,
}

impl RoutingStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::Eco => "Eco",
        }
    }

    const fn cost_per_kg(self) -> f64 {
        match self {
            Self::Express => 3.0,
            Self::Eco => 2.6,
        }
    }

    const fn carbon_per_kg(self) -> f64 {
        match self {
            Self::Express => 1.2,
            Self::Eco => 0.6,
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Express => "Express Route Selected due to priority efficiency.",
            Self::Eco => "Eco Route Selected due to better sustainability-to-cost balance.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRoute {
    pub route: String,
    pub cost: f64,
    pub carbon: f64,
    pub sustainability_score: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlternativePlan {
    pub routes: Vec<AlternativeRoute>,
    pub recommended: RoutingStrategy,
}

impl AlternativePlan {
    pub fn recommendation(&self) -> &'static str {
        self.recommended.recommendation()
    }
}

/// Builds the Express and Eco options from the raw cargo weight.
///
/// Eco is recommended only when it scores strictly higher; ties go to Express.
pub fn generate_alternatives(route: &str, cargo_weight: f64) -> AlternativePlan {
    let express = strategy_route(RoutingStrategy::Express, route, cargo_weight);
    let eco = strategy_route(RoutingStrategy::Eco, route, cargo_weight);

    let recommended = if eco.sustainability_score > express.sustainability_score {
        RoutingStrategy::Eco
    } else {
        RoutingStrategy::Express
    };

    AlternativePlan {
        routes: vec![express, eco],
        recommended,
    }
}

fn strategy_route(strategy: RoutingStrategy, route: &str, cargo_weight: f64) -> AlternativeRoute {
    let cost = cargo_weight * strategy.cost_per_kg();
    let carbon = cargo_weight * strategy.carbon_per_kg();

    AlternativeRoute {
        route: format!("{route} ({})", strategy.label()),
        cost: round_money(cost),
        carbon: round_money(carbon),
        sustainability_score: carbon_only_score(carbon),
    }
}
