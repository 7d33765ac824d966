use serde::{Deserialize, Serialize};
use tracing::debug;

use super::adjustment::{apply_adjustments, AdjustmentRule, AppliedAdjustment, STANDARD_ADJUSTMENTS};
use super::alternatives::{generate_alternatives, AlternativePlan, AlternativeRoute};
use super::domain::{round_money, RiskLevel, ScoredMetric, ShipmentRequest};
use super::estimation::BaseEstimate;
use super::narrative::{self, NarrativeProvider, ReasoningContext};
use super::scoring::{
    optimization_confidence, performance_index, SustainabilityResult, SustainabilityScorer,
};
use super::simulation::{simulate, SimulationScenario};

/// Aggregate record returned for one shipment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized_route: String,
    pub estimated_cost: f64,
    pub carbon_impact: f64,
    pub risk_level: RiskLevel,
    #[serde(flatten)]
    pub sustainability: SustainabilityResult,
    pub optimization_confidence_score: u8,
    pub decision_explanation: String,
    pub ai_reasoning: String,
    pub alternative_routes: Vec<AlternativeRoute>,
    pub recommended_strategy: String,
    pub simulation_analysis: Vec<SimulationScenario>,
    pub overall_performance_index: u8,
}

/// Every numeric stage for one request, before the narrative is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentAssessment {
    pub route: String,
    pub risk: RiskLevel,
    pub base: ScoredMetric,
    pub adjusted: ScoredMetric,
    pub adjustments: Vec<AppliedAdjustment>,
    pub sustainability: SustainabilityResult,
    pub performance_index: u8,
    pub confidence: u8,
    pub alternatives: AlternativePlan,
    pub simulations: Vec<SimulationScenario>,
}

impl ShipmentAssessment {
    /// Context handed to the narrative collaborator.
    pub fn reasoning_context(&self) -> ReasoningContext {
        ReasoningContext {
            route: self.route.clone(),
            cost: round_money(self.adjusted.cost),
            carbon: round_money(self.adjusted.carbon),
            risk: self.risk,
            sustainability_score: self.sustainability.sustainability_score,
        }
    }

    pub fn decision_explanation(&self) -> String {
        narrative::decision_explanation(
            &self.route,
            self.adjusted.cost,
            self.adjusted.carbon,
            self.risk,
            self.sustainability.sustainability_score,
        )
    }

    /// Assembles the caller-facing result. Absent or blank reasoning is
    /// replaced with the fixed fallback.
    pub fn into_result(self, ai_reasoning: Option<String>) -> OptimizationResult {
        let decision_explanation = self.decision_explanation();
        let recommended_strategy = self.alternatives.recommendation().to_string();

        OptimizationResult {
            optimized_route: self.route,
            estimated_cost: round_money(self.adjusted.cost),
            carbon_impact: round_money(self.adjusted.carbon),
            risk_level: self.risk,
            sustainability: self.sustainability,
            optimization_confidence_score: self.confidence,
            decision_explanation,
            ai_reasoning: narrative::reasoning_or_fallback(ai_reasoning),
            alternative_routes: self.alternatives.routes,
            recommended_strategy,
            simulation_analysis: self.simulations,
            overall_performance_index: self.performance_index,
        }
    }
}

/// Stateless scoring pipeline; safe to share across requests.
#[derive(Debug, Clone)]
pub struct OptimizationPipeline {
    rules: &'static [AdjustmentRule],
    scorer: SustainabilityScorer,
}

impl Default for OptimizationPipeline {
    fn default() -> Self {
        Self {
            rules: &STANDARD_ADJUSTMENTS,
            scorer: SustainabilityScorer,
        }
    }
}

impl OptimizationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assess(&self, request: &ShipmentRequest) -> ShipmentAssessment {
        let estimate = BaseEstimate::from_request(request);
        let base = ScoredMetric {
            cost: estimate.cost,
            carbon: estimate.carbon,
        };

        let adjusted = apply_adjustments(self.rules, base, request, estimate.risk);
        let sustainability = self
            .scorer
            .evaluate(adjusted.metric.carbon, request.cargo_weight());
        let performance_index = performance_index(
            adjusted.metric.cost,
            adjusted.metric.carbon,
            sustainability.sustainability_score,
            estimate.risk,
        );
        let confidence = optimization_confidence(sustainability.sustainability_score);

        let alternatives = generate_alternatives(&estimate.route, request.cargo_weight());
        let simulations = simulate(request.cargo_weight());

        debug!(
            route = %estimate.route,
            priority = %request.priority(),
            risk = %estimate.risk,
            adjustments = adjusted.applied.len(),
            sustainability = sustainability.sustainability_score,
            performance_index,
            "shipment assessed"
        );

        ShipmentAssessment {
            route: estimate.route,
            risk: estimate.risk,
            base,
            adjusted: adjusted.metric,
            adjustments: adjusted.applied,
            sustainability,
            performance_index,
            confidence,
            alternatives,
            simulations,
        }
    }

    /// Runs the pipeline and asks the provider for reasoning inline.
    ///
    /// Hosts on an async runtime should prefer the service, which bounds the
    /// provider call with a timeout.
    pub fn optimize(
        &self,
        request: &ShipmentRequest,
        narrator: &dyn NarrativeProvider,
    ) -> OptimizationResult {
        let assessment = self.assess(request);
        let reasoning = narrator.generate_reasoning(&assessment.reasoning_context());
        assessment.into_result(reasoning)
    }
}
