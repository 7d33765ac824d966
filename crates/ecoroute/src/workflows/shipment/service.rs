use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::decision::{AutonomousDecision, AutonomousDecisionEngine, OptimizationSnapshot};
use super::domain::ShipmentRequest;
use super::narrative::{fallback_advisory, usable_text, NarrativeProvider};
use super::pipeline::{OptimizationPipeline, OptimizationResult};
use crate::config::NarrativeConfig;

/// Service composing the scoring pipeline, decision engine, and narrative
/// collaborator for request handlers.
pub struct ShipmentOptimizationService<N> {
    pipeline: OptimizationPipeline,
    decisions: AutonomousDecisionEngine,
    narrator: Arc<N>,
    narrative_timeout: Duration,
}

impl<N> ShipmentOptimizationService<N>
where
    N: NarrativeProvider + 'static,
{
    pub fn new(narrator: Arc<N>, config: NarrativeConfig) -> Self {
        Self {
            pipeline: OptimizationPipeline::new(),
            decisions: AutonomousDecisionEngine,
            narrator,
            narrative_timeout: config.timeout,
        }
    }

    /// Score a shipment. Narrative trouble only ever changes `ai_reasoning`.
    pub async fn optimize(&self, request: ShipmentRequest) -> OptimizationResult {
        let assessment = self.pipeline.assess(&request);

        let context = assessment.reasoning_context();
        let narrator = Arc::clone(&self.narrator);
        let reasoning = self
            .bounded("reasoning", move || narrator.generate_reasoning(&context))
            .await;

        let result = assessment.into_result(reasoning);
        info!(
            route = %result.optimized_route,
            risk = %result.risk_level,
            sustainability = result.sustainability.sustainability_score,
            performance_index = result.overall_performance_index,
            "shipment optimized"
        );
        result
    }

    pub fn decide(&self, snapshot: &OptimizationSnapshot) -> AutonomousDecision {
        let decision = self.decisions.evaluate(snapshot);
        info!(
            autonomous_score = decision.autonomous_score,
            decision = ?decision.decision,
            "autonomous decision evaluated"
        );
        decision
    }

    /// Executive advisory from the collaborator, or the deterministic report.
    pub async fn advise(&self, snapshot: &OptimizationSnapshot) -> String {
        let narrator = Arc::clone(&self.narrator);
        let request = snapshot.clone();
        self.bounded("advisory", move || narrator.generate_advisory(&request))
            .await
            .unwrap_or_else(|| fallback_advisory(snapshot))
    }

    async fn bounded<F>(&self, kind: &'static str, call: F) -> Option<String>
    where
        F: FnOnce() -> Option<String> + Send + 'static,
    {
        let task = tokio::task::spawn_blocking(call);
        match tokio::time::timeout(self.narrative_timeout, task).await {
            Ok(Ok(text)) => usable_text(text),
            Ok(Err(err)) => {
                warn!(kind, error = %err, "narrative provider failed; using fallback");
                None
            }
            Err(_) => {
                warn!(
                    kind,
                    timeout_ms = self.narrative_timeout.as_millis() as u64,
                    "narrative provider timed out; using fallback"
                );
                None
            }
        }
    }
}
