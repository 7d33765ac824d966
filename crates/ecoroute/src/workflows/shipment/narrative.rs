//! Deterministic wording for shipment results plus the optional narrative
//! collaborator that can enrich it.

use serde::Serialize;

use super::decision::OptimizationSnapshot;
use super::domain::RiskLevel;

pub const REASONING_FALLBACK: &str = "AI reasoning temporarily unavailable";

/// Facts the collaborator may explain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningContext {
    pub route: String,
    pub cost: f64,
    pub carbon: f64,
    pub risk: RiskLevel,
    pub sustainability_score: u8,
}

/// Optional text enrichment, typically backed by a hosted language model.
///
/// Implementations return `None` on any failure. Callers supply the fallback
/// and never let a missing narrative change numeric output.
pub trait NarrativeProvider: Send + Sync {
    fn generate_reasoning(&self, context: &ReasoningContext) -> Option<String>;
    fn generate_advisory(&self, snapshot: &OptimizationSnapshot) -> Option<String>;
}

/// Provider used when no collaborator is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineNarrator;

impl NarrativeProvider for OfflineNarrator {
    fn generate_reasoning(&self, _context: &ReasoningContext) -> Option<String> {
        None
    }

    fn generate_advisory(&self, _snapshot: &OptimizationSnapshot) -> Option<String> {
        None
    }
}

/// Treats blank collaborator output the same as a missing one.
pub(crate) fn usable_text(text: Option<String>) -> Option<String> {
    text.filter(|value| !value.trim().is_empty())
}

pub fn reasoning_or_fallback(reasoning: Option<String>) -> String {
    usable_text(reasoning).unwrap_or_else(|| REASONING_FALLBACK.to_string())
}

pub fn decision_explanation(
    route: &str,
    cost: f64,
    carbon: f64,
    risk: RiskLevel,
    sustainability_score: u8,
) -> String {
    format!(
        "The selected route {route} balances operational cost ({cost:.2}) \
         and environmental impact ({carbon:.2} kg CO₂). \
         Risk level is assessed as {risk}. \
         The sustainability score of {sustainability_score} \
         indicates overall environmental efficiency."
    )
}

/// Executive report used whenever the collaborator has nothing to say.
pub fn fallback_advisory(snapshot: &OptimizationSnapshot) -> String {
    let sustainability = snapshot.sustainability_score;
    let performance = snapshot.overall_performance_index;

    let sustainability_msg = if sustainability >= 70.0 {
        "This route demonstrates strong environmental sustainability."
    } else if sustainability >= 40.0 {
        "This route provides moderate sustainability performance with improvement potential."
    } else {
        "This route has high environmental impact and requires optimization."
    };

    let decision_msg = if performance >= 80.0 {
        "Fully autonomous execution is recommended."
    } else if performance >= 60.0 {
        "Semi-autonomous execution with executive monitoring is recommended."
    } else {
        "Manual executive approval is advised before execution."
    };

    let sections = [
        "Executive Logistics Advisory Report".to_string(),
        format!("Route: {}", snapshot.optimized_route),
        format!(
            "Operational Assessment:\nThe route shows performance index of {performance} \
             with risk level assessed as {}.",
            snapshot.risk_level
        ),
        format!("Sustainability Assessment:\n{sustainability_msg}"),
        "Strategic Recommendation:\nCost, risk, and sustainability balance is acceptable \
         for enterprise logistics deployment."
            .to_string(),
        format!("Executive Decision Guidance:\n{decision_msg}"),
        "Future Optimization Strategy:\nConsider eco-route prioritization \
         and carbon-aware logistics planning."
            .to_string(),
        "AI Confidence Level: High\nSystem Status: Executive AI Operational".to_string(),
    ];

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(sustainability: f64, performance: f64) -> OptimizationSnapshot {
        OptimizationSnapshot {
            optimized_route: "Mumbai → Delhi".to_string(),
            estimated_cost: 300.0,
            carbon_impact: 96.0,
            risk_level: "Low".to_string(),
            sustainability_score: sustainability,
            overall_performance_index: performance,
            optimization_confidence_score: None,
        }
    }

    #[test]
    fn explanation_formats_two_decimals() {
        let text = decision_explanation(
            "A → B",
            687.5000000000001,
            264.00000000000006,
            RiskLevel::Elevated,
            0,
        );
        assert!(text.contains("operational cost (687.50)"));
        assert!(text.contains("environmental impact (264.00 kg CO₂)"));
        assert!(text.contains("Risk level is assessed as Elevated."));
        assert!(text.ends_with("indicates overall environmental efficiency."));
    }

    #[test]
    fn blank_reasoning_uses_fallback() {
        assert_eq!(reasoning_or_fallback(None), REASONING_FALLBACK);
        assert_eq!(reasoning_or_fallback(Some("   ".to_string())), REASONING_FALLBACK);
        assert_eq!(reasoning_or_fallback(Some("ok".to_string())), "ok");
    }

    #[test]
    fn advisory_tracks_sustainability_bands() {
        let strong = fallback_advisory(&snapshot(70.0, 10.0));
        assert!(strong.contains("strong environmental sustainability"));
        assert!(fallback_advisory(&snapshot(40.0, 10.0)).contains("moderate sustainability"));
        assert!(fallback_advisory(&snapshot(39.0, 10.0)).contains("high environmental impact"));
    }

    #[test]
    fn advisory_tracks_performance_bands() {
        assert!(fallback_advisory(&snapshot(50.0, 80.0)).contains("Fully autonomous execution"));
        assert!(fallback_advisory(&snapshot(50.0, 60.0)).contains("Semi-autonomous execution"));
        let manual = fallback_advisory(&snapshot(50.0, 59.0));
        assert!(manual.contains("Manual executive approval"));
        assert!(manual
            .starts_with("Executive Logistics Advisory Report\n\nRoute: Mumbai → Delhi"));
        assert!(manual.contains("performance index of 59 with risk level assessed as Low."));
    }

    #[test]
    fn offline_narrator_never_answers() {
        let context = ReasoningContext {
            route: "A → B".to_string(),
            cost: 1.0,
            carbon: 1.0,
            risk: RiskLevel::Low,
            sustainability_score: 99,
        };
        assert!(OfflineNarrator.generate_reasoning(&context).is_none());
        assert!(OfflineNarrator.generate_advisory(&snapshot(1.0, 1.0)).is_none());
    }
}
