use clap::Args;
use ecoroute::error::AppError;
use ecoroute::workflows::shipment::narrative::fallback_advisory;
use ecoroute::workflows::shipment::{
    AutonomousDecision, AutonomousDecisionEngine, OfflineNarrator, OptimizationPipeline,
    OptimizationResult, OptimizationSnapshot, ShipmentRequest,
};

#[derive(Args, Debug)]
pub(crate) struct OptimizeArgs {
    /// Origin location of the shipment
    #[arg(long)]
    pub(crate) source: String,
    /// Delivery location of the shipment
    #[arg(long)]
    pub(crate) destination: String,
    /// Cargo weight in kilograms (must be greater than zero)
    #[arg(long)]
    pub(crate) cargo_weight: f64,
    /// Delivery priority (Low, Medium, High)
    #[arg(long, default_value = "Medium")]
    pub(crate) priority: String,
    /// Print the optimization result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

const DEMO_SHIPMENTS: [(&str, &str, f64, &str); 3] = [
    ("Mumbai", "Delhi", 120.0, "Low"),
    ("Pune", "Goa", 20.0, "Medium"),
    ("Chennai", "Kolkata", 250.0, "High"),
];

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), AppError> {
    let OptimizeArgs {
        source,
        destination,
        cargo_weight,
        priority,
        json,
    } = args;

    let request = ShipmentRequest::new(source, destination, cargo_weight, &priority)?;
    let result = OptimizationPipeline::new().optimize(&request, &OfflineNarrator);

    if json {
        let rendered = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        let decision = AutonomousDecisionEngine.evaluate(&OptimizationSnapshot::from(&result));
        print!("{}", render_report(&result, &decision));
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let pipeline = OptimizationPipeline::new();

    println!("Shipment optimization demo");
    for (source, destination, weight, priority) in DEMO_SHIPMENTS {
        let request = ShipmentRequest::new(source, destination, weight, priority)?;
        let result = pipeline.optimize(&request, &OfflineNarrator);
        let snapshot = OptimizationSnapshot::from(&result);
        let decision = AutonomousDecisionEngine.evaluate(&snapshot);

        println!(
            "\n== {} | {weight} kg | {priority} priority ==",
            result.optimized_route
        );
        print!("{}", render_report(&result, &decision));
        println!("\n{}", fallback_advisory(&snapshot));
    }

    Ok(())
}

pub(crate) fn render_report(result: &OptimizationResult, decision: &AutonomousDecision) -> String {
    let sustainability = &result.sustainability;
    let mut lines = vec![
        format!("Route: {}", result.optimized_route),
        format!(
            "- Cost {:.2} | Carbon {:.2} kg CO₂ | Risk {}",
            result.estimated_cost, result.carbon_impact, result.risk_level
        ),
        format!(
            "- Sustainability {} ({}, {})",
            sustainability.sustainability_score,
            sustainability.emission_category.label(),
            sustainability.eco_recommendation
        ),
        format!(
            "- Performance index {} | Confidence {}",
            result.overall_performance_index, result.optimization_confidence_score
        ),
        format!("- {}", result.recommended_strategy),
        "Alternatives:".to_string(),
    ];

    lines.extend(result.alternative_routes.iter().map(|route| {
        format!(
            "  - {}: cost {:.2} | carbon {:.2} | sustainability {}",
            route.route, route.cost, route.carbon, route.sustainability_score
        )
    }));

    lines.push("What-if scenarios:".to_string());
    lines.extend(result.simulation_analysis.iter().map(|scenario| {
        format!(
            "  - {}: cost {:.2} | carbon {:.2} | sustainability {}",
            scenario.scenario,
            scenario.estimated_cost,
            scenario.carbon_impact,
            scenario.sustainability_score
        )
    }));

    lines.push(format!(
        "Autonomous decision: {} (score {}, execution probability {}%)",
        decision.decision, decision.autonomous_score, decision.execution_probability
    ));
    lines.push(format!("  {}", decision.explanation));
    lines.push(format!("Reasoning: {}", result.ai_reasoning));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
