mod confidence;
mod performance;
mod sustainability;

pub use confidence::optimization_confidence;
pub use performance::performance_index;
pub use sustainability::{carbon_only_score, SustainabilityResult, SustainabilityScorer};
