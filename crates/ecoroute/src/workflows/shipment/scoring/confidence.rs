use super::super::domain::{clamp_score, round_score};

/// Sustainability score the optimizer is most confident about.
pub const CONFIDENCE_TARGET: f64 = 75.0;
pub const CONFIDENCE_FLOOR: u8 = 50;

/// Distance-from-target confidence, never reported below the floor.
pub fn optimization_confidence(sustainability_score: u8) -> u8 {
    let distance = (f64::from(sustainability_score) - CONFIDENCE_TARGET).abs();
    clamp_score(round_score(100.0 - distance)).max(CONFIDENCE_FLOOR)
}
