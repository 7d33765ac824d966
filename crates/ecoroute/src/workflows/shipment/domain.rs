use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cargo above this weight (kg) counts as heavy for risk and carbon rules.
pub const HEAVY_CARGO_THRESHOLD_KG: f64 = 200.0;

/// Requested delivery priority.
///
/// Labels are matched case-insensitively. Anything else is kept verbatim as
/// [`Priority::Unrecognized`] and behaves like a non-high priority in every
/// formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl Priority {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("high") {
            Self::High
        } else if raw.eq_ignore_ascii_case("medium") {
            Self::Medium
        } else if raw.eq_ignore_ascii_case("low") {
            Self::Low
        } else {
            Self::Unrecognized(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Coarse shipment risk derived from priority and cargo weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    Elevated,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::Elevated => "Elevated",
        }
    }

    /// Exact, case-sensitive match on the surfaced label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "Elevated" => Some(Self::Elevated),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wire shape of a shipment request before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRequestPayload {
    pub source: String,
    pub destination: String,
    pub cargo_weight: f64,
    pub priority: String,
}

/// A validated, immutable shipment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShipmentRequestPayload")]
pub struct ShipmentRequest {
    source: String,
    destination: String,
    cargo_weight: f64,
    priority: Priority,
}

impl ShipmentRequest {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        cargo_weight: f64,
        priority: &str,
    ) -> Result<Self, ShipmentValidationError> {
        if !cargo_weight.is_finite() {
            return Err(ShipmentValidationError::NonFiniteCargoWeight);
        }
        if cargo_weight <= 0.0 {
            return Err(ShipmentValidationError::NonPositiveCargoWeight(cargo_weight));
        }

        Ok(Self {
            source: source.into(),
            destination: destination.into(),
            cargo_weight,
            priority: Priority::parse(priority),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn cargo_weight(&self) -> f64 {
        self.cargo_weight
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    pub fn is_heavy(&self) -> bool {
        self.cargo_weight > HEAVY_CARGO_THRESHOLD_KG
    }
}

impl TryFrom<ShipmentRequestPayload> for ShipmentRequest {
    type Error = ShipmentValidationError;

    fn try_from(payload: ShipmentRequestPayload) -> Result<Self, Self::Error> {
        Self::new(
            payload.source,
            payload.destination,
            payload.cargo_weight,
            &payload.priority,
        )
    }
}

/// Rejected shipment input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShipmentValidationError {
    #[error("cargo_weight must be greater than zero (got {0})")]
    NonPositiveCargoWeight(f64),
    #[error("cargo_weight must be a finite number")]
    NonFiniteCargoWeight,
}

/// Cost/carbon pair threaded through the adjustment chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredMetric {
    pub cost: f64,
    pub carbon: f64,
}

/// Emission band attached to a sustainability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmissionCategory {
    #[serde(rename = "Low Emission")]
    Low,
    #[serde(rename = "Medium Emission")]
    Medium,
    #[serde(rename = "High Emission")]
    High,
}

impl EmissionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Emission",
            Self::Medium => "Medium Emission",
            Self::High => "High Emission",
        }
    }
}

/// Round half to even.
pub(crate) fn round_score(value: f64) -> f64 {
    value.round_ties_even()
}

/// Round to two decimal places for surfaced cost and carbon figures.
///
/// Rounds the exact decimal expansion of `value`, so `0.925` (stored just
/// above the half) goes up and `92.175` (stored just below) goes down.
/// Scaling by 100 first would round the already-inexact product instead.
pub(crate) fn round_money(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Clamp a rounded score into the surfaced 0–100 range.
pub(crate) fn clamp_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}
