//! Suitability score tiers
//!
//! Scores are descriptive metadata carried on appended task objects. The
//! editor never validates them against a schema; they exist so downstream
//! tooling can read a coarse fitness tier off the business object.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coarse suitability tier attached to appended tasks
///
/// Serialized as its numeric value so documents carry plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum SuitabilityScore {
    /// Low suitability (25)
    Low,
    /// Average suitability (50)
    Average,
    /// High suitability (100)
    High,
}

impl SuitabilityScore {
    /// Numeric value carried on the business object
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            SuitabilityScore::Low => 25,
            SuitabilityScore::Average => 50,
            SuitabilityScore::High => 100,
        }
    }

    /// Lowercase tier label used in entry titles
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SuitabilityScore::Low => "low",
            SuitabilityScore::Average => "average",
            SuitabilityScore::High => "high",
        }
    }

    /// Map a numeric value back to its tier
    ///
    /// # Errors
    /// Returns [`ScoreError::UnknownValue`] when the value is not one of
    /// 25, 50, or 100.
    pub fn from_value(value: u32) -> Result<Self, ScoreError> {
        match value {
            25 => Ok(SuitabilityScore::Low),
            50 => Ok(SuitabilityScore::Average),
            100 => Ok(SuitabilityScore::High),
            other => Err(ScoreError::UnknownValue(other)),
        }
    }

    /// All tiers in ascending order
    #[inline]
    #[must_use]
    pub fn all() -> [SuitabilityScore; 3] {
        [
            SuitabilityScore::Low,
            SuitabilityScore::Average,
            SuitabilityScore::High,
        ]
    }
}

impl std::fmt::Display for SuitabilityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<SuitabilityScore> for u32 {
    fn from(score: SuitabilityScore) -> Self {
        score.value()
    }
}

impl TryFrom<u32> for SuitabilityScore {
    type Error = ScoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl FromStr for SuitabilityScore {
    type Err = ScoreError;

    /// Accepts a tier label (`low`, `average`, `high`) or a numeric value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(SuitabilityScore::Low),
            "average" => Ok(SuitabilityScore::Average),
            "high" => Ok(SuitabilityScore::High),
            other => match other.parse::<u32>() {
                Ok(value) => Self::from_value(value),
                Err(_) => Err(ScoreError::UnknownLabel(other.to_string())),
            },
        }
    }
}

/// Errors mapping external data onto score tiers
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Numeric value is not a defined tier
    #[error("unknown suitability value: {0}")]
    UnknownValue(u32),

    /// Label is not a defined tier
    #[error("unknown suitability tier: {0}")]
    UnknownLabel(String),
}
