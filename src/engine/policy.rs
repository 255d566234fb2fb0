//! Scoring policy: combiner weights, label thresholds, and the combiner.
//!
//! These values are externally visible policy. They live here, in one
//! place, and can be overridden from the config file.

use thiserror::Error;

use crate::domain::PriorityLabel;

pub const SEVERITY_WEIGHT: f64 = 0.45;
pub const KEYWORD_INTENT_WEIGHT: f64 = 0.25;
pub const VULNERABILITY_WEIGHT: f64 = 0.15;
pub const RECENCY_WEIGHT: f64 = 0.10;
pub const EVIDENCE_WEIGHT: f64 = 0.05;

/// Minimum score for the `high` label
pub const HIGH_THRESHOLD: f64 = 0.70;
/// Minimum score for the `medium` label
pub const MEDIUM_THRESHOLD: f64 = 0.40;

/// Errors for an unusable scoring policy
#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("Weight '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Threshold '{name}' must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Medium threshold {medium} is above high threshold {high}")]
    ThresholdOrder { high: f64, medium: f64 },
}

/// Weights of the five signals in the combined score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub severity: f64,
    pub keyword_intent: f64,
    pub vulnerability: f64,
    pub recency: f64,
    pub evidence: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            severity: SEVERITY_WEIGHT,
            keyword_intent: KEYWORD_INTENT_WEIGHT,
            vulnerability: VULNERABILITY_WEIGHT,
            recency: RECENCY_WEIGHT,
            evidence: EVIDENCE_WEIGHT,
        }
    }
}

impl ScoreWeights {
    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("severity", self.severity),
            ("keyword_intent", self.keyword_intent),
            ("vulnerability", self.vulnerability),
            ("recency", self.recency),
            ("evidence", self.evidence),
        ]
    }
}

/// Label cut-offs: `high` if score >= high, `medium` if >= medium, else `low`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            high: HIGH_THRESHOLD,
            medium: MEDIUM_THRESHOLD,
        }
    }
}

/// The five component signals of one analysis, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Signals {
    pub severity: f64,
    pub keyword_intent: f64,
    pub vulnerability: f64,
    pub recency: f64,
    pub evidence: f64,
}

/// Weights plus thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoringPolicy {
    pub weights: ScoreWeights,
    pub thresholds: LabelThresholds,
}

impl ScoringPolicy {
    /// Reject policies that could produce NaN or an inconsistent label partition
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (name, value) in self.weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(PolicyError::InvalidWeight { name, value });
            }
        }

        for (name, value) in [("high", self.thresholds.high), ("medium", self.thresholds.medium)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PolicyError::InvalidThreshold { name, value });
            }
        }

        if self.thresholds.medium > self.thresholds.high {
            return Err(PolicyError::ThresholdOrder {
                high: self.thresholds.high,
                medium: self.thresholds.medium,
            });
        }

        Ok(())
    }

    /// Weighted sum of the signals, clamped to [0, 1]
    pub fn combine(&self, signals: &Signals) -> f64 {
        let w = &self.weights;
        let raw = w.severity * signals.severity
            + w.keyword_intent * signals.keyword_intent
            + w.vulnerability * signals.vulnerability
            + w.recency * signals.recency
            + w.evidence * signals.evidence;

        raw.clamp(0.0, 1.0)
    }

    /// Map a combined score to its label
    pub fn label(&self, score: f64) -> PriorityLabel {
        if score >= self.thresholds.high {
            PriorityLabel::High
        } else if score >= self.thresholds.medium {
            PriorityLabel::Medium
        } else {
            PriorityLabel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(ScoringPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_label_boundaries() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.label(1.0), PriorityLabel::High);
        assert_eq!(policy.label(0.70), PriorityLabel::High);
        assert_eq!(policy.label(0.6999), PriorityLabel::Medium);
        assert_eq!(policy.label(0.40), PriorityLabel::Medium);
        assert_eq!(policy.label(0.3999), PriorityLabel::Low);
        assert_eq!(policy.label(0.0), PriorityLabel::Low);
    }

    #[test]
    fn test_combine_uses_fixed_weights() {
        let policy = ScoringPolicy::default();
        let signals = Signals {
            severity: 1.0,
            keyword_intent: 1.0,
            vulnerability: 1.0,
            recency: 1.0,
            evidence: 1.0,
        };
        assert!((policy.combine(&signals) - 1.0).abs() < 1e-12);

        let signals = Signals {
            severity: 0.5,
            recency: 0.3,
            ..Default::default()
        };
        assert!((policy.combine(&signals) - (0.45 * 0.5 + 0.10 * 0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_combine_clamps_overweighted_policy() {
        let policy = ScoringPolicy {
            weights: ScoreWeights {
                severity: 2.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let signals = Signals {
            severity: 1.0,
            ..Default::default()
        };
        assert_eq!(policy.combine(&signals), 1.0);
    }

    #[test]
    fn test_rejects_negative_or_nan_weight() {
        let policy = ScoringPolicy {
            weights: ScoreWeights {
                recency: -0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvalidWeight {
                name: "recency",
                value: -0.1
            })
        );

        let policy = ScoringPolicy {
            weights: ScoreWeights {
                evidence: f64::NAN,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::InvalidWeight { name: "evidence", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_thresholds() {
        let policy = ScoringPolicy {
            thresholds: LabelThresholds {
                high: 1.5,
                medium: 0.4,
            },
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::InvalidThreshold { name: "high", .. })
        ));

        let policy = ScoringPolicy {
            thresholds: LabelThresholds {
                high: 0.3,
                medium: 0.5,
            },
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::ThresholdOrder {
                high: 0.3,
                medium: 0.5
            })
        );
    }
}
