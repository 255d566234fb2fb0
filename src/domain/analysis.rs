//! Analysis result types produced by the priority engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain category of a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Healthcare,
    Education,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Healthcare => "healthcare",
            Category::Education => "education",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final triage bucket used to order the work queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLabel {
    High,
    Medium,
    Low,
}

impl PriorityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::High => "high",
            PriorityLabel::Medium => "medium",
            PriorityLabel::Low => "low",
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal severity classification feeding `semantic_severity`.
///
/// Declaration order is the tie-break order: when two tiers score the
/// same, the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    High,
    Medium,
    Low,
}

impl SeverityTier {
    /// All tiers in tie-break priority order
    pub const ALL: [SeverityTier; 3] = [SeverityTier::High, SeverityTier::Medium, SeverityTier::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::High => "high",
            SeverityTier::Medium => "medium",
            SeverityTier::Low => "low",
        }
    }
}

/// Full scoring breakdown for one complaint.
///
/// Field names match the JSON output contract consumed by the queue UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAnalysis {
    /// Domain category
    pub category: Category,

    /// Combined score in [0, 1]
    pub priority_score: f64,

    /// Label derived from `priority_score` via fixed thresholds
    pub priority_label: PriorityLabel,

    /// Best severity-tier similarity in [0, 1]
    pub semantic_severity: f64,

    /// Weighted keyword score in [0, 1]
    pub keyword_intent: f64,

    pub vulnerability_boost: f64,

    pub recency_boost: f64,

    pub evidence_boost: f64,

    /// Winning-tier seed phrases that literally occur in the text
    pub matched_seeds: Vec<String>,

    /// Taxonomy keywords that literally occur in the text
    pub matched_keywords: Vec<String>,
}

impl PriorityAnalysis {
    /// Score rendered with two decimals, as shown on queue badges
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.priority_score)
    }
}
