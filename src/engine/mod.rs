//! Priority & categorization engine.
//!
//! Pure, rule-based scoring of complaint transcripts:
//! - Corpus: static seed phrases and keyword taxonomy
//! - Similarity: lexical-overlap estimator
//! - Classify: category and severity tier
//! - Keywords: weighted keyword intent
//! - Boosts: vulnerability, recency, evidence
//! - Policy: weights, thresholds, combiner
//! - Explain: human-readable rationale
//! - Analyzer: `PriorityEngine`, the full pipeline

pub mod analyzer;
pub mod boosts;
pub mod classify;
pub mod corpus;
pub mod explain;
pub mod keywords;
pub mod policy;
pub mod similarity;

// Re-export commonly used types
pub use analyzer::{analyze_priority, PriorityEngine};
pub use classify::{categorize, estimate_severity, SeverityEstimate};
pub use explain::explain_priority;
pub use keywords::{keyword_intent, KeywordIntent};
pub use policy::{LabelThresholds, PolicyError, ScoreWeights, ScoringPolicy, Signals};
pub use similarity::similarity;
