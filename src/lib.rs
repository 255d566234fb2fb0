//! triage - Deterministic complaint priority scoring
//!
//! Scores citizen complaint transcripts for a priority-ordered work queue.
//! The engine is a pure, rule-based pipeline: no learning, no persisted
//! history, no per-user state.
//!
//! # Architecture
//!
//! Each transcript flows through independent scorers, then a fixed-weight
//! combiner:
//! - Category: seed similarity, healthcare vs education
//! - Severity: best of the high/medium/low seed tiers
//! - Keyword intent: weighted literal keyword matches
//! - Boosts: vulnerability, recency, evidence
//!
//! The combined score maps to a `high`/`medium`/`low` label and an
//! explanation built from the same breakdown.
//!
//! # Modules
//!
//! - `domain`: Data structures (ComplaintInput, PriorityAnalysis, labels)
//! - `engine`: Scoring pipeline (PriorityEngine, corpus, policy)
//! - `queue`: In-memory priority work queue
//! - `config`: Policy overrides from .triage/config.yaml
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Score one transcript
//! triage analyze "Ambulance not available for emergency"
//!
//! # Rank a batch of complaints
//! triage batch --input complaints.jsonl
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod queue;

// Re-export main types at crate root for convenience
pub use domain::{Category, ComplaintInput, PriorityAnalysis, PriorityLabel, SeverityTier};
pub use engine::{analyze_priority, explain_priority, PolicyError, PriorityEngine, ScoringPolicy};
pub use queue::{ComplaintRecord, QueueSummary, TriageQueue, TriagedComplaint};
