//! Domain types for complaint triage.
//!
//! This module contains the core data structures:
//! - Complaint: transcript plus intake metadata
//! - Analysis: scoring breakdown, category and labels

pub mod analysis;
pub mod complaint;

// Re-export commonly used types
pub use analysis::{Category, PriorityAnalysis, PriorityLabel, SeverityTier};
pub use complaint::ComplaintInput;
