//! Human-readable rationale for a priority analysis.

use crate::domain::PriorityAnalysis;

/// Returned when no signal clears its guard
pub const FALLBACK_EXPLANATION: &str = "Standard priority assessment";

/// Severity must exceed this to be mentioned
pub const SEVERITY_GUARD: f64 = 0.3;
/// Keyword intent must exceed this to be mentioned
pub const KEYWORD_GUARD: f64 = 0.2;

/// Render one clause per signal above its guard, joined with "; "
pub fn explain_priority(analysis: &PriorityAnalysis) -> String {
    let mut clauses = Vec::new();

    if analysis.semantic_severity > SEVERITY_GUARD {
        clauses.push(format!(
            "High severity indicators: {}",
            analysis.matched_seeds.join(", ")
        ));
    }

    if analysis.keyword_intent > KEYWORD_GUARD {
        clauses.push(format!(
            "Urgent keywords: {}",
            analysis.matched_keywords.join(", ")
        ));
    }

    if analysis.vulnerability_boost > 0.0 {
        clauses.push("Vulnerable population mentioned".to_string());
    }

    if analysis.recency_boost > 0.0 {
        clauses.push("Time-sensitive issue".to_string());
    }

    if analysis.evidence_boost > 0.0 {
        clauses.push("Supporting evidence provided".to_string());
    }

    if clauses.is_empty() {
        FALLBACK_EXPLANATION.to_string()
    } else {
        clauses.join("; ")
    }
}
