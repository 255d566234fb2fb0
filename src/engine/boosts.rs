//! Secondary boost signals: vulnerability, recency, evidence.

use std::sync::LazyLock;

use regex::Regex;

use super::corpus::VULNERABLE_KEYWORDS;
use super::keywords::literal_matches;

/// Boost per vulnerable-population keyword
pub const VULNERABILITY_STEP: f64 = 0.2;
/// Cap on the vulnerability boost
pub const VULNERABILITY_CAP: f64 = 0.5;

/// Boost when the complaint carries attachments
pub const ATTACHMENT_BOOST: f64 = 0.1;
/// Boost per related complaint in the cluster
pub const CLUSTER_STEP: f64 = 0.05;
/// Cap on the cluster part of the evidence boost
pub const CLUSTER_CAP: f64 = 0.2;

/// A recency pattern and the boost it grants
struct RecencyRule {
    pattern: Regex,
    boost: f64,
}

/// Recency cascade, evaluated top to bottom; the first match wins.
static RECENCY_RULES: LazyLock<Vec<RecencyRule>> = LazyLock::new(|| {
    [
        (r"(?i)today|now|immediately|urgent", 0.3),
        (r"(?i)yesterday|since yesterday", 0.2),
        (r"(?i)[0-9]+\s*(day|days)\s*ago", 0.1),
        (r"(?i)[0-9]+\s*(week|weeks)\s*ago", 0.05),
    ]
    .into_iter()
    .map(|(pattern, boost)| RecencyRule {
        pattern: Regex::new(pattern).expect("valid recency pattern"),
        boost,
    })
    .collect()
});

/// `min(count * 0.2, 0.5)` over literal vulnerable-keyword matches
pub fn vulnerability_boost(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let count = literal_matches(&lowered, VULNERABLE_KEYWORDS).len();
    (count as f64 * VULNERABILITY_STEP).min(VULNERABILITY_CAP)
}

/// Boost of the highest-priority recency pattern present, or 0.
///
/// Patterns match anywhere in the text, so "now" inside "know" counts.
pub fn recency_boost(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    RECENCY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(&lowered))
        .map(|rule| rule.boost)
        .unwrap_or(0.0)
}

/// Attachment boost plus a capped per-cluster boost
pub fn evidence_boost(has_attachments: bool, cluster_count: u32) -> f64 {
    let attachments = if has_attachments { ATTACHMENT_BOOST } else { 0.0 };
    let cluster = (f64::from(cluster_count) * CLUSTER_STEP).min(CLUSTER_CAP);
    attachments + cluster
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_vulnerability_boost_steps_and_cap() {
        assert_eq!(vulnerability_boost(""), 0.0);
        assert!(approx(vulnerability_boost("an elderly man"), 0.2));
        assert!(approx(vulnerability_boost("elderly and disabled"), 0.4));
        // "children" also contains "child": three matches, capped
        assert!(approx(vulnerability_boost("pregnant woman with children"), 0.5));
    }

    #[test]
    fn test_recency_cascade_first_match_wins() {
        assert!(approx(recency_boost("the tap broke today, 2 days ago the pipe"), 0.3));
        assert!(approx(recency_boost("since yesterday no power"), 0.2));
        assert!(approx(recency_boost("started 3 days ago"), 0.1));
        assert!(approx(recency_boost("started 1day ago"), 0.1));
        assert!(approx(recency_boost("broken 2 weeks ago"), 0.05));
        assert_eq!(recency_boost("broken for a long time"), 0.0);
        assert_eq!(recency_boost(""), 0.0);
    }

    #[test]
    fn test_recency_is_case_insensitive_and_unanchored() {
        assert!(approx(recency_boost("URGENT help"), 0.3));
        assert!(approx(recency_boost("I know the road is bad"), 0.3));
    }

    #[test]
    fn test_recency_needs_a_number_for_relative_days() {
        assert_eq!(recency_boost("some days ago"), 0.0);
    }

    #[test]
    fn test_evidence_boost() {
        assert_eq!(evidence_boost(false, 0), 0.0);
        assert!(approx(evidence_boost(true, 0), 0.1));
        assert!(approx(evidence_boost(false, 2), 0.1));
        assert!(approx(evidence_boost(true, 10), 0.3));
        assert!(approx(evidence_boost(false, u32::MAX), 0.2));
    }
}
