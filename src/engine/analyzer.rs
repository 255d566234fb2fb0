//! The priority engine: runs every scorer over one complaint and combines
//! the results.
//!
//! The engine holds only its validated policy. Each call builds a fresh
//! result from the input and the static corpus, so one engine can be shared
//! across threads and called concurrently without locking.

use tracing::debug;

use crate::domain::{ComplaintInput, PriorityAnalysis};

use super::boosts::{evidence_boost, recency_boost, vulnerability_boost};
use super::classify::{categorize, estimate_severity};
use super::explain::explain_priority;
use super::keywords::keyword_intent;
use super::policy::{PolicyError, ScoringPolicy, Signals};

/// Stateless complaint scorer
#[derive(Debug, Clone, Default)]
pub struct PriorityEngine {
    policy: ScoringPolicy,
}

impl PriorityEngine {
    /// Create an engine with a custom policy
    pub fn new(policy: ScoringPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Analyze a complaint. Total over all inputs, including empty text.
    pub fn analyze(&self, input: &ComplaintInput) -> PriorityAnalysis {
        let text = input.text.as_str();

        let category = categorize(text);
        let severity = estimate_severity(text);
        let intent = keyword_intent(text);

        let signals = Signals {
            severity: severity.score,
            keyword_intent: intent.score,
            vulnerability: vulnerability_boost(text),
            recency: recency_boost(text),
            evidence: evidence_boost(input.has_attachments, input.cluster_count),
        };

        let priority_score = self.policy.combine(&signals);
        let priority_label = self.policy.label(priority_score);

        debug!(
            %category,
            severity_tier = severity.tier.map(|t| t.as_str()).unwrap_or("none"),
            priority_score,
            %priority_label,
            "Analyzed complaint"
        );

        PriorityAnalysis {
            category,
            priority_score,
            priority_label,
            semantic_severity: signals.severity,
            keyword_intent: signals.keyword_intent,
            vulnerability_boost: signals.vulnerability,
            recency_boost: signals.recency,
            evidence_boost: signals.evidence,
            matched_seeds: severity.matched,
            matched_keywords: intent.matched,
        }
    }

    /// Analyze a complaint and render its explanation
    pub fn analyze_explained(&self, input: &ComplaintInput) -> (PriorityAnalysis, String) {
        let analysis = self.analyze(input);
        let explanation = explain_priority(&analysis);
        (analysis, explanation)
    }
}

/// Analyze with the default policy
pub fn analyze_priority(text: &str, has_attachments: bool, cluster_count: u32) -> PriorityAnalysis {
    let input = ComplaintInput {
        text: text.to_string(),
        has_attachments,
        cluster_count,
    };
    PriorityEngine::default().analyze(&input)
}
