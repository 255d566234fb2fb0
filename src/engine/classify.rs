//! Category and severity-tier selection.

use crate::domain::{Category, SeverityTier};

use super::corpus::{category_seeds, severity_seeds, CATEGORIES};
use super::similarity::similarity;

/// Severity estimate: winning tier similarity plus literally matched seeds
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityEstimate {
    /// Winning tier, `None` when every tier scores 0
    pub tier: Option<SeverityTier>,
    pub score: f64,
    pub matched: Vec<String>,
}

/// Pick the category with the highest seed similarity.
///
/// Ties go to the category listed first, so equal scores resolve to
/// healthcare.
pub fn categorize(text: &str) -> Category {
    let mut best = CATEGORIES[0];
    let mut best_score = similarity(text, category_seeds(best));

    for &category in &CATEGORIES[1..] {
        let score = similarity(text, category_seeds(category));
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    best
}

/// Estimate severity from the high, medium and low seed tiers.
///
/// The tier is chosen by fuzzy similarity, ties broken high > medium > low.
/// `matched` is then the winning tier's seeds that occur as a literal
/// substring of the lowercased text. The two checks differ, so a nonzero
/// score with no matched seeds is expected.
pub fn estimate_severity(text: &str) -> SeverityEstimate {
    let mut winner: Option<(SeverityTier, f64)> = None;

    for tier in SeverityTier::ALL {
        let score = similarity(text, severity_seeds(tier));
        match winner {
            Some((_, best)) if score <= best => {}
            _ => winner = Some((tier, score)),
        }
    }

    match winner {
        Some((tier, score)) if score > 0.0 => {
            let lowered = text.to_lowercase();
            let matched = severity_seeds(tier)
                .iter()
                .filter(|seed| lowered.contains(&seed.to_lowercase()))
                .map(|seed| seed.to_string())
                .collect();

            SeverityEstimate {
                tier: Some(tier),
                score,
                matched,
            }
        }
        _ => SeverityEstimate {
            tier: None,
            score: 0.0,
            matched: Vec::new(),
        },
    }
}
