//! Weighted keyword-intent scoring.

use super::corpus::{KeywordGroup, KEYWORD_TAXONOMY};

/// Keyword score and the literal matches that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordIntent {
    pub score: f64,
    pub matched: Vec<String>,
}

/// Keywords from `keywords` that occur as a literal substring of `lowered`
pub(crate) fn literal_matches<'a>(lowered: &str, keywords: &'a [&'a str]) -> Vec<&'a str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(&keyword.to_lowercase()))
        .collect()
}

/// Score text against an explicit taxonomy.
///
/// Each group contributes `matches / group_size * weight`; the total is
/// capped at 1. Matches are listed in taxonomy order, then keyword order,
/// and duplicates across groups are kept.
pub fn keyword_intent_with(text: &str, taxonomy: &[KeywordGroup]) -> KeywordIntent {
    let lowered = text.to_lowercase();
    let mut total = 0.0;
    let mut matched = Vec::new();

    for group in taxonomy {
        let hits = literal_matches(&lowered, group.keywords);
        if hits.is_empty() {
            continue;
        }

        total += hits.len() as f64 / group.keywords.len().max(1) as f64 * group.weight;
        matched.extend(hits.into_iter().map(str::to_string));
    }

    KeywordIntent {
        score: total.min(1.0),
        matched,
    }
}

/// Score text against the built-in keyword taxonomy
pub fn keyword_intent(text: &str) -> KeywordIntent {
    keyword_intent_with(text, KEYWORD_TAXONOMY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let intent = keyword_intent("");
        assert_eq!(intent.score, 0.0);
        assert!(intent.matched.is_empty());
    }

    #[test]
    fn test_single_group_contribution() {
        let intent = keyword_intent("Need an ambulance");
        assert!((intent.score - 0.3 / 8.0).abs() < 1e-12);
        assert_eq!(intent.matched, vec!["ambulance".to_string()]);
    }

    #[test]
    fn test_matches_follow_taxonomy_order() {
        let intent = keyword_intent("Ambulance not available for emergency");
        assert_eq!(
            intent.matched,
            vec!["emergency".to_string(), "ambulance".to_string()]
        );
        let expected = 0.4 / 6.0 + 0.3 / 8.0;
        assert!((intent.score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "pain" is a substring of "paint"
        let intent = keyword_intent("paint peeling in the classroom");
        assert_eq!(
            intent.matched,
            vec!["pain".to_string(), "classroom".to_string()]
        );
    }

    #[test]
    fn test_duplicates_across_groups_kept() {
        let taxonomy = [
            KeywordGroup {
                name: "a",
                weight: 0.5,
                keywords: &["water"],
            },
            KeywordGroup {
                name: "b",
                weight: 0.5,
                keywords: &["water", "road"],
            },
        ];
        let intent = keyword_intent_with("no water", &taxonomy);
        assert_eq!(intent.matched, vec!["water".to_string(), "water".to_string()]);
        assert!((intent.score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_score_capped_at_one() {
        let taxonomy = [KeywordGroup {
            name: "heavy",
            weight: 3.0,
            keywords: &["fire"],
        }];
        let intent = keyword_intent_with("fire", &taxonomy);
        assert_eq!(intent.score, 1.0);
    }

    #[test]
    fn test_empty_group_does_not_divide_by_zero() {
        let taxonomy = [KeywordGroup {
            name: "empty",
            weight: 0.4,
            keywords: &[],
        }];
        let intent = keyword_intent_with("anything", &taxonomy);
        assert_eq!(intent.score, 0.0);
    }
}
