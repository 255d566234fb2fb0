//! Seed corpus and keyword taxonomy.
//!
//! Static exemplar data compiled into the crate. Nothing here is mutable at
//! runtime; every analysis reads the same slices.

use crate::domain::{Category, SeverityTier};

/// Exemplar phrases for healthcare complaints
pub const HEALTHCARE_SEEDS: &[&str] = &[
    "no doctor available",
    "medicine shortage",
    "PHC closed",
    "ambulance delay",
    "fever outbreak",
    "contaminated water",
    "pregnancy assistance",
    "toilet broken in PHC",
];

/// Exemplar phrases for education complaints
pub const EDUCATION_SEEDS: &[&str] = &[
    "no teacher",
    "school closed",
    "no lights in classroom",
    "broken benches",
    "no drinking water in school",
    "unsafe route to school",
    "toilet broken in school",
    "classroom walls peeling",
];

/// Exemplar phrases for the high severity tier
pub const HIGH_SEVERITY_SEEDS: &[&str] = &[
    "emergency",
    "accident",
    "heavy bleeding",
    "snake bite",
    "child injured",
    "school building crack",
    "electrical short in classroom",
    "no mid-day meal",
];

/// Exemplar phrases for the medium severity tier
pub const MEDIUM_SEVERITY_SEEDS: &[&str] = &[
    "intermittent service",
    "teacher absent repeatedly",
    "PHC opens late",
    "medicine stock low",
];

/// Exemplar phrases for the low severity tier
pub const LOW_SEVERITY_SEEDS: &[&str] = &["paint peeling", "notice board broken"];

/// Categories in tie-break order (first listed wins a tie)
pub const CATEGORIES: [Category; 2] = [Category::Healthcare, Category::Education];

/// Seed phrases for a domain category
pub fn category_seeds(category: Category) -> &'static [&'static str] {
    match category {
        Category::Healthcare => HEALTHCARE_SEEDS,
        Category::Education => EDUCATION_SEEDS,
    }
}

/// Seed phrases for a severity tier
pub fn severity_seeds(tier: SeverityTier) -> &'static [&'static str] {
    match tier {
        SeverityTier::High => HIGH_SEVERITY_SEEDS,
        SeverityTier::Medium => MEDIUM_SEVERITY_SEEDS,
        SeverityTier::Low => LOW_SEVERITY_SEEDS,
    }
}

/// A weighted group of literal trigger words
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub name: &'static str,
    pub weight: f64,
    pub keywords: &'static [&'static str],
}

/// Time pressure and emergencies
pub const URGENT_KEYWORDS: &[&str] = &["urgent", "emergency", "immediately", "today", "now", "asap"];

/// Medical conditions and services
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "hospital", "doctor", "medicine", "fever", "pain", "bleeding", "ambulance", "injury",
];

/// Vulnerable groups
pub const VULNERABLE_KEYWORDS: &[&str] =
    &["child", "children", "pregnant", "elderly", "disabled", "baby"];

/// School life
pub const EDUCATION_KEYWORDS: &[&str] = &["school", "teacher", "exam", "student", "classroom"];

/// Basic facilities
pub const INFRASTRUCTURE_KEYWORDS: &[&str] = &["toilet", "water", "electricity", "building", "road"];

/// Keyword taxonomy in evaluation order. `matched_keywords` follows this order.
pub const KEYWORD_TAXONOMY: &[KeywordGroup] = &[
    KeywordGroup {
        name: "urgent",
        weight: 0.4,
        keywords: URGENT_KEYWORDS,
    },
    KeywordGroup {
        name: "medical",
        weight: 0.3,
        keywords: MEDICAL_KEYWORDS,
    },
    KeywordGroup {
        name: "vulnerable",
        weight: 0.2,
        keywords: VULNERABLE_KEYWORDS,
    },
    KeywordGroup {
        name: "education",
        weight: 0.1,
        keywords: EDUCATION_KEYWORDS,
    },
    KeywordGroup {
        name: "infrastructure",
        weight: 0.1,
        keywords: INFRASTRUCTURE_KEYWORDS,
    },
];
