// Topic categorization
//
// Coarse bucketing of free text via ordered keyword families. The first
// family with a substring hit wins, so mental-health vocabulary outranks
// relationship vocabulary by construction. Only used to flavor fallback
// selection; never consulted by crisis detection or similarity scoring.

use serde::{Deserialize, Serialize};

/// Topic bucket for a corpus record or a user query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Depression,
    Anxiety,
    Relationship,
    Therapy,
    Loneliness,
    Crisis,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Depression => "depression",
            Category::Anxiety => "anxiety",
            Category::Relationship => "relationship",
            Category::Therapy => "therapy",
            Category::Loneliness => "loneliness",
            Category::Crisis => "crisis",
            Category::General => "general",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

// Ordered families. Mental-health buckets are checked before relationship
// terms, so "anxiety about my boyfriend" files under Anxiety.
const DEPRESSION_TERMS: &[&str] = &[
    "depress",
    "hopeless",
    "worthless",
    "miserable",
    "empty inside",
    "feel sad",
    "feeling sad",
    "feeling down",
    "no energy",
];

const ANXIETY_TERMS: &[&str] = &[
    "anxiety",
    "anxious",
    "panic",
    "worry",
    "worried",
    "nervous",
    "overwhelm",
    "stress",
    "can't relax",
];

const THERAPY_TERMS: &[&str] = &[
    "therapy",
    "therapist",
    "counseling",
    "counselor",
    "psychiatrist",
    "medication",
];

const LONELINESS_TERMS: &[&str] = &[
    "lonely",
    "loneliness",
    "alone",
    "isolated",
    "no friends",
    "no one to talk",
];

const RELATIONSHIP_TERMS: &[&str] = &[
    "boyfriend",
    "girlfriend",
    "partner",
    "husband",
    "wife",
    "marriage",
    "relationship",
    "breakup",
    "broke up",
    "divorce",
    "my family",
    "my friend",
];

const EMOTIONAL_TERMS: &[&str] = &[
    "angry", "upset", "crying", "hurt", "scared", "afraid", "frustrated",
];

/// Classify free text into one [`Category`].
///
/// Precedence is a deliberate tie-break, not an accident: a text matching
/// both "depression" and "boyfriend" is filed under mental health.
pub fn categorize(text: &str) -> Category {
    let lower = text.to_lowercase();

    let families: &[(&[&str], Category)] = &[
        (DEPRESSION_TERMS, Category::Depression),
        (ANXIETY_TERMS, Category::Anxiety),
        (THERAPY_TERMS, Category::Therapy),
        (LONELINESS_TERMS, Category::Loneliness),
        (RELATIONSHIP_TERMS, Category::Relationship),
        // Generic emotional vocabulary carries no dedicated bucket.
        (EMOTIONAL_TERMS, Category::General),
    ];

    for (terms, category) in families {
        if terms.iter().any(|term| lower.contains(term)) {
            return *category;
        }
    }

    Category::General
}
