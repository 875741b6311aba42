//! Rating-consistent review text.
//!
//! Each star rating maps to a [`ReviewTier`]; the tier owns its templates and
//! the set of placeholders those templates use. Adding a tier or placeholder
//! only touches this file.

use std::fmt;
use std::sync::LazyLock;

use orion_error::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenReason};
use crate::weighted::WeightedTable;

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// A star rating, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All ratings, lowest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    pub fn tier(self) -> ReviewTier {
        match self.0 {
            1 | 2 => ReviewTier::Negative,
            3 => ReviewTier::Mixed,
            4 => ReviewTier::Balanced,
            _ => ReviewTier::Glowing,
        }
    }

    /// Draw a rating skewed toward 4 and 5 stars.
    pub fn sample(rng: &mut StdRng) -> Self {
        RATING_TABLE.sample(rng)
    }
}

impl TryFrom<u8> for Rating {
    type Error = GenError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Rating::new(stars).ok_or_else(|| {
            StructError::from(GenReason::InvalidInput)
                .with_detail(format!("rating {stars} outside 1..=5"))
        })
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1→5%, 2→10%, 3→15%, 4→35%, 5→35%.
pub const RATING_WEIGHTS: [(Rating, f64); 5] = [
    (Rating(1), 0.05),
    (Rating(2), 0.10),
    (Rating(3), 0.15),
    (Rating(4), 0.35),
    (Rating(5), 0.35),
];

static RATING_TABLE: LazyLock<WeightedTable<Rating>> =
    LazyLock::new(|| WeightedTable::new(&RATING_WEIGHTS));

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

pub const ISSUES: &[&str] = &[
    "Arrived damaged",
    "Poor build quality",
    "Doesn't work as advertised",
    "Cheap materials",
    "Broke after one use",
    "Shipping took forever",
    "Wrong item received",
    "Missing parts",
    "Poor customer service",
    "Overpriced for what you get",
];

pub const POSITIVE_ASPECTS: &[&str] = &[
    "Great build quality",
    "Works perfectly",
    "Fast shipping",
    "Excellent customer service",
    "Good value for money",
    "Easy to use",
    "High-quality materials",
    "Better than expected",
    "Perfect fit",
    "Amazing features",
];

pub const MINOR_ISSUES: &[&str] = &[
    "could be slightly cheaper",
    "shipping was a bit slow",
    "instructions could be clearer",
    "packaging could be better",
    "color was slightly different than expected",
    "setup took some time",
];

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Template placeholder, written `{name}` inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Issue,
    Positive,
    MinorIssue,
}

impl Placeholder {
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Issue => "{issue}",
            Placeholder::Positive => "{positive}",
            Placeholder::MinorIssue => "{minor_issue}",
        }
    }
}

/// Template family selected by the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTier {
    /// 1-2 stars: one serious issue.
    Negative,
    /// 3 stars: one issue, serious or minor.
    Mixed,
    /// 4 stars: a positive plus a minor issue.
    Balanced,
    /// 5 stars: a positive only.
    Glowing,
}

impl ReviewTier {
    pub fn placeholders(self) -> &'static [Placeholder] {
        match self {
            ReviewTier::Negative | ReviewTier::Mixed => &[Placeholder::Issue],
            ReviewTier::Balanced => &[Placeholder::Positive, Placeholder::MinorIssue],
            ReviewTier::Glowing => &[Placeholder::Positive],
        }
    }

    /// Vocabulary used to fill `placeholder` in this tier.
    fn vocabulary(self, placeholder: Placeholder) -> Vocabulary {
        match (self, placeholder) {
            (ReviewTier::Mixed, Placeholder::Issue) => Vocabulary::Union(ISSUES, MINOR_ISSUES),
            (_, Placeholder::Issue) => Vocabulary::Single(ISSUES),
            (_, Placeholder::Positive) => Vocabulary::Single(POSITIVE_ASPECTS),
            (_, Placeholder::MinorIssue) => Vocabulary::Single(MINOR_ISSUES),
        }
    }
}

enum Vocabulary {
    Single(&'static [&'static str]),
    Union(&'static [&'static str], &'static [&'static str]),
}

impl Vocabulary {
    fn choose(&self, rng: &mut StdRng) -> &'static str {
        match self {
            Vocabulary::Single(words) => words[rng.random_range(0..words.len())],
            Vocabulary::Union(a, b) => {
                let idx = rng.random_range(0..a.len() + b.len());
                if idx < a.len() { a[idx] } else { b[idx - a.len()] }
            }
        }
    }
}

/// Templates for one rating. Every template uses exactly the placeholders of
/// the rating's tier.
pub fn templates(rating: Rating) -> &'static [&'static str] {
    match rating.get() {
        1 => &[
            "Absolutely terrible product. {issue}. Would not recommend to anyone.",
            "Worst purchase I've ever made. {issue}. Complete waste of money.",
            "One star is too generous. {issue}. Returning immediately.",
            "Extremely disappointed. {issue}. Poor quality and terrible service.",
        ],
        2 => &[
            "Not satisfied with this purchase. {issue}. Expected much better quality.",
            "Below average product. {issue}. Wouldn't buy again.",
            "Disappointed with the quality. {issue}. Not worth the price.",
            "Poor experience overall. {issue}. Many better alternatives available.",
        ],
        3 => &[
            "Average product, nothing special. {issue} but it's acceptable.",
            "Okay for the price. {issue} but does the job.",
            "Middle of the road. {issue} but has some good points too.",
            "Decent enough. {issue} though overall it's fine.",
        ],
        4 => &[
            "Good product overall. {positive} though {minor_issue}.",
            "Happy with this purchase. {positive} but {minor_issue}.",
            "Solid choice. {positive} despite {minor_issue}.",
            "Pleased with the quality. {positive} although {minor_issue}.",
        ],
        _ => &[
            "Excellent product! {positive}. Highly recommend!",
            "Perfect! {positive}. Couldn't be happier with this purchase.",
            "Outstanding quality. {positive}. Will definitely buy again.",
            "Amazing! {positive}. Exceeded all my expectations.",
        ],
    }
}

/// Fill a random template for `rating` with phrases from its tier.
pub fn synthesize_review(rating: Rating, product_name: &str, rng: &mut StdRng) -> String {
    let pool = templates(rating);
    let template = pool[rng.random_range(0..pool.len())];
    let tier = rating.tier();

    let mut text = template.to_string();
    for &placeholder in tier.placeholders() {
        let phrase = tier.vocabulary(placeholder).choose(rng);
        text = text.replace(placeholder.token(), phrase);
    }
    rg_trace!(synth, rating = rating.get(), product = product_name, "review text synthesized");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn has_marker(s: &str) -> bool {
        s.contains('{') || s.contains('}')
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(3).map(Rating::get), Some(3));
        assert_eq!(Rating::all().count(), 5);
    }

    #[test]
    fn out_of_range_rating_is_invalid_input() {
        assert!(Rating::try_from(0).is_err());
        assert!(Rating::try_from(9).is_err());
        assert_eq!(Rating::try_from(5).map(Rating::get).ok(), Some(5));
    }

    #[test]
    fn rating_serializes_as_integer() {
        let r = Rating::new(4).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Rating>("2").unwrap().get(), 2);
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }

    #[test]
    fn tiers_by_rating() {
        let tiers: Vec<_> = Rating::all().map(Rating::tier).collect();
        assert_eq!(
            tiers,
            vec![
                ReviewTier::Negative,
                ReviewTier::Negative,
                ReviewTier::Mixed,
                ReviewTier::Balanced,
                ReviewTier::Glowing,
            ]
        );
    }

    #[test]
    fn templates_use_exactly_their_tier_placeholders() {
        let all = [Placeholder::Issue, Placeholder::Positive, Placeholder::MinorIssue];
        for rating in Rating::all() {
            let wanted = rating.tier().placeholders();
            for template in templates(rating) {
                for p in all {
                    assert_eq!(
                        template.contains(p.token()),
                        wanted.contains(&p),
                        "rating {rating}: {template}"
                    );
                }
            }
        }
    }

    #[test]
    fn synthesized_text_has_no_markers() {
        let mut rng = StdRng::seed_from_u64(1);
        for rating in Rating::all() {
            for _ in 0..200 {
                let text = synthesize_review(rating, "Laptop", &mut rng);
                assert!(!text.is_empty());
                assert!(!has_marker(&text), "unresolved marker: {text}");
            }
        }
    }

    #[test]
    fn negative_text_uses_an_issue() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let text = synthesize_review(Rating::new(1).unwrap(), "Hoodie", &mut rng);
            assert!(ISSUES.iter().any(|i| text.contains(i)), "{text}");
            assert!(!POSITIVE_ASPECTS.iter().any(|p| text.contains(p)), "{text}");
        }
    }

    #[test]
    fn balanced_text_has_positive_and_minor_issue() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let text = synthesize_review(Rating::new(4).unwrap(), "Tablet", &mut rng);
            assert!(POSITIVE_ASPECTS.iter().any(|p| text.contains(p)), "{text}");
            assert!(MINOR_ISSUES.iter().any(|m| text.contains(m)), "{text}");
        }
    }

    #[test]
    fn mixed_text_draws_from_both_issue_lists() {
        let mut rng = StdRng::seed_from_u64(4);
        let (mut serious, mut minor) = (false, false);
        for _ in 0..500 {
            let text = synthesize_review(Rating::new(3).unwrap(), "Cookbook", &mut rng);
            serious |= ISSUES.iter().any(|i| text.contains(i));
            minor |= MINOR_ISSUES.iter().any(|m| text.contains(m));
        }
        assert!(serious && minor);
    }

    #[test]
    fn glowing_text_has_no_complaints() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let text = synthesize_review(Rating::new(5).unwrap(), "Camera", &mut rng);
            assert!(POSITIVE_ASPECTS.iter().any(|p| text.contains(p)), "{text}");
            assert!(!MINOR_ISSUES.iter().any(|m| text.contains(m)), "{text}");
        }
    }
}
