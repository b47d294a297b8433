//! Deterministic, heuristic compatibility scoring.
//!
//! Each dimension has an explicit neutral score of `0.5` for unknown input,
//! so the scorer never fails and never treats a missing attribute as a bad
//! match.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use unimeet_core::{
    CompatibilityScorer, DepartmentCategory, Mbti, ScoreBreakdown, UserProfile, sanitise_score,
};

use crate::{DimensionWeights, WeightsError};

/// Score used whenever either side of a dimension is unknown.
pub const NEUTRAL_SCORE: f32 = 0.5;

/// Personality-type pairs considered complementary.
///
/// Pairs are unordered: lookups check both directions.
pub const COMPLEMENTARY_MBTI: [(Mbti, Mbti); 8] = [
    (Mbti::Intj, Mbti::Enfp),
    (Mbti::Intj, Mbti::Entp),
    (Mbti::Intp, Mbti::Enfj),
    (Mbti::Intp, Mbti::Entj),
    (Mbti::Entj, Mbti::Infp),
    (Mbti::Entp, Mbti::Infj),
    (Mbti::Infj, Mbti::Enfp),
    (Mbti::Infp, Mbti::Enfj),
];

/// Categories whose departments count as related for scoring.
const RELATED_DEPARTMENT_GROUPS: [DepartmentCategory; 3] = [
    DepartmentCategory::Engineering,
    DepartmentCategory::Humanities,
    DepartmentCategory::Social,
];

/// Rule-based scorer over the six profile dimensions.
///
/// # Examples
/// ```
/// use unimeet_core::{CompatibilityScorer, Mbti, UserProfile};
/// use unimeet_scorer::RuleBasedScorer;
///
/// let scorer = RuleBasedScorer::default();
/// let a = UserProfile::new("a").with_mbti(Mbti::Intj);
/// let b = UserProfile::new("b").with_mbti(Mbti::Enfp);
/// let breakdown = scorer.compatibility(&a, &b);
/// assert_eq!(breakdown.mbti, 0.9);
/// assert_eq!(breakdown.age, 0.5);
/// assert!(breakdown.ai_total.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RuleBasedScorer {
    weights: DimensionWeights,
}

impl RuleBasedScorer {
    /// Construct a scorer with a custom weight table.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the table fails validation.
    pub fn with_weights(weights: DimensionWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weight table used for `total`.
    #[must_use]
    pub const fn weights(&self) -> &DimensionWeights {
        &self.weights
    }

    /// Score every dimension and the weighted total.
    #[must_use]
    pub fn score(&self, target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown {
            mbti: mbti_score(target.mbti, candidate.mbti),
            interests: interest_score(&target.interests, &candidate.interests),
            personality: personality_score(
                &target.personality_keywords,
                &candidate.personality_keywords,
            ),
            department: department_score(
                target.department.as_deref(),
                candidate.department.as_deref(),
            ),
            age: age_score(target.birth_year, candidate.birth_year),
            height: height_score(target.height_cm, candidate.height_cm),
            total: 0.0,
            ai_total: None,
        };
        breakdown.total = sanitise_score(self.weights.combine(&breakdown));
        breakdown
    }
}

impl CompatibilityScorer for RuleBasedScorer {
    fn compatibility(&self, target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown {
        self.score(target, candidate)
    }
}

/// Report whether two personality types appear as a complementary pair.
#[must_use]
pub fn is_complementary(lhs: Mbti, rhs: Mbti) -> bool {
    COMPLEMENTARY_MBTI
        .iter()
        .any(|&(a, b)| (a == lhs && b == rhs) || (a == rhs && b == lhs))
}

/// Personality-type compatibility.
#[must_use]
pub fn mbti_score(lhs: Option<Mbti>, rhs: Option<Mbti>) -> f32 {
    let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
        return NEUTRAL_SCORE;
    };
    if lhs == rhs {
        0.8
    } else if is_complementary(lhs, rhs) {
        0.9
    } else {
        0.4
    }
}

/// Interest overlap: `0.3 + 0.7 * jaccard`.
#[must_use]
pub fn interest_score(lhs: &BTreeSet<String>, rhs: &BTreeSet<String>) -> f32 {
    overlap_score(lhs, rhs, 0.3, 0.7)
}

/// Personality-keyword overlap: `0.4 + 0.6 * jaccard`.
#[must_use]
pub fn personality_score(lhs: &BTreeSet<String>, rhs: &BTreeSet<String>) -> f32 {
    overlap_score(lhs, rhs, 0.4, 0.6)
}

#[expect(
    clippy::float_arithmetic,
    reason = "overlap scores scale the Jaccard index into a fixed band"
)]
fn overlap_score(lhs: &BTreeSet<String>, rhs: &BTreeSet<String>, floor: f32, span: f32) -> f32 {
    if lhs.is_empty() || rhs.is_empty() {
        return NEUTRAL_SCORE;
    }
    let intersection = lhs.intersection(rhs).count();
    let union = lhs.union(rhs).count();
    floor + span * ratio(intersection, union)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "tag counts are small enough to convert to f32 exactly"
)]
fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f32 / denominator as f32
}

/// Department affinity.
#[must_use]
pub fn department_score(lhs: Option<&str>, rhs: Option<&str>) -> f32 {
    let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
        return NEUTRAL_SCORE;
    };
    if lhs == rhs {
        return 1.0;
    }
    match (
        DepartmentCategory::for_department(lhs),
        DepartmentCategory::for_department(rhs),
    ) {
        (Some(a), Some(b)) if a == b && RELATED_DEPARTMENT_GROUPS.contains(&a) => 0.8,
        _ => 0.4,
    }
}

/// Closeness in birth year.
#[must_use]
pub fn age_score(lhs: Option<i32>, rhs: Option<i32>) -> f32 {
    let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
        return NEUTRAL_SCORE;
    };
    match lhs.abs_diff(rhs) {
        0 => 1.0,
        1 => 0.9,
        2 => 0.8,
        3 => 0.7,
        4..=5 => 0.5,
        _ => 0.3,
    }
}

/// Closeness in height.
#[must_use]
pub fn height_score(lhs: Option<u16>, rhs: Option<u16>) -> f32 {
    let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
        return NEUTRAL_SCORE;
    };
    match lhs.abs_diff(rhs) {
        0..=3 => 1.0,
        4..=5 => 0.9,
        6..=10 => 0.8,
        11..=15 => 0.6,
        _ => 0.4,
    }
}
