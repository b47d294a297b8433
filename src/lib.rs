//! Facade crate for the UniMeet compatibility engine.
//!
//! This crate re-exports the core domain types, the rule-based scorer with
//! its scorer selector, and the top-K matcher. The persisted logistic
//! predictor is available behind the `learned-model` feature.
//!
//! The two entry points most callers need are [`compute_compatibility`] and
//! [`find_matches`]:
//!
//! ```
//! use unimeet_engine::{CompatibilityEngine, Mbti, UserProfile, find_matches};
//!
//! let engine = CompatibilityEngine::new();
//! let target = UserProfile::new("me").with_mbti(Mbti::Intj);
//! let pool = vec![
//!     UserProfile::new("a").with_mbti(Mbti::Intj),
//!     UserProfile::new("b").with_mbti(Mbti::Enfp),
//! ];
//! let ranked = find_matches(&engine, &target, &pool, 10);
//! assert_eq!(ranked.first().map(|m| m.user_id.as_str()), Some("b"));
//! ```

#![forbid(unsafe_code)]

pub use unimeet_core::{
    CompatibilityReport, CompatibilityScorer, DEFAULT_TOP_K, DepartmentCategory, Dimension,
    FEATURE_DIM, FeatureError, FeatureVector, Gender, MatchRequest, MatchRequestError,
    MatchResult, Matcher, Mbti, PredictError, Predictor, ScoreBreakdown, UserProfile,
    sanitise_score,
};
pub use unimeet_matcher::TopKMatcher;
pub use unimeet_scorer::{
    CompatibilityEngine, DimensionWeights, EngineStatus, FeatureEncoder, RuleBasedScorer,
    WeightsError,
};

#[cfg(feature = "learned-model")]
pub use unimeet_scorer::{LogisticPredictor, PredictorFileError};

/// Score a pair of profiles with `engine`.
///
/// The breakdown always carries the rule-based `total`; `ai_total` is
/// present only when the engine's learned model produced a probability.
#[must_use]
pub fn compute_compatibility(
    engine: &CompatibilityEngine,
    profile_a: &UserProfile,
    profile_b: &UserProfile,
) -> ScoreBreakdown {
    engine.compute_compatibility(profile_a, profile_b)
}

/// Rank `candidates` against `target` with `engine`, keeping the best `top_k`.
#[must_use]
pub fn find_matches(
    engine: &CompatibilityEngine,
    target: &UserProfile,
    candidates: &[UserProfile],
    top_k: usize,
) -> Vec<MatchResult> {
    TopKMatcher::new(engine).find_matches(target, candidates, top_k)
}
