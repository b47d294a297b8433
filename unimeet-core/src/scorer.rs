//! Score one profile against another.
//!
//! The [`CompatibilityScorer`] trait is the seam between the matcher and the
//! scoring strategy, so a rule-based scorer and an engine that consults a
//! learned model are interchangeable.

use crate::{ScoreBreakdown, UserProfile};

/// Calculate the compatibility of two profiles.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. The method is infallible: unknown inputs score
/// neutrally rather than erroring.
///
/// Implementations must:
/// - Produce finite scores in `0.0..=1.0` for every dimension.
/// - Never mutate either profile.
///
/// Use [`sanitise_score`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use unimeet_core::{CompatibilityScorer, ScoreBreakdown, UserProfile};
///
/// struct NeutralScorer;
///
/// impl CompatibilityScorer for NeutralScorer {
///     fn compatibility(&self, _target: &UserProfile, _candidate: &UserProfile) -> ScoreBreakdown {
///         ScoreBreakdown::neutral()
///     }
/// }
///
/// let scorer = NeutralScorer;
/// let a = UserProfile::new("a");
/// let b = UserProfile::new("b");
/// assert_eq!(scorer.compatibility(&a, &b).total, 0.5);
/// ```
pub trait CompatibilityScorer: Send + Sync {
    /// Return the breakdown for `candidate` as seen from `target`.
    fn compatibility(&self, target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown;
}

impl<T: CompatibilityScorer + ?Sized> CompatibilityScorer for &T {
    fn compatibility(&self, target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown {
        (**self).compatibility(target, candidate)
    }
}

impl<T: CompatibilityScorer + ?Sized> CompatibilityScorer for std::sync::Arc<T> {
    fn compatibility(&self, target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown {
        (**self).compatibility(target, candidate)
    }
}

/// Clamp and validate a raw score.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
#[must_use]
pub fn sanitise_score(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
