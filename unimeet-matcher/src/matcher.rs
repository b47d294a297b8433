//! `TopKMatcher` implementation.

use std::cmp::Ordering;

use log::debug;
use unimeet_core::{CompatibilityScorer, MatchResult, Matcher, UserProfile, sanitise_score};

/// Ranks candidates with a [`CompatibilityScorer`] and keeps the best few.
///
/// Results are ordered by [`MatchResult::compatibility_score`] descending.
/// The sort is stable, so candidates with equal scores keep their input
/// order.
///
/// # Examples
/// ```
/// use unimeet_core::{Matcher, Mbti, UserProfile};
/// use unimeet_matcher::TopKMatcher;
/// use unimeet_scorer::CompatibilityEngine;
///
/// let matcher = TopKMatcher::new(CompatibilityEngine::new());
/// let target = UserProfile::new("me").with_mbti(Mbti::Intj);
/// let candidates = vec![
///     UserProfile::new("a").with_mbti(Mbti::Istj),
///     UserProfile::new("b").with_mbti(Mbti::Enfp),
/// ];
/// let ranked = matcher.find_matches(&target, &candidates, 1);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked.first().map(|m| m.user_id.as_str()), Some("b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TopKMatcher<C> {
    scorer: C,
}

impl<C> TopKMatcher<C>
where
    C: CompatibilityScorer,
{
    /// Construct a matcher around `scorer`.
    #[must_use]
    pub const fn new(scorer: C) -> Self {
        Self { scorer }
    }

    /// The scorer used for each candidate.
    #[must_use]
    pub const fn scorer(&self) -> &C {
        &self.scorer
    }

    fn score_all(&self, target: &UserProfile, candidates: &[UserProfile]) -> Vec<MatchResult> {
        candidates
            .iter()
            .map(|candidate| {
                let mut result = MatchResult::new(
                    candidate.user_id.as_str(),
                    self.scorer.compatibility(target, candidate),
                );
                result.compatibility_score = sanitise_score(result.compatibility_score);
                result
            })
            .collect()
    }
}

impl<C> Matcher for TopKMatcher<C>
where
    C: CompatibilityScorer,
{
    fn find_matches(
        &self,
        target: &UserProfile,
        candidates: &[UserProfile],
        top_k: usize,
    ) -> Vec<MatchResult> {
        if top_k == 0 || candidates.is_empty() {
            return Vec::new();
        }
        let mut results = self.score_all(target, candidates);
        results.sort_by(by_score_descending);
        if results.len() > top_k {
            debug!(
                "keeping {top_k} of {} candidates for {}",
                results.len(),
                target.user_id
            );
            results.truncate(top_k);
        }
        results
    }
}

fn by_score_descending(lhs: &MatchResult, rhs: &MatchResult) -> Ordering {
    rhs.compatibility_score.total_cmp(&lhs.compatibility_score)
}
