//! Rank a candidate pool against a target profile.

use thiserror::Error;

use crate::{MatchResult, UserProfile};

/// Number of results returned when a request does not say otherwise.
pub const DEFAULT_TOP_K: usize = 10;

/// A ranking request.
///
/// # Examples
/// ```
/// use unimeet_core::{DEFAULT_TOP_K, MatchRequest, UserProfile};
///
/// let request = MatchRequest::new(UserProfile::new("me"), vec![UserProfile::new("you")]);
/// assert_eq!(request.top_k, DEFAULT_TOP_K);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRequest {
    /// Profile the candidates are ranked against.
    pub target_user: UserProfile,
    /// Pool to rank.
    pub candidate_users: Vec<UserProfile>,
    /// Maximum number of results.
    #[cfg_attr(feature = "serde", serde(default = "default_top_k"))]
    pub top_k: usize,
}

#[cfg(feature = "serde")]
const fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// Errors returned by [`MatchRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchRequestError {
    /// `top_k` was zero, so nothing could be returned.
    #[error("top_k must be at least 1")]
    ZeroTopK,
    /// The target profile has no identifier.
    #[error("target user must have a non-empty user_id")]
    MissingTargetId,
}

impl MatchRequest {
    /// Construct a request returning up to [`DEFAULT_TOP_K`] results.
    #[must_use]
    pub const fn new(target_user: UserProfile, candidate_users: Vec<UserProfile>) -> Self {
        Self {
            target_user,
            candidate_users,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the result limit.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Check the request before ranking.
    ///
    /// # Errors
    /// Returns [`MatchRequestError`] for a zero `top_k` or an anonymous
    /// target.
    pub fn validate(&self) -> Result<(), MatchRequestError> {
        if self.top_k == 0 {
            return Err(MatchRequestError::ZeroTopK);
        }
        if self.target_user.user_id.trim().is_empty() {
            return Err(MatchRequestError::MissingTargetId);
        }
        Ok(())
    }
}

/// Rank candidates by compatibility with a target.
///
/// Implementations return at most `top_k` results, sorted by
/// [`MatchResult::compatibility_score`] descending, and must be `Send + Sync`
/// so a single matcher can serve concurrent requests.
pub trait Matcher: Send + Sync {
    /// Rank `candidates` against `target`, keeping the best `top_k`.
    fn find_matches(
        &self,
        target: &UserProfile,
        candidates: &[UserProfile],
        top_k: usize,
    ) -> Vec<MatchResult>;

    /// Rank the candidates of a [`MatchRequest`].
    fn match_request(&self, request: &MatchRequest) -> Vec<MatchResult> {
        self.find_matches(
            &request.target_user,
            &request.candidate_users,
            request.top_k,
        )
    }
}
