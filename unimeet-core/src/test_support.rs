//! Test-only predictors and scorers used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    CompatibilityScorer, FEATURE_DIM, FeatureVector, PredictError, Predictor, ScoreBreakdown,
    UserProfile,
};

/// Available predictor that always returns the same probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantPredictor(pub f32);

impl Predictor for ConstantPredictor {
    fn is_available(&self) -> bool {
        true
    }

    fn predict(
        &self,
        _target: &FeatureVector,
        _candidate: &FeatureVector,
    ) -> Result<f32, PredictError> {
        Ok(self.0)
    }
}

/// Predictor that claims availability but rejects every input shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingPredictor;

impl Predictor for FailingPredictor {
    fn is_available(&self) -> bool {
        true
    }

    fn predict(
        &self,
        _target: &FeatureVector,
        _candidate: &FeatureVector,
    ) -> Result<f32, PredictError> {
        Err(PredictError::ShapeMismatch {
            expected: FEATURE_DIM,
            actual: FEATURE_DIM + 1,
        })
    }
}

/// Untrained predictor. Calling [`Predictor::predict`] is a test failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePredictor;

impl Predictor for UnavailablePredictor {
    fn is_available(&self) -> bool {
        false
    }

    fn predict(
        &self,
        _target: &FeatureVector,
        _candidate: &FeatureVector,
    ) -> Result<f32, PredictError> {
        debug_assert!(false, "unavailable predictor must not be invoked");
        Err(PredictError::Unavailable)
    }
}

/// `CompatibilityScorer` returning a preset total per candidate id.
///
/// Unknown candidates score [`ScoreBreakdown::neutral`].
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    totals: HashMap<String, f32>,
}

impl FixedScorer {
    /// Build a scorer from `(candidate id, total)` pairs.
    pub fn new<I, S>(totals: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        Self {
            totals: totals
                .into_iter()
                .map(|(id, total)| (id.into(), total))
                .collect(),
        }
    }
}

impl CompatibilityScorer for FixedScorer {
    fn compatibility(&self, _target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::neutral();
        if let Some(&total) = self.totals.get(&candidate.user_id) {
            breakdown.total = total;
        }
        breakdown
    }
}

/// Build `count` anonymous candidates named `c0`, `c1`, ….
pub fn blank_candidates(count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|index| UserProfile::new(format!("c{index}")))
        .collect()
}
