//! Scorer selection between the learned model and the rule-based fallback.
//!
//! The engine owns an encoder, a rule-based scorer and, optionally, a shared
//! read-only [`Predictor`]. For every pair it first asks whether the
//! predictor is available. If so, both profiles are encoded and the model's
//! probability is attached to the rule-based breakdown as `ai_total`. If the
//! predictor is absent, unavailable or fails, the rule-based breakdown is
//! returned on its own.
#![forbid(unsafe_code)]

use std::sync::Arc;

use log::warn;
use unimeet_core::{
    CompatibilityReport, CompatibilityScorer, PredictError, Predictor, ScoreBreakdown, UserProfile,
};

use crate::{FeatureEncoder, RuleBasedScorer};

const SERVICE_NAME: &str = "UniMeet AI Matching Service";

/// The scoring path chosen for a pair.
enum Selection<'a> {
    Learned(&'a dyn Predictor),
    RuleBased,
}

/// Compatibility engine combining rule-based scoring with an optional
/// learned model.
///
/// Engines are constructed by callers and passed explicitly; nothing here is
/// global. Cloning is cheap because the predictor is shared.
///
/// # Examples
/// ```
/// use unimeet_core::{Mbti, UserProfile};
/// use unimeet_scorer::CompatibilityEngine;
///
/// let engine = CompatibilityEngine::new();
/// let a = UserProfile::new("a").with_mbti(Mbti::Intj).with_birth_year(2000);
/// let b = UserProfile::new("b").with_mbti(Mbti::Intj).with_birth_year(2000);
/// let breakdown = engine.compute_compatibility(&a, &b);
/// assert_eq!(breakdown.mbti, 0.8);
/// assert_eq!(breakdown.age, 1.0);
/// assert!(breakdown.ai_total.is_none());
/// ```
#[derive(Clone, Default)]
pub struct CompatibilityEngine {
    encoder: FeatureEncoder,
    rules: RuleBasedScorer,
    predictor: Option<Arc<dyn Predictor>>,
}

impl std::fmt::Debug for CompatibilityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompatibilityEngine")
            .field("encoder", &self.encoder)
            .field("rules", &self.rules)
            .field("model_trained", &self.model_trained())
            .finish()
    }
}

impl CompatibilityEngine {
    /// Construct a rule-based engine with default encoder and weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an engine from explicit parts.
    #[must_use]
    pub const fn from_parts(encoder: FeatureEncoder, rules: RuleBasedScorer) -> Self {
        Self {
            encoder,
            rules,
            predictor: None,
        }
    }

    /// Attach a learned predictor, consulted before the rule-based scorer.
    #[must_use]
    pub fn with_predictor(mut self, predictor: Arc<dyn Predictor>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    /// The encoder used to build predictor inputs.
    #[must_use]
    pub const fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    /// The rule-based fallback.
    #[must_use]
    pub const fn rules(&self) -> &RuleBasedScorer {
        &self.rules
    }

    /// Report whether a trained predictor is attached and available.
    #[must_use]
    pub fn model_trained(&self) -> bool {
        matches!(self.select(), Selection::Learned(_))
    }

    /// Score a pair, consulting the learned model when it is available.
    ///
    /// Never fails. A predictor error is logged and the rule-based breakdown
    /// is returned for this call only.
    #[must_use]
    pub fn compute_compatibility(
        &self,
        target: &UserProfile,
        candidate: &UserProfile,
    ) -> ScoreBreakdown {
        let breakdown = self.rules.score(target, candidate);
        let Selection::Learned(predictor) = self.select() else {
            return breakdown;
        };
        match self.predict(predictor, target, candidate) {
            Ok(probability) => breakdown.with_ai_total(probability),
            Err(err) => {
                warn!(
                    "learned scoring failed for {} and {}: {err}; using rule-based scores",
                    target.user_id, candidate.user_id
                );
                breakdown
            }
        }
    }

    /// Score a pair and wrap the result in a [`CompatibilityReport`].
    #[must_use]
    pub fn report(&self, user1: &UserProfile, user2: &UserProfile) -> CompatibilityReport {
        CompatibilityReport::new(
            user1.user_id.as_str(),
            user2.user_id.as_str(),
            self.compute_compatibility(user1, user2),
        )
    }

    /// Describe the engine for health checks.
    #[must_use]
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            service: SERVICE_NAME,
            status: "running",
            model_trained: self.model_trained(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    fn select(&self) -> Selection<'_> {
        match self.predictor.as_deref() {
            Some(predictor) if predictor.is_available() => Selection::Learned(predictor),
            _ => Selection::RuleBased,
        }
    }

    fn predict(
        &self,
        predictor: &dyn Predictor,
        target: &UserProfile,
        candidate: &UserProfile,
    ) -> Result<f32, PredictError> {
        let target_features = self.encoder.encode(target);
        let candidate_features = self.encoder.encode(candidate);
        let value = predictor.predict(&target_features, &candidate_features)?;
        if value.is_finite() && (0.0_f32..=1.0_f32).contains(&value) {
            Ok(value)
        } else {
            Err(PredictError::InvalidOutput { value })
        }
    }
}

impl CompatibilityScorer for CompatibilityEngine {
    fn compatibility(&self, target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown {
        self.compute_compatibility(target, candidate)
    }
}

/// Health summary of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EngineStatus {
    /// Service name.
    pub service: &'static str,
    /// Always `"running"` for a constructed engine.
    pub status: &'static str,
    /// Whether a trained predictor is attached and available.
    pub model_trained: bool,
    /// Crate version.
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use unimeet_core::Mbti;
    use unimeet_core::test_support::{ConstantPredictor, FailingPredictor, UnavailablePredictor};

    fn pair() -> (UserProfile, UserProfile) {
        (
            UserProfile::new("a")
                .with_mbti(Mbti::Intj)
                .with_birth_year(2000)
                .with_height_cm(175),
            UserProfile::new("b")
                .with_mbti(Mbti::Enfp)
                .with_birth_year(2001)
                .with_height_cm(168),
        )
    }

    #[rstest]
    fn without_predictor_matches_rules() {
        let engine = CompatibilityEngine::new();
        let (a, b) = pair();
        assert_eq!(
            engine.compute_compatibility(&a, &b),
            engine.rules().score(&a, &b)
        );
        assert!(!engine.model_trained());
    }

    #[rstest]
    fn unavailable_predictor_is_skipped() {
        let engine = CompatibilityEngine::new().with_predictor(Arc::new(UnavailablePredictor));
        let (a, b) = pair();
        let breakdown = engine.compute_compatibility(&a, &b);
        assert!(breakdown.ai_total.is_none());
        assert!(!engine.status().model_trained);
    }

    #[rstest]
    fn available_predictor_adds_ai_total() {
        let engine = CompatibilityEngine::new().with_predictor(Arc::new(ConstantPredictor(0.73)));
        let (a, b) = pair();
        let breakdown = engine.compute_compatibility(&a, &b);
        assert_eq!(breakdown.ai_total, Some(0.73));
        assert_eq!(breakdown.total, engine.rules().score(&a, &b).total);
        assert_eq!(engine.report(&a, &b).compatibility_score, breakdown.total);
    }

    #[rstest]
    fn failing_predictor_falls_back() {
        let engine = CompatibilityEngine::new().with_predictor(Arc::new(FailingPredictor));
        let (a, b) = pair();
        assert_eq!(
            engine.compute_compatibility(&a, &b),
            engine.rules().score(&a, &b)
        );
    }

    #[rstest]
    #[case(1.5)]
    #[case(-0.2)]
    #[case(f32::NAN)]
    fn out_of_range_prediction_falls_back(#[case] value: f32) {
        let engine = CompatibilityEngine::new().with_predictor(Arc::new(ConstantPredictor(value)));
        let (a, b) = pair();
        assert!(engine.compute_compatibility(&a, &b).ai_total.is_none());
    }

    #[rstest]
    fn report_carries_both_ids() {
        let engine = CompatibilityEngine::new();
        let (a, b) = pair();
        let report = engine.report(&a, &b);
        assert_eq!(report.user1_id, "a");
        assert_eq!(report.user2_id, "b");
        assert_eq!(report.compatibility_score, report.detailed_scores.total);
    }

    #[rstest]
    fn status_reports_trained_model() {
        let engine = CompatibilityEngine::new().with_predictor(Arc::new(ConstantPredictor(0.5)));
        let status = engine.status();
        assert!(status.model_trained);
        assert_eq!(status.status, "running");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn status_serialises_health_fields() {
        let value = serde_json::to_value(CompatibilityEngine::new().status()).expect("serialise");
        let object = value.as_object().expect("object");
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["model_trained", "service", "status", "version"]);
        assert_eq!(
            object.get("service").and_then(|v| v.as_str()),
            Some("UniMeet AI Matching Service")
        );
        assert_eq!(
            object.get("model_trained").and_then(serde_json::Value::as_bool),
            Some(false)
        );
    }
}
