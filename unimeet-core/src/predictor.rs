//! The optional learned model.
//!
//! A [`Predictor`] turns two [`FeatureVector`]s into a single compatibility
//! probability. It is a capability, not a requirement: callers check
//! [`Predictor::is_available`] first and fall back to rule-based scoring when
//! it reports `false` or when [`Predictor::predict`] fails.

use thiserror::Error;

use crate::FeatureVector;

/// Errors returned by [`Predictor::predict`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// The model has not been trained or loaded.
    #[error("predictor is not available")]
    Unavailable,
    /// The model was fitted for a different feature width.
    #[error("predictor expects {expected} features per profile but holds {actual}")]
    ShapeMismatch {
        /// Width of the vectors supplied.
        expected: usize,
        /// Width the model was fitted for.
        actual: usize,
    },
    /// The model produced something other than a probability.
    #[error("predictor produced {value}, which is not a probability")]
    InvalidOutput {
        /// Raw model output.
        value: f32,
    },
}

/// A trained compatibility model.
///
/// Predictors are shared read-only across requests and must be safe for
/// concurrent invocation (`Send` + `Sync`).
pub trait Predictor: Send + Sync {
    /// Report whether the model is trained and ready.
    fn is_available(&self) -> bool;

    /// Predict the compatibility probability of `target` and `candidate`.
    ///
    /// # Errors
    /// Returns [`PredictError`] when the model is unavailable, was fitted for
    /// another input shape, or produced a non-probability.
    fn predict(&self, target: &FeatureVector, candidate: &FeatureVector)
    -> Result<f32, PredictError>;
}
