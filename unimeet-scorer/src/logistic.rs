//! A logistic compatibility model persisted with `bincode`.
//!
//! The model scores a pair from three weight vectors, one for the target's
//! features, one for the candidate's, and one for their element-wise
//! product, followed by a sigmoid. Training happens elsewhere; this module
//! only loads, saves and evaluates fitted weights.
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufReader, BufWriter};

use bincode::Options;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use unimeet_core::{FEATURE_DIM, FeatureVector, PredictError, Predictor};

use crate::PredictorFileError;

/// Bincode options used for predictor files.
pub(crate) fn bincode_options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
}

/// Public helper exposing the bincode configuration used for predictor files.
#[must_use]
pub fn predictor_bincode_options() -> impl bincode::Options {
    bincode_options()
}

/// Fitted logistic model over a pair of feature vectors.
///
/// A model with no weights is untrained and reports itself unavailable.
/// Weights fitted for a different feature width are still loaded, but every
/// prediction fails with [`PredictError::ShapeMismatch`] so callers fall
/// back to rule-based scoring.
///
/// # Examples
/// ```
/// use unimeet_core::{FEATURE_DIM, FeatureVector, Predictor};
/// use unimeet_scorer::LogisticPredictor;
///
/// let model = LogisticPredictor::new(
///     vec![0.0; FEATURE_DIM],
///     vec![0.0; FEATURE_DIM],
///     vec![0.0; FEATURE_DIM],
///     0.0,
/// );
/// let zeros = FeatureVector::zeros();
/// assert!(model.is_available());
/// assert_eq!(model.predict(&zeros, &zeros), Ok(0.5));
/// assert!(!LogisticPredictor::untrained().is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticPredictor {
    target_weights: Vec<f32>,
    candidate_weights: Vec<f32>,
    interaction_weights: Vec<f32>,
    bias: f32,
}

impl LogisticPredictor {
    /// Construct a model from fitted weights.
    #[must_use]
    pub const fn new(
        target_weights: Vec<f32>,
        candidate_weights: Vec<f32>,
        interaction_weights: Vec<f32>,
        bias: f32,
    ) -> Self {
        Self {
            target_weights,
            candidate_weights,
            interaction_weights,
            bias,
        }
    }

    /// A model with no weights.
    #[must_use]
    pub const fn untrained() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), 0.0)
    }

    /// Load a model from a predictor file.
    ///
    /// # Errors
    /// Returns [`PredictorFileError`] when the file cannot be opened or does
    /// not decode as a model.
    pub fn load(path: &Utf8Path) -> Result<Self, PredictorFileError> {
        let file = File::open(path.as_std_path()).map_err(|source| PredictorFileError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        bincode_options()
            .deserialize_from(BufReader::new(file))
            .map_err(|source| PredictorFileError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Persist the model to a predictor file, replacing any existing file.
    ///
    /// The parent directory is created when missing.
    ///
    /// # Errors
    /// Returns [`PredictorFileError`] when the directory or file cannot be
    /// created or written.
    pub fn save(&self, path: &Utf8Path) -> Result<(), PredictorFileError> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_str().is_empty()) {
            std::fs::create_dir_all(parent.as_std_path()).map_err(|source| {
                PredictorFileError::CreateParent {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }
        let file =
            File::create(path.as_std_path()).map_err(|source| PredictorFileError::WriteFile {
                path: path.to_path_buf(),
                source,
            })?;
        bincode_options()
            .serialize_into(BufWriter::new(file), self)
            .map_err(|source| PredictorFileError::Serialise {
                path: path.to_path_buf(),
                source,
            })
    }

    fn check_shape(&self) -> Result<(), PredictError> {
        [
            &self.target_weights,
            &self.candidate_weights,
            &self.interaction_weights,
        ]
        .into_iter()
        .find(|weights| weights.len() != FEATURE_DIM)
        .map_or(Ok(()), |weights| {
            Err(PredictError::ShapeMismatch {
                expected: FEATURE_DIM,
                actual: weights.len(),
            })
        })
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "a logistic model is a weighted sum followed by a sigmoid"
    )]
    fn logit(&self, target: &FeatureVector, candidate: &FeatureVector) -> f32 {
        let target_values = target.as_slice();
        let candidate_values = candidate.as_slice();
        let linear: f32 = self
            .target_weights
            .iter()
            .zip(target_values)
            .map(|(w, x)| w * x)
            .chain(
                self.candidate_weights
                    .iter()
                    .zip(candidate_values)
                    .map(|(w, x)| w * x),
            )
            .chain(
                self.interaction_weights
                    .iter()
                    .zip(target_values.iter().zip(candidate_values))
                    .map(|(w, (x, y))| w * x * y),
            )
            .sum();
        self.bias + linear
    }
}

impl Default for LogisticPredictor {
    fn default() -> Self {
        Self::untrained()
    }
}

impl Predictor for LogisticPredictor {
    fn is_available(&self) -> bool {
        !(self.target_weights.is_empty()
            && self.candidate_weights.is_empty()
            && self.interaction_weights.is_empty())
    }

    fn predict(
        &self,
        target: &FeatureVector,
        candidate: &FeatureVector,
    ) -> Result<f32, PredictError> {
        if !self.is_available() {
            return Err(PredictError::Unavailable);
        }
        self.check_shape()?;
        let probability = sigmoid(self.logit(target, candidate));
        if probability.is_finite() {
            Ok(probability)
        } else {
            Err(PredictError::InvalidOutput { value: probability })
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the logistic function is defined with floating-point maths"
)]
fn sigmoid(logit: f32) -> f32 {
    1.0_f32 / (1.0_f32 + (-logit).exp())
}
