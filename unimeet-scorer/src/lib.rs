//! Compatibility scoring for UniMeet profiles.
//!
//! The crate provides three layers:
//! - **Feature encoding** turns a [`UserProfile`](unimeet_core::UserProfile)
//!   into the fixed-width [`FeatureVector`](unimeet_core::FeatureVector)
//!   consumed by learned models.
//! - **Rule-based scoring** compares two profiles dimension by dimension and
//!   aggregates the results with a [`DimensionWeights`] table.
//! - **Scorer selection** in [`CompatibilityEngine`] consults an optional
//!   [`Predictor`](unimeet_core::Predictor) and falls back to the rules
//!   whenever the model is absent or fails.
//!
//! With the `logistic` feature the crate also ships [`LogisticPredictor`], a
//! model persisted to disk with `bincode`.
//!
//! # Examples
//!
//! ```
//! use unimeet_core::{Mbti, UserProfile};
//! use unimeet_scorer::CompatibilityEngine;
//!
//! let engine = CompatibilityEngine::new();
//! let a = UserProfile::new("a").with_mbti(Mbti::Intj);
//! let b = UserProfile::new("b").with_mbti(Mbti::Enfp);
//! let breakdown = engine.compute_compatibility(&a, &b);
//! assert_eq!(breakdown.mbti, 0.9);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod encoder;
mod engine;
#[cfg(feature = "logistic")]
mod error;
#[cfg(feature = "logistic")]
mod logistic;
mod rules;
mod weights;

pub use encoder::{
    DEFAULT_REFERENCE_YEAR, ENCODED_WIDTH, FeatureEncoder, INTEREST_VOCABULARY,
    PERSONALITY_VOCABULARY,
};
pub use engine::{CompatibilityEngine, EngineStatus};
#[cfg(feature = "logistic")]
pub use error::PredictorFileError;
#[cfg(feature = "logistic")]
pub use logistic::{LogisticPredictor, predictor_bincode_options};
pub use rules::{
    COMPLEMENTARY_MBTI, NEUTRAL_SCORE, RuleBasedScorer, age_score, department_score,
    height_score, interest_score, is_complementary, mbti_score, personality_score,
};
pub use weights::{DimensionWeights, WeightsError};
