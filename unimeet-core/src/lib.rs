//! Core domain types for the UniMeet compatibility engine.
//!
//! The crate defines the profile model shared by every component, the
//! fixed-width [`FeatureVector`] consumed by learned predictors, the
//! [`ScoreBreakdown`] produced by scorers, and the traits that form the
//! engine's seams:
//!
//! - [`CompatibilityScorer`] scores one profile against another.
//! - [`Predictor`] is the optional learned model.
//! - [`Matcher`] ranks a candidate pool against a target profile.
//!
//! Scoring is pure: nothing here holds mutable state, so every type can be
//! shared freely across threads.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod breakdown;
pub mod department;
pub mod feature;
pub mod matcher;
pub mod mbti;
pub mod predictor;
pub mod profile;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use breakdown::{CompatibilityReport, Dimension, MatchResult, ScoreBreakdown};
pub use department::DepartmentCategory;
pub use feature::{FEATURE_DIM, FeatureError, FeatureVector};
pub use matcher::{DEFAULT_TOP_K, MatchRequest, MatchRequestError, Matcher};
pub use mbti::Mbti;
pub use predictor::{PredictError, Predictor};
pub use profile::{Gender, UserProfile};
pub use scorer::{CompatibilityScorer, sanitise_score};
