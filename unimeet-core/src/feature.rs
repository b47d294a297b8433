//! Fixed-width numeric encoding of a profile.
//!
//! Every profile encodes to the same width, [`FEATURE_DIM`], so learned
//! predictors can rely on a stable input shape. Components are always finite
//! and lie in `0.0..=1.0`; [`FeatureVector::set`] enforces both.

use thiserror::Error;

/// Width of every [`FeatureVector`].
pub const FEATURE_DIM: usize = 50;

/// Errors returned by [`FeatureVector::set`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FeatureError {
    /// The index lies beyond [`FEATURE_DIM`].
    #[error("feature index {index} is outside the vector of width {}", FEATURE_DIM)]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
    },
    /// The value was NaN, infinite, or outside `0.0..=1.0`.
    #[error("feature value {value} at index {index} is not in 0.0..=1.0")]
    InvalidValue {
        /// Requested position.
        index: usize,
        /// Rejected value.
        value: f32,
    },
}

/// A profile's feature encoding.
///
/// # Examples
/// ```
/// use unimeet_core::{FEATURE_DIM, FeatureVector};
///
/// # fn main() -> Result<(), unimeet_core::FeatureError> {
/// let mut vector = FeatureVector::zeros();
/// vector.set(3, 1.0)?;
/// assert_eq!(vector.as_slice().len(), FEATURE_DIM);
/// assert_eq!(vector.get(3), Some(1.0));
/// assert!(vector.set(FEATURE_DIM, 1.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f32; FEATURE_DIM],
}

impl FeatureVector {
    /// The all-zero vector, used whenever encoding has no signal to offer.
    #[must_use]
    pub const fn zeros() -> Self {
        Self {
            values: [0.0_f32; FEATURE_DIM],
        }
    }

    /// Write a component.
    ///
    /// # Errors
    /// Returns [`FeatureError::IndexOutOfRange`] for positions beyond the
    /// vector and [`FeatureError::InvalidValue`] for values that are not
    /// finite or fall outside `0.0..=1.0`.
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), FeatureError> {
        if !value.is_finite() || !(0.0_f32..=1.0_f32).contains(&value) {
            return Err(FeatureError::InvalidValue { index, value });
        }
        let slot = self
            .values
            .get_mut(index)
            .ok_or(FeatureError::IndexOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    /// Read a component.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Borrow the components.
    #[must_use]
    pub const fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Report whether every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&value| value == 0.0_f32)
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zeros_is_zero() {
        assert!(FeatureVector::zeros().is_zero());
        assert_eq!(FeatureVector::default(), FeatureVector::zeros());
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    #[case(1.0)]
    fn set_accepts_unit_interval(#[case] value: f32) {
        let mut vector = FeatureVector::zeros();
        assert_eq!(vector.set(FEATURE_DIM - 1, value), Ok(()));
        assert_eq!(vector.get(FEATURE_DIM - 1), Some(value));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    fn set_rejects_invalid_values(#[case] value: f32) {
        let mut vector = FeatureVector::zeros();
        assert!(matches!(
            vector.set(0, value),
            Err(FeatureError::InvalidValue { index: 0, .. })
        ));
        assert!(vector.is_zero());
    }

    #[rstest]
    fn set_rejects_out_of_range_index() {
        let mut vector = FeatureVector::zeros();
        assert_eq!(
            vector.set(FEATURE_DIM, 1.0),
            Err(FeatureError::IndexOutOfRange { index: FEATURE_DIM })
        );
    }
}
