//! Shape validation of trajectory batches.
use crate::error::AdvantageError;
use ndarray::ArrayView2;
use num_traits::Float;
use std::fmt::Debug;

/// Shape `[batch_size, length]` shared by `rewards`, `returns` and `values`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchShape {
    /// Number of trajectories in the batch.
    pub batch_size: usize,

    /// Number of steps in each trajectory window.
    pub length: usize,
}

impl BatchShape {
    /// Checks that the three arrays share the shape of `rewards`.
    pub fn check<F>(
        rewards: &ArrayView2<F>,
        returns: &ArrayView2<F>,
        values: &ArrayView2<F>,
    ) -> Result<Self, AdvantageError> {
        let expected = rewards.dim();
        for (name, actual) in [("returns", returns.dim()), ("values", values.dim())] {
            if actual != expected {
                return Err(AdvantageError::ShapeMismatch {
                    name,
                    expected,
                    actual,
                });
            }
        }

        Ok(Self {
            batch_size: expected.0,
            length: expected.1,
        })
    }

    /// Number of steps kept in the output when every step may be dropped.
    ///
    /// Fails only if `n_extra_steps` exceeds the trajectory length.
    pub fn retained(&self, n_extra_steps: usize) -> Result<usize, AdvantageError> {
        self.length
            .checked_sub(n_extra_steps)
            .ok_or(AdvantageError::TooShort {
                length: self.length,
                n_extra_steps,
            })
    }

    /// Number of steps kept in the output, requiring at least one.
    pub fn retained_nonempty(&self, n_extra_steps: usize) -> Result<usize, AdvantageError> {
        match self.retained(n_extra_steps)? {
            0 => Err(AdvantageError::TooShort {
                length: self.length,
                n_extra_steps,
            }),
            n => Ok(n),
        }
    }
}

/// Checks `0 <= v <= 1`; NaN is rejected.
pub(crate) fn check_unit_interval<F: Float + Debug>(
    name: &str,
    v: F,
) -> Result<(), AdvantageError> {
    if v >= F::zero() && v <= F::one() {
        Ok(())
    } else {
        Err(AdvantageError::InvalidParameter(format!(
            "{} must be in [0, 1], got {:?}",
            name, v
        )))
    }
}
