//! Advantage estimators and their selection by configuration.
mod config;
mod monte_carlo;
mod td_k;
mod td_lambda;
use crate::error::AdvantageError;
pub use config::AdvantageConfig;
pub use monte_carlo::monte_carlo;
use ndarray::{Array2, ArrayView2};
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, str::FromStr};
pub use td_k::td_k;
pub use td_lambda::{td_lambda, DEFAULT_LAMBDA};

fn default_lambda() -> f64 {
    DEFAULT_LAMBDA
}

/// Advantage estimation policy.
///
/// All the variants are computed through [`AdvantageEstimator::compute`],
/// which has the signature shared by [`monte_carlo`], [`td_k`] and
/// [`td_lambda`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub enum AdvantageEstimator {
    /// See [`monte_carlo`].
    MonteCarlo,

    /// See [`td_k`]. `k` is the number of extra steps.
    TdK,

    /// See [`td_lambda`].
    TdLambda {
        /// Weight of the lambda-return of the next step.
        #[serde(default = "default_lambda")]
        lambda: f64,
    },
}

impl Default for AdvantageEstimator {
    fn default() -> Self {
        Self::TdLambda {
            lambda: DEFAULT_LAMBDA,
        }
    }
}

impl AdvantageEstimator {
    /// Returns the name used to select the estimator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MonteCarlo => "monte_carlo",
            Self::TdK => "td_k",
            Self::TdLambda { .. } => "td_lambda",
        }
    }

    /// Computes advantages of shape `[batch_size, length - n_extra_steps]`.
    ///
    /// # Panics
    ///
    /// Panics for [`AdvantageEstimator::TdK`] if `n_extra_steps == 0`.
    pub fn compute<F: Float + Debug>(
        &self,
        rewards: ArrayView2<F>,
        returns: ArrayView2<F>,
        values: ArrayView2<F>,
        gamma: F,
        n_extra_steps: usize,
    ) -> Result<Array2<F>, AdvantageError> {
        match self {
            Self::MonteCarlo => monte_carlo(rewards, returns, values, gamma, n_extra_steps),
            Self::TdK => td_k(rewards, returns, values, gamma, n_extra_steps),
            Self::TdLambda { lambda } => {
                let lambda = <F as NumCast>::from(*lambda).ok_or_else(|| {
                    AdvantageError::InvalidParameter(format!("lambda = {}", lambda))
                })?;
                td_lambda(rewards, returns, values, gamma, n_extra_steps, lambda)
            }
        }
    }
}

impl FromStr for AdvantageEstimator {
    type Err = AdvantageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monte_carlo" => Ok(Self::MonteCarlo),
            "td_k" => Ok(Self::TdK),
            "td_lambda" => Ok(Self::default()),
            _ => Err(AdvantageError::InvalidParameter(format!(
                "unknown advantage estimator: {}",
                s
            ))),
        }
    }
}
