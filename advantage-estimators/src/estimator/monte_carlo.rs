use crate::{batch::BatchShape, error::AdvantageError};
use log::trace;
use ndarray::{s, Array2, ArrayView2, Zip};
use num_traits::Float;
use std::fmt::Debug;

/// Monte Carlo advantage, `returns - values` on the retained steps.
///
/// `rewards` and `gamma` are not used; they are accepted so that all the
/// estimators share one signature.
pub fn monte_carlo<F: Float + Debug>(
    rewards: ArrayView2<F>,
    returns: ArrayView2<F>,
    values: ArrayView2<F>,
    gamma: F,
    n_extra_steps: usize,
) -> Result<Array2<F>, AdvantageError> {
    let shape = BatchShape::check(&rewards, &returns, &values)?;
    let retained = shape.retained(n_extra_steps)?;
    trace!(
        "monte_carlo: shape = {:?}, gamma = {:?}, n_extra_steps = {}",
        shape,
        gamma,
        n_extra_steps
    );

    Ok(Zip::from(returns.slice(s![.., ..retained]))
        .and(values.slice(s![.., ..retained]))
        .map_collect(|&g, &v| g - v))
}
