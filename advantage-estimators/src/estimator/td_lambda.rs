use crate::{
    batch::{check_unit_interval, BatchShape},
    error::AdvantageError,
};
use log::trace;
use ndarray::{s, Array2, ArrayView2, Zip};
use num_traits::Float;
use std::fmt::Debug;

/// Default value of `lambda` for [`td_lambda`].
pub const DEFAULT_LAMBDA: f64 = 0.95;

/// TD-lambda advantage.
///
/// The lambda-return of each step is computed by a backward scan over the
/// trajectory, bootstrapped with the value of the last step:
///
/// ```text
/// G[T-1] = values[T-1]
/// G[t]   = rewards[t] + gamma * ((1 - lambda) * values[t+1] + lambda * G[t+1])
/// ```
///
/// The advantage is `G - values` on the retained steps. `lambda = 0` gives the
/// one-step TD residual and `lambda = 1` the discounted return bootstrapped
/// at the end of the window. `returns` only contributes its shape.
pub fn td_lambda<F: Float + Debug>(
    rewards: ArrayView2<F>,
    returns: ArrayView2<F>,
    values: ArrayView2<F>,
    gamma: F,
    n_extra_steps: usize,
    lambda: F,
) -> Result<Array2<F>, AdvantageError> {
    let shape = BatchShape::check(&rewards, &returns, &values)?;
    let retained = shape.retained_nonempty(n_extra_steps)?;
    check_unit_interval("gamma", gamma)?;
    check_unit_interval("lambda", lambda)?;
    trace!(
        "td_lambda: shape = {:?}, gamma = {:?}, lambda = {:?}, n_extra_steps = {}",
        shape,
        gamma,
        lambda,
        n_extra_steps
    );

    let mut td_returns = Array2::<F>::zeros(rewards.dim());
    let last = shape.length - 1;

    // Rows are independent, steps within a row must be visited backward.
    Zip::from(td_returns.rows_mut())
        .and(rewards.rows())
        .and(values.rows())
        .for_each(|mut g, r, v| {
            g[last] = v[last];
            for t in (0..last).rev() {
                g[t] = r[t] + gamma * ((F::one() - lambda) * v[t + 1] + lambda * g[t + 1]);
            }
        });

    let mut advantages = td_returns.slice_move(s![.., ..retained]);
    Zip::from(&mut advantages)
        .and(values.slice(s![.., ..retained]))
        .for_each(|a, &v| *a = *a - v);

    Ok(advantages)
}
