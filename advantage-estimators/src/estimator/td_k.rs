use crate::{
    batch::{check_unit_interval, BatchShape},
    error::AdvantageError,
};
use log::trace;
use ndarray::{s, Array2, ArrayView2, Zip};
use num_traits::Float;
use std::fmt::Debug;

/// TD-k advantage with `k = n_extra_steps`.
///
/// The advantage at step `t` is
///
/// ```text
/// gamma^k * values[t + k] - values[t] + sum_{i < k} gamma * rewards[t + i]
/// ```
///
/// Each reward in the window is weighted by a flat `gamma`, not by
/// `gamma^(i + 1)`. Trainers tuned against this estimator depend on that
/// weighting, so it is kept as is. `returns` is not used.
///
/// # Panics
///
/// Panics if `n_extra_steps == 0`.
pub fn td_k<F: Float + Debug>(
    rewards: ArrayView2<F>,
    returns: ArrayView2<F>,
    values: ArrayView2<F>,
    gamma: F,
    n_extra_steps: usize,
) -> Result<Array2<F>, AdvantageError> {
    let k = n_extra_steps;
    assert!(k > 0, "td_k requires n_extra_steps > 0");

    let shape = BatchShape::check(&rewards, &returns, &values)?;
    let retained = shape.retained_nonempty(k)?;
    check_unit_interval("gamma", gamma)?;
    trace!(
        "td_k: shape = {:?}, gamma = {:?}, k = {}",
        shape,
        gamma,
        k
    );

    let gamma_k = gamma.powi(k as i32);
    let mut advantages = Zip::from(values.slice(s![.., k..]))
        .and(values.slice(s![.., ..retained]))
        .map_collect(|&v_next, &v| gamma_k * v_next - v);

    for i in 0..k {
        Zip::from(&mut advantages)
            .and(rewards.slice(s![.., i..retained + i]))
            .for_each(|a, &r| *a = *a + gamma * r);
    }

    Ok(advantages)
}
