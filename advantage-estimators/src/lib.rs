#![warn(missing_docs)]
//! Advantage estimators for policy-gradient training.
//!
//! Every estimator reads a batch of trajectories given as three arrays of
//! shape `[batch_size, length]` (`rewards`, `returns`, `values`) and returns
//! advantages of shape `[batch_size, length - n_extra_steps]`. The trailing
//! `n_extra_steps` columns of the window are lookahead only.
//!
//! ```
//! use advantage_estimators::{AdvantageEstimator, monte_carlo};
//! use ndarray::array;
//!
//! let rewards = array![[0.0f32, 0.0, 0.0, 0.0]];
//! let returns = array![[1.0f32, 2.0, 3.0, 4.0]];
//! let values = array![[0.5f32, 1.0, 1.5, 2.0]];
//!
//! let adv = monte_carlo(rewards.view(), returns.view(), values.view(), 0.9, 1).unwrap();
//! assert_eq!(adv, array![[0.5f32, 1.0, 1.5]]);
//!
//! let estimator: AdvantageEstimator = "td_lambda".parse().unwrap();
//! let adv = estimator
//!     .compute(rewards.view(), returns.view(), values.view(), 0.9, 1)
//!     .unwrap();
//! assert_eq!(adv.dim(), (1, 3));
//! ```
pub mod error;
pub mod stats;

mod batch;
pub use batch::BatchShape;

mod estimator;
pub use estimator::{
    monte_carlo, td_k, td_lambda, AdvantageConfig, AdvantageEstimator, DEFAULT_LAMBDA,
};
