//! Statistics and normalization of advantages.
use log::debug;
use ndarray::{Array2, ArrayView2};
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};

/// Summary statistics of a batch of advantages.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub struct AdvantageStats {
    /// Mean.
    pub mean: f64,

    /// Population standard deviation.
    pub std: f64,

    /// Minimum.
    pub min: f64,

    /// Maximum.
    pub max: f64,
}

impl AdvantageStats {
    /// Returns the statistics of `advantages`, or `None` if it is empty.
    pub fn from_advantages<F: Float>(advantages: &ArrayView2<F>) -> Option<Self> {
        let (mean, std) = mean_std(advantages)?;
        let (min, max) = advantages
            .iter()
            .fold((F::infinity(), F::neg_infinity()), |(lo, hi), &a| {
                (lo.min(a), hi.max(a))
            });

        Some(Self {
            mean: mean.to_f64()?,
            std: std.to_f64()?,
            min: min.to_f64()?,
            max: max.to_f64()?,
        })
    }
}

fn mean_std<F: Float>(a: &ArrayView2<F>) -> Option<(F, F)> {
    if a.is_empty() {
        return None;
    }
    let n = <F as NumCast>::from(a.len())?;
    let mean = a.fold(F::zero(), |acc, &x| acc + x) / n;
    let var = a.fold(F::zero(), |acc, &x| acc + (x - mean) * (x - mean)) / n;
    Some((mean, var.sqrt()))
}

/// Returns `(advantages - mean) / (std + eps)`.
pub fn normalize<F: Float>(advantages: &ArrayView2<F>, eps: F) -> Array2<F> {
    match mean_std(advantages) {
        None => advantages.to_owned(),
        Some((mean, std)) => {
            if std == F::zero() {
                debug!("Advantages have zero variance");
            }
            advantages.mapv(|a| (a - mean) / (std + eps))
        }
    }
}
