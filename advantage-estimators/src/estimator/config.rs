//! Configuration of [`AdvantageEstimator`](super::AdvantageEstimator).
use super::AdvantageEstimator;
use crate::error::AdvantageError;
use anyhow::Result;
use log::info;
use ndarray::{Array2, ArrayView2};
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Estimator together with the scalars it is called with.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct AdvantageConfig {
    /// Estimation policy.
    pub estimator: AdvantageEstimator,

    /// Discount factor.
    pub gamma: f64,

    /// Number of trailing steps of the window used only as lookahead.
    pub n_extra_steps: usize,
}

impl Default for AdvantageConfig {
    fn default() -> Self {
        Self {
            estimator: AdvantageEstimator::default(),
            gamma: 0.99,
            n_extra_steps: 1,
        }
    }
}

impl AdvantageConfig {
    /// Sets the estimation policy.
    pub fn estimator(mut self, v: AdvantageEstimator) -> Self {
        self.estimator = v;
        self
    }

    /// Sets the discount factor.
    pub fn gamma(mut self, v: f64) -> Self {
        self.gamma = v;
        self
    }

    /// Sets the number of extra steps.
    pub fn n_extra_steps(mut self, v: usize) -> Self {
        self.n_extra_steps = v;
        self
    }

    /// Computes advantages with the configured estimator and scalars.
    pub fn compute<F: Float + Debug>(
        &self,
        rewards: ArrayView2<F>,
        returns: ArrayView2<F>,
        values: ArrayView2<F>,
    ) -> Result<Array2<F>, AdvantageError> {
        let gamma = <F as NumCast>::from(self.gamma).ok_or_else(|| {
            AdvantageError::InvalidParameter(format!("gamma = {}", self.gamma))
        })?;
        self.estimator
            .compute(rewards, returns, values, gamma, self.n_extra_steps)
    }

    /// Constructs [`AdvantageConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Load advantage config from {:?}", path);
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`AdvantageConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempdir::TempDir;

    #[test]
    fn test_serde_advantage_config() -> Result<()> {
        let config = AdvantageConfig::default()
            .estimator(AdvantageEstimator::TdLambda { lambda: 0.8 })
            .gamma(0.9)
            .n_extra_steps(3);

        let dir = TempDir::new("advantage_config")?;
        let path = dir.path().join("advantage_config.yaml");
        config.save(&path)?;
        let config_ = AdvantageConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_default_lambda_in_yaml() -> Result<()> {
        let yaml = "estimator:\n  TdLambda: {}\ngamma: 0.9\nn_extra_steps: 1\n";
        let config: AdvantageConfig = serde_yaml::from_str(yaml)?;
        assert_eq!(
            config.estimator,
            AdvantageEstimator::TdLambda { lambda: 0.95 }
        );

        let yaml = "estimator: TdK\ngamma: 0.9\nn_extra_steps: 2\n";
        let config: AdvantageConfig = serde_yaml::from_str(yaml)?;
        assert_eq!(config.estimator, AdvantageEstimator::TdK);
        Ok(())
    }

    #[test]
    fn test_compute() -> Result<()> {
        let rewards = array![[1.0f64, 1., 1., 1.]];
        let values = array![[1.0f64, 2., 3., 4.]];
        let config = AdvantageConfig::default()
            .estimator(AdvantageEstimator::TdK)
            .gamma(0.9)
            .n_extra_steps(2);
        let adv = config.compute(rewards.view(), values.view(), values.view())?;
        assert!((adv[[0, 0]] - 3.23).abs() < 1e-9);
        assert!((adv[[0, 1]] - 3.04).abs() < 1e-9);
        Ok(())
    }
}
