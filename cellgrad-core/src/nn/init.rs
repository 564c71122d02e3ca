use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use rand_distr::Normal;

use crate::autograd::{Cell, Graph};
use crate::error::CellGradError;

/// How fresh parameters are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitStrategy {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for InitStrategy {
    fn default() -> Self {
        InitStrategy::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl InitStrategy {
    /// Checks the strategy parameters.
    ///
    /// # Errors
    /// `ContractError` for non-finite bounds, `low >= high`, a range whose width
    /// overflows `f64`, or a negative or non-finite standard deviation.
    pub fn validate(&self) -> Result<(), CellGradError> {
        match *self {
            InitStrategy::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
                    return Err(CellGradError::contract(
                        "init",
                        format!("invalid uniform bounds [{}, {})", low, high),
                    ));
                }
            }
            InitStrategy::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(CellGradError::contract(
                        "init",
                        format!("invalid normal parameters (mean={}, std={})", mean, std),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Draws `count` values.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, CellGradError> {
        self.validate()?;
        let values = match *self {
            InitStrategy::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..count).map(|_| dist.sample(rng)).collect()
            }
            InitStrategy::Normal { mean, std } => {
                let dist = Normal::new(mean, std).map_err(|e| {
                    CellGradError::contract("init", format!("normal distribution: {}", e))
                })?;
                (0..count).map(|_| dist.sample(rng)).collect()
            }
        };
        Ok(values)
    }

    /// Draws `count` values and registers each one as a parameter of `graph`.
    pub fn parameters<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Cell>, CellGradError> {
        Ok(self
            .sample(count, rng)?
            .into_iter()
            .map(|v| graph.parameter(v))
            .collect())
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
