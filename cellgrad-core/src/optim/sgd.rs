use crate::autograd::Cell;
use crate::error::CellGradError;
use crate::optim::optimizer_trait::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer with momentum.
///
/// For each parameter `p` with gradient `g` and velocity `v`:
///
/// ```text
/// v = momentum * v + g
/// p = p - lr * v
/// ```
///
/// With `momentum == 0` this is plain gradient descent.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Cell>,
    lr: f64,
    momentum: f64,
    // One velocity per parameter, by position.
    velocities: Vec<f64>,
}

fn check_rate(name: &str, value: f64) -> Result<(), CellGradError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CellGradError::contract(
            "Sgd",
            format!("{} must be finite and non-negative, got {}", name, value),
        ));
    }
    Ok(())
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize. Every one must be a leaf.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (0.0 disables momentum).
    ///
    /// # Errors
    /// `ContractError` if `lr` or `momentum` is negative or non-finite.
    pub fn new(
        params: impl IntoIterator<Item = Cell>,
        lr: f64,
        momentum: f64,
    ) -> Result<Self, CellGradError> {
        check_rate("learning rate", lr)?;
        check_rate("momentum", momentum)?;
        let params: Vec<Cell> = params.into_iter().collect();
        let velocities = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            lr,
            momentum,
            velocities,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate, e.g. for a decay schedule.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), CellGradError> {
        check_rate("learning rate", lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn params(&self) -> &[Cell] {
        &self.params
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), CellGradError> {
        // Validate everything first so a failing step updates nothing.
        for param in &self.params {
            if !param.is_live() {
                return Err(CellGradError::contract(
                    "Sgd::step",
                    format!("parameter #{} was released from its graph", param.id().index()),
                ));
            }
            if !param.is_leaf() {
                return Err(CellGradError::contract(
                    "Sgd::step",
                    format!("parameter #{} is not a leaf", param.id().index()),
                ));
            }
        }

        for (param, velocity) in self.params.iter().zip(self.velocities.iter_mut()) {
            let grad = param.grad();
            *velocity = self.momentum * *velocity + grad;
            param.set_value(param.value() - self.lr * *velocity)?;
        }
        log::debug!(
            "Sgd::step: updated {} parameters (lr={}, momentum={})",
            self.params.len(),
            self.lr,
            self.momentum
        );
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            if param.is_live() {
                param.zero_grad();
            } else {
                log::warn!(
                    "Sgd::zero_grad: skipping released parameter #{}",
                    param.id().index()
                );
            }
        }
    }
}
