use crate::autograd::Cell;
use crate::error::CellGradError;

/// The base trait for all neural network modules (neurons, layers, MLPs).
///
/// A module maps a slice of input cells to a vector of output cells, recording
/// the computation in the inputs' graph, and exposes its learnable parameters
/// so an optimizer can update them.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `ContractError` if the number of inputs does not match the module, or
    /// any error raised by the underlying operations.
    fn forward(&self, inputs: &[Cell]) -> Result<Vec<Cell>, CellGradError>;

    /// Returns every learnable parameter of the module, sub-modules included.
    ///
    /// The order is stable across calls, which lets optimizers keep
    /// per-parameter state by position.
    fn parameters(&self) -> Vec<Cell>;

    /// Resets the gradient of every live parameter to 0. Released parameters
    /// are skipped with a warning.
    fn zero_grad(&self) {
        for param in self.parameters() {
            if param.is_live() {
                param.zero_grad();
            } else {
                log::warn!(
                    "Module::zero_grad: skipping released parameter #{}",
                    param.id().index()
                );
            }
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
