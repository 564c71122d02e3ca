use crate::error::CellGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every managed parameter, using the
    /// gradients accumulated by the last backward pass(es).
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `CellGradError` otherwise.
    fn step(&mut self) -> Result<(), CellGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this is typically
    /// called once per training iteration.
    fn zero_grad(&mut self);
}
