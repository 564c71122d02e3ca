use approx::relative_eq;
use thiserror::Error;

use super::cell::Cell;
use super::graph::Graph;
use crate::error::CellGradError;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(CellGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(CellGradError),
}

impl From<CellGradError> for GradCheckError {
    fn from(err: CellGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must
/// return the scalar root. It is evaluated once with backward, then twice per
/// input on perturbed copies (`x ± epsilon`), each time on a new graph.
///
/// A gradient passes when it is within `tolerance` of the numerical estimate,
/// either absolutely or relative to the larger magnitude.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&Graph, &[Cell]) -> Result<Cell, CellGradError>,
{
    // --- Analytical pass ---
    let graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- Numerical pass ---
    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let graph = Graph::new();
        let leaves = graph.leaves(values);
        let out = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok(out.value())
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;

        let loss_plus = evaluate(&plus)?;
        let loss_minus = evaluate(&minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let close = relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        );
        log::trace!(
            "check_grad: input {} analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_accepts_correct_gradients() {
        let result = check_grad(
            |_, x| x[0].mul(&x[1])?.add(&x[0])?.tanh(),
            &[0.4, -0.9],
            1e-6,
            1e-5,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_reports_forward_errors() {
        let result = check_grad(|_, x| x[0].ln(), &[-1.0], 1e-6, 1e-5);
        match result {
            Err(GradCheckError::ForwardPassError(e)) => assert!(e.is_domain_error()),
            other => panic!("expected ForwardPassError, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_detects_wrong_gradients() {
        // The output ignores the graph structure of x[0]: its value is copied into
        // a fresh leaf, so the analytical gradient of x[0] stays 0.
        let result = check_grad(
            |graph, x| {
                let detached = graph.leaf(x[0].value());
                detached.mul(&detached)
            },
            &[2.0],
            1e-6,
            1e-5,
        );
        match result {
            Err(GradCheckError::GradientMismatch { input_index, analytical_grad, .. }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 0.0);
            }
            other => panic!("expected GradientMismatch, got {:?}", other),
        }
    }
}
