// cellgrad-core/src/ops/arithmetic/div.rs

use super::{mul_op, pow_op};
use crate::autograd::Cell;
use crate::error::CellGradError;
use crate::ops::{validate, Operand};

/// Divides two operands, recorded as `a * b^-1`.
///
/// A constant divisor is inverted directly (`a * (1/b)`); a cell divisor
/// gets a `**-1` node. Gradients follow from the mul and pow rules.
///
/// # Errors
/// * `DomainError` if the divisor is zero (constant or cell value).
/// * Contract errors of [`mul_op`].
pub fn div_op<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
    let (a, b) = (a.into(), b.into());
    validate("div", a, b)?;
    match b {
        Operand::Cell(divisor) => {
            let inverse = pow_op(divisor, -1.0)?;
            mul_op(a, &inverse)
        }
        Operand::Constant(divisor) => {
            if divisor == 0.0 {
                return Err(CellGradError::domain("div", divisor, "division by zero"));
            }
            mul_op(a, 1.0 / divisor)
        }
    }
}

impl Cell {
    /// `self / rhs`. See [`div_op`].
    pub fn div<'b>(&self, rhs: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
        div_op(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::check_grad;
    use crate::autograd::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_div_cells() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let a = graph.leaf(3.0);
        let b = graph.leaf(4.0);
        let y = a.div(&b)?;
        assert_relative_eq!(y.value(), 0.75, epsilon = 1e-12);
        assert_eq!(y.op_tag(), "*");

        y.backward()?;
        assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(b.grad(), -3.0 / 16.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_div_by_constant_and_of_constant() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let x = graph.leaf(2.0);
        assert_eq!(x.div(4.0)?.value(), 0.5);
        let inv = div_op(1.0, &x)?;
        assert_eq!(inv.value(), 0.5);
        inv.backward()?;
        assert_relative_eq!(x.grad(), -0.25, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_div_by_zero_is_a_domain_error() {
        let graph = Graph::new();
        let x = graph.leaf(2.0);
        let zero = graph.leaf(0.0);
        assert!(x.div(0.0).unwrap_err().is_domain_error());
        assert!(x.div(&zero).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_div_grad_check() {
        let result = check_grad(|_, x| x[0].div(&x[1]), &[0.9, -2.2], 1e-6, 1e-6);
        assert_eq!(result, Ok(()));
    }
}
