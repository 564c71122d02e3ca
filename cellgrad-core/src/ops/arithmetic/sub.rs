// cellgrad-core/src/ops/arithmetic/sub.rs

use super::{add_op, neg_op};
use crate::autograd::Cell;
use crate::error::CellGradError;
use crate::ops::{validate, Operand};

/// Subtracts two operands, recorded as `a + (-b)`.
///
/// A constant `b` is negated before being coerced to a leaf; a cell `b` gets
/// a negation node.
pub fn sub_op<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
    let (a, b) = (a.into(), b.into());
    validate("sub", a, b)?;
    match b {
        Operand::Cell(b) => {
            let negated = neg_op(b)?;
            add_op(a, &negated)
        }
        Operand::Constant(b) => add_op(a, -b),
    }
}

impl Cell {
    /// `self - rhs`. See [`sub_op`].
    pub fn sub<'b>(&self, rhs: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
        sub_op(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Graph;

    #[test]
    fn test_sub_cells() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let a = graph.leaf(5.0);
        let b = graph.leaf(7.0);
        let y = a.sub(&b)?;
        assert_eq!(y.value(), -2.0);
        assert_eq!(y.op_tag(), "+");
        y.backward()?;
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_sub_constants() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let x = graph.leaf(3.0);
        assert_eq!(x.sub(1.0)?.value(), 2.0);
        let y = sub_op(1.0, &x)?;
        assert_eq!(y.value(), -2.0);
        y.backward()?;
        assert_eq!(x.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_sub_self_is_zero_with_cancelling_gradient() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let x = graph.leaf(3.0);
        let y = x.sub(&x)?;
        assert_eq!(y.value(), 0.0);
        y.backward()?;
        assert_eq!(x.grad(), 0.0);
        Ok(())
    }
}
