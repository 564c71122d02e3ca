// cellgrad-core/src/ops/arithmetic/neg.rs

use super::mul_op;
use crate::autograd::Cell;
use crate::error::CellGradError;

/// Negates `a`, recorded as `a * -1`.
pub fn neg_op(a: &Cell) -> Result<Cell, CellGradError> {
    mul_op(a, -1.0)
}

impl Cell {
    /// `-self`. See [`neg_op`].
    pub fn neg(&self) -> Result<Cell, CellGradError> {
        neg_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Graph;

    #[test]
    fn test_neg() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let a = graph.leaf(2.5);
        let y = a.neg()?;
        assert_eq!(y.value(), -2.5);
        assert_eq!(y.op_tag(), "*");
        y.backward()?;
        assert_eq!(a.grad(), -1.0);
        Ok(())
    }
}
