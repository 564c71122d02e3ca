// cellgrad-core/src/ops/arithmetic/add.rs

use crate::autograd::{Cell, Op};
use crate::error::CellGradError;
use crate::ops::{binary, Operand};

/// Adds two operands: `a + b`.
///
/// Either side may be a raw `f64`, which is recorded as a fresh leaf.
/// Backward pushes the incoming gradient unchanged to both operands.
///
/// # Errors
/// `ContractError` if both operands are constants, if the cells belong to
/// different graphs, or if a cell was released.
pub fn add_op<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
    let (graph, a, b) = binary("add", a.into(), b.into())?;
    Ok(graph.record(a.value + b.value, Op::Add(a.index, b.index)))
}

impl Cell {
    /// `self + rhs`. See [`add_op`].
    pub fn add<'b>(&self, rhs: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
        add_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
