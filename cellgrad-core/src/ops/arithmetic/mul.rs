// cellgrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::{Cell, Op};
use crate::error::CellGradError;
use crate::ops::{binary, Operand};

/// Multiplies two operands: `a * b`.
///
/// Backward: `a += g * b`, `b += g * a`, evaluated at the recorded forward
/// values. `a * a` receives both contributions (`2a * g`).
///
/// # Errors
/// Same contract errors as [`add_op`](super::add_op).
pub fn mul_op<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
    let (graph, a, b) = binary("mul", a.into(), b.into())?;
    Ok(graph.record(a.value * b.value, Op::Mul(a.index, b.index)))
}

impl Cell {
    /// `self * rhs`. See [`mul_op`].
    pub fn mul<'b>(&self, rhs: impl Into<Operand<'b>>) -> Result<Cell, CellGradError> {
        mul_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
