use crate::autograd::{Cell, Op};
use crate::error::CellGradError;
use crate::ops::unary;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(a, 0)`.
///
/// Backward passes the gradient through only when the output is positive;
/// at exactly 0 the gradient is 0.
pub fn relu_op(a: &Cell) -> Result<Cell, CellGradError> {
    let (graph, a) = unary("relu", a)?;
    let value = if a.value > 0.0 { a.value } else { 0.0 };
    Ok(graph.record(value, Op::Relu(a.index)))
}

impl Cell {
    /// `max(self, 0)`. See [`relu_op`].
    pub fn relu(&self) -> Result<Cell, CellGradError> {
        relu_op(self)
    }
}

// --- Tests ---
