use crate::autograd::{Cell, Op};
use crate::error::CellGradError;
use crate::ops::unary;

/// Computes the natural logarithm `ln(a)`.
///
/// Backward: `a += g / a`.
///
/// # Errors
/// `DomainError` if `a` is not strictly positive (NaN included). The check
/// happens here, at forward time, and no cell is recorded.
pub fn ln_op(a: &Cell) -> Result<Cell, CellGradError> {
    let (graph, a) = unary("ln", a)?;
    if !(a.value > 0.0) {
        return Err(CellGradError::domain(
            "ln",
            a.value,
            "logarithm is only defined for positive values",
        ));
    }
    Ok(graph.record(a.value.ln(), Op::Ln(a.index)))
}

impl Cell {
    /// `ln(self)`. See [`ln_op`].
    pub fn ln(&self) -> Result<Cell, CellGradError> {
        ln_op(self)
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
