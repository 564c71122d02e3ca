use crate::autograd::{Cell, Op};
use crate::error::CellGradError;
use crate::ops::unary;

/// Computes `e^a`.
///
/// Backward reuses the forward value: `a += g * e^a`.
///
/// # Errors
/// `DomainError` if a finite input overflows to infinity.
pub fn exp_op(a: &Cell) -> Result<Cell, CellGradError> {
    let (graph, a) = unary("exp", a)?;
    let value = a.value.exp();
    if value.is_infinite() && a.value.is_finite() {
        return Err(CellGradError::domain("exp", a.value, "result overflows f64"));
    }
    Ok(graph.record(value, Op::Exp(a.index)))
}

impl Cell {
    /// `e^self`. See [`exp_op`].
    pub fn exp(&self) -> Result<Cell, CellGradError> {
        exp_op(self)
    }
}
