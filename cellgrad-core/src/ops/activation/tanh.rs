use crate::autograd::{Cell, Op};
use crate::error::CellGradError;
use crate::ops::unary;

/// Hyperbolic tangent, computed as `(e^{2x} - 1) / (e^{2x} + 1)`.
///
/// Saturates to 1 when `e^{2x}` overflows. Backward uses the recorded output
/// `t`: `a += g * (1 - t^2)`.
pub fn tanh_op(a: &Cell) -> Result<Cell, CellGradError> {
    let (graph, a) = unary("tanh", a)?;
    let e2x = (2.0 * a.value).exp();
    let t = if e2x.is_infinite() {
        1.0
    } else {
        (e2x - 1.0) / (e2x + 1.0)
    };
    Ok(graph.record(t, Op::Tanh(a.index)))
}

impl Cell {
    /// `tanh(self)`. See [`tanh_op`].
    pub fn tanh(&self) -> Result<Cell, CellGradError> {
        tanh_op(self)
    }
}
