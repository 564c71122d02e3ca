//! Weight penalties added to a loss before backward.

use crate::autograd::Cell;
use crate::error::CellGradError;
use crate::ops::sum_op;

/// Default regularization strength.
pub const DEFAULT_REG_ALPHA: f64 = 1e-4;

/// `alpha * Σ |p|`, with `|p|` expressed as `relu(p) + relu(−p)`.
///
/// The subgradient at `p == 0` is 0.
pub fn l1_penalty(params: &[Cell], alpha: f64) -> Result<Cell, CellGradError> {
    let magnitudes = params
        .iter()
        .map(|p| p.relu()?.add(&p.neg()?.relu()?))
        .collect::<Result<Vec<_>, _>>()?;
    sum_op(&magnitudes)?.mul(alpha)
}

/// `alpha * Σ p²`.
pub fn l2_penalty(params: &[Cell], alpha: f64) -> Result<Cell, CellGradError> {
    let squares = params
        .iter()
        .map(|p| p.mul(p))
        .collect::<Result<Vec<_>, _>>()?;
    sum_op(&squares)?.mul(alpha)
}
