// cellgrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::{Cell, Op};
use crate::error::CellGradError;
use crate::ops::unary;

/// Raises `a` to a constant power: `a ^ exponent`.
///
/// The exponent is a plain number; differentiating with respect to the
/// exponent is not supported. Backward: `a += g * k * a^(k-1)`.
///
/// # Errors
/// * `ContractError` if `exponent` is NaN or infinite.
/// * `DomainError` if `a` is zero and `exponent` is negative or strictly
///   between 0 and 1 (the derivative is unbounded there), if `a` is negative
///   and `exponent` is not an integer, or if the result overflows.
pub fn pow_op(a: &Cell, exponent: f64) -> Result<Cell, CellGradError> {
    if !exponent.is_finite() {
        return Err(CellGradError::contract(
            "pow",
            format!("exponent must be a finite constant, got {}", exponent),
        ));
    }
    let (graph, a) = unary("pow", a)?;

    if a.value == 0.0 && exponent < 0.0 {
        return Err(CellGradError::domain(
            "pow",
            a.value,
            "zero cannot be raised to a negative power",
        ));
    }
    if a.value == 0.0 && exponent > 0.0 && exponent < 1.0 {
        return Err(CellGradError::domain(
            "pow",
            a.value,
            "the derivative of a^k with 0 < k < 1 is unbounded at zero",
        ));
    }
    if a.value < 0.0 && exponent.fract() != 0.0 {
        return Err(CellGradError::domain(
            "pow",
            a.value,
            "a negative base requires an integer exponent",
        ));
    }
    let value = a.value.powf(exponent);
    if value.is_infinite() && a.value.is_finite() {
        return Err(CellGradError::domain("pow", a.value, "result overflows f64"));
    }

    Ok(graph.record(value, Op::Pow(a.index, exponent)))
}

impl Cell {
    /// `self ^ exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Result<Cell, CellGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
