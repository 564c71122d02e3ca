//! # Cell Operations Module (`ops`)
//!
//! This module is the operation set of the engine. Every operation takes one
//! or two operands, computes the forward value immediately and appends a new
//! cell carrying an [`Op`](crate::autograd::Op) record to the operands' graph.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a free function (`add_op`,
//!   `ln_op`, ...) returning `Result<Cell, CellGradError>`, plus a method of the
//!   same name on [`Cell`] (`a.add(&b)?`, `a.ln()?`).
//! - **[`Operand`]:** Binary operations accept a `&Cell` or a raw `f64` on
//!   either side. A constant is coerced into a fresh leaf of the other
//!   operand's graph; two constants of equal value never share a leaf.
//! - **Errors:** Domain violations (`ln` of a non-positive value, overflow...)
//!   and contract violations (two constants, mixed graphs, stale cells) are
//!   reported at the forward call. No cell is recorded for the failing op.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp, ln.
//! - [`activation`]: tanh, relu.
//! - [`reduction`]: sum and mean over a slice of cells.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};
pub use reduction::{mean_op, sum_op};

use crate::autograd::{Cell, Graph};
use crate::error::CellGradError;

/// One side of a binary operation: an existing cell or a raw constant.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Cell(&'a Cell),
    Constant(f64),
}

impl<'a> From<&'a Cell> for Operand<'a> {
    fn from(cell: &'a Cell) -> Self {
        Operand::Cell(cell)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

/// A resolved operand: arena index and forward value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    pub(crate) index: usize,
    pub(crate) value: f64,
}

fn resolve_cell(graph: &Graph, cell: &Cell, operation: &str) -> Result<Slot, CellGradError> {
    if !graph.ptr_eq(cell.graph()) {
        return Err(CellGradError::contract(
            operation,
            "operands belong to different graphs",
        ));
    }
    let index = graph.resolve(cell.id(), operation)?;
    Ok(Slot {
        index,
        value: graph.borrow().nodes[index].value,
    })
}

/// Validates a unary operand and returns its graph and slot.
pub(crate) fn unary(operation: &str, a: &Cell) -> Result<(Graph, Slot), CellGradError> {
    let graph = a.graph().clone();
    let slot = resolve_cell(&graph, a, operation)?;
    Ok((graph, slot))
}

/// Checks a binary operand pair without recording anything.
///
/// Returns the graph the operation will be recorded in.
pub(crate) fn validate<'a>(
    operation: &str,
    lhs: Operand<'a>,
    rhs: Operand<'a>,
) -> Result<Graph, CellGradError> {
    let graph = match (lhs, rhs) {
        (Operand::Cell(c), _) | (_, Operand::Cell(c)) => c.graph().clone(),
        (Operand::Constant(a), Operand::Constant(b)) => {
            return Err(CellGradError::contract(
                operation,
                format!("at least one operand must be a cell, got constants {} and {}", a, b),
            ))
        }
    };
    for operand in [lhs, rhs] {
        if let Operand::Cell(c) = operand {
            resolve_cell(&graph, c, operation)?;
        }
    }
    Ok(graph)
}

/// Validates both operands, then coerces constants into fresh leaves.
///
/// Cells are checked before any constant is recorded, so a rejected call
/// leaves the arena unchanged.
pub(crate) fn binary<'a>(
    operation: &str,
    lhs: Operand<'a>,
    rhs: Operand<'a>,
) -> Result<(Graph, Slot, Slot), CellGradError> {
    let graph = validate(operation, lhs, rhs)?;
    let to_slot = |operand: Operand<'a>| -> Result<Slot, CellGradError> {
        match operand {
            Operand::Cell(c) => resolve_cell(&graph, c, operation),
            Operand::Constant(value) => Ok(Slot {
                index: graph.leaf(value).id().index(),
                value,
            }),
        }
    };
    let lhs_slot = to_slot(lhs)?;
    let rhs_slot = to_slot(rhs)?;
    Ok((graph, lhs_slot, rhs_slot))
}
