use crate::autograd::Cell;
use crate::error::CellGradError;

/// Sums a non-empty slice of cells of the same graph.
///
/// The result is a left fold of `add` (`((c0 + c1) + c2) + ...`), so every
/// input receives gradient 1 from the sum. A single cell is returned as is.
///
/// # Errors
/// `ContractError` if `cells` is empty, mixes graphs or holds a stale handle.
pub fn sum_op(cells: &[Cell]) -> Result<Cell, CellGradError> {
    let (first, rest) = cells
        .split_first()
        .ok_or_else(|| CellGradError::contract("sum", "cannot sum an empty slice of cells"))?;
    rest.iter().try_fold(first.clone(), |acc, cell| acc.add(cell))
}

/// Arithmetic mean of a non-empty slice: `sum_op(cells) * (1 / n)`.
///
/// # Errors
/// Same as [`sum_op`].
pub fn mean_op(cells: &[Cell]) -> Result<Cell, CellGradError> {
    if cells.is_empty() {
        return Err(CellGradError::contract(
            "mean",
            "cannot average an empty slice of cells",
        ));
    }
    let total = sum_op(cells)?;
    total.mul(1.0 / cells.len() as f64)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
