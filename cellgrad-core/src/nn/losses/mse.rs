// cellgrad-core/src/nn/losses/mse.rs

use std::str::FromStr;

use crate::autograd::Cell;
use crate::error::CellGradError;
use crate::ops::{mean_op, sum_op};

/// Specifies the reduction to apply to the per-sample errors: 'sum' | 'mean'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = CellGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(CellGradError::contract(
                "Reduction::from_str",
                format!("unsupported reduction type: {}", s),
            )),
        }
    }
}

/// Squared error loss between predictions and targets.
///
/// With [`Reduction::Sum`] (the default) the loss is `Σ (pred − target)²`;
/// with [`Reduction::Mean`] it is divided by the number of samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MseLoss {
    pub reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Computes the loss for one batch of scalar predictions.
    ///
    /// # Errors
    /// `ContractError` if the slices are empty or of different lengths.
    pub fn calculate(&self, predictions: &[Cell], targets: &[f64]) -> Result<Cell, CellGradError> {
        if predictions.len() != targets.len() {
            return Err(CellGradError::contract(
                "MseLoss",
                format!(
                    "{} predictions but {} targets",
                    predictions.len(),
                    targets.len()
                ),
            ));
        }
        if predictions.is_empty() {
            return Err(CellGradError::contract("MseLoss", "empty batch"));
        }
        let squared = predictions
            .iter()
            .zip(targets)
            .map(|(pred, &target)| {
                let diff = pred.sub(target)?;
                diff.mul(&diff)
            })
            .collect::<Result<Vec<_>, _>>()?;
        match self.reduction {
            Reduction::Sum => sum_op(&squared),
            Reduction::Mean => mean_op(&squared),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
