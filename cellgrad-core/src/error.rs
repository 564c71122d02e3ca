use thiserror::Error;

/// Custom error type for the cellgrad framework.
///
/// Every fallible forward operation, consumer (layers, losses, optimizers) and
/// the data crate report failures through this enum. Errors are raised at the
/// offending forward call; the backward pass never produces one on a graph
/// that was built successfully.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum CellGradError {
    /// A forward evaluation received an input outside the operation's valid domain
    /// (e.g. `ln` of a non-positive value).
    #[error("Domain error in {operation}: input {value} is outside the valid domain ({reason})")]
    DomainError {
        operation: String,
        value: f64,
        reason: String,
    },

    /// An operation was invoked with an operand of the wrong kind, or the
    /// engine was used in a way its contract forbids (mixed graphs, stale cells,
    /// constant-only binary ops, mismatched input sizes).
    #[error("Contract violated in {operation}: {reason}")]
    ContractError { operation: String, reason: String },

    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Dataset length mismatch: {features} feature rows but {labels} labels")]
    DataLengthMismatch { features: usize, labels: usize },
}

impl CellGradError {
    pub(crate) fn domain(operation: &str, value: f64, reason: &str) -> Self {
        CellGradError::DomainError {
            operation: operation.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn contract(operation: &str, reason: impl Into<String>) -> Self {
        CellGradError::ContractError {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`CellGradError::DomainError`].
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CellGradError::DomainError { .. })
    }

    /// Returns `true` for [`CellGradError::ContractError`].
    pub fn is_contract_error(&self) -> bool {
        matches!(self, CellGradError::ContractError { .. })
    }
}
