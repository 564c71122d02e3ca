use crate::autograd::Cell;
use crate::error::CellGradError;
use crate::ops::sum_op;

fn max_value(logits: &[Cell], operation: &str) -> Result<f64, CellGradError> {
    logits
        .iter()
        .map(|c| c.value())
        .reduce(f64::max)
        .ok_or_else(|| CellGradError::contract(operation, "logits must not be empty"))
}

/// Shifted exponentials `exp(lᵢ − max)`; the max is a constant, not a cell.
fn shifted_exps(logits: &[Cell], max: f64) -> Result<Vec<Cell>, CellGradError> {
    logits.iter().map(|l| l.sub(max)?.exp()).collect()
}

/// Normalized exponentials of `logits`.
///
/// # Errors
/// `ContractError` for an empty slice.
pub fn softmax(logits: &[Cell]) -> Result<Vec<Cell>, CellGradError> {
    let max = max_value(logits, "softmax")?;
    let exps = shifted_exps(logits, max)?;
    let total = sum_op(&exps)?;
    exps.iter().map(|e| e.div(&total)).collect()
}

/// Negative log-likelihood of `target` under `softmax(logits)`.
///
/// Computed as `ln Σ exp(lᵢ − m) + m − l_target` with `m = max lᵢ`, which
/// keeps every `exp` argument non-positive.
///
/// # Errors
/// `ContractError` for empty logits or an out-of-range target class.
pub fn cross_entropy_loss(logits: &[Cell], target: usize) -> Result<Cell, CellGradError> {
    let max = max_value(logits, "cross_entropy_loss")?;
    let target_logit = logits.get(target).ok_or_else(|| {
        CellGradError::contract(
            "cross_entropy_loss",
            format!("target class {} out of range for {} logits", target, logits.len()),
        )
    })?;
    let exps = shifted_exps(logits, max)?;
    let log_sum_exp = sum_op(&exps)?.ln()?.add(max)?;
    log_sum_exp.sub(target_logit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::check_grad;
    use crate::autograd::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_softmax_sums_to_one() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let probs = softmax(&graph.leaves(&[1.0, 2.0, 3.0]))?;
        let total: f64 = probs.iter().map(|p| p.value()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert!(probs[2].value() > probs[1].value());
        Ok(())
    }

    #[test]
    fn test_softmax_is_stable_for_large_logits() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let probs = softmax(&graph.leaves(&[1000.0, 1000.0]))?;
        assert_relative_eq!(probs[0].value(), 0.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_cross_entropy_value_and_gradient() -> Result<(), CellGradError> {
        let graph = Graph::new();
        let logits = graph.leaves(&[2.0, 1.0, 0.1]);
        let loss = cross_entropy_loss(&logits, 0)?;

        let exps: Vec<f64> = [2.0f64, 1.0, 0.1].iter().map(|v| v.exp()).collect();
        let z: f64 = exps.iter().sum();
        assert_relative_eq!(loss.value(), -(exps[0] / z).ln(), epsilon = 1e-12);

        loss.backward()?;
        // d loss / d l_i = p_i - [i == target]
        assert_relative_eq!(logits[0].grad(), exps[0] / z - 1.0, epsilon = 1e-12);
        assert_relative_eq!(logits[1].grad(), exps[1] / z, epsilon = 1e-12);
        assert_relative_eq!(logits[2].grad(), exps[2] / z, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_cross_entropy_grad_check() {
        let result = check_grad(|_, x| cross_entropy_loss(x, 1), &[0.3, -1.2, 2.5], 1e-6, 1e-5);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_cross_entropy_errors() {
        let graph = Graph::new();
        let logits = graph.leaves(&[0.0, 1.0]);
        assert!(cross_entropy_loss(&logits, 2).unwrap_err().is_contract_error());
        assert!(cross_entropy_loss(&[], 0).unwrap_err().is_contract_error());
        assert!(softmax(&[]).unwrap_err().is_contract_error());
    }
}
