use crate::autograd::Cell;
use crate::error::CellGradError;
use crate::ops::mean_op;

/// Max-margin loss for ±1 labels: `mean(relu(1 − yᵢ·sᵢ))`.
///
/// # Errors
/// `ContractError` if the slices are empty or of different lengths.
pub fn hinge_loss(targets: &[f64], scores: &[Cell]) -> Result<Cell, CellGradError> {
    if targets.len() != scores.len() {
        return Err(CellGradError::contract(
            "hinge_loss",
            format!("{} targets but {} scores", targets.len(), scores.len()),
        ));
    }
    let margins = scores
        .iter()
        .zip(targets)
        .map(|(score, &y)| score.mul(-y)?.add(1.0)?.relu())
        .collect::<Result<Vec<_>, _>>()?;
    mean_op(&margins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_hinge_loss_values_and_gradients() -> Result<(), CellGradError> {
        let graph = Graph::new();
        // margins: 1 - 2 = -1 -> 0; 1 - 0.5 = 0.5; 1 + 0.5 = 1.5
        let scores = graph.leaves(&[2.0, 0.5, 0.5]);
        let loss = hinge_loss(&[1.0, 1.0, -1.0], &scores)?;
        assert_relative_eq!(loss.value(), 2.0 / 3.0, epsilon = 1e-12);

        loss.backward()?;
        assert_eq!(scores[0].grad(), 0.0);
        assert_relative_eq!(scores[1].grad(), -1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(scores[2].grad(), 1.0 / 3.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_hinge_loss_shape_errors() {
        let graph = Graph::new();
        let scores = graph.leaves(&[1.0]);
        assert!(hinge_loss(&[1.0, -1.0], &scores)
            .unwrap_err()
            .is_contract_error());
        assert!(hinge_loss(&[], &[]).unwrap_err().is_contract_error());
    }
}
