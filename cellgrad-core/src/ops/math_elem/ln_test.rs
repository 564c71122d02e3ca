use super::*;
use crate::autograd::grad_check::check_grad;
use crate::autograd::Graph;
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_backward() -> Result<(), CellGradError> {
    let graph = Graph::new();
    let a = graph.leaf(std::f64::consts::E);
    let y = a.ln()?;
    assert_relative_eq!(y.value(), 1.0, epsilon = 1e-12);
    assert_eq!(y.op_tag(), "ln");
    y.backward()?;
    assert_relative_eq!(a.grad(), 1.0 / std::f64::consts::E, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_ln_of_negative_fails_without_recording() {
    let graph = Graph::new();
    let a = graph.leaf(-1.0);
    let err = a.ln().unwrap_err();
    assert!(err.is_domain_error());
    match err {
        CellGradError::DomainError { operation, value, .. } => {
            assert_eq!(operation, "ln");
            assert_eq!(value, -1.0);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_ln_of_zero_and_nan_fail() {
    let graph = Graph::new();
    assert!(graph.leaf(0.0).ln().unwrap_err().is_domain_error());
    assert!(graph.leaf(f64::NAN).ln().unwrap_err().is_domain_error());
}

#[test]
fn test_ln_grad_check() {
    let result = check_grad(|_, x| x[0].mul(&x[1])?.ln(), &[0.5, 3.0], 1e-6, 1e-6);
    assert_eq!(result, Ok(()));
}
