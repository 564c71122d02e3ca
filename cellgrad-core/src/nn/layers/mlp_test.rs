use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_parameter_count() -> Result<(), CellGradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng)?;
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.num_parameters(), 41);
    assert_eq!(graph.len(), 41);
    assert_eq!(mlp.layers().len(), 3);
    Ok(())
}

#[test]
fn test_mlp_forward_output_width() -> Result<(), CellGradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&graph, 2, &[3, 2], &mut rng)?;
    let out = mlp.forward(&graph.leaves(&[0.5, -0.5]))?;
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|c| c.value() > -1.0 && c.value() < 1.0));
    Ok(())
}

#[test]
fn test_mlp_output_activation() -> Result<(), CellGradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(4);
    let mlp = Mlp::with_activations(
        &graph,
        2,
        &[3, 1],
        Activation::Relu,
        Activation::Linear,
        &mut rng,
    )?;
    assert_eq!(mlp.layers()[0].neurons()[0].activation(), Activation::Relu);
    assert_eq!(mlp.layers()[1].neurons()[0].activation(), Activation::Linear);
    Ok(())
}

#[test]
fn test_mlp_is_reproducible_with_same_seed() -> Result<(), CellGradError> {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let a = Mlp::new(&g1, 3, &[4, 1], &mut StdRng::seed_from_u64(99))?;
    let b = Mlp::new(&g2, 3, &[4, 1], &mut StdRng::seed_from_u64(99))?;
    let va: Vec<f64> = a.parameters().iter().map(|p| p.value()).collect();
    let vb: Vec<f64> = b.parameters().iter().map(|p| p.value()).collect();
    assert_eq!(va, vb);
    Ok(())
}

#[test]
fn test_mlp_backward_reaches_every_parameter() -> Result<(), CellGradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(8);
    let mlp = Mlp::new(&graph, 3, &[4, 1], &mut rng)?;
    let out = mlp.forward(&graph.leaves(&[1.0, 0.5, -0.3]))?;
    out[0].backward()?;
    // tanh' > 0 everywhere, so no gradient is exactly zero for generic weights
    assert!(mlp.parameters().iter().all(|p| p.grad() != 0.0));
    Ok(())
}

#[test]
fn test_mlp_requires_layers() {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let err = Mlp::new(&graph, 3, &[], &mut rng).unwrap_err();
    assert!(err.is_contract_error());
}

#[test]
fn test_mlp_zero_grad_skips_released_parameters() -> Result<(), CellGradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let mark = graph.mark();
    let mlp = Mlp::new(&graph, 2, &[2, 1], &mut rng)?;
    graph.release(mark);
    assert!(mlp.parameters().iter().all(|p| !p.is_live()));
    mlp.zero_grad();
    Ok(())
}
