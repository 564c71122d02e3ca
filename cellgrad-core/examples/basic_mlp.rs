//! # Training a small MLP on a four-sample toy set
//!
//! Demonstrates the full cycle on one graph:
//! 1.  Parameters are created once, then a `mark` is taken.
//! 2.  Each iteration runs the forward pass, the squared-error loss plus an L2
//!     penalty, `zero_grad`, `backward` and an SGD step.
//! 3.  `release(mark)` drops the iteration's temporaries so the arena only
//!     holds the parameters between iterations.
//!
//! ## Exécution
//! `cargo run --example basic_mlp`

use cellgrad_core::nn::{l2_penalty, Mlp, Module, MseLoss, DEFAULT_REG_ALPHA};
use cellgrad_core::optim::{Optimizer, Sgd};
use cellgrad_core::{CellGradError, Graph};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), CellGradError> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let model = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng)?;
    let params = model.parameters();
    let mut optimizer = Sgd::new(params.clone(), 0.05, 0.0)?;
    let loss_fn = MseLoss::default();
    println!("MLP with {} parameters", model.num_parameters());

    let mark = graph.mark();
    for epoch in 0..100 {
        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            predictions.extend(model.forward(&graph.leaves(x))?);
        }
        let data_loss = loss_fn.calculate(&predictions, &ys)?;
        let loss = data_loss.add(&l2_penalty(&params, DEFAULT_REG_ALPHA)?)?;

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        if epoch % 10 == 0 {
            println!(
                "epoch {:>3}: loss = {:.6} ({} cells in graph)",
                epoch,
                loss.value(),
                graph.len()
            );
        }
        graph.release(mark);
    }

    for (x, y) in xs.iter().zip(ys) {
        let mark = graph.mark();
        let out = model.forward(&graph.leaves(x))?;
        println!("{:?} -> {:+.4} (target {:+})", x, out[0].value(), y);
        graph.release(mark);
    }
    Ok(())
}
