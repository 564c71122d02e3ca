use cellgrad_core::nn::{Module, MseLoss};
use cellgrad_core::optim::{Optimizer, Sgd};
use cellgrad_core::{CellGradError, Graph};

/// The four-sample binary toy set: three features, ±1 targets.
#[allow(dead_code)]
pub fn toy_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

/// One full-batch training iteration: forward every sample, sum-of-squares
/// loss, backward, SGD step. Temporaries are released before returning, so
/// only the model parameters stay in `graph`. Returns the loss value.
#[allow(dead_code)]
pub fn train_step<M: Module>(
    graph: &Graph,
    model: &M,
    optimizer: &mut Sgd,
    xs: &[Vec<f64>],
    ys: &[f64],
) -> Result<f64, CellGradError> {
    let mark = graph.mark();
    let mut predictions = Vec::with_capacity(xs.len());
    for x in xs {
        let out = model.forward(&graph.leaves(x))?;
        predictions.extend(out);
    }
    let loss = MseLoss::default().calculate(&predictions, ys)?;
    optimizer.zero_grad();
    loss.backward()?;
    optimizer.step()?;
    let value = loss.value();
    graph.release(mark);
    Ok(value)
}
