use rand::Rng;

use crate::autograd::{Cell, Graph};
use crate::error::CellGradError;
use crate::nn::init::InitStrategy;
use crate::nn::layers::{Activation, Layer};
use crate::nn::module::Module;

/// Multi-layer perceptron: a chain of [`Layer`]s of sizes `[nin] + nouts`.
///
/// # Example
///
/// ```rust
/// use cellgrad_core::nn::{Mlp, Module};
/// use cellgrad_core::Graph;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let graph = Graph::new();
/// let mut rng = StdRng::seed_from_u64(0);
/// let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng)?;
/// assert_eq!(mlp.num_parameters(), 41);
///
/// let out = mlp.forward(&graph.leaves(&[2.0, 3.0, -1.0]))?;
/// assert_eq!(out.len(), 1);
/// # Ok::<(), cellgrad_core::CellGradError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with tanh on every layer, output layer included.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, CellGradError> {
        Self::with_activations(graph, nin, nouts, Activation::Tanh, Activation::Tanh, rng)
    }

    /// Creates an MLP with `hidden` on every layer but the last, which uses `output`.
    pub fn with_activations<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        hidden: Activation,
        output: Activation,
        rng: &mut R,
    ) -> Result<Self, CellGradError> {
        if nouts.is_empty() {
            return Err(CellGradError::contract(
                "Mlp::new",
                "at least one layer size is required",
            ));
        }
        let init = InitStrategy::default();
        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for (i, &nout) in nouts.iter().enumerate() {
            let activation = if i + 1 == nouts.len() { output } else { hidden };
            layers.push(Layer::new(graph, fan_in, nout, activation, init, rng)?);
            fan_in = nout;
        }
        log::debug!(
            "Mlp: {} -> {:?} ({} parameters)",
            nin,
            nouts,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Cell]) -> Result<Vec<Cell>, CellGradError> {
        self.layers
            .iter()
            .try_fold(inputs.to_vec(), |x, layer| layer.forward(&x))
    }

    fn parameters(&self) -> Vec<Cell> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
