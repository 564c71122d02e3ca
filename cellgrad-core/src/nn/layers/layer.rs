use rand::Rng;

use crate::autograd::{Cell, Graph};
use crate::error::CellGradError;
use crate::nn::init::InitStrategy;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::module::Module;

/// `nout` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nout: usize,
        activation: Activation,
        init: InitStrategy,
        rng: &mut R,
    ) -> Result<Self, CellGradError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Cell]) -> Result<Vec<Cell>, CellGradError> {
        self.neurons.iter().map(|n| n.call(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Cell> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}
