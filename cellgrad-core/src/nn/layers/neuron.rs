use rand::Rng;

use crate::autograd::{Cell, Graph};
use crate::error::CellGradError;
use crate::nn::init::InitStrategy;
use crate::nn::layers::Activation;
use crate::nn::module::Module;

/// A single unit: `activation(w · x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Cell>,
    bias: Cell,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias, all drawn from `init`.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        activation: Activation,
        init: InitStrategy,
        rng: &mut R,
    ) -> Result<Self, CellGradError> {
        let weights = init.parameters(graph, nin, rng)?;
        let bias = init
            .parameters(graph, 1, rng)?
            .pop()
            .ok_or_else(|| CellGradError::contract("Neuron::new", "failed to draw a bias"))?;
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Builds a neuron from existing parameter cells.
    pub fn from_parameters(weights: Vec<Cell>, bias: Cell, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn weights(&self) -> &[Cell] {
        &self.weights
    }

    pub fn bias(&self) -> &Cell {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Computes the neuron output for one input vector.
    pub fn call(&self, inputs: &[Cell]) -> Result<Cell, CellGradError> {
        if inputs.len() != self.weights.len() {
            return Err(CellGradError::contract(
                "Neuron::forward",
                format!(
                    "expected {} inputs, got {}",
                    self.weights.len(),
                    inputs.len()
                ),
            ));
        }
        let act = self
            .weights
            .iter()
            .zip(inputs)
            .try_fold(self.bias.clone(), |acc, (w, x)| acc.add(&w.mul(x)?))?;
        self.activation.apply(&act)
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Cell]) -> Result<Vec<Cell>, CellGradError> {
        Ok(vec![self.call(inputs)?])
    }

    fn parameters(&self) -> Vec<Cell> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}
