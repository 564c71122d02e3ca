// src/nn/layers/mod.rs

pub mod layer;
pub mod mlp;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;

use crate::autograd::Cell;
use crate::error::CellGradError;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// Identity: the weighted sum is returned as is.
    Linear,
}

impl Activation {
    pub fn apply(self, act: &Cell) -> Result<Cell, CellGradError> {
        match self {
            Activation::Tanh => act.tanh(),
            Activation::Relu => act.relu(),
            Activation::Linear => Ok(act.clone()),
        }
    }
}
