// src/nn/losses/mod.rs

pub mod cross_entropy;
pub mod hinge;
pub mod mse;

pub use cross_entropy::{cross_entropy_loss, softmax};
pub use hinge::hinge_loss;
pub use mse::{MseLoss, Reduction};
