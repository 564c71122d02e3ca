// src/nn/mod.rs
// Couches de réseau de neurones, pertes et régularisation construites sur les cellules.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod regularization;

// Re-export common items
pub use init::InitStrategy;
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use losses::{cross_entropy_loss, hinge_loss, softmax, MseLoss, Reduction};
pub use module::Module;
pub use regularization::{l1_penalty, l2_penalty, DEFAULT_REG_ALPHA};
