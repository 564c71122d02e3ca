// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod ops;

// Consumers built on top of the engine
pub mod nn;
pub mod optim;

// Ré-exporte les types de base pour qu'ils soient accessibles via `cellgrad_core::Cell`
pub use autograd::grad_check::{check_grad, GradCheckError};
pub use autograd::{backward, topological_order, Cell, CellId, Graph, Mark, Op};
pub use error::CellGradError;
pub use ops::{
    add_op, div_op, exp_op, ln_op, mean_op, mul_op, neg_op, pow_op, relu_op, sub_op, sum_op,
    tanh_op, Operand,
};
