//! Reverse-mode automatic differentiation over scalar cells.
//!
//! - [`graph`]: the index-based arena ([`Graph`]) and cell identities.
//! - [`cell`]: the [`Cell`] handle and its accessors.
//! - [`op`]: the operation record and its local derivative rules.
//! - [`backward`]: topological ordering and the backward driver.
//! - [`grad_check`]: finite-difference verification of gradients.

pub mod backward;
pub mod cell;
pub mod grad_check;
pub mod graph;
pub mod op;

pub use backward::{backward, topological_order};
pub use cell::Cell;
pub use graph::{CellId, Graph, Mark};
pub use op::Op;
