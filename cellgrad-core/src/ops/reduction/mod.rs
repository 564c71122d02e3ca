// src/ops/reduction/mod.rs
// Reductions over a slice of cells (sum, mean). Built from chained binary ops,
// so they carry no op record of their own.

pub mod sum;

pub use sum::{mean_op, sum_op};
