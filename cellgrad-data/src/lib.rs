//! Datasets, index samplers and mini-batch loading for cellgrad training loops.
//!
//! Items are plain Rust values (typically `(Vec<f64>, f64)` feature/label
//! pairs); they are turned into cells by the training loop, on the graph of
//! its choice.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::{unzip_batch, Batches, DataLoader};
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
