// cellgrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Source of sample indices for a [`DataLoader`](crate::DataLoader).
pub trait Sampler: Debug + Send + Sync {
    /// Starts a new pass over `0..dataset_len`.
    ///
    /// Stateful samplers such as a seeded [`RandomSampler`](super::RandomSampler)
    /// may yield a different order on each call.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices one pass yields for a dataset of `dataset_len` items.
    /// Sampling with replacement can make this differ from `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
