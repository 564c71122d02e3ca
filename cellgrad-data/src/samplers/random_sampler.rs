// cellgrad-data/src/samplers/random_sampler.rs

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::traits::Sampler;

/// A sampler that randomly samples indices from a dataset.
///
/// Without a seed every pass draws from the thread-local generator. A seeded
/// sampler ([`RandomSampler::seeded`]) owns a `StdRng`: the sequence of passes
/// is reproducible, and each pass still gets a fresh permutation.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    rng: Option<Mutex<StdRng>>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: None,
        }
    }

    /// A full-length permutation sampler driven by `StdRng::seed_from_u64(seed)`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(false, None).with_seed(seed)
    }

    /// Replaces the generator with one seeded from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    fn draw<R: Rng + ?Sized>(&self, dataset_len: usize, count: usize, rng: &mut R) -> Vec<usize> {
        if self.replacement {
            (0..count).map(|_| rng.gen_range(0..dataset_len)).collect()
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(count);
            indices
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let count = self.num_samples.unwrap_or(dataset_len);
        if !self.replacement && count > dataset_len {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                count,
                dataset_len
            );
            return Box::new(std::iter::empty());
        }

        let indices = match &self.rng {
            Some(rng) => {
                let mut guard = match rng.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => {
                        log::warn!("RandomSampler: generator mutex was poisoned. Recovering.");
                        poisoned.into_inner()
                    }
                };
                self.draw(dataset_len, count, &mut *guard)
            }
            None => self.draw(dataset_len, count, &mut rand::thread_rng()),
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        let count = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 || (!self.replacement && count > dataset_len) {
            0
        } else {
            count
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
