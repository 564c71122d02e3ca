// dataloader.rs
//! # DataLoader
//!
//! Groups the items of a [`Dataset`] into mini-batches, in the order chosen by
//! a [`Sampler`].
//!
//! ## Exemple d'utilisation basique
//!
//! ```rust
//! use cellgrad_data::{DataLoader, SequentialSampler, VecDataset};
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, Some(4), SequentialSampler::new(), false)?;
//! let batches: Vec<Vec<i32>> = loader.iter().collect::<Result<_, _>>()?;
//! assert_eq!(batches, vec![vec![1, 2, 3, 4], vec![5, 6]]);
//! # Ok::<(), cellgrad_core::CellGradError>(())
//! ```
//!
//! ## Fonctionnalités principales
//!
//! - `batch_size = None`: the whole dataset is one batch.
//! - `drop_last`: the trailing incomplete batch is skipped.
//! - Every call to [`DataLoader::iter`] (or `for batch in &loader`) is a new
//!   epoch: the sampler is asked for a fresh index sequence.

use cellgrad_core::CellGradError;

use crate::datasets::Dataset;
use crate::samplers::{RandomSampler, Sampler};

/// Generic mini-batch loader.
///
/// # Paramètres de type
/// - `D`: Le type du dataset, qui doit implémenter le trait [`Dataset`].
/// - `S`: Le type du sampler, qui doit implémenter le trait [`Sampler`].
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: Option<usize>,
    sampler: S,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Crée un nouveau DataLoader.
    ///
    /// # Arguments
    /// - `dataset`: Le dataset à utiliser.
    /// - `batch_size`: La taille des batches; `None` for a single full batch.
    /// - `sampler`: Le sampler pour générer les indices.
    /// - `drop_last`: Si vrai, le dernier batch est ignoré s'il est incomplet.
    ///
    /// # Errors
    /// `ContractError` if `batch_size` is `Some(0)`.
    pub fn new(
        dataset: D,
        batch_size: Option<usize>,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, CellGradError> {
        if batch_size == Some(0) {
            return Err(CellGradError::ContractError {
                operation: "DataLoader::new".to_string(),
                reason: "batch_size must be at least 1".to_string(),
            });
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn batch_size(&self) -> Option<usize> {
        self.batch_size
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if samples == 0 {
            return 0;
        }
        match self.batch_size {
            None => 1,
            Some(size) if self.drop_last => samples / size,
            Some(size) => (samples + size - 1) / size,
        }
    }

    /// Starts a new epoch.
    pub fn iter(&self) -> Batches<'_, D> {
        let indices = self.sampler.iter(self.dataset.len());
        let batch_size = self
            .batch_size
            .unwrap_or_else(|| self.sampler.len(self.dataset.len()).max(1));
        log::debug!(
            "DataLoader: new epoch over {} samples (batch_size={}, drop_last={})",
            self.sampler.len(self.dataset.len()),
            batch_size,
            self.drop_last
        );
        Batches {
            dataset: &self.dataset,
            indices,
            batch_size,
            drop_last: self.drop_last,
        }
    }
}

impl<D: Dataset> DataLoader<D, RandomSampler> {
    /// A loader that visits the dataset in a new seeded permutation each epoch.
    pub fn shuffled(
        dataset: D,
        batch_size: Option<usize>,
        seed: u64,
        drop_last: bool,
    ) -> Result<Self, CellGradError> {
        Self::new(dataset, batch_size, RandomSampler::seeded(seed), drop_last)
    }
}

impl<'a, D: Dataset, S: Sampler> IntoIterator for &'a DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, CellGradError>;
    type IntoIter = Batches<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One epoch of batches, see [`DataLoader::iter`].
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Result<Vec<D::Item>, CellGradError>;

    /// Renvoie le prochain batch de données.
    ///
    /// - `Some(Ok(batch))` : Un batch de données prêt à l'emploi.
    /// - `Some(Err(e))` : Une erreur lors de la récupération d'un item.
    /// - `None` : Plus de données à itérer.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

/// Splits a batch of `(x, y)` items into features and labels.
pub fn unzip_batch<X, Y>(batch: Vec<(X, Y)>) -> (Vec<X>, Vec<Y>) {
    batch.into_iter().unzip()
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
