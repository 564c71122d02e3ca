use cellgrad_core::CellGradError;

use super::traits::Dataset;

/// A simple dataset that wraps a `Vec` of items.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Must be `Clone + Send + 'static`.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<X, Y> VecDataset<(X, Y)>
where
    X: Clone + Send + 'static,
    Y: Clone + Send + 'static,
{
    /// Zips features and labels into `(x, y)` items.
    ///
    /// # Errors
    ///
    /// `CellGradError::DataLengthMismatch` if the two vectors differ in length.
    pub fn from_pairs(features: Vec<X>, labels: Vec<Y>) -> Result<Self, CellGradError> {
        if features.len() != labels.len() {
            return Err(CellGradError::DataLengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        Ok(Self::new(features.into_iter().zip(labels).collect()))
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, CellGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(CellGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
