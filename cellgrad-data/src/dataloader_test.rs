// cellgrad-data/src/dataloader_test.rs

use super::*;
use crate::datasets::VecDataset;
use crate::samplers::SequentialSampler;

fn collect<D: Dataset, S: Sampler>(
    loader: &DataLoader<D, S>,
) -> Result<Vec<Vec<D::Item>>, CellGradError> {
    loader.iter().collect()
}

#[test]
fn test_dataloader_sequential() -> Result<(), CellGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
    let loader = DataLoader::new(dataset, Some(2), SequentialSampler::new(), false)?;
    assert_eq!(loader.num_batches(), 3);
    assert_eq!(collect(&loader)?, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    Ok(())
}

#[test]
fn test_dataloader_partial_last_batch() -> Result<(), CellGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, Some(2), SequentialSampler::new(), false)?;
    assert_eq!(loader.num_batches(), 3);
    assert_eq!(collect(&loader)?, vec![vec![1, 2], vec![3, 4], vec![5]]);
    Ok(())
}

#[test]
fn test_dataloader_drop_last() -> Result<(), CellGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, Some(2), SequentialSampler::new(), true)?;
    assert_eq!(loader.num_batches(), 2);
    assert_eq!(collect(&loader)?, vec![vec![1, 2], vec![3, 4]]);
    Ok(())
}

#[test]
fn test_dataloader_full_batch() -> Result<(), CellGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3]);
    let loader = DataLoader::new(dataset, None, SequentialSampler::new(), false)?;
    assert_eq!(loader.num_batches(), 1);
    assert_eq!(collect(&loader)?, vec![vec![1, 2, 3]]);
    Ok(())
}

#[test]
fn test_dataloader_empty_dataset() -> Result<(), CellGradError> {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    let loader = DataLoader::new(dataset, None, SequentialSampler::new(), false)?;
    assert_eq!(loader.num_batches(), 0);
    assert!(collect(&loader)?.is_empty());
    Ok(())
}

#[test]
fn test_dataloader_rejects_zero_batch_size() {
    let dataset = VecDataset::new(vec![1, 2, 3]);
    let err = DataLoader::new(dataset, Some(0), SequentialSampler::new(), false).unwrap_err();
    assert!(err.is_contract_error());
}

#[test]
fn test_every_iter_is_a_new_epoch() -> Result<(), CellGradError> {
    let dataset = VecDataset::new(vec![1, 2, 3, 4]);
    let loader = DataLoader::new(dataset, Some(3), SequentialSampler::new(), false)?;
    let mut epochs = Vec::new();
    for _ in 0..2 {
        let mut seen = Vec::new();
        for batch in &loader {
            seen.extend(batch?);
        }
        epochs.push(seen);
    }
    assert_eq!(epochs, vec![vec![1, 2, 3, 4], vec![1, 2, 3, 4]]);
    Ok(())
}

#[test]
fn test_shuffled_loader_covers_every_item() -> Result<(), CellGradError> {
    let dataset = VecDataset::new((0..10).collect::<Vec<i32>>());
    let loader = DataLoader::shuffled(dataset, Some(4), 99, false)?;
    let mut items: Vec<i32> = collect(&loader)?.into_iter().flatten().collect();
    items.sort_unstable();
    assert_eq!(items, (0..10).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_shuffled_loaders_with_same_seed_agree() -> Result<(), CellGradError> {
    let a = DataLoader::shuffled(VecDataset::new((0..8).collect::<Vec<i32>>()), Some(3), 5, false)?;
    let b = DataLoader::shuffled(VecDataset::new((0..8).collect::<Vec<i32>>()), Some(3), 5, false)?;
    for _ in 0..3 {
        assert_eq!(collect(&a)?, collect(&b)?);
    }
    Ok(())
}

#[test]
fn test_unzip_batch() -> Result<(), CellGradError> {
    let dataset = VecDataset::from_pairs(vec![vec![1.0], vec![2.0]], vec![10.0, 20.0])?;
    let loader = DataLoader::new(dataset, None, SequentialSampler::new(), false)?;
    let batch = loader.iter().next().unwrap_or_else(|| Ok(Vec::new()))?;
    let (xs, ys) = unzip_batch(batch);
    assert_eq!(xs, vec![vec![1.0], vec![2.0]]);
    assert_eq!(ys, vec![10.0, 20.0]);
    Ok(())
}
