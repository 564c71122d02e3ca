//! Exemple d'utilisation du DataLoader avec VecDataset, SequentialSampler et un RandomSampler seedé
//!
//! Ce script montre comment charger des données batchées pour l'entraînement d'un modèle.

use cellgrad_core::nn::{hinge_loss, Mlp, Module};
use cellgrad_core::optim::{Optimizer, Sgd};
use cellgrad_core::{CellGradError, Graph};
use cellgrad_data::{unzip_batch, DataLoader, SequentialSampler, VecDataset};

fn main() -> Result<(), CellGradError> {
    // Deux nuages de points séparables, étiquettes ±1
    let features: Vec<Vec<f64>> = (0..12)
        .map(|i| {
            let t = i as f64 / 12.0;
            if i % 2 == 0 {
                vec![1.0 + t, 0.5 - t]
            } else {
                vec![-1.0 - t, -0.5 + t]
            }
        })
        .collect();
    let labels: Vec<f64> = (0..12).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let dataset = VecDataset::from_pairs(features, labels)?;

    // SequentialSampler : itération ordonnée
    let seq_loader = DataLoader::new(dataset.clone(), Some(5), SequentialSampler::new(), false)?;
    println!("--- Batching avec SequentialSampler ({} batches) ---", seq_loader.num_batches());
    for (i, batch) in seq_loader.iter().enumerate() {
        let (xs, ys) = unzip_batch(batch?);
        println!("Batch {i}: {} samples, labels {:?}", xs.len(), ys);
    }

    // RandomSampler seedé : une nouvelle permutation à chaque époque
    let loader = DataLoader::shuffled(dataset, Some(4), 7, false)?;
    let graph = Graph::new();
    let mut rng = rand::thread_rng();
    let model = Mlp::new(&graph, 2, &[8, 1], &mut rng)?;
    let mut optimizer = Sgd::new(model.parameters(), 0.05, 0.9)?;

    let mark = graph.mark();
    for epoch in 0..20 {
        let mut total = 0.0;
        for batch in &loader {
            let (xs, ys) = unzip_batch(batch?);
            let mut scores = Vec::with_capacity(xs.len());
            for x in &xs {
                scores.extend(model.forward(&graph.leaves(x))?);
            }
            let loss = hinge_loss(&ys, &scores)?;
            optimizer.zero_grad();
            loss.backward()?;
            optimizer.step()?;
            total += loss.value();
            graph.release(mark);
        }
        if epoch % 5 == 0 {
            println!("epoch {:>2}: hinge loss = {:.4}", epoch, total / loader.num_batches() as f64);
        }
    }
    Ok(())
}
