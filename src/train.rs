use crate::dataset::Sample;
use crate::error::DimensionMismatch;
use crate::perceptron::Perceptron;

pub const DEFAULT_EPOCHS: usize = 1000;

/// Run `epochs` full passes over `data` in its given order. No shuffling,
/// no convergence check; zero epochs leaves the perceptron untouched.
pub fn train_perceptron(
    data: &[Sample],
    epochs: usize,
    perceptron: &mut Perceptron,
) -> Result<(), DimensionMismatch> {
    for _ in 0..epochs {
        for sample in data {
            perceptron.train(&sample.features, sample.label)?;
        }
    }

    log::debug!(
        "{}: {epochs} epochs over {} samples, weights {}, bias {}",
        perceptron.name,
        data.len(),
        perceptron.weights,
        perceptron.bias
    );

    Ok(())
}
