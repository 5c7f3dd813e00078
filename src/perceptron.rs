use ndarray::{Array1, ArrayView1};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::DimensionMismatch;

pub struct Perceptron {
    pub name: String, // display only, no effect on training or inference
    pub weights: Array1<f64>,
    pub bias: f64,
    learning_rate: f64,
}

impl Perceptron {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

    /// Weights and bias start uniform-random in [-1, 1).
    pub fn new<R: Rng + ?Sized>(dimensions: usize, rng: &mut R) -> Self {
        Self::with_learning_rate(dimensions, Self::DEFAULT_LEARNING_RATE, rng)
    }

    pub fn with_learning_rate<R: Rng + ?Sized>(
        dimensions: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Self {
        let distribution = Uniform::new(-1.0, 1.0);

        Self {
            name: String::from("Perceptron"),
            weights: Array1::random_using(dimensions, distribution, rng),
            bias: rng.sample(distribution),
            learning_rate,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Classify `input` as -1 or 1. A weighted sum of exactly zero
    /// classifies as 1.
    pub fn guess(&self, input: &[f64]) -> Result<f64, DimensionMismatch> {
        self.check_dimensions(input)?;

        let sum = self.bias + ArrayView1::from(input).dot(&self.weights);

        if sum < 0.0 {
            Ok(-1.0)
        } else {
            Ok(1.0)
        }
    }

    /// One perceptron learning-rule step. Weights and bias move only when
    /// the current guess disagrees with `target`.
    pub fn train(&mut self, input: &[f64], target: f64) -> Result<(), DimensionMismatch> {
        let guess = self.guess(input)?;
        let error = target - guess;

        #[allow(clippy::float_cmp)]
        if error != 0.0 {
            let input = ArrayView1::from(input);

            self.weights.zip_mut_with(&input, |weight, &value| {
                *weight += error * value * self.learning_rate;
            });
            self.bias += error * self.learning_rate;
        }

        Ok(())
    }

    fn check_dimensions(&self, input: &[f64]) -> Result<(), DimensionMismatch> {
        if input.len() == self.weights.len() {
            Ok(())
        } else {
            Err(DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            })
        }
    }
}
