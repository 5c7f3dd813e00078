use crate::dataset::Sample;
use crate::error::DimensionMismatch;
use crate::perceptron::Perceptron;

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub result: bool,
    pub log: String,
}

/// Score `perceptron` against every sample, in input order. No aggregate is
/// computed; callers reduce the returned sequence themselves.
pub fn evaluate(
    test_set: &[Sample],
    perceptron: &Perceptron,
) -> Result<Vec<Evaluation>, DimensionMismatch> {
    test_set
        .iter()
        .map(|sample| {
            let output = perceptron.guess(&sample.features)?;

            #[allow(clippy::float_cmp)]
            let result = output == sample.label;

            Ok(Evaluation {
                result,
                log: format!(
                    "input: {}, output: {output}, expected: {}",
                    format_features(&sample.features),
                    sample.label
                ),
            })
        })
        .collect()
}

fn format_features(features: &[f64]) -> String {
    features
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_perceptron(weights: [f64; 2], bias: f64) -> Perceptron {
        let mut rng = StdRng::seed_from_u64(0);
        let mut perceptron = Perceptron::new(2, &mut rng);

        perceptron.weights = Array1::from_vec(weights.to_vec());
        perceptron.bias = bias;

        perceptron
    }

    #[test]
    fn empty_test_set_yields_empty_results() {
        let perceptron = fixed_perceptron([1.0, 1.0], 0.0);

        assert!(evaluate(&[], &perceptron).unwrap().is_empty());
    }

    #[test]
    fn reports_match_and_log_line_per_sample() {
        // weights/bias of a converged AND gate
        let perceptron = fixed_perceptron([1.0, 1.0], -1.5);

        let samples = vec![
            Sample {
                features: vec![0.0, 1.0],
                label: -1.0,
            },
            Sample {
                features: vec![1.0, 1.0],
                label: -1.0,
            },
        ];

        let evaluations = evaluate(&samples, &perceptron).unwrap();

        assert!(evaluations[0].result);
        assert_eq!(evaluations[0].log, "input: 0,1, output: -1, expected: -1");

        assert!(!evaluations[1].result);
        assert_eq!(evaluations[1].log, "input: 1,1, output: 1, expected: -1");
    }

    #[test]
    fn does_not_mutate_the_perceptron() {
        let perceptron = fixed_perceptron([0.5, -0.5], 0.25);
        let samples = vec![Sample {
            features: vec![1.0, 0.0],
            label: 1.0,
        }];

        evaluate(&samples, &perceptron).unwrap();

        assert_eq!(perceptron.weights, Array1::from_vec(vec![0.5, -0.5]));
        assert_eq!(perceptron.bias, 0.25);
    }

    #[test]
    fn propagates_dimension_mismatch() {
        let perceptron = fixed_perceptron([1.0, 1.0], 0.0);
        let samples = vec![Sample {
            features: vec![1.0],
            label: 1.0,
        }];

        assert!(evaluate(&samples, &perceptron).is_err());
    }
}
