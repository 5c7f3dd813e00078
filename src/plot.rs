use plotters::prelude::*;
use std::error::Error;

use crate::dataset::Sample;
use crate::perceptron::Perceptron;

const PLOT_RANGE: (f64, f64) = (-0.5, 1.5);

/// Render `samples` and the perceptron's decision boundary to a PNG.
/// Only defined for 2 input dimensions.
pub fn plot_decision_boundary(
    samples: &[Sample],
    perceptron: &Perceptron,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    if perceptron.weights.len() != 2 {
        return Err(format!(
            "decision boundary plot requires 2 dimensions, model has {}",
            perceptron.weights.len()
        )
        .into());
    }

    let root = BitMapBackend::new(output_path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let (low, high) = PLOT_RANGE;

    let mut chart = ChartBuilder::on(&root)
        .caption(&perceptron.name, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(low..high, low..high)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(samples.iter().map(|sample| {
        let color = if sample.label > 0.0 { GREEN } else { RED };

        Circle::new((sample.features[0], sample.features[1]), 5, color.filled())
    }))?;

    chart.draw_series(LineSeries::new(boundary_points(perceptron), &BLUE))?;

    root.present()?;
    log::info!("wrote decision boundary to {output_path}");

    Ok(())
}

/// Points of the line `w0 * x + w1 * y + bias = 0` inside the plot range.
fn boundary_points(perceptron: &Perceptron) -> Vec<(f64, f64)> {
    let (w0, w1) = (perceptron.weights[0], perceptron.weights[1]);
    let bias = perceptron.bias;
    let (low, high) = PLOT_RANGE;

    const STEPS: usize = 100;
    let step = (high - low) / STEPS as f64;

    if w1.abs() > f64::EPSILON {
        (0..=STEPS)
            .map(|i| {
                let x = low + i as f64 * step;

                (x, -(w0 * x + bias) / w1)
            })
            .collect()
    } else if w0.abs() > f64::EPSILON {
        // vertical boundary
        let x = -bias / w0;

        vec![(x, low), (x, high)]
    } else {
        Vec::new()
    }
}
