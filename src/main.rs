use perceptron::{
    dataset::{self, Gate},
    evaluate::evaluate,
    perceptron::Perceptron,
    plot::plot_decision_boundary,
    train::{train_perceptron, DEFAULT_EPOCHS},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    const PLOT_DIRECTORY: &str = "plots";
    std::fs::create_dir_all(PLOT_DIRECTORY)?;

    let mut rng = rand::thread_rng();

    const DIMENSIONS: usize = 2;

    for gate in Gate::ALL {
        let samples = gate.truth_table();

        let mut model = Perceptron::new(DIMENSIONS, &mut rng);
        model.name = format!("{} gate", gate.name());

        train_perceptron(&samples, DEFAULT_EPOCHS, &mut model)?;

        let evaluations = evaluate(&samples, &model)?;
        for evaluation in &evaluations {
            println!("{}", evaluation.log);
        }

        let correct_predictions = evaluations.iter().filter(|e| e.result).count();
        let accuracy = (correct_predictions as f64 / evaluations.len() as f64) * 100.0;
        println!("{} gate accuracy: {accuracy:.3}%", gate.name());
        println!("weights: {}, bias: {:.3}\n", model.weights, model.bias);

        let plot_path = format!("{PLOT_DIRECTORY}/{}.png", gate.name().to_lowercase());
        plot_decision_boundary(&samples, &model, &plot_path)?;
    }

    if let Some(data_filepath) = std::env::args().nth(1) {
        let samples = dataset::parse(&data_filepath)?;
        assert!(!samples.is_empty());

        let dimensions = samples.first().unwrap().features.len();

        let mut model = Perceptron::new(dimensions, &mut rng);
        model.name = data_filepath.clone();

        train_perceptron(&samples, DEFAULT_EPOCHS, &mut model)?;

        let evaluations = evaluate(&samples, &model)?;
        for evaluation in &evaluations {
            println!("{}", evaluation.log);
        }

        let correct_predictions = evaluations.iter().filter(|e| e.result).count();
        let accuracy = (correct_predictions as f64 / evaluations.len() as f64) * 100.0;
        println!("{data_filepath} accuracy: {accuracy:.3}%");

        if dimensions == DIMENSIONS {
            let plot_path = format!("{PLOT_DIRECTORY}/custom.png");
            plot_decision_boundary(&samples, &model, &plot_path)?;
        }
    }

    Ok(())
}
