use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};

#[derive(Debug, Clone)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: f64, // 1 if the gate is on, -1 if it is off
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    And,
    Or,
    Nand,
    Nor,
}

impl Gate {
    pub const ALL: [Gate; 4] = [Gate::And, Gate::Or, Gate::Nand, Gate::Nor];

    pub fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
        }
    }

    /// Four-row truth table over {0, 1} inputs with -1/1 labels.
    pub fn truth_table(self) -> Vec<Sample> {
        const INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];

        let labels = match self {
            Gate::And => [-1.0, -1.0, -1.0, 1.0],
            Gate::Or => [-1.0, 1.0, 1.0, 1.0],
            Gate::Nand => [1.0, 1.0, 1.0, -1.0],
            Gate::Nor => [1.0, -1.0, -1.0, -1.0],
        };

        INPUTS
            .iter()
            .zip(labels)
            .map(|(input, label)| Sample {
                features: input.to_vec(),
                label,
            })
            .collect()
    }
}

pub fn parse(file_path: &str) -> Result<Vec<Sample>, Box<dyn Error>> {
    let file = File::open(file_path)?;

    parse_reader(BufReader::new(file))
}

/// CSV with a header row; every field but the last is a feature, the last
/// field is the label and must be exactly 1 or -1.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Sample>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut samples = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let row = index + 2; // header is row 1

        if record.len() < 2 {
            return Err(format!("row {row}: expected features and a label").into());
        }

        let mut values = Vec::with_capacity(record.len());
        for value in record.iter() {
            values.push(value.trim().parse::<f64>()?);
        }

        let label = values.pop().expect("record has at least two fields");

        #[allow(clippy::float_cmp)]
        if label != 1.0 && label != -1.0 {
            return Err(format!("row {row}: label must be 1 or -1, got {label}").into());
        }

        samples.push(Sample {
            features: values,
            label,
        });
    }

    Ok(samples)
}
