pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod perceptron;
pub mod plot;
pub mod train;
