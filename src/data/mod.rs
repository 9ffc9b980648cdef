//! Training examples as seen by the trainer.
//!
//! Ingestion and categorical encoding of raw records happen outside this crate;
//! anything that can hand out an input column and a one-hot target column can
//! be trained on by implementing [`TrainingData`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// One (input, target) pair.
pub trait TrainingData {
    /// Feature column vector, shape (F × 1).
    fn input_data(&self) -> Matrix;

    /// One-hot target column vector, shape (K × 1).
    fn output_data(&self) -> Matrix;
}

/// A ready-encoded training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Matrix,
    pub output: Matrix,
}

impl Sample {
    pub fn new(input: &[f64], output: &[f64]) -> Sample {
        Sample {
            input: Matrix::column_vector(input),
            output: Matrix::column_vector(output),
        }
    }
}

impl TrainingData for Sample {
    fn input_data(&self) -> Matrix {
        self.input.clone()
    }

    fn output_data(&self) -> Matrix {
        self.output.clone()
    }
}

/// Column vector of length `classes` with a 1 at `class`.
pub fn one_hot(class: usize, classes: usize) -> Result<Matrix> {
    if class >= classes {
        return Err(Error::InvalidConfig(format!(
            "class {class} out of range for {classes} classes"
        )));
    }
    let mut values = vec![0.0; classes];
    values[class] = 1.0;
    Ok(Matrix::column_vector(&values))
}

/// Shuffles `data` and splits it into `(training, testing)`.
///
/// The training set receives `floor(len * training_ratio)` examples.
pub fn split<D, R>(mut data: Vec<D>, training_ratio: f64, rng: &mut R) -> Result<(Vec<D>, Vec<D>)>
where
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&training_ratio) {
        return Err(Error::InvalidConfig(format!(
            "training_ratio must be within [0, 1], got {training_ratio}"
        )));
    }
    data.shuffle(rng);
    let training_len = (data.len() as f64 * training_ratio) as usize;
    let testing = data.split_off(training_len);
    Ok((data, testing))
}
