use rand::Rng;

use crate::{
    activation::activation::ActivationFunction,
    error::{Error, Result},
    math::matrix::Matrix,
};

/// Fully-connected layer: `a = f(W·x + b)`.
///
/// `weights` is (neurons × inputs) and `biases` is (neurons × 1). The layer owns
/// both matrices; an update replaces them wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Matrix,
    biases: Matrix,
    activator: ActivationFunction,
}

impl Layer {
    /// Random weights and biases in (0, 1).
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            weights: Matrix::random(size, input_size, rng),
            biases: Matrix::random(size, 1, rng),
            activator: activation,
        }
    }

    pub fn zeros(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        Layer {
            weights: Matrix::zeros(size, input_size),
            biases: Matrix::zeros(size, 1),
            activator: activation,
        }
    }

    /// Builds a layer from explicit parameters; `biases` must be a column with
    /// one row per weight row.
    pub fn from_parts(weights: Matrix, biases: Matrix, activation: ActivationFunction) -> Result<Layer> {
        if biases.dims() != (weights.rows(), 1) {
            return Err(Error::mismatch("layer biases", weights.dims(), biases.dims()));
        }
        Ok(Layer { weights, biases, activator: activation })
    }

    /// Number of neurons, i.e. the output width.
    pub fn size(&self) -> usize {
        self.weights.rows()
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activator
    }

    /// Returns `(z, a)`: the pre-activation `W·x + b` and its activation.
    pub fn feed_from(&self, input: &Matrix) -> Result<(Matrix, Matrix)> {
        if input.dims() != (self.input_size(), 1) {
            return Err(Error::mismatch("layer input", (self.input_size(), 1), input.dims()));
        }
        let z = self.weights.dot(input)?.add(&self.biases)?;
        let a = z.map(|x| self.activator.function(x));
        Ok((z, a))
    }

    /// δ = error ⊙ σ'(z), where `error` is ∂L/∂a for this layer and `z` the
    /// pre-activation it was computed from.
    pub fn delta(&self, error: &Matrix, z: &Matrix) -> Result<Matrix> {
        let act_derivative = z.map(|x| self.activator.derivative(x));
        error.hadamard(&act_derivative)
    }

    /// Replaces weights and biases with `W - lr·gW` and `b - lr·gb`.
    ///
    /// Both new matrices are computed before either is stored, so a shape
    /// error leaves the layer untouched.
    pub fn apply_gradients(&mut self, weights_grad: &Matrix, biases_grad: &Matrix, lr: f64) -> Result<()> {
        let weights = self.weights.sub(&(weights_grad * lr))?;
        let biases = self.biases.sub(&(biases_grad * lr))?;
        self.weights = weights;
        self.biases = biases;
        Ok(())
    }
}
