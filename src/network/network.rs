use rand::Rng;

use crate::{
    activation::activation::ActivationFunction,
    error::{Error, Result},
    layers::dense::Layer,
    math::matrix::Matrix,
};

/// Ordered stack of dense layers where each layer's width feeds the next.
///
/// Layer count and widths are fixed at construction; training only replaces
/// weight and bias values.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples with random
    /// parameters in (0, 1).
    pub fn new<R: Rng + ?Sized>(
        layer_specs: Vec<(usize, usize, ActivationFunction)>,
        rng: &mut R,
    ) -> Result<Network> {
        let layers = layer_specs
            .into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation, rng))
            .collect();
        Network::from_layers(layers)
    }

    /// Builds a network from layer widths `[inputs, hidden.., outputs]`, every
    /// layer using `activation`.
    pub fn random<R: Rng + ?Sized>(
        sizes: &[usize],
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Result<Network> {
        Network::new(chain(sizes, activation)?, rng)
    }

    /// Same shape as `random` but with every weight and bias set to zero.
    pub fn zeros(sizes: &[usize], activation: ActivationFunction) -> Result<Network> {
        let layers = chain(sizes, activation)?
            .into_iter()
            .map(|(size, input_size, activation)| Layer::zeros(size, input_size, activation))
            .collect();
        Network::from_layers(layers)
    }

    /// Wraps pre-built layers, checking that consecutive widths line up.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        if layers.is_empty() {
            return Err(Error::InvalidConfig("a network needs at least one layer".into()));
        }
        for pair in layers.windows(2) {
            if pair[0].size() != pair[1].input_size() {
                return Err(Error::mismatch(
                    "layer chain",
                    (pair[0].size(), 1),
                    (pair[1].input_size(), 1),
                ));
            }
        }
        Ok(Network { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    /// Forward pass. `input` must be an (input_size × 1) column vector.
    pub fn predict(&self, input: &Matrix) -> Result<Matrix> {
        let mut current = input.clone();
        for layer in &self.layers {
            let (_, a) = layer.feed_from(&current)?;
            current = a;
        }
        Ok(current)
    }
}

fn chain(sizes: &[usize], activation: ActivationFunction) -> Result<Vec<(usize, usize, ActivationFunction)>> {
    if sizes.len() < 2 {
        return Err(Error::InvalidConfig(format!(
            "need at least an input and an output width, got {sizes:?}"
        )));
    }
    Ok(sizes.windows(2).map(|w| (w[1], w[0], activation)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_builds_chained_layers() {
        let mut rng = StdRng::seed_from_u64(1);
        let net = Network::random(&[4, 3, 2], ActivationFunction::ReLU, &mut rng).unwrap();
        assert_eq!(net.layers().len(), 2);
        assert_eq!(net.layers()[0].weights().dims(), (3, 4));
        assert_eq!(net.layers()[1].weights().dims(), (2, 3));
        assert_eq!(net.layers()[1].biases().dims(), (2, 1));
        assert_eq!((net.input_size(), net.output_size()), (4, 2));
    }

    #[test]
    fn from_layers_rejects_broken_chain() {
        let layers = vec![
            Layer::zeros(3, 4, ActivationFunction::ReLU),
            Layer::zeros(2, 5, ActivationFunction::ReLU),
        ];
        assert!(matches!(
            Network::from_layers(layers),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(Network::from_layers(vec![]).is_err());
    }

    #[test]
    fn too_few_sizes_is_a_config_error() {
        assert!(matches!(
            Network::zeros(&[3], ActivationFunction::Identity),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn predict_rejects_wrong_input_width() {
        let net = Network::zeros(&[3, 2], ActivationFunction::Identity).unwrap();
        let res = net.predict(&Matrix::column_vector(&[1.0, 2.0]));
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
    }
}
