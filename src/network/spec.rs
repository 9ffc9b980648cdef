use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::network::Network;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `size`       — number of neurons in this layer
/// - `input_size` — number of neurons feeding into this layer (i.e. the output
///                  size of the previous layer, or the raw input dimension for
///                  the first layer)
/// - `activation` — activation function applied after the linear transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub input_size: usize,
    pub activation: ActivationFunction,
}

/// A serializable description of a network architecture.
///
/// Only the shape is stored. Building a `Network` from it always draws fresh
/// random parameters; trained weights are never written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Layer widths `[inputs, hidden.., outputs]`, one activation for every layer.
    pub fn uniform(sizes: &[usize], activation: ActivationFunction) -> NetworkSpec {
        NetworkSpec {
            layers: sizes
                .windows(2)
                .map(|w| LayerSpec { size: w[1], input_size: w[0], activation })
                .collect(),
        }
    }

    /// Instantiates the architecture with random parameters in (0, 1).
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        let specs = self
            .layers
            .iter()
            .map(|l| (l.size, l.input_size, l.activation))
            .collect();
        Network::new(specs, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
