use crate::{
    data::TrainingData,
    error::{Error, Result},
    loss::cost_function::CostFunction,
    math::matrix::Matrix,
    network::network::Network,
    optim::sgd::Sgd,
};

/// Gradients of one batch instance, indexed by layer.
struct InstanceGradients {
    cost: f64,
    weights: Vec<Matrix>,
    biases: Vec<Matrix>,
}

/// Runs one minibatch gradient-descent step and returns the mean batch cost.
///
/// Every instance is fed forward and backpropagated against the current
/// weights; the per-layer gradients are averaged over the batch and only then
/// applied to every layer. Any shape error aborts the step before the first
/// update, leaving `network` unchanged.
pub fn train_step<D: TrainingData + ?Sized>(
    network: &mut Network,
    batch: &[&D],
    cost: CostFunction,
    optimizer: &Sgd,
) -> Result<f64> {
    if batch.is_empty() {
        return Err(Error::EmptyBatch);
    }

    // Zero-initialize accumulated gradient storage.
    let mut acc_grads: Vec<(Matrix, Matrix)> = network.layers().iter()
        .map(|layer| (
            Matrix::zeros(layer.weights().rows(), layer.weights().cols()),
            Matrix::zeros(layer.biases().rows(), layer.biases().cols()),
        ))
        .collect();
    let mut total_cost = 0.0;

    for sample in batch {
        let grads = backpropagate(network, *sample, cost)?;
        total_cost += grads.cost;
        for ((w_acc, b_acc), (w_grad, b_grad)) in acc_grads
            .iter_mut()
            .zip(grads.weights.iter().zip(grads.biases.iter()))
        {
            *w_acc = w_acc.add(w_grad)?;
            *b_acc = b_acc.add(b_grad)?;
        }
    }

    // Average, then apply to all layers at once.
    let inv_batch = 1.0 / batch.len() as f64;
    for (layer, (w_acc, b_acc)) in network.layers_mut().iter_mut().zip(acc_grads) {
        optimizer.step(layer, &(&w_acc * inv_batch), &(&b_acc * inv_batch))?;
    }

    Ok(total_cost * inv_batch)
}

/// Forward and backward pass for a single instance.
///
/// `activations[l]` is the input to layer `l` (the raw sample for `l == 0`),
/// `zs[l]` its pre-activation. Deltas are computed from the output layer
/// back, each from the delta and weights of the layer after it.
fn backpropagate<D: TrainingData + ?Sized>(
    network: &Network,
    sample: &D,
    cost: CostFunction,
) -> Result<InstanceGradients> {
    let layers = network.layers();
    let expected = sample.output_data();

    let mut activations = Vec::with_capacity(layers.len() + 1);
    let mut zs = Vec::with_capacity(layers.len());
    activations.push(sample.input_data());
    for layer in layers {
        let (z, a) = layer.feed_from(&activations[activations.len() - 1])?;
        zs.push(z);
        activations.push(a);
    }

    let output = &activations[layers.len()];
    let sample_cost = cost.loss(output, &expected)?;
    let error = cost.output_gradient(output, &expected)?;

    let last = layers.len() - 1;
    let mut deltas = vec![Matrix::default(); layers.len()];
    deltas[last] = layers[last].delta(&error, &zs[last])?;
    for l in (0..last).rev() {
        // Propagate δ_{l+1} through W_{l+1}ᵀ to get ∂L/∂a_l
        let error = layers[l + 1].weights().transpose().dot(&deltas[l + 1])?;
        deltas[l] = layers[l].delta(&error, &zs[l])?;
    }

    let weights = deltas
        .iter()
        .zip(activations.iter())
        .map(|(delta, input)| delta.dot(&input.transpose()))
        .collect::<Result<Vec<_>>>()?;

    Ok(InstanceGradients { cost: sample_cost, weights, biases: deltas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::data::Sample;
    use crate::layers::dense::Layer;

    fn single_layer(w: f64, b: f64) -> Network {
        let layer = Layer::from_parts(
            Matrix::column_vector(&[w]),
            Matrix::column_vector(&[b]),
            ActivationFunction::Identity,
        ).unwrap();
        Network::from_layers(vec![layer]).unwrap()
    }

    #[test]
    fn identity_layer_gradient_matches_hand_computation() {
        // z = w·x + b = 2·3 + 1 = 7, target 4 → δ = 3, gW = δ·x = 9, gb = 3
        let mut net = single_layer(2.0, 1.0);
        let sample = Sample::new(&[3.0], &[4.0]);
        let cost = train_step(&mut net, &[&sample], CostFunction::MeanSquaredError, &Sgd::new(0.1)).unwrap();

        assert_eq!(cost, 9.0);
        assert!((net.layers()[0].weights().get(0, 0) - (2.0 - 0.9)).abs() < 1e-12);
        assert!((net.layers()[0].biases().get(0, 0) - (1.0 - 0.3)).abs() < 1e-12);
    }

    #[test]
    fn gradients_are_averaged_not_summed() {
        let sample = Sample::new(&[3.0], &[4.0]);
        let mut one = single_layer(2.0, 1.0);
        let mut three = single_layer(2.0, 1.0);
        let optimizer = Sgd::new(0.1);

        train_step(&mut one, &[&sample], CostFunction::MeanSquaredError, &optimizer).unwrap();
        train_step(&mut three, &[&sample, &sample, &sample], CostFunction::MeanSquaredError, &optimizer)
            .unwrap();

        let (a, b) = (&one.layers()[0], &three.layers()[0]);
        assert!((a.weights().get(0, 0) - b.weights().get(0, 0)).abs() < 1e-12);
        assert!((a.biases().get(0, 0) - b.biases().get(0, 0)).abs() < 1e-12);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let mut net = single_layer(1.0, 0.0);
        let batch: [&Sample; 0] = [];
        let res = train_step(&mut net, &batch, CostFunction::MeanSquaredError, &Sgd::new(0.1));
        assert!(matches!(res, Err(Error::EmptyBatch)));
    }

    #[test]
    fn mismatched_sample_leaves_network_untouched() {
        let mut net = single_layer(1.0, 0.0);
        let before = net.clone();
        let good = Sample::new(&[1.0], &[1.0]);
        let bad = Sample::new(&[1.0, 2.0], &[1.0]);
        let res = train_step(&mut net, &[&good, &bad], CostFunction::MeanSquaredError, &Sgd::new(0.1));
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
        assert_eq!(net, before);
    }
}
