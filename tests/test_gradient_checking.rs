// Numerical gradient checks: finite differences of the cost against the
// update applied by one train_step with a unit learning rate.

use approx::assert_relative_eq;
use backprop_nn::{ActivationFunction, CostFunction, Layer, Matrix, Network, Sample, Sgd, train_step};

const H: f64 = 1e-6;

fn params() -> Vec<Matrix> {
    vec![
        Matrix::from_rows(vec![vec![0.2, -0.4, 0.7], vec![0.5, 0.1, -0.3]]).unwrap(),
        Matrix::column_vector(&[0.1, -0.2]),
        Matrix::from_rows(vec![vec![0.6, -0.8], vec![-0.5, 0.9]]).unwrap(),
        Matrix::column_vector(&[0.05, -0.1]),
    ]
}

fn build(p: &[Matrix], hidden: ActivationFunction) -> Network {
    Network::from_layers(vec![
        Layer::from_parts(p[0].clone(), p[1].clone(), hidden).unwrap(),
        Layer::from_parts(p[2].clone(), p[3].clone(), ActivationFunction::Sigmoid).unwrap(),
    ])
    .unwrap()
}

fn nudge(p: &[Matrix], which: usize, index: usize, delta: f64) -> Vec<Matrix> {
    let mut out = p.to_vec();
    let m = &p[which];
    let mut data = m.as_slice().to_vec();
    data[index] += delta;
    out[which] = Matrix::new(m.rows(), m.cols(), data).unwrap();
    out
}

/// The MSE output gradient is p - y, half the derivative of (p - y)ᵀ(p - y).
fn check(hidden: ActivationFunction) {
    let cost = CostFunction::MeanSquaredError;
    let sample = Sample::new(&[0.3, -0.6, 0.9], &[1.0, 0.0]);
    let p = params();

    let mut stepped = build(&p, hidden);
    train_step(&mut stepped, &[&sample], cost, &Sgd::new(1.0)).unwrap();
    let after: Vec<Matrix> = stepped
        .layers()
        .iter()
        .flat_map(|l| [l.weights().clone(), l.biases().clone()])
        .collect();

    let loss = |q: &[Matrix]| {
        let net = build(q, hidden);
        cost.loss(&net.predict(&sample.input).unwrap(), &sample.output).unwrap()
    };

    for which in 0..p.len() {
        for index in 0..p[which].as_slice().len() {
            let numerical = 0.5 * (loss(&nudge(&p, which, index, H)) - loss(&nudge(&p, which, index, -H))) / (2.0 * H);
            let analytical = p[which].as_slice()[index] - after[which].as_slice()[index];
            assert_relative_eq!(numerical, analytical, epsilon = 1e-7, max_relative = 1e-4);
        }
    }
}

#[test]
fn mse_gradients_match_finite_differences() {
    check(ActivationFunction::Sigmoid);
}

#[test]
fn mse_gradients_through_identity_hidden_layer() {
    check(ActivationFunction::Identity);
}
