// Tests for activation functions and their derivatives.

use approx::assert_relative_eq;
use backprop_nn::ActivationFunction;

const SAMPLES: [f64; 11] = [-700.0, -50.0, -10.0, -1.0, -1e-3, 0.0, 1e-3, 1.0, 10.0, 50.0, 700.0];

#[test]
fn sigmoid_derivative_is_f_times_one_minus_f() {
    let s = ActivationFunction::Sigmoid;
    for &x in &SAMPLES {
        let fx = s.function(x);
        assert_relative_eq!(s.derivative(x), fx * (1.0 - fx), epsilon = 1e-15);
        assert!(s.derivative(x).is_finite());
    }
    assert_relative_eq!(s.function(0.0), 0.5);
    assert_relative_eq!(s.derivative(0.0), 0.25);
}

#[test]
fn sigmoid_derivative_matches_finite_difference() {
    let s = ActivationFunction::Sigmoid;
    let h = 1e-6;
    for &x in &[-3.0, -0.5, 0.0, 0.5, 3.0] {
        let numerical = (s.function(x + h) - s.function(x - h)) / (2.0 * h);
        assert_relative_eq!(numerical, s.derivative(x), max_relative = 1e-6);
    }
}

#[test]
fn relu_value_and_derivative() {
    let r = ActivationFunction::ReLU;
    for &x in &SAMPLES {
        if x > 0.0 {
            assert_eq!(r.function(x), x);
            assert_eq!(r.derivative(x), 1.0);
        } else {
            assert_eq!(r.function(x), 0.0);
            assert_eq!(r.derivative(x), 0.0);
        }
    }
    assert_eq!(r.derivative(0.0), 0.0);
}

#[test]
fn identity_value_and_derivative() {
    let id = ActivationFunction::Identity;
    for &x in &SAMPLES {
        assert_eq!(id.function(x), x);
        assert_eq!(id.derivative(x), 1.0);
    }
}
