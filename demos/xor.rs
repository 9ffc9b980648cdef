use backprop_nn::{
    evaluate, train, ActivationFunction, CostFunction, NetworkSpec, Sample, TrainConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> backprop_nn::Result<()> {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(0);
    let mut network = NetworkSpec::uniform(&[2, 4, 2], ActivationFunction::Sigmoid).build(&mut rng)?;

    // Two-class one-hot targets: [1, 0] = false, [0, 1] = true.
    let data = vec![
        Sample::new(&[1.0, 0.0], &[0.0, 1.0]),
        Sample::new(&[1.0, 1.0], &[1.0, 0.0]),
        Sample::new(&[0.0, 1.0], &[0.0, 1.0]),
        Sample::new(&[0.0, 0.0], &[1.0, 0.0]),
    ];

    let config = TrainConfig {
        max_epochs: 20_000,
        acceptable_cost: 0.01,
        batch_size: 4,
        learning_rate: 0.5,
        cost_function: CostFunction::MeanSquaredError,
    };

    let outcome = train(&mut network, &data, &config, &mut rng)?;
    println!(
        "{:?} after {} epochs, final cost = {:.6}",
        outcome.state,
        outcome.epochs,
        outcome.final_cost.unwrap_or(f64::NAN)
    );

    for sample in &data {
        let output = network.predict(&sample.input)?;
        println!("Input: {:?} -> Output: {:?}", sample.input.as_slice(), output.as_slice());
    }

    let eval = evaluate(&network, &data, config.cost_function)?;
    println!("Accuracy: {:.2}, mean cost: {:.6}", eval.accuracy, eval.mean_cost);
    Ok(())
}
