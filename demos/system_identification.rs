use micro_nlms::identification::{PassThresholds, SystemIdentification};
use micro_nlms::nlms::FilterConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    const STEP_SIZE: f64 = 0.3;
    const REGULARIZATION: f64 = 1e-10;
    const TAP_COUNT: usize = 30;
    const ITERATIONS: usize = 5000;
    const SEED: u64 = 824;
    const REPORT_INTERVAL: usize = 500;

    tracing_subscriber::fmt::init();

    // Identify a random FIR filter from random input on (-1, 1).
    let mut rng = StdRng::seed_from_u64(SEED);
    let reference: Vec<f64> = (0..TAP_COUNT).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let config = FilterConfig::new(TAP_COUNT, STEP_SIZE, REGULARIZATION);
    let thresholds = PassThresholds::default();

    println!("Identifying {TAP_COUNT} tap filter (μ={STEP_SIZE}, ε={REGULARIZATION}, seed={SEED})");
    println!();

    let mut bench = SystemIdentification::new(&reference, config);
    let inputs = (0..ITERATIONS).map(|_| rng.gen_range(-1.0..1.0));
    bench.run(inputs, |metrics| {
        tracing::debug!(
            iteration = metrics.iteration,
            misalignment_db = metrics.misalignment_db,
            squared_error_db = metrics.squared_error_db
        );
        if metrics.iteration % REPORT_INTERVAL == 0 {
            tracing::info!(
                iteration = metrics.iteration,
                misalignment_db = metrics.misalignment_db,
                squared_error_db = metrics.squared_error_db,
                "progress"
            );
        }
    });

    let verdict = bench.verdict(&thresholds);
    let status = |passed: bool| if passed { "PASS" } else { "FAIL" };
    println!();
    println!(
        "{}: Misalignment < {:.0} dB",
        status(verdict.misalignment_passed),
        thresholds.misalignment_db
    );
    println!(
        "{}: Squared error < {:.0} dB",
        status(verdict.squared_error_passed),
        thresholds.squared_error_db
    );

    if let Some(metrics) = bench.latest() {
        let report = serde_json::json!({
            "config": config,
            "iterations": metrics.iteration,
            "misalignment_db": metrics.misalignment_db,
            "squared_error_db": metrics.squared_error_db,
            "passed": verdict.passed(),
            "weights": bench.adaptive().weights(),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => tracing::error!(%error, "failed to serialize report"),
        }
    }

    if !verdict.passed() {
        std::process::exit(1);
    }
}
