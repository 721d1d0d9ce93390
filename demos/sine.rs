//! Minimize and maximize sin(x) over [-π, 2π] from two initial samples.
//!
//! Run with: `cargo run --example sine`
//! Add `--features tracing` to see per-iteration log events.

use std::f64::consts::PI;

use bayesopt::prelude::*;
use nalgebra::DMatrix;

fn run(direction: Direction) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let x_init = DMatrix::from_column_slice(2, 1, &[2.0, 3.5]);
    let y_init = x_init.map(f64::sin);

    let mut opt = BayesianOptimizer::builder(
        |x: f64| Ok::<_, Error>(x.sin()),
        &x_init,
        &y_init,
        (-PI, 2.0 * PI),
        50,
    )
    .length_scale(0.6)
    .signal_std(2.0)
    .xsi(0.05)
    .direction(direction)
    .build()?;

    let best = opt.optimize(50)?;
    println!("{direction:?}");
    println!("  x     = {:.4}", best.x);
    println!("  f(x)  = {:.4}", best.y);
    println!("  {} evaluations, {:?}", best.evaluations, best.termination);

    opt.to_csv(std::io::stdout().lock())?;
    Ok(())
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    for direction in [Direction::Minimize, Direction::Maximize] {
        if let Err(e) = run(direction) {
            eprintln!("optimization failed: {e}");
            std::process::exit(1);
        }
    }
}
