//! Minimize the 5-dimensional sphere function and report the best wolf.
//!
//! Run with: cargo run --release --example sphere_demo

use greywolf::{BatchFn, Bounds, GWOSolver, SolverConfig};
use ndarray::{ArrayView2, Axis};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    greywolf::init();

    let sphere = BatchFn::new(|m: ArrayView2<'_, f64>| m.map_axis(Axis(1), |row| row.dot(&row)));
    let bounds = Bounds::uniform(5, -10.0, 10.0)?;
    let mut solver = GWOSolver::new(SolverConfig::new(50, 1000), bounds)?;

    let start = Instant::now();
    let result = solver.solve(&sphere)?;
    let elapsed = start.elapsed();

    println!("Best fitness {:.6}", result.best_fitness);
    println!("Best solution: {}", result.best());
    println!("Execution time: {:.4} secs", elapsed.as_secs_f64());
    Ok(())
}
