//! Grey Wolf Optimizer
//!
//! Population-based minimizer for black-box objectives over a box-bounded
//! continuous search space. The three best wolves (alpha, beta, delta) pull
//! the rest of the pack towards them while a linearly decaying coefficient
//! shifts the search from exploration to exploitation.
//!
//! ```no_run
//! use greywolf::{Bounds, GWOSolver, SimpleProblem, SolverConfig};
//! use ndarray::ArrayView1;
//!
//! let bounds = Bounds::uniform(5, -10.0, 10.0)?;
//! let config = SolverConfig::new(50, 1000).with_seed(42);
//! let sphere = SimpleProblem::new(|x: ArrayView1<'_, f64>| x.dot(&x));
//! let result = GWOSolver::new(config, bounds)?.solve(&sphere)?;
//! println!("{} at {}", result.best_fitness, result.best());
//! # Ok::<(), greywolf::GwoError>(())
//! ```

pub mod algorithms;
pub mod bounds;
pub mod common;
pub mod error;
pub mod hierarchy;
pub mod population;
pub mod problem;

/// Re-export common types
pub use algorithms::{GWOSolver, IterationSnapshot};
pub use bounds::Bounds;
pub use common::*;
pub use error::{GwoError, GwoResult};
pub use hierarchy::Hierarchy;
pub use population::Population;
pub use problem::{BatchFn, BatchProblem, Problem, SimpleProblem};

/// Initialize the optimization engine
pub fn init() {
    tracing::info!("Grey Wolf Optimizer initialized");
}
