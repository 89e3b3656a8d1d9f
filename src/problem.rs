//! Objective capability supplied by the caller
//!
//! The engine only ever talks to [`BatchProblem`]: one call per iteration
//! with the whole population as a `[population_size, dim]` matrix. Objectives
//! that are easier to write point-by-point implement [`Problem`] instead and
//! get a parallel batch evaluation for free.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

/// Batch objective: one fitness value per row, in row order.
///
/// Implementations may be vectorized, parallel or stochastic. The solver
/// checks the output and aborts the run if the length is wrong or a value
/// is not finite.
pub trait BatchProblem {
    fn evaluate_batch(&self, positions: ArrayView2<'_, f64>) -> Array1<f64>;
}

/// Defines a point-wise optimization problem.
pub trait Problem: Send + Sync {
    /// The objective function to minimize.
    fn objective(&self, variables: ArrayView1<'_, f64>) -> f64;

    /// Optional soft penalty. Returns 0 when the point is acceptable.
    fn penalty(&self, _variables: ArrayView1<'_, f64>) -> f64 {
        0.0
    }

    /// Combined fitness (objective + penalty).
    fn fitness(&self, variables: ArrayView1<'_, f64>) -> f64 {
        self.objective(variables) + self.penalty(variables)
    }
}

impl<P: Problem + ?Sized> BatchProblem for P {
    fn evaluate_batch(&self, positions: ArrayView2<'_, f64>) -> Array1<f64> {
        let rows: Vec<ArrayView1<'_, f64>> = positions.axis_iter(Axis(0)).collect();
        let fitness: Vec<f64> = rows.into_par_iter().map(|row| self.fitness(row)).collect();
        Array1::from(fitness)
    }
}

/// A simple problem defined by a per-point closure.
pub struct SimpleProblem<F>
where
    F: Fn(ArrayView1<'_, f64>) -> f64 + Send + Sync,
{
    pub objective_func: F,
}

impl<F> SimpleProblem<F>
where
    F: Fn(ArrayView1<'_, f64>) -> f64 + Send + Sync,
{
    pub fn new(objective_func: F) -> Self {
        Self { objective_func }
    }
}

impl<F> Problem for SimpleProblem<F>
where
    F: Fn(ArrayView1<'_, f64>) -> f64 + Send + Sync,
{
    fn objective(&self, variables: ArrayView1<'_, f64>) -> f64 {
        (self.objective_func)(variables)
    }
}

/// A batch problem defined by a closure over the whole position matrix.
pub struct BatchFn<F>
where
    F: Fn(ArrayView2<'_, f64>) -> Array1<f64>,
{
    pub batch_func: F,
}

impl<F> BatchFn<F>
where
    F: Fn(ArrayView2<'_, f64>) -> Array1<f64>,
{
    pub fn new(batch_func: F) -> Self {
        Self { batch_func }
    }
}

impl<F> BatchProblem for BatchFn<F>
where
    F: Fn(ArrayView2<'_, f64>) -> Array1<f64>,
{
    fn evaluate_batch(&self, positions: ArrayView2<'_, f64>) -> Array1<f64> {
        (self.batch_func)(positions)
    }
}
