use crate::bounds::Bounds;
use crate::common::{Individual, OptimizationResult, SolverConfig};
use crate::error::GwoResult;
use crate::hierarchy::{Hierarchy, LEADERS};
use crate::population::Population;
use crate::problem::BatchProblem;
use ndarray::{Array1, ArrayView1};
use rand::prelude::*;

/// State of the pack handed to an observer after every iteration.
pub struct IterationSnapshot<'a> {
    /// 0-indexed iteration that just finished.
    pub iteration: usize,
    /// Value of `a` used to move the pack during this iteration.
    pub coefficient: f64,
    /// Pack after the move, clamp and re-evaluation.
    pub population: &'a Population,
    /// Leaders of the re-evaluated pack.
    pub hierarchy: Hierarchy,
    /// Best wolf seen so far in the run.
    pub best: &'a Individual,
}

pub struct GWOSolver<R = StdRng> {
    pub config: SolverConfig,
    bounds: Bounds,
    rng: R,
}

impl GWOSolver<StdRng> {
    /// Solver with its own `StdRng`, seeded from `config.seed` when present.
    pub fn new(config: SolverConfig, bounds: Bounds) -> GwoResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, bounds, rng)
    }
}

impl<R: Rng> GWOSolver<R> {
    pub fn with_rng(config: SolverConfig, bounds: Bounds, rng: R) -> GwoResult<Self> {
        config.validate()?;
        Ok(Self { config, bounds, rng })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn solve<P: BatchProblem + ?Sized>(&mut self, problem: &P) -> GwoResult<OptimizationResult> {
        self.solve_with_observer(problem, |_| {})
    }

    /// Run the optimizer, calling `observer` once per iteration.
    ///
    /// The objective is called `max_iterations + 1` times: once for the
    /// initial pack and once after every move. Any evaluation error aborts
    /// the run and no result is returned.
    pub fn solve_with_observer<P, F>(&mut self, problem: &P, mut observer: F) -> GwoResult<OptimizationResult>
    where
        P: BatchProblem + ?Sized,
        F: FnMut(&IterationSnapshot<'_>),
    {
        self.config.validate()?;
        let max_iterations = self.config.max_iterations;

        tracing::info!(
            "GWO starting: dim={}, population={}, iterations={}, seeded={}",
            self.bounds.dim(),
            self.config.population_size,
            max_iterations,
            self.config.seed.is_some()
        );

        // 1. Initialize the pack and evaluate it once
        let mut population = Population::random(self.config.population_size, &self.bounds, &mut self.rng)?;
        population.evaluate(problem)?;
        let mut evaluations = 1;

        let mut hierarchy = Hierarchy::select(&population)?;
        let mut best = population.individuals()[hierarchy.alpha].clone();

        let mut history = Vec::with_capacity(max_iterations + 1);
        history.push(best.rank_fitness());

        for iter in 0..max_iterations {
            let a = coefficient(iter, max_iterations);
            tracing::trace!("iteration {}: a = {:.4}", iter, a);

            // Leaders are frozen before any wolf moves
            let leaders: [Array1<f64>; LEADERS] =
                hierarchy.leaders().map(|i| population.individuals()[i].variables.clone());

            for wolf in population.iter_mut() {
                let mut next = next_position(&mut self.rng, a, wolf.variables.view(), &leaders);
                self.bounds.clamp(next.view_mut());
                wolf.move_to(next);
            }

            population.evaluate(problem)?;
            evaluations += 1;

            hierarchy = Hierarchy::select(&population)?;
            let alpha = &population.individuals()[hierarchy.alpha];
            if alpha.rank_fitness() < best.rank_fitness() {
                tracing::debug!(
                    "iteration {}: best fitness improved {} -> {}",
                    iter,
                    best.rank_fitness(),
                    alpha.rank_fitness()
                );
                best = alpha.clone();
            }
            history.push(best.rank_fitness());

            observer(&IterationSnapshot {
                iteration: iter,
                coefficient: a,
                population: &population,
                hierarchy,
                best: &best,
            });
        }

        tracing::info!(
            "GWO finished: best fitness {} after {} evaluations",
            best.rank_fitness(),
            evaluations
        );

        Ok(OptimizationResult {
            best_fitness: best.rank_fitness(),
            best_variables: best.variables,
            history,
            evaluations,
        })
    }
}

/// Exploration coefficient for iteration `iter`, decaying linearly from 2
/// towards 0 over `max_iterations`.
pub fn coefficient(iter: usize, max_iterations: usize) -> f64 {
    2.0 - iter as f64 * (2.0 / max_iterations as f64)
}

/// Hunting equations for one wolf. Each coordinate is the mean of the
/// positions pulled towards alpha, beta and delta. Draws two uniforms per
/// (dimension, leader) pair, dimension-major, leaders in rank order.
pub fn next_position<R: Rng + ?Sized>(
    rng: &mut R,
    a: f64,
    current: ArrayView1<'_, f64>,
    leaders: &[Array1<f64>; LEADERS],
) -> Array1<f64> {
    let mut next = Array1::zeros(current.len());
    for j in 0..current.len() {
        let mut sum = 0.0;
        for leader in leaders {
            let r1: f64 = rng.gen();
            let r2: f64 = rng.gen();
            let big_a = 2.0 * a * r1 - a;
            let c = 2.0 * r2;
            let d = (c * leader[j] - current[j]).abs();
            sum += leader[j] - big_a * d;
        }
        next[j] = sum / LEADERS as f64;
    }
    next
}
