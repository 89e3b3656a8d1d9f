use crate::bounds::Bounds;
use crate::common::Individual;
use crate::error::{GwoError, GwoResult};
use crate::problem::BatchProblem;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Fixed-size pack of wolves. Wolves are moved in place each iteration and
/// are never added or removed after initialization.
#[derive(Clone, Debug)]
pub struct Population {
    individuals: Vec<Individual>,
    dim: usize,
}

impl Population {
    /// Sample `size` wolves uniformly inside `bounds`. Fitness starts unset.
    pub fn random<R: Rng + ?Sized>(size: usize, bounds: &Bounds, rng: &mut R) -> GwoResult<Self> {
        if size == 0 {
            return Err(GwoError::Configuration("population_size must be > 0".to_string()));
        }
        let individuals = (0..size).map(|_| Individual::new(bounds.sample(rng))).collect();
        Ok(Self { individuals, dim: bounds.dim() })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.individuals.iter_mut()
    }

    /// Position matrix of shape `[len, dim]`, one wolf per row.
    pub fn positions(&self) -> Array2<f64> {
        let mut matrix = Array2::zeros((self.len(), self.dim));
        for (mut row, wolf) in matrix.rows_mut().into_iter().zip(&self.individuals) {
            row.assign(&wolf.variables);
        }
        matrix
    }

    /// Store a batch of fitness values, one per wolf in row order.
    ///
    /// The whole batch is checked before anything is written, so a rejected
    /// batch leaves the cached fitness untouched.
    pub fn assign_fitness(&mut self, fitness: &Array1<f64>) -> GwoResult<()> {
        if fitness.len() != self.len() {
            return Err(GwoError::Evaluation(format!(
                "objective returned {} values for a population of {}",
                fitness.len(),
                self.len()
            )));
        }
        if let Some((row, value)) = fitness.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(GwoError::Evaluation(format!(
                "objective returned non-finite fitness {} for row {}",
                value, row
            )));
        }
        for (wolf, &value) in self.individuals.iter_mut().zip(fitness.iter()) {
            wolf.fitness = Some(value);
        }
        Ok(())
    }

    /// Evaluate every wolf with one batch call.
    pub fn evaluate<P: BatchProblem + ?Sized>(&mut self, problem: &P) -> GwoResult<()> {
        let positions = self.positions();
        let fitness = problem.evaluate_batch(positions.view());
        self.assign_fitness(&fitness).map_err(|e| {
            tracing::warn!("Aborting run: {}", e);
            e
        })
    }

    /// Indices ordered from best to worst fitness. Ties keep population order.
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            self.individuals[a]
                .rank_fitness()
                .total_cmp(&self.individuals[b].rank_fitness())
        });
        order
    }

    /// The `k` best wolves, best first. Returns fewer than `k` when the
    /// population is smaller.
    pub fn best_k(&self, k: usize) -> Vec<&Individual> {
        self.ranked_indices()
            .into_iter()
            .take(k)
            .map(|i| &self.individuals[i])
            .collect()
    }
}
