use crate::error::{GwoError, GwoResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wolf: one candidate position in the search space.
///
/// `fitness` is `None` until the position has been evaluated, and is reset
/// to `None` whenever the position is overwritten.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub variables: Array1<f64>,
    pub fitness: Option<f64>,
}

impl Individual {
    pub fn new(variables: Array1<f64>) -> Self {
        Self { variables, fitness: None }
    }

    pub fn evaluated(variables: Array1<f64>, fitness: f64) -> Self {
        Self { variables, fitness: Some(fitness) }
    }

    /// Replace the position and mark the cached fitness stale.
    pub fn move_to(&mut self, variables: Array1<f64>) {
        self.variables = variables;
        self.fitness = None;
    }

    /// Fitness used for ranking; unevaluated wolves rank last.
    pub fn rank_fitness(&self) -> f64 {
        self.fitness.unwrap_or(f64::INFINITY)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

/// Configuration for the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub population_size: usize,
    pub max_iterations: usize,
    /// Seed for the solver's random source. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SolverConfig {
    pub fn new(population_size: usize, max_iterations: usize) -> Self {
        Self { population_size, max_iterations, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> GwoResult<()> {
        if self.population_size == 0 {
            return Err(GwoError::Configuration("population_size must be > 0".to_string()));
        }
        if self.max_iterations == 0 {
            return Err(GwoError::Configuration("max_iterations must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_iterations: 100,
            seed: None,
        }
    }
}

/// The result of an optimization run: the best wolf ever observed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best_variables: Array1<f64>,
    pub best_fitness: f64,
    /// Best-so-far fitness after the initial evaluation and after every
    /// iteration. Never increases.
    pub history: Vec<f64>,
    /// Number of batch objective calls made during the run.
    pub evaluations: usize,
}

impl OptimizationResult {
    pub fn best(&self) -> Individual {
        Individual::evaluated(self.best_variables.clone(), self.best_fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_individual_display() {
        let wolf = Individual::evaluated(array![1.5, -2.0, 0.0], 3.0);
        assert_eq!(wolf.to_string(), "[1.5,-2,0]");
    }

    #[test]
    fn test_move_marks_fitness_stale() {
        let mut wolf = Individual::evaluated(array![1.0], 1.0);
        wolf.move_to(array![0.5]);
        assert_eq!(wolf.fitness, None);
        assert_eq!(wolf.rank_fitness(), f64::INFINITY);
    }

    #[test]
    fn test_config_validation() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(SolverConfig::new(0, 10).validate().is_err());
        assert!(SolverConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_config_seed_defaults_to_none() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"population_size":30,"max_iterations":200}"#).unwrap();
        assert_eq!(config, SolverConfig::new(30, 200));
    }
}
