//! Alpha / beta / delta selection
//!
//! The hierarchy is recomputed from scratch every iteration and holds no
//! state between iterations.

use crate::error::{GwoError, GwoResult};
use crate::population::Population;

/// Number of leading wolves that steer the pack.
pub const LEADERS: usize = 3;

/// Population indices of the three best wolves of the current iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hierarchy {
    pub alpha: usize,
    pub beta: usize,
    pub delta: usize,
}

impl Hierarchy {
    /// Rank the population and pick the three lowest-fitness wolves.
    ///
    /// Ties go to the lower population index. With fewer than three wolves
    /// the missing roles repeat the worst available wolf, so a pack of one
    /// uses the same wolf as alpha, beta and delta.
    pub fn select(population: &Population) -> GwoResult<Self> {
        if population.is_empty() {
            return Err(GwoError::Configuration(
                "cannot select a hierarchy from an empty population".to_string(),
            ));
        }
        let ranked = population.ranked_indices();
        let role = |rank: usize| ranked[rank.min(ranked.len() - 1)];
        Ok(Self {
            alpha: role(0),
            beta: role(1),
            delta: role(2),
        })
    }

    /// Leaders in rank order.
    pub fn leaders(&self) -> [usize; LEADERS] {
        [self.alpha, self.beta, self.delta]
    }
}
