//! Box bounds of the search space
//!
//! A `Bounds` value is validated once at construction and is immutable
//! afterwards. Every coordinate the optimizer writes is saturated into
//! `[lower[i], upper[i]]`.

use crate::error::{GwoError, GwoResult};
use ndarray::{Array1, ArrayViewMut1};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-dimension lower/upper limits of the search space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    lower: Array1<f64>,
    upper: Array1<f64>,
}

/// Unvalidated wire form of [`Bounds`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawBounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = GwoError;

    fn try_from(raw: RawBounds) -> GwoResult<Self> {
        Bounds::from_arrays(Array1::from(raw.lower), Array1::from(raw.upper))
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        RawBounds {
            lower: bounds.lower.to_vec(),
            upper: bounds.upper.to_vec(),
        }
    }
}

impl Bounds {
    /// Create bounds for an explicit dimension count `dim`.
    ///
    /// Fails if `dim == 0`, if either range does not have exactly `dim`
    /// entries, if any entry is non-finite, or if `lower[i] > upper[i]`.
    pub fn new(dim: usize, lower: Vec<f64>, upper: Vec<f64>) -> GwoResult<Self> {
        if dim == 0 {
            return Err(GwoError::Configuration("dimension count must be > 0".to_string()));
        }
        if lower.len() != dim || upper.len() != dim {
            return Err(GwoError::Configuration(format!(
                "lower and upper bounds must have {} entries, got {} and {}",
                dim,
                lower.len(),
                upper.len()
            )));
        }
        Self::from_arrays(Array1::from(lower), Array1::from(upper))
    }

    /// Create bounds from two arrays; the dimension is their common length.
    pub fn from_arrays(lower: Array1<f64>, upper: Array1<f64>) -> GwoResult<Self> {
        if lower.is_empty() {
            return Err(GwoError::Configuration("dimension count must be > 0".to_string()));
        }
        if lower.len() != upper.len() {
            return Err(GwoError::Configuration(format!(
                "lower has {} entries but upper has {}",
                lower.len(),
                upper.len()
            )));
        }
        for (i, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(GwoError::Configuration(format!(
                    "bounds of dimension {} must be finite, got [{}, {}]",
                    i, lo, hi
                )));
            }
            if lo > hi {
                return Err(GwoError::Configuration(format!(
                    "lower bound {} exceeds upper bound {} in dimension {}",
                    lo, hi, i
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Same `[min, max]` range for every one of `dim` dimensions.
    pub fn uniform(dim: usize, min: f64, max: f64) -> GwoResult<Self> {
        Self::new(dim, vec![min; dim], vec![max; dim])
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    /// Check whether every coordinate of `point` lies inside the box.
    pub fn contains(&self, point: &Array1<f64>) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&x, (&lo, &hi))| x >= lo && x <= hi)
    }

    /// Saturate every coordinate into its range. Out-of-range values land
    /// exactly on the violated boundary.
    pub fn clamp(&self, mut point: ArrayViewMut1<f64>) {
        for ((x, &lo), &hi) in point.iter_mut().zip(self.lower.iter()).zip(self.upper.iter()) {
            *x = (*x).clamp(lo, hi);
        }
    }

    /// Draw a point uniformly, each dimension independently from `[lower, upper)`.
    /// Degenerate ranges (`lower == upper`) yield the bound itself.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| {
                let u: f64 = rng.gen();
                if lo == hi {
                    return lo;
                }
                // `hi - lo` can overflow for finite bounds, the convex form cannot
                (lo * (1.0 - u) + hi * u).clamp(lo, hi)
            })
            .collect()
    }
}
