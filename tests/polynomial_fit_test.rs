use greywolf::{Bounds, GWOSolver, Problem, SolverConfig};
use ndarray::ArrayView1;
use rand::prelude::*;
use std::f64::consts::PI;

/// Least-squares fit of a polynomial to noisy samples of sin(2*pi*x).
/// Variables are the polynomial coefficients, lowest degree first.
struct PolynomialFit {
    samples: Vec<(f64, f64)>,
}

impl PolynomialFit {
    fn new(points: usize, rng: &mut StdRng) -> Self {
        let dx = 1.0 / (points - 1) as f64;
        let samples = (0..points)
            .map(|i| {
                let x = i as f64 * dx;
                let y = (2.0 * PI * x).sin() + rng.gen_range(-0.07..0.07);
                (x, y)
            })
            .collect();
        Self { samples }
    }

    fn eval(x: f64, coefficients: ArrayView1<'_, f64>) -> f64 {
        coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}

impl Problem for PolynomialFit {
    fn objective(&self, variables: ArrayView1<'_, f64>) -> f64 {
        let err: f64 = self
            .samples
            .iter()
            .map(|&(x, y)| (Self::eval(x, variables) - y).powi(2))
            .sum();
        err / self.samples.len() as f64
    }
}

#[test]
fn test_degree_nine_fit_of_noisy_sine() {
    let mut rng = StdRng::seed_from_u64(17);
    let problem = PolynomialFit::new(10, &mut rng);

    let bounds = Bounds::uniform(10, -15.0, 15.0).unwrap();
    let config = SolverConfig::new(100, 500).with_seed(4);
    let result = GWOSolver::new(config, bounds.clone()).unwrap().solve(&problem).unwrap();

    assert!(bounds.contains(&result.best_variables));
    assert!(
        result.best_fitness < 0.1,
        "GWO failed to fit the samples: mse {}",
        result.best_fitness
    );
}

#[test]
fn test_cubic_fit_of_noisy_sine() {
    let mut rng = StdRng::seed_from_u64(17);
    let problem = PolynomialFit::new(10, &mut rng);
    let baseline = problem.objective(ndarray::Array1::<f64>::zeros(4).view());

    let bounds = Bounds::uniform(4, -40.0, 40.0).unwrap();
    let config = SolverConfig::new(100, 500).with_seed(5);
    let result = GWOSolver::new(config, bounds).unwrap().solve(&problem).unwrap();

    assert!(baseline > 0.3, "baseline {}", baseline);
    assert!(
        result.best_fitness < 0.1,
        "GWO failed to fit the samples: mse {} (zero polynomial {})",
        result.best_fitness,
        baseline
    );
}
