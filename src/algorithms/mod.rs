pub mod gwo;

pub use gwo::{coefficient, next_position, GWOSolver, IterationSnapshot};
