mod carve;
mod grid;

pub use carve::{carve, carve_around_atoms};
pub use grid::generate_grid;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("grid spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),
}
