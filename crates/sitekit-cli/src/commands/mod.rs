pub mod bonds;
pub mod energy;
pub mod pocket;

use crate::error::Result;
use sitekit::core::geometry::DistanceMatrix;
use sitekit::core::io::xyz::read_xyz;
use sitekit::core::models::molecule::Molecule;
use sitekit::core::topology::BondGraph;
use std::path::Path;

/// Loads a coordinate file and derives the shared geometry caches every
/// command starts from.
fn load_structure(
    path: &Path,
    covalent_factor: f64,
) -> Result<(Molecule, DistanceMatrix, BondGraph)> {
    let molecule = read_xyz(path)?;
    let positions: Vec<_> = molecule.positions().copied().collect();
    let distances = DistanceMatrix::from_positions(&positions);
    let graph = BondGraph::build(&molecule, &distances, covalent_factor);
    Ok((molecule, distances, graph))
}
