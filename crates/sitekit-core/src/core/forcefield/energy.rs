use super::params::{AtomParams, AtomType, Forcefield};
use super::potentials;
use crate::core::geometry::DistanceMatrix;
use crate::core::models::molecule::Molecule;
use crate::core::topology::{Bond, BondGraph};
use nalgebra::Vector3;
use thiserror::Error;

/// Per-bond order inference is out of scope; every bond carries this order.
pub const DEFAULT_BOND_ORDER: f64 = 1.0;

/// Bonded atoms closer than this are treated as coincident; the stretch
/// formulas divide by the separation and are undefined there.
const MIN_BOND_SEPARATION: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum EnergyError {
    #[error("no parameters for atom type {0} in the force-field table")]
    MissingParameters(AtomType),

    #[error("atoms {i} and {j} are bonded at zero separation; bond energy is undefined for coincident atoms")]
    DegenerateGeometry { i: usize, j: usize },

    #[error("bond order must be positive, got {0}")]
    NonPositiveBondOrder(f64),
}

/// Per-bond breakdown of the stretch model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondTerm {
    pub bond: Bond,
    pub current_length: f64,
    pub natural_length: f64,
    pub force_constant: f64,
    pub energy: f64,
}

/// Aggregate result of scoring a bond graph: total stretch energy, the
/// per-bond terms it sums, and one gradient vector per atom.
#[derive(Debug, Clone, PartialEq)]
pub struct BondEnergyReport {
    pub total: f64,
    pub terms: Vec<BondTerm>,
    pub gradient: Vec<Vector3<f64>>,
}

/// Scores a bond graph against the generic stretch model.
///
/// Borrows the molecule and the parameter table; the per-call inputs are
/// the graph, the shared distance-matrix cache, and the global bond order.
pub struct BondScorer<'a> {
    molecule: &'a Molecule,
    forcefield: &'a Forcefield,
}

impl<'a> BondScorer<'a> {
    pub fn new(molecule: &'a Molecule, forcefield: &'a Forcefield) -> Self {
        Self {
            molecule,
            forcefield,
        }
    }

    /// Sums per-bond harmonic stretch energies and accumulates the analytic
    /// gradient per atom.
    ///
    /// Each bond adds `k (r - r0) û` to atom `i` and the exact negative to
    /// atom `j` (`û` pointing from `j` to `i`), so the gradient over any
    /// isolated bonded system sums to zero.
    pub fn score(
        &self,
        graph: &BondGraph,
        distances: &DistanceMatrix,
        bond_order: f64,
    ) -> Result<BondEnergyReport, EnergyError> {
        if !(bond_order > 0.0) {
            return Err(EnergyError::NonPositiveBondOrder(bond_order));
        }

        let mut total = 0.0;
        let mut terms = Vec::with_capacity(graph.bonds().len());
        let mut gradient = vec![Vector3::zeros(); self.molecule.len()];

        for &bond in graph.bonds() {
            let params_i = self.params_for(bond.i)?;
            let params_j = self.params_for(bond.j)?;

            let current_length = distances.get(bond.i, bond.j);
            if current_length < MIN_BOND_SEPARATION {
                return Err(EnergyError::DegenerateGeometry {
                    i: bond.i,
                    j: bond.j,
                });
            }

            let natural_length = potentials::natural_bond_length(
                params_i.r1,
                params_i.xi,
                params_j.r1,
                params_j.xi,
                bond_order,
            );
            let force_constant =
                potentials::bond_force_constant(params_i.z1, params_j.z1, natural_length);
            let energy =
                potentials::harmonic_bond_energy(force_constant, current_length, natural_length);

            let unit = (self.molecule.atoms()[bond.i].position
                - self.molecule.atoms()[bond.j].position)
                / current_length;
            let pull =
                potentials::harmonic_bond_gradient(force_constant, current_length, natural_length)
                    * unit;
            gradient[bond.i] += pull;
            gradient[bond.j] -= pull;

            total += energy;
            terms.push(BondTerm {
                bond,
                current_length,
                natural_length,
                force_constant,
                energy,
            });
        }

        Ok(BondEnergyReport {
            total,
            terms,
            gradient,
        })
    }

    fn params_for(&self, index: usize) -> Result<&AtomParams, EnergyError> {
        let atom_type = AtomType::from_element(self.molecule.atoms()[index].element);
        self.forcefield
            .types
            .get(&atom_type)
            .ok_or(EnergyError::MissingParameters(atom_type))
    }
}
