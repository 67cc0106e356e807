use crate::core::geometry::DistanceMatrix;
use crate::core::models::molecule::Molecule;
use std::fmt;

/// Scale applied to the summed covalent radii before thresholding.
///
/// 1.3 is an empirical slack factor; the crude per-element radii under-read
/// real bond lengths without it.
pub const DEFAULT_COVALENT_FACTOR: f64 = 1.3;

/// An unordered covalent bond between two atoms, stored with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
}

impl Bond {
    /// Normalizes the index pair so `i < j` regardless of argument order.
    pub fn new(a: usize, b: usize) -> Self {
        if a < b { Self { i: a, j: b } } else { Self { i: b, j: a } }
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.i == atom || self.j == atom
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.i, self.j)
    }
}

/// Covalent connectivity inferred from geometry alone.
///
/// Atoms `i` and `j` are bonded iff their distance is strictly below
/// `(rcov_i + rcov_j) * covalent_factor`. The adjacency relation is
/// symmetric with a zero diagonal, and the bond list is exactly its upper
/// triangle; both are derived in one pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BondGraph {
    n: usize,
    adjacency: Vec<bool>,
    bonds: Vec<Bond>,
}

impl BondGraph {
    /// Thresholds every atom pair of `molecule` against scaled covalent
    /// radii, reading distances from the shared matrix cache.
    ///
    /// Coincident atoms always bond (distance 0 beats any positive
    /// threshold); that degenerate input is the caller's to avoid and is
    /// rejected later by the bond scorer.
    pub fn build(
        molecule: &Molecule,
        distances: &DistanceMatrix,
        covalent_factor: f64,
    ) -> Self {
        let n = molecule.len();
        debug_assert_eq!(n, distances.len(), "distance matrix size mismatch");

        let mut adjacency = vec![false; n * n];
        let mut bonds = Vec::new();
        for i in 0..n {
            let radius_i = molecule.atoms()[i].element.covalent_radius() * covalent_factor;
            for j in (i + 1)..n {
                let radius_j = molecule.atoms()[j].element.covalent_radius() * covalent_factor;
                if distances.get(i, j) < radius_i + radius_j {
                    adjacency[i * n + j] = true;
                    adjacency[j * n + i] = true;
                    bonds.push(Bond::new(i, j));
                }
            }
        }
        Self { n, adjacency, bonds }
    }

    /// Number of atoms the graph was built over.
    pub fn atom_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_bonded(&self, i: usize, j: usize) -> bool {
        assert!(i < self.n && j < self.n, "atom index out of range");
        self.adjacency[i * self.n + j]
    }

    /// Upper-triangle bond list, ordered by `(i, j)`.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Indices bonded to `atom`, in ascending order.
    pub fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(atom < self.n, "atom index out of range");
        (0..self.n).filter(move |&other| self.adjacency[atom * self.n + other])
    }
}
