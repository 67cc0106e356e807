use super::atom::Atom;
use super::element::Element;
use crate::core::geometry::BoundingBox;
use nalgebra::Point3;

/// An ordered, immutable set of atoms.
///
/// Atom indices are the identity used everywhere downstream (distance
/// matrix entries, adjacency, bond lists, gradient rows), so the order of
/// construction is load-bearing and never changes after `new`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Builds a molecule from parallel element/position sequences.
    ///
    /// Panics if the two slices disagree in length; callers own that
    /// invariant (the file adapters construct both from the same rows).
    pub fn from_parts(elements: &[Element], positions: &[Point3<f64>]) -> Self {
        assert_eq!(
            elements.len(),
            positions.len(),
            "element and position counts must match"
        );
        Self {
            atoms: elements
                .iter()
                .zip(positions)
                .map(|(&element, &position)| Atom::new(element, position))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.atoms.iter().map(|atom| &atom.position)
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.atoms.iter().map(|atom| atom.element)
    }

    /// Axis-aligned bounding box of the atom positions, or `None` for an
    /// empty molecule.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::around(self.atoms.iter().map(|atom| &atom.position))
    }
}
