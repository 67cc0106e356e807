use super::element::Element;
use nalgebra::Point3;

/// A single atom: an element plus a fixed 3-D position in Angstroms.
///
/// Atoms are plain values; a coordinate set is immutable for the lifetime
/// of an analysis run, so there is nothing to invalidate downstream caches
/// (distance matrix, bond graph) once they are built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(element: Element, position: Point3<f64>) -> Self {
        Self { element, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_element_and_position() {
        let atom = Atom::new(Element::Carbon, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.element, Element::Carbon);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn atom_is_copy_and_comparable() {
        let atom = Atom::new(Element::Oxygen, Point3::origin());
        let copy = atom;
        assert_eq!(atom, copy);
    }
}
