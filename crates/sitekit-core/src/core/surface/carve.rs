use crate::core::geometry::distance_squared;
use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::collections::HashMap;

/// Below this many centers the direct scan beats building a spatial hash.
const DIRECT_SCAN_THRESHOLD: usize = 32;

/// Cell sizes below this would explode the hash; fall back to scanning.
const MIN_CELL_SIZE: f64 = 1e-9;

/// Removes every point whose squared distance to ANY center is at most
/// `radius²`, returning the surviving subset in the original order.
///
/// The output is always a subset of the input: carving never introduces or
/// reorders points, so chained passes only ever shrink the working set.
/// Larger center clouds are probed through a uniform spatial hash; the
/// removal predicate is identical on both paths.
pub fn carve(
    points: Vec<Point3<f64>>,
    centers: &[Point3<f64>],
    radius: f64,
) -> Vec<Point3<f64>> {
    if centers.is_empty() || points.is_empty() {
        return points;
    }

    let radius_squared = radius * radius;
    if centers.len() <= DIRECT_SCAN_THRESHOLD || radius.abs() < MIN_CELL_SIZE {
        return points
            .into_iter()
            .filter(|point| {
                !centers
                    .iter()
                    .any(|center| distance_squared(point, center) <= radius_squared)
            })
            .collect();
    }

    let index = CenterIndex::build(centers, radius.abs());
    points
        .into_iter()
        .filter(|point| !index.any_within(point, radius_squared))
        .collect()
}

/// Solvent-exclusion carve: removes points within `vdw + probe_radius` of
/// any atom, the per-atom radius depending on the atom's element.
///
/// Runs one uniform-radius carve per element class; survival does not
/// depend on the class order, only on the union of excluded volumes.
pub fn carve_around_atoms(
    points: Vec<Point3<f64>>,
    molecule: &Molecule,
    probe_radius: f64,
) -> Vec<Point3<f64>> {
    let mut points = points;
    for element in Element::ALL {
        let centers: Vec<Point3<f64>> = molecule
            .atoms()
            .iter()
            .filter(|atom| atom.element == element)
            .map(|atom| atom.position)
            .collect();
        if centers.is_empty() {
            continue;
        }
        points = carve(points, &centers, element.vdw_radius() + probe_radius);
    }
    points
}

/// Uniform spatial hash over the center cloud, cell size = carve radius.
///
/// A point within `radius` of some center necessarily lands in that
/// center's cell or one of its 26 neighbors, so membership needs at most
/// 27 bucket probes instead of a full scan.
struct CenterIndex {
    cell_size: f64,
    cells: HashMap<(i64, i64, i64), Vec<Point3<f64>>>,
}

impl CenterIndex {
    fn build(centers: &[Point3<f64>], cell_size: f64) -> Self {
        let mut cells: HashMap<(i64, i64, i64), Vec<Point3<f64>>> = HashMap::new();
        for &center in centers {
            cells
                .entry(Self::cell_of(&center, cell_size))
                .or_default()
                .push(center);
        }
        Self { cell_size, cells }
    }

    #[inline]
    fn cell_of(point: &Point3<f64>, cell_size: f64) -> (i64, i64, i64) {
        (
            (point.x / cell_size).floor() as i64,
            (point.y / cell_size).floor() as i64,
            (point.z / cell_size).floor() as i64,
        )
    }

    fn any_within(&self, point: &Point3<f64>, radius_squared: f64) -> bool {
        let (cx, cy, cz) = Self::cell_of(point, self.cell_size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    if bucket
                        .iter()
                        .any(|center| distance_squared(point, center) <= radius_squared)
                    {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice(extent: i32, spacing: f64) -> Vec<Point3<f64>> {
        let mut points = Vec::new();
        for x in 0..extent {
            for y in 0..extent {
                for z in 0..extent {
                    points.push(Point3::new(
                        x as f64 * spacing,
                        y as f64 * spacing,
                        z as f64 * spacing,
                    ));
                }
            }
        }
        points
    }

    fn brute_force_carve(
        points: &[Point3<f64>],
        centers: &[Point3<f64>],
        radius: f64,
    ) -> Vec<Point3<f64>> {
        points
            .iter()
            .copied()
            .filter(|p| {
                !centers
                    .iter()
                    .any(|c| distance_squared(p, c) <= radius * radius)
            })
            .collect()
    }

    #[test]
    fn points_within_radius_are_removed() {
        let points = vec![
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 0.9, 0.0),
        ];
        let survivors = carve(points, &[Point3::origin()], 1.0);
        assert_eq!(survivors, vec![Point3::new(3.0, 0.0, 0.0)]);
    }

    #[test]
    fn removal_is_inclusive_at_the_boundary() {
        // Squared distance exactly equal to radius² is removed.
        let survivors = carve(vec![Point3::new(1.0, 0.0, 0.0)], &[Point3::origin()], 1.0);
        assert!(survivors.is_empty());
    }

    #[test]
    fn output_is_a_subset_preserving_order() {
        let points = lattice(4, 1.0);
        let centers = [Point3::new(1.5, 1.5, 1.5)];
        let survivors = carve(points.clone(), &centers, 1.2);
        assert!(survivors.len() <= points.len());
        // Order check: survivors appear in the same relative order as input.
        let mut cursor = 0;
        for survivor in &survivors {
            let position = points[cursor..]
                .iter()
                .position(|p| p == survivor)
                .expect("survivor must come from the input set");
            cursor += position + 1;
        }
    }

    #[test]
    fn empty_center_set_removes_nothing() {
        let points = lattice(3, 1.0);
        assert_eq!(carve(points.clone(), &[], 5.0), points);
    }

    #[test]
    fn zero_radius_removes_only_coincident_points() {
        let points = vec![Point3::origin(), Point3::new(0.1, 0.0, 0.0)];
        let survivors = carve(points, &[Point3::origin()], 0.0);
        assert_eq!(survivors, vec![Point3::new(0.1, 0.0, 0.0)]);
    }

    #[test]
    fn carving_everything_yields_the_empty_set() {
        let survivors = carve(lattice(3, 1.0), &[Point3::new(1.0, 1.0, 1.0)], 10.0);
        assert!(survivors.is_empty());
    }

    #[test]
    fn spatial_hash_path_matches_direct_scan() {
        // More centers than the direct-scan threshold forces the hash path.
        let points = lattice(8, 0.7);
        let centers = lattice(4, 1.3);
        assert!(centers.len() > DIRECT_SCAN_THRESHOLD);

        let expected = brute_force_carve(&points, &centers, 1.1);
        assert_eq!(carve(points, &centers, 1.1), expected);
    }

    #[test]
    fn negative_radius_carves_like_its_magnitude() {
        let points = lattice(4, 1.0);
        let centers = lattice(4, 1.9);
        let negative = carve(points.clone(), &centers, -1.5);
        let positive = carve(points, &centers, 1.5);
        assert_eq!(negative, positive);
    }

    #[test]
    fn carve_around_atoms_uses_per_element_radii() {
        // Hydrogen excludes to 1.2 + 0.5 = 1.7; oxygen to 1.52 + 0.5 = 2.02.
        let molecule = Molecule::from_parts(
            &[Element::Hydrogen, Element::Oxygen],
            &[Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)],
        );
        let points = vec![
            Point3::new(1.8, 0.0, 0.0),  // outside H exclusion
            Point3::new(1.6, 0.0, 0.0),  // inside H exclusion
            Point3::new(8.2, 0.0, 0.0),  // inside O exclusion
            Point3::new(7.9, 0.0, 0.0),  // outside O exclusion
        ];
        let survivors = carve_around_atoms(points, &molecule, 0.5);
        assert_eq!(
            survivors,
            vec![Point3::new(1.8, 0.0, 0.0), Point3::new(7.9, 0.0, 0.0)]
        );
    }

    #[test]
    fn carve_around_atoms_with_no_atoms_removes_nothing() {
        let points = lattice(2, 1.0);
        let survivors = carve_around_atoms(points.clone(), &Molecule::default(), 1.4);
        assert_eq!(survivors, points);
    }
}
