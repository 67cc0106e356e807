use nalgebra::Point3;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Squared Euclidean distance; the carving predicates compare against a
/// squared radius and never need the square root.
#[inline]
pub fn distance_squared(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm_squared()
}

/// Symmetric N×N matrix of pairwise atom distances with a zero diagonal.
///
/// Computed once per coordinate set and treated as a cache: the bond-graph
/// builder thresholds its entries and the bond scorer reads current bond
/// lengths from it, so neither recomputes a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances, filling both triangles from one
    /// upper-triangle sweep.
    pub fn from_positions(positions: &[Point3<f64>]) -> Self {
        let n = positions.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(&positions[i], &positions[j]);
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    /// Number of atoms the matrix was built over.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between atoms `i` and `j`. Panics if either index is out
    /// of range, like any slice access.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "atom index out of range");
        self.values[i * self.n + j]
    }
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty set.
    pub fn around<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut min = *first;
        let mut max = *first;
        for p in points {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some(Self { min, max })
    }
}
