use super::SurfaceError;
use crate::core::geometry::BoundingBox;
use nalgebra::Point3;

/// Generates the candidate lattice covering a bounding box expanded by
/// `buffer` on each axis, sampled every `spacing` units.
///
/// Each axis range is half-open: bounds are truncated toward zero to whole
/// Angstroms and the upper bound is excluded, so atoms spanning x ∈ [0, 9]
/// at spacing 3 sample x ∈ {0, 3, 6}. Deterministic for equal inputs; no
/// jitter.
pub fn generate_grid(
    bounds: &BoundingBox,
    spacing: f64,
    buffer: f64,
) -> Result<Vec<Point3<f64>>, SurfaceError> {
    if !(spacing > 0.0) {
        return Err(SurfaceError::NonPositiveSpacing(spacing));
    }

    let mut starts = [0.0; 3];
    let mut counts = [0usize; 3];
    for axis in 0..3 {
        let start = (bounds.min[axis] - buffer).trunc();
        let end = (bounds.max[axis] + buffer).trunc();
        starts[axis] = start;
        counts[axis] = if end > start {
            ((end - start) / spacing).ceil() as usize
        } else {
            0
        };
    }

    let mut points = Vec::with_capacity(counts[0] * counts[1] * counts[2]);
    for ix in 0..counts[0] {
        let x = starts[0] + ix as f64 * spacing;
        for iy in 0..counts[1] {
            let y = starts[1] + iy as f64 * spacing;
            for iz in 0..counts[2] {
                let z = starts[2] + iz as f64 * spacing;
                points.push(Point3::new(x, y, z));
            }
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: [f64; 3], max: [f64; 3]) -> BoundingBox {
        BoundingBox {
            min: Point3::new(min[0], min[1], min[2]),
            max: Point3::new(max[0], max[1], max[2]),
        }
    }

    fn axis_values(points: &[Point3<f64>], axis: usize) -> Vec<f64> {
        let mut values: Vec<f64> = points.iter().map(|p| p[axis]).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        values.dedup();
        values
    }

    #[test]
    fn span_zero_to_nine_at_spacing_three_samples_three_values() {
        let grid = generate_grid(&bounds([0.0; 3], [9.0; 3]), 3.0, 0.0).unwrap();
        assert_eq!(grid.len(), 27);
        for axis in 0..3 {
            assert_eq!(axis_values(&grid, axis), vec![0.0, 3.0, 6.0]);
        }
    }

    #[test]
    fn upper_bound_is_excluded() {
        let grid = generate_grid(&bounds([0.0; 3], [2.0; 3]), 1.0, 0.0).unwrap();
        for axis in 0..3 {
            assert_eq!(axis_values(&grid, axis), vec![0.0, 1.0]);
        }
    }

    #[test]
    fn buffer_expands_every_axis() {
        let no_buffer = generate_grid(&bounds([0.0; 3], [3.0; 3]), 1.0, 0.0).unwrap();
        let buffered = generate_grid(&bounds([0.0; 3], [3.0; 3]), 1.0, 2.0).unwrap();
        assert!(buffered.len() > no_buffer.len());
        assert_eq!(axis_values(&buffered, 0).first(), Some(&-2.0));
        assert_eq!(axis_values(&buffered, 0).last(), Some(&4.0));
    }

    #[test]
    fn bounds_truncate_toward_zero() {
        // min -2.5 truncates to -2, max 2.5 truncates to 2.
        let grid = generate_grid(&bounds([-2.5; 3], [2.5; 3]), 1.0, 0.0).unwrap();
        let values = axis_values(&grid, 0);
        assert_eq!(values.first(), Some(&-2.0));
        assert_eq!(values.last(), Some(&1.0));
    }

    #[test]
    fn fractional_spacing_is_supported() {
        let grid = generate_grid(&bounds([0.0; 3], [1.0; 3]), 0.5, 0.0).unwrap();
        for axis in 0..3 {
            assert_eq!(axis_values(&grid, axis), vec![0.0, 0.5]);
        }
    }

    #[test]
    fn degenerate_box_yields_an_empty_grid() {
        let grid = generate_grid(&bounds([0.0; 3], [0.0; 3]), 1.0, 0.0).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        let b = bounds([0.0; 3], [9.0; 3]);
        assert_eq!(
            generate_grid(&b, 0.0, 0.0),
            Err(SurfaceError::NonPositiveSpacing(0.0))
        );
        assert!(matches!(
            generate_grid(&b, -1.0, 0.0),
            Err(SurfaceError::NonPositiveSpacing(_))
        ));
    }

    #[test]
    fn generation_is_deterministic() {
        let b = bounds([-4.2; 3], [7.9; 3]);
        assert_eq!(
            generate_grid(&b, 2.0, 1.0).unwrap(),
            generate_grid(&b, 2.0, 1.0).unwrap()
        );
    }
}
