use nalgebra::Point3;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotsError {
    #[error("file I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Reads a point-cloud file: one point per row, `x y z` optionally followed
/// by extra columns (accessible-surface dots carry a trailing tag value,
/// which the carving logic never looks at). Blank lines and `#` comments
/// are skipped.
pub fn read_dots(path: &Path) -> Result<Vec<Point3<f64>>, DotsError> {
    let content = std::fs::read_to_string(path).map_err(|e| DotsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_dots(&content)
}

pub fn parse_dots(content: &str) -> Result<Vec<Point3<f64>>, DotsError> {
    let mut points = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(DotsError::Malformed {
                line: idx + 1,
                message: format!("expected at least 3 coordinates, found {}", fields.len()),
            });
        }
        let mut coords = [0.0f64; 3];
        for (value, field) in coords.iter_mut().zip(&fields[..3]) {
            *value = field.parse().map_err(|_| DotsError::Malformed {
                line: idx + 1,
                message: format!("'{field}' is not a coordinate"),
            })?;
        }
        points.push(Point3::new(coords[0], coords[1], coords[2]));
    }
    Ok(points)
}

/// Writes one `x y z` row per point.
pub fn write_dots(path: &Path, points: &[Point3<f64>]) -> Result<(), DotsError> {
    let to_io_error = |e: std::io::Error| DotsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    };
    let mut file = std::io::BufWriter::new(std::fs::File::create(path).map_err(to_io_error)?);
    for point in points {
        writeln!(file, "{} {} {}", point.x, point.y, point.z).map_err(to_io_error)?;
    }
    file.flush().map_err(to_io_error)
}
