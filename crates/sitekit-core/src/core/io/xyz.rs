use crate::core::models::atom::Atom;
use crate::core::models::element::{Element, UnsupportedElementError};
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("file I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("line {line}: {source}")]
    UnsupportedElement {
        line: usize,
        #[source]
        source: UnsupportedElementError,
    },
}

/// Reads an XYZ coordinate file: the atom count, a comment line, then one
/// `<symbol> <x> <y> <z>` row per atom.
pub fn read_xyz(path: &Path) -> Result<Molecule, XyzError> {
    let content = std::fs::read_to_string(path).map_err(|e| XyzError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_xyz(&content)
}

/// Parses XYZ content. Element symbols are case-normalized before lookup;
/// columns past the coordinates are ignored. The declared atom count must
/// match the number of atom rows.
pub fn parse_xyz(content: &str) -> Result<Molecule, XyzError> {
    let mut lines = content.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let (count_line, count_text) = lines.next().ok_or_else(|| XyzError::Malformed {
        line: 1,
        message: "missing atom-count line".to_string(),
    })?;
    let declared: usize =
        count_text
            .trim()
            .parse()
            .map_err(|_| XyzError::Malformed {
                line: count_line,
                message: format!("'{}' is not an atom count", count_text.trim()),
            })?;

    // Comment line; its content is free-form and discarded.
    lines.next().ok_or_else(|| XyzError::Malformed {
        line: 2,
        message: "missing comment line".to_string(),
    })?;

    let mut atoms = Vec::with_capacity(declared);
    for (line, text) in lines {
        if text.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(XyzError::Malformed {
                line,
                message: format!("expected '<symbol> <x> <y> <z>', found '{}'", text.trim()),
            });
        }

        let element: Element = fields[0]
            .parse()
            .map_err(|source| XyzError::UnsupportedElement { line, source })?;
        let mut coords = [0.0f64; 3];
        for (value, field) in coords.iter_mut().zip(&fields[1..4]) {
            *value = field.parse().map_err(|_| XyzError::Malformed {
                line,
                message: format!("'{field}' is not a coordinate"),
            })?;
        }
        atoms.push(Atom::new(
            element,
            Point3::new(coords[0], coords[1], coords[2]),
        ));
    }

    if atoms.len() != declared {
        return Err(XyzError::Malformed {
            line: count_line,
            message: format!("declared {} atoms, found {}", declared, atoms.len()),
        });
    }
    Ok(Molecule::new(atoms))
}
