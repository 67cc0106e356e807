use crate::core::models::element::Element;
use phf::phf_map;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Generic force-field atom type for a supported element.
///
/// The original model folds every element onto one generic type (hydrogen,
/// or the sp3 type of the heavy atom); per-hybridization typing is out of
/// scope, so the mapping from [`Element`] is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomType {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
}

impl AtomType {
    pub const ALL: [AtomType; 4] = [
        AtomType::Hydrogen,
        AtomType::Carbon,
        AtomType::Nitrogen,
        AtomType::Oxygen,
    ];

    pub fn from_element(element: Element) -> Self {
        match element {
            Element::Hydrogen => AtomType::Hydrogen,
            Element::Carbon => AtomType::Carbon,
            Element::Nitrogen => AtomType::Nitrogen,
            Element::Oxygen => AtomType::Oxygen,
        }
    }

    /// Label used in parameter tables (`H_`, `C_3`, `N_3`, `O_3`).
    pub fn label(&self) -> &'static str {
        match self {
            AtomType::Hydrogen => "H_",
            AtomType::Carbon => "C_3",
            AtomType::Nitrogen => "N_3",
            AtomType::Oxygen => "O_3",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "H_" => Some(AtomType::Hydrogen),
            "C_3" => Some(AtomType::Carbon),
            "N_3" => Some(AtomType::Nitrogen),
            "O_3" => Some(AtomType::Oxygen),
            _ => None,
        }
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the force-field parameter table.
///
/// Field meanings follow the published generic force field:
/// `r1` valence bond radius, `theta0` valence angle, `x1` vdW
/// characteristic length, `d1` vdW atomic energy, `zeta` vdW scaling term,
/// `z1` effective charge, `v1` sp3 torsional barrier, `u1` torsional
/// contribution for sp2-sp3 bonds, `xi` GMP electronegativity,
/// `hardness` GMP hardness, `radius` GMP radius.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AtomParams {
    pub r1: f64,
    pub theta0: f64,
    pub x1: f64,
    pub d1: f64,
    pub zeta: f64,
    pub z1: f64,
    pub v1: f64,
    pub u1: f64,
    pub xi: f64,
    pub hardness: f64,
    pub radius: f64,
}

/// Published generic parameters for the four supported types.
static GENERIC_PARAMS: phf::Map<&'static str, AtomParams> = phf_map! {
    "H_" => AtomParams {
        r1: 0.354, theta0: 180.0, x1: 2.886, d1: 0.044, zeta: 12.0,
        z1: 0.712, v1: 0.0, u1: 0.0, xi: 4.528, hardness: 6.9452, radius: 0.371,
    },
    "C_3" => AtomParams {
        r1: 0.757, theta0: 109.47, x1: 3.851, d1: 0.105, zeta: 12.73,
        z1: 1.912, v1: 2.119, u1: 2.0, xi: 5.343, hardness: 5.063, radius: 0.759,
    },
    "N_3" => AtomParams {
        r1: 0.700, theta0: 106.7, x1: 3.660, d1: 0.069, zeta: 13.407,
        z1: 2.544, v1: 0.450, u1: 2.0, xi: 6.899, hardness: 5.880, radius: 0.715,
    },
    "O_3" => AtomParams {
        r1: 0.658, theta0: 104.51, x1: 3.500, d1: 0.060, zeta: 14.085,
        z1: 2.300, v1: 0.018, u1: 2.0, xi: 8.741, hardness: 6.682, radius: 0.669,
    },
};

/// Columns a parameter table must carry, in the order the loader fills
/// [`AtomParams`].
const REQUIRED_COLUMNS: [&str; 11] = [
    "r1", "theta0", "x1", "D1", "zeta", "Z1", "V1", "U1", "Xi", "Hardness", "Radius",
];

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("file I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("malformed parameter table '{path}' at line {line}: {message}")]
    Malformed {
        path: String,
        line: usize,
        message: String,
    },
    #[error("parameter table '{path}' is missing required column '{column}'")]
    MissingColumn { path: String, column: &'static str },
    #[error("parameter table '{1}' has no row for required atom type {0}")]
    MissingAtomType(AtomType, String),
    #[error("unknown atom type '{key}' in parameter file '{path}'")]
    UnknownAtomType { path: String, key: String },
}

/// Immutable force-field parameter table, keyed by atom type.
///
/// Built once (from the embedded defaults or a file) and passed by
/// reference into every consumer; safe for unsynchronized concurrent reads
/// because nothing mutates it after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Forcefield {
    pub types: HashMap<AtomType, AtomParams>,
}

impl Default for Forcefield {
    /// The embedded generic table covering all four supported types.
    fn default() -> Self {
        Self {
            types: GENERIC_PARAMS
                .entries()
                .filter_map(|(label, &params)| {
                    AtomType::from_label(label).map(|ty| (ty, params))
                })
                .collect(),
        }
    }
}

/// TOML on-disk shape: `[types.C_3]` tables of named constants.
#[derive(Debug, Deserialize)]
struct ForcefieldFile {
    types: HashMap<String, AtomParams>,
}

impl Forcefield {
    /// Loads a whitespace-delimited parameter table with a named-column
    /// header row (the classic `.par` shape).
    ///
    /// Rows for atom types outside the supported set are skipped; the load
    /// fails fast if the header lacks a required column or the table lacks
    /// a row for any supported type.
    pub fn load_par(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse_par(&content, &path.to_string_lossy())
    }

    fn parse_par(content: &str, path: &str) -> Result<Self, ParamLoadError> {
        let mut data_lines = content
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (_, header) = data_lines.next().ok_or_else(|| ParamLoadError::Malformed {
            path: path.to_string(),
            line: 1,
            message: "empty parameter table".to_string(),
        })?;
        let columns: Vec<&str> = header.split_whitespace().collect();

        let atom_column = columns.iter().position(|&c| c == "Atom").ok_or_else(|| {
            ParamLoadError::MissingColumn {
                path: path.to_string(),
                column: "Atom",
            }
        })?;
        let mut value_columns = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, &name) in value_columns.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
            *slot = columns.iter().position(|&c| c == name).ok_or_else(|| {
                ParamLoadError::MissingColumn {
                    path: path.to_string(),
                    column: name,
                }
            })?;
        }

        let mut types = HashMap::new();
        for (line, row) in data_lines {
            let fields: Vec<&str> = row.split_whitespace().collect();
            if fields.len() < columns.len() {
                return Err(ParamLoadError::Malformed {
                    path: path.to_string(),
                    line,
                    message: format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        fields.len()
                    ),
                });
            }
            let Some(atom_type) = AtomType::from_label(fields[atom_column]) else {
                continue;
            };

            let mut values = [0.0f64; REQUIRED_COLUMNS.len()];
            for (value, &column) in values.iter_mut().zip(value_columns.iter()) {
                *value = fields[column].parse().map_err(|_| ParamLoadError::Malformed {
                    path: path.to_string(),
                    line,
                    message: format!("'{}' is not a number", fields[column]),
                })?;
            }
            let [r1, theta0, x1, d1, zeta, z1, v1, u1, xi, hardness, radius] = values;
            types.insert(
                atom_type,
                AtomParams {
                    r1,
                    theta0,
                    x1,
                    d1,
                    zeta,
                    z1,
                    v1,
                    u1,
                    xi,
                    hardness,
                    radius,
                },
            );
        }

        Self::validated(types, path)
    }

    /// Loads a TOML parameter file of `[types.<label>]` tables.
    pub fn load_toml(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: ForcefieldFile =
            toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut types = HashMap::new();
        for (key, params) in file.types {
            let atom_type =
                AtomType::from_label(&key).ok_or_else(|| ParamLoadError::UnknownAtomType {
                    path: path.to_string_lossy().to_string(),
                    key,
                })?;
            types.insert(atom_type, params);
        }
        Self::validated(types, &path.to_string_lossy())
    }

    fn validated(
        types: HashMap<AtomType, AtomParams>,
        path: &str,
    ) -> Result<Self, ParamLoadError> {
        for ty in AtomType::ALL {
            if !types.contains_key(&ty) {
                return Err(ParamLoadError::MissingAtomType(ty, path.to_string()));
            }
        }
        Ok(Self { types })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PAR_TABLE: &str = "\
# generic parameter table
Atom r1 theta0 x1 D1 zeta Z1 V1 U1 Xi Hardness Radius
H_   0.354 180.0  2.886 0.044 12.0   0.712 0.0   0.0 4.528 6.9452 0.371
C_3  0.757 109.47 3.851 0.105 12.73  1.912 2.119 2.0 5.343 5.063  0.759
C_R  0.729 120.0  3.851 0.105 12.73  1.912 0.0   2.0 5.343 5.063  0.729
N_3  0.700 106.7  3.660 0.069 13.407 2.544 0.450 2.0 6.899 5.880  0.715
O_3  0.658 104.51 3.500 0.060 14.085 2.300 0.018 2.0 8.741 6.682  0.669
";

    #[test]
    fn default_table_covers_all_supported_types() {
        let ff = Forcefield::default();
        for ty in AtomType::ALL {
            assert!(ff.types.contains_key(&ty));
        }
        let carbon = &ff.types[&AtomType::Carbon];
        assert_eq!(carbon.r1, 0.757);
        assert_eq!(carbon.z1, 1.912);
        assert_eq!(ff.types[&AtomType::Oxygen].xi, 8.741);
    }

    #[test]
    fn atom_type_maps_every_element() {
        assert_eq!(AtomType::from_element(Element::Hydrogen), AtomType::Hydrogen);
        assert_eq!(AtomType::from_element(Element::Carbon), AtomType::Carbon);
        assert_eq!(AtomType::from_element(Element::Nitrogen), AtomType::Nitrogen);
        assert_eq!(AtomType::from_element(Element::Oxygen), AtomType::Oxygen);
    }

    #[test]
    fn labels_round_trip() {
        for ty in AtomType::ALL {
            assert_eq!(AtomType::from_label(ty.label()), Some(ty));
        }
        assert_eq!(AtomType::from_label("C_R"), None);
    }

    #[test]
    fn load_par_reads_supported_rows_and_skips_others() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generic.par");
        fs::write(&path, PAR_TABLE).unwrap();

        let ff = Forcefield::load_par(&path).unwrap();
        assert_eq!(ff.types.len(), 4);
        assert_eq!(ff.types[&AtomType::Nitrogen].z1, 2.544);
        assert_eq!(ff.types[&AtomType::Hydrogen].xi, 4.528);
    }

    #[test]
    fn load_par_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = Forcefield::load_par(&dir.path().join("absent.par"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_par_fails_fast_on_missing_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_z1.par");
        fs::write(
            &path,
            "Atom r1 theta0 x1 D1 zeta V1 U1 Xi Hardness Radius\n",
        )
        .unwrap();

        let result = Forcefield::load_par(&path);
        assert!(matches!(
            result,
            Err(ParamLoadError::MissingColumn { column: "Z1", .. })
        ));
    }

    #[test]
    fn load_par_fails_fast_on_missing_required_type() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_oxygen.par");
        let table: String = PAR_TABLE
            .lines()
            .filter(|line| !line.starts_with("O_3"))
            .map(|line| format!("{line}\n"))
            .collect();
        fs::write(&path, table).unwrap();

        let result = Forcefield::load_par(&path);
        assert!(matches!(
            result,
            Err(ParamLoadError::MissingAtomType(AtomType::Oxygen, _))
        ));
    }

    #[test]
    fn load_par_reports_line_of_malformed_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad_row.par");
        let table = PAR_TABLE.replace("0.700", "not-a-number");
        fs::write(&path, table).unwrap();

        match Forcefield::load_par(&path) {
            Err(ParamLoadError::Malformed { line, .. }) => assert_eq!(line, 6),
            other => panic!("expected malformed-row error, got {other:?}"),
        }
    }

    #[test]
    fn load_par_rejects_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short_row.par");
        fs::write(
            &path,
            "Atom r1 theta0 x1 D1 zeta Z1 V1 U1 Xi Hardness Radius\nH_ 0.354\n",
        )
        .unwrap();
        assert!(matches!(
            Forcefield::load_par(&path),
            Err(ParamLoadError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn load_toml_reads_a_complete_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generic.toml");
        let mut content = String::new();
        for ty in AtomType::ALL {
            let p = *GENERIC_PARAMS.get(ty.label()).unwrap();
            content.push_str(&format!(
                "[types.{}]\nr1 = {}\ntheta0 = {}\nx1 = {}\nd1 = {}\nzeta = {}\nz1 = {}\nv1 = {}\nu1 = {}\nxi = {}\nhardness = {}\nradius = {}\n\n",
                ty.label(),
                p.r1, p.theta0, p.x1, p.d1, p.zeta, p.z1, p.v1, p.u1, p.xi, p.hardness, p.radius,
            ));
        }
        fs::write(&path, content).unwrap();

        let ff = Forcefield::load_toml(&path).unwrap();
        assert_eq!(ff, Forcefield::default());
    }

    #[test]
    fn load_toml_rejects_unknown_type_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("unknown.toml");
        fs::write(
            &path,
            "[types.Fe3]\nr1 = 1.0\ntheta0 = 1.0\nx1 = 1.0\nd1 = 1.0\nzeta = 1.0\nz1 = 1.0\nv1 = 1.0\nu1 = 1.0\nxi = 1.0\nhardness = 1.0\nradius = 1.0\n",
        )
        .unwrap();

        assert!(matches!(
            Forcefield::load_toml(&path),
            Err(ParamLoadError::UnknownAtomType { .. })
        ));
    }

    #[test]
    fn load_toml_fails_on_missing_constant() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("incomplete.toml");
        fs::write(&path, "[types.H_]\nr1 = 0.354\n").unwrap();

        assert!(matches!(
            Forcefield::load_toml(&path),
            Err(ParamLoadError::Toml { .. })
        ));
    }
}
