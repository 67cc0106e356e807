use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of chemical elements this toolkit supports.
///
/// Everything downstream of a parsed `Element` (covalent radii, van der
/// Waals radii, force-field atom typing) is total, so the only place an
/// unsupported species can surface is the symbol parse itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
}

/// Error returned when an element symbol falls outside the supported set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported element symbol '{0}' (supported: H, C, N, O)")]
pub struct UnsupportedElementError(pub String);

impl Element {
    /// All supported elements, in atomic-number order.
    pub const ALL: [Element; 4] = [
        Element::Hydrogen,
        Element::Carbon,
        Element::Nitrogen,
        Element::Oxygen,
    ];

    /// The canonical (uppercase) one-letter symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
        }
    }

    /// Covalent radius in Angstroms, used to threshold bond detection.
    ///
    /// Single-bond values; heavy atoms share one crude radius and the
    /// covalent factor absorbs the slack.
    pub fn covalent_radius(&self) -> f64 {
        match self {
            Element::Hydrogen => 0.23,
            Element::Carbon => 0.68,
            Element::Nitrogen => 0.68,
            Element::Oxygen => 0.68,
        }
    }

    /// Van der Waals radius in Angstroms (Bondi), used to define the
    /// excluded volume around an atom during solvent carving.
    pub fn vdw_radius(&self) -> f64 {
        match self {
            Element::Hydrogen => 1.20,
            Element::Carbon => 1.70,
            Element::Nitrogen => 1.55,
            Element::Oxygen => 1.52,
        }
    }
}

impl FromStr for Element {
    type Err = UnsupportedElementError;

    /// Parses an element symbol, normalizing case first ("c", "C", " c "
    /// all parse as carbon).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(Element::Hydrogen),
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            _ => Err(UnsupportedElementError(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_canonical_symbols() {
        assert_eq!("H".parse::<Element>().unwrap(), Element::Hydrogen);
        assert_eq!("C".parse::<Element>().unwrap(), Element::Carbon);
        assert_eq!("N".parse::<Element>().unwrap(), Element::Nitrogen);
        assert_eq!("O".parse::<Element>().unwrap(), Element::Oxygen);
    }

    #[test]
    fn from_str_normalizes_case_and_whitespace() {
        assert_eq!("h".parse::<Element>().unwrap(), Element::Hydrogen);
        assert_eq!(" o ".parse::<Element>().unwrap(), Element::Oxygen);
        assert_eq!("n".parse::<Element>().unwrap(), Element::Nitrogen);
    }

    #[test]
    fn from_str_rejects_unsupported_symbols() {
        let err = "S".parse::<Element>().unwrap_err();
        assert_eq!(err, UnsupportedElementError("S".to_string()));
        assert!("Fe".parse::<Element>().is_err());
        assert!("".parse::<Element>().is_err());
        assert!("CA1".parse::<Element>().is_err());
    }

    #[test]
    fn covalent_radii_match_the_bonding_table() {
        assert_eq!(Element::Hydrogen.covalent_radius(), 0.23);
        assert_eq!(Element::Carbon.covalent_radius(), 0.68);
        assert_eq!(Element::Nitrogen.covalent_radius(), 0.68);
        assert_eq!(Element::Oxygen.covalent_radius(), 0.68);
    }

    #[test]
    fn vdw_radii_are_positive_and_larger_than_covalent() {
        for element in Element::ALL {
            assert!(element.vdw_radius() > element.covalent_radius());
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for element in Element::ALL {
            assert_eq!(element.to_string().parse::<Element>().unwrap(), element);
        }
    }
}
