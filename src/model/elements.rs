// src/model/elements.rs

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Registry key of the lone pair placeholder.
pub const LONE_PAIR_SYMBOL: &str = "LP";
pub const LONE_PAIR_NAME: &str = "Lone pair";

/// Elements whose bonding geometry does not follow the valence rule and is
/// special-cased by the geometry model.
const GEOMETRY_EXCEPTIONS: [&str; 2] = ["beryllium", "boron"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

impl BondOrder {
    fn index(self) -> usize {
        match self {
            BondOrder::Single => 0,
            BondOrder::Double => 1,
            BondOrder::Triple => 2,
        }
    }
}

/// Derived properties of one element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub name: String,
    pub symbol: String,
    pub atomic_number: u32,
    pub period_number: u32,
    /// 0 when not applicable (noble gases).
    pub electronegativity: f64,
    /// Picometres.
    pub atomic_radius: f64,
    /// Covalent radii for single, double and triple bonds; 0 when unknown.
    pub bond_radii: [f64; 3],
    pub van_der_waals_radius: f64,
    /// CPK colour, each channel in [0, 1].
    pub color: Vector3<f64>,
    pub valence_electrons: u32,
    pub geometry_exception: bool,
    #[serde(default)]
    pub lone_pair: bool,
}

impl Default for ElementRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            atomic_number: 0,
            period_number: 0,
            electronegativity: 0.0,
            atomic_radius: 0.0,
            bond_radii: [0.0; 3],
            van_der_waals_radius: 0.0,
            color: Vector3::zeros(),
            valence_electrons: 0,
            geometry_exception: false,
            lone_pair: false,
        }
    }
}

impl ElementRecord {
    /// The synthetic lone pair entry. Only the name is set.
    pub fn lone_pair() -> Self {
        Self {
            name: LONE_PAIR_NAME.to_string(),
            lone_pair: true,
            ..Self::default()
        }
    }

    pub fn is_lone_pair(&self) -> bool {
        self.lone_pair
    }

    pub fn bond_radius(&self, order: BondOrder) -> f64 {
        self.bond_radii[order.index()]
    }
}

/// Whether an element name belongs to the fixed geometry exception set.
pub fn is_geometry_exception(name: &str) -> bool {
    GEOMETRY_EXCEPTIONS
        .iter()
        .any(|exception| name.trim().eq_ignore_ascii_case(exception))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_pair_defaults() {
        let lp = ElementRecord::lone_pair();
        assert!(lp.is_lone_pair());
        assert_eq!(lp.name, "Lone pair");
        assert_eq!(lp.atomic_number, 0);
        assert_eq!(lp.valence_electrons, 0);
        assert_eq!(lp.bond_radii, [0.0; 3]);
        assert_eq!(lp.color, Vector3::zeros());
        assert!(!lp.geometry_exception);
    }

    #[test]
    fn test_geometry_exceptions() {
        assert!(is_geometry_exception("beryllium"));
        assert!(is_geometry_exception("boron"));
        assert!(is_geometry_exception("Boron"));
        assert!(!is_geometry_exception("carbon"));
        assert!(!is_geometry_exception("boronx"));
        assert!(!is_geometry_exception(""));
    }

    #[test]
    fn test_bond_radius_by_order() {
        let record = ElementRecord {
            bond_radii: [75.0, 67.0, 60.0],
            ..ElementRecord::default()
        };
        assert_eq!(record.bond_radius(BondOrder::Single), 75.0);
        assert_eq!(record.bond_radius(BondOrder::Triple), 60.0);
    }
}
