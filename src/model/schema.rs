// src/model/schema.rs

use serde::{Deserialize, Serialize};

/// Column positions of the periodic table dataset.
///
/// The defaults describe the comma separated periodic table export the
/// registry was built against. Positions are zero based and may be
/// overridden from the config file when the export layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    pub atomic_number: usize,
    pub symbol: usize,
    /// Group-style valence hint, see `physics::valence`.
    pub valence_hint: usize,
    pub period: usize,
    pub name: usize,
    pub electronegativity: usize,
    pub electron_configuration: usize,
    pub atomic_radius: usize,
    /// Stored multiplied by 100.
    pub van_der_waals_radius: usize,
    /// Two single-bond covalent radii from different methods, averaged.
    pub single_bond_radius: [usize; 2],
    pub double_bond_radius: usize,
    pub triple_bond_radius: usize,
    /// Packed `R-G-B` colour, 0-255 per channel.
    pub color: usize,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            atomic_number: 0,
            symbol: 1,
            valence_hint: 2,
            period: 4,
            name: 5,
            electronegativity: 12,
            electron_configuration: 22,
            atomic_radius: 23,
            van_der_waals_radius: 46,
            single_bond_radius: [50, 51],
            double_bond_radius: 52,
            triple_bond_radius: 53,
            color: 54,
        }
    }
}

impl ColumnSchema {
    /// Number of fields a row needs for every column to be addressable.
    pub fn min_fields(&self) -> usize {
        [
            self.atomic_number,
            self.symbol,
            self.valence_hint,
            self.period,
            self.name,
            self.electronegativity,
            self.electron_configuration,
            self.atomic_radius,
            self.van_der_waals_radius,
            self.single_bond_radius[0],
            self.single_bond_radius[1],
            self.double_bond_radius,
            self.triple_bond_radius,
            self.color,
        ]
        .into_iter()
        .max()
        .map_or(0, |last| last + 1)
    }
}
