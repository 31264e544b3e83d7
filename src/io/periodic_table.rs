// src/io/periodic_table.rs
//
// Turns one tokenized dataset row into an `ElementRecord`.

use nalgebra::Vector3;

use crate::error::{ColorError, RowError};
use crate::io::numeric::{safe_float_checked, safe_int_checked};
use crate::model::elements::{is_geometry_exception, ElementRecord};
use crate::model::schema::ColumnSchema;
use crate::physics::valence::valence_from_fields;

/// A record plus the numeric columns that fell back to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub record: ElementRecord,
    pub defaulted: Vec<&'static str>,
}

/// Decode a packed `R-G-B` colour (`"255-0-128"`) into channels in [0, 1].
///
/// A non-empty field with other than two hyphens, a non-numeric channel or
/// a channel above 255 is rejected.
///
/// An empty (or blank) field is the one exception to the hyphen-count rule:
/// it has no hyphens but is not an error. The dataset leaves the colour
/// empty for elements without a CPK colour, so it decodes to black like
/// any other missing value.
pub fn decode_color(field: &str) -> Result<Vector3<f64>, ColorError> {
    let field = field.trim().trim_matches('"').trim();
    if field.is_empty() {
        return Ok(Vector3::zeros());
    }

    let parts: Vec<&str> = field.split('-').collect();
    if parts.len() != 3 {
        return Err(ColorError::ChannelCount { found: parts.len() });
    }

    let mut channels = [0.0; 3];
    for (channel, (part, slot)) in parts.iter().zip(channels.iter_mut()).enumerate() {
        let part = part.trim();
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ColorError::InvalidChannel {
                channel,
                value: part.to_string(),
            });
        }
        let value: u32 = part.parse().map_err(|_| ColorError::InvalidChannel {
            channel,
            value: part.to_string(),
        })?;
        if value > 255 {
            return Err(ColorError::ChannelOutOfRange { channel, value });
        }
        *slot = f64::from(value) / 255.0;
    }

    Ok(Vector3::new(channels[0], channels[1], channels[2]))
}

/// Mean of the two single-bond radius measurements.
pub fn average_radius(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Collects the columns that had to be defaulted while reading a row.
struct FieldReader<'a> {
    fields: &'a [&'a str],
    defaulted: Vec<&'static str>,
}

impl<'a> FieldReader<'a> {
    fn raw(&self, index: usize) -> &'a str {
        self.fields[index]
    }

    fn text(&self, index: usize) -> &'a str {
        self.raw(index).trim()
    }

    fn int(&mut self, column: &'static str, index: usize) -> u32 {
        let field = self.raw(index);
        safe_int_checked(field).unwrap_or_else(|| {
            self.defaulted.push(column);
            0
        })
    }

    fn float(&mut self, column: &'static str, index: usize) -> f64 {
        let field = self.raw(index);
        safe_float_checked(field).unwrap_or_else(|| {
            self.defaulted.push(column);
            0.0
        })
    }
}

/// Build the element described by one tokenized row.
///
/// Only short rows and malformed colours are errors; unreadable numeric
/// fields become 0 and are listed in [`Extraction::defaulted`].
pub fn extract_element(fields: &[&str], schema: &ColumnSchema) -> Result<Extraction, RowError> {
    let expected = schema.min_fields();
    if fields.len() < expected {
        return Err(RowError::MissingFields {
            expected,
            found: fields.len(),
        });
    }

    let mut reader = FieldReader {
        fields,
        defaulted: Vec::new(),
    };

    let color = decode_color(reader.text(schema.color))?;

    let name = reader.text(schema.name).to_string();
    let symbol = reader.text(schema.symbol).to_string();
    let atomic_number = reader.int("atomic_number", schema.atomic_number);
    let period_number = reader.int("period", schema.period);
    let electronegativity = reader.float("electronegativity", schema.electronegativity);
    let atomic_radius = reader.float("atomic_radius", schema.atomic_radius);
    let van_der_waals_radius =
        reader.float("van_der_waals_radius", schema.van_der_waals_radius) / 100.0;

    let [single_a, single_b] = schema.single_bond_radius;
    let single = average_radius(
        reader.float("single_bond_radius", single_a),
        reader.float("single_bond_radius", single_b),
    );
    let double = reader.float("double_bond_radius", schema.double_bond_radius);
    let triple = reader.float("triple_bond_radius", schema.triple_bond_radius);

    let valence_electrons = valence_from_fields(
        reader.raw(schema.valence_hint),
        reader.text(schema.electron_configuration),
    );

    let geometry_exception = is_geometry_exception(&name);

    Ok(Extraction {
        record: ElementRecord {
            name,
            symbol,
            atomic_number,
            period_number,
            electronegativity,
            atomic_radius,
            bond_radii: [single, double, triple],
            van_der_waals_radius,
            color,
            valence_electrons,
            geometry_exception,
            lone_pair: false,
        },
        defaulted: reader.defaulted,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A full-width row with the given columns filled in.
    pub(crate) fn row(cells: &[(usize, &str)]) -> Vec<String> {
        let mut fields = vec![String::new(); ColumnSchema::default().min_fields()];
        for &(index, value) in cells {
            fields[index] = value.to_string();
        }
        fields
    }

    /// Oxygen as laid out in the default schema.
    pub(crate) fn oxygen_row() -> Vec<String> {
        row(&[
            (0, "8"),
            (1, "O"),
            (2, "16"),
            (4, "2"),
            (5, "oxygen"),
            (12, "3.44"),
            (22, "1s2 2s2 2p4"),
            (23, "48"),
            (46, "152"),
            (50, "63"),
            (51, "64"),
            (52, "57"),
            (53, "53"),
            (54, "255-13-13"),
        ])
    }

    fn extract(row: &[String]) -> Result<Extraction, RowError> {
        let fields: Vec<&str> = row.iter().map(String::as_str).collect();
        extract_element(&fields, &ColumnSchema::default())
    }

    #[test]
    fn test_color_decode() {
        let c = decode_color("255-0-128").unwrap();
        assert!((c.x - 1.0).abs() < 1e-9);
        assert!(c.y.abs() < 1e-9);
        assert!((c.z - 0.502).abs() < 1e-3);
    }

    #[test]
    fn test_color_tolerates_padding_and_quotes() {
        let c = decode_color(" \"0-255-0\" ").unwrap();
        assert_eq!(c, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_color_is_black() {
        assert_eq!(decode_color("").unwrap(), Vector3::zeros());
        assert_eq!(decode_color("  ").unwrap(), Vector3::zeros());
        assert_eq!(decode_color("\"\"").unwrap(), Vector3::zeros());
    }

    #[test]
    fn test_color_wrong_hyphen_count() {
        assert_eq!(
            decode_color("255-0").unwrap_err(),
            ColorError::ChannelCount { found: 2 }
        );
        assert_eq!(
            decode_color("1-2-3-4").unwrap_err(),
            ColorError::ChannelCount { found: 4 }
        );
        assert_eq!(
            decode_color("255").unwrap_err(),
            ColorError::ChannelCount { found: 1 }
        );
    }

    #[test]
    fn test_color_bad_channels() {
        assert!(matches!(
            decode_color("255--0"),
            Err(ColorError::InvalidChannel { channel: 1, .. })
        ));
        assert!(matches!(
            decode_color("2a5-0-0"),
            Err(ColorError::InvalidChannel { channel: 0, .. })
        ));
        assert!(matches!(
            decode_color("0-0-"),
            Err(ColorError::InvalidChannel { channel: 2, .. })
        ));
        assert_eq!(
            decode_color("0-300-0").unwrap_err(),
            ColorError::ChannelOutOfRange { channel: 1, value: 300 }
        );
    }

    #[test]
    fn test_average_radius() {
        assert_eq!(average_radius(70.0, 72.0), 71.0);
    }

    #[test]
    fn test_extract_oxygen() {
        let Extraction { record, defaulted } = extract(&oxygen_row()).unwrap();
        assert_eq!(record.name, "oxygen");
        assert_eq!(record.symbol, "O");
        assert_eq!(record.atomic_number, 8);
        assert_eq!(record.period_number, 2);
        assert!((record.electronegativity - 3.44).abs() < 1e-9);
        assert_eq!(record.atomic_radius, 48.0);
        assert!((record.van_der_waals_radius - 1.52).abs() < 1e-9);
        assert_eq!(record.bond_radii, [63.5, 57.0, 53.0]);
        assert!((record.color.y - 13.0 / 255.0).abs() < 1e-9);
        assert_eq!(record.valence_electrons, 6);
        assert!(!record.geometry_exception);
        assert!(!record.is_lone_pair());
        assert!(defaulted.is_empty());
    }

    #[test]
    fn test_single_bond_average_from_row() {
        let r = row(&[(0, "6"), (1, "C"), (50, "70"), (51, "72")]);
        let record = extract(&r).unwrap().record;
        assert_eq!(record.bond_radii[0], 71.0);
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let r = row(&[(0, "118"), (1, "Og"), (5, "oganesson"), (12, ""), (52, "-")]);
        let Extraction { record, defaulted } = extract(&r).unwrap();
        assert_eq!(record.electronegativity, 0.0);
        assert_eq!(record.bond_radii, [0.0; 3]);
        assert!(defaulted.contains(&"electronegativity"));
        assert!(defaulted.contains(&"double_bond_radius"));
        assert!(!defaulted.contains(&"atomic_number"));
    }

    #[test]
    fn test_geometry_exception_flag() {
        let be = row(&[(0, "4"), (1, "Be"), (2, "2"), (5, "beryllium")]);
        let b = row(&[(0, "5"), (1, "B"), (2, "13"), (5, "boron")]);
        let c = row(&[(0, "6"), (1, "C"), (2, "14"), (5, "carbon")]);
        assert!(extract(&be).unwrap().record.geometry_exception);
        assert!(extract(&b).unwrap().record.geometry_exception);
        assert!(!extract(&c).unwrap().record.geometry_exception);
    }

    #[test]
    fn test_valence_hint_branch() {
        let si = row(&[(0, "14"), (1, "Si"), (2, "14"), (22, "[Ne] 3s2 3p2")]);
        assert_eq!(extract(&si).unwrap().record.valence_electrons, 4);
    }

    #[test]
    fn test_short_row() {
        let fields = ["1", "H", "1"];
        assert_eq!(
            extract_element(&fields, &ColumnSchema::default()).unwrap_err(),
            RowError::MissingFields { expected: 55, found: 3 }
        );
    }

    #[test]
    fn test_bad_color_rejects_row() {
        let r = row(&[(0, "1"), (1, "H"), (54, "255-255")]);
        assert!(matches!(
            extract(&r),
            Err(RowError::MalformedColor(ColorError::ChannelCount { found: 2 }))
        ));
    }
}
