// src/model/registry.rs

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{RegistryError, Result, RowError};
use crate::io::periodic_table::{extract_element, Extraction};
use crate::io::tokenizer::{is_data_row, split_record, trim_line_ending, DEFAULT_DELIMITER};
use crate::model::elements::{ElementRecord, LONE_PAIR_SYMBOL};
use crate::model::schema::ColumnSchema;

/// Element records keyed by symbol, plus the `"LP"` lone pair entry.
///
/// Built once by [`RegistryLoader`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRegistry {
    elements: HashMap<String, ElementRecord>,
}

impl ElementRegistry {
    /// Load a dataset with the default schema and delimiter.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        RegistryLoader::default().load(path)
    }

    pub fn get(&self, symbol: &str) -> Option<&ElementRecord> {
        self.elements.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    /// The lone pair placeholder, present in every loaded registry.
    pub fn lone_pair(&self) -> Option<&ElementRecord> {
        self.get(LONE_PAIR_SYMBOL)
    }

    pub fn by_atomic_number(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.elements
            .values()
            .find(|e| !e.is_lone_pair() && e.atomic_number == atomic_number)
    }

    /// Entries in no particular order, as `(symbol, record)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementRecord)> {
        self.elements.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Real elements by atomic number, lone pair last.
    pub fn iter_by_atomic_number(&self) -> Vec<(&str, &ElementRecord)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(sa, a), (sb, b)| {
            (a.is_lone_pair(), a.atomic_number, *sa).cmp(&(b.is_lone_pair(), b.atomic_number, *sb))
        });
        entries
    }

    /// Number of entries, including the lone pair.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a ElementRegistry {
    type Item = (&'a String, &'a ElementRecord);
    type IntoIter = std::collections::hash_map::Iter<'a, String, ElementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A data row that was left out of the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: String,
}

/// What happened while loading, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Digit-prefixed rows seen.
    pub rows_admitted: usize,
    /// Distinct symbols inserted, before the lone pair. A row that
    /// overwrites an earlier symbol is counted in `duplicates` instead.
    pub rows_inserted: usize,
    pub skipped: Vec<SkippedRow>,
    /// Symbols that appeared more than once; the last row won.
    pub duplicates: Vec<String>,
    /// Numeric columns that defaulted to zero, per symbol.
    pub defaulted: Vec<(String, Vec<&'static str>)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.duplicates.is_empty()
    }
}

/// Registry plus its load report.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub registry: ElementRegistry,
    pub report: LoadReport,
}

/// Reads a periodic table dataset into an [`ElementRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct RegistryLoader {
    pub schema: ColumnSchema,
    pub delimiter: char,
    /// Fail the load on the first bad row instead of skipping it.
    pub strict: bool,
}

impl Default for RegistryLoader {
    fn default() -> Self {
        Self {
            schema: ColumnSchema::default(),
            delimiter: DEFAULT_DELIMITER,
            strict: false,
        }
    }
}

impl RegistryLoader {
    pub fn new(schema: ColumnSchema, delimiter: char, strict: bool) -> Self {
        Self {
            schema,
            delimiter,
            strict,
        }
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ElementRegistry> {
        self.load_with_report(path).map(|loaded| loaded.registry)
    }

    pub fn load_with_report<P: AsRef<Path>>(&self, path: P) -> Result<Loaded> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RegistryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading element data from {}", path.display());
        self.read_from(BufReader::new(file))
    }

    /// Build a registry from any line source. The reader is consumed.
    ///
    /// Lines are admitted on their raw first byte before any decoding, so
    /// headers and comments in a legacy encoding are skipped. An admitted
    /// row that is not UTF-8 is a row error.
    pub fn read_from<R: BufRead>(&self, mut reader: R) -> Result<Loaded> {
        let mut elements = HashMap::new();
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| RegistryError::Read {
                    line: line_no + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let raw = trim_line_ending(&buf);
            if !is_data_row(raw) {
                continue;
            }
            report.rows_admitted += 1;

            let extracted = std::str::from_utf8(raw)
                .map_err(|e| RowError::InvalidUtf8 {
                    valid_up_to: e.valid_up_to(),
                })
                .and_then(|line| extract_element(&split_record(line, self.delimiter), &self.schema));
            let Extraction { record, defaulted } = match extracted {
                Ok(extraction) => extraction,
                Err(source) if self.strict => {
                    return Err(RegistryError::Row {
                        line: line_no,
                        source,
                    });
                }
                Err(err) => {
                    log::warn!("Skipping line {}: {}", line_no, err);
                    report.skipped.push(SkippedRow {
                        line: line_no,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            if !defaulted.is_empty() {
                log::debug!(
                    "{} (line {}): defaulted to 0: {}",
                    record.symbol,
                    line_no,
                    defaulted.join(", ")
                );
                report.defaulted.push((record.symbol.clone(), defaulted));
            }

            let symbol = record.symbol.clone();
            if elements.insert(symbol.clone(), record).is_some() {
                log::warn!("Duplicate symbol '{}' on line {}, keeping the later row", symbol, line_no);
                report.duplicates.push(symbol);
            } else {
                report.rows_inserted += 1;
            }
        }

        if elements
            .insert(LONE_PAIR_SYMBOL.to_string(), ElementRecord::lone_pair())
            .is_some()
        {
            log::warn!("Dataset row with symbol '{}' replaced by the lone pair entry", LONE_PAIR_SYMBOL);
        }

        log::info!(
            "Loaded {} elements ({} rows skipped, {} duplicates)",
            elements.len() - 1,
            report.skipped.len(),
            report.duplicates.len()
        );

        Ok(Loaded {
            registry: ElementRegistry { elements },
            report,
        })
    }
}
