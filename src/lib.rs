//! Periodic table element registry for VSEPR molecular geometry modelling.
//!
//! Reads a comma separated periodic table export, derives the properties the
//! geometry model needs (valence electrons, bond radii, display colour) and
//! returns an owned, read-only [`ElementRegistry`] keyed by element symbol.
//!
//! ```no_run
//! use vsepr_elements::ElementRegistry;
//!
//! let registry = ElementRegistry::load("data/periodic_table.csv")?;
//! let oxygen = registry.get("O").expect("oxygen in dataset");
//! assert_eq!(oxygen.valence_electrons, 6);
//! assert!(registry.lone_pair().is_some());
//! # Ok::<(), vsepr_elements::RegistryError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod utils;

pub use error::{ColorError, RegistryError, RowError};
pub use model::{BondOrder, ColumnSchema, ElementRecord, ElementRegistry, LoadReport, RegistryLoader};
