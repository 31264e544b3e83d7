//src/model/mod.rs
pub mod elements;
pub mod registry;
pub mod schema;

// Re-exports for cleaner imports
pub use elements::{BondOrder, ElementRecord, LONE_PAIR_NAME, LONE_PAIR_SYMBOL};
pub use registry::{ElementRegistry, LoadReport, Loaded, RegistryLoader, SkippedRow};
pub use schema::ColumnSchema;
