// src/io/mod.rs
pub mod numeric;
pub mod periodic_table;
pub mod tokenizer;

pub use numeric::{safe_float, safe_int};
pub use periodic_table::{decode_color, extract_element, Extraction};
pub use tokenizer::split_record;
