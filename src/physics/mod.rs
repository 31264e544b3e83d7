// src/physics/mod.rs

pub mod valence;

pub use valence::valence_electrons;
