//! Helpers shared between the TINY crates

pub mod nom_helpers;
