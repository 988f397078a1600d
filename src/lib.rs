//! Redox Reference Library
//!
//! Converts redox potential measurements between reference-electrode scales.

pub mod models;
pub mod potential;
