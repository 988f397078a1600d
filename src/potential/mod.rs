//! Potential conversion module
//!
//! Handles reference-electrode offsets and scale conversions.

pub mod converter;
pub mod references;

pub use converter::{aqueous_potentials_to_sce, convert_all, nonaqueous_potentials_to_fc, Medium};
pub use references::{
    aqueous_offset, lithium_offset, lithium_offset_or_default, nonaqueous_offset, LithiumSolvent,
    ReferenceElectrode, FC_LABEL, LITHIUM_LABEL, SCE_LABEL,
};
