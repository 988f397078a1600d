//! Reference electrode types and offset constants
//!
//! Provides the reference scales, lithium solvents, and the fixed offsets used to
//! move a potential from one scale to another.
//!
//! Aqueous and non-aqueous offsets are from Bard & Faulkner, *Electrochemical
//! Methods: Fundamentals and Applications*, 2nd ed. Lithium offsets are from
//! J. Electrochem. Soc. 164 (12) A2295-A2297 (2017).

use serde::{Deserialize, Serialize};

/// Canonical label of the aqueous target scale
pub const SCE_LABEL: &str = "SCE";
/// Canonical label of the non-aqueous target scale
pub const FC_LABEL: &str = "Fc/Fc+";
/// Label of the lithium reference, whose offset depends on the solvent
pub const LITHIUM_LABEL: &str = "Li|Li+";
/// Solvent whose lithium offset is used when the solvent is unknown
pub const DEFAULT_LITHIUM_SOLVENT: &str = "carbonate (using PC)";

/// A reference electrode with a known offset in at least one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceElectrode {
    /// Saturated calomel electrode
    #[serde(rename = "SCE")]
    Sce,
    /// Normal hydrogen electrode
    #[serde(rename = "NHE")]
    Nhe,
    /// Standard hydrogen electrode
    #[serde(rename = "SHE")]
    She,
    /// Silver / silver chloride
    #[serde(rename = "Ag|AgCl")]
    AgAgCl,
    /// Ferrocene / ferrocenium couple
    #[serde(rename = "Fc/Fc+")]
    Ferrocene,
    /// Lithium metal, solvent dependent
    #[serde(rename = "Li|Li+")]
    Lithium,
}

impl ReferenceElectrode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceElectrode::Sce => SCE_LABEL,
            ReferenceElectrode::Nhe => "NHE",
            ReferenceElectrode::She => "SHE",
            ReferenceElectrode::AgAgCl => "Ag|AgCl",
            ReferenceElectrode::Ferrocene => FC_LABEL,
            ReferenceElectrode::Lithium => LITHIUM_LABEL,
        }
    }

    /// Parse from a reference label. Labels are matched exactly.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            SCE_LABEL => Some(ReferenceElectrode::Sce),
            "NHE" => Some(ReferenceElectrode::Nhe),
            "SHE" => Some(ReferenceElectrode::She),
            "Ag|AgCl" => Some(ReferenceElectrode::AgAgCl),
            FC_LABEL => Some(ReferenceElectrode::Ferrocene),
            LITHIUM_LABEL => Some(ReferenceElectrode::Lithium),
            _ => None,
        }
    }

    /// Offset to add to move a potential from this reference to SCE
    pub fn offset_vs_sce(&self) -> Option<f64> {
        match self {
            ReferenceElectrode::Sce => Some(0.0),
            ReferenceElectrode::Nhe | ReferenceElectrode::She => Some(NHE_VS_SCE_V),
            ReferenceElectrode::AgAgCl => Some(AG_AGCL_VS_SCE_V),
            ReferenceElectrode::Ferrocene | ReferenceElectrode::Lithium => None,
        }
    }

    /// Offset to add to move a potential from this reference to Fc/Fc+
    ///
    /// Lithium has no fixed entry here; see [`lithium_offset_or_default`].
    pub fn offset_vs_fc(&self) -> Option<f64> {
        match self {
            ReferenceElectrode::Ferrocene => Some(0.0),
            ReferenceElectrode::Sce => Some(SCE_VS_FC_V),
            ReferenceElectrode::Nhe | ReferenceElectrode::She => Some(NHE_VS_FC_V),
            ReferenceElectrode::AgAgCl | ReferenceElectrode::Lithium => None,
        }
    }
}

/// Solvent with a tabulated Li|Li+ offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LithiumSolvent {
    #[serde(rename = "MeCN")]
    MeCN,
    #[serde(rename = "acetonitrile")]
    Acetonitrile,
    #[default]
    #[serde(rename = "carbonate (using PC)")]
    PropyleneCarbonate,
}

impl LithiumSolvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LithiumSolvent::MeCN => "MeCN",
            LithiumSolvent::Acetonitrile => "acetonitrile",
            LithiumSolvent::PropyleneCarbonate => DEFAULT_LITHIUM_SOLVENT,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MeCN" => Some(LithiumSolvent::MeCN),
            "acetonitrile" => Some(LithiumSolvent::Acetonitrile),
            DEFAULT_LITHIUM_SOLVENT => Some(LithiumSolvent::PropyleneCarbonate),
            _ => None,
        }
    }

    /// Offset to add to move a Li|Li+ potential in this solvent to Fc/Fc+
    pub fn offset_vs_fc(&self) -> f64 {
        match self {
            LithiumSolvent::MeCN | LithiumSolvent::Acetonitrile => LI_VS_FC_IN_MECN_V,
            LithiumSolvent::PropyleneCarbonate => LI_VS_FC_IN_PC_V,
        }
    }
}

// ============================================================================
// Aqueous Offsets (to SCE)
// ============================================================================

/// NHE/SHE potential vs SCE
pub const NHE_VS_SCE_V: f64 = 0.242;
/// Ag|AgCl potential vs SCE
pub const AG_AGCL_VS_SCE_V: f64 = 0.045;

// ============================================================================
// Non-aqueous Offsets (to Fc/Fc+)
// ============================================================================

/// SCE potential vs Fc/Fc+
pub const SCE_VS_FC_V: f64 = -0.31;
/// NHE/SHE potential vs Fc/Fc+, chained through SCE
pub const NHE_VS_FC_V: f64 = SCE_VS_FC_V + NHE_VS_SCE_V;
/// Li|Li+ potential vs Fc/Fc+ in acetonitrile
pub const LI_VS_FC_IN_MECN_V: f64 = -3.3;
/// Li|Li+ potential vs Fc/Fc+ in propylene carbonate
pub const LI_VS_FC_IN_PC_V: f64 = -3.4;

// ============================================================================
// Table Lookups
// ============================================================================

/// Get the offset to SCE for an aqueous reference label
pub fn aqueous_offset(reference: &str) -> Option<f64> {
    ReferenceElectrode::from_str(reference).and_then(|r| r.offset_vs_sce())
}

/// Get the offset to Fc/Fc+ for a non-aqueous reference label
///
/// Returns None for Li|Li+, which is keyed by solvent instead.
pub fn nonaqueous_offset(reference: &str) -> Option<f64> {
    ReferenceElectrode::from_str(reference).and_then(|r| r.offset_vs_fc())
}

/// Get the Li|Li+ offset to Fc/Fc+ for a solvent label
pub fn lithium_offset(solvent: &str) -> Option<f64> {
    LithiumSolvent::from_str(solvent).map(|s| s.offset_vs_fc())
}

/// Get the Li|Li+ offset for a solvent, falling back to propylene carbonate
pub fn lithium_offset_or_default(solvent: Option<&str>) -> f64 {
    solvent
        .and_then(lithium_offset)
        .unwrap_or_else(|| LithiumSolvent::default().offset_vs_fc())
}
