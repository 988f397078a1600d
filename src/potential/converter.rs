//! Potential conversion functions
//!
//! Rewrites records onto the SCE scale (aqueous media) or the Fc/Fc+ scale
//! (non-aqueous media). Records with an unrecognized reference pass through.

use serde::{Deserialize, Serialize};

use super::references::{
    aqueous_offset, lithium_offset, lithium_offset_or_default, nonaqueous_offset, FC_LABEL,
    LITHIUM_LABEL, SCE_LABEL,
};
use crate::models::Record;

/// Measurement medium, which selects the target scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Medium {
    /// Converted to SCE
    Aqueous,
    /// Converted to Fc/Fc+
    NonAqueous,
}

impl Medium {
    /// Label of the scale records are converted to
    pub fn target_label(&self) -> &'static str {
        match self {
            Medium::Aqueous => SCE_LABEL,
            Medium::NonAqueous => FC_LABEL,
        }
    }

    /// Apply this medium's converter to a record
    pub fn convert<'a>(&self, record: &'a mut Record) -> &'a mut Record {
        match self {
            Medium::Aqueous => aqueous_potentials_to_sce(record),
            Medium::NonAqueous => nonaqueous_potentials_to_fc(record),
        }
    }
}

/// Convert a record measured in aqueous media to the SCE scale
///
/// If the reference is in the aqueous table, the offset is added to the
/// potential and the reference becomes "SCE". Otherwise the record is left
/// unaltered.
///
/// Examples:
/// - 0.200 V vs "NHE" -> 0.442 V vs "SCE"
/// - 0.200 V vs "Ag|AgCl" -> 0.245 V vs "SCE"
pub fn aqueous_potentials_to_sce(record: &mut Record) -> &mut Record {
    if let Some(correction) = aqueous_offset(&record.reference_electrode) {
        apply_correction(record, correction, SCE_LABEL);
    }
    record
}

/// Convert a record measured in non-aqueous media to the Fc/Fc+ scale
///
/// Li|Li+ references are corrected by solvent, falling back to the
/// propylene carbonate offset when the solvent is unknown or missing. Other
/// references use the non-aqueous table. Unknown references are left
/// unaltered.
///
/// Examples:
/// - -0.500 V vs "SCE" -> -0.810 V vs "Fc/Fc+"
/// - 0.0 V vs "Li|Li+" in "acetonitrile" -> -3.3 V vs "Fc/Fc+"
pub fn nonaqueous_potentials_to_fc(record: &mut Record) -> &mut Record {
    if record.reference_electrode == LITHIUM_LABEL {
        let solvent = record.solvent.as_deref();
        if solvent.and_then(lithium_offset).is_none() {
            tracing::warn!(
                "Unknown lithium solvent {:?}. Using carbonate (PC) offset.",
                solvent
            );
        }
        let correction = lithium_offset_or_default(solvent);
        apply_correction(record, correction, FC_LABEL);
    } else if let Some(correction) = nonaqueous_offset(&record.reference_electrode) {
        apply_correction(record, correction, FC_LABEL);
    }
    record
}

/// Apply a converter for the medium to every record
///
/// Returns the number of records that were moved onto the target scale.
pub fn convert_all(records: &mut [Record], medium: Medium) -> usize {
    let mut converted = 0;
    for record in records.iter_mut() {
        let was_on_scale = record.is_on_scale(medium);
        medium.convert(record);
        if !was_on_scale && record.is_on_scale(medium) {
            converted += 1;
        }
    }
    tracing::debug!(
        "Converted {} of {} records to {}",
        converted,
        records.len(),
        medium.target_label()
    );
    converted
}

fn apply_correction(record: &mut Record, correction: f64, target: &str) {
    tracing::debug!(
        "Correcting {} V vs {} by {} V to {}",
        record.redox_potential_v,
        record.reference_electrode,
        correction,
        target
    );
    record.redox_potential_v += correction;
    record.reference_electrode = target.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_aqueous_nhe_to_sce() {
        let mut record = Record::new(0.200, "NHE");
        aqueous_potentials_to_sce(&mut record);
        assert_close(record.redox_potential_v, 0.442);
        assert_eq!(record.reference_electrode, "SCE");
    }

    #[test]
    fn test_aqueous_she_matches_nhe() {
        let mut record = Record::new(-0.1, "SHE");
        aqueous_potentials_to_sce(&mut record);
        assert_close(record.redox_potential_v, 0.142);
        assert_eq!(record.reference_electrode, "SCE");
    }

    #[test]
    fn test_aqueous_agcl_to_sce() {
        let mut record = Record::new(0.200, "Ag|AgCl");
        let returned = aqueous_potentials_to_sce(&mut record);
        assert_close(returned.redox_potential_v, 0.245);
        assert_eq!(returned.reference_electrode, "SCE");
    }

    #[test]
    fn test_aqueous_twice_is_noop() {
        let mut record = Record::new(0.200, "NHE");
        aqueous_potentials_to_sce(&mut record);
        let once = record.clone();
        aqueous_potentials_to_sce(&mut record);
        assert_eq!(record, once);
    }

    #[test]
    fn test_aqueous_unknown_passes_through() {
        for label in ["unknown_ref", "Fc/Fc+", "Li|Li+", "nhe"] {
            let mut record = Record::new(1.0, label);
            let before = record.clone();
            aqueous_potentials_to_sce(&mut record);
            assert_eq!(record, before);
        }
    }

    #[test]
    fn test_nonaqueous_sce_to_fc() {
        let mut record = Record::new(-0.500, "SCE");
        nonaqueous_potentials_to_fc(&mut record);
        assert_close(record.redox_potential_v, -0.810);
        assert_eq!(record.reference_electrode, "Fc/Fc+");
    }

    #[test]
    fn test_nonaqueous_nhe_to_fc() {
        let mut record = Record::new(0.0, "NHE");
        nonaqueous_potentials_to_fc(&mut record);
        assert_close(record.redox_potential_v, -0.068);
        assert_eq!(record.reference_electrode, "Fc/Fc+");
    }

    #[test]
    fn test_nonaqueous_lithium_by_solvent() {
        let mut record = Record::new(0.0, "Li|Li+").with_solvent("acetonitrile");
        nonaqueous_potentials_to_fc(&mut record);
        assert_close(record.redox_potential_v, -3.3);
        assert_eq!(record.reference_electrode, "Fc/Fc+");

        let mut record = Record::new(3.5, "Li|Li+").with_solvent("MeCN");
        nonaqueous_potentials_to_fc(&mut record);
        assert_close(record.redox_potential_v, 0.2);
    }

    #[test]
    fn test_nonaqueous_lithium_unknown_solvent() {
        let mut record = Record::new(0.0, "Li|Li+").with_solvent("unknown_solvent");
        nonaqueous_potentials_to_fc(&mut record);
        assert_close(record.redox_potential_v, -3.4);
        assert_eq!(record.reference_electrode, "Fc/Fc+");
        assert_eq!(record.solvent.as_deref(), Some("unknown_solvent"));
    }

    #[test]
    fn test_nonaqueous_lithium_missing_solvent() {
        let mut record = Record::new(0.0, "Li|Li+");
        nonaqueous_potentials_to_fc(&mut record);
        assert_close(record.redox_potential_v, -3.4);
        assert_eq!(record.reference_electrode, "Fc/Fc+");
    }

    #[test]
    fn test_nonaqueous_unknown_passes_through() {
        for label in ["unknown_ref", "Ag|AgCl"] {
            let mut record = Record::new(1.0, label).with_solvent("MeCN");
            let before = record.clone();
            nonaqueous_potentials_to_fc(&mut record);
            assert_eq!(record, before);
        }
    }

    #[test]
    fn test_medium_dispatch() {
        let mut record = Record::new(0.2, "SCE");
        Medium::Aqueous.convert(&mut record);
        assert_close(record.redox_potential_v, 0.2);
        assert_eq!(record.reference_electrode, "SCE");

        Medium::NonAqueous.convert(&mut record);
        assert_close(record.redox_potential_v, -0.11);
        assert_eq!(record.reference_electrode, "Fc/Fc+");
    }

    #[test]
    fn test_convert_all_counts_moved_records() {
        let mut records = vec![
            Record::new(0.2, "NHE"),
            Record::new(0.1, "SCE"),
            Record::new(1.0, "unknown_ref"),
            Record::new(0.2, "Ag|AgCl"),
        ];
        let converted = convert_all(&mut records, Medium::Aqueous);
        assert_eq!(converted, 2);
        assert_close(records[0].redox_potential_v, 0.442);
        assert_close(records[1].redox_potential_v, 0.1);
        assert_eq!(records[2].reference_electrode, "unknown_ref");
        assert_close(records[3].redox_potential_v, 0.245);
    }

    #[test]
    fn test_medium_serde() {
        assert_eq!(
            serde_json::to_string(&Medium::NonAqueous).unwrap(),
            "\"non_aqueous\""
        );
        let medium: Medium = serde_json::from_str("\"aqueous\"").unwrap();
        assert_eq!(medium, Medium::Aqueous);
    }
}
