//! Record model
//!
//! A single measurement row: a redox potential, the reference it was reported
//! against, and the solvent. Any other columns of the row are carried along.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::potential::references::LITHIUM_LABEL;
use crate::potential::Medium;

/// Column holding the measured potential
pub const POTENTIAL_FIELD: &str = "redox_potential_V";
/// Column holding the reference electrode label
pub const REFERENCE_FIELD: &str = "reference_electrode";
/// Column holding the solvent label
pub const SOLVENT_FIELD: &str = "solvent";

/// Record error types
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// A redox potential measurement
///
/// Serde goes through the untyped row form, so deserializing applies the same
/// checks as [`Record::from_row`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    pub redox_potential_v: f64,
    pub reference_electrode: String,
    pub solvent: Option<String>,
    /// Remaining columns of the row, untouched by conversion
    pub extra: Map<String, Value>,
}

impl Record {
    /// Create a record with no solvent and no extra columns
    pub fn new(redox_potential_v: f64, reference_electrode: impl Into<String>) -> Self {
        Self {
            redox_potential_v,
            reference_electrode: reference_electrode.into(),
            solvent: None,
            extra: Map::new(),
        }
    }

    /// Set the solvent
    pub fn with_solvent(mut self, solvent: impl Into<String>) -> Self {
        self.solvent = Some(solvent.into());
        self
    }

    /// Whether the record is already reported against the medium's target scale
    pub fn is_on_scale(&self, medium: Medium) -> bool {
        self.reference_electrode == medium.target_label()
    }

    /// Build a record from an untyped row
    ///
    /// `solvent` is only required when the reference is Li|Li+. A null
    /// potential reads as NaN, which is how non-finite values are written out.
    /// A null solvent column is kept as a null column.
    pub fn from_row(row: &Map<String, Value>) -> RecordResult<Self> {
        let redox_potential_v = match row.get(POTENTIAL_FIELD) {
            None => return Err(RecordError::MissingField(POTENTIAL_FIELD)),
            Some(Value::Null) => f64::NAN,
            Some(v) => v.as_f64().ok_or(RecordError::InvalidField {
                field: POTENTIAL_FIELD,
                expected: "number",
            })?,
        };

        let reference_electrode = string_field(row, REFERENCE_FIELD)?
            .ok_or(RecordError::MissingField(REFERENCE_FIELD))?;

        let solvent = string_field(row, SOLVENT_FIELD)?;
        if solvent.is_none() && reference_electrode == LITHIUM_LABEL {
            return Err(RecordError::MissingField(SOLVENT_FIELD));
        }

        let extra = row
            .iter()
            .filter(|(k, v)| match k.as_str() {
                POTENTIAL_FIELD | REFERENCE_FIELD => false,
                SOLVENT_FIELD => v.is_null(),
                _ => true,
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            redox_potential_v,
            reference_electrode,
            solvent,
            extra,
        })
    }

    /// Build a record from a JSON object string
    pub fn from_json(json: &str) -> RecordResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(row) => Self::from_row(&row),
            _ => Err(RecordError::InvalidField {
                field: "row",
                expected: "object",
            }),
        }
    }

    /// Convert back into an untyped row, keeping the extra columns
    ///
    /// Non-finite potentials are written as null.
    pub fn into_row(self) -> Map<String, Value> {
        let mut row = self.extra;
        row.insert(POTENTIAL_FIELD.to_string(), Value::from(self.redox_potential_v));
        row.insert(
            REFERENCE_FIELD.to_string(),
            Value::String(self.reference_electrode),
        );
        if let Some(solvent) = self.solvent {
            row.insert(SOLVENT_FIELD.to_string(), Value::String(solvent));
        }
        row
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(row: Map<String, Value>) -> RecordResult<Self> {
        Self::from_row(&row)
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record.into_row()
    }
}

/// Read an optional string column, rejecting non-string values
fn string_field(row: &Map<String, Value>, field: &'static str) -> RecordResult<Option<String>> {
    match row.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RecordError::InvalidField {
            field,
            expected: "string",
        }),
    }
}
