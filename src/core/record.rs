use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One selectable numeric field together with its on-chart display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub key: String,
    pub label: String,
}

impl FieldDef {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// One data point: named numeric fields plus a categorical abbreviation
/// used as the point's display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub abbr: String,
    pub values: IndexMap<String, f64>,
}

impl Record {
    #[must_use]
    pub fn new(abbr: impl Into<String>, values: IndexMap<String, f64>) -> Self {
        Self {
            abbr: abbr.into(),
            values,
        }
    }

    /// Looks up a numeric field, failing when the field is absent or not a
    /// usable number. Silent coercion would corrupt domain computation for
    /// every other record, so a bad value is surfaced as an integrity fault.
    pub fn value(&self, field: &str) -> ChartResult<f64> {
        match self.values.get(field) {
            Some(value) if value.is_finite() => Ok(*value),
            _ => Err(ChartError::DataIntegrity {
                abbr: self.abbr.clone(),
                field: field.to_owned(),
            }),
        }
    }
}
