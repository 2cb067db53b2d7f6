use serde::{Deserialize, Serialize};

use crate::core::record::Record;
use crate::error::{ChartError, ChartResult};

/// Multiplicative padding applied to a field's data envelope so boundary
/// points are not clipped by the plot margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPadding {
    pub lower_factor: f64,
    pub upper_factor: f64,
}

impl Default for DomainPadding {
    fn default() -> Self {
        Self {
            lower_factor: 0.8,
            upper_factor: 1.1,
        }
    }
}

impl DomainPadding {
    fn validate(self) -> ChartResult<Self> {
        if !self.lower_factor.is_finite()
            || !self.upper_factor.is_finite()
            || self.lower_factor <= 0.0
            || self.upper_factor <= 0.0
        {
            return Err(ChartError::InvalidData(
                "domain padding factors must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Padded horizontal domain for `field`: `(lower × min, upper × max)`.
///
/// Recomputed from scratch on every axis switch; never mutated incrementally.
pub fn padded_domain(
    records: &[Record],
    field: &str,
    padding: DomainPadding,
) -> ChartResult<(f64, f64)> {
    let padding = padding.validate()?;
    let (min, max) = field_envelope(records, field)?;
    Ok((padding.lower_factor * min, padding.upper_factor * max))
}

/// Vertical domain for the fixed field: `(0, upper × max)`.
///
/// The vertical metric is a percentage and originates at a meaningful zero
/// baseline rather than a padded minimum.
pub fn baseline_domain(
    records: &[Record],
    field: &str,
    upper_factor: f64,
) -> ChartResult<(f64, f64)> {
    if !upper_factor.is_finite() || upper_factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "domain padding factors must be finite and > 0".to_owned(),
        ));
    }
    let (_, max) = field_envelope(records, field)?;
    Ok((0.0, upper_factor * max))
}

fn field_envelope(records: &[Record], field: &str) -> ChartResult<(f64, f64)> {
    if records.is_empty() {
        return Err(ChartError::InvalidData(
            "domain cannot be computed from empty data".to_owned(),
        ));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let value = record.value(field)?;
        min = min.min(value);
        max = max.max(value);
    }

    Ok((min, max))
}
