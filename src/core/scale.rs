use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Linear domain-to-pixel mapping over a fixed pixel range.
///
/// The range is set once at construction and never changes for the lifetime
/// of a chart instance; axis switches replace the domain in place. A
/// descending range expresses an inverted (bottom-up) vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        validate_span("domain", domain)?;
        validate_span("range", range)?;

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Replaces the domain, leaving the pixel range untouched.
    pub fn set_domain(&mut self, domain: (f64, f64)) -> ChartResult<()> {
        validate_span("domain", domain)?;
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        Ok(())
    }

    pub fn to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> SmallVec<[f64; 12]> {
        let mut ticks = SmallVec::new();
        match tick_count {
            0 => {}
            1 => ticks.push(self.domain_start),
            _ => {
                let span = self.domain_end - self.domain_start;
                let denominator = (tick_count - 1) as f64;
                for index in 0..tick_count {
                    let ratio = (index as f64) / denominator;
                    ticks.push(self.domain_start + span * ratio);
                }
            }
        }
        ticks
    }
}

fn validate_span(name: &str, span: (f64, f64)) -> ChartResult<()> {
    if !span.0.is_finite() || !span.1.is_finite() || span.0 == span.1 {
        return Err(ChartError::InvalidData(format!(
            "scale {name} must be finite and non-zero"
        )));
    }
    Ok(())
}
