use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Engine construction parameters.
///
/// Defaults reproduce the reference chart: a 960×500 surface with
/// {20, 40, 80, 100} margins (an 820×400 plot area), radius-15 teal markers
/// at 0.4 opacity, 11 px point labels, and an 1800 ms axis transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub point_radius: f64,
    pub point_fill: Color,
    pub label_font_size_px: f64,
    pub axis_font_size_px: f64,
    pub tick_count: usize,
    pub transition_duration_ms: f64,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(960, 500),
            margins: Margins::default(),
            point_radius: 15.0,
            point_fill: Color::MARKER_TEAL,
            label_font_size_px: 11.0,
            axis_font_size_px: 14.0,
            tick_count: 10,
            transition_duration_ms: 1800.0,
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, transition_duration_ms: f64) -> Self {
        self.transition_duration_ms = transition_duration_ms;
        self
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;
        self.point_fill.validate()?;
        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("label font size", self.label_font_size_px),
            ("axis font size", self.axis_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.tick_count < 2 {
            return Err(ChartError::InvalidData(
                "tick count must be at least 2".to_owned(),
            ));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms <= 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
