//! Declarative transition model for axis switches.
//!
//! The engine never polls or blocks on an animation: it materializes a
//! `Transition` describing start and target pixel positions, and the host's
//! frame loop samples it with elapsed wall-clock time. Every track shares
//! one duration, so points and axis ticks always complete together.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One in-flight horizontal re-layout: per-point and per-tick pixel tracks
/// interpolated over a single shared duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    point_start: Vec<f64>,
    point_target: Vec<f64>,
    tick_values: Vec<f64>,
    tick_start: Vec<f64>,
    tick_target: Vec<f64>,
    duration_ms: f64,
}

/// Interpolated positions for one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSample {
    pub point_x: Vec<f64>,
    pub tick_x: Vec<f64>,
    pub complete: bool,
}

impl Transition {
    pub fn new(
        point_start: Vec<f64>,
        point_target: Vec<f64>,
        tick_values: Vec<f64>,
        tick_start: Vec<f64>,
        tick_target: Vec<f64>,
        duration_ms: f64,
    ) -> ChartResult<Self> {
        if point_start.len() != point_target.len() {
            return Err(ChartError::InvalidData(
                "transition point tracks must have equal length".to_owned(),
            ));
        }
        if tick_values.len() != tick_start.len() || tick_start.len() != tick_target.len() {
            return Err(ChartError::InvalidData(
                "transition tick tracks must have equal length".to_owned(),
            ));
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and > 0".to_owned(),
            ));
        }
        for track in [&point_start, &point_target, &tick_start, &tick_target] {
            if track.iter().any(|position| !position.is_finite()) {
                return Err(ChartError::InvalidData(
                    "transition positions must be finite".to_owned(),
                ));
            }
        }

        Ok(Self {
            point_start,
            point_target,
            tick_values,
            tick_start,
            tick_target,
            duration_ms,
        })
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Domain values labelling the animated ticks.
    #[must_use]
    pub fn tick_values(&self) -> &[f64] {
        &self.tick_values
    }

    #[must_use]
    pub fn point_targets(&self) -> &[f64] {
        &self.point_target
    }

    /// Normalized progress in `[0, 1]`, clamped outside the duration.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Samples every track at one shared progress value (linear easing).
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> TransitionSample {
        let progress = self.progress(elapsed_ms);
        let point_x = self
            .point_start
            .iter()
            .zip(&self.point_target)
            .map(|(start, target)| lerp(*start, *target, progress))
            .collect();
        let tick_x = self
            .tick_start
            .iter()
            .zip(&self.tick_target)
            .map(|(start, target)| lerp(*start, *target, progress))
            .collect();

        TransitionSample {
            point_x,
            tick_x,
            complete: progress >= 1.0,
        }
    }
}

fn lerp(start: f64, target: f64, progress: f64) -> f64 {
    start + (target - start) * progress
}
