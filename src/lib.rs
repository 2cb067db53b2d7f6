//! scatter-rs: an interactive scatter-chart engine.
//!
//! The crate models the classic "switchable x-axis" scatter plot: a small
//! tabular dataset, one fixed vertical metric, and several candidate
//! horizontal fields the user can flip between via axis labels, with the
//! axis and every point animating to their new positions.

pub mod animation;
pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
