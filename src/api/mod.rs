mod engine;
mod engine_config;

pub use engine::{ChartEngine, PointPosition};
pub use engine_config::ChartEngineConfig;
