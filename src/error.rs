use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown axis field `{0}`")]
    UnknownField(String),

    #[error("record `{abbr}` has no usable value for field `{field}`")]
    DataIntegrity { abbr: String, field: String },

    #[error("failed to load chart data: {0}")]
    DataLoad(#[from] csv::Error),
}
