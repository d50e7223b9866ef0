use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid screen bounds: width={width}, height={height}")]
    InvalidBounds { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series index {index} out of range (series count: {count})")]
    UnknownSeries { index: usize, count: usize },

    #[error("viewport transform is not invertible (scale={scale})")]
    NonInvertibleTransform { scale: f64 },

    #[error("invalid point list at line {line}: {message}")]
    Import { line: usize, message: String },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
}
