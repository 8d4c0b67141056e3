use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("unknown series id `{0}`")]
    UnknownSeries(String),

    #[error("no dataset loaded")]
    NoDataset,
}
