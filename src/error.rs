use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown figure `{0}`")]
    UnknownFigure(String),

    #[error("invalid payload for figure `{name}`: {reason}")]
    InvalidFigure { name: String, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
