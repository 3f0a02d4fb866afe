use thiserror::Error;

#[derive(Debug, Error)]
pub enum StitchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Unknown layout strategy: {0}")]
    UnknownLayout(String),
    #[error("Nothing to lay out")]
    Empty,
    #[error("Layout queried before finalize()")]
    NotFinalized,
    #[error("Layout is finalized and read-only")]
    Finalized,
}

pub type Result<T> = std::result::Result<T, StitchError>;
