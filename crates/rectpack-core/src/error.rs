use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RectPackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Node budget {nodes} is smaller than the bin width {width}")]
    NodeBudget { nodes: usize, width: u32 },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to write image output to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RectPackError {
    /// True for failures that happened while persisting the output image.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Image(_))
    }
}

pub type Result<T> = std::result::Result<T, RectPackError>;
