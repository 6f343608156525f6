//! Gallery error types.

use mosaic::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no photo at index {0}")]
    MissingPhoto(usize),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
