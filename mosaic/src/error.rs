//! Layout error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("index {index} out of range for {len} laid out items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("layout queried before a computation pass")]
    StaleCacheQuery,

    #[error("invalid height {height} for item {index}")]
    InvalidHeight { index: usize, height: f32 },

    #[error("invalid container: {0}")]
    InvalidContainer(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
