//! Error taxonomy for the reconstruction pipeline.
//!
//! All fatal conditions surface before the pixel loop starts: container
//! violations and view dimension mismatches while loading, configuration
//! problems while building the [`crate::Reconstructor`]. The matching core
//! itself is pure and does not fail per pixel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconstructError {
    /// Input is not the expected uncompressed 24-bit bitmap container.
    #[error("invalid image container: {0}")]
    Format(String),

    /// The three input views do not share identical dimensions.
    #[error("view dimensions differ: center is {center_w}x{center_h}, {label} is {other_w}x{other_h}")]
    DimensionMismatch {
        center_w: usize,
        center_h: usize,
        label: &'static str,
        other_w: usize,
        other_h: usize,
    },

    /// Run parameters describe an empty or unusable search domain.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReconstructError>;
