#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod image;
pub mod reconstruct;
pub mod sink;
pub mod types;

// Matching internals – public for tools and tests, considered unstable.
pub mod cost;
pub mod minimizer;
pub mod sampler;

// --- High-level re-exports -------------------------------------------------

// Main entry points: driver + results.
pub use crate::error::{ReconstructError, Result};
pub use crate::reconstruct::{BorderPolicy, ReconstructParams, Reconstructor};
pub use crate::types::{DepthMap, PointRecord, ReconReport};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use depthmatch::prelude::*;
///
/// # fn main() -> depthmatch::Result<()> {
/// let views = TrinocularViews::new(
///     RgbImage::new(64, 48),
///     RgbImage::new(64, 48),
///     RgbImage::new(64, 48),
/// )?;
/// let reconstructor = Reconstructor::new(ReconstructParams::default())?;
/// let mut sink = MemoryPointSink::default();
/// let report = reconstructor.process(&views, &mut sink)?;
/// println!("{} points in {:.3} ms", report.points, report.latency_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{RgbImage, TrinocularViews};
    pub use crate::sink::{MemoryPointSink, PointSink, TextPointSink};
    pub use crate::{ReconstructParams, Reconstructor};
}
