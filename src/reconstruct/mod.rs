//! Reconstruction driver orchestrating the per-pixel pipeline.
//!
//! Overview
//! - Validates run parameters and derives the shared displacement domain
//!   before any pixel work starts.
//! - For every output pixel: builds the per-displacement cost array against
//!   both side views, refines the discrete minimum to sub-pixel precision,
//!   converts the displacement to depth and emits one colored point record.
//! - Rows are processed in parallel; per-pixel results are independent and
//!   identical to a sequential run. The sink stays sequential: rows are
//!   collected and streamed in row-major order.
//!
//! Modules
//! - [`params`] – run configuration (rig, window, cost variant, border
//!   policy) used by the driver and the CLI.
//! - `pipeline` – the [`Reconstructor`] implementation.

pub mod params;
mod pipeline;

pub use params::{BorderPolicy, ReconstructParams};
pub use pipeline::Reconstructor;
