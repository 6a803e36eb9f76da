//! Run configuration for the reconstruction driver.

use crate::cost::{CostKind, MatchWindow};
use crate::error::{ReconstructError, Result};
use crate::sampler::{DisparityRange, RigParams};
use serde::{Deserialize, Serialize};

/// How output pixels near the image border are traversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Visit every pixel; the scorers clip the window against the bounds.
    #[default]
    Clip,
    /// Skip a margin of `half_width` columns and `half_height` rows so every
    /// window is fully interior. Skipped pixels emit no record.
    SkipMargin,
}

/// Everything fixed for one reconstruction run. Supplied once, never
/// changed mid-run.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructParams {
    pub rig: RigParams,
    pub window: MatchWindow,
    pub cost: CostKind,
    pub border: BorderPolicy,
}

impl ReconstructParams {
    /// Validate the parameter set and derive the shared displacement domain.
    pub fn validate(&self) -> Result<DisparityRange> {
        if self.window.half_width < 1 || self.window.half_height < 1 {
            return Err(ReconstructError::Config(format!(
                "window half-extents must be at least 1 (got {}x{})",
                self.window.half_width, self.window.half_height
            )));
        }
        self.rig.disparity_range()
    }
}
