//! Runtime configuration for the `reconstruct` binary.

use crate::error::{ReconstructError, Result};
use crate::reconstruct::ReconstructParams;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the three input views.
#[derive(Clone, Debug, Deserialize)]
pub struct InputConfig {
    pub center: PathBuf,
    pub left: PathBuf,
    pub right: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Point-cloud text stream.
    pub points: PathBuf,
    /// Optional grayscale depth visualization (`.bmp` or `.png`).
    #[serde(default)]
    pub depth_map: Option<PathBuf>,
    /// Optional JSON run report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub params: ReconstructParams,
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ReconstructError::Config(format!("failed to read config {}: {e}", path.display()))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        ReconstructError::Config(format!("failed to parse config {}: {e}", path.display()))
    })
}

/// Resolve the config path from the command line and load it.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig> {
    let mut args = env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => {
            return Err(ReconstructError::Config(format!(
                "usage: {program} <config.json>"
            )))
        }
    };
    load_config(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostKind;

    #[test]
    fn minimal_config_uses_default_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "input": { "center": "c.bmp", "left": "l.bmp", "right": "r.bmp" },
                "output": { "points": "points.dat" }
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.params.cost, CostKind::Ssd);
        assert_eq!(config.params.window.half_width, 3);
        assert!(config.output.depth_map.is_none());
    }

    #[test]
    fn cost_variant_parses_from_snake_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "input": { "center": "c.bmp", "left": "l.bmp", "right": "r.bmp" },
                "params": { "cost": "cross_difference", "rig": { "focal_px": 400.0, "baseline": 0.2, "zmin": 1.0, "zmax": 10.0 } },
                "output": { "points": "points.dat", "depth_map": "depth.png" }
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.params.cost, CostKind::CrossDifference);
        assert_eq!(config.params.rig.focal_px, 400.0);
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ReconstructError::Config(_))
        ));
    }
}
