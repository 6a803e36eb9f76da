//! The [`Reconstructor`] driving the per-pixel correspondence search.

use super::params::{BorderPolicy, ReconstructParams};
use crate::error::Result;
use crate::image::TrinocularViews;
use crate::minimizer::parabolic_minimum;
use crate::sampler::{sample_costs, DisparityRange};
use crate::sink::PointSink;
use crate::types::{DepthMap, PointRecord, ReconReport};
use log::debug;
use nalgebra::Point3;
use rayon::prelude::*;
use std::ops::Range;
use std::time::Instant;

/// Per-pixel depth reconstruction over a trinocular view triple.
///
/// Construction validates the run parameters; [`Reconstructor::process`]
/// then runs the embarrassingly parallel pixel loop and streams point
/// records to the sink in row-major order.
pub struct Reconstructor {
    params: ReconstructParams,
    range: DisparityRange,
}

/// Output of one reconstructed row, collected before the sequential sink
/// pass so the parallel workers never share mutable state.
struct RowOutput {
    y: usize,
    displacements: Vec<f64>,
    points: Vec<PointRecord>,
}

impl Reconstructor {
    /// Create a driver with the supplied parameters, deriving the
    /// displacement domain shared by every output pixel.
    pub fn new(params: ReconstructParams) -> Result<Self> {
        let range = params.validate()?;
        debug!(
            "displacement domain [{}, {}] ({} cost samples per pixel)",
            range.min,
            range.max,
            range.len()
        );
        Ok(Self { params, range })
    }

    pub fn params(&self) -> &ReconstructParams {
        &self.params
    }

    pub fn disparity_range(&self) -> DisparityRange {
        self.range
    }

    /// Run the full pipeline: one depth estimate and one point record per
    /// traversed pixel. Returns the run summary; the dense displacement map
    /// is produced alongside via [`Reconstructor::process_with_depth`].
    pub fn process(&self, views: &TrinocularViews, sink: &mut dyn PointSink) -> Result<ReconReport> {
        self.process_with_depth(views, sink).map(|(report, _)| report)
    }

    /// As [`Reconstructor::process`], additionally returning the dense
    /// continuous-displacement map for debug visualization.
    pub fn process_with_depth(
        &self,
        views: &TrinocularViews,
        sink: &mut dyn PointSink,
    ) -> Result<(ReconReport, DepthMap)> {
        let start = Instant::now();
        let width = views.width();
        let height = views.height();
        let (xs, ys) = self.traversal_bounds(width, height);
        let expected = xs.len() * ys.len();

        let rows: Vec<RowOutput> = ys
            .into_par_iter()
            .map(|yc| self.process_row(views, yc, xs.clone()))
            .collect();

        let mut depth = DepthMap::new(width, height);
        sink.begin(expected)?;
        let mut points = 0usize;
        for row in &rows {
            depth.row_mut(row.y)[xs.clone()].copy_from_slice(&row.displacements);
            for record in &row.points {
                sink.push(record)?;
                points += 1;
            }
        }
        sink.finish()?;

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!("reconstructed {points} points in {latency_ms:.3} ms");
        Ok((
            ReconReport {
                width,
                height,
                points,
                disparity_min: self.range.min,
                disparity_max: self.range.max,
                latency_ms,
            },
            depth,
        ))
    }

    fn traversal_bounds(&self, width: usize, height: usize) -> (Range<usize>, Range<usize>) {
        match self.params.border {
            BorderPolicy::Clip => (0..width, 0..height),
            BorderPolicy::SkipMargin => {
                let mx = self.params.window.half_width as usize;
                let my = self.params.window.half_height as usize;
                let x_end = width.saturating_sub(mx);
                let y_end = height.saturating_sub(my);
                (mx.min(x_end)..x_end, my.min(y_end)..y_end)
            }
        }
    }

    fn process_row(&self, views: &TrinocularViews, yc: usize, xs: Range<usize>) -> RowOutput {
        let rig = &self.params.rig;
        let cx = (views.width() / 2) as f64;
        let cy = (views.height() / 2) as f64;

        let mut costs = Vec::with_capacity(self.range.len());
        let mut displacements = Vec::with_capacity(xs.len());
        let mut points = Vec::with_capacity(xs.len());
        for xc in xs {
            sample_costs(
                views,
                xc as i32,
                yc as i32,
                rig,
                self.range,
                self.params.window,
                self.params.cost,
                &mut costs,
            );
            let md = parabolic_minimum(self.range.min, self.range.max, &costs);
            let z = rig.depth(md);
            // Screen offset from the image center, scaled back to the scene.
            let position = Point3::new(
                (xc as f64 - cx) * z / rig.focal_px,
                (yc as f64 - cy) * z / rig.focal_px,
                z,
            );
            displacements.push(md);
            points.push(PointRecord {
                position,
                color: views.center.get(xc, yc),
            });
        }
        RowOutput {
            y: yc,
            displacements,
            points,
        }
    }
}
