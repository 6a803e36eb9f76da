mod common;

use common::synthetic_image::shifted_triple;
use depthmatch::cost::MatchWindow;
use depthmatch::image::{RgbImage, TrinocularViews};
use depthmatch::sampler::RigParams;
use depthmatch::sink::MemoryPointSink;
use depthmatch::{BorderPolicy, ReconstructError, ReconstructParams, Reconstructor};

#[test]
fn skip_margin_reduces_the_record_count() {
    let (width, height) = (32usize, 24usize);
    let views = shifted_triple(width, height, 8);
    let params = ReconstructParams {
        window: MatchWindow {
            half_width: 2,
            half_height: 3,
        },
        border: BorderPolicy::SkipMargin,
        ..Default::default()
    };
    let reconstructor = Reconstructor::new(params).unwrap();

    let mut sink = MemoryPointSink::default();
    let report = reconstructor.process(&views, &mut sink).unwrap();
    let expected = (width - 4) * (height - 6);
    assert_eq!(sink.expected, expected);
    assert_eq!(report.points, expected);
}

#[test]
fn skipped_margin_pixels_stay_unset_in_the_depth_map() {
    let (width, height) = (24usize, 16usize);
    let views = shifted_triple(width, height, 8);
    let params = ReconstructParams {
        border: BorderPolicy::SkipMargin,
        ..Default::default()
    };
    let reconstructor = Reconstructor::new(params).unwrap();

    let mut sink = MemoryPointSink::default();
    let (_, depth) = reconstructor.process_with_depth(&views, &mut sink).unwrap();
    assert!(depth.get(0, 0).is_nan());
    assert!(depth.get(width - 1, height - 1).is_nan());
    assert!(depth.get(width / 2, height / 2).is_finite());
}

#[test]
fn full_frame_corner_pixels_produce_records() {
    // Window larger than the corner margin exercises the clipped path.
    let (width, height) = (16usize, 12usize);
    let views = shifted_triple(width, height, 7);
    let reconstructor = Reconstructor::new(ReconstructParams::default()).unwrap();

    let mut sink = MemoryPointSink::default();
    let (report, depth) = reconstructor.process_with_depth(&views, &mut sink).unwrap();
    assert_eq!(report.points, width * height);
    assert!(depth.get(0, 0).is_finite());
    assert!(depth.get(width - 1, height - 1).is_finite());
    for record in &sink.points {
        assert!(record.position.z.is_finite());
    }
}

#[test]
fn empty_displacement_domain_fails_before_the_pixel_loop() {
    let params = ReconstructParams {
        rig: RigParams {
            zmin: 5.0,
            zmax: 5.0,
            ..RigParams::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        Reconstructor::new(params),
        Err(ReconstructError::Config(_))
    ));
}

#[test]
fn mismatched_views_are_rejected_up_front() {
    let err = TrinocularViews::new(
        RgbImage::new(16, 16),
        RgbImage::new(16, 17),
        RgbImage::new(16, 16),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ReconstructError::DimensionMismatch { label: "left", .. }
    ));
}
