use depthmatch::image::{RgbImage, TrinocularViews};
use depthmatch::sink::MemoryPointSink;
use depthmatch::{ReconstructParams, Reconstructor};

fn main() {
    // Demo stub: reconstructs a synthetic trinocular triple with a uniform
    // 10-pixel shift and reports how well the shift is recovered.
    let (w, h) = (96usize, 64usize);
    let shift = 10i32;

    let mut center = RgbImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = ((x * 41 + y * 23) % 253) as u8;
            center.set(x, y, [v, v.wrapping_add(60), v.wrapping_mul(3)]);
        }
    }
    let mut left = RgbImage::new(w, h);
    let mut right = RgbImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let xl = (x as i32 - shift).clamp(0, w as i32 - 1) as usize;
            let xr = (x as i32 + shift).clamp(0, w as i32 - 1) as usize;
            left.set(x, y, center.get(xl, y));
            right.set(x, y, center.get(xr, y));
        }
    }

    let views = TrinocularViews::new(center, left, right).expect("dimensions match");
    let reconstructor =
        Reconstructor::new(ReconstructParams::default()).expect("default params are valid");
    let mut sink = MemoryPointSink::default();
    let report = reconstructor
        .process(&views, &mut sink)
        .expect("memory sink cannot fail");

    println!(
        "points={} domain=[{}, {}] latency_ms={:.3}",
        report.points, report.disparity_min, report.disparity_max, report.latency_ms
    );
}
