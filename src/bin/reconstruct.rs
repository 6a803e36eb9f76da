use anyhow::Context;
use depthmatch::config::reconstruct::{self, RuntimeConfig};
use depthmatch::image::bmp::{load_bmp, save_bmp};
use depthmatch::image::io::{save_grayscale_png, write_json_file};
use depthmatch::image::{RgbImage, TrinocularViews};
use depthmatch::sink::TextPointSink;
use depthmatch::{ReconReport, Reconstructor};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "reconstruct".to_string());
    let config = reconstruct::parse_cli(&program)?;

    let views = TrinocularViews::new(
        load_bmp(&config.input.center)?,
        load_bmp(&config.input.left)?,
        load_bmp(&config.input.right)?,
    )?;

    let reconstructor = Reconstructor::new(config.params)?;
    let mut sink = TextPointSink::create(&config.output.points)
        .with_context(|| format!("creating {}", config.output.points.display()))?;
    let (report, depth) = reconstructor.process_with_depth(&views, &mut sink)?;

    print_summary(&config, &report);

    if let Some(path) = &config.output.depth_map {
        let gray = depth.to_gray(reconstructor.disparity_range());
        save_depth_map(path, report.width, report.height, &gray)?;
        println!("Depth visualization written to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn print_summary(config: &RuntimeConfig, report: &ReconReport) {
    println!("Reconstruction summary");
    println!("  views: {}x{}", report.width, report.height);
    println!(
        "  displacement domain: [{}, {}]",
        report.disparity_min, report.disparity_max
    );
    println!("  cost: {:?}", config.params.cost);
    println!("  points: {}", report.points);
    println!("  latency_ms: {:.3}", report.latency_ms);
    println!("  points written to {}", config.output.points.display());
}

fn save_depth_map(path: &Path, width: usize, height: usize, gray: &[u8]) -> anyhow::Result<()> {
    let is_bmp = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bmp"));
    if is_bmp {
        let mut img = RgbImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = gray[y * width + x];
                img.set(x, y, [v, v, v]);
            }
        }
        save_bmp(&img, path)?;
    } else {
        save_grayscale_png(width, height, gray, path)?;
    }
    Ok(())
}
