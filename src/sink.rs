//! Sequential point-cloud sinks.

use crate::error::Result;
use crate::types::PointRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sequential consumer of reconstructed points.
///
/// `begin` is called once before the first record with the total expected
/// record count; records then arrive in row-major pixel order.
pub trait PointSink {
    fn begin(&mut self, expected: usize) -> Result<()>;
    fn push(&mut self, record: &PointRecord) -> Result<()>;
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Text sink producing the `points.dat` layout: the expected record count
/// on the first line, then one `X\tY\tZ\tR\tG\tB` record per line with
/// six-decimal coordinates and 0-255 integer colors.
pub struct TextPointSink<W: Write> {
    out: W,
}

impl TextPointSink<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TextPointSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PointSink for TextPointSink<W> {
    fn begin(&mut self, expected: usize) -> Result<()> {
        writeln!(self.out, "{expected}")?;
        Ok(())
    }

    fn push(&mut self, record: &PointRecord) -> Result<()> {
        writeln!(
            self.out,
            "{:.6}\t{:.6}\t{:.6}\t{}\t{}\t{}",
            record.position.x,
            record.position.y,
            record.position.z,
            record.color[0],
            record.color[1],
            record.color[2]
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests and quick experiments.
#[derive(Debug, Default)]
pub struct MemoryPointSink {
    pub expected: usize,
    pub points: Vec<PointRecord>,
}

impl PointSink for MemoryPointSink {
    fn begin(&mut self, expected: usize) -> Result<()> {
        self.expected = expected;
        self.points.reserve(expected);
        Ok(())
    }

    fn push(&mut self, record: &PointRecord) -> Result<()> {
        self.points.push(*record);
        Ok(())
    }
}
