//! Per-vehicle text backend.
//!
//! Creates `UAV<i>.txt` for every vehicle up front.  Each row becomes one
//! line `time x y heading_deg`, every field printed with two decimals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TrajectoryRow};

/// Writes each vehicle's trajectory to its own text file.
pub struct TextWriter {
    files:    Vec<BufWriter<File>>,
    finished: bool,
}

impl TextWriter {
    /// Create (or truncate) `UAV0.txt` … `UAV{uav_count - 1}.txt` in `dir`.
    pub fn new(dir: &Path, uav_count: usize) -> OutputResult<Self> {
        let files = (0..uav_count)
            .map(|i| Ok(BufWriter::new(File::create(dir.join(file_name(i)))?)))
            .collect::<OutputResult<Vec<_>>>()?;
        Ok(Self { files, finished: false })
    }
}

/// File name for vehicle `index`.
pub fn file_name(index: usize) -> String {
    format!("UAV{index}.txt")
}

impl OutputWriter for TextWriter {
    fn write_row(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        let count = self.files.len();
        let file = self
            .files
            .get_mut(row.uav_id as usize)
            .ok_or(OutputError::UnknownVehicle { uav: row.uav_id, count })?;
        writeln!(file, "{:.2} {:.2} {:.2} {:.2}", row.time, row.x, row.y, row.heading_deg)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        for file in &mut self.files {
            file.flush()?;
        }
        Ok(())
    }
}
