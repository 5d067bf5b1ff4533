//! CSV output backend.
//!
//! Creates `trajectory.csv` in the configured output directory, one row per
//! vehicle per tick.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{OutputResult, TrajectoryRow};

/// File created by [`CsvWriter::new`].
pub const FILE_NAME: &str = "trajectory.csv";

/// Writes all vehicles' trajectories to a single CSV file.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `trajectory.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        // Headers are written here so an empty run still yields them.
        let mut rows = WriterBuilder::new()
            .has_headers(false)
            .from_path(dir.join(FILE_NAME))?;
        rows.write_record(TrajectoryRow::HEADERS)?;
        Ok(Self { rows, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_row(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        self.rows.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
