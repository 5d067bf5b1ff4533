//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TrajectoryRow};

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by [`TrajectoryObserver`][crate::TrajectoryObserver]
/// and retrieved with its `take_error` once the run returns.
pub trait OutputWriter {
    /// Write one vehicle's pose for one tick.
    fn write_row(&mut self, row: &TrajectoryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_row(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        (**self).write_row(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Writes every row to both writers, `A` first.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_row(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        self.0.write_row(row)?;
        self.1.write_row(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        // Both get a chance to flush; the first failure is reported.
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
