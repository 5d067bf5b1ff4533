//! `TrajectoryObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use uav_core::Tick;
use uav_sim::{SimObserver, TrajectoryRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TrajectoryRow};

/// A [`SimObserver`] that writes every trajectory record to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TrajectoryObserver<W> {
    fn on_record(&mut self, record: &TrajectoryRecord) {
        let result = self.writer.write_row(&TrajectoryRow::from(record));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
