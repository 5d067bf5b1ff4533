//! `uav-output`: trajectory writers for the UAV flight simulator.
//!
//! Two backends are provided:
//!
//! | Backend        | Files created                                  |
//! |----------------|------------------------------------------------|
//! | [`TextWriter`] | `UAV0.txt`, `UAV1.txt`, … (one per vehicle)    |
//! | [`CsvWriter`]  | `trajectory.csv`                               |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`TrajectoryObserver`], which implements `uav_sim::SimObserver`.  A pair
//! `(A, B)` of writers is itself a writer, which is how both files are
//! produced in one run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use uav_output::{TextWriter, TrajectoryObserver};
//!
//! let writer = TextWriter::new(Path::new("./output"), config.uav_count)?;
//! let mut obs = TrajectoryObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::TrajectoryRow;
pub use text::TextWriter;
pub use writer::OutputWriter;
