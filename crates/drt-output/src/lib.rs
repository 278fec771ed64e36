//! `drt-output`: reporting sinks for drt simulation runs.
//!
//! | Type                   | Output                                                       |
//! |------------------------|--------------------------------------------------------------|
//! | [`ConsoleReporter`]    | one `t=…` line per tick and a `SIM DONE` line, to any `Write`|
//! | [`CsvWriter`]          | `tick_summaries.csv`, `assignments.csv`, `shared_snapshots.csv` |
//!
//! File backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `drt_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use drt_output::{ConsoleReporter, CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use console::ConsoleReporter;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AssignmentRow, SharedSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
