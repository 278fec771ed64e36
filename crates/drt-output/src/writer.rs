//! The `OutputWriter` trait implemented by file backends.

use crate::{AssignmentRow, OutputResult, SharedSnapshotRow, TickSummaryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the assignments committed in one tick.
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    /// Write a snapshot of the shared-vehicle pool.
    fn write_shared_snapshots(&mut self, rows: &[SharedSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
