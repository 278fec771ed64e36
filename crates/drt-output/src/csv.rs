//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `assignments.csv`
//! - `shared_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AssignmentRow, OutputResult, SharedSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries:   Writer<File>,
    assignments: Writer<File>,
    snapshots:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "orders", "assigned", "injected", "proposals", "winners",
            "tick_cost", "total_cost", "double_booked",
        ])?;

        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record(["tick", "order", "depot", "vehicle", "vehicle_kind", "marginal_cost"])?;

        let mut snapshots = Writer::from_path(dir.join("shared_snapshots.csv"))?;
        snapshots.write_record(["tick", "vehicle", "x", "y", "reserved_depot"])?;

        Ok(Self {
            summaries,
            assignments,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.orders.to_string(),
            row.assigned.to_string(),
            row.injected.to_string(),
            row.proposals.to_string(),
            row.winners.to_string(),
            row.tick_cost.to_string(),
            row.total_cost.to_string(),
            row.double_booked.to_string(),
        ])?;
        Ok(())
    }

    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.tick.to_string(),
                row.order.to_string(),
                row.depot.to_string(),
                row.vehicle.to_string(),
                row.vehicle.kind().to_string(),
                row.marginal_cost.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_shared_snapshots(&mut self, rows: &[SharedSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.vehicle.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                // Empty field when unreserved.
                row.reserved_depot.map(|d| d.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.assignments.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
