//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use drt_core::Tick;
use drt_fleet::FleetState;
use drt_sim::{Metrics, SimObserver, TickReport};

use crate::row::{AssignmentRow, SharedSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, assignments and shared
/// vehicle snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let tick = report.tick.0;
        let row = TickSummaryRow {
            tick,
            orders:        report.orders as u64,
            assigned:      report.assigned as u64,
            injected:      report.injected as u64,
            proposals:     report.proposals as u64,
            winners:       report.winners.len() as u64,
            tick_cost:     report.tick_cost,
            total_cost:    report.total_cost,
            double_booked: report.double_booked.len() as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);

        let rows: Vec<AssignmentRow> = report
            .winners
            .iter()
            .map(|w| AssignmentRow {
                tick,
                order:         w.order.0,
                depot:         w.depot.0,
                vehicle:       w.vehicle,
                marginal_cost: w.marginal_cost,
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_assignments(&rows);
            self.store_err(result);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &FleetState) {
        let rows: Vec<SharedSnapshotRow> = fleet
            .shared_vehicles()
            .iter()
            .map(|v| SharedSnapshotRow {
                tick:           tick.0,
                vehicle:        v.id.0,
                x:              v.position.x,
                y:              v.position.y,
                reserved_depot: v.reservation.map(|d| d.0),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_shared_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _metrics: &Metrics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
