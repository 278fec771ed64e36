//! Plain-text progress reporter.

use std::io::Write;

use drt_sim::{Metrics, SimObserver, TickReport};

use crate::OutputError;

/// Prints one line per tick and a final summary line.
///
/// ```text
/// t=0: orders=9 assigned=9 total_cost=612.4
/// ...
/// SIM DONE: {total_cost: 731.0871, assignments: 13, reassignments: 0}
/// ```
///
/// Write failures are kept like [`SimOutputObserver`][crate::SimOutputObserver]
/// does; check [`take_error`][Self::take_error] after the run.
pub struct ConsoleReporter<W: Write> {
    out:        W,
    last_error: Option<OutputError>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> SimObserver for ConsoleReporter<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let result = writeln!(
            self.out,
            "t={}: orders={} assigned={} total_cost={:.1}",
            report.tick.0, report.orders, report.assigned, report.total_cost
        );
        self.store_err(result);
    }

    fn on_sim_end(&mut self, metrics: &Metrics) {
        // `{:?}` keeps the trailing `.0` on whole numbers.
        let result = writeln!(
            self.out,
            "SIM DONE: {{total_cost: {:?}, assignments: {}, reassignments: {}}}",
            metrics.total_cost, metrics.assignments, metrics.reassignments
        )
        .and_then(|()| self.out.flush());
        self.store_err(result);
    }
}
