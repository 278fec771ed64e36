//! Run-level metrics and the per-tick report handed to observers.

use drt_auction::{DoubleBooking, Proposal};
use drt_core::Tick;

/// Cumulative metrics of a run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Sum of every winning proposal's marginal cost so far.
    pub total_cost:    f64,
    /// Number of winning proposals so far.
    pub assignments:   usize,
    /// Always 0: assigned orders are terminal and never moved to another
    /// vehicle.  Kept so summaries carry the full metric set.
    pub reassignments: usize,
}

/// Everything that happened in one tick.
#[derive(Clone, Debug)]
pub struct TickReport {
    pub tick:          Tick,
    /// Orders in the fleet after injection (all time, not just pending).
    pub orders:        usize,
    /// Orders with an assigned vehicle after the auction.
    pub assigned:      usize,
    /// Orders injected at the start of this tick.
    pub injected:      usize,
    /// Proposals submitted by all depots.
    pub proposals:     usize,
    /// Winning proposals, in commit order.
    pub winners:       Vec<Proposal>,
    /// Sum of this tick's winning costs.
    pub tick_cost:     f64,
    /// Running total after this tick.
    pub total_cost:    f64,
    /// Shared vehicles won by more than one order this tick.
    pub double_booked: Vec<DoubleBooking>,
}
