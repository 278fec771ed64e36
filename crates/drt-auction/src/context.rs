//! Read-only round state passed to every proposal strategy.

use drt_core::Tick;
use drt_fleet::FleetState;

/// A read-only snapshot of the simulation passed to
/// [`ProposalStrategy::propose`][crate::ProposalStrategy::propose].
///
/// Built once per tick by the driver and shared by all depots.  The driver
/// never allows mutable access to the fleet while a context is live, so every
/// depot sees the same pre-auction state.
pub struct AuctionContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Depots, vehicles (with reservations) and orders as of tick entry.
    pub fleet: &'a FleetState,
}

impl<'a> AuctionContext<'a> {
    #[inline]
    pub fn new(tick: Tick, fleet: &'a FleetState) -> Self {
        Self { tick, fleet }
    }
}
