//! Proposals: non-binding bids submitted by depots each round.

use drt_core::{DepotId, OrderId};
use drt_fleet::{VehicleKind, VehicleRef};

/// A candidate binding of one unassigned order to one vehicle.
///
/// Proposals live for a single round: generated in the proposal phase,
/// consumed by the resolver, then dropped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Proposal {
    pub order:         OrderId,
    /// The depot that submitted the proposal; always the order's owner.
    pub depot:         DepotId,
    pub vehicle:       VehicleRef,
    pub marginal_cost: f64,
}

impl Proposal {
    #[inline]
    pub fn kind(&self) -> VehicleKind {
        self.vehicle.kind()
    }
}
