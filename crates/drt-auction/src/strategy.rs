//! The `ProposalStrategy` trait (how a depot turns its pending orders into
//! bids) and the default greedy strategy.

use drt_core::{DepotId, DrtError, DrtResult};
use drt_fleet::{FleetState, Order, VehicleRef};

use crate::{AuctionContext, Proposal, marginal_cost};

/// Pluggable per-depot proposal generation.
///
/// `propose` is called once per depot per tick with a read-only
/// [`AuctionContext`].  It must only propose the depot's own unassigned
/// orders, at most one proposal per order, and only shared vehicles that
/// are unreserved or reserved for this depot.  [`run_auction`] rejects a
/// round that breaks any of these rules before committing anything.
///
/// [`run_auction`]: crate::run_auction
///
/// # Thread safety
///
/// The driver may call `propose` for all depots in parallel via Rayon, so
/// implementations must be `Send + Sync` and keep no per-call mutable state.
pub trait ProposalStrategy: Send + Sync + 'static {
    fn propose(&self, depot: DepotId, ctx: &AuctionContext<'_>) -> Vec<Proposal>;
}

// ── GreedyLocalFirst ──────────────────────────────────────────────────────────

/// Local vehicles first, then the cheapest eligible shared vehicle.
///
/// 1. Pair the depot's local vehicles with its unassigned orders strictly in
///    list order: first vehicle with first order, second with second, until
///    either runs out.  No cost-minimising matching.
/// 2. For each order left over, scan every shared vehicle available to the
///    depot and propose the one with the lowest marginal cost.  Ties go to
///    the first vehicle in pool order.
///
/// Every local vehicle is treated as idle each tick, so a depot's local
/// vehicles are re-proposed for its next pending orders every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyLocalFirst;

impl ProposalStrategy for GreedyLocalFirst {
    fn propose(&self, depot: DepotId, ctx: &AuctionContext<'_>) -> Vec<Proposal> {
        let fleet = ctx.fleet;
        let mut pending = fleet.unassigned_orders_of(depot);
        let mut proposals = Vec::new();

        for vehicle in fleet.local_vehicles_of(depot) {
            let Some(order) = pending.next() else { break };
            proposals.push(Proposal {
                order:         order.id,
                depot,
                vehicle:       VehicleRef::Local(vehicle.id),
                marginal_cost: marginal_cost(vehicle.position, order.pickup, order.dropoff),
            });
        }

        for order in pending {
            match cheapest_shared(fleet, depot, order) {
                Ok(p) => proposals.push(p),
                Err(e) => tracing::trace!(tick = ctx.tick.0, depot = depot.0, "{e}; order stays pending"),
            }
        }

        proposals
    }
}

/// Cheapest shared vehicle `depot` may use for `order`.
///
/// Strict `<` keeps the first of several equal-cost vehicles.
fn cheapest_shared(fleet: &FleetState, depot: DepotId, order: &Order) -> DrtResult<Proposal> {
    let mut best: Option<Proposal> = None;
    for vehicle in fleet.shared_available_to(depot) {
        let cost = marginal_cost(vehicle.position, order.pickup, order.dropoff);
        if best.is_none_or(|b| cost < b.marginal_cost) {
            best = Some(Proposal {
                order:         order.id,
                depot,
                vehicle:       VehicleRef::Shared(vehicle.id),
                marginal_cost: cost,
            });
        }
    }
    best.ok_or(DrtError::NoAvailableVehicle(order.id))
}
