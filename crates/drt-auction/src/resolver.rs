//! Auction resolution: lowest marginal cost per order wins, winners are
//! committed to the fleet.

use drt_core::{DepotId, DrtError, DrtResult, OrderId, SharedVehicleId};
use drt_fleet::{FleetState, VehicleRef};

use crate::Proposal;

#[cfg(feature = "fx-hash")]
type OrderIndex = rustc_hash::FxHashMap<OrderId, usize>;
#[cfg(not(feature = "fx-hash"))]
type OrderIndex = std::collections::HashMap<OrderId, usize>;

#[cfg(feature = "fx-hash")]
type OrderSet = rustc_hash::FxHashSet<OrderId>;
#[cfg(not(feature = "fx-hash"))]
type OrderSet = std::collections::HashSet<OrderId>;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// A shared vehicle won by a second order in the same round.
///
/// The later commit overwrites the reservation; both orders keep the
/// vehicle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DoubleBooking {
    pub vehicle:        SharedVehicleId,
    /// The later of the two winning orders.
    pub order:          OrderId,
    /// Reservation holder after the overwrite.
    pub depot:          DepotId,
    /// Reservation holder before the overwrite.
    pub previous_depot: Option<DepotId>,
}

/// Result of one auction round.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuctionOutcome {
    /// One winning proposal per order that received any proposal, in the
    /// order each order first appeared among the proposals.
    pub winners:       Vec<Proposal>,
    /// Shared vehicles committed to more than one order this round.
    pub double_booked: Vec<DoubleBooking>,
}

impl AuctionOutcome {
    /// Sum of the winners' marginal costs.
    pub fn total_cost(&self) -> f64 {
        self.winners.iter().map(|w| w.marginal_cost).sum()
    }
}

// ── Phases ────────────────────────────────────────────────────────────────────

/// Check that `p` is a proposal its depot was allowed to make against the
/// pre-auction `fleet`.
pub fn validate_proposal(p: &Proposal, fleet: &FleetState) -> DrtResult<()> {
    let order = fleet.order(p.order)?;
    if order.depot != p.depot {
        return Err(DrtError::InvalidProposal(format!(
            "{} proposed {} owned by {}",
            p.depot, p.order, order.depot
        )));
    }
    if let Some(existing) = order.assigned_vehicle() {
        return Err(DrtError::OrderAlreadyAssigned {
            order:    p.order,
            existing: existing.to_string(),
        });
    }
    if !p.marginal_cost.is_finite() {
        return Err(DrtError::InvalidProposal(format!(
            "{} for {} has non-finite cost",
            p.vehicle, p.order
        )));
    }
    match p.vehicle {
        VehicleRef::Local(id) => {
            let vehicle = fleet.local_vehicle(id)?;
            if vehicle.depot != p.depot {
                return Err(DrtError::InvalidProposal(format!(
                    "{} proposed {} owned by {}",
                    p.depot, p.vehicle, vehicle.depot
                )));
            }
        }
        VehicleRef::Shared(id) => {
            if !fleet.shared_vehicle(id)?.is_available_to(p.depot) {
                return Err(DrtError::InvalidProposal(format!(
                    "{} proposed {} reserved for another depot",
                    p.depot, p.vehicle
                )));
            }
        }
    }
    Ok(())
}

/// Group proposals by order and keep the cheapest of each group.
///
/// A later proposal replaces the current best only if strictly cheaper, so
/// ties go to the proposal seen first.  Output order is the order in which
/// each order first appears in `proposals`.
pub fn select_winners(proposals: &[Proposal]) -> Vec<Proposal> {
    let mut slot = OrderIndex::default();
    slot.reserve(proposals.len());
    let mut winners: Vec<Proposal> = Vec::new();

    for p in proposals {
        match slot.get(&p.order) {
            None => {
                slot.insert(p.order, winners.len());
                winners.push(*p);
            }
            Some(&i) => {
                if p.marginal_cost < winners[i].marginal_cost {
                    winners[i] = *p;
                }
            }
        }
    }
    winners
}

/// Commit winners in order: assign each order, and reserve each winning
/// shared vehicle for the order's depot.
///
/// Vehicle-level exclusivity is not enforced across orders; a shared vehicle
/// winning twice is committed twice and reported in
/// [`AuctionOutcome::double_booked`].
pub fn commit_winners(winners: Vec<Proposal>, fleet: &mut FleetState) -> DrtResult<AuctionOutcome> {
    let mut reserved_this_round: Vec<SharedVehicleId> = Vec::new();
    let mut double_booked = Vec::new();

    for w in &winners {
        fleet.assign(w.order, w.vehicle)?;

        if let VehicleRef::Shared(vehicle) = w.vehicle {
            let depot = fleet.order(w.order)?.depot;
            let previous_depot = fleet.reserve(vehicle, depot)?;
            if reserved_this_round.contains(&vehicle) {
                tracing::warn!(
                    vehicle = vehicle.0,
                    order = w.order.0,
                    depot = depot.0,
                    previous_depot = previous_depot.map(|d| d.0),
                    "shared vehicle won by more than one order in one round"
                );
                double_booked.push(DoubleBooking { vehicle, order: w.order, depot, previous_depot });
            } else {
                reserved_this_round.push(vehicle);
            }
        }

        tracing::trace!(
            order = w.order.0,
            depot = w.depot.0,
            vehicle = %w.vehicle,
            cost = w.marginal_cost,
            "assigned"
        );
    }

    Ok(AuctionOutcome { winners, double_booked })
}

/// Validate, select and commit one round of proposals.
///
/// Besides the per-proposal checks of [`validate_proposal`], a depot may bid
/// at most once per order.  Nothing is committed if any check fails.
pub fn run_auction(proposals: &[Proposal], fleet: &mut FleetState) -> DrtResult<AuctionOutcome> {
    let mut proposed = OrderSet::default();
    for p in proposals {
        validate_proposal(p, fleet)?;
        // Only the owning depot passes validation, so a repeat is always
        // the same depot bidding twice.
        if !proposed.insert(p.order) {
            return Err(DrtError::InvalidProposal(format!(
                "{} proposed {} more than once",
                p.depot, p.order
            )));
        }
    }
    let winners = select_winners(proposals);
    tracing::debug!(
        proposals = proposals.len(),
        winners = winners.len(),
        "auction resolved"
    );
    commit_winners(winners, fleet)
}
