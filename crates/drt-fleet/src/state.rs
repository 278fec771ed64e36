//! `FleetState`: every depot, vehicle and order of one simulation run.
//!
//! Each collection is a plain `Vec` indexed by its typed id, so lookups are
//! O(1) and iteration order is creation order.  Creation order matters: the
//! proposal generator pairs vehicles and orders first-come-first-served, and
//! that order must be reproducible.

use drt_core::{DepotId, DrtError, DrtResult, LocalVehicleId, OrderId, Point, SharedVehicleId, Tick};

use crate::{Depot, LocalVehicle, Order, SharedVehicle, VehicleRef};

/// The explicit simulation state.  Owned by the driver; read-only during
/// proposal generation, written only by the auction resolver and by order
/// injection.
#[derive(Clone, Debug, Default)]
pub struct FleetState {
    depots:          Vec<Depot>,
    local_vehicles:  Vec<LocalVehicle>,
    shared_vehicles: Vec<SharedVehicle>,
    orders:          Vec<Order>,
}

impl FleetState {
    pub(crate) fn from_parts(
        depots:          Vec<Depot>,
        local_vehicles:  Vec<LocalVehicle>,
        shared_vehicles: Vec<SharedVehicle>,
    ) -> Self {
        Self { depots, local_vehicles, shared_vehicles, orders: Vec::new() }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    pub fn depot_count(&self) -> usize {
        self.depots.len()
    }

    /// Iterate depot ids in index order.
    pub fn depot_ids(&self) -> impl Iterator<Item = DepotId> + '_ {
        self.depots.iter().map(|d| d.id)
    }

    pub fn depot(&self, id: DepotId) -> DrtResult<&Depot> {
        self.depots.get(id.index()).ok_or(DrtError::DepotOutOfRange {
            depot:       id,
            depot_count: self.depots.len(),
        })
    }

    pub fn local_vehicles(&self) -> &[LocalVehicle] {
        &self.local_vehicles
    }

    pub fn shared_vehicles(&self) -> &[SharedVehicle] {
        &self.shared_vehicles
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> DrtResult<&Order> {
        self.orders.get(id.index()).ok_or(DrtError::OrderNotFound(id))
    }

    pub fn shared_vehicle(&self, id: SharedVehicleId) -> DrtResult<&SharedVehicle> {
        self.shared_vehicles
            .get(id.index())
            .ok_or_else(|| DrtError::VehicleNotFound(VehicleRef::Shared(id).to_string()))
    }

    /// Local vehicles owned by `depot`, in pool order.
    ///
    /// Every local vehicle is treated as idle; there is no busy state.
    pub fn local_vehicles_of(&self, depot: DepotId) -> impl Iterator<Item = &LocalVehicle> + '_ {
        self.local_vehicles.iter().filter(move |v| v.depot == depot)
    }

    /// Orders of `depot` that have no vehicle yet, in creation order.
    pub fn unassigned_orders_of(&self, depot: DepotId) -> impl Iterator<Item = &Order> + '_ {
        self.orders
            .iter()
            .filter(move |o| o.depot == depot && !o.is_assigned())
    }

    /// Shared vehicles `depot` may propose: unreserved or reserved for it.
    pub fn shared_available_to(&self, depot: DepotId) -> impl Iterator<Item = &SharedVehicle> + '_ {
        self.shared_vehicles
            .iter()
            .filter(move |v| v.is_available_to(depot))
    }

    /// Current position of any vehicle.
    pub fn position_of(&self, vehicle: VehicleRef) -> DrtResult<Point> {
        let pos = match vehicle {
            VehicleRef::Local(id)  => self.local_vehicles.get(id.index()).map(|v| v.position),
            VehicleRef::Shared(id) => self.shared_vehicles.get(id.index()).map(|v| v.position),
        };
        pos.ok_or_else(|| DrtError::VehicleNotFound(vehicle.to_string()))
    }

    /// Number of orders with a vehicle.
    pub fn assigned_count(&self) -> usize {
        self.orders.iter().filter(|o| o.is_assigned()).count()
    }

    /// Number of orders still waiting for a vehicle.
    pub fn pending_count(&self) -> usize {
        self.orders.len() - self.assigned_count()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a new unassigned order and return its id.
    ///
    /// Ids are sequential in creation order.
    pub fn add_order(
        &mut self,
        depot:   DepotId,
        pickup:  Point,
        dropoff: Point,
        created: Tick,
    ) -> DrtResult<OrderId> {
        self.depot(depot)?;
        if !pickup.is_finite() || !dropoff.is_finite() {
            return Err(DrtError::InvalidConfiguration(format!(
                "order for {depot} has a non-finite point: pickup {pickup}, dropoff {dropoff}"
            )));
        }
        let id = OrderId::try_from(self.orders.len()).map_err(|_| {
            DrtError::InvalidConfiguration("order id space exhausted".into())
        })?;
        self.orders.push(Order {
            id,
            depot,
            pickup,
            dropoff,
            created,
            assigned_vehicle: None,
        });
        Ok(id)
    }

    /// Bind `order` to `vehicle`.
    ///
    /// Fails with [`DrtError::OrderAlreadyAssigned`] if the order already has
    /// a vehicle: assignment is terminal.
    pub fn assign(&mut self, order: OrderId, vehicle: VehicleRef) -> DrtResult<()> {
        self.position_of(vehicle)?;
        let record = self
            .orders
            .get_mut(order.index())
            .ok_or(DrtError::OrderNotFound(order))?;
        if let Some(existing) = record.assigned_vehicle {
            return Err(DrtError::OrderAlreadyAssigned {
                order,
                existing: existing.to_string(),
            });
        }
        record.assigned_vehicle = Some(vehicle);
        Ok(())
    }

    /// Set the reservation of a shared vehicle to `depot`, returning the
    /// previous holder.
    ///
    /// Overwrites whatever was there; callers decide whether an overwrite is
    /// a conflict.
    pub fn reserve(&mut self, vehicle: SharedVehicleId, depot: DepotId) -> DrtResult<Option<DepotId>> {
        self.depot(depot)?;
        let record = self
            .shared_vehicles
            .get_mut(vehicle.index())
            .ok_or_else(|| DrtError::VehicleNotFound(VehicleRef::Shared(vehicle).to_string()))?;
        Ok(record.reservation.replace(depot))
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check cross-references: every local vehicle and order names an
    /// existing depot, every reservation names an existing depot, and every
    /// record's id matches its index.
    pub fn validate(&self) -> DrtResult<()> {
        let depot_count = self.depots.len();
        let check = |depot: DepotId| {
            if depot.index() < depot_count {
                Ok(())
            } else {
                Err(DrtError::DepotOutOfRange { depot, depot_count })
            }
        };

        for (i, d) in self.depots.iter().enumerate() {
            if d.id.index() != i {
                return Err(id_mismatch("depot", i, d.id.index()));
            }
            if !d.location.is_finite() {
                return Err(DrtError::InvalidConfiguration(format!(
                    "{} has a non-finite location",
                    d.id
                )));
            }
        }
        for (i, v) in self.local_vehicles.iter().enumerate() {
            if v.id.index() != i {
                return Err(id_mismatch("local vehicle", i, v.id.index()));
            }
            check(v.depot)?;
        }
        for (i, v) in self.shared_vehicles.iter().enumerate() {
            if v.id.index() != i {
                return Err(id_mismatch("shared vehicle", i, v.id.index()));
            }
            if let Some(owner) = v.reservation {
                check(owner)?;
            }
        }
        for (i, o) in self.orders.iter().enumerate() {
            if o.id.index() != i {
                return Err(id_mismatch("order", i, o.id.index()));
            }
            check(o.depot)?;
        }
        Ok(())
    }

    /// Local vehicle lookup by id.
    pub fn local_vehicle(&self, id: LocalVehicleId) -> DrtResult<&LocalVehicle> {
        self.local_vehicles
            .get(id.index())
            .ok_or_else(|| DrtError::VehicleNotFound(VehicleRef::Local(id).to_string()))
    }
}

fn id_mismatch(what: &str, index: usize, id: usize) -> DrtError {
    DrtError::InvalidConfiguration(format!("{what} at index {index} carries id {id}"))
}
