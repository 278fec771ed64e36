//! Depot and order records.

use drt_core::{DepotId, OrderId, Point, Tick};

use crate::VehicleRef;

/// A depot: fixed location, owner of zero or more local vehicles and of the
/// orders it is responsible for proposing.
#[derive(Clone, Debug, PartialEq)]
pub struct Depot {
    pub id:       DepotId,
    pub location: Point,
}

/// A pickup/dropoff request.
///
/// `assigned_vehicle` goes from `None` to `Some` at most once; the only
/// writer is [`FleetState::assign`][crate::FleetState::assign], which rejects
/// a second assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id:               OrderId,
    pub depot:            DepotId,
    pub pickup:           Point,
    pub dropoff:          Point,
    pub created:          Tick,
    pub(crate) assigned_vehicle: Option<VehicleRef>,
}

impl Order {
    #[inline]
    pub fn assigned_vehicle(&self) -> Option<VehicleRef> {
        self.assigned_vehicle
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_vehicle.is_some()
    }
}
