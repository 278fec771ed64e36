//! Vehicle records and the local/shared sum type used by proposals.

use std::fmt;

use drt_core::{DepotId, LocalVehicleId, Point, SharedVehicleId};

/// Identity of any vehicle a proposal can name.
///
/// The variant carries the vehicle class, so the resolver never has to look
/// a vehicle up to know whether a win must also reserve it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum VehicleRef {
    /// A vehicle owned by one depot.
    Local(LocalVehicleId),
    /// A vehicle from the pool every depot may bid for.
    Shared(SharedVehicleId),
}

impl VehicleRef {
    #[inline]
    pub fn kind(self) -> VehicleKind {
        match self {
            VehicleRef::Local(_)  => VehicleKind::Local,
            VehicleRef::Shared(_) => VehicleKind::Shared,
        }
    }

    #[inline]
    pub fn is_shared(self) -> bool {
        matches!(self, VehicleRef::Shared(_))
    }
}

impl fmt::Display for VehicleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleRef::Local(id)  => write!(f, "L{}", id.0),
            VehicleRef::Shared(id) => write!(f, "S{}", id.0),
        }
    }
}

/// Vehicle class without the identity, for reporting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum VehicleKind {
    Local,
    Shared,
}

impl VehicleKind {
    /// Lower-case label, used as a CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Local  => "local",
            VehicleKind::Shared => "shared",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle owned by exactly one depot.  Never transferred.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalVehicle {
    pub id:       LocalVehicleId,
    pub depot:    DepotId,
    pub position: Point,
}

/// A vehicle from the shared pool.
///
/// `reservation` is the depot that last won this vehicle.  Nothing clears
/// it, so once set the vehicle is out of reach for every other depot for the
/// rest of the run.
#[derive(Clone, Debug, PartialEq)]
pub struct SharedVehicle {
    pub id:          SharedVehicleId,
    pub position:    Point,
    pub reservation: Option<DepotId>,
}

impl SharedVehicle {
    /// `true` if `depot` may propose this vehicle: it is unreserved or
    /// already reserved for `depot`.
    #[inline]
    pub fn is_available_to(&self, depot: DepotId) -> bool {
        self.reservation.is_none_or(|owner| owner == depot)
    }
}
