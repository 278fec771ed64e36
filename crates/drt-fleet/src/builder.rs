//! Fluent builder for constructing a `FleetState` in one step.
//!
//! # Usage
//!
//! ```rust
//! use drt_core::{DepotId, Point, Tick};
//! use drt_fleet::FleetBuilder;
//!
//! let mut fleet = FleetBuilder::new()
//!     .depot(Point::new(20.0, 20.0), 1)
//!     .depot(Point::new(80.0, 20.0), 1)
//!     .shared_vehicles(4, Point::new(50.0, 50.0))
//!     .build()
//!     .unwrap();
//!
//! fleet.add_order(DepotId(1), Point::new(75.0, 25.0), Point::new(10.0, 90.0), Tick(0)).unwrap();
//! assert_eq!(fleet.local_vehicles().len(), 2);
//! assert_eq!(fleet.orders().len(), 1);
//! ```

use drt_core::{DepotId, DrtError, DrtResult, LocalVehicleId, Point, SharedVehicleId};

use crate::{Depot, FleetState, LocalVehicle, SharedVehicle};

/// Fluent builder for [`FleetState`].
///
/// Local vehicles start at their depot's location.  Shared vehicles start
/// wherever they are placed, unreserved.
#[derive(Default)]
pub struct FleetBuilder {
    depots:          Vec<(Point, usize)>,
    shared_vehicles: Vec<Point>,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a depot at `location` owning `local_vehicles` vehicles.
    ///
    /// Depot ids follow call order.
    pub fn depot(mut self, location: Point, local_vehicles: usize) -> Self {
        self.depots.push((location, local_vehicles));
        self
    }

    /// Add `count` shared vehicles, all starting at `position`.
    pub fn shared_vehicles(mut self, count: usize, position: Point) -> Self {
        self.shared_vehicles
            .extend(std::iter::repeat_n(position, count));
        self
    }

    /// Add one shared vehicle at `position`.
    pub fn shared_vehicle(mut self, position: Point) -> Self {
        self.shared_vehicles.push(position);
        self
    }

    /// Assign ids, place local vehicles, and validate.
    ///
    /// Local vehicle ids are grouped by depot: all of depot 0's vehicles
    /// first, then depot 1's, and so on.
    pub fn build(self) -> DrtResult<FleetState> {
        let mut depots = Vec::with_capacity(self.depots.len());
        let mut local_vehicles = Vec::new();

        for (i, &(location, count)) in self.depots.iter().enumerate() {
            let id = DepotId::try_from(i).map_err(|_| {
                DrtError::InvalidConfiguration(format!("too many depots: {}", self.depots.len()))
            })?;
            depots.push(Depot { id, location });
            for _ in 0..count {
                let vid = LocalVehicleId::try_from(local_vehicles.len()).map_err(|_| {
                    DrtError::InvalidConfiguration("local vehicle id space exhausted".into())
                })?;
                local_vehicles.push(LocalVehicle { id: vid, depot: id, position: location });
            }
        }

        let shared_vehicles = self
            .shared_vehicles
            .into_iter()
            .enumerate()
            .map(|(i, position)| {
                let id = SharedVehicleId::try_from(i).map_err(|_| {
                    DrtError::InvalidConfiguration("shared vehicle id space exhausted".into())
                })?;
                if !position.is_finite() {
                    return Err(DrtError::InvalidConfiguration(format!(
                        "shared vehicle {i} has a non-finite position"
                    )));
                }
                Ok(SharedVehicle { id, position, reservation: None })
            })
            .collect::<DrtResult<Vec<_>>>()?;

        let fleet = FleetState::from_parts(depots, local_vehicles, shared_vehicles);
        fleet.validate()?;
        Ok(fleet)
    }
}
