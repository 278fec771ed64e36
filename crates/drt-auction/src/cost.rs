//! Marginal cost of serving one order with one vehicle.

use drt_core::Point;

/// Distance driven to serve an order from `vehicle`'s current position:
/// vehicle → pickup, then pickup → dropoff.
///
/// Ignores the return leg and any work already queued on the vehicle.
#[inline]
pub fn marginal_cost(vehicle: Point, pickup: Point, dropoff: Point) -> f64 {
    vehicle.distance(pickup) + pickup.distance(dropoff)
}
