//! Plain data row types written by output backends.

use drt_fleet::VehicleRef;

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub orders:        u64,
    pub assigned:      u64,
    pub injected:      u64,
    pub proposals:     u64,
    pub winners:       u64,
    pub tick_cost:     f64,
    pub total_cost:    f64,
    pub double_booked: u64,
}

/// One committed order-to-vehicle assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignmentRow {
    pub tick:          u64,
    pub order:         u32,
    /// Depot that proposed the winning bid.
    pub depot:         u16,
    pub vehicle:       VehicleRef,
    pub marginal_cost: f64,
}

/// A shared vehicle's position and reservation at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedSnapshotRow {
    pub tick:           u64,
    pub vehicle:        u32,
    pub x:              f64,
    pub y:              f64,
    /// `None` while no depot holds the vehicle.
    pub reserved_depot: Option<u16>,
}
