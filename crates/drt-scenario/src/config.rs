//! Static scenario configuration.

use serde::{Deserialize, Serialize};

use drt_core::{DrtError, DrtResult, Point, Tick};

/// `count` random orders appear at the start of `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injection {
    pub tick:  u64,
    pub count: usize,
}

/// Geometry, fleet sizes and order-arrival pattern of one scenario.
///
/// The default is the three-depot reference scenario: depots at (20, 20),
/// (80, 20) and (50, 80), one local vehicle each, four shared vehicles at
/// the (50, 50) hub, nine initial orders on a 100 × 100 area, and two extra
/// orders at ticks 3 and 6.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub depots:                   Vec<Point>,
    pub local_vehicles_per_depot: usize,
    pub shared_vehicle_count:     usize,
    pub shared_hub:               Point,
    pub initial_orders:           usize,
    /// Side length of the square service area.
    pub area_size:                f64,
    /// Pickups land within ± this distance of their depot on each axis.
    pub pickup_spread:            f64,
    /// Dropoffs land within ± this distance of a uniform random point.
    pub dropoff_spread:           f64,
    pub injections:               Vec<Injection>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            depots: vec![
                Point::new(20.0, 20.0),
                Point::new(80.0, 20.0),
                Point::new(50.0, 80.0),
            ],
            local_vehicles_per_depot: 1,
            shared_vehicle_count:     4,
            shared_hub:               Point::new(50.0, 50.0),
            initial_orders:           9,
            area_size:                100.0,
            pickup_spread:            12.0,
            dropoff_spread:           15.0,
            injections: vec![
                Injection { tick: 3, count: 2 },
                Injection { tick: 6, count: 2 },
            ],
        }
    }
}

impl ScenarioConfig {
    /// Reject configurations that cannot describe a run.
    ///
    /// Every count must be positive: depots, local vehicles per depot,
    /// shared vehicles, initial orders and each injection.
    pub fn validate(&self) -> DrtResult<()> {
        if self.depots.is_empty() {
            return Err(invalid("at least one depot is required"));
        }
        for (name, count) in [
            ("local_vehicles_per_depot", self.local_vehicles_per_depot),
            ("shared_vehicle_count", self.shared_vehicle_count),
            ("initial_orders", self.initial_orders),
        ] {
            if count == 0 {
                return Err(invalid(format!("{name} must be positive")));
            }
        }
        if let Some((i, p)) = self.depots.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(invalid(format!("depot {i} has a non-finite location {p}")));
        }
        if !self.shared_hub.is_finite() {
            return Err(invalid("shared hub location is not finite"));
        }
        if !(self.area_size.is_finite() && self.area_size > 0.0) {
            return Err(invalid(format!("area_size must be positive, got {}", self.area_size)));
        }
        for (name, spread) in [
            ("pickup_spread", self.pickup_spread),
            ("dropoff_spread", self.dropoff_spread),
        ] {
            if !(spread.is_finite() && spread >= 0.0) {
                return Err(invalid(format!("{name} must be non-negative, got {spread}")));
            }
        }
        if let Some(inj) = self.injections.iter().find(|i| i.count == 0) {
            return Err(invalid(format!("injection at tick {} has a zero count", inj.tick)));
        }
        Ok(())
    }

    /// Total orders ever created if every injection fires.
    pub fn total_orders(&self) -> usize {
        self.initial_orders + self.injections.iter().map(|i| i.count).sum::<usize>()
    }

    /// Injections scheduled at or past `end`; they never fire.
    pub fn injections_after(&self, end: Tick) -> impl Iterator<Item = &Injection> + '_ {
        self.injections.iter().filter(move |i| Tick(i.tick) >= end)
    }
}

fn invalid(msg: impl Into<String>) -> DrtError {
    DrtError::InvalidConfiguration(msg.into())
}
