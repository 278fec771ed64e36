//! Seeded random scenario generation.
//!
//! # Sampling
//!
//! - pickup: the owning depot's location jittered by a uniform draw in
//!   `[-pickup_spread, pickup_spread]` on each axis (x first, then y);
//! - dropoff: a uniform point in `[0, area]²`, jittered the same way by
//!   `dropoff_spread`.
//!
//! Initial order *i* belongs to depot `i mod depot_count`; injected orders
//! pick their depot uniformly at random before sampling points.  All draws
//! come from one `SimRng`, so a seed fixes the whole order stream.

use drt_core::{DepotId, DrtError, DrtResult, OrderId, Point, SimRng, Tick};
use drt_fleet::{FleetBuilder, FleetState};

use crate::{InjectionSchedule, RandomInjector, ScenarioConfig};

// ── OrderGenerator ────────────────────────────────────────────────────────────

/// Draws random orders for the depots of one scenario.
pub struct OrderGenerator {
    rng:            SimRng,
    depots:         Vec<Point>,
    area_size:      f64,
    pickup_spread:  f64,
    dropoff_spread: f64,
}

impl OrderGenerator {
    /// Create a generator for `config`'s geometry drawing from `rng`.
    pub fn new(config: &ScenarioConfig, rng: SimRng) -> DrtResult<Self> {
        config.validate()?;
        Ok(Self {
            rng,
            depots:         config.depots.clone(),
            area_size:      config.area_size,
            pickup_spread:  config.pickup_spread,
            dropoff_spread: config.dropoff_spread,
        })
    }

    /// Uniform jitter around `center`, x then y.
    fn point_around(&mut self, center: Point, spread: f64) -> Point {
        let x = center.x + self.rng.uniform(-spread, spread);
        let y = center.y + self.rng.uniform(-spread, spread);
        Point::new(x, y)
    }

    /// Sample a `(pickup, dropoff)` pair for `depot`.
    pub fn sample_points(&mut self, depot: DepotId) -> DrtResult<(Point, Point)> {
        let origin = *self.depots.get(depot.index()).ok_or(DrtError::DepotOutOfRange {
            depot,
            depot_count: self.depots.len(),
        })?;
        let pickup = self.point_around(origin, self.pickup_spread);
        let center = Point::new(
            self.rng.uniform(0.0, self.area_size),
            self.rng.uniform(0.0, self.area_size),
        );
        let dropoff = self.point_around(center, self.dropoff_spread);
        Ok((pickup, dropoff))
    }

    /// Add `count` round-robin orders created at tick 0.
    pub fn seed_initial(&mut self, fleet: &mut FleetState, count: usize) -> DrtResult<Vec<OrderId>> {
        let depot_count = self.depots.len();
        (0..count)
            .map(|i| {
                let depot = depot_id(i % depot_count)?;
                let (pickup, dropoff) = self.sample_points(depot)?;
                fleet.add_order(depot, pickup, dropoff, Tick::ZERO)
            })
            .collect()
    }

    /// Add `count` orders at `tick`, each for a uniformly random depot.
    pub fn inject(&mut self, fleet: &mut FleetState, tick: Tick, count: usize) -> DrtResult<Vec<OrderId>> {
        let depot_count = self.depots.len();
        (0..count)
            .map(|_| {
                let depot = depot_id(self.rng.gen_range(0..depot_count))?;
                let (pickup, dropoff) = self.sample_points(depot)?;
                fleet.add_order(depot, pickup, dropoff, tick)
            })
            .collect()
    }
}

fn depot_id(i: usize) -> DrtResult<DepotId> {
    DepotId::try_from(i).map_err(|_| DrtError::InvalidConfiguration(format!("depot index {i} too large")))
}

// ── Fleet construction ───────────────────────────────────────────────────────

/// Build the depots and vehicles described by `config`, without orders.
pub fn build_fleet(config: &ScenarioConfig) -> DrtResult<FleetState> {
    config.validate()?;
    let builder = config
        .depots
        .iter()
        .fold(FleetBuilder::new(), |b, &loc| b.depot(loc, config.local_vehicles_per_depot));
    builder
        .shared_vehicles(config.shared_vehicle_count, config.shared_hub)
        .build()
}

// ── Scenario ─────────────────────────────────────────────────────────────────

/// A generated scenario: the initial fleet with its tick-0 orders, plus the
/// injector that will add the scheduled orders later.
pub struct Scenario {
    pub fleet:    FleetState,
    pub injector: RandomInjector,
}

impl Scenario {
    /// Generate the scenario for `config` from `seed`.
    ///
    /// Initial orders are drawn first; the injector continues the same
    /// random stream.
    pub fn generate(config: &ScenarioConfig, seed: u64) -> DrtResult<Self> {
        let mut fleet = build_fleet(config)?;
        let mut generator = OrderGenerator::new(config, SimRng::new(seed))?;
        generator.seed_initial(&mut fleet, config.initial_orders)?;

        tracing::debug!(
            depots = fleet.depot_count(),
            local_vehicles = fleet.local_vehicles().len(),
            shared_vehicles = fleet.shared_vehicles().len(),
            initial_orders = fleet.orders().len(),
            seed,
            "scenario generated"
        );

        let schedule = InjectionSchedule::from_injections(&config.injections);
        Ok(Self {
            fleet,
            injector: RandomInjector::new(schedule, generator),
        })
    }
}
