//! `OrderSource`: how new orders enter a running simulation.

use std::collections::BTreeMap;

use drt_core::{DepotId, DrtResult, OrderId, Point, Tick};
use drt_fleet::FleetState;

use crate::{InjectionSchedule, OrderGenerator, OrderRecord};

/// Appends the orders that arrive at the start of a tick.
///
/// Called once per tick by the simulation driver, before any depot
/// proposes.  Returns the ids of the orders it created, in creation order.
pub trait OrderSource: Send {
    fn orders_for_tick(&mut self, tick: Tick, fleet: &mut FleetState) -> DrtResult<Vec<OrderId>>;
}

/// An [`OrderSource`] that never adds orders.
pub struct NoInjection;

impl OrderSource for NoInjection {
    fn orders_for_tick(&mut self, _tick: Tick, _fleet: &mut FleetState) -> DrtResult<Vec<OrderId>> {
        Ok(Vec::new())
    }
}

// ── RandomInjector ────────────────────────────────────────────────────────────

/// Generates the scheduled number of random orders at each injection tick.
pub struct RandomInjector {
    schedule:  InjectionSchedule,
    generator: OrderGenerator,
}

impl RandomInjector {
    pub fn new(schedule: InjectionSchedule, generator: OrderGenerator) -> Self {
        Self { schedule, generator }
    }

    pub fn schedule(&self) -> &InjectionSchedule {
        &self.schedule
    }
}

impl OrderSource for RandomInjector {
    fn orders_for_tick(&mut self, tick: Tick, fleet: &mut FleetState) -> DrtResult<Vec<OrderId>> {
        match self.schedule.count_at(tick) {
            0 => Ok(Vec::new()),
            n => self.generator.inject(fleet, tick, n),
        }
    }
}

// ── ReplayInjector ────────────────────────────────────────────────────────────

/// Replays a recorded order stream: each record is added at its `created`
/// tick, in file order within a tick.
#[derive(Default)]
pub struct ReplayInjector {
    pending: BTreeMap<Tick, Vec<OrderRecord>>,
}

impl ReplayInjector {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        let mut pending: BTreeMap<Tick, Vec<OrderRecord>> = BTreeMap::new();
        for r in records {
            pending.entry(Tick(r.created)).or_default().push(r);
        }
        Self { pending }
    }

    /// Records not yet replayed.
    pub fn remaining(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }
}

impl OrderSource for ReplayInjector {
    fn orders_for_tick(&mut self, tick: Tick, fleet: &mut FleetState) -> DrtResult<Vec<OrderId>> {
        let Some(records) = self.pending.remove(&tick) else {
            return Ok(Vec::new());
        };
        records
            .into_iter()
            .map(|r| {
                fleet.add_order(
                    DepotId(r.depot),
                    Point::new(r.pickup_x, r.pickup_y),
                    Point::new(r.dropoff_x, r.dropoff_y),
                    tick,
                )
            })
            .collect()
    }
}
