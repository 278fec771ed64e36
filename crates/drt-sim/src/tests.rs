//! Integration tests for drt-sim.

use std::collections::{HashMap, HashSet};

use drt_auction::{GreedyLocalFirst, NoopStrategy};
use drt_core::{DepotId, OrderId, Point, SharedVehicleId, SimConfig, Tick};
use drt_fleet::{FleetBuilder, FleetState, VehicleRef};
use drt_scenario::{Injection, OrderRecord, ReplayInjector, Scenario, ScenarioConfig};

use crate::{Metrics, NoopObserver, SimBuilder, SimError, SimObserver, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64, seed: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        seed,
        num_threads:           Some(1),
        output_interval_ticks: 0,
    }
}

/// Records every observer callback.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    injected:  Vec<(Tick, Vec<OrderId>)>,
    reports:   Vec<TickReport>,
    snapshots: Vec<(Tick, Vec<Option<VehicleRef>>)>,
    end:       Option<Metrics>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_orders_injected(&mut self, tick: Tick, orders: &[OrderId]) {
        self.injected.push((tick, orders.to_vec()));
    }
    fn on_tick_end(&mut self, report: &TickReport) {
        self.reports.push(report.clone());
    }
    fn on_snapshot(&mut self, tick: Tick, fleet: &FleetState) {
        let assigned = fleet.orders().iter().map(|o| o.assigned_vehicle()).collect();
        self.snapshots.push((tick, assigned));
    }
    fn on_sim_end(&mut self, metrics: &Metrics) {
        self.end = Some(*metrics);
    }
}

/// Run the reference scenario with `seed` and every-tick snapshots.
fn run_reference(seed: u64) -> (Recorder, FleetState) {
    let mut config = test_config(10, seed);
    config.output_interval_ticks = 1;
    let scenario = Scenario::generate(&ScenarioConfig::default(), seed).unwrap();
    let mut sim = SimBuilder::new(config, scenario.fleet, GreedyLocalFirst)
        .order_source(scenario.injector)
        .build()
        .unwrap();
    let mut rec = Recorder::default();
    sim.run(&mut rec).unwrap();
    (rec, sim.fleet)
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let fleet = FleetBuilder::new().depot(Point::new(0.0, 0.0), 1).build().unwrap();
        let sim = SimBuilder::new(test_config(5, 0), fleet, GreedyLocalFirst).build().unwrap();
        assert_eq!(sim.current_tick, Tick::ZERO);
        assert_eq!(sim.metrics, Metrics::default());
    }

    #[test]
    fn zero_threads_rejected() {
        let fleet = FleetBuilder::new().depot(Point::new(0.0, 0.0), 1).build().unwrap();
        let mut config = test_config(5, 0);
        config.num_threads = Some(0);
        let result = SimBuilder::new(config, fleet, GreedyLocalFirst).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_horizon_rejected() {
        let scenario = Scenario::generate(&ScenarioConfig::default(), 1).unwrap();
        let result = SimBuilder::new(test_config(0, 1), scenario.fleet, GreedyLocalFirst).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Reference scenario ────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn thirteen_orders_all_assigned() {
        let (rec, fleet) = run_reference(7);
        assert_eq!(rec.reports.len(), 10);
        assert_eq!(fleet.orders().len(), 13);
        assert_eq!(fleet.assigned_count(), 13);

        let end = rec.end.unwrap();
        assert_eq!(end.assignments, 13);
        assert_eq!(end.reassignments, 0);

        let after_six: Vec<usize> = rec.reports.iter().map(|r| r.orders).collect();
        assert_eq!(after_six, [9, 9, 9, 11, 11, 11, 13, 13, 13, 13]);
    }

    #[test]
    fn first_tick_assigns_every_initial_order() {
        let (rec, _) = run_reference(3);
        let first = &rec.reports[0];
        // Three orders per depot: one goes to the local vehicle, two bid on
        // the shared pool.  All shared vehicles start at the hub, so every
        // shared bid names the first one.
        assert_eq!(first.proposals, 9);
        assert_eq!(first.winners.len(), 9);
        assert_eq!(first.assigned, 9);
        let local = first.winners.iter().filter(|w| !w.vehicle.is_shared()).count();
        assert_eq!(local, 3);
        assert!(first.winners.iter().filter(|w| w.vehicle.is_shared()).all(|w| {
            w.vehicle == VehicleRef::Shared(SharedVehicleId(0))
        }));
        assert_eq!(first.double_booked.len(), 5);
    }

    #[test]
    fn injections_fire_at_their_ticks() {
        let (rec, _) = run_reference(11);
        let ticks: Vec<u64> = rec.injected.iter().map(|(t, _)| t.0).collect();
        assert_eq!(ticks, [3, 6]);
        assert!(rec.injected.iter().all(|(_, ids)| ids.len() == 2));
        assert_eq!(rec.reports[3].injected, 2);
        assert_eq!(rec.reports[4].injected, 0);
    }

    #[test]
    fn assignment_is_terminal() {
        let (rec, _) = run_reference(5);
        assert_eq!(rec.snapshots.len(), 10);
        for pair in rec.snapshots.windows(2) {
            let (before, after) = (&pair[0].1, &pair[1].1);
            for (i, prev) in before.iter().enumerate() {
                if prev.is_some() {
                    assert_eq!(*prev, after[i], "order {i} changed vehicle");
                }
            }
        }
    }

    #[test]
    fn one_winner_per_proposed_order() {
        let (rec, _) = run_reference(9);
        for r in &rec.reports {
            let distinct: HashSet<OrderId> = r.winners.iter().map(|w| w.order).collect();
            assert_eq!(distinct.len(), r.winners.len());
            // GreedyLocalFirst bids on each pending order at most once.
            assert_eq!(r.winners.len(), r.proposals);
        }
    }

    #[test]
    fn total_cost_is_monotonic() {
        let (rec, _) = run_reference(13);
        let mut last = 0.0;
        for r in &rec.reports {
            assert!(r.total_cost >= last);
            assert!((r.total_cost - last - r.tick_cost).abs() < 1e-9);
            last = r.total_cost;
        }
        assert_eq!(rec.end.unwrap().total_cost, last);
    }

    #[test]
    fn reservation_blocks_other_depots_in_later_ticks() {
        let (rec, fleet) = run_reference(21);
        let mut holder: HashMap<SharedVehicleId, DepotId> = HashMap::new();
        for r in &rec.reports {
            for w in &r.winners {
                if let VehicleRef::Shared(v) = w.vehicle {
                    if let Some(&d) = holder.get(&v) {
                        assert_eq!(w.depot, d, "{v} reserved for {d} won by {}", w.depot);
                    }
                }
            }
            // Reservations committed this tick apply from the next one.
            for w in &r.winners {
                if let VehicleRef::Shared(v) = w.vehicle {
                    holder.insert(v, w.depot);
                }
            }
        }
        for (v, d) in holder {
            assert_eq!(fleet.shared_vehicle(v).unwrap().reservation, Some(d));
        }
    }

    #[test]
    fn same_seed_same_run() {
        let (a, _) = run_reference(42);
        let (b, _) = run_reference(42);
        assert_eq!(a.end, b.end);
        for (x, y) in a.reports.iter().zip(&b.reports) {
            assert_eq!(x.winners, y.winners);
        }
        let (c, _) = run_reference(43);
        assert_ne!(a.end.unwrap().total_cost, c.end.unwrap().total_cost);
    }

    #[test]
    fn late_injection_never_fires() {
        let cfg = ScenarioConfig {
            injections: vec![Injection { tick: 10, count: 3 }],
            ..Default::default()
        };
        let scenario = Scenario::generate(&cfg, 0).unwrap();
        let mut sim = SimBuilder::new(test_config(10, 0), scenario.fleet, GreedyLocalFirst)
            .order_source(scenario.injector)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.fleet.orders().len(), 9);
    }
}

// ── Strategies and sources ────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;

    #[test]
    fn noop_strategy_leaves_everything_pending() {
        let scenario = Scenario::generate(&ScenarioConfig::default(), 0).unwrap();
        let mut sim = SimBuilder::new(test_config(10, 0), scenario.fleet, NoopStrategy)
            .order_source(scenario.injector)
            .build()
            .unwrap();
        let metrics = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(metrics, Metrics::default());
        assert_eq!(sim.fleet.orders().len(), 13);
        assert_eq!(sim.fleet.pending_count(), 13);
    }

    #[test]
    fn observer_called_once_per_tick() {
        let (rec, _) = run_reference(0);
        let starts: Vec<u64> = rec.starts.iter().map(|t| t.0).collect();
        assert_eq!(starts, (0..10).collect::<Vec<_>>());
        let ends: Vec<u64> = rec.reports.iter().map(|r| r.tick.0).collect();
        assert_eq!(ends, starts);
    }

    #[test]
    fn snapshot_interval_respected() {
        let scenario = Scenario::generate(&ScenarioConfig::default(), 0).unwrap();
        let mut config = test_config(10, 0);
        config.output_interval_ticks = 3;
        let mut sim = SimBuilder::new(config, scenario.fleet, GreedyLocalFirst).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let ticks: Vec<u64> = rec.snapshots.iter().map(|(t, _)| t.0).collect();
        assert_eq!(ticks, [0, 3, 6, 9]);
    }

    #[test]
    fn run_ticks_then_run_resumes() {
        let scenario = Scenario::generate(&ScenarioConfig::default(), 0).unwrap();
        let mut sim = SimBuilder::new(test_config(10, 0), scenario.fleet, GreedyLocalFirst)
            .order_source(scenario.injector)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(4, &mut rec).unwrap();
        assert_eq!(sim.current_tick, Tick(4));
        assert!(rec.end.is_none());
        assert_eq!(sim.fleet.orders().len(), 11);

        sim.run(&mut rec).unwrap();
        assert_eq!(sim.current_tick, Tick(10));
        assert_eq!(rec.reports.len(), 10);
        assert_eq!(rec.end.unwrap().assignments, 13);
    }

    #[test]
    fn replayed_orders_enter_at_their_tick() {
        let fleet = FleetBuilder::new()
            .depot(Point::new(0.0, 0.0), 1)
            .depot(Point::new(10.0, 0.0), 1)
            .build()
            .unwrap();
        let rec = |depot, created| OrderRecord {
            depot,
            pickup_x:  1.0,
            pickup_y:  1.0,
            dropoff_x: 4.0,
            dropoff_y: 5.0,
            created,
        };
        let replay = ReplayInjector::new(vec![rec(0, 0), rec(1, 2), rec(0, 2)]);
        let mut sim = SimBuilder::new(test_config(4, 0), fleet, GreedyLocalFirst)
            .order_source(replay)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        let metrics = sim.run(&mut obs).unwrap();

        let orders: Vec<usize> = obs.reports.iter().map(|r| r.orders).collect();
        assert_eq!(orders, [1, 1, 3, 3]);
        assert_eq!(metrics.assignments, 3);
        assert_eq!(sim.fleet.order(OrderId(2)).unwrap().created, Tick(2));
    }

    #[test]
    fn orders_without_any_vehicle_stay_pending() {
        // Depot 1 owns no local vehicle and the only shared vehicle is
        // taken by depot 0 in the first round.
        let mut fleet = FleetBuilder::new()
            .depot(Point::new(0.0, 0.0), 0)
            .depot(Point::new(100.0, 0.0), 0)
            .shared_vehicle(Point::new(1.0, 1.0))
            .build()
            .unwrap();
        fleet.add_order(DepotId(0), Point::new(2.0, 2.0), Point::new(3.0, 3.0), Tick::ZERO).unwrap();
        let replay = ReplayInjector::new(vec![OrderRecord {
            depot:     1,
            pickup_x:  90.0,
            pickup_y:  5.0,
            dropoff_x: 80.0,
            dropoff_y: 5.0,
            created:   1,
        }]);
        let mut sim = SimBuilder::new(test_config(5, 0), fleet, GreedyLocalFirst)
            .order_source(replay)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let metrics = sim.run(&mut rec).unwrap();

        assert_eq!(metrics.assignments, 1);
        assert!(rec.reports[1..].iter().all(|r| r.proposals == 0 && r.winners.is_empty()));
        assert_eq!(sim.fleet.pending_count(), 1);
        assert!(!sim.fleet.order(OrderId(1)).unwrap().is_assigned());
    }
}

// ── Feature builds ────────────────────────────────────────────────────────────

#[cfg(all(test, any(feature = "parallel", feature = "fx-hash")))]
mod feature_parity_tests {
    use drt_auction::{AuctionContext, ProposalStrategy, run_auction};
    use drt_scenario::OrderSource;

    use super::*;

    /// Replays the reference run with a plain depot-order loop and checks
    /// that every tick commits the same winners in the same order.
    #[test]
    fn winners_match_sequential_depot_loop() {
        for seed in [0, 42, 925] {
            let (rec, _) = run_reference(seed);
            let mut scenario = Scenario::generate(&ScenarioConfig::default(), seed).unwrap();

            for report in &rec.reports {
                let tick = report.tick;
                scenario.injector.orders_for_tick(tick, &mut scenario.fleet).unwrap();
                let ctx = AuctionContext::new(tick, &scenario.fleet);
                let proposals: Vec<_> = scenario
                    .fleet
                    .depot_ids()
                    .flat_map(|d| GreedyLocalFirst.propose(d, &ctx))
                    .collect();
                assert_eq!(proposals.len(), report.proposals);

                let outcome = run_auction(&proposals, &mut scenario.fleet).unwrap();
                assert_eq!(outcome.winners, report.winners, "seed {seed}, {tick}");
            }
        }
    }
}
