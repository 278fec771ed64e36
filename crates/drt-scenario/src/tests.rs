//! Unit tests for drt-scenario.

use std::io::Cursor;

use drt_core::{DepotId, DrtError, Point, SimRng, Tick};

use crate::{
    Injection, InjectionSchedule, NoInjection, OrderGenerator, OrderSource, ReplayInjector,
    Scenario, ScenarioConfig, build_fleet, load_orders_reader,
};

// ── ScenarioConfig ────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_is_reference_scenario() {
        let cfg = ScenarioConfig::default();
        assert_eq!(cfg.depots.len(), 3);
        assert_eq!(cfg.shared_vehicle_count, 4);
        assert_eq!(cfg.initial_orders, 9);
        assert_eq!(cfg.total_orders(), 13);
        cfg.validate().unwrap();
    }

    #[test]
    fn no_depots_rejected() {
        let cfg = ScenarioConfig { depots: vec![], ..Default::default() };
        assert!(matches!(cfg.validate(), Err(DrtError::InvalidConfiguration(_))));
    }

    #[test]
    fn non_positive_area_rejected() {
        let cfg = ScenarioConfig { area_size: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = ScenarioConfig { area_size: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_spread_rejected() {
        let cfg = ScenarioConfig { pickup_spread: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_count_injection_rejected() {
        let cfg = ScenarioConfig {
            injections: vec![Injection { tick: 2, count: 0 }],
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_counts_rejected() {
        let zeroed = [
            ScenarioConfig { local_vehicles_per_depot: 0, ..Default::default() },
            ScenarioConfig { shared_vehicle_count: 0, ..Default::default() },
            ScenarioConfig { initial_orders: 0, ..Default::default() },
        ];
        for cfg in zeroed {
            assert!(matches!(cfg.validate(), Err(DrtError::InvalidConfiguration(_))));
            assert!(build_fleet(&cfg).is_err());
            assert!(Scenario::generate(&cfg, 0).is_err());
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ScenarioConfig =
            serde_json::from_str(r#"{ "initial_orders": 4, "injections": [] }"#).unwrap();
        assert_eq!(cfg.initial_orders, 4);
        assert_eq!(cfg.depots.len(), 3);
        assert!(cfg.injections.is_empty());
    }

    #[test]
    fn late_injections_reported() {
        let cfg = ScenarioConfig {
            injections: vec![
                Injection { tick: 3, count: 1 },
                Injection { tick: 12, count: 1 },
            ],
            ..Default::default()
        };
        let late: Vec<_> = cfg.injections_after(Tick(10)).collect();
        assert_eq!(late, [&Injection { tick: 12, count: 1 }]);
    }
}

// ── InjectionSchedule ─────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tests {
    use super::*;

    #[test]
    fn repeated_ticks_accumulate() {
        let s = InjectionSchedule::from_injections(&[
            Injection { tick: 3, count: 2 },
            Injection { tick: 3, count: 1 },
            Injection { tick: 6, count: 2 },
        ]);
        assert_eq!(s.count_at(Tick(3)), 3);
        assert_eq!(s.count_at(Tick(6)), 2);
        assert_eq!(s.count_at(Tick(4)), 0);
        assert_eq!(s.total(), 5);
        assert_eq!(s.next_tick(), Some(Tick(3)));
    }

    #[test]
    fn zero_push_is_ignored() {
        let mut s = InjectionSchedule::new();
        s.push(Tick(1), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn iter_in_tick_order() {
        let mut s = InjectionSchedule::new();
        s.push(Tick(9), 1);
        s.push(Tick(2), 4);
        let v: Vec<_> = s.iter().collect();
        assert_eq!(v, [(Tick(2), 4), (Tick(9), 1)]);
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn initial_orders_round_robin() {
        let sc = Scenario::generate(&ScenarioConfig::default(), 0).unwrap();
        let depots: Vec<u16> = sc.fleet.orders().iter().map(|o| o.depot.0).collect();
        assert_eq!(depots, [0, 1, 2, 0, 1, 2, 0, 1, 2]);
        assert!(sc.fleet.orders().iter().all(|o| o.created == Tick::ZERO));
        assert!(sc.fleet.orders().iter().all(|o| !o.is_assigned()));
    }

    #[test]
    fn points_within_spread() {
        let cfg = ScenarioConfig::default();
        let sc = Scenario::generate(&cfg, 7).unwrap();
        for o in sc.fleet.orders() {
            let depot = cfg.depots[o.depot.index()];
            assert!((o.pickup.x - depot.x).abs() <= cfg.pickup_spread);
            assert!((o.pickup.y - depot.y).abs() <= cfg.pickup_spread);
            let lo = -cfg.dropoff_spread;
            let hi = cfg.area_size + cfg.dropoff_spread;
            assert!((lo..=hi).contains(&o.dropoff.x));
            assert!((lo..=hi).contains(&o.dropoff.y));
        }
    }

    #[test]
    fn same_seed_same_orders() {
        let cfg = ScenarioConfig::default();
        let a = Scenario::generate(&cfg, 42).unwrap();
        let b = Scenario::generate(&cfg, 42).unwrap();
        assert_eq!(a.fleet.orders(), b.fleet.orders());
    }

    #[test]
    fn different_seed_different_orders() {
        let cfg = ScenarioConfig::default();
        let a = Scenario::generate(&cfg, 1).unwrap();
        let b = Scenario::generate(&cfg, 2).unwrap();
        assert_ne!(a.fleet.orders(), b.fleet.orders());
    }

    #[test]
    fn zero_spread_pins_pickup_to_depot() {
        let cfg = ScenarioConfig { pickup_spread: 0.0, ..Default::default() };
        let mut fleet = build_fleet(&cfg).unwrap();
        let mut generator = OrderGenerator::new(&cfg, SimRng::new(3)).unwrap();
        generator.seed_initial(&mut fleet, 3).unwrap();
        for o in fleet.orders() {
            assert_eq!(o.pickup, cfg.depots[o.depot.index()]);
        }
    }

    #[test]
    fn sample_for_unknown_depot_fails() {
        let cfg = ScenarioConfig::default();
        let mut generator = OrderGenerator::new(&cfg, SimRng::new(0)).unwrap();
        assert!(matches!(
            generator.sample_points(DepotId(3)),
            Err(DrtError::DepotOutOfRange { .. })
        ));
    }

    #[test]
    fn injector_fires_only_on_schedule() {
        let cfg = ScenarioConfig::default();
        let mut sc = Scenario::generate(&cfg, 0).unwrap();
        assert!(sc.injector.orders_for_tick(Tick(2), &mut sc.fleet).unwrap().is_empty());
        let added = sc.injector.orders_for_tick(Tick(3), &mut sc.fleet).unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(sc.fleet.orders().len(), 11);
        for id in added {
            assert_eq!(sc.fleet.order(id).unwrap().created, Tick(3));
        }
    }

    #[test]
    fn local_vehicles_at_depots_shared_at_hub() {
        let cfg = ScenarioConfig::default();
        let fleet = build_fleet(&cfg).unwrap();
        for v in fleet.local_vehicles() {
            assert_eq!(v.position, cfg.depots[v.depot.index()]);
        }
        assert!(fleet.shared_vehicles().iter().all(|v| v.position == Point::new(50.0, 50.0)));
    }
}

// ── CSV loader + replay ───────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    const ORDERS_CSV: &str = "\
depot,pickup_x,pickup_y,dropoff_x,dropoff_y,created\n\
0,22.5,18.0,61.2,40.7,0\n\
1,79.1,25.3,12.0,88.8,0\n\
2,48.0,83.4,90.1,10.5,3\n\
";

    #[test]
    fn parses_rows() {
        let rows = load_orders_reader(Cursor::new(ORDERS_CSV)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].depot, 2);
        assert_eq!(rows[2].created, 3);
        assert_eq!(rows[0].pickup_x, 22.5);
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let bad = "depot,pickup_x,pickup_y,dropoff_x,dropoff_y,created\nzero,1,1,1,1,0\n";
        assert!(matches!(load_orders_reader(Cursor::new(bad)), Err(DrtError::Parse(_))));
    }

    #[test]
    fn replay_adds_orders_at_created_tick() {
        let rows = load_orders_reader(Cursor::new(ORDERS_CSV)).unwrap();
        let mut replay = ReplayInjector::new(rows);
        let mut fleet = build_fleet(&ScenarioConfig::default()).unwrap();

        assert_eq!(replay.orders_for_tick(Tick(0), &mut fleet).unwrap().len(), 2);
        assert!(replay.orders_for_tick(Tick(1), &mut fleet).unwrap().is_empty());
        assert_eq!(replay.remaining(), 1);
        let late = replay.orders_for_tick(Tick(3), &mut fleet).unwrap();
        assert_eq!(fleet.order(late[0]).unwrap().depot, DepotId(2));
        assert_eq!(replay.remaining(), 0);
    }

    #[test]
    fn replay_rejects_unknown_depot() {
        let csv = "depot,pickup_x,pickup_y,dropoff_x,dropoff_y,created\n9,1,1,1,1,0\n";
        let mut replay = ReplayInjector::new(load_orders_reader(Cursor::new(csv)).unwrap());
        let mut fleet = build_fleet(&ScenarioConfig::default()).unwrap();
        assert!(replay.orders_for_tick(Tick(0), &mut fleet).is_err());
    }

    #[test]
    fn no_injection_adds_nothing() {
        let mut fleet = build_fleet(&ScenarioConfig::default()).unwrap();
        assert!(NoInjection.orders_for_tick(Tick(0), &mut fleet).unwrap().is_empty());
    }
}
