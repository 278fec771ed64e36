//! `drt-scenario`: everything that feeds orders and vehicles into a run.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`config`]     | `ScenarioConfig`, `Injection` (serde)                      |
//! | [`schedule`]   | `InjectionSchedule` — sparse tick → order-count map        |
//! | [`generator`]  | `OrderGenerator`, `build_fleet`, `Scenario::generate`      |
//! | [`source`]     | `OrderSource` trait, `RandomInjector`, `ReplayInjector`    |
//! | [`loader`]     | CSV order-stream loader                                    |
//!
//! The allocation engine never looks inside this crate: it only sees the
//! resulting `FleetState` and whatever orders an `OrderSource` appends at
//! tick entry.

pub mod config;
pub mod generator;
pub mod loader;
pub mod schedule;
pub mod source;

#[cfg(test)]
mod tests;

pub use config::{Injection, ScenarioConfig};
pub use generator::{OrderGenerator, Scenario, build_fleet};
pub use loader::{OrderRecord, load_orders_csv, load_orders_reader};
pub use schedule::InjectionSchedule;
pub use source::{NoInjection, OrderSource, RandomInjector, ReplayInjector};
