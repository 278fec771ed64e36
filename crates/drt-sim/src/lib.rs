//! `drt-sim`: tick loop orchestrator for the drt simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Inject    — OrderSource appends this tick's new orders.
//!   ② Propose   — ProposalStrategy::propose for every depot against the
//!                 same &FleetState (parallel with the `parallel` feature).
//!   ③ Auction   — run_auction over the concatenated proposals: cheapest
//!                 proposal per order wins; assignments and shared-vehicle
//!                 reservations are committed.
//!   ④ Metrics   — assignments += winners, total_cost += winning costs.
//!   ⑤ Move      — no-op; vehicles keep their positions.
//!   ⑥ Report    — SimObserver::on_tick_end(&TickReport).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the proposal phase on Rayon's thread pool.         |
//! | `fx-hash`  | FxHash for the auction's order grouping.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use drt_auction::GreedyLocalFirst;
//! use drt_core::SimConfig;
//! use drt_scenario::{Scenario, ScenarioConfig};
//! use drt_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let scenario = Scenario::generate(&ScenarioConfig::default(), config.seed)?;
//! let mut sim = SimBuilder::new(config, scenario.fleet, GreedyLocalFirst)
//!     .order_source(scenario.injector)
//!     .build()?;
//! let metrics = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{Metrics, TickReport};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
