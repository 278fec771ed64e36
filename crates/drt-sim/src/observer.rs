//! Simulation observer trait for progress reporting and data collection.

use drt_core::{OrderId, Tick};
use drt_fleet::FleetState;

use crate::{Metrics, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         println!("{}: {} winners", report.tick, report.winners.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before injection.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the order source added orders this tick.  Not called
    /// on ticks without new orders.
    fn on_orders_injected(&mut self, _tick: Tick, _orders: &[OrderId]) {}

    /// Called once the auction has been committed and metrics updated.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the whole fleet.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &FleetState) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _metrics: &Metrics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
