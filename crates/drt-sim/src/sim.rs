//! The `Sim` struct and its tick loop.

use drt_auction::{AuctionContext, Proposal, ProposalStrategy, run_auction};
use drt_core::{DepotId, SimConfig, Tick};
use drt_fleet::FleetState;
use drt_scenario::OrderSource;

use crate::{Metrics, SimObserver, SimResult, TickReport};

/// The main simulation runner.
///
/// `Sim<S>` owns the fleet and drives the tick loop:
///
/// 1. **Injection**: the order source appends this tick's new orders.
/// 2. **Proposal phase** (optionally parallel with the `parallel` feature):
///    every depot calls [`ProposalStrategy::propose`] against the same
///    read-only fleet; results are concatenated in depot order.
/// 3. **Auction phase** (sequential): [`run_auction`] selects one winner per
///    order and commits assignments and reservations.
/// 4. **Metrics**: winners and their costs are added to the running totals.
/// 5. **Movement**: none.  Vehicles stay where they are.
/// 6. **Report**: the observer receives a [`TickReport`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ProposalStrategy> {
    /// Global configuration (horizon, seed, snapshot interval).
    pub config: SimConfig,

    /// Depots, vehicles and orders.  Mutated only by the auction phase and
    /// the order source.
    pub fleet: FleetState,

    /// The proposal strategy.  Called once per depot per tick.
    pub strategy: S,

    /// Adds orders at tick entry.
    pub(crate) source: Box<dyn OrderSource>,

    /// Next tick to process.
    pub current_tick: Tick,

    /// Cumulative metrics.
    pub metrics: Metrics,
}

impl<S: ProposalStrategy> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()` and
    /// return the final metrics.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Metrics> {
        while self.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        tracing::debug!(
            ticks = self.current_tick.0,
            total_cost = self.metrics.total_cost,
            assignments = self.metrics.assignments,
            "simulation finished"
        );
        observer.on_sim_end(&self.metrics);
        Ok(self.metrics)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.current_tick;
        observer.on_tick_start(now);

        let report = self.process_tick(now, observer)?;
        observer.on_tick_end(&report);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.fleet);
        }

        self.current_tick = now + 1;
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickReport> {
        // ── Phase 1: injection ────────────────────────────────────────────
        let injected = self.source.orders_for_tick(now, &mut self.fleet)?;
        if !injected.is_empty() {
            tracing::debug!(tick = now.0, count = injected.len(), "orders injected");
            observer.on_orders_injected(now, &injected);
        }

        // ── Phase 2: proposals (read-only) ────────────────────────────────
        let proposals = self.collect_proposals(now);
        tracing::debug!(tick = now.0, proposals = proposals.len(), "proposal phase done");

        // ── Phase 3: auction (single writer) ──────────────────────────────
        let outcome = run_auction(&proposals, &mut self.fleet)?;

        // ── Phase 4: metrics ──────────────────────────────────────────────
        let tick_cost = outcome.total_cost();
        self.metrics.assignments += outcome.winners.len();
        self.metrics.total_cost += tick_cost;

        // ── Phase 5: movement ─────────────────────────────────────────────
        // Vehicle positions are not advanced after service.

        Ok(TickReport {
            tick:          now,
            orders:        self.fleet.orders().len(),
            assigned:      self.fleet.assigned_count(),
            injected:      injected.len(),
            proposals:     proposals.len(),
            tick_cost,
            total_cost:    self.metrics.total_cost,
            winners:       outcome.winners,
            double_booked: outcome.double_booked,
        })
    }

    /// Run the strategy for every depot and concatenate in depot order.
    ///
    /// With the `parallel` Cargo feature, depots are processed on Rayon's
    /// thread pool; the collected order is still depot order, so the
    /// auction sees the same sequence either way.
    fn collect_proposals(&self, now: Tick) -> Vec<Proposal> {
        let ctx = AuctionContext::new(now, &self.fleet);
        let strategy = &self.strategy;
        let depots: Vec<DepotId> = self.fleet.depot_ids().collect();

        #[cfg(not(feature = "parallel"))]
        {
            depots
                .iter()
                .flat_map(|&depot| strategy.propose(depot, &ctx))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let per_depot: Vec<Vec<Proposal>> = depots
                .par_iter()
                .map(|&depot| strategy.propose(depot, &ctx))
                .collect();
            per_depot.into_iter().flatten().collect()
        }
    }
}
