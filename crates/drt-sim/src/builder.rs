//! Fluent builder for constructing a [`Sim`].

use drt_auction::ProposalStrategy;
use drt_core::{SimConfig, Tick};
use drt_fleet::FleetState;
use drt_scenario::{NoInjection, OrderSource};

use crate::{Metrics, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: horizon, seed, snapshot interval
/// - [`FleetState`]: depots, vehicles and initial orders, e.g. from
///   [`drt_scenario::Scenario::generate`]
/// - `S: ProposalStrategy`: how depots bid (e.g. [`drt_auction::GreedyLocalFirst`])
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                         |
/// |----------------------|---------------------------------|
/// | `.order_source(src)` | `NoInjection` (no new orders)   |
///
/// # Example
///
/// ```rust,ignore
/// let scenario = Scenario::generate(&ScenarioConfig::default(), config.seed)?;
/// let mut sim = SimBuilder::new(config, scenario.fleet, GreedyLocalFirst)
///     .order_source(scenario.injector)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: ProposalStrategy> {
    config:   SimConfig,
    fleet:    FleetState,
    strategy: S,
    source:   Option<Box<dyn OrderSource>>,
}

impl<S: ProposalStrategy> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, fleet: FleetState, strategy: S) -> Self {
        Self { config, fleet, strategy, source: None }
    }

    /// Supply the source of orders arriving after tick 0.
    pub fn order_source(mut self, source: impl OrderSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        if self.config.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be positive".into()));
        }
        if self.config.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be at least 1".into()));
        }
        self.fleet.validate()?;

        Ok(Sim {
            config:       self.config,
            fleet:        self.fleet,
            strategy:     self.strategy,
            source:       self.source.unwrap_or_else(|| Box::new(NoInjection)),
            current_tick: Tick::ZERO,
            metrics:      Metrics::default(),
        })
    }
}
