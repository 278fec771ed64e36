//! `InjectionSchedule`: sparse per-tick order-arrival map.
//!
//! Like a wake queue but for demand: most ticks have no arrivals, so only
//! the ticks that do are stored.

use std::collections::BTreeMap;

use drt_core::Tick;

use crate::Injection;

/// Tick → number of orders to generate at the start of that tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InjectionSchedule {
    inner: BTreeMap<Tick, usize>,
}

impl InjectionSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(tick, count)` pairs.  Repeated ticks accumulate.
    pub fn from_injections(injections: &[Injection]) -> Self {
        let mut schedule = Self::new();
        for inj in injections {
            schedule.push(Tick(inj.tick), inj.count);
        }
        schedule
    }

    /// Schedule `count` more orders at `tick`.
    pub fn push(&mut self, tick: Tick, count: usize) {
        if count > 0 {
            *self.inner.entry(tick).or_default() += count;
        }
    }

    /// Orders due at exactly `tick` (0 if none).
    pub fn count_at(&self, tick: Tick) -> usize {
        self.inner.get(&tick).copied().unwrap_or(0)
    }

    /// The earliest scheduled tick, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total orders across all scheduled ticks.
    pub fn total(&self) -> usize {
        self.inner.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate `(tick, count)` in tick order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, usize)> + '_ {
        self.inner.iter().map(|(&t, &c)| (t, c))
    }
}
