//! Framework error type.
//!
//! Sub-crates define their own error enums where they have extra failure
//! modes and wrap `DrtError` as one variant; fleet and scenario code returns
//! `DrtError` directly.

use thiserror::Error;

use crate::{DepotId, OrderId};

/// The top-level error type for `drt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DrtError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{depot} out of range (scenario has {depot_count} depots)")]
    DepotOutOfRange {
        depot:       DepotId,
        depot_count: usize,
    },

    #[error("{0} not found")]
    OrderNotFound(OrderId),

    #[error("vehicle {0} not found")]
    VehicleNotFound(String),

    #[error("{order} is already assigned to {existing}")]
    OrderAlreadyAssigned {
        order:    OrderId,
        existing: String,
    },

    #[error("invalid proposal: {0}")]
    InvalidProposal(String),

    /// No vehicle could be proposed for the order this tick.  The order
    /// stays pending; this variant never escapes a tick.
    #[error("no available vehicle for {0}")]
    NoAvailableVehicle(OrderId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `drt-*` crates.
pub type DrtResult<T> = Result<T, DrtError>;
