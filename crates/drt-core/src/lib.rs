//! `drt-core`: foundational types for the `drt` demand-responsive transport
//! simulator.
//!
//! This crate is a dependency of every other `drt-*` crate.  It has no
//! `drt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`ids`]         | `DepotId`, `OrderId`, `LocalVehicleId`, `SharedVehicleId`    |
//! | [`geo`]         | `Point`, Euclidean distance                                  |
//! | [`time`]        | `Tick`, `SimConfig`                                          |
//! | [`rng`]         | `SimRng` (global, seeded)                                    |
//! | [`error`]       | `DrtError`, `DrtResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DrtError, DrtResult};
pub use geo::Point;
pub use ids::{DepotId, LocalVehicleId, OrderId, SharedVehicleId};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
