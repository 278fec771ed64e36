//! `drt-fleet`: the mutable world state of the allocation engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`vehicle`]   | `VehicleRef`, `VehicleKind`, `LocalVehicle`, `SharedVehicle`|
//! | [`order`]     | `Depot`, `Order`                                            |
//! | [`state`]     | `FleetState` — every depot, vehicle and order of one run    |
//! | [`builder`]   | `FleetBuilder` (fluent construction + validation)           |
//!
//! # Ownership
//!
//! `FleetState` is owned by the simulation driver.  Proposal generation only
//! ever sees `&FleetState`; the auction resolver is the single writer, via
//! [`FleetState::assign`] and [`FleetState::reserve`].

pub mod builder;
pub mod order;
pub mod state;
pub mod vehicle;


pub use builder::FleetBuilder;
pub use order::{Depot, Order};
pub use state::FleetState;
pub use vehicle::{LocalVehicle, SharedVehicle, VehicleKind, VehicleRef};
