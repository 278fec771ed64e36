//! `drt-auction`: the allocation engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`cost`]       | `marginal_cost` — vehicle → pickup → dropoff distance           |
//! | [`proposal`]   | `Proposal` — one candidate (order, vehicle, cost) binding       |
//! | [`context`]    | `AuctionContext<'a>` — read-only round snapshot                 |
//! | [`strategy`]   | `ProposalStrategy` trait, `GreedyLocalFirst`                    |
//! | [`noop`]       | `NoopStrategy` — proposes nothing                               |
//! | [`resolver`]   | `select_winners`, `commit_winners`, `run_auction`               |
//!
//! # Design notes
//!
//! Each round has two phases:
//!
//! 1. **Proposal phase** (read-only, parallelisable): every depot calls
//!    `ProposalStrategy::propose` against the same `&FleetState`.  No depot
//!    can observe another depot's proposals.
//!
//! 2. **Resolution phase** (sequential): the concatenated proposals are
//!    grouped by order, the cheapest proposal per order wins, and winners are
//!    committed: order assignment plus shared-vehicle reservation.
//!
//! The resolver adjudicates per order only.  Two orders from different
//! depots that both win the same shared vehicle in one round are both
//! committed; [`AuctionOutcome::double_booked`] records every such case.

pub mod context;
pub mod cost;
pub mod noop;
pub mod proposal;
pub mod resolver;
pub mod strategy;


pub use context::AuctionContext;
pub use cost::marginal_cost;
pub use noop::NoopStrategy;
pub use proposal::Proposal;
pub use resolver::{AuctionOutcome, DoubleBooking, commit_winners, run_auction, select_winners, validate_proposal};
pub use strategy::{GreedyLocalFirst, ProposalStrategy};
