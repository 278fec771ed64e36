//! A strategy that never proposes.

use drt_core::DepotId;

use crate::{AuctionContext, Proposal, ProposalStrategy};

/// A [`ProposalStrategy`] that always returns no proposals.
///
/// Every order stays pending forever; useful in tests of the driver loop.
pub struct NoopStrategy;

impl ProposalStrategy for NoopStrategy {
    fn propose(&self, _depot: DepotId, _ctx: &AuctionContext<'_>) -> Vec<Proposal> {
        vec![]
    }
}
