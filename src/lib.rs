//! # auction-core
//!
//! Deterministic ascending-auction engine for squad-building player
//! auctions: a fixed catalog of players is sold one lot at a time to
//! competing teams operating under budget and composition constraints.
//!
//! ## Architecture
//!
//! - **Types**: core data structures (`Money`, `Player`, `LotRecord`)
//! - **Roster**: bidder state (`Team`, `SquadPolicy`)
//! - **Engine**: eligibility filter, valuation, increment schedule,
//!   bidding state machine, and the sequencing driver
//!
//! ## Design Principles
//!
//! 1. **Determinism**: the only randomness is the valuation jitter, drawn
//!    from an injected generator; a seeded run replays to an identical
//!    ledger
//! 2. **No Floating Point**: all pricing math is exact decimal
//! 3. **Sequential Execution**: one lot resolves fully before the next;
//!    team state is committed atomically by the finalizing transition
//! 4. **Greedy, Myopic Bidders**: valuations are recomputed per round from
//!    current state - no lookahead, no coalition strategy, no global
//!    optimization

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Money, Player, LotRecord
pub mod types;

/// Bidder model: Team and its composition policy
pub mod roster;

/// Auction engine: eligibility, valuation, bidding, sequencing
pub mod engine;

/// Setup error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{
    bid_increment, eligible, max_bid, next_ask, Auctioneer, BiddingRound, LotState, SetOrder,
};
pub use error::SetupError;
pub use roster::{RoleRange, SquadPolicy, Team};
pub use types::{BidEvent, BidOutcome, LotRecord, LotStatus, Money, Player, Role};
