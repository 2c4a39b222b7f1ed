//! The auction engine.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: seeded runs replay to identical ledgers
//! 2. **Exact Decimal Math**: no floating point anywhere in pricing
//! 3. **Sequential Execution**: one lot fully resolves before the next
//! 4. **Atomic Commits**: a sale mutates team state all-or-nothing
//!
//! ## Pipeline
//!
//! The [`Auctioneer`] fixes the processing order from a [`SetOrder`], the
//! eligibility filter narrows each lot's bidder pool, and the
//! [`BiddingRound`] state machine re-scores every active team per round via
//! the valuation function until the lot converges to `Sold` or `Unsold`.
//!
//! ## Example
//!
//! ```
//! use auction_core::engine::{Auctioneer, SetOrder};
//! use auction_core::roster::{SquadPolicy, Team};
//! use auction_core::types::{LotStatus, Money, Player, Role};
//!
//! let teams = vec![
//!     Team::new("Titans", Money::from_major(120), Vec::new(), SquadPolicy::default()).unwrap(),
//! ];
//! let pool = vec![
//!     Player::new("R Verma", Role::Batter, "India", Money::from_major(2), 26),
//! ];
//!
//! let mut auction = Auctioneer::new(teams, pool, SetOrder::season_2025()).unwrap();
//! auction.run_seeded(42, None);
//!
//! // A lone eligible bidder takes the lot at its starting price.
//! assert_eq!(auction.ledger().len(), 1);
//! assert_eq!(auction.ledger()[0].status, LotStatus::Sold);
//! assert_eq!(auction.ledger()[0].final_price, Some(Money::from_major(2)));
//! ```

pub mod bidding;
pub mod eligibility;
pub mod increment;
pub mod sequencer;
pub mod valuation;

pub use bidding::{BiddingRound, LotState};
pub use eligibility::{eligible, eligible_at};
pub use increment::{bid_increment, next_ask};
pub use sequencer::{Auctioneer, ProgressFn, SetOrder};
pub use valuation::max_bid;
