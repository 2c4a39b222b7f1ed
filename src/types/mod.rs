//! Core data types for the auction engine.
//!
//! All currency amounts use exact decimal representation via [`Money`];
//! the engine never touches floating point.
//!
//! ## Types
//!
//! - [`Money`]: fixed-point currency amount (crores, two decimal places)
//! - [`Player`] / [`Role`]: an immutable catalog entry and its category
//! - [`LotRecord`]: per-lot allocation outcome appended to the ledger
//! - [`BidEvent`] / [`BidOutcome`]: one entry in a lot's bid log

mod player;
mod record;
pub mod money;

// Re-export all types at module level
pub use money::Money;
pub use player::{Player, Role};
pub use record::{BidEvent, BidOutcome, LotRecord, LotStatus};
