//! Error types for auction setup.
//!
//! Only configuration faults are fatal: every downstream invariant assumes
//! non-negative starting purses and rosters within capacity, so a bad setup
//! is rejected before any lot is processed. Everything that can go wrong
//! *during* a run (constraint violations at finalization, unknown role
//! strings, lots with no eligible bidders) is recovered locally and surfaced
//! through `log::warn!` or a normal `Unsold` outcome instead.

use thiserror::Error;

use crate::types::Money;

/// Fatal configuration errors, rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A team was configured with a negative starting purse.
    #[error("team {team} has a negative starting purse ({purse})")]
    NegativePurse { team: String, purse: Money },

    /// A team's starting roster already exceeds its squad limit.
    #[error("team {team} starts with {size} players, above its squad limit of {max}")]
    SquadOverCapacity {
        team: String,
        size: usize,
        max: usize,
    },

    /// A pool player carries a negative base price.
    #[error("player {player} has a negative base price ({price})")]
    NegativeBasePrice { player: String, price: Money },
}

/// Result type for auction setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
