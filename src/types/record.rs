//! Allocation ledger types.
//!
//! One [`LotRecord`] is produced per pool player, whether or not the lot
//! sells. The record carries a snapshot of the player at the moment the lot
//! opened, the ordered log of bid events, and the final outcome. Records are
//! append-only: the bid log grows during bidding and the outcome fields are
//! written exactly once, at finalization.

use crate::types::{Money, Player, Role};

/// Outcome of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotStatus {
    Sold,
    Unsold,
}

/// Outcome of a single bid event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// The team raised (or opened) and holds the running price.
    Active,
    /// The team left the lot at the logged price.
    Withdrew,
}

/// One entry in a lot's bid log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidEvent {
    /// Bidding team's name.
    pub team: String,

    /// Price at which the event was logged. For `Active` events this is the
    /// new running price; for `Withdrew` events it is the price the team
    /// declined to beat.
    pub amount: Money,

    pub outcome: BidOutcome,
}

/// The per-lot allocation record appended to the ledger.
///
/// ## Example
///
/// ```
/// use auction_core::types::{LotRecord, LotStatus, Money, Player, Role};
///
/// let player = Player::new("R Patel", Role::Bowler, "India", Money::from_major(1), 27);
/// let record = LotRecord::open(&player);
///
/// assert_eq!(record.status, LotStatus::Unsold);
/// assert!(record.bids.is_empty());
/// assert!(record.final_price.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotRecord {
    /// Player snapshot taken when the lot opened.
    pub player_name: String,
    pub role: Role,
    pub nationality: String,
    pub base_price: Money,
    pub total_caps: u32,
    pub league_appearances: u32,
    pub set_code: Option<String>,

    /// Ordered bid log: one event per raise or withdrawal.
    pub bids: Vec<BidEvent>,

    /// Hammer price; `None` for unsold lots.
    pub final_price: Option<Money>,

    /// Winning team's name; `None` for unsold lots.
    pub winner: Option<String>,

    pub status: LotStatus,
}

impl LotRecord {
    /// Open a record for a lot entering processing. Status starts `Unsold`
    /// and flips only through [`LotRecord::finalize_sold`].
    pub fn open(player: &Player) -> Self {
        Self {
            player_name: player.name.clone(),
            role: player.role,
            nationality: player.nationality.clone(),
            base_price: player.base_price,
            total_caps: player.total_caps(),
            league_appearances: player.league_appearances,
            set_code: player.set_code.clone(),
            bids: Vec::new(),
            final_price: None,
            winner: None,
            status: LotStatus::Unsold,
        }
    }

    /// Append one bid event.
    pub fn log_bid(&mut self, team: &str, amount: Money, outcome: BidOutcome) {
        self.bids.push(BidEvent {
            team: team.to_string(),
            amount,
            outcome,
        });
    }

    /// Mark the lot sold. Called exactly once, by the finalizing commit.
    pub fn finalize_sold(&mut self, winner: &str, price: Money) {
        debug_assert_eq!(self.status, LotStatus::Unsold, "lot finalized twice");
        self.final_price = Some(price);
        self.winner = Some(winner.to_string());
        self.status = LotStatus::Sold;
    }

    #[inline]
    pub fn is_sold(&self) -> bool {
        self.status == LotStatus::Sold
    }

    /// Number of logged bid events (raises and withdrawals).
    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    /// The `Active` events only, in log order.
    pub fn active_bids(&self) -> impl Iterator<Item = &BidEvent> {
        self.bids
            .iter()
            .filter(|b| b.outcome == BidOutcome::Active)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
