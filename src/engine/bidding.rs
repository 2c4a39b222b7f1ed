//! Ascending-bid state machine for a single lot.
//!
//! ## States
//!
//! `Open` → `Converged` → `Finalizing` → terminal `Sold` / `Unsold`.
//!
//! ## Round Rules
//!
//! Each round is one full pass over the active set in team registration
//! order (registration order is also the documented tie-break: the earlier
//! team reaches any given price first). Per active team:
//!
//! - the current leader stands on its bid and is skipped - a leader never
//!   raises against itself;
//! - a team whose recomputed max bid does not beat the running price, or
//!   whose purse the running price already exceeds, withdraws (logged at the
//!   running price);
//! - otherwise the team bids: the opening bid is AT the starting price, so
//!   an uncontested lot hammers at its base; every later raise steps the
//!   price by the increment schedule.
//!
//! The lot converges when a pass leaves at most one team active. A sole
//! survivor is necessarily the leader; with a leader whose purse covers the
//! price the machine enters `Finalizing`, which re-validates eligibility at
//! the hammer price and commits atomically - roster push, purse debit,
//! record marked sold - or converts the lot to `Unsold` with zero mutation.

use rand::Rng;

use crate::engine::eligibility::eligible_at;
use crate::engine::increment::next_ask;
use crate::engine::valuation::max_bid;
use crate::roster::Team;
use crate::types::{BidOutcome, LotRecord, Money, Player};

/// State of one lot's sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotState {
    /// Bidders still active; passes continue.
    Open,
    /// At most one active bidder remains; no further pass is attempted.
    Converged,
    /// A leader exists within purse; final validation in progress.
    Finalizing,
    /// Terminal: committed to the winner.
    Sold,
    /// Terminal: no winner, no mutation.
    Unsold,
}

/// Drives one player's sale to completion.
pub struct BiddingRound<'a> {
    teams: &'a mut [Team],
    player: &'a Player,
    active: Vec<usize>,
    leader: Option<usize>,
    current_price: Money,
    state: LotState,
}

impl<'a> BiddingRound<'a> {
    /// Set up a round over `entrants` (indices into `teams`, already passed
    /// through the entry filter, in registration order).
    pub fn new(teams: &'a mut [Team], player: &'a Player, entrants: Vec<usize>) -> Self {
        let current_price = player.base_price;
        Self {
            teams,
            player,
            active: entrants,
            leader: None,
            current_price,
            state: LotState::Open,
        }
    }

    /// The running price.
    #[inline]
    pub fn current_price(&self) -> Money {
        self.current_price
    }

    #[inline]
    pub fn state(&self) -> LotState {
        self.state
    }

    /// Run the lot to a terminal state, logging every bid event into
    /// `record` and committing the sale on success.
    pub fn run<R: Rng + ?Sized>(mut self, record: &mut LotRecord, rng: &mut R) -> LotState {
        if self.active.is_empty() {
            self.state = LotState::Unsold;
            return self.state;
        }

        while self.state == LotState::Open {
            self.run_pass(record, rng);
            if self.active.len() <= 1 {
                self.state = LotState::Converged;
            }
        }

        self.resolve(record)
    }

    /// One full pass over the active set in registration order.
    fn run_pass<R: Rng + ?Sized>(&mut self, record: &mut LotRecord, rng: &mut R) {
        let snapshot = self.active.clone();
        for idx in snapshot {
            if Some(idx) == self.leader {
                continue;
            }

            let team = &self.teams[idx];
            let willingness = max_bid(team, self.player, rng);

            if willingness <= self.current_price || self.current_price > team.purse() {
                record.log_bid(team.name(), self.current_price, BidOutcome::Withdrew);
                self.active.retain(|&i| i != idx);
            } else {
                let price = if self.leader.is_none() {
                    self.current_price
                } else {
                    next_ask(self.current_price)
                };
                record.log_bid(team.name(), price, BidOutcome::Active);
                self.current_price = price;
                self.leader = Some(idx);
            }
        }
    }

    /// Convergence: decide between finalizing and an unsold lot.
    fn resolve(&mut self, record: &mut LotRecord) -> LotState {
        debug_assert!(self.active.len() <= 1);
        debug_assert!(
            self.active.is_empty() || self.leader == Some(self.active[0]),
            "a sole surviving bidder must hold the leading bid"
        );

        match self.leader {
            Some(leader) if self.current_price <= self.teams[leader].purse() => {
                self.state = LotState::Finalizing;
                self.finalize(leader, record)
            }
            _ => {
                self.state = LotState::Unsold;
                self.state
            }
        }
    }

    /// Second gate: re-validate the leader against the hammer price, then
    /// commit all-or-nothing.
    fn finalize(&mut self, leader: usize, record: &mut LotRecord) -> LotState {
        let team = &mut self.teams[leader];

        if eligible_at(team, self.player, self.current_price) {
            team.acquire(self.player.clone(), self.current_price);
            record.finalize_sold(team.name(), self.current_price);
            self.state = LotState::Sold;
        } else {
            log::warn!(
                "sale of {} to {} at {} failed final validation; lot unsold",
                self.player.name,
                team.name(),
                self.current_price
            );
            self.state = LotState::Unsold;
        }
        self.state
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::SquadPolicy;
    use crate::types::{LotStatus, Role};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(name: &str, purse: i64) -> Team {
        Team::new(
            name,
            Money::from_major(purse),
            Vec::new(),
            SquadPolicy::default(),
        )
        .unwrap()
    }

    fn lot(base: &str) -> Player {
        Player::new("P Singh", Role::Batter, "India", Money::parse(base).unwrap(), 28)
    }

    #[test]
    fn test_round_opens_at_base_price() {
        let mut teams = vec![team("Titans", 120)];
        let player = lot("2.00");
        let round = BiddingRound::new(&mut teams, &player, vec![0]);

        assert_eq!(round.state(), LotState::Open);
        assert_eq!(round.current_price(), Money::from_major(2));
    }

    #[test]
    fn test_lone_bidder_wins_at_base_price() {
        let mut teams = vec![team("Titans", 120)];
        let player = lot("2.00");
        let mut record = LotRecord::open(&player);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let state = BiddingRound::new(&mut teams, &player, vec![0]).run(&mut record, &mut rng);

        assert_eq!(state, LotState::Sold);
        assert_eq!(record.status, LotStatus::Sold);
        assert_eq!(record.final_price, Some(Money::from_major(2)));
        // One opening bid at the starting price, zero increments
        assert_eq!(record.bid_count(), 1);
        assert_eq!(record.bids[0].amount, Money::from_major(2));
        assert_eq!(record.bids[0].outcome, BidOutcome::Active);
        assert_eq!(teams[0].purse(), Money::from_major(118));
        assert_eq!(teams[0].squad_size(), 1);
    }

    #[test]
    fn test_lone_bidder_below_valuation_leaves_lot_unsold() {
        // Base 60 with a 120 purse: the 40% spend cap keeps every
        // willingness-to-pay under the asking price.
        let mut teams = vec![team("Titans", 120)];
        let player = lot("60.00");
        let mut record = LotRecord::open(&player);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let state = BiddingRound::new(&mut teams, &player, vec![0]).run(&mut record, &mut rng);

        assert_eq!(state, LotState::Unsold);
        assert_eq!(record.status, LotStatus::Unsold);
        assert_eq!(record.final_price, None);
        assert_eq!(record.winner, None);
        assert_eq!(record.bid_count(), 1);
        assert_eq!(record.bids[0].outcome, BidOutcome::Withdrew);
        assert_eq!(record.bids[0].amount, Money::from_major(60));
        assert_eq!(teams[0].purse(), Money::from_major(120));
        assert_eq!(teams[0].squad_size(), 0);
    }

    #[test]
    fn test_no_entrants_is_unsold_with_empty_log() {
        let mut teams = vec![team("Titans", 120)];
        let player = lot("2.00");
        let mut record = LotRecord::open(&player);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let state = BiddingRound::new(&mut teams, &player, Vec::new()).run(&mut record, &mut rng);

        assert_eq!(state, LotState::Unsold);
        assert!(record.bids.is_empty());
    }

    #[test]
    fn test_two_bidders_alternate_up_the_ladder() {
        let mut teams = vec![team("Titans", 120), team("Royals", 120)];
        let player = lot("1.00");
        let mut record = LotRecord::open(&player);
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        let state =
            BiddingRound::new(&mut teams, &player, vec![0, 1]).run(&mut record, &mut rng);

        assert_eq!(state, LotState::Sold);

        // Opening bid at the base price by the first-registered team
        assert_eq!(record.bids[0].team, "Titans");
        assert_eq!(record.bids[0].amount, Money::from_major(1));
        assert_eq!(record.bids[0].outcome, BidOutcome::Active);

        // Active raises alternate between the two teams and follow the
        // increment schedule off the preceding price.
        let actives: Vec<_> = record.active_bids().collect();
        assert!(actives.len() >= 2, "both teams should bid at least once");
        for pair in actives.windows(2) {
            assert_ne!(pair[0].team, pair[1].team);
            assert_eq!(pair[1].amount, next_ask(pair[0].amount));
        }

        // Final price equals the last active entry; exactly one withdrawal
        let last_active = actives.last().unwrap().amount;
        assert_eq!(record.final_price, Some(last_active));
        let withdrawals: Vec<_> = record
            .bids
            .iter()
            .filter(|b| b.outcome == BidOutcome::Withdrew)
            .collect();
        assert_eq!(withdrawals.len(), 1);
        assert_ne!(
            Some(withdrawals[0].team.as_str()),
            record.winner.as_deref(),
            "the withdrawing team cannot be the winner"
        );

        // Winner paid the hammer price; loser untouched
        let winner_idx = if record.winner.as_deref() == Some("Titans") { 0 } else { 1 };
        assert_eq!(
            teams[winner_idx].purse(),
            Money::from_major(120) - last_active
        );
        assert_eq!(teams[1 - winner_idx].purse(), Money::from_major(120));
        assert_eq!(teams[1 - winner_idx].squad_size(), 0);
    }

    #[test]
    fn test_all_withdraw_before_opening_is_unsold() {
        // Both teams can afford the base but the spend cap keeps their
        // valuations below it, so nobody opens.
        let mut teams = vec![team("Titans", 30), team("Royals", 30)];
        let player = lot("13.00");
        let mut record = LotRecord::open(&player);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let state =
            BiddingRound::new(&mut teams, &player, vec![0, 1]).run(&mut record, &mut rng);

        assert_eq!(state, LotState::Unsold);
        assert_eq!(record.bid_count(), 2);
        assert!(record.bids.iter().all(|b| b.outcome == BidOutcome::Withdrew));
        assert!(record.bids.iter().all(|b| b.amount == Money::from_major(13)));
    }

    #[test]
    fn test_sold_price_never_below_base() {
        for seed in 0..20 {
            let mut teams = vec![team("A", 120), team("B", 120), team("C", 120)];
            let player = lot("1.50");
            let mut record = LotRecord::open(&player);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let state =
                BiddingRound::new(&mut teams, &player, vec![0, 1, 2]).run(&mut record, &mut rng);

            if state == LotState::Sold {
                assert!(record.final_price.unwrap() >= player.base_price);
            }
        }
    }
}
