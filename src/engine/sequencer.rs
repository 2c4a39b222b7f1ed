//! Auction sequencing and the full-catalog driver.
//!
//! ## Sequencing
//!
//! The pool is partitioned by auction set code against an externally
//! supplied [`SetOrder`]. Within a set, players sort by descending base
//! price, ties broken by descending league appearances. Players whose set
//! code is unknown (or absent) form one trailing group under the same key.
//! The order is fixed before the first lot: the sequencer never revisits a
//! lot and never reorders based on outcomes.
//!
//! ## Driver
//!
//! [`Auctioneer`] validates configuration up front (bad setups are rejected
//! before any lot runs), then drives the bidding state machine across the
//! sequenced pool, appending exactly one [`LotRecord`] per player. The
//! progress callback fires after each lot resolves and is purely
//! observational.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::bidding::BiddingRound;
use crate::engine::eligibility::admits_at_entry;
use crate::error::{Result, SetupError};
use crate::roster::Team;
use crate::types::{LotRecord, Player};

/// Fire-and-forget progress observer: (lot index, total lots, label).
pub type ProgressFn<'a> = dyn FnMut(usize, usize, &str) + 'a;

// ============================================================================
// SetOrder
// ============================================================================

/// The externally defined ordered list of named auction sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOrder {
    sets: Vec<String>,
}

impl SetOrder {
    /// Build an order from explicit set codes, first-sold first.
    pub fn new<I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sets: sets.into_iter().map(Into::into).collect(),
        }
    }

    /// The 2025 season calling order: marquee sets, then the capped
    /// all-rounder / batter / fast-bowler / spinner / keeper tiers, then the
    /// same tiers again for the uncapped pass.
    pub fn season_2025() -> Self {
        const TIERS: [(&str, usize); 11] = [
            ("M", 2),
            ("AL", 10),
            ("BA", 5),
            ("FA", 10),
            ("SP", 3),
            ("WK", 4),
            ("UAL", 15),
            ("UBA", 9),
            ("UFA", 10),
            ("USP", 5),
            ("UWK", 6),
        ];

        let mut sets = Vec::new();
        for (prefix, count) in TIERS {
            for n in 1..=count {
                sets.push(format!("{}{}", prefix, n));
            }
        }
        Self { sets }
    }

    /// Rank of a set code in the calling order. Unknown and missing codes
    /// rank after every named set, forming one trailing group.
    pub fn position(&self, code: Option<&str>) -> usize {
        code.and_then(|c| self.sets.iter().position(|s| s == c))
            .unwrap_or(self.sets.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

// ============================================================================
// Auctioneer
// ============================================================================

/// Owns the processing order and the ledger; drives the whole auction.
#[derive(Debug, Clone)]
pub struct Auctioneer {
    teams: Vec<Team>,
    pool: Vec<Player>,
    order: SetOrder,
    ledger: Vec<LotRecord>,
}

impl Auctioneer {
    /// Assemble an auction. Teams arrive already validated by
    /// [`Team::new`]; the pool is checked here, and a player with a
    /// negative base price rejects the whole run before any lot opens.
    pub fn new(teams: Vec<Team>, pool: Vec<Player>, order: SetOrder) -> Result<Self> {
        for player in &pool {
            if player.base_price.is_negative() {
                return Err(SetupError::NegativeBasePrice {
                    player: player.name.clone(),
                    price: player.base_price,
                });
            }
        }

        Ok(Self {
            teams,
            pool,
            order,
            ledger: Vec::new(),
        })
    }

    /// Run the full auction with the supplied random source.
    ///
    /// Strictly sequential: each lot resolves through `Sold`/`Unsold`
    /// before the next opens. The pool is consumed; calling `run` again is
    /// a no-op. `progress` fires after each lot with (index, total, label).
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mut progress: Option<&mut ProgressFn<'_>>,
    ) {
        let pool = Self::sequence(&self.order, std::mem::take(&mut self.pool));
        let total = pool.len();

        for (idx, player) in pool.iter().enumerate() {
            let mut record = LotRecord::open(player);

            let entrants: Vec<usize> = (0..self.teams.len())
                .filter(|&i| admits_at_entry(&self.teams[i], player))
                .collect();

            if !entrants.is_empty() {
                BiddingRound::new(&mut self.teams, player, entrants).run(&mut record, rng);
            }
            self.ledger.push(record);

            if let Some(cb) = progress.as_deref_mut() {
                let set = player.set_code.as_deref().unwrap_or("Unassigned");
                let label = format!("{} ({})", player.name, set);
                cb(idx, total, &label);
            }
        }
    }

    /// Run with a seeded ChaCha8 generator, for reproducible outcomes.
    pub fn run_seeded(&mut self, seed: u64, progress: Option<&mut ProgressFn<'_>>) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run(&mut rng, progress);
    }

    /// The append-only allocation ledger, one record per processed lot.
    #[inline]
    pub fn ledger(&self) -> &[LotRecord] {
        &self.ledger
    }

    /// Current team state (final budgets and rosters after a run).
    #[inline]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Hand out the mutated teams and the ledger.
    pub fn into_results(self) -> (Vec<Team>, Vec<LotRecord>) {
        (self.teams, self.ledger)
    }

    /// Fix the processing order: set rank, then descending base price,
    /// then descending league appearances. `sort_by` is stable, so fully
    /// tied players keep their catalog order.
    fn sequence(order: &SetOrder, mut pool: Vec<Player>) -> Vec<Player> {
        pool.sort_by(|a, b| {
            let rank_a = order.position(a.set_code.as_deref());
            let rank_b = order.position(b.set_code.as_deref());
            rank_a
                .cmp(&rank_b)
                .then(b.base_price.cmp(&a.base_price))
                .then(b.league_appearances.cmp(&a.league_appearances))
        });
        pool
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
