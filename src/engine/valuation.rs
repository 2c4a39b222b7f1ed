//! Valuation: a team's maximum willingness-to-pay for a player.
//!
//! ## Contract
//!
//! [`max_bid`] is recomputed by every active team on **every round** of a
//! lot's bidding, never cached: team state changes between lots and the
//! jitter is re-drawn per call. It is a pure function of (team, player)
//! state plus the injected random source, so a seeded run replays exactly.
//!
//! ## Shape
//!
//! The valuation composes multiplicative factors over the starting price -
//! experience, international caps, role urgency, special attributes, purse
//! pressure - then applies jitter, floors, and the single-lot spend cap.
//! All math is exact decimal; the jitter is drawn in integer basis points so
//! the product stays exact.

use rand::Rng;
use rust_decimal::Decimal;

use crate::roster::Team;
use crate::types::{Money, Player, Role};

/// Floor for players with more than 50 international caps.
const CAPPED_VETERAN_FLOOR: i64 = 4;

/// Floor for wicket-keepers.
const KEEPER_FLOOR: i64 = 2;

#[inline]
fn dec(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

/// Compute `team`'s current maximum bid for `player`.
///
/// The result is rounded to two decimal places and never exceeds 40% of the
/// team's remaining purse.
pub fn max_bid<R: Rng + ?Sized>(team: &Team, player: &Player, rng: &mut R) -> Money {
    let mut value = player.base_price.amount();

    // Experience: recent-season activity, then league-appearance tiers.
    let mut experience = Decimal::ONE;
    if player.active_last_season {
        experience *= dec(15, 1);
    }
    if player.league_appearances > 100 {
        experience *= dec(15, 1);
    } else if player.league_appearances > 50 {
        experience *= dec(13, 1);
    }

    // International caps, exclusive tiers.
    let total_caps = player.total_caps();
    let caps_factor = if total_caps > 100 {
        dec(18, 1)
    } else if total_caps > 50 {
        dec(15, 1)
    } else if total_caps > 20 {
        dec(13, 1)
    } else {
        Decimal::ONE
    };

    // Urgency: scarcity pressure on the player's role.
    let range = team.policy().role_range(player.role);
    let count = team.role_count(player.role);
    let urgency = if count < range.min {
        dec(2, 0)
    } else if count == range.min {
        dec(15, 1)
    } else {
        Decimal::ONE
    };

    // Special attributes compound.
    let mut special = Decimal::ONE;
    if team.is_overseas(player) {
        special *= dec(13, 1);
    }
    if player.last_team.is_some() {
        special *= dec(12, 1);
    }
    if player.age <= 25 {
        special *= dec(12, 1);
    }

    // Purse pressure: richer teams bid more aggressively.
    let purse = team.purse();
    let pressure = if purse > Money::from_major(30) {
        dec(14, 1)
    } else if purse > Money::from_major(20) {
        dec(12, 1)
    } else {
        Decimal::ONE
    };

    value = value * experience * caps_factor * urgency * special * pressure;

    // Imperfect valuation: ±15% jitter, re-drawn on every call.
    let jitter_bp: i64 = rng.gen_range(8_500..=11_500);
    value *= dec(jitter_bp, 4);

    // Floors, then the spend cap; the cap wins when they conflict.
    if total_caps > 50 {
        value = value.max(Decimal::from(CAPPED_VETERAN_FLOOR));
    }
    if player.role == Role::WicketKeeper {
        value = value.max(Decimal::from(KEEPER_FLOOR));
    }
    value = value.min(purse.amount() * dec(4, 1));

    Money::from(value).round2()
}

// ============================================================================
// Unit Tests
// ============================================================================
