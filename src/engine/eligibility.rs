//! Eligibility filter: may this team bid on this player at all?
//!
//! ## Contract
//!
//! [`eligible`] is a pure predicate with no side effects, re-evaluated fresh
//! for every lot (team state changes between lots). [`eligible_at`] is the
//! same predicate against an arbitrary price; the finalizing transition uses
//! it to re-validate the leader against the hammer price rather than the
//! starting price.
//!
//! ## Feasibility guard
//!
//! The last clause checks that acquiring the player cannot make it
//! mathematically impossible to reach every other role's minimum within the
//! remaining squad slots. This stays an O(#roles) arithmetic guard, not a
//! search.

use crate::roster::Team;
use crate::types::{Money, Player, Role};

/// Squad size at which a team without a keeper stops entering non-keeper
/// lots. A soft admission heuristic, not a hard constraint: nothing enforces
/// a keeper minimum at finalization.
const KEEPER_SEARCH_SQUAD_SIZE: usize = 15;

/// Can `team` bid on `player` at the player's starting price?
#[inline]
pub fn eligible(team: &Team, player: &Player) -> bool {
    eligible_at(team, player, player.base_price)
}

/// Can `team` take `player` at `price`?
///
/// All of the following must hold:
/// - remaining purse covers `price`;
/// - squad has an open slot;
/// - an overseas player fits under the overseas allowance;
/// - the player's role is under its maximum;
/// - after this acquisition, every other role's minimum is still reachable
///   within the remaining slots.
pub fn eligible_at(team: &Team, player: &Player, price: Money) -> bool {
    if price > team.purse() {
        return false;
    }

    let size = team.squad_size();
    let policy = team.policy();
    if size >= policy.max_squad {
        return false;
    }

    if team.is_overseas(player) && team.overseas_count() >= policy.max_overseas {
        return false;
    }

    if team.role_count(player.role) >= policy.role_range(player.role).max {
        return false;
    }

    // Slots left after a hypothetical acquisition, minus every other role's
    // unmet minimum, must not go negative.
    let mut remaining = policy.max_squad as isize - size as isize - 1;
    for role in Role::ALL {
        if role == player.role {
            continue;
        }
        let range = policy.role_range(role);
        let count = team.role_count(role);
        if count < range.min {
            remaining -= (range.min - count) as isize;
        }
    }
    remaining >= 0
}

/// Entry admission for a lot: the eligibility predicate plus the keeper
/// search heuristic. Used only when forming a lot's initial bidder pool.
pub(crate) fn admits_at_entry(team: &Team, player: &Player) -> bool {
    if !eligible(team, player) {
        return false;
    }
    if team.squad_size() >= KEEPER_SEARCH_SQUAD_SIZE
        && !team.has_keeper()
        && player.role != Role::WicketKeeper
    {
        return false;
    }
    true
}

// ============================================================================
// Unit Tests
// ============================================================================
