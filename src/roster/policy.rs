//! Squad composition policy.
//!
//! A [`SquadPolicy`] is fixed per team at setup: roster size bounds,
//! overseas and uncapped allowances, and a closed min/max range per role.
//! The eligibility filter and the valuation urgency factor both read these
//! ranges; nothing mutates them after construction.

use crate::types::Role;

/// Closed min/max range for one role's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRange {
    pub min: usize,
    pub max: usize,
}

impl RoleRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Capacity policy for one team. Invariant over the whole auction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadPolicy {
    /// Hard roster ceiling; eligibility fails at this size.
    pub max_squad: usize,

    /// Target minimum roster size.
    pub min_squad: usize,

    /// Maximum players whose nationality differs from `home_nation`.
    pub max_overseas: usize,

    /// Target minimum overseas count.
    pub min_overseas: usize,

    /// Maximum uncapped players. Configured for parity with league rules,
    /// but not enforced by the eligibility filter.
    pub max_uncapped: usize,

    /// Nationality that does NOT count against the overseas allowance.
    pub home_nation: String,

    pub batters: RoleRange,
    pub bowlers: RoleRange,
    pub all_rounders: RoleRange,
    pub keepers: RoleRange,
}

impl SquadPolicy {
    /// The role range governing `role`.
    pub fn role_range(&self, role: Role) -> RoleRange {
        match role {
            Role::Batter => self.batters,
            Role::Bowler => self.bowlers,
            Role::AllRounder => self.all_rounders,
            Role::WicketKeeper => self.keepers,
        }
    }
}

impl Default for SquadPolicy {
    /// Standard franchise policy: 25-player squad, 8 overseas slots,
    /// 6-8 batters, 6-8 bowlers, 3-6 all-rounders, 1-3 keepers.
    fn default() -> Self {
        Self {
            max_squad: 25,
            min_squad: 18,
            max_overseas: 8,
            min_overseas: 6,
            max_uncapped: 4,
            home_nation: "India".to_string(),
            batters: RoleRange::new(6, 8),
            bowlers: RoleRange::new(6, 8),
            all_rounders: RoleRange::new(3, 6),
            keepers: RoleRange::new(1, 3),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = SquadPolicy::default();

        assert_eq!(policy.max_squad, 25);
        assert_eq!(policy.max_overseas, 8);
        assert_eq!(policy.home_nation, "India");
        assert_eq!(policy.role_range(Role::Batter), RoleRange::new(6, 8));
        assert_eq!(policy.role_range(Role::WicketKeeper), RoleRange::new(1, 3));
    }

    #[test]
    fn test_role_range_lookup() {
        let policy = SquadPolicy {
            all_rounders: RoleRange::new(2, 4),
            ..SquadPolicy::default()
        };

        assert_eq!(policy.role_range(Role::AllRounder), RoleRange::new(2, 4));
        assert_eq!(policy.role_range(Role::Bowler), RoleRange::new(6, 8));
    }

    #[test]
    fn test_minimums_fit_in_squad() {
        // The default policy's summed role minimums must be reachable
        // within the squad ceiling, or no roster could ever be legal.
        let policy = SquadPolicy::default();
        let summed_min: usize = Role::ALL.iter().map(|&r| policy.role_range(r).min).sum();
        assert!(summed_min <= policy.max_squad);
    }
}
