//! Bidder state: purse, squad, and composition counts.
//!
//! ## Ownership
//!
//! Each [`Team`] exclusively owns its remaining purse and acquired squad.
//! Both are mutated in exactly one place, [`Team::acquire`], which is the
//! finalizing commit of the bidding state machine; everything else reads.
//! Starting rosters (retained players) are explicit constructor input, never
//! ambient state.
//!
//! ## Invariants
//!
//! - purse ≥ 0 at all times (enforced at construction, preserved because a
//!   lot only finalizes when the hammer price fits the purse);
//! - squad size ≤ `policy.max_squad` (enforced at construction, preserved
//!   by the eligibility filter).

use crate::error::{Result, SetupError};
use crate::roster::SquadPolicy;
use crate::types::{Money, Player, Role};

/// One bidding team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    purse: Money,
    squad: Vec<Player>,
    policy: SquadPolicy,
}

impl Team {
    /// Create a team from its starting purse and retained roster.
    ///
    /// Rejects configurations that would break downstream invariants:
    /// a negative purse or a retained roster already over the squad limit.
    ///
    /// # Example
    ///
    /// ```
    /// use auction_core::roster::{SquadPolicy, Team};
    /// use auction_core::types::Money;
    ///
    /// let team = Team::new("Titans", Money::from_major(120), Vec::new(), SquadPolicy::default())
    ///     .unwrap();
    /// assert_eq!(team.purse(), Money::from_major(120));
    /// assert_eq!(team.squad_size(), 0);
    /// ```
    pub fn new(
        name: impl Into<String>,
        purse: Money,
        retained: Vec<Player>,
        policy: SquadPolicy,
    ) -> Result<Self> {
        let name = name.into();

        if purse.is_negative() {
            return Err(SetupError::NegativePurse { team: name, purse });
        }
        if retained.len() > policy.max_squad {
            return Err(SetupError::SquadOverCapacity {
                team: name,
                size: retained.len(),
                max: policy.max_squad,
            });
        }

        Ok(Self {
            name,
            purse,
            squad: retained,
            policy,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn purse(&self) -> Money {
        self.purse
    }

    #[inline]
    pub fn squad(&self) -> &[Player] {
        &self.squad
    }

    #[inline]
    pub fn policy(&self) -> &SquadPolicy {
        &self.policy
    }

    #[inline]
    pub fn squad_size(&self) -> usize {
        self.squad.len()
    }

    // ========================================================================
    // Composition counts
    // ========================================================================

    /// Current count of squad players in `role`.
    pub fn role_count(&self, role: Role) -> usize {
        self.squad.iter().filter(|p| p.role == role).count()
    }

    /// Whether `player` counts against this team's overseas allowance.
    #[inline]
    pub fn is_overseas(&self, player: &Player) -> bool {
        player.nationality != self.policy.home_nation
    }

    /// Current count of overseas squad players.
    pub fn overseas_count(&self) -> usize {
        self.squad.iter().filter(|p| self.is_overseas(p)).count()
    }

    /// Current count of uncapped squad players.
    pub fn uncapped_count(&self) -> usize {
        self.squad.iter().filter(|p| p.is_uncapped()).count()
    }

    pub fn has_keeper(&self) -> bool {
        self.squad.iter().any(|p| p.role == Role::WicketKeeper)
    }

    // ========================================================================
    // Commit
    // ========================================================================

    /// Commit a won lot: append the player and debit the purse.
    ///
    /// Crate-private so only the finalizing transition of the bidding state
    /// machine can mutate team state.
    pub(crate) fn acquire(&mut self, player: Player, price: Money) {
        debug_assert!(price <= self.purse, "commit would overdraw purse");
        debug_assert!(
            self.squad.len() < self.policy.max_squad,
            "commit would overfill squad"
        );
        self.squad.push(player);
        self.purse -= price;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn domestic(name: &str, role: Role) -> Player {
        Player::new(name, role, "India", Money::from_major(1), 26)
    }

    fn overseas(name: &str, role: Role) -> Player {
        Player::new(name, role, "Australia", Money::from_major(1), 26).with_caps(20, 50, 30)
    }

    #[test]
    fn test_new_team() {
        let team = Team::new(
            "Titans",
            Money::from_major(120),
            vec![domestic("A", Role::Batter)],
            SquadPolicy::default(),
        )
        .unwrap();

        assert_eq!(team.name(), "Titans");
        assert_eq!(team.purse(), Money::from_major(120));
        assert_eq!(team.squad_size(), 1);
    }

    #[test]
    fn test_negative_purse_rejected() {
        let err = Team::new(
            "Titans",
            Money::parse("-0.5").unwrap(),
            Vec::new(),
            SquadPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(err, SetupError::NegativePurse { .. }));
    }

    #[test]
    fn test_oversized_roster_rejected() {
        let policy = SquadPolicy {
            max_squad: 2,
            ..SquadPolicy::default()
        };
        let retained = vec![
            domestic("A", Role::Batter),
            domestic("B", Role::Bowler),
            domestic("C", Role::Bowler),
        ];

        let err = Team::new("Titans", Money::from_major(10), retained, policy).unwrap_err();
        assert!(matches!(
            err,
            SetupError::SquadOverCapacity { size: 3, max: 2, .. }
        ));
    }

    #[test]
    fn test_composition_counts() {
        let retained = vec![
            domestic("A", Role::Batter),
            domestic("B", Role::Batter),
            overseas("C", Role::Bowler),
            domestic("D", Role::WicketKeeper),
        ];
        let team = Team::new(
            "Royals",
            Money::from_major(80),
            retained,
            SquadPolicy::default(),
        )
        .unwrap();

        assert_eq!(team.role_count(Role::Batter), 2);
        assert_eq!(team.role_count(Role::Bowler), 1);
        assert_eq!(team.role_count(Role::AllRounder), 0);
        assert_eq!(team.overseas_count(), 1);
        assert_eq!(team.uncapped_count(), 3);
        assert!(team.has_keeper());
    }

    #[test]
    fn test_acquire_debits_and_appends() {
        let mut team = Team::new(
            "Royals",
            Money::from_major(50),
            Vec::new(),
            SquadPolicy::default(),
        )
        .unwrap();

        team.acquire(overseas("C", Role::Bowler), Money::parse("6.40").unwrap());

        assert_eq!(team.squad_size(), 1);
        assert_eq!(team.purse(), Money::parse("43.60").unwrap());
        assert_eq!(team.overseas_count(), 1);
    }
}
