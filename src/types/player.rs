//! Player catalog types.
//!
//! A [`Player`] is immutable once loaded: the engine only ever reads these
//! fields. Catalog loading itself (CSV parsing and so on) lives outside the
//! core; this module just defines the shape the loader must produce, plus
//! the tolerant [`Role`] parser for the inconsistent spellings tabular
//! sources tend to carry.

use std::fmt;

use crate::types::Money;

// ============================================================================
// Role enum
// ============================================================================

/// Playing role, the category quotas are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Batter,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl Role {
    /// All roles, in quota-checking order.
    pub const ALL: [Role; 4] = [
        Role::Batter,
        Role::Bowler,
        Role::AllRounder,
        Role::WicketKeeper,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Batter => "Batter",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
            Role::WicketKeeper => "Wicket-keeper",
        }
    }

    /// Parse a role from a catalog string.
    ///
    /// Sources spell categories inconsistently ("BATTER", "Batsman",
    /// "Wicket-keeper", "ALL-ROUNDER", ...). Matching ignores case and
    /// punctuation, then falls back to a substring match. A string with no
    /// match at all defaults to [`Role::AllRounder`] with a surfaced
    /// warning; processing continues.
    ///
    /// # Example
    ///
    /// ```
    /// use auction_core::types::Role;
    ///
    /// assert_eq!(Role::parse("Wicket-keeper"), Role::WicketKeeper);
    /// assert_eq!(Role::parse("BATTER"), Role::Batter);
    /// assert_eq!(Role::parse("batsman"), Role::Batter);
    /// ```
    pub fn parse(raw: &str) -> Role {
        let folded: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match folded.as_str() {
            "batter" | "batsman" => return Role::Batter,
            "bowler" => return Role::Bowler,
            "allrounder" => return Role::AllRounder,
            "wicketkeeper" | "keeper" | "wk" => return Role::WicketKeeper,
            _ => {}
        }

        // Nearest match: any role token contained in the input.
        let candidates = [
            (Role::WicketKeeper, "keeper"),
            (Role::AllRounder, "rounder"),
            (Role::Batter, "bat"),
            (Role::Bowler, "bowl"),
        ];
        for (role, token) in candidates {
            if folded.contains(token) {
                return role;
            }
        }

        log::warn!("unknown role '{}', defaulting to All-rounder", raw);
        Role::AllRounder
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Player struct
// ============================================================================

/// One auctionable player. Immutable once loaded.
///
/// ## Example
///
/// ```
/// use auction_core::types::{Money, Player, Role};
///
/// let player = Player::new("V Sharma", Role::Batter, "India", Money::from_major(2), 24)
///     .with_caps(5, 30, 40)
///     .with_appearances(60)
///     .with_set_code("BA1");
///
/// assert_eq!(player.total_caps(), 75);
/// assert!(!player.is_uncapped());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// Playing role (category quotas are keyed on this).
    pub role: Role,

    /// Country; compared against a policy's home nation for overseas quotas.
    pub nationality: String,

    /// Auction starting price, non-negative.
    pub base_price: Money,

    /// Age in years.
    pub age: u8,

    /// Test-format international caps.
    pub test_caps: u32,

    /// ODI-format international caps.
    pub odi_caps: u32,

    /// T20-format international caps.
    pub t20_caps: u32,

    /// Cumulative league appearance count across prior seasons.
    pub league_appearances: u32,

    /// Franchise the player belonged to last season, if any.
    pub last_team: Option<String>,

    /// Whether the player was active in the most recent season.
    pub active_last_season: bool,

    /// Auction set code (e.g. "M1", "AL3", "UWK2"); drives sequencing.
    pub set_code: Option<String>,
}

impl Player {
    /// Create a player with the required attributes; experience fields
    /// default to empty and are filled in with the `with_*` builders.
    pub fn new(
        name: impl Into<String>,
        role: Role,
        nationality: impl Into<String>,
        base_price: Money,
        age: u8,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            nationality: nationality.into(),
            base_price,
            age,
            test_caps: 0,
            odi_caps: 0,
            t20_caps: 0,
            league_appearances: 0,
            last_team: None,
            active_last_season: false,
            set_code: None,
        }
    }

    pub fn with_caps(mut self, test: u32, odi: u32, t20: u32) -> Self {
        self.test_caps = test;
        self.odi_caps = odi;
        self.t20_caps = t20;
        self
    }

    pub fn with_appearances(mut self, appearances: u32) -> Self {
        self.league_appearances = appearances;
        self
    }

    pub fn with_last_team(mut self, team: impl Into<String>) -> Self {
        self.last_team = Some(team.into());
        self.active_last_season = true;
        self
    }

    pub fn with_set_code(mut self, code: impl Into<String>) -> Self {
        self.set_code = Some(code.into());
        self
    }

    /// Total international caps across all three formats.
    #[inline]
    pub fn total_caps(&self) -> u32 {
        self.test_caps + self.odi_caps + self.t20_caps
    }

    /// A player with zero caps in every format is uncapped.
    #[inline]
    pub fn is_uncapped(&self) -> bool {
        self.total_caps() == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
