//! Bid increment schedule.
//!
//! A pure step function of the current price, used to compute the next ask.
//! All amounts are in crores. Deterministic, no randomness.

use crate::types::Money;

/// The increment added to `price` when a team raises.
///
/// | Current price | Increment |
/// |---------------|-----------|
/// | ≤ 1.0         | 0.05      |
/// | (1.0, 2.0]    | 0.10      |
/// | (2.0, 3.0]    | 0.10      |
/// | (3.0, 5.0]    | 0.20      |
/// | (5.0, 10.0]   | 0.20      |
/// | > 10.0        | 0.50      |
///
/// # Example
///
/// ```
/// use auction_core::engine::bid_increment;
/// use auction_core::types::Money;
///
/// assert_eq!(bid_increment(Money::from_major(1)), Money::new(5, 2));
/// assert_eq!(bid_increment(Money::parse("7.5").unwrap()), Money::new(20, 2));
/// ```
pub fn bid_increment(price: Money) -> Money {
    if price <= Money::from_major(1) {
        Money::new(5, 2)
    } else if price <= Money::from_major(2) {
        Money::new(10, 2)
    } else if price <= Money::from_major(3) {
        Money::new(10, 2)
    } else if price <= Money::from_major(5) {
        Money::new(20, 2)
    } else if price <= Money::from_major(10) {
        Money::new(20, 2)
    } else {
        Money::new(50, 2)
    }
}

/// The next ask: current price plus its increment, rounded to two places.
#[inline]
pub fn next_ask(price: Money) -> Money {
    (price + bid_increment(price)).round2()
}

// ============================================================================
// Unit Tests
// ============================================================================
