//! Side identification for a two-sided match.
//!
//! A duel always has exactly two combatants. `Side` is the typed index
//! that addresses one of them; the other is always `opponent()`.

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
///
/// `Side::First` is the combatant supplied first at match construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the 0-based index of this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Get the opposing side.
    ///
    /// ```
    /// use duel_engine::core::Side;
    ///
    /// assert_eq!(Side::First.opponent(), Side::Second);
    /// assert_eq!(Side::Second.opponent(), Side::First);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Iterate over both sides, first side first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::First, Side::Second].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Side {}", self.index())
    }
}
