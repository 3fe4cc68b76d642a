//! Combat modifiers: win-gated, use-limited offense/defense adjustments.
//!
//! ## Lifecycle
//!
//! A modifier is constructed once at combatant creation and lives for the
//! whole session. It moves through these states:
//!
//! `Locked` → `Unlocked` (win threshold met) → armed by the player →
//! consumed one use per resolved attack → `Exhausted` (zero uses left,
//! forced inactive).
//!
//! `Exhausted` is terminal; there is no transition back to `Locked`.
//!
//! `try_apply` is the only mutator of the use count. The count only ever
//! decreases and never goes below zero.

use serde::{Deserialize, Serialize};

use super::config::ModifierConfig;

/// Modifier identifier, stable for the whole session.
///
/// Games assign these when building a `CombatantConfig`; the engine
/// doesn't interpret them beyond map lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierId(pub u16);

impl ModifierId {
    /// Create a new modifier ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ModifierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Modifier({})", self.0)
    }
}

/// Which half of an attack resolution a modifier participates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Contributes `+magnitude` to the attacker's damage.
    Offense,
    /// Contributes `-magnitude` against incoming damage.
    Defense,
}

impl std::fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModifierKind::Offense => write!(f, "Offense"),
            ModifierKind::Defense => write!(f, "Defense"),
        }
    }
}

/// A single combat modifier owned by one combatant.
///
/// Unlocking is gated on the owner's win count; every application consumes
/// one use from a finite budget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    id: ModifierId,
    kind: ModifierKind,
    label: String,
    magnitude: i64,
    description: String,
    wins_required: u32,
    uses_remaining: u32,
}

impl Modifier {
    /// Build a modifier from its configuration record.
    #[must_use]
    pub fn from_config(config: ModifierConfig) -> Self {
        Self {
            id: config.id,
            kind: config.kind,
            label: config.label,
            magnitude: config.magnitude,
            description: config.description,
            wins_required: config.wins_required,
            uses_remaining: config.uses,
        }
    }

    /// Stable identifier of this modifier.
    #[must_use]
    pub fn id(&self) -> ModifierId {
        self.id
    }

    /// Offense or Defense.
    #[must_use]
    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    /// Short display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Contribution size (unsigned; sign is applied by `try_apply`).
    #[must_use]
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// Longer display description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Owner win count needed before this modifier can apply.
    #[must_use]
    pub fn wins_required(&self) -> u32 {
        self.wins_required
    }

    /// Uses left in the budget.
    #[must_use]
    pub fn uses_remaining(&self) -> u32 {
        self.uses_remaining
    }

    /// Whether the modifier can currently contribute: the owner has met
    /// the win threshold and the use budget is not exhausted.
    #[must_use]
    pub fn is_unlocked(&self, win_count: u32) -> bool {
        win_count >= self.wins_required && self.uses_remaining > 0
    }

    /// Attempt to apply this modifier to an attack resolution.
    ///
    /// Returns `None` (and mutates nothing) when `match_kind` doesn't
    /// match this modifier's kind or the modifier is locked/exhausted.
    /// Otherwise consumes exactly one use and returns the signed
    /// contribution: `+magnitude` for Offense, `-magnitude` for Defense.
    ///
    /// This is the only mutator of the use count. Each applying call
    /// consumes a use; there is no preview mode.
    pub fn try_apply(&mut self, win_count: u32, match_kind: ModifierKind) -> Option<i64> {
        if self.kind != match_kind || !self.is_unlocked(win_count) {
            return None;
        }

        self.uses_remaining -= 1;

        let contribution = match self.kind {
            ModifierKind::Offense => self.magnitude,
            ModifierKind::Defense => -self.magnitude,
        };
        Some(contribution)
    }

    /// One human-readable report line for an applied modifier.
    #[must_use]
    pub fn report_line(&self) -> String {
        let sign = match self.kind {
            ModifierKind::Offense => '+',
            ModifierKind::Defense => '-',
        };
        format!("{} ({}{} damage): {}", self.label, sign, self.magnitude, self.description)
    }
}
