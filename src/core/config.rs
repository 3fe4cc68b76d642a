//! Match configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `AttackConfig`: One entry of a combatant's attack table
//! - `ModifierConfig`: One win-gated, use-limited modifier
//! - `CombatantConfig`: A full combatant definition
//! - `MatchConfig`: Session-wide constants (starting health)
//!
//! The engine never hardcodes attacks or modifiers - games define them.
//! All configs are plain serde-capable records, so definitions can live
//! in embedded literals or be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::modifier::{ModifierId, ModifierKind};

/// One entry of a combatant's attack table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackConfig {
    /// Lookup key used by `resolve_attack` (e.g. `"punch"`).
    pub key: String,

    /// Base damage before modifiers.
    pub damage: i64,

    /// Human-readable description (for display).
    pub description: String,
}

impl AttackConfig {
    /// Create a new attack entry.
    pub fn new(key: impl Into<String>, damage: i64, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            damage,
            description: description.into(),
        }
    }
}

/// Configuration for a single modifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierConfig {
    /// Unique identifier within the owning combatant.
    pub id: ModifierId,

    /// Offense or Defense.
    pub kind: ModifierKind,

    /// Short display label.
    pub label: String,

    /// Contribution size. Stored unsigned; the engine applies the sign
    /// (`+` for Offense, `-` for Defense) at resolution time.
    pub magnitude: i64,

    /// Longer display description.
    pub description: String,

    /// Owner win count required before the modifier unlocks.
    pub wins_required: u32,

    /// Total use budget for the session.
    pub uses: u32,
}

impl ModifierConfig {
    /// Create a new modifier configuration.
    pub fn new(
        id: ModifierId,
        kind: ModifierKind,
        label: impl Into<String>,
        magnitude: i64,
        description: impl Into<String>,
        wins_required: u32,
        uses: u32,
    ) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            magnitude,
            description: description.into(),
            wins_required,
            uses,
        }
    }
}

/// A full combatant definition: display name, attack table, modifier set.
///
/// Combatants are data, not subclasses - one `Combatant` type is
/// parameterized by this record at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantConfig {
    /// Display name (e.g. `"Cat"`).
    pub display_name: String,

    /// Attack table entries. Keys must be unique.
    pub attacks: Vec<AttackConfig>,

    /// Modifier set. Ids must be unique within this combatant.
    pub modifiers: Vec<ModifierConfig>,
}

impl CombatantConfig {
    /// Create a combatant definition with an empty attack table and
    /// modifier set.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            attacks: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// Add an attack entry.
    #[must_use]
    pub fn with_attack(mut self, attack: AttackConfig) -> Self {
        self.attacks.push(attack);
        self
    }

    /// Add a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: ModifierConfig) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// Session-wide match constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Health both combatants start with, and are reset to on a win.
    pub starting_health: i64,
}

impl MatchConfig {
    /// Create a match configuration.
    #[must_use]
    pub const fn new(starting_health: i64) -> Self {
        Self { starting_health }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
        }
    }
}
