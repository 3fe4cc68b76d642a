//! One side of the match: health, wins, attacks, and modifiers.
//!
//! ## Combatant
//!
//! A `Combatant` is built once from a `CombatantConfig` at match start
//! and mutated for the whole session (reset on a win, never recreated).
//! There is no subclassing: Cat and Human are the same type with
//! different configuration.
//!
//! ## Active modifiers
//!
//! The player arms modifiers for upcoming attacks via
//! `set_modifier_active`. The active list preserves arming order, which
//! is the order modifiers are applied and reported in. An armed modifier
//! whose use budget hits zero is treated as inactive by every read path
//! and dropped from the list during aggregation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::CombatantConfig;
use super::error::EngineError;
use super::modifier::{Modifier, ModifierId, ModifierKind};

/// One resolved attack-table entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Base damage before modifiers.
    pub damage: i64,

    /// Human-readable description (for display).
    pub description: String,
}

/// The summed result of one modifier aggregation pass.
///
/// `total` is signed: offense passes sum positive contributions, defense
/// passes sum negative ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateOutcome {
    /// One report line per applied modifier, in application order.
    pub report: String,

    /// Signed sum of all contributions.
    pub total: i64,
}

impl AggregateOutcome {
    fn empty() -> Self {
        Self {
            report: String::new(),
            total: 0,
        }
    }
}

/// One side of the match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Combatant {
    display_name: String,
    health: i64,
    win_count: u32,
    attack_table: FxHashMap<String, Attack>,
    /// Fixed at construction; modifiers are never added or removed.
    modifier_set: FxHashMap<ModifierId, Modifier>,
    /// Armed modifier ids in arming order. Always a subset of
    /// `modifier_set` keys.
    active_modifiers: SmallVec<[ModifierId; 4]>,
}

impl Combatant {
    /// Build a combatant from its configuration record.
    ///
    /// A duplicate attack key or modifier id in the config is a game
    /// definition bug and panics.
    #[must_use]
    pub fn from_config(config: CombatantConfig, starting_health: i64) -> Self {
        let mut attack_table = FxHashMap::default();
        for attack in config.attacks {
            let replaced = attack_table.insert(
                attack.key.clone(),
                Attack {
                    damage: attack.damage,
                    description: attack.description,
                },
            );
            assert!(replaced.is_none(), "Duplicate attack key `{}`", attack.key);
        }

        let mut modifier_set = FxHashMap::default();
        for modifier in config.modifiers {
            let id = modifier.id;
            let replaced = modifier_set.insert(id, Modifier::from_config(modifier));
            assert!(replaced.is_none(), "Duplicate modifier id {id}");
        }

        Self {
            display_name: config.display_name,
            health: starting_health,
            win_count: 0,
            attack_table,
            modifier_set,
            active_modifiers: SmallVec::new(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Current health. May be negative between an attack landing and the
    /// win reset; no floor is applied.
    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Number of rounds this combatant has won.
    #[must_use]
    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    /// Look up an attack-table entry.
    #[must_use]
    pub fn attack(&self, key: &str) -> Option<&Attack> {
        self.attack_table.get(key)
    }

    /// Look up an owned modifier.
    #[must_use]
    pub fn modifier(&self, id: ModifierId) -> Option<&Modifier> {
        self.modifier_set.get(&id)
    }

    /// Iterate over all owned modifiers (no particular order).
    pub fn modifiers(&self) -> impl Iterator<Item = &Modifier> {
        self.modifier_set.values()
    }

    /// Whether an owned modifier has met this combatant's win threshold
    /// and still has uses left.
    #[must_use]
    pub fn is_modifier_unlocked(&self, id: ModifierId) -> bool {
        self.modifier_set
            .get(&id)
            .is_some_and(|m| m.is_unlocked(self.win_count))
    }

    /// Whether a modifier is currently armed.
    ///
    /// An exhausted modifier still sitting in the active list reads as
    /// inactive.
    #[must_use]
    pub fn is_modifier_active(&self, id: ModifierId) -> bool {
        self.active_modifiers.contains(&id)
            && self
                .modifier_set
                .get(&id)
                .is_some_and(|m| m.uses_remaining() > 0)
    }

    /// Armed modifier ids in arming order, skipping exhausted entries.
    pub fn active_modifier_ids(&self) -> impl Iterator<Item = ModifierId> + '_ {
        self.active_modifiers
            .iter()
            .copied()
            .filter(|id| self.is_modifier_active(*id))
    }

    /// Arm or disarm a modifier for upcoming attacks.
    ///
    /// Arming an exhausted modifier is forced to a disarm regardless of
    /// the requested state. Fails with `InvalidModifierKey` (and no
    /// mutation) for an id this combatant doesn't own.
    pub fn set_modifier_active(&mut self, id: ModifierId, active: bool) -> Result<(), EngineError> {
        let modifier = self
            .modifier_set
            .get(&id)
            .ok_or_else(|| EngineError::InvalidModifierKey {
                combatant: self.display_name.clone(),
                id,
            })?;

        let effective = active && modifier.uses_remaining() > 0;
        if effective {
            if !self.active_modifiers.contains(&id) {
                self.active_modifiers.push(id);
            }
        } else {
            self.active_modifiers.retain(|armed| *armed != id);
        }
        Ok(())
    }

    /// Apply every armed modifier of the given kind, in arming order.
    ///
    /// Each applied modifier consumes one use and contributes one report
    /// line; modifiers exhausted by this pass are dropped from the
    /// active list. Locked modifiers contribute nothing and keep their
    /// uses. Not idempotent: every call consumes uses again.
    pub fn aggregate_modifiers(&mut self, kind: ModifierKind) -> AggregateOutcome {
        let win_count = self.win_count;
        let mut outcome = AggregateOutcome::empty();
        let mut exhausted: SmallVec<[ModifierId; 4]> = SmallVec::new();

        for &id in &self.active_modifiers {
            let Some(modifier) = self.modifier_set.get_mut(&id) else {
                continue;
            };
            let Some(contribution) = modifier.try_apply(win_count, kind) else {
                continue;
            };

            outcome.total += contribution;
            if !outcome.report.is_empty() {
                outcome.report.push('\n');
            }
            outcome.report.push_str(&modifier.report_line());

            if modifier.uses_remaining() == 0 {
                exhausted.push(id);
            }
        }

        self.active_modifiers.retain(|id| !exhausted.contains(id));
        outcome
    }

    /// Subtract damage from health and return the new value. Negative
    /// `amount` heals; no floor or ceiling is applied.
    pub fn apply_damage(&mut self, amount: i64) -> i64 {
        self.health -= amount;
        self.health
    }

    /// Record a round win.
    pub fn record_win(&mut self) {
        self.win_count += 1;
    }

    /// Set health to the given value (used for both sides on a win).
    pub fn reset_health(&mut self, value: i64) {
        self.health = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AttackConfig, ModifierConfig};

    fn test_combatant() -> Combatant {
        let config = CombatantConfig::new("Cat")
            .with_attack(AttackConfig::new("scratch", 3, "A quick scratch."))
            .with_attack(AttackConfig::new("pounce", 7, "A leaping pounce."))
            .with_modifier(ModifierConfig::new(
                ModifierId::new(0),
                ModifierKind::Offense,
                "Catnip Rage",
                5,
                "Sharper claws.",
                0,
                2,
            ))
            .with_modifier(ModifierConfig::new(
                ModifierId::new(1),
                ModifierKind::Defense,
                "Thick Fur",
                3,
                "Softens the blow.",
                1,
                2,
            ));
        Combatant::from_config(config, 100)
    }

    #[test]
    fn test_from_config() {
        let combatant = test_combatant();
        assert_eq!(combatant.display_name(), "Cat");
        assert_eq!(combatant.health(), 100);
        assert_eq!(combatant.win_count(), 0);
        assert_eq!(combatant.attack("scratch").unwrap().damage, 3);
        assert!(combatant.attack("headbutt").is_none());
        assert_eq!(combatant.modifiers().count(), 2);
    }

    #[test]
    fn test_set_modifier_active_unknown_id() {
        let mut combatant = test_combatant();
        let err = combatant
            .set_modifier_active(ModifierId::new(9), true)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidModifierKey {
                combatant: "Cat".to_string(),
                id: ModifierId::new(9),
            }
        );
    }

    #[test]
    fn test_set_modifier_active_no_duplicates() {
        let mut combatant = test_combatant();
        combatant.set_modifier_active(ModifierId::new(0), true).unwrap();
        combatant.set_modifier_active(ModifierId::new(0), true).unwrap();
        assert_eq!(combatant.active_modifier_ids().count(), 1);
    }

    #[test]
    fn test_aggregate_offense_in_arming_order() {
        let mut combatant = test_combatant();
        combatant.set_modifier_active(ModifierId::new(0), true).unwrap();

        let outcome = combatant.aggregate_modifiers(ModifierKind::Offense);
        assert_eq!(outcome.total, 5);
        assert!(outcome.report.contains("Catnip Rage"));
    }

    #[test]
    fn test_aggregate_skips_locked_modifier() {
        let mut combatant = test_combatant();
        // Thick Fur needs 1 win; combatant has none.
        combatant.set_modifier_active(ModifierId::new(1), true).unwrap();

        let outcome = combatant.aggregate_modifiers(ModifierKind::Defense);
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.report, "");
        assert_eq!(
            combatant.modifier(ModifierId::new(1)).unwrap().uses_remaining(),
            2
        );
    }

    #[test]
    fn test_aggregate_drops_exhausted_modifier() {
        let mut combatant = test_combatant();
        combatant.set_modifier_active(ModifierId::new(0), true).unwrap();

        // Two uses in the budget: consume both.
        assert_eq!(combatant.aggregate_modifiers(ModifierKind::Offense).total, 5);
        assert_eq!(combatant.aggregate_modifiers(ModifierKind::Offense).total, 5);

        // Exhausted: forced inactive and contributes nothing.
        assert!(!combatant.is_modifier_active(ModifierId::new(0)));
        assert_eq!(combatant.aggregate_modifiers(ModifierKind::Offense).total, 0);
    }

    #[test]
    fn test_rearming_exhausted_modifier_is_forced_off() {
        let mut combatant = test_combatant();
        combatant.set_modifier_active(ModifierId::new(0), true).unwrap();
        combatant.aggregate_modifiers(ModifierKind::Offense);
        combatant.aggregate_modifiers(ModifierKind::Offense);

        combatant.set_modifier_active(ModifierId::new(0), true).unwrap();
        assert!(!combatant.is_modifier_active(ModifierId::new(0)));
        assert_eq!(combatant.active_modifier_ids().count(), 0);
    }

    #[test]
    fn test_apply_damage_no_floor() {
        let mut combatant = test_combatant();
        assert_eq!(combatant.apply_damage(30), 70);
        assert_eq!(combatant.apply_damage(80), -10);
        assert_eq!(combatant.health(), -10);
    }

    #[test]
    fn test_record_win_and_reset_health() {
        let mut combatant = test_combatant();
        combatant.apply_damage(120);
        combatant.record_win();
        combatant.reset_health(100);

        assert_eq!(combatant.win_count(), 1);
        assert_eq!(combatant.health(), 100);
    }

    #[test]
    fn test_win_unlocks_gated_modifier() {
        let mut combatant = test_combatant();
        combatant.set_modifier_active(ModifierId::new(1), true).unwrap();
        assert!(!combatant.is_modifier_unlocked(ModifierId::new(1)));

        combatant.record_win();
        assert!(combatant.is_modifier_unlocked(ModifierId::new(1)));

        let outcome = combatant.aggregate_modifiers(ModifierKind::Defense);
        assert_eq!(outcome.total, -3);
        assert!(outcome.report.contains("Thick Fur"));
    }
}
