//! Attack resolution: the match engine.
//!
//! `resolve_attack` runs one round of the duel, in order:
//!
//! 1. Look up the attack in the attacker's table (`InvalidAttackKey`
//!    aborts with no mutation).
//! 2. Aggregate the attacker's armed Offense modifiers.
//! 3. Aggregate the defender's armed Defense modifiers.
//! 4. Sum base damage and both totals. Defense contributions are already
//!    negative, so this is addition, not subtraction.
//! 5. Apply the total to the defender's health.
//! 6. On a win (new health <= 0, exact zero included): increment the
//!    attacker's win count and reset both healths to the starting value.
//!
//! Resolution is synchronous and runs to completion; there are no
//! suspension points and no partial outcomes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::combatant::Combatant;
use crate::core::config::{CombatantConfig, MatchConfig};
use crate::core::error::EngineError;
use crate::core::modifier::{ModifierId, ModifierKind};
use crate::core::side::Side;

/// The winning side of a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// Which side won.
    pub side: Side,

    /// The winner's display name.
    pub display_name: String,
}

/// Plain data record describing one resolved attack.
///
/// Everything the presentation layer needs to render the round; the
/// engine produces no markup of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    /// Description of the attack that landed.
    pub attack_description: String,

    /// One line per applied attacker Offense modifier, in arming order.
    pub offense_report: String,

    /// One line per applied defender Defense modifier, in arming order.
    pub defense_report: String,

    /// Signed total damage dealt (base + offense + defense).
    pub total_damage: i64,

    /// Defender health after the attack. Negative when the round was won
    /// with overkill; the healths themselves are already reset in that
    /// case.
    pub defender_health_after: i64,

    /// The winner, if this attack ended the round.
    pub winner: Option<Winner>,
}

/// One duel session: both combatants plus the session constants.
///
/// There are no ambient globals - every resolution goes through a
/// `MatchState` the caller owns. Single-threaded by construction: each
/// `resolve_attack` call mutates state atomically before returning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    combatants: [Combatant; 2],
    starting_health: i64,
}

impl MatchState {
    /// Build a match from session constants and two combatant
    /// definitions. Both sides start at full health with zero wins.
    #[must_use]
    pub fn new(config: MatchConfig, first: CombatantConfig, second: CombatantConfig) -> Self {
        Self {
            combatants: [
                Combatant::from_config(first, config.starting_health),
                Combatant::from_config(second, config.starting_health),
            ],
            starting_health: config.starting_health,
        }
    }

    /// Health both combatants start with and are reset to on a win.
    #[must_use]
    pub fn starting_health(&self) -> i64 {
        self.starting_health
    }

    /// Get one side's combatant.
    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// Get one side's combatant mutably.
    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    /// Arm or disarm one side's modifier (the checkbox toggle).
    ///
    /// See [`Combatant::set_modifier_active`] for the gating rules.
    pub fn set_modifier_active(
        &mut self,
        side: Side,
        id: ModifierId,
        active: bool,
    ) -> Result<(), EngineError> {
        self.combatant_mut(side).set_modifier_active(id, active)
    }

    /// Borrow the attacking and defending combatants simultaneously.
    fn sides_mut(&mut self, attacker: Side) -> (&mut Combatant, &mut Combatant) {
        let [first, second] = &mut self.combatants;
        match attacker {
            Side::First => (first, second),
            Side::Second => (second, first),
        }
    }

    /// Resolve one attack by `attacker` against the opposing side.
    ///
    /// Applies armed modifiers on both sides (consuming uses), deals the
    /// damage, and handles win detection and the health reset. Every
    /// call consumes modifier uses again; there is no preview mode.
    ///
    /// Fails with `InvalidAttackKey`, before any mutation, when the key
    /// is not in the attacker's table.
    pub fn resolve_attack(
        &mut self,
        attacker: Side,
        attack_key: &str,
    ) -> Result<AttackResult, EngineError> {
        let starting_health = self.starting_health;
        let (attacker_side, defender_side) = self.sides_mut(attacker);

        let attack = attacker_side
            .attack(attack_key)
            .cloned()
            .ok_or_else(|| EngineError::InvalidAttackKey {
                combatant: attacker_side.display_name().to_string(),
                key: attack_key.to_string(),
            })?;

        let offense = attacker_side.aggregate_modifiers(ModifierKind::Offense);
        let defense = defender_side.aggregate_modifiers(ModifierKind::Defense);

        // Defense totals are negative by construction; keep the sign
        // convention and add.
        let total_damage = attack.damage + offense.total + defense.total;
        let defender_health_after = defender_side.apply_damage(total_damage);

        debug!(
            attacker = attacker_side.display_name(),
            defender = defender_side.display_name(),
            attack = attack_key,
            base_damage = attack.damage,
            offense = offense.total,
            defense = defense.total,
            total_damage,
            defender_health_after,
            "attack resolved"
        );

        // Exact zero is a win.
        let winner = if defender_health_after <= 0 {
            attacker_side.record_win();
            attacker_side.reset_health(starting_health);
            defender_side.reset_health(starting_health);

            info!(
                winner = attacker_side.display_name(),
                win_count = attacker_side.win_count(),
                "round won"
            );

            Some(Winner {
                side: attacker,
                display_name: attacker_side.display_name().to_string(),
            })
        } else {
            None
        };

        Ok(AttackResult {
            attack_description: attack.description,
            offense_report: offense.report,
            defense_report: defense.report,
            total_damage,
            defender_health_after,
            winner,
        })
    }
}
