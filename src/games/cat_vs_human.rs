//! The canonical Cat-vs-Human duel.
//!
//! The reference game the engine was built for: two combatants, each
//! with a three-attack table and one Offense plus one Defense modifier.
//! Everything here is configuration data - the engine itself knows
//! nothing about cats.

use crate::core::config::{AttackConfig, CombatantConfig, MatchConfig, ModifierConfig};
use crate::core::modifier::{ModifierId, ModifierKind};
use crate::core::side::Side;
use crate::rules::resolver::MatchState;

/// Modifier ids for one side of the duel.
#[derive(Clone, Copy, Debug)]
pub struct SideModifiers {
    /// The side's Offense modifier.
    pub offense: ModifierId,
    /// The side's Defense modifier.
    pub defense: ModifierId,
}

/// Handles into the canonical duel: which side is which, and each
/// side's modifier ids.
#[derive(Clone, Copy, Debug)]
pub struct CatVsHuman {
    pub cat: Side,
    pub human: Side,
    pub cat_modifiers: SideModifiers,
    pub human_modifiers: SideModifiers,
}

impl CatVsHuman {
    /// Build the canonical duel and its initial state.
    ///
    /// Both sides start at 100 health with zero wins and nothing armed.
    #[must_use]
    pub fn build() -> (CatVsHuman, MatchState) {
        let cat_modifiers = SideModifiers {
            offense: ModifierId::new(0),
            defense: ModifierId::new(1),
        };
        let human_modifiers = SideModifiers {
            offense: ModifierId::new(0),
            defense: ModifierId::new(1),
        };

        let cat = CombatantConfig::new("Cat")
            .with_attack(AttackConfig::new("scratch", 3, "The cat rakes with its claws!"))
            .with_attack(AttackConfig::new("pounce", 7, "The cat pounces from above!"))
            .with_attack(AttackConfig::new("bite", 10, "The cat bites down hard!"))
            .with_modifier(ModifierConfig::new(
                cat_modifiers.offense,
                ModifierKind::Offense,
                "Catnip Rage",
                5,
                "Catnip-fueled fury sharpens every strike.",
                0,
                3,
            ))
            .with_modifier(ModifierConfig::new(
                cat_modifiers.defense,
                ModifierKind::Defense,
                "Thick Fur",
                3,
                "A dense coat softens incoming blows.",
                1,
                2,
            ));

        let human = CombatantConfig::new("Human")
            .with_attack(AttackConfig::new("slap", 1, "An open-handed slap!"))
            .with_attack(AttackConfig::new("punch", 5, "A solid punch!"))
            .with_attack(AttackConfig::new("kick", 10, "A heavy kick!"))
            .with_modifier(ModifierConfig::new(
                human_modifiers.offense,
                ModifierKind::Offense,
                "Adrenaline",
                4,
                "An adrenaline surge puts weight behind the hit.",
                0,
                3,
            ))
            .with_modifier(ModifierConfig::new(
                human_modifiers.defense,
                ModifierKind::Defense,
                "Riot Shield",
                6,
                "A raised shield absorbs most of the impact.",
                2,
                1,
            ));

        let handles = CatVsHuman {
            cat: Side::First,
            human: Side::Second,
            cat_modifiers,
            human_modifiers,
        };
        let state = MatchState::new(MatchConfig::default(), cat, human);
        (handles, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_initial_state() {
        let (game, state) = CatVsHuman::build();

        assert_eq!(state.starting_health(), 100);
        assert_eq!(state.combatant(game.cat).display_name(), "Cat");
        assert_eq!(state.combatant(game.human).display_name(), "Human");

        for side in Side::both() {
            assert_eq!(state.combatant(side).health(), 100);
            assert_eq!(state.combatant(side).win_count(), 0);
            assert_eq!(state.combatant(side).active_modifier_ids().count(), 0);
        }
    }

    #[test]
    fn test_human_attack_table() {
        let (game, state) = CatVsHuman::build();
        let human = state.combatant(game.human);

        assert_eq!(human.attack("slap").unwrap().damage, 1);
        assert_eq!(human.attack("punch").unwrap().damage, 5);
        assert_eq!(human.attack("kick").unwrap().damage, 10);
    }

    #[test]
    fn test_gated_modifiers_start_locked() {
        let (game, state) = CatVsHuman::build();

        let fur = state
            .combatant(game.cat)
            .modifier(game.cat_modifiers.defense)
            .unwrap();
        assert!(!fur.is_unlocked(0));
        assert!(fur.is_unlocked(1));

        let shield = state
            .combatant(game.human)
            .modifier(game.human_modifiers.defense)
            .unwrap();
        assert!(!shield.is_unlocked(1));
        assert!(shield.is_unlocked(2));
    }
}
