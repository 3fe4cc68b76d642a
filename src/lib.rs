//! # duel-engine
//!
//! A data-driven attack/modifier resolution engine for two-sided
//! turn-based duels.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded combatants, attacks, or
//!    modifiers. Games supply these as configuration at startup.
//!
//! 2. **Configuration Over Convention**: One `Combatant` type
//!    parameterized by `CombatantConfig` - no subclassing per side.
//!
//! 3. **Engine/Presentation Split**: The engine mutates state and
//!    returns plain data records (`AttackResult`). Rendering, layout,
//!    and animation timing belong to the caller.
//!
//! 4. **No Ambient Globals**: A `MatchState` session object owns both
//!    combatants; every resolution goes through it.
//!
//! ## Architecture
//!
//! Attacks resolve synchronously and atomically: base damage plus armed
//! Offense modifiers on the attacker and armed Defense modifiers on the
//! defender (defense contributions are negative by construction).
//! Modifiers unlock at win-count thresholds and consume one use per
//! applied resolution; an exhausted modifier is forced inactive.
//! A round is won when the defender's health reaches zero or below;
//! both healths then reset to the starting value.
//!
//! ## Modules
//!
//! - `core`: Sides, modifiers, combatants, configuration, errors
//! - `rules`: `MatchState` and attack resolution
//! - `games`: Ready-made game definitions (the Cat-vs-Human duel)

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    AggregateOutcome, Attack, AttackConfig, Combatant, CombatantConfig, EngineError, MatchConfig,
    Modifier, ModifierConfig, ModifierId, ModifierKind, Side,
};

pub use crate::rules::{AttackResult, MatchState, Winner};

pub use crate::games::cat_vs_human::CatVsHuman;
