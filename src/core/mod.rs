//! Core engine types: sides, modifiers, combatants, configuration, errors.
//!
//! This module contains the fundamental building blocks that are
//! game-agnostic. Games configure these via `CombatantConfig` and
//! `MatchConfig` rather than modifying the core.

pub mod side;
pub mod modifier;
pub mod combatant;
pub mod config;
pub mod error;

pub use side::Side;
pub use modifier::{Modifier, ModifierId, ModifierKind};
pub use combatant::{AggregateOutcome, Attack, Combatant};
pub use config::{AttackConfig, CombatantConfig, MatchConfig, ModifierConfig};
pub use error::EngineError;
