//! Match resolution rules.
//!
//! `MatchState` owns both combatants; `resolve_attack` is the single
//! entry point that applies one attack between them. The engine mutates
//! state and returns plain data records - all rendering happens in the
//! caller's presentation layer.

pub mod resolver;

pub use resolver::{AttackResult, MatchState, Winner};
