//! Engine error types.
//!
//! These are caller errors from malformed requests (e.g. a stale UI
//! event), not transient failures: no retries, and resolution aborts
//! with no state mutation. Locked or exhausted modifiers are normal
//! zero-contribution outcomes, never errors.

use thiserror::Error;

use super::modifier::ModifierId;

/// Errors surfaced by the match engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested attack key is not in the attacker's attack table.
    #[error("{combatant} has no attack `{key}`")]
    InvalidAttackKey {
        /// Display name of the attacker.
        combatant: String,
        /// The unknown attack key.
        key: String,
    },

    /// The requested modifier id is not owned by the combatant.
    #[error("{combatant} has no {id}")]
    InvalidModifierKey {
        /// Display name of the combatant.
        combatant: String,
        /// The unknown modifier id.
        id: ModifierId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidAttackKey {
            combatant: "Cat".to_string(),
            key: "headbutt".to_string(),
        };
        assert_eq!(err.to_string(), "Cat has no attack `headbutt`");

        let err = EngineError::InvalidModifierKey {
            combatant: "Human".to_string(),
            id: ModifierId::new(9),
        };
        assert_eq!(err.to_string(), "Human has no Modifier(9)");
    }
}
