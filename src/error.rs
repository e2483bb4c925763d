//! Error model for the engine.
//!
//! Only malformed input is surfaced as an error, at the boundary where the
//! bad value first arrives. Ordinary rule violations (insufficient funds,
//! unmet level gates, items that are not owned or equipped) are communicated
//! through boolean results with the receiver left unchanged, so callers can
//! branch on outcome without error-handling machinery.

use thiserror::Error;

/// Invalid-argument failures raised by entity construction and combat.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Max HP was zero, either as given or after the class HP multiplier.
    #[error("max hp must be positive")]
    NonPositiveMaxHp,

    #[error("{entity} id must be non-empty")]
    EmptyId { entity: &'static str },

    #[error("{entity} name must be non-empty")]
    EmptyName { entity: &'static str },

    #[error("hp multiplier must be positive, got {0}")]
    NonPositiveHpMultiplier(f64),

    #[error("required level must be >= 1")]
    RequiredLevelTooLow,

    #[error("xp threshold must be positive")]
    ZeroXpThreshold,

    #[error("crit chance must be a finite value in [0, 1], got {0}")]
    CritChanceOutOfRange(f64),

    #[error("snapshot hp {hp} exceeds max hp {max_hp}")]
    SnapshotHpExceedsMax { hp: u32, max_hp: u32 },

    /// The class handed to `Character::restore` does not match the class id
    /// recorded in the snapshot.
    #[error("snapshot records class {expected:?} but {supplied:?} was supplied")]
    SnapshotClassMismatch {
        expected: Option<String>,
        supplied: Option<String>,
    },
}

/// Failure reported by a [`RandomSource`](crate::combat::RandomSource).
///
/// Combat handles this at the call site (resolving the attack without a
/// crit), so it never escapes `resolve_attack`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("random source failure: {0}")]
pub struct RandomError(pub String);
