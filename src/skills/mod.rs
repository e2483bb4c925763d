//! Skill entity and the universal skill catalog.

pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A learnable skill with a level requirement.
///
/// Skill data stays class-agnostic: the class-preference discount lives in
/// [`crate::services::SkillsService`], so any class/skill pairing can be
/// evaluated without per-class skill variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Minimum character level to learn. At least 1.
    pub required_level: u32,
    /// Free-form grouping label ("Gathering", "Crafting", "Combat", ...).
    pub category: String,
}

impl Skill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        required_level: u32,
        category: impl Into<String>,
    ) -> Result<Self, EngineError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(EngineError::EmptyId { entity: "skill" });
        }
        if name.is_empty() {
            return Err(EngineError::EmptyName { entity: "skill" });
        }
        if required_level < 1 {
            return Err(EngineError::RequiredLevelTooLow);
        }
        Ok(Self {
            id,
            name,
            required_level,
            category: category.into(),
        })
    }
}
