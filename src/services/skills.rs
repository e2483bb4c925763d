//! Skill acquisition: level gates, class discounts, learned-skill ledger.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::character::{Character, CharacterId};
use crate::core::constants::CLASS_SKILL_LEVEL_REDUCTION;
use crate::skills::Skill;

use super::LevelingService;

/// Gates and records skill acquisition per character.
///
/// A skill may be learned once the character's level reaches the skill's
/// effective requirement. Characters whose class lists the skill as
/// preferred get the requirement reduced by `class_level_reduction`
/// (default 2), floored at 1. Duplicate learn attempts are ignored.
///
/// The level ledger lives in [`LevelingService`]; it is passed by reference
/// into the level-dependent calls rather than owned here.
#[derive(Debug)]
pub struct SkillsService {
    learned: HashMap<CharacterId, HashSet<String>>,
    class_level_reduction: u32,
}

impl Default for SkillsService {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsService {
    pub fn new() -> Self {
        Self::with_reduction(CLASS_SKILL_LEVEL_REDUCTION)
    }

    /// A service with a non-default preferred-skill discount.
    pub fn with_reduction(class_level_reduction: u32) -> Self {
        Self {
            learned: HashMap::new(),
            class_level_reduction,
        }
    }

    /// The level actually required for this character to learn `skill`:
    /// `max(1, required_level - reduction)` when the skill is preferred by
    /// the character's class, the plain `required_level` otherwise.
    pub fn effective_required_level(&self, character: &Character, skill: &Skill) -> u32 {
        match character.class() {
            Some(class) if class.prefers(&skill.id) => skill
                .required_level
                .saturating_sub(self.class_level_reduction)
                .max(1),
            _ => skill.required_level,
        }
    }

    /// Whether the character currently meets the effective level gate.
    pub fn can_learn(
        &self,
        character: &Character,
        skill: &Skill,
        leveling: &LevelingService,
    ) -> bool {
        leveling.level(character) >= self.effective_required_level(character, skill)
    }

    /// Attempts to learn `skill`; true only if it was newly recorded.
    ///
    /// Returns false without mutation when the level gate is not met or the
    /// skill is already learned.
    pub fn learn(
        &mut self,
        character: &Character,
        skill: &Skill,
        leveling: &LevelingService,
    ) -> bool {
        if !self.can_learn(character, skill, leveling) {
            return false;
        }
        let newly = self
            .learned
            .entry(character.id())
            .or_default()
            .insert(skill.id.clone());
        if newly {
            debug!(character = %character.id(), skill = %skill.id, "skill learned");
        }
        newly
    }

    /// The set of learned skill ids, as a defensive copy.
    pub fn learned(&self, character: &Character) -> HashSet<String> {
        self.learned
            .get(&character.id())
            .cloned()
            .unwrap_or_default()
    }
}
