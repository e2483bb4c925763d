//! Character classes: stat modifiers and skill preferences.
//!
//! Class definitions are immutable and shared by reference; many characters
//! may point at the same `Arc<CharacterClass>`. Modifiers are applied once,
//! at character construction, never by the class itself.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An immutable class definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Scales raw max HP at construction. Must be positive.
    pub hp_multiplier: f64,
    /// Flat attack bonus; may be negative.
    pub attack_bonus: i32,
    /// Flat defense bonus; may be negative.
    pub defense_bonus: i32,
    /// Skill ids that get the class level-requirement discount.
    pub preferred_skills: HashSet<String>,
}

impl CharacterClass {
    /// Validated constructor for custom class definitions.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        hp_multiplier: f64,
        attack_bonus: i32,
        defense_bonus: i32,
        preferred_skills: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, EngineError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(EngineError::EmptyId { entity: "class" });
        }
        if name.is_empty() {
            return Err(EngineError::EmptyName { entity: "class" });
        }
        if !(hp_multiplier > 0.0) {
            return Err(EngineError::NonPositiveHpMultiplier(hp_multiplier));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            hp_multiplier,
            attack_bonus,
            defense_bonus,
            preferred_skills: preferred_skills.into_iter().map(Into::into).collect(),
        })
    }

    pub fn prefers(&self, skill_id: &str) -> bool {
        self.preferred_skills.contains(skill_id)
    }
}

fn preferred(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// A mighty melee combatant with high HP and attack power.
pub fn warrior() -> Arc<CharacterClass> {
    Arc::new(CharacterClass {
        id: "warrior".to_string(),
        name: "Warrior".to_string(),
        description: "A mighty melee combatant with high HP and attack power".to_string(),
        hp_multiplier: 1.5,
        attack_bonus: 2,
        defense_bonus: 0,
        preferred_skills: preferred(&[
            "sword_mastery",
            "shield_bash",
            "mining",
            "blacksmithing",
            "first_aid",
        ]),
    })
}

/// A spellcaster with reduced HP but powerful magic abilities.
pub fn mage() -> Arc<CharacterClass> {
    Arc::new(CharacterClass {
        id: "mage".to_string(),
        name: "Mage".to_string(),
        description: "A spellcaster with reduced HP but powerful magic abilities".to_string(),
        hp_multiplier: 0.8,
        attack_bonus: 0,
        defense_bonus: -1,
        preferred_skills: preferred(&[
            "fireball",
            "heal",
            "ice_shard",
            "herbalism",
            "alchemy",
            "navigation",
        ]),
    })
}

/// A versatile adventurer balanced in combat and utility skills.
pub fn rogue() -> Arc<CharacterClass> {
    Arc::new(CharacterClass {
        id: "rogue".to_string(),
        name: "Rogue".to_string(),
        description: "A versatile adventurer balanced in combat and utility skills".to_string(),
        hp_multiplier: 1.0,
        attack_bonus: 1,
        defense_bonus: 1,
        preferred_skills: preferred(&[
            "lockpicking",
            "sneak",
            "backstab",
            "foraging",
            "cooking",
            "bartering",
        ]),
    })
}

/// All predefined classes, keyed lookup for drivers restoring by class id.
pub fn class_by_id(id: &str) -> Option<Arc<CharacterClass>> {
    match id {
        "warrior" => Some(warrior()),
        "mage" => Some(mage()),
        "rogue" => Some(rogue()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_validation() {
        assert!(matches!(
            CharacterClass::new("", "Bad", "Test", 1.0, 0, 0, Vec::<String>::new()),
            Err(EngineError::EmptyId { .. })
        ));
        assert!(matches!(
            CharacterClass::new("bad", "", "Test", 1.0, 0, 0, Vec::<String>::new()),
            Err(EngineError::EmptyName { .. })
        ));
        assert!(matches!(
            CharacterClass::new("bad", "Bad", "Test", 0.0, 0, 0, Vec::<String>::new()),
            Err(EngineError::NonPositiveHpMultiplier(_))
        ));
        assert!(matches!(
            CharacterClass::new("bad", "Bad", "Test", -1.0, 0, 0, Vec::<String>::new()),
            Err(EngineError::NonPositiveHpMultiplier(_))
        ));
    }

    #[test]
    fn test_predefined_class_stats() {
        let w = warrior();
        assert_eq!(w.hp_multiplier, 1.5);
        assert_eq!(w.attack_bonus, 2);
        assert_eq!(w.defense_bonus, 0);

        let m = mage();
        assert_eq!(m.hp_multiplier, 0.8);
        assert_eq!(m.defense_bonus, -1);

        let r = rogue();
        assert_eq!(r.attack_bonus, 1);
        assert_eq!(r.defense_bonus, 1);
    }

    #[test]
    fn test_preferred_skill_lookup() {
        assert!(warrior().prefers("sword_mastery"));
        assert!(warrior().prefers("mining"));
        assert!(!warrior().prefers("fireball"));
        assert!(mage().prefers("fireball"));
        assert!(rogue().prefers("bartering"));
    }

    #[test]
    fn test_class_by_id() {
        assert_eq!(class_by_id("warrior").map(|c| c.name.clone()), Some("Warrior".into()));
        assert_eq!(class_by_id("mage").map(|c| c.id.clone()), Some("mage".into()));
        assert!(class_by_id("bard").is_none());
    }
}
