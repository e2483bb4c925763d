//! Predefined universal (life) skills, organized by category.
//!
//! Universal skills are non-combat abilities any class can learn:
//! Gathering for resource collection, Crafting for item creation, and
//! Utility for survival and social play. Class preference lists reference
//! these by id, so a Warrior still gets the discount on mining.

use super::Skill;

fn skill(id: &str, name: &str, required_level: u32, category: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        required_level,
        category: category.to_string(),
    }
}

/// Resource collection skills.
pub fn gathering_skills() -> Vec<Skill> {
    vec![
        skill("fishing", "Fishing", 1, "Gathering"),
        skill("mining", "Mining", 2, "Gathering"),
        skill("herbalism", "Herbalism", 1, "Gathering"),
        skill("foraging", "Foraging", 1, "Gathering"),
    ]
}

/// Item creation and enhancement skills.
pub fn crafting_skills() -> Vec<Skill> {
    vec![
        skill("cooking", "Cooking", 2, "Crafting"),
        skill("alchemy", "Alchemy", 3, "Crafting"),
        skill("blacksmithing", "Blacksmithing", 4, "Crafting"),
        skill("tailoring", "Tailoring", 3, "Crafting"),
    ]
}

/// Survival and social skills.
pub fn utility_skills() -> Vec<Skill> {
    vec![
        skill("first_aid", "First Aid", 2, "Utility"),
        skill("bartering", "Bartering", 3, "Utility"),
        skill("camping", "Camping", 2, "Utility"),
        skill("navigation", "Navigation", 4, "Utility"),
    ]
}

/// Every universal skill across all categories.
pub fn universal_skills() -> Vec<Skill> {
    let mut all = gathering_skills();
    all.extend(crafting_skills());
    all.extend(utility_skills());
    all
}

/// Looks up a universal skill by id.
pub fn universal_skill_by_id(id: &str) -> Option<Skill> {
    universal_skills().into_iter().find(|s| s.id == id)
}
