//! Per-character item custody and equip-state stat projection.

use std::collections::HashMap;

use tracing::debug;

use crate::character::Character;
use crate::items::Item;

/// Manages one character's belongings: an owned map and an equipped map,
/// both keyed by item id (the same item value sits in both while equipped).
///
/// Equipping adds the item's equip bonuses to the character's attack and
/// defense; unequipping subtracts the exact same deltas. The service
/// enforces the equipped-items invariant itself: re-equipping an equipped
/// id is rejected rather than double-applied, and removal force-unequips
/// first so no stat bonus can outlive the item.
#[derive(Debug, Default)]
pub struct InventoryService {
    owned: HashMap<String, Item>,
    equipped: HashMap<String, Item>,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item by id; an existing entry with the same id is replaced.
    pub fn add(&mut self, item: Item) {
        self.owned.insert(item.id.clone(), item);
    }

    /// Removes and returns an item, or `None` if absent. An equipped item
    /// is unequipped first, reverting its stat bonuses on `character`.
    pub fn remove(&mut self, item_id: &str, character: &mut Character) -> Option<Item> {
        if self.equipped.contains_key(item_id) {
            self.unequip(item_id, character);
        }
        self.owned.remove(item_id)
    }

    /// All owned items, including any currently equipped.
    pub fn list_items(&self) -> Vec<&Item> {
        self.owned.values().collect()
    }

    pub fn get(&self, item_id: &str) -> Option<&Item> {
        self.owned.get(item_id)
    }

    pub fn is_equipped(&self, item_id: &str) -> bool {
        self.equipped.contains_key(item_id)
    }

    /// Equips an owned item, applying its bonuses to the character.
    ///
    /// Returns false without mutation if the item is not owned or is
    /// already equipped.
    pub fn equip(&mut self, item_id: &str, character: &mut Character) -> bool {
        if self.equipped.contains_key(item_id) {
            return false;
        }
        let Some(item) = self.owned.get(item_id) else {
            return false;
        };
        character.attack += item.equip_attack as i32;
        character.defense += item.equip_defense as i32;
        debug!(character = %character.id(), item = %item.id, "equipped");
        self.equipped.insert(item.id.clone(), item.clone());
        true
    }

    /// Unequips an equipped item, reverting its bonuses.
    ///
    /// Returns false without mutation if the item is not currently
    /// equipped.
    pub fn unequip(&mut self, item_id: &str, character: &mut Character) -> bool {
        let Some(item) = self.equipped.remove(item_id) else {
            return false;
        };
        character.attack -= item.equip_attack as i32;
        character.defense -= item.equip_defense as i32;
        debug!(character = %character.id(), item = %item.id, "unequipped");
        true
    }

    /// Uses a single-use consumable on `target`, healing it (clamped by the
    /// character's own heal rule) and removing the item.
    ///
    /// Returns false without mutation if the item is absent or has no heal
    /// effect.
    pub fn use_consumable(&mut self, item_id: &str, target: &mut Character) -> bool {
        let Some(item) = self.owned.get(item_id) else {
            return false;
        };
        if !item.is_consumable() {
            return false;
        }
        let heal = item.heal_amount;
        self.remove(item_id, target);
        target.heal(heal);
        debug!(character = %target.id(), item = item_id, heal, "consumable used");
        true
    }
}
