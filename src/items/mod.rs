//! Item entity: equippable and consumable goods.
//!
//! Pure data; equip arithmetic and consumption live in
//! [`crate::services::InventoryService`].

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An immutable item definition.
///
/// An item may combine equip and heal semantics, but in practice is one or
/// the other; the convenience constructors cover the common cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Attack bonus while equipped (0 if not equippable).
    pub equip_attack: u32,
    /// Defense bonus while equipped (0 if not equippable).
    pub equip_defense: u32,
    /// HP restored when consumed (0 if not consumable).
    pub heal_amount: u32,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        equip_attack: u32,
        equip_defense: u32,
        heal_amount: u32,
    ) -> Result<Self, EngineError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(EngineError::EmptyId { entity: "item" });
        }
        if name.is_empty() {
            return Err(EngineError::EmptyName { entity: "item" });
        }
        Ok(Self {
            id,
            name,
            equip_attack,
            equip_defense,
            heal_amount,
        })
    }

    /// A weapon or piece of armor carrying equip bonuses.
    pub fn equippable(
        id: impl Into<String>,
        name: impl Into<String>,
        equip_attack: u32,
        equip_defense: u32,
    ) -> Result<Self, EngineError> {
        Self::new(id, name, equip_attack, equip_defense, 0)
    }

    /// A single-use healing item.
    pub fn consumable(
        id: impl Into<String>,
        name: impl Into<String>,
        heal_amount: u32,
    ) -> Result<Self, EngineError> {
        Self::new(id, name, 0, 0, heal_amount)
    }

    pub fn is_equippable(&self) -> bool {
        self.equip_attack > 0 || self.equip_defense > 0
    }

    pub fn is_consumable(&self) -> bool {
        self.heal_amount > 0
    }
}
