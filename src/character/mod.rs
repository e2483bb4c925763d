//! The player (or opponent) character entity.
//!
//! A `Character` carries only its own state: identity, finalized combat
//! stats, current HP, and the wallet. Everything ledger-shaped (XP, learned
//! skills, owned items, bank balances) lives in the services under
//! [`crate::services`], keyed by [`CharacterId`].
//!
//! Construction is two-stage: raw stats come in as a [`StatBlock`], and the
//! optional class modifier step happens exactly once, inside
//! [`Character::with_class`]. Reload paths go through [`Character::restore`],
//! which accepts already-finalized stats and never reapplies modifiers.

pub mod class;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use self::class::CharacterClass;

/// Stable identity for ledger keys, generated at character creation.
///
/// Two distinct characters sharing a display name get distinct ids and are
/// tracked independently by every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(Uuid);

impl CharacterId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw (pre-class) stats handed to a character constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
}

impl StatBlock {
    pub fn new(max_hp: u32, attack: i32, defense: i32) -> Self {
        Self {
            max_hp,
            attack,
            defense,
        }
    }
}

impl Default for StatBlock {
    /// The fresh-character baseline used by the driver for a new game.
    fn default() -> Self {
        use crate::core::constants::{
            DEFAULT_BASE_ATTACK, DEFAULT_BASE_DEFENSE, DEFAULT_BASE_MAX_HP,
        };
        Self::new(DEFAULT_BASE_MAX_HP, DEFAULT_BASE_ATTACK, DEFAULT_BASE_DEFENSE)
    }
}

/// Minimal persistable record of a character.
///
/// The stats here are the finalized values (class modifiers already baked
/// in); restoring from a snapshot must therefore never rerun the modifier
/// step. The class is recorded by id only and re-attached on restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub id: CharacterId,
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub currency: u64,
    pub class_id: Option<String>,
}

/// A game character with health, combat stats, and a currency wallet.
///
/// Invariants: `0 <= hp <= max_hp`, `max_hp > 0`, and the wallet never goes
/// negative. `attack` and `defense` may go negative through class penalties.
#[derive(Debug, Clone)]
pub struct Character {
    id: CharacterId,
    name: String,
    max_hp: u32,
    hp: u32,
    /// Attack stat used in damage calculation. Adjusted in place by
    /// [`crate::services::InventoryService`] when items are (un)equipped.
    pub attack: i32,
    /// Defense stat that reduces incoming damage. Adjusted like `attack`.
    pub defense: i32,
    currency: u64,
    class: Option<Arc<CharacterClass>>,
}

impl Character {
    /// Creates a classless character; raw stats become final stats.
    pub fn new(name: impl Into<String>, stats: StatBlock) -> Result<Self, EngineError> {
        Self::build(name.into(), stats, None)
    }

    /// Creates a character of the given class, applying the class modifiers
    /// exactly once: `max_hp` is scaled by the HP multiplier (truncated),
    /// attack and defense get the flat bonuses.
    ///
    /// Fails if the scaled `max_hp` lands on zero.
    pub fn with_class(
        name: impl Into<String>,
        stats: StatBlock,
        class: Arc<CharacterClass>,
    ) -> Result<Self, EngineError> {
        let modified = StatBlock {
            max_hp: (stats.max_hp as f64 * class.hp_multiplier) as u32,
            attack: stats.attack + class.attack_bonus,
            defense: stats.defense + class.defense_bonus,
        };
        Self::build(name.into(), modified, Some(class))
    }

    fn build(
        name: String,
        stats: StatBlock,
        class: Option<Arc<CharacterClass>>,
    ) -> Result<Self, EngineError> {
        if name.is_empty() {
            return Err(EngineError::EmptyName {
                entity: "character",
            });
        }
        if stats.max_hp == 0 {
            return Err(EngineError::NonPositiveMaxHp);
        }
        Ok(Self {
            id: CharacterId::generate(),
            name,
            max_hp: stats.max_hp,
            hp: stats.max_hp,
            attack: stats.attack,
            defense: stats.defense,
            currency: 0,
            class,
        })
    }

    /// Rebuilds a character from a snapshot without reapplying class
    /// modifiers; the snapshot stats are taken as already finalized. The
    /// class reference is re-attached for preferred-skill lookups only and
    /// must match the class id recorded in the snapshot.
    pub fn restore(
        snapshot: CharacterSnapshot,
        class: Option<Arc<CharacterClass>>,
    ) -> Result<Self, EngineError> {
        if snapshot.name.is_empty() {
            return Err(EngineError::EmptyName {
                entity: "character",
            });
        }
        if snapshot.max_hp == 0 {
            return Err(EngineError::NonPositiveMaxHp);
        }
        if snapshot.hp > snapshot.max_hp {
            return Err(EngineError::SnapshotHpExceedsMax {
                hp: snapshot.hp,
                max_hp: snapshot.max_hp,
            });
        }
        let supplied = class.as_ref().map(|c| c.id.clone());
        if snapshot.class_id != supplied {
            return Err(EngineError::SnapshotClassMismatch {
                expected: snapshot.class_id,
                supplied,
            });
        }
        Ok(Self {
            id: snapshot.id,
            name: snapshot.name,
            max_hp: snapshot.max_hp,
            hp: snapshot.hp,
            attack: snapshot.attack,
            defense: snapshot.defense,
            currency: snapshot.currency,
            class,
        })
    }

    /// The minimal record the persistence collaborator serializes.
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            id: self.id,
            name: self.name.clone(),
            max_hp: self.max_hp,
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            currency: self.currency,
            class_id: self.class.as_ref().map(|c| c.id.clone()),
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn currency(&self) -> u64 {
        self.currency
    }

    pub fn class(&self) -> Option<&Arc<CharacterClass>> {
        self.class.as_ref()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduces HP by `amount`, clamped at 0.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restores HP by `amount`, clamped at `max_hp`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Adds currency to the wallet.
    pub fn add_currency(&mut self, amount: u64) {
        self.currency = self.currency.saturating_add(amount);
    }

    /// Removes currency from the wallet. Returns false and leaves the
    /// balance untouched if funds are insufficient.
    pub fn remove_currency(&mut self, amount: u64) -> bool {
        if self.currency >= amount {
            self.currency -= amount;
            true
        } else {
            false
        }
    }
}
