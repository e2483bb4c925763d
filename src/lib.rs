//! Saga - Turn-Based RPG Progression & Resource Ledger Engine
//!
//! Models a single player character's progression and economic state:
//! experience and leveling, class-gated skill acquisition, equipment-driven
//! stat modification, currency custody across wallet/bank/shop ledgers, and
//! deterministic-but-RNG-extensible combat resolution. One consumer process
//! (a game loop) drives one character against ad-hoc opponents; everything
//! here is synchronous and in-memory.

pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod items;
pub mod services;
pub mod skills;

pub use character::{Character, CharacterId, CharacterSnapshot, StatBlock};
pub use combat::{resolve_attack, AttackOutcome, RandomSource, ThreadRngSource};
pub use error::{EngineError, RandomError};
pub use items::Item;
pub use services::{BankService, InventoryService, LevelingService, ShopService, SkillsService};
pub use skills::Skill;
