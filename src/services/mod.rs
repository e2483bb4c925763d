//! Services: the ledgers that track per-character progression and wealth.
//!
//! Each service owns its own in-memory state, keyed by
//! [`CharacterId`](crate::character::CharacterId), and mutates the
//! `Character` only where the contract says so (equip deltas, wallet
//! movements, consumable healing). Rule violations come back as `false`
//! with all state untouched; every mutating operation is check-then-act
//! transactional within itself.

pub mod bank;
pub mod inventory;
pub mod leveling;
pub mod shop;
pub mod skills;

pub use bank::BankService;
pub use inventory::InventoryService;
pub use leveling::LevelingService;
pub use shop::ShopService;
pub use skills::SkillsService;
