// XP and leveling
pub const XP_PER_LEVEL: u64 = 10;

// Skills
pub const CLASS_SKILL_LEVEL_REDUCTION: u32 = 2;

// Fresh-character baseline (village start)
pub const DEFAULT_BASE_MAX_HP: u32 = 100;
pub const DEFAULT_BASE_ATTACK: i32 = 5;
pub const DEFAULT_BASE_DEFENSE: i32 = 3;
pub const STARTING_CURRENCY: u64 = 100;

// Combat
pub const CRIT_DAMAGE_MULTIPLIER: u32 = 2;
