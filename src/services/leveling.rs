//! Per-character XP and level tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::character::{Character, CharacterId};
use crate::core::constants::XP_PER_LEVEL;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy)]
struct LevelProgress {
    level: u32,
    xp: u64,
}

const FRESH: LevelProgress = LevelProgress { level: 1, xp: 0 };

/// Tracks `(level, xp)` per character.
///
/// Rules:
/// - every character starts at level 1 with 0 XP;
/// - the level threshold is a flat amount of XP per level (default 10),
///   the same for every level and every character;
/// - XP carries over exactly after a level-up, across arbitrarily many
///   level-ups granted by a single `gain_xp` call.
///
/// The service mutates only its own ledger, never the `Character`.
#[derive(Debug)]
pub struct LevelingService {
    threshold: u64,
    progress: HashMap<CharacterId, LevelProgress>,
}

impl Default for LevelingService {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelingService {
    pub fn new() -> Self {
        Self {
            threshold: XP_PER_LEVEL,
            progress: HashMap::new(),
        }
    }

    /// A service with a non-default XP threshold. Fails on a zero
    /// threshold, which would make leveling diverge.
    pub fn with_threshold(threshold: u64) -> Result<Self, EngineError> {
        if threshold == 0 {
            return Err(EngineError::ZeroXpThreshold);
        }
        Ok(Self {
            threshold,
            progress: HashMap::new(),
        })
    }

    fn entry(&self, character: &Character) -> LevelProgress {
        self.progress.get(&character.id()).copied().unwrap_or(FRESH)
    }

    /// Current level; 1 for characters never seen before.
    pub fn level(&self, character: &Character) -> u32 {
        self.entry(character).level
    }

    /// XP accumulated toward the next level; 0 for unseen characters.
    pub fn xp(&self, character: &Character) -> u64 {
        self.entry(character).xp
    }

    /// XP required to advance exactly one level.
    pub fn next_threshold(&self, _character: &Character) -> u64 {
        self.threshold
    }

    /// Fraction of progress toward the next level, in `[0, 1)`.
    pub fn progress_ratio(&self, character: &Character) -> f64 {
        self.xp(character) as f64 / self.threshold as f64
    }

    /// Adds XP and applies level-ups with exact carry-over.
    pub fn gain_xp(&mut self, character: &Character, amount: u64) {
        let mut progress = self.entry(character);
        progress.xp += amount;

        let before = progress.level;
        while progress.xp >= self.threshold {
            progress.xp -= self.threshold;
            progress.level += 1;
        }
        if progress.level > before {
            debug!(
                character = %character.id(),
                from = before,
                to = progress.level,
                carry_xp = progress.xp,
                "level up"
            );
        }
        self.progress.insert(character.id(), progress);
    }
}
