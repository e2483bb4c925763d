//! Single-exchange combat resolution.
//!
//! [`resolve_attack`] settles one attacker-vs-defender exchange. Randomness
//! is injected through the [`RandomSource`] trait so tests stay
//! reproducible while production callers plug in real entropy; with a crit
//! chance of 0 no draw happens at all and the formula is purely
//! deterministic. Multi-round combat is orchestration that belongs to the
//! driver, looping this function until one side drops.

use rand::Rng;
use tracing::{debug, warn};

use crate::character::Character;
use crate::core::constants::CRIT_DAMAGE_MULTIPLIER;
use crate::error::{EngineError, RandomError};

/// A source of uniform draws in `[0, 1)`.
///
/// A source may fail (a hardware RNG can); the failure is typed so the
/// caller decides what it means. Combat resolves a failed draw as no-crit.
pub trait RandomSource {
    fn next_unit(&mut self) -> Result<f64, RandomError>;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_unit(&mut self) -> Result<f64, RandomError> {
        Ok(rand::thread_rng().gen::<f64>())
    }
}

/// Adapter for any [`rand::Rng`], mainly seeded generators in tests and
/// simulations.
#[derive(Debug)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> Result<f64, RandomError> {
        Ok(self.0.gen::<f64>())
    }
}

/// What one resolved exchange did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Damage computed (not necessarily HP lost; HP clamps at 0).
    pub damage: u32,
    pub crit: bool,
}

/// Resolves a single attack from `attacker` against `defender`.
///
/// Base damage is `max(0, attacker.attack - defender.defense)`. When a
/// source is supplied and `crit_chance > 0`, one uniform draw below
/// `crit_chance` doubles the damage. The damage is applied through the
/// defender's own clamped damage rule.
///
/// Fails fast only on a malformed `crit_chance` (outside `[0, 1]` or not
/// finite). A failing random source never fails the attack: the fault is
/// logged and the exchange resolves without a crit.
pub fn resolve_attack(
    attacker: &Character,
    defender: &mut Character,
    random_source: Option<&mut dyn RandomSource>,
    crit_chance: f64,
) -> Result<AttackOutcome, EngineError> {
    if !crit_chance.is_finite() || !(0.0..=1.0).contains(&crit_chance) {
        return Err(EngineError::CritChanceOutOfRange(crit_chance));
    }

    let base = attacker.attack.saturating_sub(defender.defense).max(0) as u32;
    let mut damage = base;
    let mut crit = false;

    if crit_chance > 0.0 {
        if let Some(source) = random_source {
            match source.next_unit() {
                Ok(roll) if roll < crit_chance => {
                    damage = base.saturating_mul(CRIT_DAMAGE_MULTIPLIER);
                    crit = true;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%err, "random source failed during crit roll; resolving without crit");
                }
            }
        }
    }

    defender.take_damage(damage);
    debug!(
        attacker = %attacker.id(),
        defender = %defender.id(),
        damage,
        crit,
        defender_hp = defender.hp(),
        "attack resolved"
    );
    Ok(AttackOutcome { damage, crit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::StatBlock;

    /// Always draws the same value.
    struct FixedSource(f64);

    impl RandomSource for FixedSource {
        fn next_unit(&mut self) -> Result<f64, RandomError> {
            Ok(self.0)
        }
    }

    /// Fails every draw, like a broken entropy device.
    struct FailingSource;

    impl RandomSource for FailingSource {
        fn next_unit(&mut self) -> Result<f64, RandomError> {
            Err(RandomError("entropy exhausted".to_string()))
        }
    }

    /// Counts draws so tests can assert when the RNG is consulted.
    struct CountingSource {
        draws: u32,
    }

    impl RandomSource for CountingSource {
        fn next_unit(&mut self) -> Result<f64, RandomError> {
            self.draws += 1;
            Ok(0.99)
        }
    }

    fn hero() -> Character {
        Character::new("Hero", StatBlock::new(50, 10, 0)).unwrap()
    }

    fn goblin() -> Character {
        Character::new("Goblin", StatBlock::new(20, 0, 3)).unwrap()
    }

    #[test]
    fn test_basic_attack_without_rng() {
        let attacker = hero();
        let mut defender = goblin();

        let outcome = resolve_attack(&attacker, &mut defender, None, 0.0).unwrap();
        assert_eq!(outcome.damage, 7);
        assert!(!outcome.crit);
        assert_eq!(defender.hp(), 13);
    }

    #[test]
    fn test_defense_floors_damage_at_zero() {
        let attacker = goblin(); // attack 0
        let mut defender = hero();
        defender.defense = 5;

        let outcome = resolve_attack(&attacker, &mut defender, None, 0.0).unwrap();
        assert_eq!(outcome.damage, 0);
        assert_eq!(defender.hp(), 50);
    }

    #[test]
    fn test_damage_returned_may_exceed_hp_lost() {
        let mut attacker = hero();
        attacker.attack = 100;
        let mut defender = goblin();
        defender.defense = 0;

        let outcome = resolve_attack(&attacker, &mut defender, None, 0.0).unwrap();
        assert_eq!(outcome.damage, 100); // computed damage, not HP lost
        assert_eq!(defender.hp(), 0);
        assert!(!defender.is_alive());
    }

    #[test]
    fn test_crit_doubles_damage() {
        let attacker = hero();
        let mut defender = goblin();
        let mut source = FixedSource(0.1);

        let outcome = resolve_attack(&attacker, &mut defender, Some(&mut source), 0.5).unwrap();
        assert_eq!(outcome.damage, 14);
        assert!(outcome.crit);
        assert_eq!(defender.hp(), 6);
    }

    #[test]
    fn test_draw_at_or_above_chance_is_no_crit() {
        let attacker = hero();
        let mut defender = goblin();
        let mut source = FixedSource(0.5);

        let outcome = resolve_attack(&attacker, &mut defender, Some(&mut source), 0.5).unwrap();
        assert_eq!(outcome.damage, 7);
        assert!(!outcome.crit);
    }

    #[test]
    fn test_zero_crit_chance_never_consults_rng() {
        let attacker = hero();
        let mut defender = goblin();
        let mut source = CountingSource { draws: 0 };

        resolve_attack(&attacker, &mut defender, Some(&mut source), 0.0).unwrap();
        assert_eq!(source.draws, 0);

        resolve_attack(&attacker, &mut defender, Some(&mut source), 0.5).unwrap();
        assert_eq!(source.draws, 1);
    }

    #[test]
    fn test_failing_source_resolves_as_no_crit() {
        let attacker = hero();
        let mut defender = goblin();
        let mut source = FailingSource;

        let outcome = resolve_attack(&attacker, &mut defender, Some(&mut source), 0.9).unwrap();
        assert_eq!(outcome.damage, 7);
        assert!(!outcome.crit);
        assert_eq!(defender.hp(), 13);
    }

    #[test]
    fn test_malformed_crit_chance_fails_fast() {
        let attacker = hero();
        let mut defender = goblin();

        for bad in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let err = resolve_attack(&attacker, &mut defender, None, bad).unwrap_err();
            assert!(matches!(err, EngineError::CritChanceOutOfRange(_)));
        }
        assert_eq!(defender.hp(), 20); // untouched by failed calls
    }

    #[test]
    fn test_seeded_rng_source_is_reproducible() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let attacker = hero();
        let run = |seed: u64| {
            let mut defender = goblin();
            let mut source = RngSource(ChaCha8Rng::seed_from_u64(seed));
            let mut outcomes = Vec::new();
            for _ in 0..8 {
                outcomes
                    .push(resolve_attack(&attacker, &mut defender, Some(&mut source), 0.3).unwrap());
            }
            outcomes
        };

        assert_eq!(run(42), run(42));
    }
}
