//! Choosing what to summon.

use tracing::debug;
use trickster_core::realm::{Creature, DemonClass};
use trickster_core::{Chance, MAX_STANDING};

/// Draw a creature whose power scales with `severity`.
///
/// Greater demons are replaced by a holy warrior half the time, and by a
/// common demon when `use_greater` is off. Common demons are chaos spawn one
/// time in ten.
pub fn random_creature(rng: &mut dyn Chance, severity: i32, use_greater: bool) -> Creature {
    let bound = 1000i32.saturating_sub(MAX_STANDING.saturating_sub(severity).saturating_mul(3));
    let roll = rng.below(bound);
    let class = if roll >= 850 {
        DemonClass::Greater
    } else if roll >= 340 {
        DemonClass::Common
    } else {
        DemonClass::Lesser
    };
    debug!(severity, roll, ?class, "creature roll");

    if class == DemonClass::Greater && rng.coin_flip() {
        return Creature::HolyWarrior;
    }
    let class = if !use_greater && class == DemonClass::Greater {
        DemonClass::Common
    } else {
        class
    };
    if class == DemonClass::Common && rng.one_in(10) {
        return Creature::ChaosSpawn;
    }
    Creature::Demon(class)
}

/// Size of a summoned group: three nested draws below `severity + 1`, plus
/// `base`, capped at `cap`. Small groups are common and large ones rare.
pub fn group_size(rng: &mut dyn Chance, severity: i32, base: i32, cap: i32) -> i32 {
    let outer = rng.below(severity.saturating_add(1));
    let middle = rng.below(outer + 1);
    let inner = rng.below(middle + 1);
    (inner + base).min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trickster_core::ScriptedChance;

    #[test]
    fn low_severity_never_reaches_greater_demons() {
        // Severity 1 bounds the roll below 403.
        let mut rng = ScriptedChance::new([402, 1]);
        assert_eq!(
            random_creature(&mut rng, 1, true),
            Creature::Demon(DemonClass::Common)
        );
        assert_eq!(rng.history()[0], (403, 402));
    }

    #[test]
    fn greater_roll_may_bring_a_holy_warrior() {
        let mut rng = ScriptedChance::new([900, 0]);
        assert_eq!(random_creature(&mut rng, 200, true), Creature::HolyWarrior);
    }

    #[test]
    fn greater_demoted_without_permission() {
        let mut rng = ScriptedChance::new([900, 1, 3]);
        assert_eq!(
            random_creature(&mut rng, 200, false),
            Creature::Demon(DemonClass::Common)
        );
        let mut rng = ScriptedChance::new([900, 1]);
        assert_eq!(
            random_creature(&mut rng, 200, true),
            Creature::Demon(DemonClass::Greater)
        );
    }

    #[test]
    fn common_demons_are_sometimes_chaos_spawn() {
        let mut rng = ScriptedChance::new([500, 0]);
        assert_eq!(random_creature(&mut rng, 200, true), Creature::ChaosSpawn);
    }

    #[test]
    fn lesser_demons_at_low_rolls() {
        let mut rng = ScriptedChance::new([10]);
        assert_eq!(
            random_creature(&mut rng, 50, true),
            Creature::Demon(DemonClass::Lesser)
        );
    }

    #[test]
    fn extreme_severity_does_not_overflow() {
        let mut rng = ScriptedChance::new([]);
        assert_eq!(
            random_creature(&mut rng, i32::MIN, true),
            Creature::Demon(DemonClass::Lesser)
        );
        assert!(rng.history().is_empty());

        let mut rng = ScriptedChance::new([5, 5, 5]);
        assert_eq!(group_size(&mut rng, i32::MAX, 1, 14), 6);
        assert_eq!(rng.history()[0], (i32::MAX, 5));
    }

    #[test]
    fn group_size_is_capped() {
        let mut rng = ScriptedChance::new([100, 100, 100]);
        assert_eq!(group_size(&mut rng, 200, 2, 16), 16);
        let mut rng = ScriptedChance::new([0]);
        assert_eq!(group_size(&mut rng, 5, 1, 14), 1);
    }
}
