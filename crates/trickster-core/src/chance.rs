//! Random draws.
//!
//! Every roll the engine makes goes through [`Chance`]. A seeded [`StdRng`]
//! replays an act bit-for-bit, and [`ScriptedChance`] lets a test steer the
//! engine down a chosen path before handing over to a real generator.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A source of uniform integer draws.
///
/// Only [`Chance::below`] must be implemented; the other rolls are built on
/// it so every implementation consumes draws identically.
pub trait Chance {
    /// Uniform integer in `0..bound`. Bounds of 1 or less yield 0 without
    /// consuming a draw.
    fn below(&mut self, bound: i32) -> i32;

    /// True with probability `1 / n`. Always true for `n <= 1`.
    fn one_in(&mut self, n: i32) -> bool {
        self.below(n) == 0
    }

    /// True with probability `x / y`. Certain when `x >= y`, impossible when
    /// `x <= 0`; neither edge consumes a draw.
    fn x_in_y(&mut self, x: i32, y: i32) -> bool {
        if x <= 0 {
            return false;
        }
        if x >= y {
            return true;
        }
        self.below(y) < x
    }

    /// A fair coin.
    fn coin_flip(&mut self) -> bool {
        self.below(2) == 0
    }

    /// Uniform integer in `low..=high`.
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        low + self.below(high - low + 1)
    }

    /// Average of `rolls` draws below `max`, skewing results toward the
    /// middle of the range.
    fn average_below(&mut self, max: i32, rolls: i32) -> i32 {
        let rolls = rolls.max(1);
        let mut sum = self.below(max);
        for _ in 1..rolls {
            sum += self.below(max + 1);
        }
        sum / rolls
    }
}

impl Chance for StdRng {
    fn below(&mut self, bound: i32) -> i32 {
        if bound <= 1 {
            return 0;
        }
        self.random_range(0..bound)
    }
}

/// Pick one element uniformly, or `None` from an empty slice.
pub fn pick<'a, T>(rng: &mut dyn Chance, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
    usize::try_from(rng.below(len))
        .ok()
        .and_then(|index| items.get(index))
}

/// Whether a weighted effect fires at the given severity.
///
/// The chance is `weight / severity`, so raising severity makes every
/// individual check less likely and lets later, heavier entries of a pool
/// come into reach.
pub fn draw_succeeds(weight: i32, severity: i32, rng: &mut dyn Chance) -> bool {
    rng.x_in_y(weight, severity.max(1))
}

/// A probability expressed as `numerator` in `denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    /// Favourable outcomes.
    pub numerator: i32,
    /// Total outcomes.
    pub denominator: i32,
}

impl Ratio {
    /// Create a ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Roll against this ratio.
    pub fn roll(self, rng: &mut dyn Chance) -> bool {
        rng.x_in_y(self.numerator, self.denominator)
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// What a [`ScriptedChance`] does once its script runs out.
#[derive(Debug, Clone)]
enum Fallback {
    Constant(i32),
    Rng(StdRng),
}

/// A random source that replays a fixed script of raw draws.
///
/// Each call to [`Chance::below`] pops the next scripted value and reduces
/// it modulo the bound. Once the script is exhausted the source either
/// repeats a constant or continues from a seeded [`StdRng`]. Bounds of 1 or
/// less consume nothing, matching every other implementation.
#[derive(Debug, Clone)]
pub struct ScriptedChance {
    script: VecDeque<i32>,
    fallback: Fallback,
    history: Vec<(i32, i32)>,
}

impl ScriptedChance {
    /// Replay `script`, then draw 0 forever.
    pub fn new(script: impl IntoIterator<Item = i32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: Fallback::Constant(0),
            history: Vec::new(),
        }
    }

    /// Repeat `value` once the script is exhausted.
    pub fn then_constant(mut self, value: i32) -> Self {
        self.fallback = Fallback::Constant(value);
        self
    }

    /// Continue from a generator seeded with `seed` once the script is
    /// exhausted.
    pub fn then_seeded(mut self, seed: u64) -> Self {
        self.fallback = Fallback::Rng(StdRng::seed_from_u64(seed));
        self
    }

    /// Scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Every consumed draw as `(bound, result)`.
    pub fn history(&self) -> &[(i32, i32)] {
        &self.history
    }
}

impl Chance for ScriptedChance {
    fn below(&mut self, bound: i32) -> i32 {
        if bound <= 1 {
            return 0;
        }
        let value = match self.script.pop_front() {
            Some(raw) => raw.rem_euclid(bound),
            None => match &mut self.fallback {
                Fallback::Constant(raw) => raw.rem_euclid(bound),
                Fallback::Rng(rng) => rng.below(bound),
            },
        };
        self.history.push((bound, value));
        value
    }
}
