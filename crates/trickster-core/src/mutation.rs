//! Mutations the engine reasons about.
//!
//! The host decides what a mutation does to the player; the engine only
//! needs to name the ones it compensates with and to compare levels before
//! and after an act.

use serde::{Deserialize, Serialize};

/// A player mutation tracked by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mutation {
    /// Raises strength.
    Strong,
    /// Raises intelligence.
    Clever,
    /// Raises dexterity.
    Agile,
    /// Lowers strength.
    Weak,
    /// Lowers intelligence.
    Dopey,
    /// Lowers dexterity.
    Clumsy,
    /// Trades strength for dexterity.
    FlexibleWeak,
    /// Trades dexterity for strength.
    StrongStiff,
    /// Grey scales; heavy and dexterity-sapping.
    GreyScales,
    /// Metallic scales; dexterity-sapping.
    MetallicScales,
    /// Yellow scales; dexterity-sapping.
    YellowScales,
    /// Red scales; dexterity-sapping.
    RedScales,
    /// Resistance to further mutation.
    MutationResistance,
    /// Natural armour.
    ToughSkin,
    /// Faster healing.
    Regeneration,
    /// Random uncontrolled teleports.
    Teleportitis,
    /// Misshapen body.
    Deformed,
    /// Resistance to fire.
    HeatResistance,
    /// Resistance to cold.
    ColdResistance,
}

impl Mutation {
    /// Number of tracked mutations.
    pub const COUNT: usize = 19;

    /// Every tracked mutation, in declaration order.
    pub const ALL: [Mutation; Mutation::COUNT] = [
        Mutation::Strong,
        Mutation::Clever,
        Mutation::Agile,
        Mutation::Weak,
        Mutation::Dopey,
        Mutation::Clumsy,
        Mutation::FlexibleWeak,
        Mutation::StrongStiff,
        Mutation::GreyScales,
        Mutation::MetallicScales,
        Mutation::YellowScales,
        Mutation::RedScales,
        Mutation::MutationResistance,
        Mutation::ToughSkin,
        Mutation::Regeneration,
        Mutation::Teleportitis,
        Mutation::Deformed,
        Mutation::HeatResistance,
        Mutation::ColdResistance,
    ];

    /// Position in [`Mutation::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// What the engine asks the host to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationPick {
    /// Exactly this mutation, forced.
    Specific(Mutation),
    /// Any beneficial mutation of the host's choosing.
    RandomGood,
    /// Any mutation of the host's choosing, good or bad.
    RandomAny,
}

/// Level of every tracked mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutationCounts([u8; Mutation::COUNT]);

impl MutationCounts {
    /// All levels zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a level lookup, e.g. a host query.
    pub fn from_fn(mut level: impl FnMut(Mutation) -> i32) -> Self {
        let mut counts = Self::default();
        for m in Mutation::ALL {
            counts.set(m, level(m));
        }
        counts
    }

    /// Level of one mutation.
    pub fn get(&self, mutation: Mutation) -> i32 {
        i32::from(self.0[mutation.index()])
    }

    /// Set one level, clamped to `0..=255`.
    pub fn set(&mut self, mutation: Mutation, level: i32) {
        self.0[mutation.index()] = u8::try_from(level.clamp(0, 255)).unwrap_or(u8::MAX);
    }

    /// Sum of all levels.
    pub fn total(&self) -> i32 {
        self.0.iter().map(|&level| i32::from(level)).sum()
    }

    /// Iterate `(mutation, level)` for every non-zero level.
    pub fn iter(&self) -> impl Iterator<Item = (Mutation, i32)> + '_ {
        Mutation::ALL
            .into_iter()
            .map(|m| (m, self.get(m)))
            .filter(|(_, level)| *level > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_indices() {
        for (i, m) in Mutation::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn counts_set_get_and_total() {
        let mut counts = MutationCounts::new();
        counts.set(Mutation::Agile, 2);
        counts.set(Mutation::GreyScales, 1);
        counts.set(Mutation::Weak, -4);
        assert_eq!(counts.get(Mutation::Agile), 2);
        assert_eq!(counts.get(Mutation::Weak), 0);
        assert_eq!(counts.total(), 3);
        let listed: Vec<_> = counts.iter().collect();
        assert_eq!(listed, [(Mutation::Agile, 2), (Mutation::GreyScales, 1)]);
    }

    #[test]
    fn from_lookup() {
        let counts = MutationCounts::from_fn(|m| i32::from(m == Mutation::Clever) * 3);
        assert_eq!(counts.get(Mutation::Clever), 3);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn serde_round_trip() {
        let mut counts = MutationCounts::new();
        counts.set(Mutation::RedScales, 2);
        let json = serde_json::to_string(&counts).unwrap();
        let back: MutationCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
