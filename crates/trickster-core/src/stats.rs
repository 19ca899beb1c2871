//! The three core player stats.

use serde::{Deserialize, Serialize};

/// One of the player's core stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    /// Strength.
    Strength,
    /// Dexterity.
    Dexterity,
    /// Intelligence.
    Intelligence,
}

impl Stat {
    /// Every stat in a fixed order.
    pub const ALL: [Stat; 3] = [Stat::Strength, Stat::Dexterity, Stat::Intelligence];
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Dexterity => write!(f, "dexterity"),
            Self::Intelligence => write!(f, "intelligence"),
        }
    }
}

/// Values for all three stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    /// Strength.
    pub strength: i32,
    /// Dexterity.
    pub dexterity: i32,
    /// Intelligence.
    pub intelligence: i32,
}

impl StatBlock {
    /// Create a stat block.
    pub const fn new(strength: i32, dexterity: i32, intelligence: i32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
        }
    }

    /// Read one stat.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
        }
    }

    /// Borrow one stat mutably.
    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
        }
    }

    /// Overwrite one stat.
    pub fn set(&mut self, stat: Stat, value: i32) {
        *self.get_mut(stat) = value;
    }

    /// Iterate `(stat, value)` pairs in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    /// True when any stat has dropped to zero or below.
    pub fn any_depleted(&self) -> bool {
        self.iter().any(|(_, value)| value <= 0)
    }
}
