//! The player character port.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::item::ItemId;
use crate::mutation::{Mutation, MutationCounts, MutationPick};
use crate::stats::{Stat, StatBlock};

/// A map position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The feature on a map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terrain {
    /// Open floor.
    #[default]
    Floor,
    /// Wadeable water.
    ShallowWater,
    /// Water that drowns non-swimmers.
    DeepWater,
    /// Molten rock.
    Lava,
    /// Stairs or another exit.
    Stairs,
    /// Anything else walkable.
    Other,
}

/// What kind of level the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LevelKind {
    /// An ordinary dungeon level.
    #[default]
    Dungeon,
    /// The ever-shifting Abyss.
    Abyss,
    /// Pandemonium.
    Pandemonium,
    /// A portal vault or other side level.
    Portal,
}

/// Player equipment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    /// Wielded weapon or other item.
    Weapon,
    /// Cloak.
    Cloak,
    /// Gloves.
    Gloves,
    /// Amulet.
    Amulet,
    /// Left ring.
    LeftRing,
    /// Right ring.
    RightRing,
}

/// Potions the deity can force on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Potion {
    /// Heals a little and cures ailments.
    Healing,
    /// Heals a lot.
    HealWounds,
    /// Haste.
    Speed,
    /// Extra strength.
    Might,
    /// Invisibility.
    Invisibility,
    /// Berserk rage.
    Berserk,
    /// Experience.
    Experience,
}

impl Potion {
    /// Potions in the order a benevolent draw picks from.
    pub const BENEFICIAL: [Potion; 7] = [
        Potion::Healing,
        Potion::HealWounds,
        Potion::Speed,
        Potion::Might,
        Potion::Invisibility,
        Potion::Berserk,
        Potion::Experience,
    ];
}

/// Why the player arrived on the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntryReason {
    /// Walked in on purpose.
    #[default]
    Voluntary,
    /// Walked in by accident or under duress.
    Unwitting,
    /// Banished by a deity.
    Banished,
    /// Anything else.
    Other,
}

/// How and on whose account the player reached the current level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryCause {
    /// How the player got here.
    pub reason: EntryReason,
    /// The deity credited with sending the player here, if any.
    pub credited: Option<Actor>,
}

/// Rune bookkeeping for the rune-shortage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuneTally {
    /// Unique runes held.
    pub unique: i32,
    /// Demonic runes held.
    pub demonic: i32,
    /// Abyssal runes held.
    pub abyssal: i32,
    /// Runes already placed at the final gate.
    pub placed: i32,
    /// The player is inside the final branch.
    pub in_final_branch: bool,
    /// The Orb still waits in the final branch.
    pub orb_in_final_branch: bool,
}

impl RuneTally {
    /// Runes needed to open the final branch.
    pub const NEEDED: i32 = 3;

    /// Runes still usable to enter the final branch.
    pub fn available(&self) -> i32 {
        self.unique + self.demonic + self.abyssal - self.placed
    }
}

/// The player character.
pub trait PlayerPort {
    /// Current hit points.
    fn hp(&self) -> i32;
    /// Maximum hit points.
    fn hp_max(&self) -> i32;
    /// Overwrite current hit points.
    fn set_hp(&mut self, hp: i32);
    /// Temporarily lower maximum hit points by `amount`.
    fn deflate_hp_max(&mut self, amount: i32);

    /// Current stats.
    fn stats(&self) -> StatBlock;
    /// Overwrite one stat.
    fn set_stat(&mut self, stat: Stat, value: i32);
    /// Stat maximums.
    fn max_stats(&self) -> StatBlock;
    /// Overwrite one stat maximum.
    fn set_max_stat(&mut self, stat: Stat, value: i32);
    /// Drain `amount` from `stat`, or from a random stat when `None`.
    fn lose_stat(&mut self, stat: Option<Stat>, amount: i32, cause: &str);
    /// The player is under the effect of might.
    fn might_active(&self) -> bool;

    /// Experience points.
    fn experience(&self) -> i64;
    /// Drain experience once.
    fn drain_experience(&mut self);
    /// Negative-energy resistance, 0 to 3.
    fn life_protection(&self) -> i32;
    /// The player shrugs off torment.
    fn torment_resistant(&self) -> bool;

    /// Level of one mutation.
    fn mutation_level(&self, mutation: Mutation) -> i32;
    /// Every mutation level.
    fn mutations(&self) -> MutationCounts;
    /// Overall amount of mutation.
    fn how_mutated(&self) -> i32;
    /// Mutation would not break the character.
    fn can_safely_mutate(&self) -> bool;
    /// Apply a mutation. `non_lethal` forbids mutations that could kill.
    fn mutate(&mut self, pick: MutationPick, non_lethal: bool) -> bool;
    /// Remove one level of a mutation.
    fn delete_mutation(&mut self, mutation: Mutation) -> bool;

    /// Teleport at once to a random spot on the level.
    fn teleport_now(&mut self);
    /// Teleport to a spot free of hazardous terrain.
    fn teleport_to_safety(&mut self);
    /// Short-range random teleport.
    fn random_blink(&mut self);

    /// Current position.
    fn position(&self) -> Coord;
    /// Terrain under the player.
    fn terrain(&self) -> Terrain;
    /// Flying or levitating.
    fn airborne(&self) -> bool;
    /// Able to swim in deep water.
    fn swimming(&self) -> bool;
    /// Fire resistance; 0 or less is none.
    fn fire_resistance(&self) -> i32;
    /// The surroundings are dangerous right now.
    fn in_dangerous_place(&self) -> bool;

    /// Item in an equipment slot.
    fn equipped(&self, slot: EquipSlot) -> Option<ItemId>;
    /// Berserking is possible right now.
    fn can_go_berserk(&self) -> bool;
    /// Apply a potion's effect at `power`.
    fn quaff(&mut self, potion: Potion, power: i32);
    /// Confuse the player; false when resisted.
    fn confuse(&mut self, duration: i32) -> bool;

    /// What kind of level the player is on.
    fn level_kind(&self) -> LevelKind;
    /// Send the player to the Abyss.
    fn banish(&mut self, cause: &str);
    /// How the player reached the current level.
    fn entry_cause(&self) -> EntryCause;
    /// Change who is credited for the current level entry.
    fn credit_entry_cause(&mut self, actor: Actor);
    /// Rune bookkeeping.
    fn rune_tally(&self) -> RuneTally;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runes_available_subtracts_placed() {
        let tally = RuneTally {
            unique: 2,
            demonic: 1,
            abyssal: 1,
            placed: 2,
            ..RuneTally::default()
        };
        assert_eq!(tally.available(), 2);
    }
}
