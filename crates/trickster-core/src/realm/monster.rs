//! Monsters and the monster subsystem port.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Handle to a monster owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

/// How a monster regards the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attitude {
    /// Attacks the player.
    Hostile,
    /// Ignores the player.
    Neutral,
    /// Fights for the player.
    Friendly,
}

/// Spiritual nature of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holiness {
    /// Ordinary living creature.
    Natural,
    /// Holy being.
    Holy,
    /// Undead.
    Undead,
    /// Demon.
    Demonic,
    /// Construct or plant.
    Nonliving,
}

/// How well a monster handles items. Ordered from least to most capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemUse {
    /// Cannot use items.
    Nothing,
    /// Opens doors only.
    Open,
    /// Uses the equipment it was generated with.
    StartingEquipment,
    /// Picks up weapons and armour.
    WeaponsArmour,
    /// Uses anything.
    Everything,
}

/// Deity a monster serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// This deity.
    Trickster,
    /// A benevolent deity.
    Benevolent,
    /// Any other deity.
    Other,
}

/// Broad family of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genus {
    /// Orcs; their god forbids meddling with them.
    Orc,
    /// Humans and elves.
    Humanoid,
    /// Demons.
    Demon,
    /// Animals.
    Beast,
    /// Anything else.
    Other,
}

/// Equipment slot of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvSlot {
    /// Wielded weapon.
    Weapon,
    /// Alternate weapon.
    AltWeapon,
    /// Ammunition.
    Missile,
}

impl InvSlot {
    /// Slots in the order chaos upgrades inspect them.
    pub const ALL: [InvSlot; 3] = [InvSlot::Weapon, InvSlot::AltWeapon, InvSlot::Missile];
}

/// Items a monster carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonsterInventory {
    /// Wielded weapon.
    pub weapon: Option<Item>,
    /// Alternate weapon.
    pub alt_weapon: Option<Item>,
    /// Ammunition.
    pub missile: Option<Item>,
}

impl MonsterInventory {
    /// Borrow the item in `slot`.
    pub fn get(&self, slot: InvSlot) -> Option<&Item> {
        match slot {
            InvSlot::Weapon => self.weapon.as_ref(),
            InvSlot::AltWeapon => self.alt_weapon.as_ref(),
            InvSlot::Missile => self.missile.as_ref(),
        }
    }

    /// Borrow the item in `slot` mutably.
    pub fn get_mut(&mut self, slot: InvSlot) -> Option<&mut Item> {
        match slot {
            InvSlot::Weapon => self.weapon.as_mut(),
            InvSlot::AltWeapon => self.alt_weapon.as_mut(),
            InvSlot::Missile => self.missile.as_mut(),
        }
    }

    /// Occupied slots with their items, in [`InvSlot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (InvSlot, &Item)> {
        InvSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }
}

/// A monster record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Handle.
    pub id: MonsterId,
    /// Species name, or the proper name of a unique.
    pub name: String,
    /// Uniques are named without an article.
    pub unique: bool,
    /// Still alive.
    pub alive: bool,
    /// Attitude toward the player.
    pub attitude: Attitude,
    /// Running away.
    pub fleeing: bool,
    /// Panicking.
    pub panicking: bool,
    /// Item handling capability.
    pub item_use: ItemUse,
    /// Spiritual nature.
    pub holiness: Holiness,
    /// Deity served, if any.
    pub god: Option<Alignment>,
    /// Broad family.
    pub genus: Genus,
    /// Hidden under water or lava.
    pub submerged: bool,
    /// Already a shapeshifter.
    pub shapeshifter: bool,
    /// Can be polymorphed without breaking the game.
    pub mutable: bool,
    /// Within the player's line of sight.
    pub in_view: bool,
    /// The player can actually see it.
    pub visible: bool,
    /// Carried items.
    pub inventory: MonsterInventory,
}

impl Monster {
    /// A living, hostile, visible natural creature in view, carrying nothing.
    pub fn new(id: MonsterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unique: false,
            alive: true,
            attitude: Attitude::Hostile,
            fleeing: false,
            panicking: false,
            item_use: ItemUse::StartingEquipment,
            holiness: Holiness::Natural,
            god: None,
            genus: Genus::Humanoid,
            submerged: false,
            shapeshifter: false,
            mutable: true,
            in_view: true,
            visible: true,
            inventory: MonsterInventory::default(),
        }
    }

    /// Friendly or neutral monsters won't attack the player.
    pub fn wont_attack(&self) -> bool {
        self.attitude != Attitude::Hostile
    }

    /// Sentence-initial name: `Boris`, `Your ogre`, `The ogre`.
    pub fn name_capitalised(&self) -> String {
        if self.unique {
            self.name.clone()
        } else if self.attitude == Attitude::Friendly {
            format!("Your {}", self.name)
        } else {
            format!("The {}", self.name)
        }
    }
}

/// Temporary or permanent status the engine can inflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterStatus {
    /// Moves erratically for `duration` turns.
    Confusion {
        /// Length in turns.
        duration: i32,
    },
    /// Changes form from time to time.
    Shapeshifter,
    /// Changes form every turn.
    GlowingShapeshifter,
}

/// Direction of a polymorph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolymorphBias {
    /// Toward a more powerful form.
    Stronger,
    /// Toward a weaker form.
    Weaker,
}

/// Tier of summoned demon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemonClass {
    /// Imps and the like.
    Lesser,
    /// Mid-tier demons.
    Common,
    /// Demon lords' lieutenants.
    Greater,
}

/// What a summon should produce. The host picks the species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Creature {
    /// A demon of the given tier.
    Demon(DemonClass),
    /// A chaos spawn.
    ChaosSpawn,
    /// A holy warrior borrowed from elsewhere.
    HolyWarrior,
}

impl Creature {
    /// Whether the summon is a demon.
    pub fn is_demonic(self) -> bool {
        !matches!(self, Self::HolyWarrior)
    }
}

/// Why a creature is summoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummonReason {
    /// To help the player.
    Aid,
    /// To punish the player.
    Wrath,
}

/// A summon near the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonRequest {
    /// What to summon.
    pub creature: Creature,
    /// Initial attitude.
    pub attitude: Attitude,
    /// Summon duration tier; 0 is permanent.
    pub duration: u8,
    /// Why it is summoned.
    pub reason: SummonReason,
}

/// Monster subsystem.
pub trait MonsterPort {
    /// Every monster on the level.
    fn level_monsters(&self) -> Vec<MonsterId>;

    /// Monsters within the player's line of sight.
    fn nearby_monsters(&self) -> Vec<MonsterId>;

    /// Look up a monster.
    fn monster(&self, id: MonsterId) -> Option<&Monster>;

    /// Look up a monster mutably.
    fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster>;

    /// Turn a monster into a random other monster.
    fn polymorph(&mut self, id: MonsterId, bias: PolymorphBias) -> bool;

    /// Apply a status; false when the monster resisted or already had it.
    fn add_status(&mut self, id: MonsterId, status: MonsterStatus) -> bool;

    /// Change attitude.
    fn set_attitude(&mut self, id: MonsterId, attitude: Attitude);

    /// Wake the monster and set it on the player.
    fn alert(&mut self, id: MonsterId);

    /// Teleport the monster a short distance; false when nowhere to go.
    fn blink(&mut self, id: MonsterId) -> bool;

    /// Summon a creature next to the player.
    fn summon(&mut self, request: SummonRequest) -> Option<MonsterId>;

    /// Animate nearby weapons against the player.
    fn animate_hostile_weapons(&mut self, power: i32) -> bool;

    /// Turn the monster hostile if it hates the player's religion.
    fn anger_if_hated(&mut self, id: MonsterId);
}
