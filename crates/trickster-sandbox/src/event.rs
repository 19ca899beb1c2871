//! The sandbox journal.

use serde::{Deserialize, Serialize};
use trickster_core::Channel;
use trickster_core::realm::{
    Attitude, Coord, Creature, ItemClass, ItemId, MonsterId, MonsterStatus, PolymorphBias, Potion,
    Spell, Subtype, Terrain,
};
use trickster_core::{Mutation, Stat};

/// Something that happened to the sandbox, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RealmEvent {
    /// A message shown to the player.
    Notice {
        /// Who is speaking.
        channel: Channel,
        /// The message.
        text: String,
    },
    /// A potion took effect.
    Quaffed {
        /// The potion.
        potion: Potion,
        /// Strength of its effect.
        power: i32,
    },
    /// The player cast a spell.
    Cast {
        /// The spell.
        spell: Spell,
        /// Casting power.
        power: i32,
    },
    /// A miscast.
    Miscast {
        /// Severity tier, 0 to 3.
        tier: u8,
        /// Hit points lost.
        damage: i32,
    },
    /// Walls around the player turned to glass.
    Vitrified {
        /// Reach of the effect.
        radius: i32,
    },
    /// Divine lightning struck.
    Lightning {
        /// The player was spared.
        protected: bool,
    },
    /// The player was tormented.
    Tormented,
    /// Experience was drained.
    Drained,
    /// A stat was drained.
    StatLost {
        /// The stat.
        stat: Stat,
        /// Points lost.
        amount: i32,
    },
    /// A mutation level was gained.
    Mutated {
        /// The mutation.
        mutation: Mutation,
    },
    /// A mutation level was removed.
    MutationDeleted {
        /// The mutation.
        mutation: Mutation,
    },
    /// The player teleported.
    Teleported {
        /// Landing tile.
        to: Coord,
        /// Terrain at the landing tile.
        terrain: Terrain,
    },
    /// The player blinked.
    Blinked,
    /// The player was moved off a hazard.
    RescuedToSafety,
    /// The player was confused.
    Confused {
        /// Turns of confusion.
        duration: i32,
    },
    /// The player was sent to the Abyss.
    Banished {
        /// Recorded cause.
        cause: String,
    },
    /// A monster was summoned.
    Summoned {
        /// The new monster.
        id: MonsterId,
        /// What was asked for.
        creature: Creature,
        /// Its side.
        attitude: Attitude,
    },
    /// A monster changed shape.
    Polymorphed {
        /// The monster.
        id: MonsterId,
        /// Direction of the change.
        bias: PolymorphBias,
    },
    /// A monster gained a status.
    StatusAdded {
        /// The monster.
        id: MonsterId,
        /// The status.
        status: MonsterStatus,
    },
    /// A monster changed sides.
    AttitudeChanged {
        /// The monster.
        id: MonsterId,
        /// Its new side.
        attitude: Attitude,
    },
    /// A monster noticed the player.
    Alerted {
        /// The monster.
        id: MonsterId,
    },
    /// A monster blinked.
    MonsterBlinked {
        /// The monster.
        id: MonsterId,
    },
    /// Weapons were animated against the player.
    DancingWeapons {
        /// Animation power.
        power: i32,
    },
    /// An item appeared at the player's feet.
    ItemCreated {
        /// The new item.
        id: ItemId,
        /// Its class.
        class: ItemClass,
        /// The sub-type that was asked for.
        subtype: Subtype,
    },
    /// An acquirement was granted.
    Acquired {
        /// The new item.
        id: ItemId,
        /// Its class.
        class: ItemClass,
    },
}
