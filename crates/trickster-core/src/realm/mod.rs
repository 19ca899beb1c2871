//! Ports into the host game.
//!
//! The engine owns no game entities. Everything it touches (the player,
//! monsters on the level, generated items, spells, messages) is reached
//! through these traits, which the host implements over its own storage.

use serde::{Deserialize, Serialize};

pub mod actor;
pub mod item;
pub mod magic;
pub mod monster;
pub mod player;

pub use actor::Actor;
pub use item::{
    Artefact, Brand, GiftOrigin, Item, ItemClass, ItemFlags, ItemId, ItemPort, ItemRequest,
    MissileKind, RuneKind, Subtype,
};
pub use magic::{MagicPort, MiscastRequest, Spell, SpellSchool};
pub use monster::{
    Alignment, Attitude, Creature, DemonClass, Genus, Holiness, InvSlot, ItemUse, Monster,
    MonsterId, MonsterInventory, MonsterPort, MonsterStatus, PolymorphBias, SummonReason,
    SummonRequest,
};
pub use player::{
    Coord, EntryCause, EntryReason, EquipSlot, LevelKind, PlayerPort, Potion, RuneTally, Terrain,
};

/// Where a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Spoken by a deity.
    God,
    /// Plain narration.
    Plain,
    /// About a specific monster.
    Monster,
}

/// Receives notices for the player. Fire-and-forget.
pub trait Herald {
    /// Show `text` on `channel`.
    fn notify(&mut self, channel: Channel, text: &str);
}

/// Threat assessment.
pub trait ThreatPort {
    /// How dangerous the player's surroundings are from `actor`'s point of
    /// view. Zero means nothing threatens the player.
    fn tension(&self, actor: &Actor) -> i32;
}

/// Religious standing and the acting-entity stack.
pub trait FaithPort {
    /// Whether the player currently worships this deity.
    fn worships_trickster(&self) -> bool;

    /// Whether the player is under this deity's penance.
    fn penance_active(&self) -> bool;

    /// The entity on whose behalf the current action runs, if any.
    fn current_actor(&self) -> Option<Actor>;

    /// Mark `actor` as acting until the matching [`FaithPort::pop_actor`].
    fn push_actor(&mut self, actor: Actor);

    /// End the innermost acting scope.
    fn pop_actor(&mut self) -> Option<Actor>;
}

/// Everything the engine needs from the host game.
///
/// Implemented automatically for any type that implements every port.
pub trait Realm:
    PlayerPort + MonsterPort + ItemPort + MagicPort + ThreatPort + FaithPort + Herald
{
}

impl<T> Realm for T where
    T: PlayerPort + MonsterPort + ItemPort + MagicPort + ThreatPort + FaithPort + Herald + ?Sized
{
}
