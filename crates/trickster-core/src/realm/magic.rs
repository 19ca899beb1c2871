//! Spells, miscasts and other raw magic.

use serde::{Deserialize, Serialize};

/// Spells the deity can make the player cast, roughly weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spell {
    /// Blink.
    Blink,
    /// Confusing touch.
    ConfusingTouch,
    /// Magic mapping.
    MagicMapping,
    /// Detect items.
    DetectItems,
    /// Detect creatures.
    DetectCreatures,
    /// Mass confusion.
    MassConfusion,
    /// Mass sleep.
    MassSleep,
    /// Dispersal.
    Dispersal,
    /// Stoneskin.
    Stoneskin,
    /// Ring of flames.
    RingOfFlames,
    /// Toxic radiance.
    ToxicRadiance,
    /// Vorpal blade.
    VorpalBlade,
    /// Silver hammer.
    SilverHammer,
    /// Fire brand.
    FireBrand,
    /// Freezing aura.
    FreezingAura,
    /// Poison weapon.
    PoisonWeapon,
    /// Stonemail.
    Stonemail,
    /// Lethal infusion.
    LethalInfusion,
    /// Excruciating wounds.
    ExcruciatingWounds,
    /// Warp brand.
    WarpBrand,
    /// Dancing weapon.
    DancingWeapon,
    /// Recall.
    Recall,
    /// Summon butterflies.
    SummonButterflies,
    /// Summon small mammals.
    SummonSmallMammals,
    /// Summon scorpions.
    SummonScorpions,
    /// Summon swarm.
    SummonSwarm,
    /// Fly.
    Fly,
    /// Spider form.
    SpiderForm,
    /// Statue form.
    StatueForm,
    /// Ice form.
    IceForm,
    /// Dragon form.
    DragonForm,
    /// Animate dead.
    AnimateDead,
    /// Summon wraiths.
    SummonWraiths,
    /// Shadow creatures.
    ShadowCreatures,
    /// Summon horrible things.
    SummonHorribleThings,
    /// Canine familiar.
    CanineFamiliar,
    /// Summon ice beast.
    SummonIceBeast,
    /// Summon ugly thing.
    SummonUglyThing,
    /// Ball lightning.
    BallLightning,
    /// Summon dragon.
    SummonDragon,
    /// Death channel.
    DeathChannel,
    /// Necromutation.
    Necromutation,
}

impl Spell {
    /// The castable list in ascending order of power.
    pub const BY_POWER: [Spell; 42] = [
        Spell::Blink,
        Spell::ConfusingTouch,
        Spell::MagicMapping,
        Spell::DetectItems,
        Spell::DetectCreatures,
        Spell::MassConfusion,
        Spell::MassSleep,
        Spell::Dispersal,
        Spell::Stoneskin,
        Spell::RingOfFlames,
        Spell::ToxicRadiance,
        Spell::VorpalBlade,
        Spell::SilverHammer,
        Spell::FireBrand,
        Spell::FreezingAura,
        Spell::PoisonWeapon,
        Spell::Stonemail,
        Spell::LethalInfusion,
        Spell::ExcruciatingWounds,
        Spell::WarpBrand,
        Spell::DancingWeapon,
        Spell::Recall,
        Spell::SummonButterflies,
        Spell::SummonSmallMammals,
        Spell::SummonScorpions,
        Spell::SummonSwarm,
        Spell::Fly,
        Spell::SpiderForm,
        Spell::StatueForm,
        Spell::IceForm,
        Spell::DragonForm,
        Spell::AnimateDead,
        Spell::SummonWraiths,
        Spell::ShadowCreatures,
        Spell::SummonHorribleThings,
        Spell::CanineFamiliar,
        Spell::SummonIceBeast,
        Spell::SummonUglyThing,
        Spell::BallLightning,
        Spell::SummonDragon,
        Spell::DeathChannel,
        Spell::Necromutation,
    ];
}

/// Domain of a miscast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpellSchool {
    /// Let the host choose.
    #[default]
    Random,
    /// Conjurations.
    Conjuration,
    /// Enchantments.
    Enchantment,
    /// Translocations.
    Translocation,
    /// Summonings.
    Summoning,
    /// Necromancy.
    Necromancy,
    /// Transmutations.
    Transmutation,
}

/// A spell backfiring on the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscastRequest {
    /// Domain of the backlash.
    pub school: SpellSchool,
    /// Strength tier, 0 (harmless) to 3 (severe).
    pub tier: u8,
    /// Cause recorded if the player dies.
    pub cause: String,
    /// Hit points the backlash must leave standing; 0 allows death.
    pub lethality_margin: i32,
}

/// Magic subsystem.
pub trait MagicPort {
    /// Make the player cast `spell` at `power`.
    fn cast_spell(&mut self, spell: Spell, power: i32, silent: bool);

    /// Backfire a spell on the player.
    fn miscast(&mut self, request: MiscastRequest);

    /// Turn nearby rock walls to glass; false when nothing changed.
    fn vitrify_area(&mut self, radius: i32) -> bool;

    /// Explode lightning around the player. With `protect_player` set the
    /// player takes no damage.
    fn lightning_burst(&mut self, protect_player: bool);

    /// Torment the player.
    fn torment_player(&mut self);
}
