//! What the deity says while it acts.

use serde::{Deserialize, Serialize};

/// A speech occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speech {
    /// A potion is forced on the player.
    PotionEffect,
    /// A spell is cast through the player.
    SpellEffect,
    /// Somebody gets confused.
    Confusion,
    /// A group of demons arrives.
    MultipleSummons,
    /// A group of demons and others arrives.
    MultipleMixedSummons,
    /// A group with no demons in it arrives.
    MultipleHolySummons,
    /// One demon ally.
    SingleSummon,
    /// One borrowed, non-demonic ally.
    SingleHolySummon,
    /// A permanent demon ally.
    SingleMajorDemonSummon,
    /// A permanent non-demonic ally.
    SingleMajorHolySummon,
    /// A polymorph in the player's favour.
    GoodPolymorph,
    /// A polymorph against the player.
    BadPolymorph,
    /// Everything on the level blinks.
    RearrangePieces,
    /// A chain of teleports.
    TeleportJourney,
    /// Walls turn to glass.
    Vitrification,
    /// Beneficial mutations.
    GoodMutations,
    /// Arbitrary mutations.
    RandomMutations,
    /// A gift mocking cursed equipment.
    CursedGift,
    /// A ring for cursed ring fingers.
    RingGift,
    /// Something unsuited to the wielded weapon.
    WeaponGift,
    /// Armour for a cursed cloak.
    ArmourGift,
    /// Any other gift.
    GeneralGift,
    /// A miscast without effect.
    ZeroMiscast,
    /// A weak miscast.
    MinorMiscast,
    /// A moderate miscast.
    MediumMiscast,
    /// A strong miscast.
    MajorMiscast,
    /// A stat is drained.
    LoseStats,
    /// A monster's gear gains the chaos brand.
    ChaosUpgrade,
    /// Experience drain or torment.
    DrainingOrTorment,
    /// Hostile summons.
    HostileMonster,
    /// Banishment to the Abyss.
    Banishment,
    /// The player died by accident.
    AccidentalHomicide,
    /// The player is brought back.
    Resurrection,
}

impl Speech {
    /// The line spoken by the deity called `name`.
    pub fn line(self, name: &str) -> String {
        match self {
            Self::PotionEffect => format!("{name} pours something down your throat."),
            Self::SpellEffect => format!("{name} moves your hands for you."),
            Self::Confusion => format!("{name} giggles. The world tilts."),
            Self::MultipleSummons => format!("{name} opens a door to somewhere hot."),
            Self::MultipleMixedSummons => format!("{name} invites a motley crowd."),
            Self::MultipleHolySummons => format!("{name} borrows some shining friends."),
            Self::SingleSummon => format!("{name} sends you a playmate."),
            Self::SingleHolySummon => format!("{name} borrows someone shiny for you."),
            Self::SingleMajorDemonSummon => format!("{name} calls up something enormous."),
            Self::SingleMajorHolySummon => format!("{name} brings a radiant champion."),
            Self::GoodPolymorph | Self::BadPolymorph => {
                format!("{name} reshapes a piece on the board.")
            }
            Self::RearrangePieces => format!("{name} rearranges the pieces."),
            Self::TeleportJourney => format!("{name} takes you for a ride."),
            Self::Vitrification => format!("{name} turns the walls to glass."),
            Self::GoodMutations | Self::RandomMutations => {
                format!("{name} wonders what you would look like with more bits.")
            }
            Self::CursedGift => format!("{name} grins at your predicament."),
            Self::RingGift => format!("{name} thinks you need more jewellery."),
            Self::WeaponGift => format!("{name} suggests a change of hobby."),
            Self::ArmourGift => format!("{name} dresses you up."),
            Self::GeneralGift => format!("{name} grants you a gift!"),
            Self::ZeroMiscast => format!("{name} snaps its fingers."),
            Self::MinorMiscast => format!("{name} makes a rude noise."),
            Self::MediumMiscast => format!("{name} cackles."),
            Self::MajorMiscast => format!("{name} howls with glee."),
            Self::LoseStats => format!("{name} takes a little something back."),
            Self::ChaosUpgrade => format!("{name} gives someone a better toy."),
            Self::DrainingOrTorment => format!("{name} squeezes."),
            Self::HostileMonster => format!("{name} invites some unfriendly guests."),
            Self::Banishment => format!("{name} sends you somewhere far away."),
            Self::AccidentalHomicide => format!("{name} looks at your corpse. \"Oops.\""),
            Self::Resurrection => format!("{name} puts you back together, mostly."),
        }
    }
}
