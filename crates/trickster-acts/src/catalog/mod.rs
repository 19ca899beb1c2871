//! The effect catalog.
//!
//! Both pools are ordered tables walked top to bottom by the selection
//! engine. An entry's odds are `weight / severity`, so at low severity the
//! mild entries near the top almost always win, and higher severity lets the
//! heavier entries further down come into reach.

pub mod chaos;
pub mod favourable;
pub mod gifts;
pub mod summons;
pub mod unfavourable;

use serde::{Deserialize, Serialize};
use trickster_core::{Chance, draw_succeeds};

use crate::context::ActContext;

/// Identifies a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Force a beneficial potion.
    Potion,
    /// Cast a random spell.
    Spell,
    /// Confuse nearby hostiles.
    ConfuseMonsters,
    /// A group of helpers of mixed loyalty.
    SummonHelpers,
    /// An item gift.
    ItemGift,
    /// One temporary ally.
    SummonAlly,
    /// Polymorph a monster toward the player's advantage.
    GoodPolymorph,
    /// Blink everything on the level, then the player.
    RearrangePieces,
    /// Teleport hops ending somewhere calm, usually.
    TeleportJourney,
    /// Turn nearby walls to glass.
    Vitrify,
    /// Beneficial mutations at a cost in hit points.
    GoodMutations,
    /// One permanent powerful ally.
    MajorAlly,
    /// Lightning around a player in danger.
    DivineLightning,
    /// A miscast without effect.
    HarmlessMiscast,
    /// A weak miscast.
    MinorMiscast,
    /// Drain one stat.
    StatDrain,
    /// A moderate miscast.
    MediumMiscast,
    /// Teleport hops that stop at the first dangerous landing.
    HazardousJourney,
    /// Give a hostile monster a chaos-branded weapon.
    ChaosUpgrade,
    /// Random mutations at a cost in hit points.
    BadMutations,
    /// Polymorph a monster against the player.
    BadPolymorph,
    /// Confuse the player.
    ConfusePlayer,
    /// Drain experience or torment.
    DrainOrTorment,
    /// Dancing weapons or a hostile swarm.
    HostileSummons,
    /// A strong miscast.
    SevereMiscast,
    /// Banish the player to the Abyss.
    Banishment,
}

/// Result of running a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    /// The effect happened; the act is over.
    Applied,
    /// Nothing suitable; draw again.
    Skipped,
}

/// Chance of an entry being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Odds {
    /// `weight` in `severity`.
    Weighted(i32),
    /// One in `severity`.
    Reciprocal,
}

impl Odds {
    /// Roll these odds at `severity`.
    pub fn roll(self, severity: i32, rng: &mut dyn Chance) -> bool {
        match self {
            Self::Weighted(weight) => draw_succeeds(weight, severity, rng),
            Self::Reciprocal => rng.one_in(severity.max(1)),
        }
    }
}

/// A condition on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// No condition.
    Always,
    /// Something threatens the player.
    Tension,
    /// The player is not in the Abyss.
    OutsideAbyss,
    /// A roll of 16 in the player's overall mutation amount.
    LightlyMutated,
}

impl Guard {
    /// Evaluate the guard.
    pub fn check(self, ctx: &mut ActContext<'_>) -> bool {
        match self {
            Self::Always => true,
            Self::Tension => ctx.tension > 0,
            Self::OutsideAbyss => !ctx.in_abyss(),
            Self::LightlyMutated => {
                let mutated = ctx.realm.how_mutated();
                ctx.rng.x_in_y(16, mutated)
            }
        }
    }
}

/// Signature of an effect handler.
pub type Handler = fn(&mut ActContext<'_>) -> EffectOutcome;

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    /// Identity for reports.
    pub kind: EffectKind,
    /// Draw odds.
    pub odds: Odds,
    /// Checked before the draw; consumes no randomness when it fails.
    pub before: Guard,
    /// Checked after a successful draw; failing falls through to the next
    /// entry.
    pub after: Guard,
    /// The effect itself.
    pub apply: Handler,
}

impl Effect {
    const fn weighted(kind: EffectKind, weight: i32, apply: Handler) -> Self {
        Self {
            kind,
            odds: Odds::Weighted(weight),
            before: Guard::Always,
            after: Guard::Always,
            apply,
        }
    }

    const fn before(mut self, guard: Guard) -> Self {
        self.before = guard;
        self
    }

    const fn after(mut self, guard: Guard) -> Self {
        self.after = guard;
        self
    }
}

/// The favourable pool, in draw order.
pub static FAVOURABLE: [Effect; 14] = [
    Effect::weighted(EffectKind::Potion, 2, favourable::potion).before(Guard::Tension),
    Effect::weighted(EffectKind::Spell, 3, favourable::spell),
    Effect::weighted(EffectKind::ConfuseMonsters, 4, favourable::confuse_monsters),
    Effect::weighted(EffectKind::SummonHelpers, 5, favourable::summon_helpers)
        .before(Guard::Tension),
    Effect::weighted(EffectKind::ItemGift, 6, gifts::item_gift),
    Effect::weighted(EffectKind::SummonAlly, 7, favourable::summon_ally),
    Effect::weighted(EffectKind::GoodPolymorph, 8, favourable::polymorph),
    Effect::weighted(EffectKind::ItemGift, 9, gifts::item_gift),
    Effect::weighted(EffectKind::RearrangePieces, 10, favourable::rearrange_pieces)
        .after(Guard::OutsideAbyss),
    Effect::weighted(EffectKind::TeleportJourney, 11, favourable::teleport_journey)
        .after(Guard::OutsideAbyss),
    Effect::weighted(EffectKind::Vitrify, 12, favourable::vitrify),
    Effect::weighted(EffectKind::GoodMutations, 13, favourable::mutations)
        .after(Guard::LightlyMutated),
    Effect::weighted(EffectKind::MajorAlly, 14, favourable::major_ally).before(Guard::Tension),
    Effect::weighted(EffectKind::DivineLightning, 15, favourable::divine_lightning),
];

/// The unfavourable pool, in draw order.
pub static UNFAVOURABLE: [Effect; 13] = [
    Effect::weighted(EffectKind::HarmlessMiscast, 3, unfavourable::harmless_miscast),
    Effect::weighted(EffectKind::MinorMiscast, 4, unfavourable::minor_miscast),
    Effect::weighted(EffectKind::StatDrain, 5, unfavourable::stat_drain),
    Effect::weighted(EffectKind::MediumMiscast, 6, unfavourable::medium_miscast),
    Effect::weighted(EffectKind::HazardousJourney, 7, unfavourable::teleport_journey)
        .after(Guard::OutsideAbyss),
    Effect::weighted(EffectKind::ChaosUpgrade, 8, unfavourable::chaos_upgrade),
    Effect::weighted(EffectKind::BadMutations, 9, unfavourable::mutations),
    Effect::weighted(EffectKind::BadPolymorph, 10, unfavourable::polymorph),
    Effect::weighted(EffectKind::ConfusePlayer, 11, unfavourable::confuse_player)
        .before(Guard::Tension),
    Effect::weighted(EffectKind::DrainOrTorment, 12, unfavourable::drain_or_torment),
    Effect::weighted(EffectKind::HostileSummons, 13, unfavourable::hostile_summons),
    Effect::weighted(EffectKind::SevereMiscast, 14, unfavourable::severe_miscast),
    Effect {
        kind: EffectKind::Banishment,
        odds: Odds::Reciprocal,
        before: Guard::Always,
        after: Guard::OutsideAbyss,
        apply: unfavourable::banishment,
    },
];
