//! Handlers of the unfavourable pool.

use tracing::debug;
use trickster_core::chance::pick;
use trickster_core::realm::{
    Attitude, MiscastRequest, MonsterId, MonsterStatus, PolymorphBias, SpellSchool, SummonReason,
    SummonRequest,
};
use trickster_core::{MutationPick, Stat};

use super::EffectOutcome;
use super::chaos::{apply_upgrade, monster_is_eligible, upgrade_slot};
use super::favourable::{mutate_player, polymorph_nearby};
use super::summons::{group_size, random_creature};
use crate::context::ActContext;
use crate::speech::Speech;

fn miscast(ctx: &mut ActContext<'_>, speech: Speech, tier: i32, cause: &str) -> EffectOutcome {
    ctx.speak(speech);
    let request = MiscastRequest {
        school: SpellSchool::Random,
        tier: u8::try_from(tier).unwrap_or(0),
        cause: format!("{cause} {}", ctx.name),
        lethality_margin: ctx.lethality_margin,
    };
    debug!(tier, margin = ctx.lethality_margin, "miscast");
    ctx.realm.miscast(request);
    EffectOutcome::Applied
}

/// A miscast that only makes noise.
pub fn harmless_miscast(ctx: &mut ActContext<'_>) -> EffectOutcome {
    miscast(ctx, Speech::ZeroMiscast, 0, "the mischief of")
}

/// A miscast of tier 0 or 1.
pub fn minor_miscast(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let tier = ctx.rng.below(2);
    miscast(ctx, Speech::MinorMiscast, tier, "the capriciousness of")
}

/// A miscast of tier 0 to 2.
pub fn medium_miscast(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let tier = ctx.rng.below(3);
    miscast(ctx, Speech::MediumMiscast, tier, "the capriciousness of")
}

/// A miscast of any tier.
pub fn severe_miscast(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let tier = ctx.rng.below(4);
    miscast(ctx, Speech::MajorMiscast, tier, "the severe capriciousness of")
}

/// Drain one stat.
///
/// Unless the deity is being nasty, only a stat above 1 is chosen and it is
/// never taken below 1. Strength counts five lower while might is active
/// so the loss cannot kill once might wears off.
pub fn stat_drain(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let (stat, max) = if ctx.nasty {
        (None, 3)
    } else {
        let stats = ctx.realm.stats();
        let might = if ctx.realm.might_active() { 5 } else { 0 };
        let mut chosen = None;
        let mut count = 0;
        for stat in Stat::ALL {
            let value = match stat {
                Stat::Strength => stats.get(stat) - might,
                _ => stats.get(stat),
            };
            if value > 1 {
                count += 1;
                if ctx.rng.one_in(count) {
                    chosen = Some((stat, value - 1));
                }
            }
        }
        let Some((stat, max)) = chosen else {
            return EffectOutcome::Skipped;
        };
        (Some(stat), max)
    };

    ctx.speak(Speech::LoseStats);
    let amount = 1 + ctx.rng.below(max);
    let cause = format!("the vengeance of {}", ctx.name);
    debug!(?stat, amount, "draining stat");
    ctx.realm.lose_stat(stat, amount, &cause);
    EffectOutcome::Applied
}

/// Teleport hops that end as soon as the player lands somewhere dangerous.
pub fn teleport_journey(ctx: &mut ActContext<'_>) -> EffectOutcome {
    ctx.speak(Speech::TeleportJourney);
    loop {
        ctx.realm.teleport_now();
        if !ctx.rng.x_in_y(3, 4) || ctx.realm.in_dangerous_place() {
            break;
        }
    }
    EffectOutcome::Applied
}

/// Give a nearby hostile monster's weapon or ammunition the chaos brand.
pub fn chaos_upgrade(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let candidates: Vec<MonsterId> = ctx
        .realm
        .nearby_monsters()
        .into_iter()
        .filter(|&id| ctx.realm.monster(id).is_some_and(monster_is_eligible))
        .collect();
    let Some(&id) = pick(ctx.rng, &candidates) else {
        return EffectOutcome::Skipped;
    };
    let Some(slot) = ctx.realm.monster(id).and_then(upgrade_slot) else {
        unreachable!("monster {id:?} passed the chaos upgrade check with nothing to upgrade");
    };

    ctx.speak(Speech::ChaosUpgrade);
    if !apply_upgrade(ctx, id, slot) {
        return EffectOutcome::Skipped;
    }
    ctx.realm.alert(id);
    EffectOutcome::Applied
}

/// Random mutations. Only a nasty deity lets them kill.
pub fn mutations(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let non_lethal = !ctx.nasty;
    mutate_player(ctx, Speech::RandomMutations, MutationPick::RandomAny, non_lethal)
}

/// Reshape a nearby monster: hostiles get stronger and allies weaker.
pub fn polymorph(ctx: &mut ActContext<'_>) -> EffectOutcome {
    polymorph_nearby(ctx, Speech::BadPolymorph, |wont_attack| {
        if wont_attack {
            PolymorphBias::Weaker
        } else {
            PolymorphBias::Stronger
        }
    })
}

/// Confuse the player, and half the time everything nearby as well.
pub fn confuse_player(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let duration = ctx.rng.below(ctx.severity) + 1;
    if !ctx.realm.confuse(duration) {
        return EffectOutcome::Skipped;
    }
    ctx.speak(Speech::Confusion);

    if ctx.rng.coin_flip() {
        for id in ctx.realm.nearby_monsters() {
            let alive = ctx.realm.monster(id).is_some_and(|monster| monster.alive);
            if !alive || ctx.rng.one_in(20) {
                continue;
            }
            let duration = ctx.rng.below(ctx.severity);
            if ctx.realm.add_status(id, MonsterStatus::Confusion { duration }) {
                ctx.monster_message(id, " looks rather confused.");
            }
        }
    }
    EffectOutcome::Applied
}

fn drainable(ctx: &ActContext<'_>) -> bool {
    ctx.nasty || ctx.realm.experience() > 0
}

/// Drain experience one time in four, torment otherwise.
pub fn drain_or_torment(ctx: &mut ActContext<'_>) -> EffectOutcome {
    if ctx.rng.one_in(4) {
        if ctx.realm.life_protection() >= 3 || !drainable(ctx) {
            return EffectOutcome::Skipped;
        }
        ctx.speak(Speech::DrainingOrTorment);
        ctx.realm.drain_experience();
        for _ in 0..2 {
            if ctx.rng.below(ctx.severity) > 3 && drainable(ctx) {
                ctx.realm.drain_experience();
            }
        }
        EffectOutcome::Applied
    } else {
        if ctx.realm.torment_resistant() {
            return EffectOutcome::Skipped;
        }
        ctx.speak(Speech::DrainingOrTorment);
        ctx.realm.torment_player();
        EffectOutcome::Applied
    }
}

/// Animate hostile weapons one time in four, otherwise summon a hostile
/// group.
pub fn hostile_summons(ctx: &mut ActContext<'_>) -> EffectOutcome {
    if ctx.rng.one_in(4) {
        ctx.speak(Speech::HostileMonster);
        ctx.realm.animate_hostile_weapons(100);
        return EffectOutcome::Applied;
    }

    let count = group_size(ctx.rng, ctx.severity, 1, 14);
    let mut summoned = 0;
    for _ in 0..count {
        let request = SummonRequest {
            creature: random_creature(ctx.rng, ctx.severity, true),
            attitude: Attitude::Hostile,
            duration: 4,
            reason: SummonReason::Wrath,
        };
        if ctx.realm.summon(request).is_some() {
            summoned += 1;
        }
    }
    debug!(count, summoned, "hostile summons");
    if summoned == 0 {
        return EffectOutcome::Skipped;
    }
    ctx.speak(Speech::HostileMonster);
    EffectOutcome::Applied
}

/// Send the player to the Abyss.
pub fn banishment(ctx: &mut ActContext<'_>) -> EffectOutcome {
    ctx.speak(Speech::Banishment);
    let name = ctx.name;
    ctx.realm.banish(name);
    EffectOutcome::Applied
}
