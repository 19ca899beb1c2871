//! Handlers of the favourable pool.

use tracing::debug;
use trickster_core::chance::pick;
use trickster_core::realm::{
    Attitude, MonsterId, MonsterStatus, PolymorphBias, Potion, Spell, SummonReason, SummonRequest,
};
use trickster_core::{Channel, Mutation, MutationPick};

use super::EffectOutcome;
use super::summons::{group_size, random_creature};
use crate::context::ActContext;
use crate::speech::Speech;

/// Force a beneficial potion on the player. Experience usually turns
/// into berserk rage.
pub fn potion(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let Some(&drawn) = pick(ctx.rng, &Potion::BENEFICIAL) else {
        return EffectOutcome::Skipped;
    };
    let potion = if drawn == Potion::Experience && !ctx.rng.one_in(6) {
        Potion::Berserk
    } else {
        drawn
    };
    if potion == Potion::Berserk && !ctx.realm.can_go_berserk() {
        return EffectOutcome::Skipped;
    }
    ctx.speak(Speech::PotionEffect);
    ctx.realm.quaff(potion, 150);
    EffectOutcome::Applied
}

/// Cast a spell from the first `severity` entries of [`Spell::BY_POWER`].
pub fn spell(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let reach = ctx.severity.clamp(1, Spell::BY_POWER.len() as i32);
    let index = usize::try_from(ctx.rng.below(reach)).unwrap_or(0);
    let spell = Spell::BY_POWER[index.min(Spell::BY_POWER.len() - 1)];
    ctx.speak(Speech::SpellEffect);
    debug!(?spell, power = ctx.severity, "casting for the player");
    ctx.realm.cast_spell(spell, ctx.severity, false);
    EffectOutcome::Applied
}

/// Confuse every nearby hostile, sparing one in twenty.
pub fn confuse_monsters(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let mut done = false;
    for id in ctx.realm.nearby_monsters() {
        let hostile = ctx
            .realm
            .monster(id)
            .is_some_and(|monster| monster.alive && !monster.wont_attack());
        if !hostile || ctx.rng.one_in(20) {
            continue;
        }
        let duration = ctx.rng.below(ctx.severity);
        if ctx.realm.add_status(id, MonsterStatus::Confusion { duration }) {
            if !done {
                ctx.speak(Speech::Confusion);
            }
            done = true;
            ctx.monster_message(id, " looks rather confused.");
        }
    }
    outcome(done)
}

/// Which factions of a summoned group turn on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Betrayal {
    Nobody,
    Demons,
    Others,
    Everyone,
}

impl Betrayal {
    fn turns(self, demonic: bool) -> bool {
        match self {
            Self::Nobody => false,
            Self::Demons => demonic,
            Self::Others => !demonic,
            Self::Everyone => true,
        }
    }
}

/// A group of summoned helpers, some of whom may not stay helpful.
pub fn summon_helpers(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let count = group_size(ctx.rng, ctx.severity, 2, 16);
    let roll = ctx.rng.below(12);
    let mut betrayal = if roll < 3 {
        Betrayal::Nobody
    } else if roll < 11 {
        if ctx.rng.coin_flip() {
            Betrayal::Demons
        } else {
            Betrayal::Others
        }
    } else {
        Betrayal::Everyone
    };

    let mut different = 0;
    let mut summoned: Vec<(MonsterId, bool)> = Vec::new();
    for _ in 0..count {
        let creature = random_creature(ctx.rng, ctx.severity, true);
        let demonic = creature.is_demonic();
        if !demonic {
            different += 1;
        }
        let request = SummonRequest {
            creature,
            attitude: Attitude::Friendly,
            duration: 3,
            reason: SummonReason::Aid,
        };
        if let Some(id) = ctx.realm.summon(request) {
            summoned.push((id, demonic));
        }
    }
    if summoned.is_empty() {
        return EffectOutcome::Skipped;
    }

    ctx.speak(if different == count {
        Speech::MultipleHolySummons
    } else if different > 0 {
        Speech::MultipleMixedSummons
    } else {
        Speech::MultipleSummons
    });

    if different == count && ctx.rng.one_in(4) {
        betrayal = Betrayal::Others;
    } else if different == 0 {
        betrayal = Betrayal::Nobody;
    }
    debug!(count, different, ?betrayal, "helpers summoned");

    for (id, demonic) in summoned {
        if betrayal.turns(demonic) {
            ctx.realm.set_attitude(id, Attitude::Hostile);
            ctx.realm.alert(id);
        }
        ctx.realm.anger_if_hated(id);
    }
    EffectOutcome::Applied
}

/// One temporary ally. Non-demons are borrowed from elsewhere and sometimes
/// object to the arrangement.
pub fn summon_ally(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let creature = random_creature(ctx.rng, ctx.severity, true);
    let demonic = creature.is_demonic();
    let hostile = !demonic && ctx.rng.one_in(4);
    let request = SummonRequest {
        creature,
        attitude: if hostile {
            Attitude::Hostile
        } else {
            Attitude::Friendly
        },
        duration: 6,
        reason: SummonReason::Aid,
    };
    let Some(id) = ctx.realm.summon(request) else {
        return EffectOutcome::Skipped;
    };
    ctx.speak(if demonic {
        Speech::SingleSummon
    } else {
        Speech::SingleHolySummon
    });
    if hostile {
        ctx.realm.alert(id);
    }
    ctx.realm.anger_if_hated(id);
    EffectOutcome::Applied
}

/// Reshape a nearby monster: hostiles get weaker and allies stronger.
pub fn polymorph(ctx: &mut ActContext<'_>) -> EffectOutcome {
    polymorph_nearby(ctx, Speech::GoodPolymorph, |wont_attack| {
        if wont_attack {
            PolymorphBias::Stronger
        } else {
            PolymorphBias::Weaker
        }
    })
}

/// Shared by both polymorph entries; `bias` maps a target's `wont_attack`
/// to the direction of the change.
pub(crate) fn polymorph_nearby(
    ctx: &mut ActContext<'_>,
    speech: Speech,
    bias: fn(bool) -> PolymorphBias,
) -> EffectOutcome {
    let candidates: Vec<MonsterId> = ctx
        .realm
        .nearby_monsters()
        .into_iter()
        .filter(|&id| {
            ctx.realm
                .monster(id)
                .is_some_and(|monster| monster.alive && monster.mutable && !monster.submerged)
        })
        .collect();
    let Some(&id) = pick(ctx.rng, &candidates) else {
        return EffectOutcome::Skipped;
    };
    let Some(wont_attack) = ctx.realm.monster(id).map(|monster| monster.wont_attack()) else {
        return EffectOutcome::Skipped;
    };

    ctx.speak(speech);
    ctx.realm.polymorph(id, bias(wont_attack));
    let shapeshifter = ctx
        .realm
        .monster(id)
        .is_none_or(|monster| monster.shapeshifter);
    if ctx.rng.one_in(8) && !shapeshifter {
        let status = if ctx.rng.one_in(3) {
            MonsterStatus::GlowingShapeshifter
        } else {
            MonsterStatus::Shapeshifter
        };
        ctx.realm.add_status(id, status);
    }
    ctx.realm.anger_if_hated(id);
    EffectOutcome::Applied
}

/// Blink every monster on the level, then the player once.
pub fn rearrange_pieces(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let confuse = ctx.rng.one_in(10);
    let mut done = false;
    for id in ctx.realm.level_monsters() {
        if !ctx.realm.blink(id) {
            continue;
        }
        if !done {
            ctx.speak(Speech::RearrangePieces);
        }
        done = true;
        if confuse {
            let duration = ctx.rng.below(ctx.severity);
            if ctx.realm.add_status(id, MonsterStatus::Confusion { duration }) {
                ctx.monster_message(id, " looks rather confused.");
            }
        }
    }
    if done {
        ctx.realm.random_blink();
    }
    outcome(done)
}

/// A chain of teleports that keeps going while the landing looks dangerous.
pub fn teleport_journey(ctx: &mut ActContext<'_>) -> EffectOutcome {
    ctx.speak(Speech::TeleportJourney);
    let mut hops = 0;
    loop {
        ctx.realm.teleport_now();
        hops += 1;
        if ctx.rng.one_in(10) {
            break;
        }
        let again = ctx.rng.x_in_y(3, 4) || ctx.realm.in_dangerous_place();
        if !again {
            break;
        }
    }
    debug!(hops, "journey over");
    EffectOutcome::Applied
}

/// Turn the walls around the player to glass.
pub fn vitrify(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let radius = ctx.rng.average_below(ctx.severity / 2, 3) + 1;
    if !ctx.realm.vitrify_area(radius) {
        return EffectOutcome::Skipped;
    }
    ctx.speak(Speech::Vitrification);
    EffectOutcome::Applied
}

/// Beneficial mutations, paid for in hit points.
pub fn mutations(ctx: &mut ActContext<'_>) -> EffectOutcome {
    mutate_player(ctx, Speech::GoodMutations, MutationPick::RandomGood, true)
}

/// Shared by both mutation entries.
pub(crate) fn mutate_player(
    ctx: &mut ActContext<'_>,
    speech: Speech,
    pick: MutationPick,
    non_lethal: bool,
) -> EffectOutcome {
    if !ctx.realm.can_safely_mutate()
        || ctx.realm.mutation_level(Mutation::MutationResistance) >= 3
    {
        return EffectOutcome::Skipped;
    }
    ctx.speak(speech);
    ctx.say("Your body is suffused with distortional energy.");

    let hp = ctx.realm.hp();
    let reduced = 1 + ctx.rng.below(hp);
    ctx.realm.set_hp(reduced);
    let deflate = ctx.realm.hp_max() / 2;
    ctx.realm.deflate_hp_max(deflate);

    let rounds = ctx.rng.below(4) + 1;
    let mut any = false;
    for _ in 0..rounds {
        if ctx.realm.mutate(pick, non_lethal) {
            any = true;
        }
    }
    debug!(rounds, any, "mutations applied");
    outcome(any)
}

/// A permanent companion, usually demonic and occasionally greater.
pub fn major_ally(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let use_greater = ctx.rng.one_in(8);
    let creature = random_creature(ctx.rng, ctx.severity, use_greater);
    let demonic = creature.is_demonic();
    let hostile = !demonic && ctx.rng.one_in(4);
    let request = SummonRequest {
        creature,
        attitude: if hostile {
            Attitude::Hostile
        } else {
            Attitude::Friendly
        },
        duration: 0,
        reason: SummonReason::Aid,
    };
    let Some(id) = ctx.realm.summon(request) else {
        return EffectOutcome::Skipped;
    };
    ctx.speak(if demonic {
        Speech::SingleMajorDemonSummon
    } else {
        Speech::SingleMajorHolySummon
    });
    if hostile {
        ctx.realm.alert(id);
    }
    ctx.realm.anger_if_hated(id);
    EffectOutcome::Applied
}

/// Lightning around a player in danger. Badly hurt players are shielded
/// from it.
pub fn divine_lightning(ctx: &mut ActContext<'_>) -> EffectOutcome {
    if !ctx.realm.in_dangerous_place() {
        return EffectOutcome::Skipped;
    }
    let protect = ctx.realm.hp() <= ctx.rng.below(201);
    ctx.realm
        .notify(Channel::God, "The area is suffused with divine lightning!");
    ctx.realm.lightning_burst(protect);
    if protect {
        ctx.say("Your divine protection wanes.");
    }
    let hp = ctx.realm.hp();
    ctx.realm.set_hp(hp.max(1));
    EffectOutcome::Applied
}

fn outcome(done: bool) -> EffectOutcome {
    if done {
        EffectOutcome::Applied
    } else {
        EffectOutcome::Skipped
    }
}
