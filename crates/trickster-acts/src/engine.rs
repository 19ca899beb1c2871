//! The selection engine.
//!
//! An act walks one of the two pools from the top, rolling each entry's
//! odds in turn, until a handler reports [`EffectOutcome::Applied`]. The
//! favourable pool is walked once per attempt and the attempt simply
//! repeats; the unfavourable pool keeps redrawing from the top inside a
//! single attempt. Either way the walk ends early once the player is dead.

use tracing::{debug, info};
use trickster_core::{Actor, Channel, Chance, Realm, RelationshipState, TricksterConfig};

use crate::catalog::{Effect, EffectKind, EffectOutcome, FAVOURABLE, UNFAVOURABLE};
use crate::context::ActContext;
use crate::report::{ActReport, Branch, DrawOutcome, DrawRecord};
use crate::safety::{self, Snapshot};

/// How one walk down a pool ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassOutcome {
    Applied(EffectKind),
    Skipped,
    Exhausted,
    Dead,
}

fn run_pass(pool: &[Effect], ctx: &mut ActContext<'_>, draws: &mut Vec<DrawRecord>) -> PassOutcome {
    if ctx.player_dead() {
        return PassOutcome::Dead;
    }
    for effect in pool {
        if !effect.before.check(ctx) {
            continue;
        }
        let record = |outcome| DrawRecord {
            effect: effect.kind,
            outcome,
        };
        if !effect.odds.roll(ctx.severity, ctx.rng) {
            draws.push(record(DrawOutcome::Missed));
            continue;
        }
        debug!(effect = ?effect.kind, severity = ctx.severity, "draw fired");
        if !effect.after.check(ctx) {
            draws.push(record(DrawOutcome::Blocked));
            continue;
        }
        return match (effect.apply)(ctx) {
            EffectOutcome::Applied => {
                draws.push(record(DrawOutcome::Applied));
                PassOutcome::Applied(effect.kind)
            }
            EffectOutcome::Skipped => {
                draws.push(record(DrawOutcome::Skipped));
                PassOutcome::Skipped
            }
        };
    }
    PassOutcome::Exhausted
}

/// Redraw the unfavourable pool from the top until something lands.
fn unfavourable(ctx: &mut ActContext<'_>, draws: &mut Vec<DrawRecord>) -> PassOutcome {
    loop {
        match run_pass(&UNFAVOURABLE, ctx, draws) {
            done @ (PassOutcome::Applied(_) | PassOutcome::Dead) => return done,
            PassOutcome::Skipped | PassOutcome::Exhausted => {}
        }
    }
}

/// Perform one act of the deity.
///
/// `niceness` asks for the favourable pool, which is then granted four
/// times in five; a patron currently acting through the deity overrides
/// it. `severity` is clamped to at least 1 and scales how far down the
/// pools a draw can reach. Accidental deaths are repaired afterwards unless
/// the deity is nasty, and a worshipper's standing may flip to its mirror.
pub fn act(
    state: &mut RelationshipState,
    config: &TricksterConfig,
    realm: &mut dyn Realm,
    rng: &mut dyn Chance,
    niceness: bool,
    severity: i32,
) -> ActReport {
    let severity = severity.max(1);
    let name = config.name.as_str();

    let patron = realm.current_actor().filter(|actor| !actor.is_trickster());
    let mut niceness = niceness;
    let mut forced_niceness = None;
    if let Some(Actor::Patron {
        name: patron_name,
        retribution,
    }) = &patron
    {
        niceness = !*retribution;
        forced_niceness = Some(niceness);
        let notice = if *retribution {
            format!("{patron_name} asks {name} for help in punishing you, and {name} happily agrees.")
        } else {
            format!("{patron_name} calls in a favour from {name}.")
        };
        realm.notify(Channel::God, &notice);
    }
    let actor = patron.clone().unwrap_or(Actor::Trickster);

    let tension = realm.tension(&actor);
    debug!(
        niceness,
        severity,
        standing = state.standing(),
        boredom = state.boredom(),
        tension,
        "act begins"
    );

    let entry_before = realm.entry_cause();
    let snapshot = Snapshot::capture(realm);
    let nasty = realm.penance_active() || (realm.worships_trickster() && state.is_bored());
    let branch = if niceness && config.nice_roll.roll(rng) {
        Branch::Favourable
    } else {
        Branch::Unfavourable
    };
    let lethality_margin = if branch == Branch::Unfavourable && !nasty {
        rng.range_inclusive(1, 4)
    } else {
        0
    };

    realm.push_actor(Actor::Trickster);
    let mut draws = Vec::new();
    let applied = {
        let mut ctx = ActContext {
            realm: &mut *realm,
            rng: &mut *rng,
            name,
            severity,
            tension,
            nasty,
            lethality_margin,
        };
        loop {
            let outcome = match branch {
                Branch::Favourable => run_pass(&FAVOURABLE, &mut ctx, &mut draws),
                Branch::Unfavourable => unfavourable(&mut ctx, &mut draws),
            };
            match outcome {
                PassOutcome::Applied(kind) => break Some(kind),
                PassOutcome::Dead => break None,
                PassOutcome::Skipped | PassOutcome::Exhausted => {}
            }
        }
    };
    realm.pop_actor();

    let safety = safety::apply(realm, &snapshot, nasty, name);

    let mut inverted = false;
    if realm.worships_trickster() && config.inversion.roll(rng) {
        let before = state.favour();
        state.invert();
        inverted = true;
        let after = state.favour();
        info!(standing = state.standing(), from = %before, to = %after, "standing inverted");
        if after != before {
            realm.notify(
                Channel::God,
                &format!("Your title is now: {}", after.describe(name)),
            );
        }
    }

    if let Some(patron) = &patron {
        let entry_after = realm.entry_cause();
        if entry_after != entry_before && entry_after.credited == Some(Actor::Trickster) {
            realm.credit_entry_cause(patron.clone());
        }
    }

    ActReport {
        actor,
        forced_niceness,
        branch,
        severity,
        tension,
        nasty,
        lethality_margin,
        draws,
        applied,
        safety,
        inverted,
    }
}
