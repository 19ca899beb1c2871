//! Undoing accidental deaths.
//!
//! An act that was not meant to kill can still do so: a miscast rolls high,
//! a mutation empties a stat, a teleport lands in lava. A [`Snapshot`] taken
//! before the act lets [`apply`] put things right afterwards.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use trickster_core::realm::{Coord, Terrain};
use trickster_core::{Channel, Mutation, MutationCounts, MutationPick, Realm, Stat, StatBlock};

use crate::speech::Speech;

/// Dexterity-draining mutations, undone in this order.
const DEXTERITY_DRAINS: [Mutation; 5] = [
    Mutation::GreyScales,
    Mutation::MetallicScales,
    Mutation::YellowScales,
    Mutation::RedScales,
    Mutation::StrongStiff,
];

/// `(stat, draining mutation, boosting mutation)`.
const STAT_PAIRS: [(Stat, Mutation, Mutation); 3] = [
    (Stat::Strength, Mutation::Weak, Mutation::Strong),
    (Stat::Intelligence, Mutation::Dopey, Mutation::Clever),
    (Stat::Dexterity, Mutation::Clumsy, Mutation::Agile),
];

/// The player's condition before an act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Hit points.
    pub hp: i32,
    /// Current stats.
    pub stats: StatBlock,
    /// Mutation levels.
    pub mutations: MutationCounts,
    /// Player position.
    pub position: Coord,
    /// Terrain under the player.
    pub terrain: Terrain,
}

impl Snapshot {
    /// Record the player's condition now.
    pub fn capture(realm: &dyn Realm) -> Self {
        Self {
            hp: realm.hp(),
            stats: realm.stats(),
            mutations: realm.mutations(),
            position: realm.position(),
            terrain: realm.terrain(),
        }
    }
}

/// What the safety net changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// The player had died and was brought back.
    pub revived: bool,
    /// Hit points were reset to the snapshot, or to 1 if the snapshot had
    /// none.
    pub restored_hp: bool,
    /// Mutation levels removed, one entry per level.
    pub mutations_removed: Vec<Mutation>,
    /// Mutation levels added back, one entry per level.
    pub mutations_added: Vec<Mutation>,
    /// Stats reset straight to their snapshot value.
    pub stats_restored: Vec<Stat>,
    /// The player was lifted out of deep water or lava.
    pub rescued: bool,
}

impl SafetyReport {
    /// Nothing was changed.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Repair accidental harm after an act.
///
/// A nasty deity meant it, so a dead or stat-zeroed player is left alone.
/// The hazard rescue runs either way.
pub fn apply(realm: &mut dyn Realm, snapshot: &Snapshot, nasty: bool, name: &str) -> SafetyReport {
    let mut report = SafetyReport::default();

    if !nasty && (realm.hp() <= 0 || realm.stats().any_depleted()) {
        announce_death(realm, name);
        report.revived = true;
        revive(realm, snapshot, &mut report);
        info!(
            hp = realm.hp(),
            removed = report.mutations_removed.len(),
            added = report.mutations_added.len(),
            "accidental death undone"
        );
    }

    if landed_in_hazard(realm, snapshot) {
        if !report.revived {
            announce_death(realm, name);
        }
        realm.teleport_to_safety();
        report.rescued = true;
        info!(terrain = ?snapshot.terrain, "rescued from hazardous landing");
    }
    report
}

fn announce_death(realm: &mut dyn Realm, name: &str) {
    realm.notify(Channel::Plain, "You die...");
    realm.notify(Channel::God, &Speech::AccidentalHomicide.line(name));
    realm.notify(Channel::God, &Speech::Resurrection.line(name));
}

fn stat(realm: &dyn Realm, stat: Stat) -> i32 {
    realm.stats().get(stat)
}

fn level(realm: &dyn Realm, mutation: Mutation) -> i32 {
    realm.mutations().get(mutation)
}

/// Remove levels of `mutation` gained since the snapshot while `stat`
/// remains depleted.
fn undo_gained(
    realm: &mut dyn Realm,
    snapshot: &Snapshot,
    report: &mut SafetyReport,
    depleted: Stat,
    mutation: Mutation,
) {
    while stat(realm, depleted) <= 0 && level(realm, mutation) > snapshot.mutations.get(mutation) {
        if !realm.delete_mutation(mutation) {
            break;
        }
        report.mutations_removed.push(mutation);
    }
}

/// Re-add levels of `mutation` lost since the snapshot while `stat`
/// remains depleted.
fn restore_lost(
    realm: &mut dyn Realm,
    snapshot: &Snapshot,
    report: &mut SafetyReport,
    depleted: Stat,
    mutation: Mutation,
) {
    while stat(realm, depleted) <= 0 && level(realm, mutation) < snapshot.mutations.get(mutation) {
        if !realm.mutate(MutationPick::Specific(mutation), true) {
            break;
        }
        report.mutations_added.push(mutation);
    }
}

fn revive(realm: &mut dyn Realm, snapshot: &Snapshot, report: &mut SafetyReport) {
    if realm.hp() <= 0 {
        realm.set_hp(snapshot.hp.max(1));
        report.restored_hp = true;
    }

    for mutation in DEXTERITY_DRAINS {
        undo_gained(realm, snapshot, report, Stat::Dexterity, mutation);
    }
    restore_lost(realm, snapshot, report, Stat::Dexterity, Mutation::FlexibleWeak);
    undo_gained(realm, snapshot, report, Stat::Strength, Mutation::FlexibleWeak);
    restore_lost(realm, snapshot, report, Stat::Strength, Mutation::StrongStiff);

    for (depleted, bad, good) in STAT_PAIRS {
        while stat(realm, depleted) <= 0 {
            let compensable = level(realm, bad) > snapshot.mutations.get(bad)
                || level(realm, good) < snapshot.mutations.get(good);
            if compensable && realm.mutate(MutationPick::Specific(good), true) {
                report.mutations_added.push(good);
                continue;
            }
            let value = snapshot.stats.get(depleted).max(1);
            warn!(stat = %depleted, value, "compensation exhausted, restoring snapshot value");
            realm.set_stat(depleted, value);
            report.stats_restored.push(depleted);
            break;
        }
    }

    let current = realm.stats();
    let max = realm.max_stats();
    for (each, value) in current.iter() {
        if value > max.get(each) {
            realm.set_max_stat(each, value);
        }
    }
}

fn landed_in_hazard(realm: &dyn Realm, snapshot: &Snapshot) -> bool {
    let moved = realm.position() != snapshot.position || realm.terrain() != snapshot.terrain;
    if !moved || realm.airborne() {
        return false;
    }
    match realm.terrain() {
        Terrain::DeepWater => !realm.swimming(),
        Terrain::Lava => realm.fire_resistance() <= 0,
        _ => false,
    }
}
