//! Integration tests: safety net.
use trickster_acts::safety::{self, Snapshot};
use trickster_acts::{SafetyReport, Speech};
use trickster_core::realm::{Coord, PlayerPort, Terrain};
use trickster_core::{Mutation, MutationPick, Stat};
use trickster_sandbox::{RealmEvent, SandboxRealm};

fn repair(realm: &mut SandboxRealm, snapshot: &Snapshot, nasty: bool) -> SafetyReport {
    safety::apply(realm, snapshot, nasty, "Xom")
}

#[test]
fn revived_player_gets_snapshot_hp_back() {
    let mut realm = SandboxRealm::new().with_hp(14);
    let snapshot = Snapshot::capture(&realm);
    realm.hp = -3;

    let report = repair(&mut realm, &snapshot, false);

    assert!(report.revived);
    assert!(report.restored_hp);
    assert_eq!(realm.hp, 14);
    assert_eq!(
        realm.notices(),
        [
            "You die...".to_string(),
            Speech::AccidentalHomicide.line("Xom"),
            Speech::Resurrection.line("Xom"),
        ]
    );
}

#[test]
fn second_application_does_nothing() {
    let mut realm = SandboxRealm::new();
    let snapshot = Snapshot::capture(&realm);
    realm.hp = 0;
    realm.stats.intelligence = -1;
    realm.terrain = Terrain::Lava;
    realm.position = Coord::new(2, 0);

    let first = repair(&mut realm, &snapshot, false);
    assert!(first.revived);
    assert!(first.rescued);
    assert_eq!(first.stats_restored, [Stat::Intelligence]);

    realm.clear_events();
    let second = repair(&mut realm, &snapshot, false);
    assert!(second.is_noop());
    assert!(realm.events().is_empty());
}

#[test]
fn dexterity_scales_are_shed_first() {
    let mut realm = SandboxRealm::new();
    realm.stats.dexterity = 1;
    let snapshot = Snapshot::capture(&realm);
    assert!(realm.mutate(MutationPick::Specific(Mutation::GreyScales), false));
    assert_eq!(realm.stats.dexterity, 0);

    let report = repair(&mut realm, &snapshot, false);

    assert!(report.revived);
    assert!(!report.restored_hp);
    assert_eq!(report.mutations_removed, [Mutation::GreyScales]);
    assert!(report.stats_restored.is_empty());
    assert_eq!(realm.stats.dexterity, 1);
    assert_eq!(realm.mutation_level(Mutation::GreyScales), 0);
}

#[test]
fn gained_weakness_is_offset_by_strength() {
    let mut realm = SandboxRealm::new();
    realm.stats.strength = 1;
    let snapshot = Snapshot::capture(&realm);
    assert!(realm.mutate(MutationPick::Specific(Mutation::Weak), false));

    let report = repair(&mut realm, &snapshot, false);

    assert_eq!(report.mutations_added, [Mutation::Strong]);
    assert_eq!(realm.stats.strength, 1);
    assert_eq!(realm.mutation_level(Mutation::Weak), 1);
}

#[test]
fn exhausted_compensation_restores_the_snapshot_value() {
    let mut realm = SandboxRealm::new();
    realm.stats.strength = 3;
    let snapshot = Snapshot::capture(&realm);
    realm.lose_stat(Some(Stat::Strength), 5, "test");

    let report = repair(&mut realm, &snapshot, false);

    assert_eq!(report.stats_restored, [Stat::Strength]);
    assert!(report.mutations_added.is_empty());
    assert_eq!(realm.stats.strength, 3);
}

#[test]
fn snapshot_below_one_is_restored_to_one() {
    let mut realm = SandboxRealm::new();
    realm.stats.dexterity = 0;
    let snapshot = Snapshot::capture(&realm);

    repair(&mut realm, &snapshot, false);

    assert_eq!(realm.stats.dexterity, 1);
}

#[test]
fn restored_stats_raise_their_maximum() {
    let mut realm = SandboxRealm::new();
    realm.stats.intelligence = 12;
    let snapshot = Snapshot::capture(&realm);
    realm.stats.intelligence = 0;

    repair(&mut realm, &snapshot, false);

    assert_eq!(realm.stats.intelligence, 12);
    assert_eq!(realm.max_stats.intelligence, 12);
}

#[test]
fn nasty_deaths_stand() {
    let mut realm = SandboxRealm::new();
    let snapshot = Snapshot::capture(&realm);
    realm.hp = 0;

    let report = repair(&mut realm, &snapshot, true);

    assert!(report.is_noop());
    assert_eq!(realm.hp, 0);
    assert!(realm.events().is_empty());
}

#[test]
fn nasty_lava_landing_is_still_rescued() {
    let mut realm = SandboxRealm::new();
    let snapshot = Snapshot::capture(&realm);
    realm.position = Coord::new(4, 4);
    realm.terrain = Terrain::Lava;

    let report = repair(&mut realm, &snapshot, true);

    assert!(report.rescued);
    assert!(!report.revived);
    assert_eq!(realm.notices()[0], "You die...");
    assert_eq!(realm.events().last(), Some(&RealmEvent::RescuedToSafety));
}

#[test]
fn hazards_spare_the_prepared() {
    let cases: [(Terrain, fn(&mut SandboxRealm)); 3] = [
        (Terrain::DeepWater, |realm| realm.swimming = true),
        (Terrain::Lava, |realm| realm.fire_resistance = 1),
        (Terrain::Lava, |realm| realm.airborne = true),
    ];
    for (terrain, prepare) in cases {
        let mut realm = SandboxRealm::new();
        prepare(&mut realm);
        let snapshot = Snapshot::capture(&realm);
        realm.position = Coord::new(1, 1);
        realm.terrain = terrain;
        assert!(repair(&mut realm, &snapshot, false).is_noop());
    }
}

#[test]
fn staying_put_in_deep_water_is_not_a_landing() {
    let mut realm = SandboxRealm::new();
    realm.terrain = Terrain::DeepWater;
    let snapshot = Snapshot::capture(&realm);
    assert!(repair(&mut realm, &snapshot, false).is_noop());
}

#[test]
fn revival_never_restores_a_dead_snapshot() {
    let mut realm = SandboxRealm::new().with_hp(0);
    let snapshot = Snapshot::capture(&realm);
    realm.hp = -5;

    let report = repair(&mut realm, &snapshot, false);

    assert!(report.revived);
    assert!(report.restored_hp);
    assert_eq!(realm.hp, 1);
}
