//! Integration tests: gift selection.
use trickster_acts::catalog::gifts;
use trickster_acts::{ActContext, EffectOutcome, Speech};
use trickster_core::ScriptedChance;
use trickster_core::realm::{Brand, EquipSlot, Item, ItemClass, ItemId, Subtype};
use trickster_sandbox::{RealmEvent, SandboxRealm};

const SEVERITY: i32 = 10;

fn give(realm: &mut SandboxRealm, script: Vec<i32>) -> ScriptedChance {
    let mut rng = ScriptedChance::new(script).then_constant(1);
    let mut ctx = ActContext {
        realm: &mut *realm,
        rng: &mut rng,
        name: "Xom",
        severity: SEVERITY,
        tension: 0,
        nasty: false,
        lethality_margin: 0,
    };
    assert_eq!(gifts::item_gift(&mut ctx), EffectOutcome::Applied);
    rng
}

fn cursed(name: &str, class: ItemClass) -> Item {
    let mut item = Item::new(ItemId(0), name, class);
    item.cursed = true;
    item
}

/// Only item creation and acquirement events.
fn gifts_of(realm: &SandboxRealm) -> Vec<RealmEvent> {
    realm
        .events()
        .iter()
        .filter(|event| {
            matches!(
                event,
                RealmEvent::ItemCreated { .. } | RealmEvent::Acquired { .. }
            )
        })
        .cloned()
        .collect()
}

fn in_trouble() -> SandboxRealm {
    let mut realm = SandboxRealm::new();
    realm.dangerous = true;
    realm
}

#[test]
fn cursed_weapon_earns_another_of_the_same_kind() {
    let mut realm = in_trouble();
    let mut blade = cursed("cursed blade", ItemClass::Weapon);
    blade.subtype = 12;
    realm.equip(EquipSlot::Weapon, blade);

    // In trouble, cursed weapon noticed, same sub-type, no rebrand.
    give(&mut realm, vec![0, 0, 0, 1]);

    let created = gifts_of(&realm);
    let [RealmEvent::ItemCreated { id, class, subtype }] = created.as_slice() else {
        panic!("expected one created item, got {created:?}");
    };
    assert_eq!(*class, ItemClass::Weapon);
    assert_eq!(*subtype, Subtype::Exact(12));
    assert_eq!(
        realm
            .items
            .iter()
            .find(|item| item.id == *id)
            .map(|item| item.subtype),
        Some(12)
    );
    assert_eq!(
        realm.notices(),
        [
            Speech::CursedGift.line("Xom").as_str(),
            "Something appears at your feet!"
        ]
    );
}

#[test]
fn cursed_weapon_may_earn_an_acquirement() {
    let mut realm = in_trouble();
    realm.equip(EquipSlot::Weapon, cursed("cursed blade", ItemClass::Weapon));

    give(&mut realm, vec![0, 0, 1, 1]);

    assert!(matches!(
        gifts_of(&realm).as_slice(),
        [RealmEvent::Acquired {
            class: ItemClass::Weapon,
            ..
        }]
    ));
    assert_eq!(realm.notices(), [Speech::CursedGift.line("Xom")]);
}

#[test]
fn cursed_gloves_earn_a_ring() {
    let mut realm = in_trouble();
    realm.equip(EquipSlot::Gloves, cursed("gauntlets", ItemClass::Armour));

    // The cursed-weapon coin is still flipped with nothing wielded.
    let rng = give(&mut realm, vec![0, 1, 0]);

    assert!(matches!(
        gifts_of(&realm).as_slice(),
        [RealmEvent::ItemCreated {
            class: ItemClass::Jewellery,
            subtype: Subtype::Ring,
            ..
        }]
    ));
    assert_eq!(realm.notices()[0], Speech::CursedGift.line("Xom"));
    assert_eq!(rng.history().len(), 3);
}

#[test]
fn cursed_amulet_earns_an_amulet() {
    let mut realm = in_trouble();
    realm.equip(EquipSlot::Amulet, cursed("amulet", ItemClass::Jewellery));

    give(&mut realm, vec![0, 1, 1, 0]);

    assert!(matches!(
        gifts_of(&realm).as_slice(),
        [RealmEvent::ItemCreated {
            class: ItemClass::Jewellery,
            subtype: Subtype::Amulet,
            ..
        }]
    ));
    assert_eq!(realm.notices()[0], Speech::CursedGift.line("Xom"));
}

#[test]
fn cursed_ring_earns_another_ring() {
    for slot in [EquipSlot::LeftRing, EquipSlot::RightRing] {
        let mut realm = in_trouble();
        realm.equip(slot, cursed("ring", ItemClass::Jewellery));

        give(&mut realm, vec![0, 1, 1, 1, 0]);

        assert!(matches!(
            gifts_of(&realm).as_slice(),
            [RealmEvent::ItemCreated {
                class: ItemClass::Jewellery,
                subtype: Subtype::Ring,
                ..
            }]
        ));
        assert_eq!(realm.notices()[0], Speech::RingGift.line("Xom"));
    }
}

#[test]
fn wielded_weapon_earns_something_unrelated() {
    // (one in ten roll, acquirement roll, expected gift)
    let cases = [
        (1, 100, RealmEvent::ItemCreated {
            id: ItemId(2),
            class: ItemClass::Staff,
            subtype: Subtype::Random,
        }),
        (0, 100, RealmEvent::ItemCreated {
            id: ItemId(2),
            class: ItemClass::Miscellany,
            subtype: Subtype::Random,
        }),
        (1, 0, RealmEvent::Acquired {
            id: ItemId(2),
            class: ItemClass::Staff,
        }),
    ];
    for (curio, acquirement, expected) in cases {
        let mut realm = in_trouble();
        realm.equip(EquipSlot::Weapon, Item::new(ItemId(0), "mace", ItemClass::Weapon));

        give(&mut realm, vec![0, 1, 1, 1, 1, 0, curio, acquirement]);

        assert_eq!(gifts_of(&realm), [expected]);
        assert_eq!(realm.notices()[0], Speech::WeaponGift.line("Xom"));
    }
}

#[test]
fn wielded_staff_earns_a_weapon() {
    let mut realm = in_trouble();
    realm.equip(EquipSlot::Weapon, Item::new(ItemId(0), "staff", ItemClass::Staff));

    give(&mut realm, vec![0, 1, 1, 1, 1, 0, 1, 100, 1]);

    assert!(matches!(
        gifts_of(&realm).as_slice(),
        [RealmEvent::ItemCreated {
            class: ItemClass::Weapon,
            ..
        }]
    ));
}

#[test]
fn safe_players_skip_the_joke_gifts() {
    let mut realm = SandboxRealm::new();
    realm.equip(EquipSlot::Gloves, cursed("gauntlets", ItemClass::Armour));

    // The first coin passes, but nothing here is dangerous.
    give(&mut realm, vec![0, 1, 200]);

    assert_eq!(realm.notices()[0], Speech::GeneralGift.line("Xom"));
}

#[test]
fn cursed_cloak_earns_armour() {
    // (one in ten roll, expected sub-type)
    for (roll, expected) in [(3, Subtype::BodyArmour), (0, Subtype::Cloak)] {
        let mut realm = SandboxRealm::new();
        realm.equip(EquipSlot::Cloak, cursed("cloak", ItemClass::Armour));

        give(&mut realm, vec![1, 0, roll]);

        let created = gifts_of(&realm);
        let [RealmEvent::ItemCreated { class, subtype, .. }] = created.as_slice() else {
            panic!("expected one created item, got {created:?}");
        };
        assert_eq!(*class, ItemClass::Armour);
        assert_eq!(*subtype, expected);
        assert_eq!(realm.notices()[0], Speech::ArmourGift.line("Xom"));
    }
}

#[test]
fn general_gift_is_usually_a_random_item() {
    let mut realm = SandboxRealm::new();

    give(&mut realm, vec![1, 1, 200]);

    assert!(matches!(
        gifts_of(&realm).as_slice(),
        [RealmEvent::ItemCreated {
            subtype: Subtype::Random,
            ..
        }]
    ));
    assert_eq!(
        realm.notices(),
        [
            Speech::GeneralGift.line("Xom").as_str(),
            "Something appears at your feet!"
        ]
    );
}

#[test]
fn general_gift_acquires_at_power_in_256() {
    let mut realm = SandboxRealm::new();

    // Below 10 of 256 wins an acquirement; the class draw picks books.
    let rng = give(&mut realm, vec![1, 1, 9, 3]);

    assert!(matches!(
        gifts_of(&realm).as_slice(),
        [RealmEvent::Acquired {
            class: ItemClass::Book,
            ..
        }]
    ));
    assert_eq!(rng.history()[2], (256, 9));
    assert_eq!(rng.history()[3], (7, 3));
}

#[test]
fn failed_creation_takes_the_gift_back() {
    let mut realm = SandboxRealm::new();
    realm.item_creation = false;

    give(&mut realm, vec![1, 1, 200]);

    assert!(gifts_of(&realm).is_empty());
    assert_eq!(
        realm.notices(),
        [
            Speech::GeneralGift.line("Xom").as_str(),
            "\"No, never mind.\""
        ]
    );
}

fn acquired_weapon_brand(gift_brand: Brand, rebrand_roll: i32) -> Brand {
    let mut realm = SandboxRealm::new().with_gift_brand(gift_brand);
    // General gift, acquirement, weapon class, then the one in five.
    give(&mut realm, vec![1, 1, 0, 0, rebrand_roll]);
    let Some(item) = realm.items.last() else {
        panic!("nothing was acquired");
    };
    assert_eq!(item.class, ItemClass::Weapon);
    item.brand
}

#[test]
fn branded_gifts_sometimes_turn_chaotic() {
    assert_eq!(acquired_weapon_brand(Brand::Flame, 0), Brand::Chaos);
    assert_eq!(acquired_weapon_brand(Brand::Flame, 1), Brand::Flame);
}

#[test]
fn unbranded_gifts_stay_plain() {
    assert_eq!(acquired_weapon_brand(Brand::Normal, 0), Brand::Normal);
}
