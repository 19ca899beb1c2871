//! Chaos upgrades: handing a hostile monster's gear the chaos brand.

use trickster_core::realm::{
    Alignment, Artefact, Attitude, Brand, Channel, GiftOrigin, Genus, Holiness, InvSlot, Item,
    ItemClass, ItemUse, MissileKind, Monster, MonsterId,
};

use crate::context::ActContext;

/// Whether `item`, carried by `owner`, can take the chaos brand.
pub fn item_is_upgradeable(item: &Item, owner: &Monster) -> bool {
    // Random artefacts can be rewritten; designed ones cannot.
    if !matches!(item.artefact, Artefact::Mundane | Artefact::Random) {
        return false;
    }
    if item.flags.summoned || item.blessed {
        return false;
    }
    if matches!(item.gift_of, Some(GiftOrigin::Benevolent | GiftOrigin::Tribal)) {
        return false;
    }

    match item.class {
        ItemClass::Missile => {
            if matches!(
                item.missile,
                Some(MissileKind::LargeRock | MissileKind::ThrowingNet)
            ) {
                return false;
            }
            item.brand == Brand::Normal
        }
        ItemClass::Weapon => {
            if item.launcher {
                let has_ammo = owner
                    .inventory
                    .missile
                    .as_ref()
                    .is_some_and(Item::fired_from_launcher);
                if !has_ammo {
                    return false;
                }
            }
            item.brand == Brand::Normal
        }
        _ => false,
    }
}

/// The slot a chaos upgrade would rewrite, if any.
///
/// Slots are inspected in [`InvSlot::ALL`] order. Ammunition is passed over
/// when an earlier launcher already carries an elemental brand, since that
/// brand would override the ammunition's anyway.
pub fn upgrade_slot(monster: &Monster) -> Option<InvSlot> {
    let mut elemental_launcher = false;
    for (slot, item) in monster.inventory.iter() {
        if item_is_upgradeable(item, monster)
            && (item.class != ItemClass::Missile
                || !elemental_launcher
                || !item.fired_from_launcher())
        {
            return Some(slot);
        }
        if item.launcher && item.brand.is_elemental() {
            elemental_launcher = true;
        }
    }
    None
}

/// Whether `monster` may receive a chaos upgrade at all.
pub fn monster_is_eligible(monster: &Monster) -> bool {
    if !monster.alive || monster.attitude != Attitude::Hostile {
        return false;
    }
    if monster.fleeing || monster.panicking {
        return false;
    }
    if monster.item_use < ItemUse::StartingEquipment {
        return false;
    }
    if monster.holiness == Holiness::Holy && monster.god != Some(Alignment::Trickster) {
        return false;
    }
    if monster.god == Some(Alignment::Benevolent) || monster.genus == Genus::Orc {
        return false;
    }
    if monster.inventory.iter().any(|(_, item)| item.is_chaotic()) {
        return false;
    }
    upgrade_slot(monster).is_some()
}

/// `Boris'` for names ending in s, `ogre's` otherwise.
pub fn possessive(name: &str) -> String {
    if name.ends_with('s') {
        format!("{name}'")
    } else {
        format!("{name}'s")
    }
}

/// Rewrite the item in `slot` of monster `id` with the chaos brand.
///
/// Returns false when the monster or item has vanished.
pub fn apply_upgrade(ctx: &mut ActContext<'_>, id: MonsterId, slot: InvSlot) -> bool {
    let Some(monster) = ctx.realm.monster(id) else {
        return false;
    };
    let Some(item) = monster.inventory.get(slot) else {
        return false;
    };
    let seen = monster.visible && monster.in_view;
    let weapon = item.class == ItemClass::Weapon;
    let randart = item.artefact == Artefact::Random;
    let cosmetic = item.flags.cosmetic;
    let message = format!(
        "{} {} is briefly surrounded by a scintillating aura of random colours.",
        possessive(&monster.name_capitalised()),
        item.name
    );

    if seen && weapon {
        ctx.realm.notify(Channel::Monster, &message);
    }
    let (plus, plus2) = if randart {
        (0, 0)
    } else {
        (ctx.rng.below(5), ctx.rng.below(5))
    };

    let Some(item) = ctx
        .realm
        .monster_mut(id)
        .and_then(|monster| monster.inventory.get_mut(slot))
    else {
        return false;
    };
    item.brand = Brand::Chaos;
    if seen {
        item.flags.brand_known = true;
    }
    if !randart {
        if seen {
            item.flags.type_known = true;
        }
        if !cosmetic {
            item.flags.glowing = true;
        }
        item.plus += plus;
        item.plus2 += plus2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use trickster_core::realm::{ItemId, MonsterInventory};

    fn club() -> Item {
        Item::new(ItemId(1), "club", ItemClass::Weapon)
    }

    fn armed(name: &str, weapon: Item) -> Monster {
        let mut monster = Monster::new(MonsterId(9), name);
        monster.inventory = MonsterInventory {
            weapon: Some(weapon),
            ..MonsterInventory::default()
        };
        monster
    }

    #[test]
    fn plain_weapon_is_eligible() {
        let monster = armed("ogre", club());
        assert!(monster_is_eligible(&monster));
        assert_eq!(upgrade_slot(&monster), Some(InvSlot::Weapon));
    }

    #[test]
    fn fixed_artefacts_are_never_eligible() {
        for artefact in [Artefact::Fixed, Artefact::Unrandom] {
            let mut weapon = club();
            weapon.artefact = artefact;
            assert!(!monster_is_eligible(&armed("ogre", weapon)));
        }
        let mut randart = club();
        randart.artefact = Artefact::Random;
        assert!(monster_is_eligible(&armed("ogre", randart)));
    }

    #[test]
    fn chaotic_gear_disqualifies_the_monster() {
        let mut monster = armed("ogre", club());
        let mut darts = Item::new(ItemId(2), "darts", ItemClass::Missile);
        darts.missile = Some(MissileKind::Dart);
        darts.brand = Brand::Chaos;
        monster.inventory.missile = Some(darts);
        assert!(!monster_is_eligible(&monster));
    }

    #[test]
    fn branded_summoned_or_blessed_items_are_skipped() {
        let mut flaming = club();
        flaming.brand = Brand::Flame;
        assert!(!monster_is_eligible(&armed("ogre", flaming)));

        let mut summoned = club();
        summoned.flags.summoned = true;
        assert!(!monster_is_eligible(&armed("ogre", summoned)));

        let mut blessed = club();
        blessed.blessed = true;
        assert!(!monster_is_eligible(&armed("ogre", blessed)));

        let mut gift = club();
        gift.gift_of = Some(GiftOrigin::Tribal);
        assert!(!monster_is_eligible(&armed("ogre", gift)));
    }

    #[test]
    fn monster_level_exclusions() {
        let mut friendly = armed("ogre", club());
        friendly.attitude = Attitude::Friendly;
        assert!(!monster_is_eligible(&friendly));

        let mut orc = armed("orc warrior", club());
        orc.genus = Genus::Orc;
        assert!(!monster_is_eligible(&orc));

        let mut angel = armed("angel", club());
        angel.holiness = Holiness::Holy;
        assert!(!monster_is_eligible(&angel));
        angel.god = Some(Alignment::Trickster);
        assert!(monster_is_eligible(&angel));

        let mut fleeing = armed("ogre", club());
        fleeing.fleeing = true;
        assert!(!monster_is_eligible(&fleeing));

        let mut beast = armed("wolf", club());
        beast.item_use = ItemUse::Open;
        assert!(!monster_is_eligible(&beast));
    }

    #[test]
    fn launcher_needs_matching_ammo() {
        let mut bow = Item::new(ItemId(3), "shortbow", ItemClass::Weapon);
        bow.launcher = true;
        let mut archer = armed("archer", bow);
        assert!(!monster_is_eligible(&archer));

        let mut javelins = Item::new(ItemId(4), "javelins", ItemClass::Missile);
        javelins.missile = Some(MissileKind::Javelin);
        javelins.brand = Brand::Venom;
        archer.inventory.missile = Some(javelins);
        assert!(!monster_is_eligible(&archer));

        let mut arrows = Item::new(ItemId(5), "arrows", ItemClass::Missile);
        arrows.missile = Some(MissileKind::Arrow);
        archer.inventory.missile = Some(arrows);
        assert_eq!(upgrade_slot(&archer), Some(InvSlot::Weapon));
    }

    #[test]
    fn ammo_behind_an_elemental_launcher_is_passed_over() {
        let mut bow = Item::new(ItemId(3), "shortbow", ItemClass::Weapon);
        bow.launcher = true;
        bow.brand = Brand::Frost;
        let mut archer = armed("archer", bow);
        let mut arrows = Item::new(ItemId(5), "arrows", ItemClass::Missile);
        arrows.missile = Some(MissileKind::Arrow);
        archer.inventory.missile = Some(arrows);
        assert!(!monster_is_eligible(&archer));

        let mut darts = Item::new(ItemId(6), "darts", ItemClass::Missile);
        darts.missile = Some(MissileKind::Dart);
        archer.inventory.missile = Some(darts);
        assert_eq!(upgrade_slot(&archer), Some(InvSlot::Missile));
    }

    #[test]
    fn rocks_and_nets_stay_plain() {
        let mut monster = Monster::new(MonsterId(1), "giant");
        let mut rocks = Item::new(ItemId(7), "large rocks", ItemClass::Missile);
        rocks.missile = Some(MissileKind::LargeRock);
        monster.inventory.missile = Some(rocks);
        assert!(!monster_is_eligible(&monster));
    }

    #[test]
    fn possessives() {
        assert_eq!(possessive("Boris"), "Boris'");
        assert_eq!(possessive("The ogre"), "The ogre's");
        assert_eq!(possessive("Your orc"), "Your orc's");
    }
}
