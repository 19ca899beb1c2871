//! Item gifts.
//!
//! Most gifts are a random item or an acquirement. When the player is in
//! trouble the deity prefers a joke instead: cursed equipment earns more of
//! the same, and a wielded weapon earns something nobody can fight with.

use tracing::debug;
use trickster_core::chance::pick;
use trickster_core::realm::{Brand, Channel, EquipSlot, ItemClass, ItemId, ItemRequest, Subtype};

use super::EffectOutcome;
use crate::context::ActContext;
use crate::speech::Speech;

/// Grant a gift at a power equal to the act's severity. Always applies,
/// even when the realm fails to produce the item.
pub fn item_gift(ctx: &mut ActContext<'_>) -> EffectOutcome {
    let power = ctx.severity;
    if annoyance_gift(ctx, power) {
        return EffectOutcome::Applied;
    }

    if ctx.rng.coin_flip() && cursed(ctx, EquipSlot::Cloak) {
        ctx.speak(Speech::ArmourGift);
        let subtype = if ctx.rng.one_in(10) {
            Subtype::Cloak
        } else {
            Subtype::BodyArmour
        };
        make_item(ctx, Some(ItemClass::Armour), subtype, power * 3);
        return EffectOutcome::Applied;
    }

    ctx.speak(Speech::GeneralGift);
    if ctx.rng.x_in_y(power, 256) {
        let class = pick(ctx.rng, &ItemClass::ACQUIRABLE)
            .copied()
            .unwrap_or(ItemClass::Miscellany);
        acquire(ctx, class);
    } else {
        make_item(ctx, None, Subtype::Random, power * 3);
    }
    EffectOutcome::Applied
}

fn annoyance_gift(ctx: &mut ActContext<'_>, power: i32) -> bool {
    if !(ctx.rng.coin_flip() && ctx.realm.in_dangerous_place()) {
        return false;
    }
    let weapon = ctx
        .realm
        .equipped(EquipSlot::Weapon)
        .and_then(|id| ctx.realm.item(id))
        .map(|item| (item.class, item.subtype, item.cursed));

    let cursed_weapon = weapon.filter(|&(_, _, cursed)| cursed);
    if let (true, Some((class, subtype, _))) = (ctx.rng.coin_flip(), cursed_weapon) {
        ctx.speak(Speech::CursedGift);
        if ctx.rng.coin_flip() {
            make_item(ctx, Some(class), Subtype::Exact(subtype), power * 3);
        } else {
            acquire(ctx, class);
        }
        return true;
    }

    if ctx.rng.coin_flip() && cursed(ctx, EquipSlot::Gloves) {
        ctx.speak(Speech::CursedGift);
        make_item(ctx, Some(ItemClass::Jewellery), Subtype::Ring, power * 3);
        return true;
    }

    if ctx.rng.coin_flip() && cursed(ctx, EquipSlot::Amulet) {
        ctx.speak(Speech::CursedGift);
        make_item(ctx, Some(ItemClass::Jewellery), Subtype::Amulet, power * 3);
        return true;
    }

    if ctx.rng.coin_flip()
        && (cursed(ctx, EquipSlot::LeftRing) || cursed(ctx, EquipSlot::RightRing))
    {
        ctx.speak(Speech::RingGift);
        make_item(ctx, Some(ItemClass::Jewellery), Subtype::Ring, power * 3);
        return true;
    }

    if let (true, Some((class, _, _))) = (ctx.rng.one_in(5), weapon) {
        ctx.speak(Speech::WeaponGift);
        let unrelated = unrelated_wield_class(ctx, class);
        if ctx.rng.x_in_y(power, 256) {
            acquire(ctx, unrelated);
        } else {
            make_item(ctx, Some(unrelated), Subtype::Random, power * 3);
        }
        return true;
    }
    false
}

/// A wieldable class other than `current`.
fn unrelated_wield_class(ctx: &mut ActContext<'_>, current: ItemClass) -> ItemClass {
    match current {
        ItemClass::Weapon if ctx.rng.one_in(10) => ItemClass::Miscellany,
        ItemClass::Weapon => ItemClass::Staff,
        ItemClass::Staff if ctx.rng.one_in(10) => ItemClass::Miscellany,
        ItemClass::Staff => ItemClass::Weapon,
        _ => match ctx.rng.below(3) {
            0 => ItemClass::Weapon,
            1 => ItemClass::Staff,
            _ => ItemClass::Miscellany,
        },
    }
}

fn cursed(ctx: &ActContext<'_>, slot: EquipSlot) -> bool {
    ctx.realm
        .equipped(slot)
        .and_then(|id| ctx.realm.item(id))
        .is_some_and(|item| item.cursed)
}

fn make_item(ctx: &mut ActContext<'_>, class: Option<ItemClass>, subtype: Subtype, power: i32) {
    let request = ItemRequest {
        class,
        subtype,
        power,
    };
    debug!(?request, "creating gift");
    let Some(id) = ctx.realm.create_item(request) else {
        never_mind(ctx);
        return;
    };
    brand_switch(ctx, id);
    ctx.say("Something appears at your feet!");
}

fn acquire(ctx: &mut ActContext<'_>, class: ItemClass) {
    debug!(?class, "acquiring gift");
    let Some(id) = ctx.realm.acquire(class) else {
        never_mind(ctx);
        return;
    };
    brand_switch(ctx, id);
}

fn never_mind(ctx: &mut ActContext<'_>) {
    ctx.realm.notify(Channel::God, "\"No, never mind.\"");
}

/// One time in five, an already branded weapon or missile gets the chaos
/// brand instead.
fn brand_switch(ctx: &mut ActContext<'_>, id: ItemId) {
    let eligible = ctx.realm.item(id).is_some_and(|item| {
        matches!(item.class, ItemClass::Weapon | ItemClass::Missile)
            && !item.artefact.is_unalterable()
    });
    if !eligible || !ctx.rng.one_in(5) {
        return;
    }
    if let Some(item) = ctx
        .realm
        .item_mut(id)
        .filter(|item| item.brand != Brand::Normal)
    {
        item.brand = Brand::Chaos;
    }
}
