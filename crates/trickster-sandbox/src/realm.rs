//! The in-memory realm.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};
use trickster_core::realm::{
    Alignment, Attitude, Brand, Coord, Creature, DemonClass, EntryCause, EntryReason, EquipSlot, Genus,
    Holiness, Item, ItemClass, ItemId, ItemPort, ItemRequest, LevelKind, MagicPort,
    MiscastRequest, Monster, MonsterId, MonsterPort, MonsterStatus, PlayerPort, PolymorphBias,
    Potion, RuneTally, Spell, Subtype, SummonRequest, Terrain, ThreatPort,
};
use trickster_core::{
    Actor, Channel, FaithPort, Herald, Mutation, MutationCounts, MutationPick, Stat, StatBlock,
};

use crate::event::RealmEvent;

/// Highest level any mutation reaches.
const MUTATION_CAP: i32 = 3;

/// Picks for [`MutationPick::RandomGood`], first eligible wins.
const GOOD_ORDER: [Mutation; 7] = [
    Mutation::Strong,
    Mutation::Clever,
    Mutation::Agile,
    Mutation::ToughSkin,
    Mutation::Regeneration,
    Mutation::HeatResistance,
    Mutation::ColdResistance,
];

/// Picks for [`MutationPick::RandomAny`], first eligible wins.
const ANY_ORDER: [Mutation; 9] = [
    Mutation::Clumsy,
    Mutation::Weak,
    Mutation::Dopey,
    Mutation::GreyScales,
    Mutation::Deformed,
    Mutation::Teleportitis,
    Mutation::Strong,
    Mutation::Clever,
    Mutation::Agile,
];

/// Stat changes per level of `mutation`.
fn stat_effects(mutation: Mutation) -> &'static [(Stat, i32)] {
    match mutation {
        Mutation::Strong => &[(Stat::Strength, 1)],
        Mutation::Weak => &[(Stat::Strength, -1)],
        Mutation::Clever => &[(Stat::Intelligence, 1)],
        Mutation::Dopey => &[(Stat::Intelligence, -1)],
        Mutation::Agile => &[(Stat::Dexterity, 1)],
        Mutation::Clumsy => &[(Stat::Dexterity, -1)],
        Mutation::FlexibleWeak => &[(Stat::Dexterity, 1), (Stat::Strength, -1)],
        Mutation::StrongStiff => &[(Stat::Strength, 1), (Stat::Dexterity, -1)],
        Mutation::GreyScales
        | Mutation::MetallicScales
        | Mutation::YellowScales
        | Mutation::RedScales => &[(Stat::Dexterity, -1)],
        _ => &[],
    }
}

fn creature_name(creature: Creature) -> &'static str {
    match creature {
        Creature::Demon(DemonClass::Lesser) => "lesser demon",
        Creature::Demon(DemonClass::Common) => "common demon",
        Creature::Demon(DemonClass::Greater) => "greater demon",
        Creature::ChaosSpawn => "chaos spawn",
        Creature::HolyWarrior => "holy warrior",
    }
}

fn class_name(class: ItemClass) -> &'static str {
    match class {
        ItemClass::Weapon => "weapon",
        ItemClass::Missile => "missile",
        ItemClass::Armour => "armour",
        ItemClass::Jewellery => "jewellery",
        ItemClass::Book => "book",
        ItemClass::Staff => "staff",
        ItemClass::Food => "ration",
        ItemClass::Miscellany => "curio",
        ItemClass::Gold => "gold",
        ItemClass::Orb => "Orb",
        ItemClass::Rune => "rune",
    }
}

/// A deterministic realm held entirely in memory.
///
/// Scalar fields are public so a test can set up whatever situation it
/// needs; every port call that changes something is journaled as a
/// [`RealmEvent`]. The sandbox makes no random choices of its own: teleport
/// landings come from [`SandboxRealm::plan_teleport`], mutations from
/// fixed orders or [`SandboxRealm::plan_mutation`], and miscast damage from
/// a per-tier table.
#[derive(Debug, Clone)]
pub struct SandboxRealm {
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points.
    pub hp_max: i32,
    /// Current stats.
    pub stats: StatBlock,
    /// Stat maxima.
    pub max_stats: StatBlock,
    /// A potion of might is active.
    pub might: bool,
    /// Experience points; draining takes 100.
    pub experience: i64,
    /// Negative energy resistance, 0 to 3.
    pub life_protection: i32,
    /// Torment has no effect.
    pub torment_resistant: bool,
    /// Mutation levels.
    pub mutations: MutationCounts,
    /// Answer to [`PlayerPort::can_safely_mutate`].
    pub safe_to_mutate: bool,
    /// Player position.
    pub position: Coord,
    /// Terrain under the player.
    pub terrain: Terrain,
    /// Flying or levitating.
    pub airborne: bool,
    /// Able to swim in deep water.
    pub swimming: bool,
    /// Fire resistance level.
    pub fire_resistance: i32,
    /// Forces [`PlayerPort::in_dangerous_place`] regardless of terrain.
    pub dangerous: bool,
    /// Worn and wielded items.
    pub equipment: HashMap<EquipSlot, ItemId>,
    /// Berserk rage is possible.
    pub berserk_allowed: bool,
    /// Confusion can take hold.
    pub confusable: bool,
    /// Kind of the current level.
    pub level_kind: LevelKind,
    /// How the player got here.
    pub entry: EntryCause,
    /// Runes held and needed.
    pub runes: RuneTally,
    /// The player worships the Trickster.
    pub worships: bool,
    /// The player is under the Trickster's penance.
    pub penance: bool,
    /// Threat reported for every actor.
    pub tension: i32,
    /// Acting-entity stack, innermost last.
    pub actors: Vec<Actor>,
    /// Every monster on the level.
    pub monsters: Vec<Monster>,
    /// Every item in the world.
    pub items: Vec<Item>,
    /// Damage dealt by a miscast of each tier.
    pub miscast_damage: [i32; 4],
    /// Walls nearby can turn to glass.
    pub vitrifiable: bool,
    /// Item gifts succeed.
    pub item_creation: bool,
    /// Summons succeed.
    pub summoning: bool,
    /// Dancing weapons find something to animate.
    pub weapons_to_animate: bool,
    /// Brand given to created weapons and missiles.
    pub gift_brand: Brand,
    teleports: VecDeque<(Coord, Terrain)>,
    mutation_plan: VecDeque<Mutation>,
    statuses: Vec<(MonsterId, MonsterStatus)>,
    next_monster: u32,
    next_item: u32,
    events: Vec<RealmEvent>,
}

impl Default for SandboxRealm {
    fn default() -> Self {
        Self {
            hp: 20,
            hp_max: 20,
            stats: StatBlock::new(10, 10, 10),
            max_stats: StatBlock::new(10, 10, 10),
            might: false,
            experience: 1000,
            life_protection: 0,
            torment_resistant: false,
            mutations: MutationCounts::new(),
            safe_to_mutate: true,
            position: Coord::default(),
            terrain: Terrain::Floor,
            airborne: false,
            swimming: false,
            fire_resistance: 0,
            dangerous: false,
            equipment: HashMap::new(),
            berserk_allowed: true,
            confusable: true,
            level_kind: LevelKind::Dungeon,
            entry: EntryCause::default(),
            runes: RuneTally::default(),
            worships: true,
            penance: false,
            tension: 0,
            actors: Vec::new(),
            monsters: Vec::new(),
            items: Vec::new(),
            miscast_damage: [0, 3, 8, 15],
            vitrifiable: true,
            item_creation: true,
            summoning: true,
            weapons_to_animate: true,
            gift_brand: Brand::Normal,
            teleports: VecDeque::new(),
            mutation_plan: VecDeque::new(),
            statuses: Vec::new(),
            next_monster: 1,
            next_item: 1,
            events: Vec::new(),
        }
    }
}

impl SandboxRealm {
    /// A healthy worshipper on an empty dungeon floor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reported tension.
    pub fn with_tension(mut self, tension: i32) -> Self {
        self.tension = tension;
        self
    }

    /// Set current hit points.
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    /// Brand every created weapon or missile with `brand`.
    pub fn with_gift_brand(mut self, brand: Brand) -> Self {
        self.gift_brand = brand;
        self
    }

    /// Set the damage of each miscast tier.
    pub fn with_miscast_damage(mut self, damage: [i32; 4]) -> Self {
        self.miscast_damage = damage;
        self
    }

    /// Stop worshipping and fall under penance.
    pub fn under_penance(mut self) -> Self {
        self.worships = false;
        self.penance = true;
        self
    }

    /// Put a monster on the level, assigning it a fresh id.
    pub fn add_monster(&mut self, mut monster: Monster) -> MonsterId {
        let id = MonsterId(self.next_monster);
        self.next_monster += 1;
        monster.id = id;
        self.monsters.push(monster);
        id
    }

    /// Put an item into the world, assigning it a fresh id.
    pub fn add_item(&mut self, mut item: Item) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        item.id = id;
        self.items.push(item);
        id
    }

    /// Put an item in an equipment slot.
    pub fn equip(&mut self, slot: EquipSlot, item: Item) -> ItemId {
        let id = self.add_item(item);
        self.equipment.insert(slot, id);
        id
    }

    /// Queue the landing of the next [`PlayerPort::teleport_now`]. Without
    /// a plan the player lands one tile east on open floor.
    pub fn plan_teleport(&mut self, to: Coord, terrain: Terrain) {
        self.teleports.push_back((to, terrain));
    }

    /// Queue the next random mutation, overriding the fixed orders.
    pub fn plan_mutation(&mut self, mutation: Mutation) {
        self.mutation_plan.push_back(mutation);
    }

    /// Everything that happened, in order.
    pub fn events(&self) -> &[RealmEvent] {
        &self.events
    }

    /// The journal as pretty-printed JSON.
    pub fn journal_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }

    /// Texts of every notice, in order.
    pub fn notices(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RealmEvent::Notice { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Statuses applied to `id`.
    pub fn statuses_of(&self, id: MonsterId) -> Vec<MonsterStatus> {
        self.statuses
            .iter()
            .filter(|(each, _)| *each == id)
            .map(|&(_, status)| status)
            .collect()
    }

    /// Forget the journal, keeping the world.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: RealmEvent) {
        trace!(?event, "realm event");
        self.events.push(event);
    }

    fn would_deplete(&self, mutation: Mutation) -> bool {
        stat_effects(mutation)
            .iter()
            .any(|&(stat, delta)| self.stats.get(stat) + delta <= 0)
    }

    fn shift_stats(&mut self, mutation: Mutation, sign: i32) {
        for &(stat, delta) in stat_effects(mutation) {
            *self.stats.get_mut(stat) += delta * sign;
        }
    }

    fn allowed(&self, mutation: Mutation, non_lethal: bool) -> bool {
        self.mutations.get(mutation) < MUTATION_CAP && !(non_lethal && self.would_deplete(mutation))
    }

    fn choose_mutation(&mut self, pick: MutationPick, non_lethal: bool) -> Option<Mutation> {
        let order: &[Mutation] = match pick {
            MutationPick::Specific(mutation) => return Some(mutation),
            MutationPick::RandomGood => &GOOD_ORDER,
            MutationPick::RandomAny => &ANY_ORDER,
        };
        if let Some(planned) = self.mutation_plan.pop_front() {
            return Some(planned);
        }
        order
            .iter()
            .copied()
            .find(|&mutation| self.allowed(mutation, non_lethal))
    }

    fn gift(&self, class: ItemClass) -> Item {
        let mut item = Item::new(ItemId(0), class_name(class), class);
        if matches!(class, ItemClass::Weapon | ItemClass::Missile) {
            item.brand = self.gift_brand;
        }
        item
    }

    fn monster_index(&self, id: MonsterId) -> Option<usize> {
        self.monsters.iter().position(|monster| monster.id == id)
    }
}

impl Herald for SandboxRealm {
    fn notify(&mut self, channel: Channel, text: &str) {
        debug!(?channel, text, "notice");
        self.record(RealmEvent::Notice {
            channel,
            text: text.to_string(),
        });
    }
}

impl ThreatPort for SandboxRealm {
    fn tension(&self, _actor: &Actor) -> i32 {
        self.tension
    }
}

impl FaithPort for SandboxRealm {
    fn worships_trickster(&self) -> bool {
        self.worships
    }

    fn penance_active(&self) -> bool {
        self.penance
    }

    fn current_actor(&self) -> Option<Actor> {
        self.actors.last().cloned()
    }

    fn push_actor(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    fn pop_actor(&mut self) -> Option<Actor> {
        self.actors.pop()
    }
}

impl PlayerPort for SandboxRealm {
    fn hp(&self) -> i32 {
        self.hp
    }

    fn hp_max(&self) -> i32 {
        self.hp_max
    }

    fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
    }

    fn deflate_hp_max(&mut self, amount: i32) {
        self.hp_max = (self.hp_max - amount).max(1);
        self.hp = self.hp.min(self.hp_max);
    }

    fn stats(&self) -> StatBlock {
        self.stats
    }

    fn set_stat(&mut self, stat: Stat, value: i32) {
        self.stats.set(stat, value);
    }

    fn max_stats(&self) -> StatBlock {
        self.max_stats
    }

    fn set_max_stat(&mut self, stat: Stat, value: i32) {
        self.max_stats.set(stat, value);
    }

    fn lose_stat(&mut self, stat: Option<Stat>, amount: i32, _cause: &str) {
        let stat = stat.unwrap_or(Stat::Strength);
        *self.stats.get_mut(stat) -= amount;
        self.record(RealmEvent::StatLost { stat, amount });
    }

    fn might_active(&self) -> bool {
        self.might
    }

    fn experience(&self) -> i64 {
        self.experience
    }

    fn drain_experience(&mut self) {
        self.experience = (self.experience - 100).max(0);
        self.record(RealmEvent::Drained);
    }

    fn life_protection(&self) -> i32 {
        self.life_protection
    }

    fn torment_resistant(&self) -> bool {
        self.torment_resistant
    }

    fn mutation_level(&self, mutation: Mutation) -> i32 {
        self.mutations.get(mutation)
    }

    fn mutations(&self) -> MutationCounts {
        self.mutations
    }

    fn how_mutated(&self) -> i32 {
        self.mutations.total()
    }

    fn can_safely_mutate(&self) -> bool {
        self.safe_to_mutate
    }

    fn mutate(&mut self, pick: MutationPick, non_lethal: bool) -> bool {
        let Some(mutation) = self.choose_mutation(pick, non_lethal) else {
            return false;
        };
        if !self.allowed(mutation, non_lethal) {
            return false;
        }
        let level = self.mutations.get(mutation);
        self.mutations.set(mutation, level + 1);
        self.shift_stats(mutation, 1);
        self.record(RealmEvent::Mutated { mutation });
        true
    }

    fn delete_mutation(&mut self, mutation: Mutation) -> bool {
        let level = self.mutations.get(mutation);
        if level <= 0 {
            return false;
        }
        self.mutations.set(mutation, level - 1);
        self.shift_stats(mutation, -1);
        self.record(RealmEvent::MutationDeleted { mutation });
        true
    }

    fn teleport_now(&mut self) {
        let east = (Coord::new(self.position.x + 1, self.position.y), Terrain::Floor);
        let (to, terrain) = self.teleports.pop_front().unwrap_or(east);
        self.position = to;
        self.terrain = terrain;
        self.record(RealmEvent::Teleported { to, terrain });
    }

    fn teleport_to_safety(&mut self) {
        self.position = Coord::new(self.position.x, self.position.y + 1);
        self.terrain = Terrain::Floor;
        self.record(RealmEvent::RescuedToSafety);
    }

    fn random_blink(&mut self) {
        self.record(RealmEvent::Blinked);
    }

    fn position(&self) -> Coord {
        self.position
    }

    fn terrain(&self) -> Terrain {
        self.terrain
    }

    fn airborne(&self) -> bool {
        self.airborne
    }

    fn swimming(&self) -> bool {
        self.swimming
    }

    fn fire_resistance(&self) -> i32 {
        self.fire_resistance
    }

    fn in_dangerous_place(&self) -> bool {
        self.dangerous || matches!(self.terrain, Terrain::DeepWater | Terrain::Lava)
    }

    fn equipped(&self, slot: EquipSlot) -> Option<ItemId> {
        self.equipment.get(&slot).copied()
    }

    fn can_go_berserk(&self) -> bool {
        self.berserk_allowed
    }

    fn quaff(&mut self, potion: Potion, power: i32) {
        match potion {
            Potion::Healing | Potion::HealWounds => self.hp = self.hp_max,
            Potion::Might => self.might = true,
            _ => {}
        }
        self.record(RealmEvent::Quaffed { potion, power });
    }

    fn confuse(&mut self, duration: i32) -> bool {
        if !self.confusable {
            return false;
        }
        self.record(RealmEvent::Confused { duration });
        true
    }

    fn level_kind(&self) -> LevelKind {
        self.level_kind
    }

    fn banish(&mut self, cause: &str) {
        self.level_kind = LevelKind::Abyss;
        self.entry = EntryCause {
            reason: EntryReason::Banished,
            credited: self.current_actor(),
        };
        self.record(RealmEvent::Banished {
            cause: cause.to_string(),
        });
    }

    fn entry_cause(&self) -> EntryCause {
        self.entry.clone()
    }

    fn credit_entry_cause(&mut self, actor: Actor) {
        self.entry.credited = Some(actor);
    }

    fn rune_tally(&self) -> RuneTally {
        self.runes
    }
}

impl MonsterPort for SandboxRealm {
    fn level_monsters(&self) -> Vec<MonsterId> {
        self.monsters.iter().map(|monster| monster.id).collect()
    }

    fn nearby_monsters(&self) -> Vec<MonsterId> {
        self.monsters
            .iter()
            .filter(|monster| monster.alive && monster.in_view)
            .map(|monster| monster.id)
            .collect()
    }

    fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|monster| monster.id == id)
    }

    fn polymorph(&mut self, id: MonsterId, bias: PolymorphBias) -> bool {
        let changed = self
            .monster(id)
            .is_some_and(|monster| monster.alive && monster.mutable);
        if changed {
            self.record(RealmEvent::Polymorphed { id, bias });
        }
        changed
    }

    fn add_status(&mut self, id: MonsterId, status: MonsterStatus) -> bool {
        let Some(index) = self.monster_index(id) else {
            return false;
        };
        if self.statuses.contains(&(id, status)) {
            return false;
        }
        if matches!(
            status,
            MonsterStatus::Shapeshifter | MonsterStatus::GlowingShapeshifter
        ) {
            if self.monsters[index].shapeshifter {
                return false;
            }
            self.monsters[index].shapeshifter = true;
        }
        self.statuses.push((id, status));
        self.record(RealmEvent::StatusAdded { id, status });
        true
    }

    fn set_attitude(&mut self, id: MonsterId, attitude: Attitude) {
        if let Some(monster) = self.monster_mut(id) {
            monster.attitude = attitude;
            self.record(RealmEvent::AttitudeChanged { id, attitude });
        }
    }

    fn alert(&mut self, id: MonsterId) {
        self.record(RealmEvent::Alerted { id });
    }

    fn blink(&mut self, id: MonsterId) -> bool {
        let moved = self.monster(id).is_some_and(|monster| monster.alive);
        if moved {
            self.record(RealmEvent::MonsterBlinked { id });
        }
        moved
    }

    fn summon(&mut self, request: SummonRequest) -> Option<MonsterId> {
        if !self.summoning {
            return None;
        }
        let creature = request.creature;
        let mut monster = Monster::new(MonsterId(0), creature_name(creature));
        monster.attitude = request.attitude;
        monster.god = Some(Alignment::Trickster);
        monster.genus = Genus::Demon;
        monster.holiness = if creature.is_demonic() {
            Holiness::Demonic
        } else {
            Holiness::Holy
        };
        let id = self.add_monster(monster);
        self.record(RealmEvent::Summoned {
            id,
            creature,
            attitude: request.attitude,
        });
        Some(id)
    }

    fn animate_hostile_weapons(&mut self, power: i32) -> bool {
        self.record(RealmEvent::DancingWeapons { power });
        self.weapons_to_animate
    }

    fn anger_if_hated(&mut self, _id: MonsterId) {}
}

impl ItemPort for SandboxRealm {
    fn create_item(&mut self, request: ItemRequest) -> Option<ItemId> {
        if !self.item_creation {
            return None;
        }
        let class = request.class.unwrap_or(ItemClass::Miscellany);
        let mut item = self.gift(class);
        if let Subtype::Exact(subtype) = request.subtype {
            item.subtype = subtype;
        }
        let id = self.add_item(item);
        self.record(RealmEvent::ItemCreated {
            id,
            class,
            subtype: request.subtype,
        });
        Some(id)
    }

    fn acquire(&mut self, class: ItemClass) -> Option<ItemId> {
        if !self.item_creation {
            return None;
        }
        let item = self.gift(class);
        let id = self.add_item(item);
        self.record(RealmEvent::Acquired { id, class });
        Some(id)
    }

    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl MagicPort for SandboxRealm {
    fn cast_spell(&mut self, spell: Spell, power: i32, _silent: bool) {
        self.record(RealmEvent::Cast { spell, power });
    }

    fn miscast(&mut self, request: MiscastRequest) {
        let tier = usize::from(request.tier.min(3));
        let before = self.hp;
        let mut after = before - self.miscast_damage[tier];
        if request.lethality_margin > 0 {
            after = after.max(before.min(request.lethality_margin));
        }
        self.hp = after;
        self.record(RealmEvent::Miscast {
            tier: request.tier,
            damage: before - after,
        });
    }

    fn vitrify_area(&mut self, radius: i32) -> bool {
        if self.vitrifiable {
            self.record(RealmEvent::Vitrified { radius });
        }
        self.vitrifiable
    }

    fn lightning_burst(&mut self, protect_player: bool) {
        if !protect_player {
            self.hp -= 10;
        }
        self.record(RealmEvent::Lightning {
            protected: protect_player,
        });
    }

    fn torment_player(&mut self) {
        self.hp = (self.hp + 1) / 2;
        self.record(RealmEvent::Tormented);
    }
}
