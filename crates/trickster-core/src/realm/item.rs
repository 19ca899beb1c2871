//! Items and the item subsystem port.

use serde::{Deserialize, Serialize};

/// Handle to an item owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Base type of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClass {
    /// Melee weapons and launchers.
    Weapon,
    /// Ammunition and thrown items.
    Missile,
    /// Body armour, cloaks, gloves and the like.
    Armour,
    /// Rings and amulets.
    Jewellery,
    /// Spellbooks and manuals.
    Book,
    /// Magical staves.
    Staff,
    /// Edibles.
    Food,
    /// Decks, horns and other oddities.
    Miscellany,
    /// Coins.
    Gold,
    /// The Orb.
    Orb,
    /// Runes.
    Rune,
}

impl ItemClass {
    /// Classes an acquirement gift picks from, uniformly.
    pub const ACQUIRABLE: [ItemClass; 7] = [
        ItemClass::Weapon,
        ItemClass::Armour,
        ItemClass::Jewellery,
        ItemClass::Book,
        ItemClass::Staff,
        ItemClass::Food,
        ItemClass::Miscellany,
    ];
}

/// Artefact status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Artefact {
    /// An ordinary item.
    #[default]
    Mundane,
    /// A randomly generated artefact; properties may be rewritten.
    Random,
    /// A hand-designed artefact.
    Unrandom,
    /// One of the fixed legendary artefacts.
    Fixed,
}

impl Artefact {
    /// Fixed and hand-designed artefacts, which no deity may rewrite.
    pub fn is_unalterable(self) -> bool {
        matches!(self, Self::Unrandom | Self::Fixed)
    }
}

/// Weapon or ammunition brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Brand {
    /// Unbranded.
    #[default]
    Normal,
    /// Flaming.
    Flame,
    /// Freezing.
    Frost,
    /// Venomous.
    Venom,
    /// Draining.
    Draining,
    /// Unpredictable chaos.
    Chaos,
}

impl Brand {
    /// Launcher brands that alter the ammunition they fire.
    pub fn is_elemental(self) -> bool {
        matches!(self, Self::Flame | Self::Frost | Self::Venom)
    }
}

/// Kind of ammunition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileKind {
    /// Sling stones.
    Stone,
    /// Sling bullets.
    SlingBullet,
    /// Bow arrows.
    Arrow,
    /// Crossbow bolts.
    Bolt,
    /// Blowgun needles.
    Needle,
    /// Hand-thrown darts.
    Dart,
    /// Hand-thrown javelins.
    Javelin,
    /// Boulders hurled by giants.
    LargeRock,
    /// Throwing nets.
    ThrowingNet,
}

impl MissileKind {
    /// Whether this ammunition is fired from a launcher.
    pub fn needs_launcher(self) -> bool {
        matches!(
            self,
            Self::Stone | Self::SlingBullet | Self::Arrow | Self::Bolt | Self::Needle
        )
    }
}

/// Deity behind a god gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GiftOrigin {
    /// A benevolent deity, which protects its gifts.
    Benevolent,
    /// A tribal deity that guards its followers' gear jealously.
    Tribal,
    /// Any other deity.
    Other,
}

/// Kind of rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuneKind {
    /// One of a kind.
    Unique,
    /// Found in the Abyss.
    Abyssal,
    /// Found in Pandemonium.
    Demonic,
    /// Any other rune.
    Common,
}

/// Item status bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemFlags {
    /// Conjured for a limited time.
    pub summoned: bool,
    /// Visibly glowing.
    pub glowing: bool,
    /// Already carries a cosmetic description (runed, shiny, ...).
    pub cosmetic: bool,
    /// The player knows the item type.
    pub type_known: bool,
    /// The player knows the brand.
    pub brand_known: bool,
    /// Has been in the player's inventory.
    pub been_carried: bool,
}

/// An item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Handle.
    pub id: ItemId,
    /// Plain name, without article.
    pub name: String,
    /// Base type.
    pub class: ItemClass,
    /// Host-defined sub-type within the class.
    pub subtype: u16,
    /// Artefact status.
    pub artefact: Artefact,
    /// Brand.
    pub brand: Brand,
    /// Cursed items cannot be removed.
    pub cursed: bool,
    /// Ranged launcher (bow, sling, ...).
    pub launcher: bool,
    /// Ammunition kind, for missiles.
    pub missile: Option<MissileKind>,
    /// A blessed blade.
    pub blessed: bool,
    /// Origin when the item is a god gift.
    pub gift_of: Option<GiftOrigin>,
    /// Rune kind, for runes.
    pub rune: Option<RuneKind>,
    /// Stack size.
    pub quantity: u32,
    /// First enchantment.
    pub plus: i32,
    /// Second enchantment.
    pub plus2: i32,
    /// Status bits.
    pub flags: ItemFlags,
}

impl Item {
    /// A mundane, unbranded, uncursed single item.
    pub fn new(id: ItemId, name: impl Into<String>, class: ItemClass) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            subtype: 0,
            artefact: Artefact::Mundane,
            brand: Brand::Normal,
            cursed: false,
            launcher: false,
            missile: None,
            blessed: false,
            gift_of: None,
            rune: None,
            quantity: 1,
            plus: 0,
            plus2: 0,
            flags: ItemFlags::default(),
        }
    }

    /// Whether this item carries the chaos brand.
    pub fn is_chaotic(&self) -> bool {
        self.brand == Brand::Chaos
    }

    /// Ammunition that is fired from a launcher.
    pub fn fired_from_launcher(&self) -> bool {
        self.missile.is_some_and(MissileKind::needs_launcher)
    }
}

/// Sub-type request for item generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subtype {
    /// Host's choice.
    Random,
    /// Exactly this sub-type.
    Exact(u16),
    /// A random ring.
    Ring,
    /// A random amulet.
    Amulet,
    /// A cloak.
    Cloak,
    /// Random body armour scaled by power.
    BodyArmour,
}

/// Request for a randomly generated item at the player's feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Base type, or `None` for any class.
    pub class: Option<ItemClass>,
    /// Sub-type within the class.
    pub subtype: Subtype,
    /// Generation power hint.
    pub power: i32,
}

/// Item subsystem.
pub trait ItemPort {
    /// Generate an item at the player's feet, inscribed as a gift.
    fn create_item(&mut self, request: ItemRequest) -> Option<ItemId>;

    /// Generate a best-fit item of `class` for the player.
    fn acquire(&mut self, class: ItemClass) -> Option<ItemId>;

    /// Look up an item.
    fn item(&self, id: ItemId) -> Option<&Item>;

    /// Look up an item mutably.
    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item>;
}
