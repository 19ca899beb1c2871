//! What an effect handler gets to work with.

use trickster_core::realm::{Channel, LevelKind, MonsterId};
use trickster_core::{Chance, Realm};

use crate::speech::Speech;

/// Mutable context passed to each effect handler during an act.
pub struct ActContext<'a> {
    /// The host game.
    pub realm: &'a mut dyn Realm,
    /// Source of every roll.
    pub rng: &'a mut dyn Chance,
    /// The deity's name, used in speech.
    pub name: &'a str,
    /// Severity of the act, at least 1.
    pub severity: i32,
    /// Threat to the player when the act began.
    pub tension: i32,
    /// The deity may kill the player outright.
    pub nasty: bool,
    /// Hit points a miscast must leave standing; 0 allows death.
    pub lethality_margin: i32,
}

impl ActContext<'_> {
    /// Speak a line as the deity.
    pub fn speak(&mut self, speech: Speech) {
        let line = speech.line(self.name);
        self.realm.notify(Channel::God, &line);
    }

    /// Show plain narration.
    pub fn say(&mut self, text: &str) {
        self.realm.notify(Channel::Plain, text);
    }

    /// Describe a monster the player can see, e.g. `The ogre looks rather
    /// confused.`
    pub fn monster_message(&mut self, id: MonsterId, suffix: &str) {
        let text = match self.realm.monster(id) {
            Some(monster) if monster.visible && monster.in_view => {
                format!("{}{suffix}", monster.name_capitalised())
            }
            _ => return,
        };
        self.realm.notify(Channel::Monster, &text);
    }

    /// Whether the player is at or below 0 hit points.
    pub fn player_dead(&self) -> bool {
        self.realm.hp() <= 0
    }

    /// Whether the player is in the Abyss.
    pub fn in_abyss(&self) -> bool {
        self.realm.level_kind() == LevelKind::Abyss
    }
}
