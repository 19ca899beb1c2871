//! Reactions to items leaving the game.
//!
//! The deity finds it funny when the player loses something that mattered:
//! the Orb, a fixed artefact, or a rune that was needed to go further.

use tracing::debug;
use trickster_core::realm::{Artefact, EntryReason, Item, ItemClass, LevelKind, RuneKind, RuneTally};
use trickster_core::{
    Chance, MessageSet, Realm, RelationshipState, StimulusOutcome, TricksterConfig,
};

struct Amusement<'a> {
    state: &'a mut RelationshipState,
    config: &'a TricksterConfig,
    realm: &'a mut dyn Realm,
    rng: &'a mut dyn Chance,
    outcomes: Vec<StimulusOutcome>,
}

impl Amusement<'_> {
    fn react(&mut self, max_interest: i32, verb: &str) {
        let messages = MessageSet::single(format!("{} {verb}.", self.config.name));
        let outcome = self.state.stimulate(
            self.config,
            &mut *self.realm,
            &mut *self.rng,
            max_interest,
            &messages,
            true,
        );
        self.outcomes.push(outcome);
    }

    /// React when `runes_gone` runes take the player below the number needed
    /// to enter the final branch.
    fn check_rune_shortage(&mut self, runes_gone: i32) {
        let tally = self.realm.rune_tally();
        if tally.in_final_branch || !tally.orb_in_final_branch {
            return;
        }
        let available = tally.available();
        if available + runes_gone >= RuneTally::NEEDED && available < RuneTally::NEEDED {
            self.react(128, "snickers");
        }
    }
}

fn quantity(item: &Item) -> i32 {
    i32::try_from(item.quantity).unwrap_or(i32::MAX)
}

/// The player lost `item`: dropped it somewhere unreachable, had it stolen,
/// left it behind.
pub fn on_item_lost(
    state: &mut RelationshipState,
    config: &TricksterConfig,
    realm: &mut dyn Realm,
    rng: &mut dyn Chance,
    item: &Item,
) -> Vec<StimulusOutcome> {
    let entry = realm.entry_cause();
    let in_abyss = realm.level_kind() == LevelKind::Abyss;
    let tally = realm.rune_tally();
    let mut amusement = Amusement {
        state,
        config,
        realm,
        rng,
        outcomes: Vec::new(),
    };

    if item.class == ItemClass::Orb {
        amusement.react(255, "laughs nastily");
    } else if item.artefact == Artefact::Fixed {
        amusement.react(128, "snickers");
    } else if let Some(rune) = item.rune {
        let carried = item.flags.been_carried;
        if carried {
            amusement.check_rune_shortage(quantity(item));
        }
        if rune == RuneKind::Unique {
            amusement.react(255, "snickers loudly");
        } else if entry.reason == EntryReason::Voluntary && !carried {
            // Went looking for the rune and never picked it up.
            match rune {
                RuneKind::Abyssal if tally.abyssal == 0 && !in_abyss => {
                    amusement.react(128, "snickers");
                }
                RuneKind::Demonic if tally.demonic == 0 => {
                    amusement.react(64, "snickers softly");
                }
                _ => {}
            }
        }
    }
    amusement.outcomes
}

/// `item` was destroyed by `cause`.
pub fn on_item_destroyed(
    state: &mut RelationshipState,
    config: &TricksterConfig,
    realm: &mut dyn Realm,
    rng: &mut dyn Chance,
    item: &Item,
    cause: &str,
) -> Vec<StimulusOutcome> {
    debug!(item = %item.name, cause, "item destroyed");
    let mut amusement = Amusement {
        state,
        config,
        realm,
        rng,
        outcomes: Vec::new(),
    };

    if item.class == ItemClass::Orb {
        amusement.react(255, "laughs nastily");
        return amusement.outcomes;
    }
    if item.artefact == Artefact::Fixed {
        amusement.react(128, "snickers");
    } else if let Some(rune) = item.rune {
        amusement.check_rune_shortage(quantity(item));
        let interest = if matches!(rune, RuneKind::Unique | RuneKind::Abyssal) {
            255
        } else {
            quantity(item).saturating_mul(64)
        };
        let verb = if interest > 128 {
            "snickers loudly"
        } else if interest > 64 {
            "snickers"
        } else {
            "snickers softly"
        };
        amusement.react(interest, verb);
    }
    amusement.outcomes
}
