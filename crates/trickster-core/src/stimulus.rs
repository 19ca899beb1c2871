//! Stimulation: interesting events that keep the deity from getting bored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chance::Chance;
use crate::config::TricksterConfig;
use crate::favour::RelationshipState;
use crate::realm::{Actor, Channel, FaithPort, Herald};

/// Tiered reactions to a stimulating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCategory {
    /// Amusement.
    Normal,
    /// Fascination.
    Intrigued,
}

impl MessageCategory {
    /// Reactions from mildest to wildest.
    fn reactions(self) -> [&'static str; 6] {
        match self {
            Self::Normal => [
                "is interested.",
                "is mildly amused.",
                "is amused.",
                "is highly amused!",
                "thinks this is hilarious!",
                "roars with laughter!",
            ],
            Self::Intrigued => [
                "is interested.",
                "is very interested.",
                "is extremely interested.",
                "is intrigued!",
                "is very intrigued!",
                "is fascinated!",
            ],
        }
    }
}

/// Index into a six-entry reaction table, 0 mildest.
pub fn reaction_tier(interest: i32) -> usize {
    match interest {
        i if i > 200 => 5,
        i if i > 100 => 4,
        i if i > 75 => 3,
        i if i > 50 => 2,
        i if i > 25 => 1,
        _ => 0,
    }
}

/// The messages a stimulation may show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSet {
    /// A tiered category, prefixed with the deity's name.
    Category(MessageCategory),
    /// The same text at every tier.
    Single(String),
}

impl MessageSet {
    /// Shorthand for [`MessageSet::Single`].
    pub fn single(text: impl Into<String>) -> Self {
        Self::Single(text.into())
    }

    /// Text for the given interest.
    pub fn message(&self, name: &str, interest: i32) -> String {
        match self {
            Self::Category(category) => {
                let reaction = category.reactions()[reaction_tier(interest)];
                format!("{name} {reaction}")
            }
            Self::Single(text) => text.clone(),
        }
    }
}

impl From<MessageCategory> for MessageSet {
    fn from(category: MessageCategory) -> Self {
        Self::Category(category)
    }
}

/// Result of a stimulation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StimulusOutcome {
    /// Nothing was drawn: the player does not worship, the event carried no
    /// interest, or the deity itself caused it.
    Ignored,
    /// Interest was drawn.
    Drawn {
        /// The drawn interest after clamping.
        interest: i32,
        /// The boredom countdown was raised.
        stimulated: bool,
        /// A reaction was shown.
        announced: bool,
    },
}

impl RelationshipState {
    /// React to an event worth up to `max_interest`.
    ///
    /// Draws an interest below `max_interest` and raises the boredom
    /// countdown to it when it beats both the current countdown and the
    /// configured threshold. A reaction is shown when that happens, or
    /// always when `force` is set.
    pub fn stimulate<R>(
        &mut self,
        config: &TricksterConfig,
        realm: &mut R,
        rng: &mut dyn Chance,
        max_interest: i32,
        messages: &MessageSet,
        force: bool,
    ) -> StimulusOutcome
    where
        R: FaithPort + Herald + ?Sized,
    {
        if !realm.worships_trickster() || max_interest <= 0 {
            return StimulusOutcome::Ignored;
        }
        if realm.current_actor() == Some(Actor::Trickster) {
            return StimulusOutcome::Ignored;
        }

        let interest = rng.below(max_interest).min(config.interest_cap);
        debug!(max_interest, interest, "stimulation drawn");

        let stimulated = interest >= config.interest_threshold && self.raise_boredom(interest);
        let announced = stimulated || force;
        if announced {
            realm.notify(Channel::God, &messages.message(&config.name, interest));
        }

        StimulusOutcome::Drawn {
            interest,
            stimulated,
            announced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chance::ScriptedChance;
    use proptest::prelude::*;

    struct Shrine {
        worships: bool,
        actors: Vec<Actor>,
        notes: Vec<String>,
    }

    impl Shrine {
        fn worshipping() -> Self {
            Self {
                worships: true,
                actors: Vec::new(),
                notes: Vec::new(),
            }
        }
    }

    impl FaithPort for Shrine {
        fn worships_trickster(&self) -> bool {
            self.worships
        }

        fn penance_active(&self) -> bool {
            false
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

    impl Herald for Shrine {
        fn notify(&mut self, _channel: Channel, text: &str) {
            self.notes.push(text.to_string());
        }
    }

    fn amused() -> MessageSet {
        MessageCategory::Normal.into()
    }

    #[test]
    fn raises_boredom_and_announces() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(100, 5).unwrap();
        let mut shrine = Shrine::worshipping();
        let mut rng = ScriptedChance::new([80]);
        let outcome = state.stimulate(&config, &mut shrine, &mut rng, 100, &amused(), false);
        assert_eq!(
            outcome,
            StimulusOutcome::Drawn {
                interest: 80,
                stimulated: true,
                announced: true
            }
        );
        assert_eq!(state.boredom(), 80);
        assert_eq!(shrine.notes, ["Xom is highly amused!"]);
    }

    #[test]
    fn below_threshold_is_silent() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(100, 0).unwrap();
        let mut shrine = Shrine::worshipping();
        let mut rng = ScriptedChance::new([11]);
        state.stimulate(&config, &mut shrine, &mut rng, 100, &amused(), false);
        assert_eq!(state.boredom(), 0);
        assert!(shrine.notes.is_empty());
    }

    #[test]
    fn forced_message_without_stimulation() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(100, 90).unwrap();
        let mut shrine = Shrine::worshipping();
        let mut rng = ScriptedChance::new([30]);
        let outcome = state.stimulate(
            &config,
            &mut shrine,
            &mut rng,
            128,
            &MessageSet::single("Xom snickers."),
            true,
        );
        assert!(matches!(
            outcome,
            StimulusOutcome::Drawn {
                stimulated: false,
                announced: true,
                ..
            }
        ));
        assert_eq!(state.boredom(), 90);
        assert_eq!(shrine.notes, ["Xom snickers."]);
    }

    #[test]
    fn self_stimulation_is_ignored() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(100, 0).unwrap();
        let mut shrine = Shrine::worshipping();
        shrine.push_actor(Actor::Trickster);
        let mut rng = ScriptedChance::new([200]);
        let outcome = state.stimulate(&config, &mut shrine, &mut rng, 255, &amused(), true);
        assert_eq!(outcome, StimulusOutcome::Ignored);
        assert!(rng.history().is_empty());
        assert!(shrine.notes.is_empty());
    }

    #[test]
    fn patron_acting_still_stimulates() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(100, 0).unwrap();
        let mut shrine = Shrine::worshipping();
        shrine.push_actor(Actor::favour("Nemelex"));
        let mut rng = ScriptedChance::new([40]);
        state.stimulate(&config, &mut shrine, &mut rng, 255, &amused(), false);
        assert_eq!(state.boredom(), 40);
    }

    #[test]
    fn non_worshippers_and_dull_events_are_ignored() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(100, 0).unwrap();
        let mut shrine = Shrine::worshipping();
        shrine.worships = false;
        let mut rng = ScriptedChance::new([]);
        assert_eq!(
            state.stimulate(&config, &mut shrine, &mut rng, 255, &amused(), true),
            StimulusOutcome::Ignored
        );
        shrine.worships = true;
        assert_eq!(
            state.stimulate(&config, &mut shrine, &mut rng, 0, &amused(), true),
            StimulusOutcome::Ignored
        );
    }

    #[test]
    fn interest_is_capped() {
        let config = TricksterConfig {
            interest_cap: 50,
            ..TricksterConfig::default()
        };
        let mut state = RelationshipState::new(100, 0).unwrap();
        let mut shrine = Shrine::worshipping();
        let mut rng = ScriptedChance::new([240]);
        state.stimulate(&config, &mut shrine, &mut rng, 255, &amused(), false);
        assert_eq!(state.boredom(), 50);
    }

    #[test]
    fn reaction_tiers() {
        let set = MessageSet::Category(MessageCategory::Intrigued);
        let lines: Vec<String> = [0, 26, 51, 76, 101, 201]
            .into_iter()
            .map(|interest| set.message("Xom", interest))
            .collect();
        insta::assert_yaml_snapshot!(lines, @r#"
        - Xom is interested.
        - Xom is very interested.
        - Xom is extremely interested.
        - Xom is intrigued!
        - Xom is very intrigued!
        - Xom is fascinated!
        "#);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(reaction_tier(25), 0);
        assert_eq!(reaction_tier(26), 1);
        assert_eq!(reaction_tier(200), 4);
        assert_eq!(reaction_tier(201), 5);
    }

    proptest! {
        #[test]
        fn never_lowers_boredom(
            boredom in 0..300i32,
            max_interest in -5..400i32,
            raw in any::<i32>(),
            force in any::<bool>(),
        ) {
            let config = TricksterConfig::default();
            let mut state = RelationshipState::new(100, boredom).unwrap();
            let mut shrine = Shrine::worshipping();
            let mut rng = ScriptedChance::new([raw]);
            let outcome = state.stimulate(&config, &mut shrine, &mut rng, max_interest, &amused(), force);
            prop_assert!(state.boredom() >= boredom);
            if let StimulusOutcome::Drawn { interest, stimulated, announced } = outcome {
                if interest <= boredom || interest < 12 {
                    prop_assert!(!stimulated);
                    prop_assert_eq!(state.boredom(), boredom);
                    prop_assert_eq!(announced, force);
                }
                prop_assert_eq!(shrine.notes.len(), usize::from(announced));
            } else {
                prop_assert!(shrine.notes.is_empty());
            }
        }
    }
}
