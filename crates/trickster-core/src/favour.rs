//! The player's standing with the deity and its slow drift.
//!
//! Standing is a bounded scalar where the middle means indifference and
//! both extremes mean intense attention. Boredom is a countdown that
//! stimulation raises and time wears down. Neither value is touched by effect
//! handlers directly: only the drift tick, stimulation and the post-act
//! inversion move them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chance::Chance;
use crate::config::TricksterConfig;
use crate::error::{TricksterError, TricksterResult};
use crate::realm::{Channel, Herald};

/// Upper bound of standing.
pub const MAX_STANDING: i32 = 200;

/// Neutral standing.
pub const MID_STANDING: i32 = MAX_STANDING / 2;

/// Display tier derived from standing and boredom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FavourTier {
    /// Standing above 180.
    BelovedToy,
    /// Standing above 160.
    FavouriteToy,
    /// Standing above 140.
    VerySpecialToy,
    /// Standing above 120.
    SpecialToy,
    /// Standing above 100.
    Toy,
    /// Standing above 80.
    Plaything,
    /// Standing above 60.
    SpecialPlaything,
    /// Standing above 40.
    VerySpecialPlaything,
    /// Standing above 20.
    FavouritePlaything,
    /// Standing of 20 or less.
    BelovedPlaything,
    /// The boredom countdown has run out.
    Boring,
}

impl FavourTier {
    /// Standing tiers from highest to lowest, paired with the standing a
    /// tier must exceed.
    const THRESHOLDS: [(i32, FavourTier); 9] = [
        (180, FavourTier::BelovedToy),
        (160, FavourTier::FavouriteToy),
        (140, FavourTier::VerySpecialToy),
        (120, FavourTier::SpecialToy),
        (100, FavourTier::Toy),
        (80, FavourTier::Plaything),
        (60, FavourTier::SpecialPlaything),
        (40, FavourTier::VerySpecialPlaything),
        (20, FavourTier::FavouritePlaything),
    ];

    /// Tier for the given standing and boredom countdown.
    pub fn from_state(standing: i32, boredom: i32) -> Self {
        if boredom < 1 {
            return Self::Boring;
        }
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| standing > *threshold)
            .map_or(Self::BelovedPlaything, |(_, tier)| *tier)
    }

    /// Short label, e.g. `very special toy`.
    pub fn label(self) -> &'static str {
        match self {
            Self::BelovedToy => "beloved toy",
            Self::FavouriteToy => "favourite toy",
            Self::VerySpecialToy => "very special toy",
            Self::SpecialToy => "special toy",
            Self::Toy => "toy",
            Self::Plaything => "plaything",
            Self::SpecialPlaything => "special plaything",
            Self::VerySpecialPlaything => "very special plaything",
            Self::FavouritePlaything => "favourite plaything",
            Self::BelovedPlaything => "beloved plaything",
            Self::Boring => "BORING thing",
        }
    }

    /// Full title as shown to the player.
    pub fn describe(self, name: &str) -> String {
        match self {
            Self::Boring => "A BORING thing.".to_string(),
            tier => format!("A {} of {name}.", tier.label()),
        }
    }
}

impl std::fmt::Display for FavourTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An act the drift tick asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActRequest {
    /// Whether the act may be favourable.
    pub nice: bool,
    /// Severity of the act.
    pub severity: i32,
}

/// What one drift tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DriftReport {
    /// The displayed tier changed.
    pub tier_changed: bool,
    /// The boredom countdown just reached its last point.
    pub bored_warning: bool,
    /// The deity wants to act.
    pub act_requested: Option<ActRequest>,
}

#[derive(Deserialize)]
struct RawState {
    standing: i32,
    boredom: i32,
}

/// Long-lived relationship between the player and the deity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct RelationshipState {
    standing: i32,
    boredom: i32,
}

impl TryFrom<RawState> for RelationshipState {
    type Error = TricksterError;

    fn try_from(raw: RawState) -> TricksterResult<Self> {
        Self::new(raw.standing, raw.boredom)
    }
}

impl Default for RelationshipState {
    fn default() -> Self {
        Self {
            standing: MID_STANDING,
            boredom: 0,
        }
    }
}

impl RelationshipState {
    /// Create a relationship, rejecting standing outside `0..=MAX_STANDING`.
    pub fn new(standing: i32, boredom: i32) -> TricksterResult<Self> {
        if !(0..=MAX_STANDING).contains(&standing) {
            return Err(TricksterError::StandingOutOfRange {
                standing,
                max: MAX_STANDING,
            });
        }
        Ok(Self { standing, boredom })
    }

    /// Starting relationship described by `config`.
    pub fn from_config(config: &TricksterConfig) -> TricksterResult<Self> {
        Self::new(config.initial_standing, config.initial_boredom)
    }

    /// Current standing.
    pub fn standing(&self) -> i32 {
        self.standing
    }

    /// Current boredom countdown.
    pub fn boredom(&self) -> i32 {
        self.boredom
    }

    /// Distance of standing from the middle.
    pub fn intensity(&self) -> i32 {
        (self.standing - MID_STANDING).abs()
    }

    /// Displayed tier.
    pub fn favour(&self) -> FavourTier {
        FavourTier::from_state(self.standing, self.boredom)
    }

    /// The countdown has run out.
    pub fn is_bored(&self) -> bool {
        self.boredom <= 0
    }

    /// Not bored and above the middle.
    pub fn is_nice(&self) -> bool {
        !self.is_bored() && self.standing > MID_STANDING
    }

    /// Flip standing to its mirror value across the middle.
    pub fn invert(&mut self) {
        self.standing = MAX_STANDING - self.standing;
    }

    /// Raise the countdown to `interest` if that is higher.
    pub(crate) fn raise_boredom(&mut self, interest: i32) -> bool {
        if interest > self.boredom {
            self.boredom = interest;
            true
        } else {
            false
        }
    }

    fn place(good: bool, size: i32) -> i32 {
        let offset = if good { size } else { -size };
        (MID_STANDING + offset).clamp(0, MAX_STANDING)
    }

    /// One game-time tick of drift.
    ///
    /// Standing wanders one point toward or away from the middle, with a
    /// slight bias outward, and jumps further whenever it crosses a tier
    /// boundary. Boredom wears down half the time. Notices for a changed
    /// title or imminent boredom go to `herald`.
    pub fn drift<H>(
        &mut self,
        config: &TricksterConfig,
        herald: &mut H,
        rng: &mut dyn Chance,
    ) -> DriftReport
    where
        H: Herald + ?Sized,
    {
        let before = self.favour();
        let good = self.standing > MID_STANDING;
        let delta = if config.drift_up.roll(rng) { 1 } else { -1 };

        let mut size = self.intensity() + delta;
        self.standing = Self::place(good, size);
        if self.favour() != before {
            size += delta * config.tier_damping;
            self.standing = Self::place(good, size);
        }

        let mut wore_down = false;
        if rng.coin_flip() && self.boredom > 0 {
            self.boredom -= 1;
            wore_down = true;
        }

        let after = self.favour();
        let tier_changed = after != before;
        if tier_changed {
            info!(from = %before, to = %after, standing = self.standing, "favour tier changed");
            herald.notify(
                Channel::God,
                &format!("Your title is now: {}", after.describe(&config.name)),
            );
        }

        let bored_warning = wore_down && self.boredom == 1;
        if bored_warning {
            herald.notify(Channel::God, &format!("{} is getting BORED.", config.name));
        }

        let act_requested = if config.act_chance.roll(rng) {
            Some(ActRequest {
                nice: self.is_nice(),
                severity: self.intensity(),
            })
        } else {
            None
        };
        debug!(
            standing = self.standing,
            boredom = self.boredom,
            acts = act_requested.is_some(),
            "drift tick"
        );

        DriftReport {
            tier_changed,
            bored_warning,
            act_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chance::{Ratio, ScriptedChance};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct Notes(Vec<String>);

    impl Herald for Notes {
        fn notify(&mut self, _channel: Channel, text: &str) {
            self.0.push(text.to_string());
        }
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(FavourTier::from_state(181, 5), FavourTier::BelovedToy);
        assert_eq!(FavourTier::from_state(180, 5), FavourTier::FavouriteToy);
        assert_eq!(FavourTier::from_state(101, 5), FavourTier::Toy);
        assert_eq!(FavourTier::from_state(100, 5), FavourTier::Plaything);
        assert_eq!(FavourTier::from_state(21, 5), FavourTier::FavouritePlaything);
        assert_eq!(FavourTier::from_state(20, 5), FavourTier::BelovedPlaything);
        assert_eq!(FavourTier::from_state(0, 5), FavourTier::BelovedPlaything);
    }

    #[test]
    fn boredom_overrides_standing() {
        assert_eq!(FavourTier::from_state(200, 0), FavourTier::Boring);
        assert_eq!(FavourTier::from_state(200, -3), FavourTier::Boring);
    }

    #[test]
    fn tier_descriptions() {
        let titles: Vec<String> = [0, 30, 50, 70, 90, 110, 130, 150, 170, 190]
            .into_iter()
            .map(|standing| FavourTier::from_state(standing, 1).describe("Xom"))
            .chain(std::iter::once(FavourTier::Boring.describe("Xom")))
            .collect();
        insta::assert_yaml_snapshot!(titles, @r#"
        - A beloved plaything of Xom.
        - A favourite plaything of Xom.
        - A very special plaything of Xom.
        - A special plaything of Xom.
        - A plaything of Xom.
        - A toy of Xom.
        - A special toy of Xom.
        - A very special toy of Xom.
        - A favourite toy of Xom.
        - A beloved toy of Xom.
        - A BORING thing.
        "#);
    }

    #[test]
    fn niceness() {
        assert!(RelationshipState::new(150, 10).unwrap().is_nice());
        assert!(!RelationshipState::new(150, 0).unwrap().is_nice());
        assert!(!RelationshipState::new(100, 10).unwrap().is_nice());
    }

    #[test]
    fn invert_mirrors_standing() {
        let mut state = RelationshipState::new(170, 3).unwrap();
        state.invert();
        assert_eq!(state.standing(), 30);
        state.invert();
        assert_eq!(state.standing(), 170);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(matches!(
            RelationshipState::new(-1, 0),
            Err(TricksterError::StandingOutOfRange { standing: -1, .. })
        ));
        assert!(RelationshipState::new(201, 0).is_err());
        assert!(RelationshipState::new(200, 0).is_ok());
    }

    #[test]
    fn round_trip_serde() {
        let state = RelationshipState::new(133, 40).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: RelationshipState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn deserialize_validates_standing() {
        let err = serde_json::from_str::<RelationshipState>(r#"{"standing":250,"boredom":1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn drift_moves_outward_on_success() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(130, 50).unwrap();
        let mut notes = Notes::default();
        // drift up, no boredom decay, no act
        let mut rng = ScriptedChance::new([0, 1, 19]);
        let report = state.drift(&config, &mut notes, &mut rng);
        assert_eq!(state.standing(), 131);
        assert_eq!(state.boredom(), 50);
        assert!(!report.tier_changed);
        assert!(report.act_requested.is_none());
        assert!(notes.0.is_empty());
    }

    #[test]
    fn drift_below_middle_moves_away_downward() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(70, 50).unwrap();
        let mut rng = ScriptedChance::new([0, 1, 19]);
        state.drift(&config, &mut Notes::default(), &mut rng);
        assert_eq!(state.standing(), 69);
    }

    #[test]
    fn crossing_a_tier_boundary_is_damped() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(120, 50).unwrap();
        let mut notes = Notes::default();
        let mut rng = ScriptedChance::new([0, 1, 19]);
        let report = state.drift(&config, &mut notes, &mut rng);
        assert_eq!(state.standing(), 129);
        assert!(report.tier_changed);
        assert_eq!(notes.0, ["Your title is now: A special toy of Xom."]);
    }

    #[test]
    fn drifting_inward_across_a_boundary() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(121, 50).unwrap();
        // drift down
        let mut rng = ScriptedChance::new([600, 1, 19]);
        state.drift(&config, &mut Notes::default(), &mut rng);
        assert_eq!(state.standing(), 112);
    }

    #[test]
    fn bored_warning_fires_on_reaching_one() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(150, 2).unwrap();
        let mut notes = Notes::default();
        let mut rng = ScriptedChance::new([0, 0, 19]);
        let report = state.drift(&config, &mut notes, &mut rng);
        assert_eq!(state.boredom(), 1);
        assert!(report.bored_warning);
        assert_eq!(notes.0.last().map(String::as_str), Some("Xom is getting BORED."));

        // Staying at one does not repeat the warning.
        let mut rng = ScriptedChance::new([0, 1, 19]);
        let report = state.drift(&config, &mut notes, &mut rng);
        assert!(!report.bored_warning);
    }

    #[test]
    fn running_out_of_boredom_changes_title() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(150, 1).unwrap();
        let mut notes = Notes::default();
        let mut rng = ScriptedChance::new([0, 0, 19]);
        let report = state.drift(&config, &mut notes, &mut rng);
        assert_eq!(state.boredom(), 0);
        assert!(report.tier_changed);
        assert_eq!(notes.0, ["Your title is now: A BORING thing."]);
    }

    #[test]
    fn boredom_never_drops_below_zero() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(150, 0).unwrap();
        let mut rng = ScriptedChance::new([0, 0, 19]);
        state.drift(&config, &mut Notes::default(), &mut rng);
        assert_eq!(state.boredom(), 0);
    }

    #[test]
    fn act_request_uses_intensity_and_niceness() {
        let config = TricksterConfig::default();
        let mut state = RelationshipState::new(150, 40).unwrap();
        let mut rng = ScriptedChance::new([0, 1, 0]);
        let report = state.drift(&config, &mut Notes::default(), &mut rng);
        assert_eq!(
            report.act_requested,
            Some(ActRequest {
                nice: true,
                severity: 51
            })
        );
    }

    #[test]
    fn certain_act_chance_always_requests() {
        let config = TricksterConfig::default().with_act_chance(Ratio::new(1, 1));
        let mut state = RelationshipState::new(40, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let report = state.drift(&config, &mut Notes::default(), &mut rng);
        let request = report.act_requested.unwrap();
        assert!(!request.nice);
    }

    proptest! {
        #[test]
        fn standing_stays_in_bounds(
            standing in 0..=MAX_STANDING,
            boredom in 0..40i32,
            seed in any::<u64>(),
            ticks in 1..400usize,
        ) {
            let config = TricksterConfig::default();
            let mut state = RelationshipState::new(standing, boredom).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut notes = Notes::default();
            let mut warnings = 0;
            let mut crossings = 0;
            for _ in 0..ticks {
                let before = state.boredom();
                let report = state.drift(&config, &mut notes, &mut rng);
                prop_assert!((0..=MAX_STANDING).contains(&state.standing()));
                prop_assert!(state.boredom() >= 0);
                if before == 2 && state.boredom() == 1 {
                    crossings += 1;
                }
                if report.bored_warning {
                    warnings += 1;
                }
            }
            prop_assert_eq!(warnings, crossings);
        }
    }
}
