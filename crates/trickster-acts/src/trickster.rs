//! The deity as a game loop sees it.
//!
//! [`Trickster`] owns configuration, relationship state and a seeded
//! random source, and forwards each call to the engine, the drift and the
//! item hooks.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use trickster_core::realm::Item;
use trickster_core::{
    DriftReport, MessageSet, Realm, RelationshipState, StimulusOutcome, TricksterConfig,
    TricksterResult,
};

use crate::engine;
use crate::hooks;
use crate::report::ActReport;

/// What one tick did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Standing and boredom drift.
    pub drift: DriftReport,
    /// The act the drift asked for, if any.
    pub act: Option<ActReport>,
}

/// The deity as a game loop sees it.
///
/// Owns the configuration, the relationship state and a seeded random
/// source. The realm is borrowed per call.
pub struct Trickster {
    config: TricksterConfig,
    state: RelationshipState,
    rng: StdRng,
}

impl std::fmt::Debug for Trickster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trickster")
            .field("name", &self.config.name)
            .field("standing", &self.state.standing())
            .field("boredom", &self.state.boredom())
            .field("favour", &self.state.favour())
            .finish()
    }
}

impl Trickster {
    /// Create a deity from a validated configuration.
    pub fn new(config: TricksterConfig) -> TricksterResult<Self> {
        config.validate()?;
        let state = RelationshipState::from_config(&config)?;
        Ok(Self::assemble(config, state))
    }

    /// Resume a deity with previously saved state.
    pub fn with_state(config: TricksterConfig, state: RelationshipState) -> TricksterResult<Self> {
        config.validate()?;
        Ok(Self::assemble(config, state))
    }

    fn assemble(config: TricksterConfig, state: RelationshipState) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, state, rng }
    }

    /// Configuration in use.
    pub fn config(&self) -> &TricksterConfig {
        &self.config
    }

    /// Current standing and boredom.
    pub fn state(&self) -> &RelationshipState {
        &self.state
    }

    /// Mutable standing and boredom, for hosts restoring a save.
    pub fn state_mut(&mut self) -> &mut RelationshipState {
        &mut self.state
    }

    /// Act now. See [`engine::act`].
    pub fn act(&mut self, realm: &mut dyn Realm, niceness: bool, severity: i32) -> ActReport {
        engine::act(
            &mut self.state,
            &self.config,
            realm,
            &mut self.rng,
            niceness,
            severity,
        )
    }

    /// Advance one game-time tick, acting if the drift calls for it.
    pub fn tick(&mut self, realm: &mut dyn Realm) -> TickReport {
        let drift = self.state.drift(&self.config, realm, &mut self.rng);
        let act = drift
            .act_requested
            .map(|request| self.act(realm, request.nice, request.severity));
        TickReport { drift, act }
    }

    /// Let the player entertain the deity.
    pub fn stimulate(
        &mut self,
        realm: &mut dyn Realm,
        max_interest: i32,
        messages: &MessageSet,
        force: bool,
    ) -> StimulusOutcome {
        self.state.stimulate(
            &self.config,
            realm,
            &mut self.rng,
            max_interest,
            messages,
            force,
        )
    }

    /// React to the player losing `item`. See [`hooks::on_item_lost`].
    pub fn on_item_lost(&mut self, realm: &mut dyn Realm, item: &Item) -> Vec<StimulusOutcome> {
        hooks::on_item_lost(&mut self.state, &self.config, realm, &mut self.rng, item)
    }

    /// React to `item` being destroyed by `cause`. See
    /// [`hooks::on_item_destroyed`].
    pub fn on_item_destroyed(
        &mut self,
        realm: &mut dyn Realm,
        item: &Item,
        cause: &str,
    ) -> Vec<StimulusOutcome> {
        hooks::on_item_destroyed(&mut self.state, &self.config, realm, &mut self.rng, item, cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trickster_core::TricksterError;

    #[test]
    fn new_takes_state_from_config() {
        let config = TricksterConfig::default().with_standing(150).with_boredom(30);
        let trickster = Trickster::new(config).unwrap();
        assert_eq!(trickster.state().standing(), 150);
        assert_eq!(trickster.state().boredom(), 30);
        assert!(trickster.state().is_nice());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = TricksterConfig {
            interest_threshold: 300,
            ..TricksterConfig::default()
        };
        assert!(matches!(
            Trickster::new(config),
            Err(TricksterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn debug_shows_relationship() {
        let trickster = Trickster::new(TricksterConfig::default()).unwrap();
        let debug = format!("{trickster:?}");
        assert!(debug.contains("Xom"));
        assert!(debug.contains("standing: 100"));
    }
}
