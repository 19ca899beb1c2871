//! Configuration for a Trickster relationship.

use serde::{Deserialize, Serialize};

use crate::chance::Ratio;
use crate::error::{TricksterError, TricksterResult};
use crate::favour::MAX_STANDING;

/// Tunable constants of the deity.
///
/// Every field has a default, so a JSON document only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TricksterConfig {
    /// RNG seed for reproducible acts.
    pub seed: u64,
    /// Name used in the deity's notices.
    pub name: String,
    /// Standing at the start of the relationship.
    pub initial_standing: i32,
    /// Boredom countdown at the start of the relationship.
    pub initial_boredom: i32,
    /// Minimum drawn interest that can raise the boredom countdown.
    pub interest_threshold: i32,
    /// Upper clamp applied to drawn interest.
    pub interest_cap: i32,
    /// Chance that a drift tick moves standing away from the middle.
    pub drift_up: Ratio,
    /// Extra drift applied when a tick crosses a tier boundary.
    pub tier_damping: i32,
    /// Chance per drift tick that the deity acts.
    pub act_chance: Ratio,
    /// Chance that a nice request really gets the favourable pool.
    pub nice_roll: Ratio,
    /// Chance after an act that standing flips to its mirror value.
    pub inversion: Ratio,
}

impl Default for TricksterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            name: "Xom".to_string(),
            initial_standing: MAX_STANDING / 2,
            initial_boredom: 0,
            interest_threshold: 12,
            interest_cap: 255,
            drift_up: Ratio::new(511, 1000),
            tier_damping: 8,
            act_chance: Ratio::new(1, 20),
            nice_roll: Ratio::new(4, 5),
            inversion: Ratio::new(1, 2),
        }
    }
}

impl TricksterConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> TricksterResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the deity's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial standing (clamped to the valid range).
    pub fn with_standing(mut self, standing: i32) -> Self {
        self.initial_standing = standing.clamp(0, MAX_STANDING);
        self
    }

    /// Set the initial boredom countdown.
    pub fn with_boredom(mut self, boredom: i32) -> Self {
        self.initial_boredom = boredom;
        self
    }

    /// Set the per-tick act chance.
    pub fn with_act_chance(mut self, chance: Ratio) -> Self {
        self.act_chance = chance;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> TricksterResult<()> {
        if !(0..=MAX_STANDING).contains(&self.initial_standing) {
            return Err(TricksterError::StandingOutOfRange {
                standing: self.initial_standing,
                max: MAX_STANDING,
            });
        }
        if self.interest_cap <= 0 {
            return Err(TricksterError::InvalidConfig(format!(
                "interest cap must be positive, got {}",
                self.interest_cap
            )));
        }
        if self.interest_threshold > self.interest_cap {
            return Err(TricksterError::InvalidConfig(format!(
                "interest threshold {} exceeds cap {}",
                self.interest_threshold, self.interest_cap
            )));
        }
        if self.tier_damping < 0 {
            return Err(TricksterError::InvalidConfig(format!(
                "tier damping must not be negative, got {}",
                self.tier_damping
            )));
        }
        for (label, ratio) in [
            ("drift_up", self.drift_up),
            ("act_chance", self.act_chance),
            ("nice_roll", self.nice_roll),
            ("inversion", self.inversion),
        ] {
            if ratio.denominator <= 0 {
                return Err(TricksterError::InvalidConfig(format!(
                    "{label} has a non-positive denominator ({ratio})"
                )));
            }
        }
        Ok(())
    }
}
