//! Core types for the Trickster deity engine.
//!
//! Holds the long-lived relationship between the player and a capricious
//! deity (standing and boredom), the drift and stimulation rules that move
//! it, the random-draw abstraction every roll goes through, and the port
//! traits a host game implements so acts can reach its player, monsters,
//! items and magic.

pub mod chance;
pub mod config;
pub mod error;
pub mod favour;
pub mod mutation;
pub mod realm;
pub mod stats;
pub mod stimulus;

pub use chance::{Chance, Ratio, ScriptedChance, draw_succeeds};
pub use config::TricksterConfig;
pub use error::{TricksterError, TricksterResult};
pub use favour::{
    ActRequest, DriftReport, FavourTier, MAX_STANDING, MID_STANDING, RelationshipState,
};
pub use mutation::{Mutation, MutationCounts, MutationPick};
pub use realm::{Actor, Channel, FaithPort, Herald, Realm};
pub use stats::{Stat, StatBlock};
pub use stimulus::{MessageCategory, MessageSet, StimulusOutcome};
