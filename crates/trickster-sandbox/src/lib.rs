//! An in-memory realm for driving the Trickster engine without a game.
//!
//! [`SandboxRealm`] implements every port over plain fields and journals
//! each effect as a [`RealmEvent`], so tests and tools can replay an act
//! and inspect exactly what it did.

pub mod event;
pub mod realm;

pub use event::RealmEvent;
pub use realm::SandboxRealm;
