//! Acts of the Trickster.
//!
//! An act picks one effect out of a favourable or an unfavourable pool,
//! applies it through the host's [`Realm`](trickster_core::Realm), and then
//! repairs accidental deaths the deity did not mean to cause. The
//! [`Trickster`] facade bundles configuration, relationship state and the
//! random source behind the operations a game loop calls.

pub mod catalog;
pub mod context;
pub mod engine;
pub mod hooks;
pub mod report;
pub mod safety;
pub mod speech;
pub mod trickster;

pub use catalog::{EffectKind, EffectOutcome};
pub use context::ActContext;
pub use engine::act;
pub use report::{ActReport, Branch, DrawOutcome, DrawRecord};
pub use safety::{SafetyReport, Snapshot};
pub use speech::Speech;
pub use trickster::{TickReport, Trickster};
pub use trickster_core::{TricksterError, TricksterResult};
