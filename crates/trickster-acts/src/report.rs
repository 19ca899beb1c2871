//! Traces of what an act did.

use serde::{Deserialize, Serialize};
use trickster_core::Actor;

use crate::catalog::EffectKind;
use crate::safety::SafetyReport;

/// Which pool an act drew from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// Gifts, help and pranks.
    Favourable,
    /// Punishments and nasty surprises.
    Unfavourable,
}

/// How one weighted draw of the pool went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// The weighted roll failed.
    Missed,
    /// The roll passed but a post-draw guard refused.
    Blocked,
    /// The handler ran and found nothing to do.
    Skipped,
    /// The handler ran and the effect happened.
    Applied,
}

/// One weighted draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// The entry drawn against.
    pub effect: EffectKind,
    /// What happened.
    pub outcome: DrawOutcome,
}

/// Complete trace of one act.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActReport {
    /// On whose behalf the act ran.
    pub actor: Actor,
    /// Niceness imposed by a patron, if one asked.
    pub forced_niceness: Option<bool>,
    /// Pool drawn from.
    pub branch: Branch,
    /// Severity after clamping.
    pub severity: i32,
    /// Tension measured for the actor.
    pub tension: i32,
    /// The deity was allowed to kill.
    pub nasty: bool,
    /// Margin passed to miscasts.
    pub lethality_margin: i32,
    /// Every weighted draw in order.
    pub draws: Vec<DrawRecord>,
    /// The effect that ended the act, or `None` if the player was already
    /// dead when a pass began.
    pub applied: Option<EffectKind>,
    /// Corrections made afterwards.
    pub safety: SafetyReport,
    /// Standing flipped to its mirror value.
    pub inverted: bool,
}

impl ActReport {
    /// Draws that ended in [`DrawOutcome::Applied`].
    pub fn applied_count(&self) -> usize {
        self.draws
            .iter()
            .filter(|draw| draw.outcome == DrawOutcome::Applied)
            .count()
    }
}
