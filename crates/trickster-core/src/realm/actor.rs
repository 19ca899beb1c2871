//! Who an action is performed for.

use serde::{Deserialize, Serialize};

/// The entity on whose behalf an action runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// This deity.
    Trickster,
    /// Another deity that asked this one to act.
    Patron {
        /// The patron's name.
        name: String,
        /// True when the patron wants the player punished.
        retribution: bool,
    },
}

impl Actor {
    /// A patron calling in a favour.
    pub fn favour(name: impl Into<String>) -> Self {
        Self::Patron {
            name: name.into(),
            retribution: false,
        }
    }

    /// A patron asking for punishment.
    pub fn retribution(name: impl Into<String>) -> Self {
        Self::Patron {
            name: name.into(),
            retribution: true,
        }
    }

    /// Whether this is the Trickster itself.
    pub fn is_trickster(&self) -> bool {
        matches!(self, Self::Trickster)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trickster => write!(f, "the trickster"),
            Self::Patron { name, .. } => write!(f, "{name}"),
        }
    }
}
