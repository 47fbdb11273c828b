use std::fmt;

use thiserror::Error;

use crate::save::SnapshotError;

/// Spendable or gating resource named in an affordability rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Xp,
    Fans,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Xp => write!(f, "XP"),
            Resource::Fans => write!(f, "fans"),
        }
    }
}

/// Why a mutation was refused even though the caller could afford it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    #[error("no active career")]
    NoActiveCareer,

    #[error("unknown attribute {category}/{attribute}")]
    UnknownAttribute { category: String, attribute: String },

    #[error("unknown badge {category}/{badge}")]
    UnknownBadge { category: String, badge: String },

    #[error("upgrade quantity must be at least 1")]
    ZeroQuantity,

    #[error("{attribute} is at {level}; raising by {quantity} would pass {max}")]
    LevelCap { attribute: String, level: u8, quantity: u8, max: u8 },

    #[error("badge {badge} is already at Legend")]
    BadgeMaxed { badge: String },

    #[error("unknown endorsement {0}")]
    UnknownEndorsement(String),

    #[error("endorsement {0} is already active")]
    EndorsementAlreadyActive(String),

    #[error("endorsement {0} is not active")]
    EndorsementNotActive(String),

    #[error("endorsement {id} is not claimable for another {games_remaining} games")]
    EndorsementNotClaimable { id: String, games_remaining: u32 },

    #[error("the current contract has expired; sign a new one first")]
    ContractRequired,

    #[error("invalid contract terms: {0}")]
    InvalidContract(String),

    #[error("the regular season has {remaining} games left")]
    RegularSeasonIncomplete { remaining: u32 },

    #[error("the regular season is already complete")]
    RegularSeasonComplete,

    #[error("the team did not qualify for the playoffs")]
    MissedPlayoffs,

    #[error("the playoffs are over for this season")]
    PlayoffsFinished,

    #[error("the season has already been completed")]
    SeasonAlreadyComplete,

    #[error("invalid player: {0}")]
    InvalidPlayer(String),
}

/// Every rejection the engine can produce. None of them leave partial state behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProgressionError {
    #[error("insufficient {resource}: need {required}, have {available}")]
    InsufficientResource { resource: Resource, required: u64, available: u64 },

    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] TransitionError),

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] SnapshotError),
}

impl ProgressionError {
    pub fn insufficient(resource: Resource, required: u64, available: u64) -> Self {
        ProgressionError::InsufficientResource { resource, required, available }
    }

    /// True for affordability failures that more XP or fans would fix.
    pub fn is_affordability(&self) -> bool {
        matches!(self, ProgressionError::InsufficientResource { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProgressionError>;
