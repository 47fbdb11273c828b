use std::fmt;

use serde::{Deserialize, Serialize};

/// Badge rank, ordered from Locked to Legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BadgeTier {
    #[default]
    Locked,
    Bronze,
    Silver,
    Gold,
    #[serde(rename = "Hall of Fame")]
    HallOfFame,
    Legend,
}

impl BadgeTier {
    pub const LADDER: [BadgeTier; 6] = [
        BadgeTier::Locked,
        BadgeTier::Bronze,
        BadgeTier::Silver,
        BadgeTier::Gold,
        BadgeTier::HallOfFame,
        BadgeTier::Legend,
    ];

    /// One step up the ladder, `None` at Legend.
    pub fn next(self) -> Option<BadgeTier> {
        let idx = Self::LADDER.iter().position(|t| *t == self)?;
        Self::LADDER.get(idx + 1).copied()
    }

    /// Ladder index; Locked is 0.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeTier::Locked => "Locked",
            BadgeTier::Bronze => "Bronze",
            BadgeTier::Silver => "Silver",
            BadgeTier::Gold => "Gold",
            BadgeTier::HallOfFame => "Hall of Fame",
            BadgeTier::Legend => "Legend",
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
