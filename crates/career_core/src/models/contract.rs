use serde::{Deserialize, Serialize};

/// Playing contract. Money is expressed in millions, as on the rookie scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub years: u32,
    pub total: f64,
    pub average: f64,
    /// 0 = undrafted / veteran, 1..=30 first round, >30 second round
    #[serde(default)]
    pub pick: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Undrafted,
    FirstRound,
    SecondRound,
}

impl DraftStatus {
    pub fn from_pick(pick: u32) -> Self {
        match pick {
            0 => DraftStatus::Undrafted,
            1..=30 => DraftStatus::FirstRound,
            _ => DraftStatus::SecondRound,
        }
    }
}

impl Contract {
    pub fn new(years: u32, average: f64, pick: u32) -> Self {
        Self { years, total: years as f64 * average, average, pick }
    }

    pub fn draft_status(&self) -> DraftStatus {
        DraftStatus::from_pick(self.pick)
    }

    pub fn is_rookie_scale(&self) -> bool {
        self.draft_status() == DraftStatus::FirstRound
    }
}
