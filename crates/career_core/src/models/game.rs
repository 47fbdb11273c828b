use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl GameOutcome {
    pub fn from_win(win: bool) -> Self {
        if win {
            GameOutcome::Win
        } else {
            GameOutcome::Loss
        }
    }

    pub fn is_win(self) -> bool {
        self == GameOutcome::Win
    }
}

/// One finished game as it appears in the season log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// 1-based; playoff games use their number within the series
    pub game_number: u32,
    pub result: GameOutcome,
    pub score: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub rebounds: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub steals: u32,
    #[serde(default)]
    pub blocks: u32,
    #[serde(default)]
    pub is_playoff: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_round: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_game: Option<u8>,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

/// Raw stat line entered after a game.
///
/// `modifier` scales XP only and is clamped into the configured range
/// (0.1..=2.0 by default) before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScore {
    pub fgm: u32,
    pub fga: u32,
    #[serde(rename = "3pm")]
    pub three_pm: u32,
    #[serde(rename = "3pa")]
    pub three_pa: u32,
    pub ftm: u32,
    pub fta: u32,
    pub ast: u32,
    #[serde(rename = "to")]
    pub turnovers: u32,
    pub dreb: u32,
    pub oreb: u32,
    pub stl: u32,
    pub blk: u32,
    #[serde(rename = "fls")]
    pub fouls: u32,
    pub plus_minus: i32,
    pub dunks: u32,
    pub modifier: f64,
    pub win: bool,
    /// Final score as "team-opponent"; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

impl Default for BoxScore {
    fn default() -> Self {
        Self {
            fgm: 0,
            fga: 0,
            three_pm: 0,
            three_pa: 0,
            ftm: 0,
            fta: 0,
            ast: 0,
            turnovers: 0,
            dreb: 0,
            oreb: 0,
            stl: 0,
            blk: 0,
            fouls: 0,
            plus_minus: 0,
            dunks: 0,
            modifier: 1.0,
            win: false,
            score: None,
        }
    }
}

impl BoxScore {
    pub fn points(&self) -> u32 {
        self.fgm * 2 + self.three_pm * 3 + self.ftm
    }

    pub fn rebounds(&self) -> u32 {
        self.dreb + self.oreb
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_win(self.win)
    }
}
