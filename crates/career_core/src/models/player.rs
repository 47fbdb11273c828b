//! Player snapshot - the root aggregate of a career
//!
//! A snapshot is a plain value. Engines read one snapshot and return a new
//! one; nothing mutates a snapshot that a caller may still be holding.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::badge::BadgeTier;
use super::contract::Contract;
use super::endorsement::ActiveEndorsement;
use super::game::{GameOutcome, GameResult};

/// category -> attribute -> level (25..=99)
pub type AttributeMap = BTreeMap<String, BTreeMap<String, u8>>;

/// category -> badge -> tier
pub type BadgeMap = BTreeMap<String, BTreeMap<String, BadgeTier>>;

pub const DEFAULT_OVERALL_RATING: u32 = 60;

/// Playing position. Saves written by older clients may carry any string,
/// which is kept as-is in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
    Other(String),
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Position::PointGuard => "Point Guard",
            Position::ShootingGuard => "Shooting Guard",
            Position::SmallForward => "Small Forward",
            Position::PowerForward => "Power Forward",
            Position::Center => "Center",
            Position::Other(name) => name,
        }
    }

    /// Accepts display names and the usual abbreviations (PG, SG, SF, PF, C).
    pub fn parse(value: &str) -> Position {
        match value.trim().to_ascii_lowercase().as_str() {
            "point guard" | "pg" => Position::PointGuard,
            "shooting guard" | "sg" => Position::ShootingGuard,
            "small forward" | "sf" => Position::SmallForward,
            "power forward" | "pf" => Position::PowerForward,
            "center" | "c" => Position::Center,
            _ => Position::Other(value.to_string()),
        }
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Position::parse(&value)
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regular-season win/loss record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn games(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins = self.wins.saturating_add(1),
            GameOutcome::Loss => self.losses = self.losses.saturating_add(1),
        }
    }

    /// Win percentage in 0.0..=100.0
    pub fn win_percentage(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games() as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffStats {
    pub eliminated: bool,
    pub won_championship: bool,
}

/// Full state of one career at one point in time.
///
/// Field order is the save order; maps are ordered so that saving the same
/// snapshot twice yields identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub position: Position,
    #[serde(default = "default_overall_rating")]
    pub overall_rating: u32,
    pub xp: u64,
    pub fan_base: u64,
    pub bank_balance: u64,
    pub completed_games: Vec<GameResult>,
    #[serde(default)]
    pub team_record: TeamRecord,
    #[serde(default)]
    pub win_streak: u32,
    #[serde(default)]
    pub active_endorsements: Vec<ActiveEndorsement>,
    pub attributes: AttributeMap,
    #[serde(default)]
    pub badges: BadgeMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,
    #[serde(default)]
    pub completed_seasons: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playoff_stats: Option<PlayoffStats>,
    /// Set by a season simulation; `None` until the regular season is decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub made_playoffs: Option<bool>,
    pub created_at: DateTime<Utc>,
}

fn default_overall_rating() -> u32 {
    DEFAULT_OVERALL_RATING
}

impl PlayerSnapshot {
    pub fn attribute_level(&self, category: &str, attribute: &str) -> Option<u8> {
        self.attributes.get(category).and_then(|attrs| attrs.get(attribute)).copied()
    }

    pub fn badge_tier(&self, category: &str, badge: &str) -> Option<BadgeTier> {
        self.badges.get(category).and_then(|badges| badges.get(badge)).copied()
    }

    pub fn active_endorsement(&self, endorsement_id: &str) -> Option<&ActiveEndorsement> {
        self.active_endorsements.iter().find(|a| a.endorsement_id == endorsement_id)
    }

    pub fn regular_season_games(&self) -> impl Iterator<Item = &GameResult> {
        self.completed_games.iter().filter(|g| !g.is_playoff)
    }

    pub fn playoff_games(&self) -> impl Iterator<Item = &GameResult> {
        self.completed_games.iter().filter(|g| g.is_playoff)
    }

    pub fn regular_season_played(&self) -> u32 {
        self.regular_season_games().count() as u32
    }

    /// Years left on the current contract; zero when there is no contract.
    pub fn years_remaining(&self) -> u32 {
        self.contract
            .as_ref()
            .map(|c| c.years.saturating_sub(self.completed_seasons))
            .unwrap_or(0)
    }

    pub fn needs_new_contract(&self) -> bool {
        self.years_remaining() == 0
    }

    pub fn season_completed(&self) -> bool {
        self.playoff_stats.map(|s| s.eliminated).unwrap_or(false)
    }

    /// Append a finished game, keeping record and streak in step.
    /// Only regular-season games count toward the team record.
    pub(crate) fn push_game(&mut self, game: GameResult) {
        if !game.is_playoff {
            self.team_record.record(game.result);
        }
        self.win_streak = match game.result {
            GameOutcome::Win => self.win_streak.saturating_add(1),
            GameOutcome::Loss => 0,
        };
        self.completed_games.push(game);
    }

    /// Recompute team record and win streak from the game log.
    pub(crate) fn rebuild_record(&mut self) {
        let games = std::mem::take(&mut self.completed_games);
        self.team_record = TeamRecord::default();
        self.win_streak = 0;
        for game in games {
            self.push_game(game);
        }
    }

    pub(crate) fn credit(&mut self, xp: u64, fans: u64, money: u64) {
        self.xp = self.xp.saturating_add(xp);
        self.fan_base = self.fan_base.saturating_add(fans);
        self.bank_balance = self.bank_balance.saturating_add(money);
    }

    /// Debit XP, flooring at zero.
    pub(crate) fn spend_xp(&mut self, amount: u64) {
        self.xp = self.xp.saturating_sub(amount);
    }

    /// Clear per-season progress. Contract and completed seasons are untouched.
    pub(crate) fn clear_season(&mut self) {
        self.completed_games.clear();
        self.team_record = TeamRecord::default();
        self.win_streak = 0;
        self.playoff_stats = None;
        self.made_playoffs = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_round_trips_display_name() {
        let json = serde_json::to_string(&Position::PowerForward).unwrap();
        assert_eq!(json, "\"Power Forward\"");
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Position::PowerForward);
    }

    #[test]
    fn test_position_keeps_unknown_names() {
        let pos: Position = serde_json::from_str("\"Stretch Four\"").unwrap();
        assert_eq!(pos, Position::Other("Stretch Four".to_string()));
        assert_eq!(serde_json::to_string(&pos).unwrap(), "\"Stretch Four\"");
    }

    #[test]
    fn test_position_abbreviations() {
        assert_eq!(Position::parse("pg"), Position::PointGuard);
        assert_eq!(Position::parse("C"), Position::Center);
    }

    #[test]
    fn test_team_record_percentage() {
        let mut record = TeamRecord::default();
        assert_eq!(record.win_percentage(), 0.0);
        record.record(GameOutcome::Win);
        record.record(GameOutcome::Win);
        record.record(GameOutcome::Loss);
        assert!((record.win_percentage() - 66.666).abs() < 0.01);
    }
}
