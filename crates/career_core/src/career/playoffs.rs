//! Playoff bracket bookkeeping
//!
//! Series are best-of-(2·series_wins − 1). The bracket position is derived
//! from the playoff games already in the log; nothing else is stored.

use serde::{Deserialize, Serialize};

use crate::config::SeasonConfig;
use crate::error::{Result, TransitionError};
use crate::models::PlayerSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesState {
    InProgress,
    Won,
    Eliminated,
    Champion,
}

/// Standing in the latest playoff round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStatus {
    pub round: u8,
    pub wins: u8,
    pub losses: u8,
    pub state: SeriesState,
}

impl SeriesStatus {
    pub fn is_series_over(&self) -> bool {
        self.state != SeriesState::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonPhase {
    RegularSeason,
    Playoffs,
    /// No games left to play this season
    SeasonComplete,
    ContractExpired,
}

pub fn series_status(snapshot: &PlayerSnapshot, config: &SeasonConfig) -> Option<SeriesStatus> {
    let round = snapshot.playoff_games().filter_map(|g| g.playoff_round).max()?;
    let (wins, losses) = snapshot
        .playoff_games()
        .filter(|g| g.playoff_round == Some(round))
        .fold((0u8, 0u8), |(w, l), g| {
            if g.result.is_win() {
                (w.saturating_add(1), l)
            } else {
                (w, l.saturating_add(1))
            }
        });

    let state = if losses >= config.series_wins {
        SeriesState::Eliminated
    } else if wins >= config.series_wins {
        if round >= config.playoff_rounds {
            SeriesState::Champion
        } else {
            SeriesState::Won
        }
    } else {
        SeriesState::InProgress
    };
    Some(SeriesStatus { round, wins, losses, state })
}

/// (round, game) the next playoff game occupies, `None` once the run is over.
pub fn next_playoff_slot(snapshot: &PlayerSnapshot, config: &SeasonConfig) -> Option<(u8, u8)> {
    match series_status(snapshot, config) {
        None => Some((1, 1)),
        Some(status) => match status.state {
            SeriesState::InProgress => Some((status.round, status.wins + status.losses + 1)),
            SeriesState::Won => Some((status.round + 1, 1)),
            SeriesState::Eliminated | SeriesState::Champion => None,
        },
    }
}

/// Slot for the next playoff game, or why no playoff game can be played.
pub fn require_playoff_slot(snapshot: &PlayerSnapshot, config: &SeasonConfig) -> Result<(u8, u8)> {
    let played = snapshot.regular_season_played();
    if played < config.regular_season_games {
        return Err(TransitionError::RegularSeasonIncomplete {
            remaining: config.regular_season_games - played,
        }
        .into());
    }
    if snapshot.made_playoffs == Some(false) {
        return Err(TransitionError::MissedPlayoffs.into());
    }
    next_playoff_slot(snapshot, config).ok_or_else(|| TransitionError::PlayoffsFinished.into())
}

pub fn won_championship(snapshot: &PlayerSnapshot, config: &SeasonConfig) -> bool {
    series_status(snapshot, config).is_some_and(|s| s.state == SeriesState::Champion)
}

pub fn season_phase(snapshot: &PlayerSnapshot, config: &SeasonConfig) -> SeasonPhase {
    if snapshot.needs_new_contract() {
        return SeasonPhase::ContractExpired;
    }
    if snapshot.season_completed() {
        return SeasonPhase::SeasonComplete;
    }
    if snapshot.regular_season_played() < config.regular_season_games {
        return SeasonPhase::RegularSeason;
    }
    if snapshot.made_playoffs == Some(false) || next_playoff_slot(snapshot, config).is_none() {
        return SeasonPhase::SeasonComplete;
    }
    SeasonPhase::Playoffs
}
