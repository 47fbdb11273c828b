use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::playoffs::require_playoff_slot;
use super::season::generate_score;
use crate::config::EconomyConfig;
use crate::endorsement::advance_all;
use crate::error::{Result, TransitionError};
use crate::models::{BoxScore, GameResult, PlayerSnapshot};
use crate::rewards::{GameRewards, RewardCalculator};

/// A game entered from a box score, with what it paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayedGame {
    pub game: GameResult,
    pub rewards: GameRewards,
}

/// Record the next game of the season from a stat line.
///
/// Regular-season games are numbered in order. Once the regular season is
/// full the game lands in the next open playoff slot. `rng` only supplies a
/// score when the stat line has none.
pub fn play_game<R: Rng + ?Sized>(
    snapshot: &PlayerSnapshot,
    stats: &BoxScore,
    config: &EconomyConfig,
    rng: &mut R,
) -> Result<(PlayerSnapshot, PlayedGame)> {
    if snapshot.needs_new_contract() {
        return Err(TransitionError::ContractRequired.into());
    }
    if snapshot.season_completed() {
        return Err(TransitionError::SeasonAlreadyComplete.into());
    }

    let played = snapshot.regular_season_played();
    let (game_number, playoff_slot) = if played < config.season.regular_season_games {
        (played + 1, None)
    } else {
        let (round, game) = require_playoff_slot(snapshot, &config.season)?;
        (game as u32, Some((round, game)))
    };
    let is_playoff = playoff_slot.is_some();

    let calculator = RewardCalculator::new(&config.rewards);
    let rewards = calculator.evaluate(stats, is_playoff, snapshot.fan_base);
    let outcome = stats.outcome();

    let game = GameResult {
        game_number,
        result: outcome,
        score: stats.score.clone().unwrap_or_else(|| generate_score(rng, outcome)),
        points: stats.points(),
        rebounds: stats.rebounds(),
        assists: stats.ast,
        steals: stats.stl,
        blocks: stats.blk,
        is_playoff,
        playoff_round: playoff_slot.map(|(round, _)| round),
        playoff_game: playoff_slot.map(|(_, game)| game),
        date: Utc::now(),
    };

    let mut next = snapshot.clone();
    next.push_game(game.clone());
    next.credit(rewards.xp, rewards.fans, 0);
    advance_all(&mut next.active_endorsements);

    info!(
        game = game_number,
        playoff = is_playoff,
        result = ?outcome,
        xp = rewards.xp,
        fans = rewards.fans,
        "game recorded"
    );
    Ok((next, PlayedGame { game, rewards }))
}
