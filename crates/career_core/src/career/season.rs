//! Season simulation
//!
//! Simulated games fill the log with plausible stat lines. They move the
//! record, the streak and endorsement countdowns but pay no XP or fans.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::playoffs::require_playoff_slot;
use crate::config::SeasonConfig;
use crate::endorsement::advance_all;
use crate::error::{Result, TransitionError};
use crate::models::{GameOutcome, GameResult, PlayerSnapshot};

/// Outcome of a bulk regular-season simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Set once the regular season is full
    pub made_playoffs: Option<bool>,
}

/// Final score with the winner's total first.
pub fn generate_score<R: Rng + ?Sized>(rng: &mut R, outcome: GameOutcome) -> String {
    let base: u32 = rng.gen_range(90..=109);
    let margin: u32 = rng.gen_range(1..=15);
    match outcome {
        GameOutcome::Win => format!("{}-{}", base, base - margin),
        GameOutcome::Loss => format!("{}-{}", base + margin, base),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeasonSimulator<'a> {
    config: &'a SeasonConfig,
}

impl<'a> SeasonSimulator<'a> {
    pub fn new(config: &'a SeasonConfig) -> Self {
        Self { config }
    }

    /// Regular-season slots still open.
    pub fn games_remaining(&self, snapshot: &PlayerSnapshot) -> u32 {
        self.config.regular_season_games.saturating_sub(snapshot.regular_season_played())
    }

    /// Wins reachable from here: between the current wins and the current
    /// wins plus `games`, never above a full season.
    pub fn clamp_target(&self, current_wins: u32, games: u32, target_wins: u32) -> u32 {
        let reachable = current_wins.saturating_add(games);
        let ceiling = self.config.regular_season_games.min(reachable).max(current_wins);
        target_wins.clamp(current_wins, ceiling)
    }

    /// Play out `games_remaining` regular-season games so the team finishes
    /// on `target_wins`. Win/loss order is shuffled with `rng`.
    pub fn simulate_to_target<R: Rng + ?Sized>(
        &self,
        snapshot: &PlayerSnapshot,
        target_wins: u32,
        games_remaining: u32,
        made_playoffs: bool,
        rng: &mut R,
    ) -> Result<(PlayerSnapshot, SimulationSummary)> {
        if snapshot.needs_new_contract() {
            return Err(TransitionError::ContractRequired.into());
        }
        if snapshot.season_completed() {
            return Err(TransitionError::SeasonAlreadyComplete.into());
        }
        let open = self.games_remaining(snapshot);
        if open == 0 || snapshot.playoff_games().next().is_some() {
            return Err(TransitionError::RegularSeasonComplete.into());
        }

        let games = games_remaining.min(open);
        let current_wins = snapshot.team_record.wins;
        let target = self.clamp_target(current_wins, games, target_wins);
        let wins = target - current_wins;
        let losses = games - wins;

        let mut outcomes: Vec<GameOutcome> = std::iter::repeat(GameOutcome::Win)
            .take(wins as usize)
            .chain(std::iter::repeat(GameOutcome::Loss).take(losses as usize))
            .collect();
        outcomes.shuffle(rng);

        let first_number = snapshot
            .regular_season_games()
            .map(|g| g.game_number)
            .max()
            .unwrap_or(0)
            + 1;

        let mut next = snapshot.clone();
        for (offset, outcome) in outcomes.into_iter().enumerate() {
            let game = simulated_regular_game(rng, first_number + offset as u32, outcome);
            next.push_game(game);
            advance_all(&mut next.active_endorsements);
        }

        let decided = self.games_remaining(&next) == 0;
        if decided {
            next.made_playoffs = Some(made_playoffs);
        }

        let summary = SimulationSummary {
            games,
            wins,
            losses,
            made_playoffs: decided.then_some(made_playoffs),
        };
        info!(
            games,
            wins,
            losses,
            record = %format!("{}-{}", next.team_record.wins, next.team_record.losses),
            "regular season simulated"
        );
        Ok((next, summary))
    }

    /// Win chance for a simulated playoff game.
    pub fn playoff_win_probability(&self, overall_rating: u32) -> f64 {
        let scaled = overall_rating as f64 / 99.0 * self.config.playoff_win_scale;
        scaled.min(self.config.playoff_win_cap).max(0.0)
    }

    /// Resolve the next playoff game at random, weighted by overall rating.
    pub fn simulate_playoff_game<R: Rng + ?Sized>(
        &self,
        snapshot: &PlayerSnapshot,
        rng: &mut R,
    ) -> Result<(PlayerSnapshot, GameResult)> {
        if snapshot.needs_new_contract() {
            return Err(TransitionError::ContractRequired.into());
        }
        if snapshot.season_completed() {
            return Err(TransitionError::SeasonAlreadyComplete.into());
        }
        let (round, game_number) = require_playoff_slot(snapshot, self.config)?;

        let win = rng.gen_bool(self.playoff_win_probability(snapshot.overall_rating));
        let outcome = GameOutcome::from_win(win);
        let rating_factor = snapshot.overall_rating as f64 / 99.0;
        let mut scaled = |span: f64, floor: u32| -> u32 {
            (rng.gen::<f64>() * span * rating_factor).floor() as u32 + floor
        };
        let points = scaled(20.0, 10);
        let rebounds = scaled(10.0, 2);
        let assists = scaled(8.0, 2);
        let steals = scaled(3.0, 0);
        let blocks = scaled(3.0, 0);

        let game = GameResult {
            game_number: game_number as u32,
            result: outcome,
            score: generate_score(rng, outcome),
            points,
            rebounds,
            assists,
            steals,
            blocks,
            is_playoff: true,
            playoff_round: Some(round),
            playoff_game: Some(game_number),
            date: Utc::now(),
        };

        let mut next = snapshot.clone();
        next.push_game(game.clone());
        advance_all(&mut next.active_endorsements);
        info!(round, game = game_number, result = ?outcome, "playoff game simulated");
        Ok((next, game))
    }
}

fn simulated_regular_game<R: Rng + ?Sized>(
    rng: &mut R,
    game_number: u32,
    outcome: GameOutcome,
) -> GameResult {
    GameResult {
        game_number,
        result: outcome,
        score: generate_score(rng, outcome),
        points: rng.gen_range(15..=34),
        rebounds: rng.gen_range(5..=14),
        assists: rng.gen_range(3..=10),
        steals: rng.gen_range(0..=3),
        blocks: rng.gen_range(0..=2),
        is_playoff: false,
        playoff_round: None,
        playoff_game: None,
        date: Utc::now(),
    }
}
