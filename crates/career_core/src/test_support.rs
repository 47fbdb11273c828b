//! Fixtures shared by unit tests.

use chrono::{TimeZone, Utc};

use crate::career::{new_career, CareerSetup};
use crate::config::EconomyConfig;
use crate::data::Catalog;
use crate::models::{GameOutcome, GameResult, PlayerSnapshot, Position};

/// Seventh pick, default economy: 1000 XP, 12000 fans, four-year deal.
pub fn rookie() -> PlayerSnapshot {
    let created_at = Utc.with_ymd_and_hms(2024, 10, 1, 9, 0, 0).unwrap();
    new_career(
        &CareerSetup::new("Test Rookie", Position::SmallForward, 7),
        &EconomyConfig::default(),
        &Catalog::standard(),
        created_at,
    )
    .unwrap()
}

fn game(number: u32, outcome: GameOutcome) -> GameResult {
    let score = match outcome {
        GameOutcome::Win => "105-98",
        GameOutcome::Loss => "110-101",
    };
    GameResult {
        game_number: number,
        result: outcome,
        score: score.to_string(),
        points: 20,
        rebounds: 6,
        assists: 4,
        steals: 1,
        blocks: 0,
        is_playoff: false,
        playoff_round: None,
        playoff_game: None,
        date: Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap(),
    }
}

pub fn regular_game(number: u32, outcome: GameOutcome) -> GameResult {
    game(number, outcome)
}

pub fn playoff_game(round: u8, number: u8, outcome: GameOutcome) -> GameResult {
    GameResult {
        is_playoff: true,
        playoff_round: Some(round),
        playoff_game: Some(number),
        ..game(number as u32, outcome)
    }
}
