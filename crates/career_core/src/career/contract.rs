//! Playing contracts and the season boundary
//!
//! A contract of `years` years allows `years` calls to
//! [`ContractLifecycle::complete_season`]. Once they are used up a new
//! contract must be signed before any further game is played.

use tracing::info;

use crate::config::SeasonConfig;
use crate::data::contract_for_pick;
use crate::error::{Result, TransitionError};
use crate::models::{Contract, PlayerSnapshot, PlayoffStats};

pub struct ContractLifecycle;

impl ContractLifecycle {
    /// Sign `years` at `average_salary` (millions per year). Starts the
    /// contract's first season from scratch.
    pub fn sign(
        snapshot: &PlayerSnapshot,
        years: u32,
        average_salary: f64,
        draft_pick: u32,
    ) -> Result<PlayerSnapshot> {
        if years == 0 {
            return Err(TransitionError::InvalidContract("years must be at least 1".into()).into());
        }
        if !average_salary.is_finite() || average_salary < 0.0 {
            return Err(TransitionError::InvalidContract(format!(
                "average salary must be a non-negative number, got {average_salary}"
            ))
            .into());
        }
        Ok(Self::install(snapshot, Contract::new(years, average_salary, draft_pick)))
    }

    /// Sign the rookie-scale deal for a draft slot.
    pub fn sign_rookie_scale(snapshot: &PlayerSnapshot, draft_pick: u32) -> PlayerSnapshot {
        Self::install(snapshot, contract_for_pick(draft_pick))
    }

    fn install(snapshot: &PlayerSnapshot, contract: Contract) -> PlayerSnapshot {
        let mut next = snapshot.clone();
        info!(
            years = contract.years,
            total = contract.total,
            average = contract.average,
            pick = contract.pick,
            "contract signed"
        );
        next.contract = Some(contract);
        next.clear_season();
        next.completed_seasons = 0;
        next
    }

    pub fn years_remaining(snapshot: &PlayerSnapshot) -> u32 {
        snapshot.years_remaining()
    }

    pub fn needs_new_contract(snapshot: &PlayerSnapshot) -> bool {
        snapshot.needs_new_contract()
    }

    /// Close out the current season: one contract year is used up.
    pub fn complete_season(
        snapshot: &PlayerSnapshot,
        won_championship: bool,
        config: &SeasonConfig,
    ) -> Result<PlayerSnapshot> {
        if snapshot.needs_new_contract() {
            return Err(TransitionError::ContractRequired.into());
        }
        if snapshot.season_completed() {
            return Err(TransitionError::SeasonAlreadyComplete.into());
        }
        let played = snapshot.regular_season_played();
        if played < config.regular_season_games {
            return Err(TransitionError::RegularSeasonIncomplete {
                remaining: config.regular_season_games - played,
            }
            .into());
        }

        let mut next = snapshot.clone();
        next.completed_seasons += 1;
        next.playoff_stats = Some(PlayoffStats { eliminated: true, won_championship });
        info!(
            completed_seasons = next.completed_seasons,
            years_remaining = next.years_remaining(),
            won_championship,
            "season completed"
        );
        Ok(next)
    }

    pub fn start_new_season(snapshot: &PlayerSnapshot) -> Result<PlayerSnapshot> {
        if snapshot.needs_new_contract() {
            return Err(TransitionError::ContractRequired.into());
        }
        let mut next = snapshot.clone();
        next.clear_season();
        info!(season = next.completed_seasons + 1, "new season started");
        Ok(next)
    }
}
